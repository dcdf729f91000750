//! Per-frame orchestration
//!
//! One tick runs the whole frame in a fixed order: player movement/collision,
//! item collection and effects, hunter pursuit, then win/lose evaluation.
//! Everything is synchronous and single-threaded; the only time source is the
//! pausable game clock.

use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::config::{Difficulty, WorldConfig};

use super::clock::GameClock;
use super::item::ItemKind;
use super::maze::{Maze, MazeError};
use super::player::Player;

/// Input sampled for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    /// Move one layer deeper into the maze (+z)
    pub deeper: bool,
    /// Move one layer back toward the surface (-z)
    pub shallower: bool,
    pub dash: bool,
    /// Pause toggle (one-shot)
    pub pause: bool,
}

/// Current phase of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    Playing,
    Paused,
    Won,
    Lost,
}

/// Events produced by a tick, consumed by the presentation layer
#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    ItemCollected(ItemKind),
    /// A collected teleport found no free spot; nothing happened
    TeleportFailed,
    Won { elapsed_secs: f64 },
    /// A hunter touched the player
    Caught,
}

/// Complete run state
#[derive(Debug, Clone)]
pub struct GameState {
    pub config: WorldConfig,
    pub difficulty: Difficulty,
    pub seed: u64,
    pub maze: Maze,
    pub player: Player,
    pub clock: GameClock,
    pub phase: GamePhase,
    pub time_ticks: u64,
    rng: Pcg32,
}

impl GameState {
    /// Generate a fresh level and place the player in the start zone
    pub fn new(seed: u64, config: WorldConfig, difficulty: Difficulty) -> Result<Self, MazeError> {
        let mut rng = Pcg32::seed_from_u64(seed);
        let maze = Maze::generate(config, difficulty, &mut rng)?;
        Ok(Self::with_maze(seed, maze, difficulty, rng))
    }

    /// Build a state around an existing maze (tests, replays)
    pub fn with_maze(seed: u64, maze: Maze, difficulty: Difficulty, rng: Pcg32) -> Self {
        let player = Player::new(maze.start.center, maze.start.z);
        Self {
            config: maze.world,
            difficulty,
            seed,
            maze,
            player,
            clock: GameClock::started(),
            phase: GamePhase::Playing,
            time_ticks: 0,
            rng,
        }
    }

    /// Restart the current level: same obstacle layout, items uncollected,
    /// hunters back at spawn, player at the start zone, clock at zero.
    pub fn reset(&mut self) {
        self.maze.reset_entities();
        self.player
            .respawn(self.maze.start.center, self.maze.start.z);
        self.clock.reset();
        self.clock.start();
        self.phase = GamePhase::Playing;
        self.time_ticks = 0;
        log::info!("level reset");
    }
}

/// Advance the game by one frame
pub fn tick(state: &mut GameState, input: &TickInput) -> Vec<GameEvent> {
    let mut events = Vec::new();

    if input.pause {
        match state.phase {
            GamePhase::Playing => {
                state.phase = GamePhase::Paused;
                state.clock.pause();
                return events;
            }
            GamePhase::Paused => {
                state.phase = GamePhase::Playing;
                state.clock.start();
            }
            _ => {}
        }
    }
    if state.phase != GamePhase::Playing {
        return events;
    }

    state.time_ticks += 1;
    let now = state.clock.elapsed_secs();

    // 1. Player movement with collision resolution
    state.player.handle_movement(&state.maze, input, now);

    // 2. Item collection; each effect fires exactly once, on this frame
    let player_disc = state.player.as_disc();
    let mut collected = Vec::new();
    for item in &mut state.maze.items {
        if item.touches(&player_disc) {
            item.collected = true;
            collected.push(item.kind);
        }
    }
    for kind in collected {
        log::info!("item collected: {}", kind.as_str());
        events.push(GameEvent::ItemCollected(kind));
        match kind {
            ItemKind::SpeedBoost => state.player.apply_speed_boost(now),
            ItemKind::DashCharge => state.player.reduce_dash_cooldown(),
            ItemKind::Teleport => {
                if !state.player.teleport(&state.maze, &mut state.rng, now) {
                    events.push(GameEvent::TeleportFailed);
                }
            }
        }
    }

    // 3. Hunter pursuit, reading the already-validated player position
    let (player_pos, player_z) = (state.player.pos, state.player.z);
    for hunter in &mut state.maze.hunters {
        hunter.pursue(player_pos, player_z, &mut state.rng);
    }

    // 4. Lose, then win evaluation
    let player_disc = state.player.as_disc();
    if state
        .maze
        .hunters
        .iter()
        .any(|hunter| hunter.caught(&player_disc))
    {
        state.phase = GamePhase::Lost;
        state.clock.pause();
        log::info!("caught by a hunter after {} ticks", state.time_ticks);
        events.push(GameEvent::Caught);
        return events;
    }

    if player_disc.overlaps_disc(&state.maze.end) {
        let elapsed_secs = state.clock.elapsed_secs();
        state.phase = GamePhase::Won;
        state.clock.pause();
        log::info!("reached the end zone in {elapsed_secs:.2}s");
        events.push(GameEvent::Won { elapsed_secs });
    }

    events
}
