//! Depthmaze headless runner
//!
//! Drives the simulation at a fixed 60 Hz with a simple scripted pilot that
//! pushes toward the end zone, in place of the interactive presentation
//! layer. A winning run is recorded to the on-disk leaderboard.
//!
//! Usage: depthmaze [difficulty] [seed]

use std::path::Path;
use std::thread;
use std::time::Duration;

use depthmaze::consts::SIM_DT;
use depthmaze::sim::{GameEvent, GamePhase, GameState, TickInput, tick};
use depthmaze::{Difficulty, Leaderboard, WorldConfig};

const LEADERBOARD_PATH: &str = "leaderboard.json";
/// Give up after two minutes of simulated play
const MAX_TICKS: u64 = 60 * 120;

fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let difficulty = args
        .next()
        .and_then(|s| Difficulty::from_str(&s))
        .unwrap_or_default();
    let seed: u64 = args
        .next()
        .and_then(|s| s.parse().ok())
        .unwrap_or_else(rand::random);

    log::info!("starting {} run, seed {seed}", difficulty.as_str());

    let mut state = match GameState::new(seed, WorldConfig::default(), difficulty) {
        Ok(state) => state,
        Err(err) => {
            log::error!("could not build maze: {err}");
            std::process::exit(1);
        }
    };

    let outcome = run(&mut state);

    match outcome {
        Some(elapsed_secs) => {
            println!(
                "won in {elapsed_secs:.2}s ({} ticks, seed {seed})",
                state.time_ticks
            );
            let path = Path::new(LEADERBOARD_PATH);
            let mut board = Leaderboard::load(path);
            let rank = board.rank_of(difficulty, elapsed_secs);
            board.add_score(difficulty, elapsed_secs);
            if let Err(err) = board.save(path) {
                log::warn!("could not save leaderboard: {err}");
            } else if let Some(rank) = rank {
                println!("leaderboard rank #{rank} on {}", difficulty.as_str());
            }
        }
        None => println!(
            "run ended without a win after {} ticks (phase {:?})",
            state.time_ticks, state.phase
        ),
    }
}

/// Tick the sim to completion; returns the winning time if the pilot made it
fn run(state: &mut GameState) -> Option<f64> {
    while state.phase == GamePhase::Playing && state.time_ticks < MAX_TICKS {
        if state.time_ticks.is_multiple_of(300) {
            log::debug!(
                "layer {:.0}: {} silhouettes in view",
                state.player.z,
                state.maze.cross_section(state.player.z).len()
            );
        }
        let input = pilot_input(state);
        for event in tick(state, &input) {
            match event {
                GameEvent::Won { elapsed_secs } => return Some(elapsed_secs),
                GameEvent::Caught => log::info!("caught by a hunter"),
                GameEvent::ItemCollected(kind) => log::info!("picked up {}", kind.as_str()),
                GameEvent::TeleportFailed => log::debug!("teleport fizzled"),
            }
        }
        thread::sleep(Duration::from_secs_f32(SIM_DT));
    }
    None
}

/// Minimal stand-in for player input: head straight for the end zone and
/// dash every couple of seconds.
fn pilot_input(state: &GameState) -> TickInput {
    let end = state.maze.end;
    let pos = state.player.pos;

    TickInput {
        right: pos.x < end.center.x - 1.0,
        left: pos.x > end.center.x + 1.0,
        down: pos.y < end.center.y - 1.0,
        up: pos.y > end.center.y + 1.0,
        deeper: state.player.z < end.z,
        shallower: state.player.z > end.z,
        dash: state.time_ticks.is_multiple_of(120),
        pause: false,
    }
}
