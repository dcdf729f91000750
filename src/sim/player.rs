//! Player kinematics
//!
//! Per-frame integration order (fixed, observable):
//! acceleration from input -> apply to velocity -> friction on idle axes ->
//! clamp planar speed -> dash trigger/expiry -> planar move with sliding ->
//! depth move (independent, no sliding) -> expire timed effects.
//!
//! All timestamps are seconds on the pausable game clock, never frame counts.

use glam::{Vec2, Vec3};
use rand::Rng;

use crate::consts::*;

use super::collision::resolve_planar_move;
use super::maze::Maze;
use super::shape::Disc;
use super::tick::TickInput;

#[derive(Debug, Clone)]
pub struct Player {
    pub pos: Vec2,
    pub z: f32,
    pub radius: f32,
    pub vel: Vec3,
    /// Current planar speed cap; raised temporarily by speed boosts
    pub max_speed: f32,
    acceleration: f32,
    friction: f32,
    z_step: f32,

    pub is_dashing: bool,
    dash_speed: f32,
    dash_duration: f64,
    /// Shrinks as DashCharge items are collected, floored at DASH_COOLDOWN_MIN
    pub dash_cooldown: f64,
    last_dash_time: f64,
    dash_end_time: f64,

    /// Cosmetic flag for the presentation layer, cleared after a short window
    pub is_teleporting: bool,
    teleport_end_time: f64,

    pub speed_boost_active: bool,
    speed_boost_end_time: f64,
}

impl Player {
    pub fn new(pos: Vec2, z: f32) -> Self {
        Self {
            pos,
            z,
            radius: PLAYER_RADIUS,
            vel: Vec3::ZERO,
            max_speed: PLAYER_MAX_SPEED,
            acceleration: PLAYER_ACCEL,
            friction: PLAYER_FRICTION,
            z_step: PLAYER_Z_STEP,
            is_dashing: false,
            dash_speed: DASH_SPEED,
            dash_duration: DASH_DURATION,
            dash_cooldown: DASH_COOLDOWN,
            // Dash available immediately
            last_dash_time: -DASH_COOLDOWN,
            dash_end_time: 0.0,
            is_teleporting: false,
            teleport_end_time: 0.0,
            speed_boost_active: false,
            speed_boost_end_time: 0.0,
        }
    }

    /// The player's collision silhouette on their current layer
    pub fn as_disc(&self) -> Disc {
        Disc::new(self.pos, self.z, self.radius)
    }

    /// Advance one frame of movement against the maze
    pub fn handle_movement(&mut self, maze: &Maze, input: &TickInput, now: f64) {
        let mut accel = Vec2::ZERO;
        if input.up {
            accel.y -= self.acceleration;
        }
        if input.down {
            accel.y += self.acceleration;
        }
        if input.left {
            accel.x -= self.acceleration;
        }
        if input.right {
            accel.x += self.acceleration;
        }

        self.vel.x += accel.x;
        self.vel.y += accel.y;

        // Friction only on axes with no input this frame
        if accel.x == 0.0 {
            self.vel.x *= 1.0 - self.friction;
        }
        if accel.y == 0.0 {
            self.vel.y *= 1.0 - self.friction;
        }
        self.vel.z *= 1.0 - self.friction;

        // Planar speed cap; the dash impulse below is allowed to exceed it
        self.vel.x = self.vel.x.clamp(-self.max_speed, self.max_speed);
        self.vel.y = self.vel.y.clamp(-self.max_speed, self.max_speed);

        if input.dash {
            self.try_dash(now);
        }
        self.update_dash(now);

        // Planar displacement with sliding resolution
        let planar_vel = self.vel.truncate();
        if let Some(new_pos) = resolve_planar_move(maze, &self.as_disc(), planar_vel) {
            self.pos = new_pos;
        }

        // Depth is resolved separately and never slides
        let mut dz = 0.0;
        if input.deeper {
            dz += self.z_step;
        }
        if input.shallower {
            dz -= self.z_step;
        }
        if dz != 0.0 {
            let candidate = Disc::new(self.pos, self.z + dz, self.radius);
            if maze.is_position_allowed(&candidate) {
                self.z += dz;
            } else {
                self.vel.z = 0.0;
            }
        }

        self.handle_timers(now);
    }

    /// Attempt to start a dash. Refused while dashing or cooling down; the
    /// impulse follows the current velocity direction, so a standing player
    /// gets no impulse at all.
    pub fn try_dash(&mut self, now: f64) {
        if self.is_dashing || now - self.last_dash_time < self.dash_cooldown {
            return;
        }
        self.is_dashing = true;
        self.last_dash_time = now;
        self.dash_end_time = now + self.dash_duration;

        if self.vel.length() != 0.0 {
            self.vel += self.vel.normalize() * self.dash_speed;
        }
        log::debug!("dash activated at t={now:.2}");
    }

    /// Expire a finished dash. Velocity is renormalized to exactly
    /// `max_speed` (direction preserved) so the impulse cannot linger.
    pub fn update_dash(&mut self, now: f64) {
        if self.is_dashing && now >= self.dash_end_time {
            self.is_dashing = false;
            if self.vel.length() > 0.0 {
                self.vel = self.vel.normalize() * self.max_speed;
            }
            log::debug!("dash ended");
        }
    }

    /// Jump to a random free spot on the current layer.
    ///
    /// Samples up to TELEPORT_MAX_ATTEMPTS uniform in-bounds positions and
    /// takes the first one the maze allows. Failure is a harmless no-op.
    pub fn teleport<R: Rng>(&mut self, maze: &Maze, rng: &mut R, now: f64) -> bool {
        for _ in 0..TELEPORT_MAX_ATTEMPTS {
            let candidate = Disc::new(
                Vec2::new(
                    rng.random_range(self.radius..=maze.world.width - self.radius),
                    rng.random_range(self.radius..=maze.world.height - self.radius),
                ),
                self.z,
                self.radius,
            );
            if maze.is_position_allowed(&candidate) {
                self.pos = candidate.center;
                self.is_teleporting = true;
                self.teleport_end_time = now + TELEPORT_FLASH_DURATION;
                log::debug!(
                    "teleported to ({:.0}, {:.0}, {:.0})",
                    self.pos.x,
                    self.pos.y,
                    self.z
                );
                return true;
            }
        }
        log::debug!("teleport failed: no free position found");
        false
    }

    /// Raise the speed cap for a fixed duration. Re-activation while a boost
    /// is already running is rejected, so boosts never stack.
    pub fn apply_speed_boost(&mut self, now: f64) {
        if self.speed_boost_active {
            log::debug!("speed boost already active, ignoring");
            return;
        }
        self.max_speed += SPEED_BOOST_AMOUNT;
        self.speed_boost_active = true;
        self.speed_boost_end_time = now + SPEED_BOOST_DURATION;
        log::debug!("speed boost activated");
    }

    /// Shorten the dash cooldown, floored at DASH_COOLDOWN_MIN
    pub fn reduce_dash_cooldown(&mut self) {
        self.dash_cooldown = (self.dash_cooldown - DASH_COOLDOWN_STEP).max(DASH_COOLDOWN_MIN);
        log::debug!("dash cooldown reduced to {:.1}s", self.dash_cooldown);
    }

    /// Expire timed effects whose window has passed
    pub fn handle_timers(&mut self, now: f64) {
        if self.speed_boost_active && now >= self.speed_boost_end_time {
            self.max_speed -= SPEED_BOOST_AMOUNT;
            self.speed_boost_active = false;
            log::debug!("speed boost ended");
        }
        if self.is_teleporting && now >= self.teleport_end_time {
            self.is_teleporting = false;
        }
    }

    /// Move back to a spawn point with cleared momentum (level restart).
    /// Dash state rewinds to its initial values: the restart also resets the
    /// game clock to zero, so timestamps from the old run must not survive.
    pub fn respawn(&mut self, pos: Vec2, z: f32) {
        self.pos = pos;
        self.z = z;
        self.vel = Vec3::ZERO;
        self.is_dashing = false;
        self.dash_cooldown = DASH_COOLDOWN;
        self.last_dash_time = -DASH_COOLDOWN;
        self.dash_end_time = 0.0;
        self.is_teleporting = false;
        if self.speed_boost_active {
            self.max_speed -= SPEED_BOOST_AMOUNT;
            self.speed_boost_active = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::WorldConfig;
    use crate::sim::maze::Maze;
    use crate::sim::shape::Sphere;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn open_maze() -> Maze {
        let world = WorldConfig::default();
        Maze {
            world,
            obstacles: Vec::new(),
            items: Vec::new(),
            hunters: Vec::new(),
            start: Disc::new(Vec2::new(ZONE_MARGIN, ZONE_MARGIN), 0.0, ZONE_RADIUS),
            end: Disc::new(
                Vec2::new(world.width - ZONE_MARGIN, world.height - ZONE_MARGIN),
                world.z_max,
                ZONE_RADIUS,
            ),
        }
    }

    fn mid_player() -> Player {
        Player::new(Vec2::new(600.0, 300.0), 100.0)
    }

    #[test]
    fn test_acceleration_and_clamp() {
        let maze = open_maze();
        let mut player = mid_player();
        let input = TickInput {
            right: true,
            ..Default::default()
        };
        for frame in 0..60 {
            player.handle_movement(&maze, &input, frame as f64 / 60.0);
        }
        assert_eq!(player.vel.x, player.max_speed);
        assert!(player.pos.x > 600.0);
    }

    #[test]
    fn test_friction_decays_idle_axes() {
        let maze = open_maze();
        let mut player = mid_player();
        player.vel = Vec3::new(4.0, 0.0, 0.0);
        player.handle_movement(&maze, &TickInput::default(), 0.0);
        assert!((player.vel.x - 4.0 * 0.9).abs() < 1e-5);
    }

    #[test]
    fn test_dash_blocked_during_cooldown() {
        let mut player = mid_player();
        player.vel = Vec3::new(3.0, 0.0, 0.0);
        player.try_dash(0.0);
        assert!(player.is_dashing);
        player.update_dash(0.3); // dash over, cooldown still running
        assert!(!player.is_dashing);

        let vel_before = player.vel;
        player.try_dash(0.5); // 0.5s since last dash < 1.0s cooldown
        assert!(!player.is_dashing);
        assert_eq!(player.vel, vel_before);
    }

    #[test]
    fn test_dash_from_standstill_adds_no_impulse() {
        let mut player = mid_player();
        player.try_dash(10.0);
        assert!(player.is_dashing);
        assert_eq!(player.vel, Vec3::ZERO);
    }

    #[test]
    fn test_dash_expiry_renormalizes_to_max_speed() {
        let mut player = mid_player();
        player.vel = Vec3::new(3.0, 4.0, 0.0);
        player.try_dash(0.0);
        assert!(player.vel.length() > player.max_speed);
        player.update_dash(0.25);
        assert!(!player.is_dashing);
        assert!((player.vel.length() - player.max_speed).abs() < 1e-4);
        // Direction preserved
        assert!(player.vel.x > 0.0 && player.vel.y > 0.0);
    }

    #[test]
    fn test_speed_boost_does_not_stack_and_expires() {
        let mut player = mid_player();
        let base = player.max_speed;
        player.apply_speed_boost(0.0);
        assert_eq!(player.max_speed, base + SPEED_BOOST_AMOUNT);
        player.apply_speed_boost(1.0); // rejected
        assert_eq!(player.max_speed, base + SPEED_BOOST_AMOUNT);
        player.handle_timers(SPEED_BOOST_DURATION + 0.1);
        assert!(!player.speed_boost_active);
        assert_eq!(player.max_speed, base);
    }

    #[test]
    fn test_dash_cooldown_reduction_floors() {
        let mut player = mid_player();
        for _ in 0..20 {
            player.reduce_dash_cooldown();
        }
        assert_eq!(player.dash_cooldown, DASH_COOLDOWN_MIN);
    }

    #[test]
    fn test_teleport_lands_on_a_legal_spot() {
        let mut maze = open_maze();
        maze.obstacles
            .push(Sphere::new(Vec2::new(600.0, 300.0), 100.0, 80.0));
        let mut player = Player::new(Vec2::new(200.0, 300.0), 100.0);
        let mut rng = Pcg32::seed_from_u64(5);

        assert!(player.teleport(&maze, &mut rng, 0.0));
        assert!(player.is_teleporting);
        assert_eq!(player.z, 100.0); // same layer
        assert!(maze.is_position_allowed(&player.as_disc()));
        player.handle_timers(TELEPORT_FLASH_DURATION + 0.1);
        assert!(!player.is_teleporting);
    }

    #[test]
    fn test_teleport_failure_is_a_noop() {
        // One enormous sphere blankets the player's whole layer
        let mut maze = open_maze();
        maze.obstacles
            .push(Sphere::new(Vec2::new(600.0, 300.0), 100.0, 1000.0));
        let mut player = mid_player();
        let before = player.pos;
        let mut rng = Pcg32::seed_from_u64(5);

        assert!(!player.teleport(&maze, &mut rng, 0.0));
        assert_eq!(player.pos, before);
        assert!(!player.is_teleporting);
    }

    #[test]
    fn test_blocked_depth_move_reverts_and_zeroes_vz() {
        let maze = open_maze();
        let mut player = mid_player();
        player.z = maze.world.z_max; // at the ceiling
        player.vel.z = 2.0;
        let input = TickInput {
            deeper: true,
            ..Default::default()
        };
        player.handle_movement(&maze, &input, 0.0);
        assert_eq!(player.z, maze.world.z_max);
        assert_eq!(player.vel.z, 0.0);
    }

    #[test]
    fn test_depth_steps_one_layer() {
        let maze = open_maze();
        let mut player = mid_player();
        let input = TickInput {
            shallower: true,
            ..Default::default()
        };
        player.handle_movement(&maze, &input, 0.0);
        assert_eq!(player.z, 99.0);
    }

    #[test]
    fn test_respawn_clears_state() {
        let maze = open_maze();
        let mut player = mid_player();
        player.apply_speed_boost(0.0);
        player.vel = Vec3::new(3.0, 3.0, 0.0);
        player.respawn(maze.start.center, maze.start.z);
        assert_eq!(player.pos, maze.start.center);
        assert_eq!(player.vel, Vec3::ZERO);
        assert!(!player.speed_boost_active);
        assert_eq!(player.max_speed, PLAYER_MAX_SPEED);
    }

    #[test]
    fn test_respawn_rewinds_dash_state() {
        let maze = open_maze();
        let mut player = mid_player();
        for _ in 0..3 {
            player.reduce_dash_cooldown();
        }
        player.vel = Vec3::new(3.0, 0.0, 0.0);
        player.try_dash(100.0); // timestamp from a long run
        player.update_dash(100.3);

        player.respawn(maze.start.center, maze.start.z);
        assert_eq!(player.dash_cooldown, DASH_COOLDOWN);

        // The restart rewinds the clock to zero, so the old dash timestamp
        // must not hold the dash hostage on the fresh run
        player.vel = Vec3::new(3.0, 0.0, 0.0);
        player.try_dash(0.5);
        assert!(player.is_dashing);
    }
}
