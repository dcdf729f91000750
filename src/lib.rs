//! Depthmaze - a volumetric maze navigated one depth layer at a time
//!
//! The world is a 3D box full of spherical obstacles. The player only ever
//! sees (and collides against) the 2D cross-section of that world at their
//! current depth layer, so every primitive knows how to project itself onto
//! an arbitrary query depth.
//!
//! Core modules:
//! - `sim`: Deterministic simulation (geometry, collision, player kinematics,
//!   maze generation, hunter pursuit, tick orchestration)
//! - `config`: Immutable world constants and difficulty presets
//! - `leaderboard`: Per-difficulty top-10 completion times, JSON on disk

pub mod config;
pub mod leaderboard;
pub mod sim;

pub use config::{Difficulty, WorldConfig};
pub use leaderboard::Leaderboard;

/// Gameplay tuning constants
pub mod consts {
    /// Fixed simulation timestep (60 Hz)
    pub const SIM_DT: f32 = 1.0 / 60.0;

    /// Player defaults
    pub const PLAYER_RADIUS: f32 = 18.0;
    pub const PLAYER_ACCEL: f32 = 0.5;
    pub const PLAYER_FRICTION: f32 = 0.1;
    pub const PLAYER_MAX_SPEED: f32 = 5.0;
    /// Depth layers crossed per deeper/shallower input
    pub const PLAYER_Z_STEP: f32 = 1.0;

    /// Dash tuning
    pub const DASH_SPEED: f32 = 15.0;
    pub const DASH_DURATION: f64 = 0.2;
    pub const DASH_COOLDOWN: f64 = 1.0;
    pub const DASH_COOLDOWN_MIN: f64 = 0.5;
    pub const DASH_COOLDOWN_STEP: f64 = 0.1;

    /// Teleport tuning
    pub const TELEPORT_MAX_ATTEMPTS: u32 = 100;
    /// Cosmetic "teleporting" window for the presentation layer
    pub const TELEPORT_FLASH_DURATION: f64 = 0.5;

    /// Speed boost tuning
    pub const SPEED_BOOST_AMOUNT: f32 = 2.0;
    pub const SPEED_BOOST_DURATION: f64 = 5.0;

    /// Sliding resolution probes angles 1..=MAX_SLIDE_ANGLE_DEG
    pub const MAX_SLIDE_ANGLE_DEG: u32 = 60;

    /// Hunters ignore the player beyond this depth gap
    pub const HUNTER_ENGAGE_DEPTH: f32 = 20.0;

    /// Maze layout
    pub const ZONE_RADIUS: f32 = 25.0;
    pub const ZONE_MARGIN: f32 = 50.0;
    pub const OBSTACLE_RADIUS_MIN: f32 = 50.0;
    pub const OBSTACLE_RADIUS_MAX: f32 = 90.0;
    pub const ITEM_RADIUS: f32 = 10.0;
    /// Depth span of an item cylinder, in layers
    pub const ITEM_DEPTH_SPAN: f32 = 15.0;
    /// Rejection-sampling attempt budget per placed entity collection
    pub const MAX_PLACEMENT_ATTEMPTS: u32 = 100_000;
}
