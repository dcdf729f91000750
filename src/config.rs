//! World constants and difficulty presets
//!
//! World dimensions and layer count are fixed at process start: they live in
//! an immutable `WorldConfig` handed to constructors, never in mutable
//! globals.

use serde::{Deserialize, Serialize};

/// Fixed world dimensions: planar bounds [0, width] x [0, height] and an
/// inclusive depth range [0, z_max].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WorldConfig {
    pub width: f32,
    pub height: f32,
    pub z_max: f32,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            width: 1200.0,
            height: 600.0,
            z_max: 200.0,
        }
    }
}

impl WorldConfig {
    pub fn new(width: f32, height: f32, z_max: f32) -> Self {
        debug_assert!(width > 0.0 && height > 0.0 && z_max >= 0.0);
        Self {
            width,
            height,
            z_max,
        }
    }
}

/// Difficulty presets scale how crowded the maze is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// Label used as the leaderboard key
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "easy" => Some(Difficulty::Easy),
            "medium" | "med" => Some(Difficulty::Medium),
            "hard" => Some(Difficulty::Hard),
            _ => None,
        }
    }

    /// Number of obstacle spheres to place
    pub fn obstacle_count(&self) -> usize {
        match self {
            Difficulty::Easy => 40,
            Difficulty::Medium => 70,
            Difficulty::Hard => 100,
        }
    }

    /// Number of collectible items to place
    pub fn item_count(&self) -> usize {
        match self {
            Difficulty::Easy => 20,
            Difficulty::Medium => 15,
            Difficulty::Hard => 12,
        }
    }

    /// Number of hunters to place
    pub fn hunter_count(&self) -> usize {
        match self {
            Difficulty::Easy => 3,
            Difficulty::Medium => 5,
            Difficulty::Hard => 8,
        }
    }
}
