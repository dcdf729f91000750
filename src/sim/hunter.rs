//! Hostile pursuit agents
//!
//! A hunter homes in on the player with a distance-proportional planar step
//! and a probabilistic one-layer depth step. It ignores obstacles entirely
//! and only wakes up when the player is close in depth.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::consts::HUNTER_ENGAGE_DEPTH;

use super::shape::Disc;

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Hunter {
    pub pos: Vec2,
    pub z: f32,
    pub radius: f32,
    /// Pursuit speed scalar; also drives the depth-step probability
    pub speed: f32,
    /// Spawn point, kept for level reset
    spawn_pos: Vec2,
    spawn_z: f32,
}

impl Hunter {
    pub fn new(pos: Vec2, z: f32, radius: f32, speed: f32) -> Self {
        debug_assert!(radius > 0.0, "hunter radius must be positive");
        Self {
            pos,
            z,
            radius,
            speed,
            spawn_pos: pos,
            spawn_z: z,
        }
    }

    /// Per-frame pursuit step toward the player.
    ///
    /// Planar movement closes a `speed / distance` fraction of the remaining
    /// gap on each axis, so the closing rate grows as the hunter nears the
    /// player. This is intentionally not a fixed-speed step. Exact planar
    /// overlap would divide by zero and is skipped for the frame.
    pub fn pursue<R: Rng>(&mut self, player_pos: Vec2, player_z: f32, rng: &mut R) {
        if (self.z - player_z).abs() > HUNTER_ENGAGE_DEPTH {
            return; // dormant when far away in depth
        }

        let distance = self.pos.distance(player_pos);
        if distance > 0.0 {
            let movement_scalar = self.speed / distance;
            self.pos += (player_pos - self.pos) * movement_scalar;
        }

        // Depth is chased independently: a per-frame coin flip steps one
        // layer toward the player. Faster hunters flip less often.
        if self.z != player_z {
            let step_probability = (1.0 - self.speed / 5.0).clamp(0.0, 1.0);
            if rng.random::<f32>() < step_probability {
                self.z += (player_z - self.z).signum();
            }
        }
    }

    /// The hunter's collision silhouette on its own layer
    pub fn as_disc(&self) -> Disc {
        Disc::new(self.pos, self.z, self.radius)
    }

    /// True if the hunter touches the player this frame (pure query)
    pub fn caught(&self, player: &Disc) -> bool {
        self.as_disc().overlaps_disc(player)
    }

    /// Put the hunter back at its spawn point (level restart)
    pub fn reset(&mut self) {
        self.pos = self.spawn_pos;
        self.z = self.spawn_z;
    }
}
