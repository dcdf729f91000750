//! Sliding collision resolution
//!
//! The position oracle (`Maze::is_position_allowed`) is a pure yes/no test,
//! so blocked moves are resolved by angular probing instead of a physics
//! solver: rotate the proposed displacement by growing angles, clockwise
//! before counter-clockwise at each step, and take the first legal result.
//! Against fields of circular obstacles this produces wall-hugging slides at
//! shallow approach angles. If nothing within +/-60 degrees is legal the
//! displacement is cancelled outright.

use glam::Vec2;

use crate::consts::MAX_SLIDE_ANGLE_DEG;

use super::maze::Maze;
use super::shape::Disc;

/// Rotate a vector by `radians` (positive = clockwise in y-down screen space)
#[inline]
pub fn rotate(v: Vec2, radians: f32) -> Vec2 {
    Vec2::from_angle(radians).rotate(v)
}

/// Resolve a proposed planar displacement against the maze.
///
/// `body` is the entity at its current (legal) position; `velocity` is the
/// displacement it wants this frame. Returns the accepted new center, or
/// `None` if the move is cancelled. Probe order is observable behavior: the
/// direct move, then for each angle 1..=60 degrees the clockwise rotation
/// before the counter-clockwise one, so in symmetric situations entities
/// slide clockwise.
pub fn resolve_planar_move(maze: &Maze, body: &Disc, velocity: Vec2) -> Option<Vec2> {
    if velocity == Vec2::ZERO {
        return Some(body.center);
    }

    let direct = Disc::new(body.center + velocity, body.z, body.radius);
    if maze.is_position_allowed(&direct) {
        return Some(direct.center);
    }

    for angle_deg in 1..=MAX_SLIDE_ANGLE_DEG {
        let radians = (angle_deg as f32).to_radians();
        for theta in [radians, -radians] {
            let candidate = Disc::new(body.center + rotate(velocity, theta), body.z, body.radius);
            if maze.is_position_allowed(&candidate) {
                return Some(candidate.center);
            }
        }
    }

    None
}
