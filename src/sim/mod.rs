//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed tick order
//! - Seeded RNG only
//! - No rendering or platform dependencies; the presentation layer consumes
//!   depth projections and events, never the other way around

pub mod clock;
pub mod collision;
pub mod hunter;
pub mod item;
pub mod maze;
pub mod player;
pub mod shape;
pub mod tick;

pub use clock::GameClock;
pub use collision::{resolve_planar_move, rotate};
pub use hunter::Hunter;
pub use item::{Item, ItemKind};
pub use maze::{Maze, MazeError};
pub use player::Player;
pub use shape::{Cylinder, Disc, Shape, Sphere};
pub use tick::{GameEvent, GamePhase, GameState, TickInput, tick};
