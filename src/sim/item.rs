//! Collectible items
//!
//! An item is a thin capped cylinder the player can brush through. Collection
//! is monotonic: once `collected` flips to true it stays true until an
//! explicit level reset.

use serde::{Deserialize, Serialize};

use super::shape::{Cylinder, Disc};

/// What an item does when picked up
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ItemKind {
    /// Temporarily raises the player's max speed
    SpeedBoost,
    /// Permanently shortens the dash cooldown (down to a floor)
    DashCharge,
    /// Relocates the player to a random free spot on their current layer
    Teleport,
}

impl ItemKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemKind::SpeedBoost => "speed_boost",
            ItemKind::DashCharge => "dash",
            ItemKind::Teleport => "teleport",
        }
    }
}

/// A placed collectible
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Item {
    pub kind: ItemKind,
    pub body: Cylinder,
    pub collected: bool,
}

impl Item {
    pub fn new(kind: ItemKind, body: Cylinder) -> Self {
        Self {
            kind,
            body,
            collected: false,
        }
    }

    /// The item reduced to a disc at its mid depth, for placement tests
    /// against sphere obstacles.
    pub fn as_disc(&self) -> Disc {
        Disc::new(self.body.center, self.body.mid_z(), self.body.radius)
    }

    /// True if an uncollected item touches the given body this frame
    pub fn touches(&self, body: &Disc) -> bool {
        !self.collected && self.body.overlaps_disc(body)
    }
}
