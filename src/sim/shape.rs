//! Volumetric primitives and their cross-section projections
//!
//! Every shape can answer two questions:
//! - `project(query_z)`: the apparent radius of its silhouette at a depth
//!   layer (0 means invisible there), and
//! - `overlaps_disc(&Disc)`: whether it collides with a flat disc, which is
//!   how every moving entity presents itself to collision tests.
//!
//! All overlap tests use strict less-than on distance vs. radius sum, so two
//! shapes placed exactly flush do not collide. Placement code relies on this.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// A flat circle living on exactly one depth layer
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Disc {
    pub center: Vec2,
    pub z: f32,
    pub radius: f32,
}

impl Disc {
    pub fn new(center: Vec2, z: f32, radius: f32) -> Self {
        debug_assert!(radius > 0.0, "disc radius must be positive");
        Self { center, z, radius }
    }

    /// Apparent radius at a query depth: full radius on its own layer,
    /// invisible everywhere else.
    #[inline]
    pub fn project(&self, query_z: f32) -> f32 {
        if self.z == query_z { self.radius } else { 0.0 }
    }

    pub fn overlaps_disc(&self, other: &Disc) -> bool {
        if self.z != other.z {
            return false;
        }
        self.center.distance(other.center) < self.radius + other.radius
    }
}

/// A solid sphere; its cross-section shrinks with depth distance
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sphere {
    pub center: Vec2,
    pub z: f32,
    pub radius: f32,
}

impl Sphere {
    pub fn new(center: Vec2, z: f32, radius: f32) -> Self {
        debug_assert!(radius > 0.0, "sphere radius must be positive");
        Self { center, z, radius }
    }

    /// Apparent radius at a query depth: `sqrt(r^2 - dz^2)` while the layer
    /// cuts the sphere, 0 once `|dz| >= r`.
    #[inline]
    pub fn project(&self, query_z: f32) -> f32 {
        let dz = (self.z - query_z).abs();
        if dz >= self.radius {
            return 0.0;
        }
        (self.radius * self.radius - dz * dz).sqrt()
    }

    /// Collide the sphere's silhouette at the disc's layer against the disc
    pub fn overlaps_disc(&self, disc: &Disc) -> bool {
        let apparent = self.project(disc.z);
        if apparent == 0.0 {
            return false;
        }
        self.center.distance(disc.center) < apparent + disc.radius
    }
}

/// A capped cylinder spanning a depth interval with constant radius
///
/// Unlike a sphere there is no falloff: the silhouette is the full radius
/// anywhere inside [start_z, end_z] and nothing outside it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Cylinder {
    pub center: Vec2,
    pub start_z: f32,
    pub end_z: f32,
    pub radius: f32,
}

impl Cylinder {
    pub fn new(center: Vec2, start_z: f32, end_z: f32, radius: f32) -> Self {
        debug_assert!(radius > 0.0, "cylinder radius must be positive");
        debug_assert!(start_z <= end_z, "cylinder depth interval inverted");
        Self {
            center,
            start_z,
            end_z,
            radius,
        }
    }

    #[inline]
    pub fn contains_depth(&self, query_z: f32) -> bool {
        self.start_z <= query_z && query_z <= self.end_z
    }

    #[inline]
    pub fn project(&self, query_z: f32) -> f32 {
        if self.contains_depth(query_z) {
            self.radius
        } else {
            0.0
        }
    }

    /// Midpoint of the depth interval
    #[inline]
    pub fn mid_z(&self) -> f32 {
        (self.start_z + self.end_z) / 2.0
    }

    pub fn overlaps_disc(&self, disc: &Disc) -> bool {
        if !self.contains_depth(disc.z) {
            return false;
        }
        self.center.distance(disc.center) < self.radius + disc.radius
    }
}

/// Tagged union over the three primitives, for callers that hold mixed sets
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Shape {
    Disc(Disc),
    Sphere(Sphere),
    Cylinder(Cylinder),
}

impl Shape {
    /// Planar center, which every primitive has regardless of depth extent
    pub fn center(&self) -> Vec2 {
        match self {
            Shape::Disc(d) => d.center,
            Shape::Sphere(s) => s.center,
            Shape::Cylinder(c) => c.center,
        }
    }

    /// Apparent silhouette radius at a depth layer (0 = not visible)
    pub fn project(&self, query_z: f32) -> f32 {
        match self {
            Shape::Disc(d) => d.project(query_z),
            Shape::Sphere(s) => s.project(query_z),
            Shape::Cylinder(c) => c.project(query_z),
        }
    }

    pub fn overlaps_disc(&self, disc: &Disc) -> bool {
        match self {
            Shape::Disc(d) => d.overlaps_disc(disc),
            Shape::Sphere(s) => s.overlaps_disc(disc),
            Shape::Cylinder(c) => c.overlaps_disc(disc),
        }
    }
}
