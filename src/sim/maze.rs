//! Maze construction and the position oracle
//!
//! A maze is built once per level by rejection sampling: obstacle spheres,
//! item cylinders and hunters are drawn uniformly and redrawn until they
//! satisfy the placement invariants (nothing blocks the start or end zone,
//! items never spawn inside an obstacle). Hunters deliberately skip overlap
//! checks; they roam through everything anyway.
//!
//! After construction the obstacle list is immutable; `is_position_allowed`
//! is the single collision query the rest of the sim depends on.

use std::error::Error;
use std::fmt;

use glam::Vec2;
use rand::Rng;

use crate::config::{Difficulty, WorldConfig};
use crate::consts::*;

use super::hunter::Hunter;
use super::item::{Item, ItemKind};
use super::shape::{Cylinder, Disc, Shape, Sphere};

/// Maze construction failure
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MazeError {
    /// Rejection sampling ran out of attempts; the requested layout does not
    /// fit the world (e.g. too many large obstacles for the available space).
    Infeasible {
        what: &'static str,
        placed: usize,
        requested: usize,
    },
}

impl fmt::Display for MazeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MazeError::Infeasible {
                what,
                placed,
                requested,
            } => write!(
                f,
                "maze layout infeasible: placed {placed}/{requested} {what} \
                 before exhausting the attempt budget"
            ),
        }
    }
}

impl Error for MazeError {}

/// The static level layout plus its mutable inhabitants
#[derive(Debug, Clone)]
pub struct Maze {
    pub world: WorldConfig,
    /// Obstacle field; read-only after construction
    pub obstacles: Vec<Sphere>,
    pub items: Vec<Item>,
    pub hunters: Vec<Hunter>,
    /// Player spawn zone, on the shallowest layer
    pub start: Disc,
    /// Goal zone, on the deepest layer
    pub end: Disc,
}

impl Maze {
    /// Build a full level for the given difficulty.
    ///
    /// Unbounded rejection sampling would hang on pathological parameters,
    /// so each collection has a bounded attempt budget and exhaustion
    /// surfaces as [`MazeError::Infeasible`].
    pub fn generate<R: Rng>(
        world: WorldConfig,
        difficulty: Difficulty,
        rng: &mut R,
    ) -> Result<Self, MazeError> {
        let start = Disc::new(Vec2::new(ZONE_MARGIN, ZONE_MARGIN), 0.0, ZONE_RADIUS);
        let end = Disc::new(
            Vec2::new(world.width - ZONE_MARGIN, world.height - ZONE_MARGIN),
            world.z_max,
            ZONE_RADIUS,
        );

        let mut maze = Self {
            world,
            obstacles: Vec::new(),
            items: Vec::new(),
            hunters: Vec::new(),
            start,
            end,
        };

        maze.generate_obstacles(
            difficulty.obstacle_count(),
            OBSTACLE_RADIUS_MIN,
            OBSTACLE_RADIUS_MAX,
            rng,
        )?;
        maze.generate_items(difficulty.item_count(), rng)?;
        maze.generate_hunters(difficulty.hunter_count(), rng);

        log::info!(
            "generated {:?} maze: {} obstacles, {} items, {} hunters",
            difficulty,
            maze.obstacles.len(),
            maze.items.len(),
            maze.hunters.len()
        );

        Ok(maze)
    }

    /// Rejection-sample `count` obstacle spheres that leave the start and end
    /// zones reachable.
    fn generate_obstacles<R: Rng>(
        &mut self,
        count: usize,
        r_min: f32,
        r_max: f32,
        rng: &mut R,
    ) -> Result<(), MazeError> {
        let mut attempts = 0u32;
        while self.obstacles.len() < count {
            attempts += 1;
            if attempts > MAX_PLACEMENT_ATTEMPTS {
                return Err(MazeError::Infeasible {
                    what: "obstacles",
                    placed: self.obstacles.len(),
                    requested: count,
                });
            }

            let candidate = Sphere::new(
                Vec2::new(
                    rng.random_range(ZONE_RADIUS..=self.world.width - ZONE_RADIUS),
                    rng.random_range(ZONE_RADIUS..=self.world.height - ZONE_RADIUS),
                ),
                rng.random_range(0.0..=self.world.z_max),
                rng.random_range(r_min..=r_max),
            );

            // The zone test happens at the zone's own layer: a sphere that is
            // flush against a zone (distance == radius sum) is accepted.
            if candidate.overlaps_disc(&self.start) || candidate.overlaps_disc(&self.end) {
                continue;
            }
            log::debug!(
                "placed obstacle at ({:.0}, {:.0}, {:.0}) radius {:.0}",
                candidate.center.x,
                candidate.center.y,
                candidate.z,
                candidate.radius
            );
            self.obstacles.push(candidate);
        }
        Ok(())
    }

    /// Rejection-sample `count` item cylinders: a thin depth span, biased
    /// toward shallow layers, clear of both zones and every obstacle.
    fn generate_items<R: Rng>(&mut self, count: usize, rng: &mut R) -> Result<(), MazeError> {
        let mut attempts = 0u32;
        while self.items.len() < count {
            attempts += 1;
            if attempts > MAX_PLACEMENT_ATTEMPTS {
                return Err(MazeError::Infeasible {
                    what: "items",
                    placed: self.items.len(),
                    requested: count,
                });
            }

            let kind = match rng.random_range(0..3) {
                0 => ItemKind::SpeedBoost,
                1 => ItemKind::DashCharge,
                _ => ItemKind::Teleport,
            };
            // Squared uniform sample biases items toward shallow depth where
            // the player starts.
            let t: f32 = rng.random();
            let span = ITEM_DEPTH_SPAN.min(self.world.z_max);
            let start_z = (t * t * (self.world.z_max - span)).floor();
            let body = Cylinder::new(
                Vec2::new(
                    rng.random_range(20.0..=self.world.width - 20.0),
                    rng.random_range(20.0..=self.world.height - 20.0),
                ),
                start_z,
                start_z + span,
                ITEM_RADIUS,
            );
            let item = Item::new(kind, body);

            if body.overlaps_disc(&self.start) || body.overlaps_disc(&self.end) {
                continue;
            }
            if self
                .obstacles
                .iter()
                .any(|obstacle| obstacle.overlaps_disc(&item.as_disc()))
            {
                continue;
            }
            log::debug!(
                "placed {} item at ({:.0}, {:.0}, layers {:.0}..{:.0})",
                kind.as_str(),
                body.center.x,
                body.center.y,
                body.start_z,
                body.end_z
            );
            self.items.push(item);
        }
        Ok(())
    }

    /// Hunters spawn in the deeper half of the world so they never sit on top
    /// of the shallow start zone. No overlap checks: hunters may share space
    /// with obstacles, items and each other.
    fn generate_hunters<R: Rng>(&mut self, count: usize, rng: &mut R) {
        for _ in 0..count {
            let radius = rng.random_range(12.0..=20.0);
            let hunter = Hunter::new(
                Vec2::new(
                    rng.random_range(radius..=self.world.width - radius),
                    rng.random_range(radius..=self.world.height - radius),
                ),
                rng.random_range(self.world.z_max / 2.0..=self.world.z_max).floor(),
                radius,
                rng.random_range(1.0..=3.0),
            );
            self.hunters.push(hunter);
        }
    }

    /// The collision oracle: can a body occupy this position?
    ///
    /// Pure boolean; no penetration depth is computed. The body must sit
    /// fully inside the planar bounds (center at least one radius from every
    /// edge) and inside the depth range, and must not overlap any obstacle's
    /// cross-section at the body's layer.
    pub fn is_position_allowed(&self, body: &Disc) -> bool {
        let w = &self.world;
        if body.center.x < body.radius
            || body.center.x > w.width - body.radius
            || body.center.y < body.radius
            || body.center.y > w.height - body.radius
            || body.z < 0.0
            || body.z > w.z_max
        {
            return false;
        }
        !self
            .obstacles
            .iter()
            .any(|obstacle| obstacle.overlaps_disc(body))
    }

    /// Every primitive in the level as a [`Shape`]: obstacles, uncollected
    /// items, and the two zone discs. Collected items are gone for good.
    pub fn primitives(&self) -> impl Iterator<Item = Shape> + '_ {
        self.obstacles
            .iter()
            .map(|obstacle| Shape::Sphere(*obstacle))
            .chain(
                self.items
                    .iter()
                    .filter(|item| !item.collected)
                    .map(|item| Shape::Cylinder(item.body)),
            )
            .chain([Shape::Disc(self.start), Shape::Disc(self.end)])
    }

    /// Silhouettes visible at a depth layer, as (planar center, apparent
    /// radius) pairs. This is the query a rendering layer draws from.
    pub fn cross_section(&self, query_z: f32) -> Vec<(Vec2, f32)> {
        self.primitives()
            .filter_map(|shape| {
                let apparent = shape.project(query_z);
                (apparent > 0.0).then_some((shape.center(), apparent))
            })
            .collect()
    }

    /// Restore per-life mutable state: items uncollected, hunters at spawn.
    /// The obstacle layout is untouched.
    pub fn reset_entities(&mut self) {
        for item in &mut self.items {
            item.collected = false;
        }
        for hunter in &mut self.hunters {
            hunter.reset();
        }
    }
}
