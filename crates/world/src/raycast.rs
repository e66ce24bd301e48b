//! Nearest-hit ray intersection against every stored block.

use blockworld_core::BlockId;
use blockworld_physics::Aabb;
use glam::{IVec3, Vec3};
use serde::{Deserialize, Serialize};

use crate::BlockRegistry;

/// A ray in world space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ray {
    /// Start point.
    pub origin: Vec3,
    /// Direction; need not be normalized.
    pub direction: Vec3,
}

impl Ray {
    /// Create a ray.
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self { origin, direction }
    }
}

/// Result of a raycast against the block registry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayHit {
    /// The block that was hit.
    pub block: BlockId,
    /// Lattice position of that block.
    pub block_pos: IVec3,
    /// World-space position of the hit point.
    pub point: Vec3,
    /// Outward normal of the face that was hit.
    pub face_normal: IVec3,
    /// Distance from the ray origin to the hit point.
    pub distance: f32,
}

impl BlockRegistry {
    /// Nearest block struck by `ray`. Equal distances go to the earliest inserted block.
    ///
    /// Returns `None` for a zero-length or non-finite direction.
    pub fn raycast(&self, ray: Ray) -> Option<RayHit> {
        let direction = ray.direction.try_normalize()?;
        if !ray.origin.is_finite() {
            return None;
        }

        let mut nearest: Option<RayHit> = None;
        for (id, block) in self.all() {
            let Some(hit) = Aabb::unit_cube(block.position).ray_intersection(ray.origin, direction)
            else {
                continue;
            };
            if nearest.is_some_and(|best| best.distance <= hit.distance) {
                continue;
            }
            nearest = Some(RayHit {
                block: id,
                block_pos: block.position,
                point: ray.origin + direction * hit.distance,
                face_normal: hit.normal,
                distance: hit.distance,
            });
        }
        nearest
    }
}
