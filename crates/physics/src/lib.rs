#![warn(missing_docs)]
//! Physics primitives (AABB, ray tests, collision resolution).

mod collision;

pub use collision::{player_box, resolve, BoxQuery};

use glam::{DVec3, IVec3, Vec3};
use serde::{Deserialize, Serialize};

/// Axis-aligned bounding box used for collisions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    /// Minimum corner (x, y, z).
    pub min: Vec3,
    /// Maximum corner (x, y, z).
    pub max: Vec3,
}

/// Where a ray enters a box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayBoxHit {
    /// Distance along the (normalized) ray.
    pub distance: f32,
    /// Outward normal of the struck face.
    pub normal: IVec3,
}

impl Aabb {
    /// Create a new AABB. Corners must not be inverted on any axis.
    pub fn new(min: Vec3, max: Vec3) -> Self {
        debug_assert!(!min.cmpgt(max).any());
        Self { min, max }
    }

    /// Bounds of the unit cube anchored at a lattice point.
    pub fn unit_cube(position: IVec3) -> Self {
        let min = position.as_vec3();
        Self {
            min,
            max: min + Vec3::ONE,
        }
    }

    /// Tests intersection with another AABB. Touching faces count as intersecting.
    pub fn intersects(&self, other: &Self) -> bool {
        self.min.x <= other.max.x
            && self.max.x >= other.min.x
            && self.min.y <= other.max.y
            && self.max.y >= other.min.y
            && self.min.z <= other.max.z
            && self.max.z >= other.min.z
    }

    /// Inclusive range of lattice cells whose unit cubes intersect this box.
    ///
    /// Bounds are clamped to the `i32` lattice, so a box beyond it yields the
    /// outermost cells (whose cubes then fail the intersection test).
    pub fn touched_cells(&self) -> (IVec3, IVec3) {
        let lattice_min = DVec3::splat(f64::from(i32::MIN));
        let lattice_max = DVec3::splat(f64::from(i32::MAX));
        let lo = (self.min.as_dvec3().ceil() - DVec3::ONE).clamp(lattice_min, lattice_max);
        let hi = self.max.as_dvec3().floor().clamp(lattice_min, lattice_max);
        (lo.as_ivec3(), hi.as_ivec3())
    }

    /// Slab test against a ray. `direction` should be normalized.
    ///
    /// Only front faces count: boxes behind the origin and boxes containing
    /// it are missed.
    pub fn ray_intersection(&self, origin: Vec3, direction: Vec3) -> Option<RayBoxHit> {
        let inv_dir = direction.recip();

        let t1 = (self.min - origin) * inv_dir;
        let t2 = (self.max - origin) * inv_dir;
        let near = t1.min(t2);
        let far = t1.max(t2);

        // NaN appears for an axis-parallel ray lying exactly on a slab plane;
        // treat that axis as unconstrained.
        let near = Vec3::select(near.is_nan_mask(), Vec3::splat(f32::NEG_INFINITY), near);
        let far = Vec3::select(far.is_nan_mask(), Vec3::splat(f32::INFINITY), far);

        let tmin = near.max_element();
        let tmax = far.min_element();

        if tmin < 0.0 || tmin > tmax {
            return None;
        }

        let axis = axis_of(near, tmin);
        let mut normal = IVec3::ZERO;
        normal[axis] = if direction[axis] > 0.0 { -1 } else { 1 };
        Some(RayBoxHit {
            distance: tmin,
            normal,
        })
    }
}

fn axis_of(values: Vec3, target: f32) -> usize {
    if values.x == target {
        0
    } else if values.y == target {
        1
    } else {
        2
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_cube_spans_one_unit() {
        let cube = Aabb::unit_cube(IVec3::new(-2, 0, 3));
        assert_eq!(cube.min, Vec3::new(-2.0, 0.0, 3.0));
        assert_eq!(cube.max, Vec3::new(-1.0, 1.0, 4.0));
    }

    #[test]
    fn touching_boxes_intersect() {
        let a = Aabb::unit_cube(IVec3::ZERO);
        let b = Aabb::unit_cube(IVec3::X);
        assert!(a.intersects(&b));
    }

    #[test]
    fn separated_boxes_do_not_intersect() {
        let a = Aabb::unit_cube(IVec3::ZERO);
        let b = Aabb::new(Vec3::new(0.2, 1.01, 0.2), Vec3::new(0.4, 3.0, 0.4));
        assert!(!a.intersects(&b));
    }

    #[test]
    fn touched_cells_cover_adjacent_faces() {
        let query = Aabb::new(Vec3::new(1.0, 0.5, 0.5), Vec3::new(1.5, 2.0, 0.7));
        let (lo, hi) = query.touched_cells();
        assert_eq!(lo, IVec3::new(0, 0, 0));
        assert_eq!(hi, IVec3::new(1, 2, 0));
    }

    #[test]
    fn ray_hits_near_face_with_outward_normal() {
        let cube = Aabb::unit_cube(IVec3::new(5, 0, 0));
        let hit = cube
            .ray_intersection(Vec3::new(0.5, 0.5, 0.5), Vec3::X)
            .expect("ray should hit");
        assert!((hit.distance - 4.5).abs() < 1e-5);
        assert_eq!(hit.normal, IVec3::NEG_X);
    }

    #[test]
    fn ray_hits_top_face_when_looking_down() {
        let cube = Aabb::unit_cube(IVec3::ZERO);
        let hit = cube
            .ray_intersection(Vec3::new(0.5, 3.0, 0.5), Vec3::NEG_Y)
            .expect("ray should hit");
        assert!((hit.distance - 2.0).abs() < 1e-5);
        assert_eq!(hit.normal, IVec3::Y);
    }

    #[test]
    fn ray_misses_box_behind_origin() {
        let cube = Aabb::unit_cube(IVec3::new(-5, 0, 0));
        assert!(cube
            .ray_intersection(Vec3::new(0.5, 0.5, 0.5), Vec3::X)
            .is_none());
    }

    #[test]
    fn ray_from_inside_misses() {
        let cube = Aabb::unit_cube(IVec3::ZERO);
        assert!(cube
            .ray_intersection(Vec3::new(0.5, 0.5, 0.5), Vec3::Z)
            .is_none());
    }

    #[test]
    fn ray_leaving_a_face_misses() {
        let cube = Aabb::unit_cube(IVec3::ZERO);
        assert!(cube
            .ray_intersection(Vec3::new(0.5, 1.0, 0.5), Vec3::Y)
            .is_none());
    }

    #[test]
    fn touched_cells_clamp_far_below_lattice() {
        let query = Aabb::new(
            Vec3::new(0.4, -3.0e9, 0.4),
            Vec3::new(0.6, -3.0e9 + 2.5, 0.6),
        );
        let (lo, hi) = query.touched_cells();
        assert_eq!((lo.y, hi.y), (i32::MIN, i32::MIN));
        assert_eq!((lo.x, hi.x), (0, 0));
        assert!(!Aabb::unit_cube(IVec3::new(0, i32::MIN, 0)).intersects(&query));
    }

    #[test]
    fn touched_cells_clamp_far_above_lattice() {
        let query = Aabb::new(Vec3::splat(-1.0e20), Vec3::splat(1.0e20));
        let (lo, hi) = query.touched_cells();
        assert_eq!(lo, IVec3::splat(i32::MIN));
        assert_eq!(hi, IVec3::splat(i32::MAX));
    }

    #[test]
    fn ray_beside_box_misses() {
        let cube = Aabb::unit_cube(IVec3::new(5, 0, 0));
        assert!(cube
            .ray_intersection(Vec3::new(0.5, 2.5, 0.5), Vec3::X)
            .is_none());
    }
}
