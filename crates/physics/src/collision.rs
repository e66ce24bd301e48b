//! Collision resolution between the player's swept box and placed blocks.

use blockworld_core::BlockId;
use glam::Vec3;

use crate::Aabb;

/// Spatial query surface the resolver needs from a block store.
pub trait BoxQuery {
    /// First block (in storage order) whose unit cube intersects `query`, with its bounds.
    fn intersect_box(&self, query: &Aabb) -> Option<(BlockId, Aabb)>;
}

/// Swept box of a player standing at `feet`: extends upward by `height` and
/// `half_width` outward on x and z.
pub fn player_box(feet: Vec3, height: f32, half_width: f32) -> Aabb {
    Aabb::new(
        Vec3::new(feet.x - half_width, feet.y, feet.z - half_width),
        Vec3::new(feet.x + half_width, feet.y + height, feet.z + half_width),
    )
}

/// Bounds of the block the player would overlap at `candidate`, if any.
pub fn resolve<Q: BoxQuery + ?Sized>(
    blocks: &Q,
    candidate: Vec3,
    height: f32,
    half_width: f32,
) -> Option<Aabb> {
    let swept = player_box(candidate, height, half_width);
    blocks.intersect_box(&swept).map(|(_, bounds)| bounds)
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::IVec3;

    struct Cubes(Vec<IVec3>);

    impl BoxQuery for Cubes {
        fn intersect_box(&self, query: &Aabb) -> Option<(BlockId, Aabb)> {
            self.0.iter().enumerate().find_map(|(i, pos)| {
                let bounds = Aabb::unit_cube(*pos);
                bounds
                    .intersects(query)
                    .then_some((BlockId(i as u64), bounds))
            })
        }
    }

    #[test]
    fn player_box_extends_up_and_out() {
        let aabb = player_box(Vec3::new(1.0, 2.0, 3.0), 2.5, 0.1);
        assert!(aabb.min.abs_diff_eq(Vec3::new(0.9, 2.0, 2.9), 1e-6));
        assert!(aabb.max.abs_diff_eq(Vec3::new(1.1, 4.5, 3.1), 1e-6));
    }

    #[test]
    fn resolve_reports_overlapped_block_bounds() {
        let world = Cubes(vec![IVec3::new(0, 0, 0)]);
        let hit = resolve(&world, Vec3::new(0.5, 0.9, 0.5), 2.5, 0.1);
        assert_eq!(hit, Some(Aabb::unit_cube(IVec3::ZERO)));
    }

    #[test]
    fn resolve_returns_none_above_ground() {
        let world = Cubes(vec![IVec3::new(0, 0, 0)]);
        assert!(resolve(&world, Vec3::new(0.5, 1.5, 0.5), 2.5, 0.1).is_none());
    }

    #[test]
    fn resolve_prefers_first_stored_block() {
        let world = Cubes(vec![IVec3::new(0, 1, 0), IVec3::new(0, 0, 0)]);
        let hit = resolve(&world, Vec3::new(0.5, 0.5, 0.5), 2.5, 0.1);
        assert_eq!(hit, Some(Aabb::unit_cube(IVec3::new(0, 1, 0))));
    }
}
