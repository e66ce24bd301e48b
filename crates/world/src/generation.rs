//! One-shot world initializer: a flat grass plane sprinkled with trees.

use blockworld_core::BlockType;
use glam::IVec3;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::{Tree, World};

/// World generation tunables.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldGenConfig {
    /// Columns span `-half_width..half_width` on both x and z.
    pub half_width: i32,
    /// Material of the ground plane at y = 0.
    pub ground: BlockType,
    /// Independent per-column chance of growing a tree.
    pub tree_probability: f64,
    /// Shortest trunk (inclusive).
    pub trunk_height_min: i32,
    /// Tallest trunk (inclusive).
    pub trunk_height_max: i32,
    /// Trunk material.
    pub trunk: BlockType,
    /// Canopy material.
    pub leaves: BlockType,
}

impl Default for WorldGenConfig {
    fn default() -> Self {
        Self {
            half_width: 40,
            ground: BlockType::Grass,
            tree_probability: 0.02,
            trunk_height_min: 4,
            trunk_height_max: 5,
            trunk: BlockType::Wood,
            leaves: BlockType::Leaves,
        }
    }
}

/// Summary of a generation pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct GenerationStats {
    /// Ground columns placed.
    pub columns: usize,
    /// Trees grown.
    pub trees: usize,
    /// Blocks inserted in total.
    pub blocks: usize,
}

/// Populate `world` with the ground plane and trees.
///
/// Columns are visited x-major; for each column the tree roll happens right
/// after its ground block is placed. No duplicate checks are made.
pub fn generate_world<R: Rng + ?Sized>(
    world: &mut World,
    config: &WorldGenConfig,
    rng: &mut R,
) -> GenerationStats {
    let before = world.blocks().len();
    let mut stats = GenerationStats::default();

    for x in -config.half_width..config.half_width {
        for z in -config.half_width..config.half_width {
            world.insert(IVec3::new(x, 0, z), config.ground);
            stats.columns += 1;

            if rng.gen::<f64>() < config.tree_probability {
                let lo = config.trunk_height_min.min(config.trunk_height_max);
                let hi = config.trunk_height_max.max(lo);
                let tree = Tree {
                    base: IVec3::new(x, 1, z),
                    trunk_height: rng.gen_range(lo..=hi),
                    trunk: config.trunk,
                    leaves: config.leaves,
                };
                tree.place_into(world);
                stats.trees += 1;
            }
        }
    }

    stats.blocks = world.blocks().len() - before;
    info!(
        columns = stats.columns,
        trees = stats.trees,
        blocks = stats.blocks,
        "world generated"
    );
    stats
}
