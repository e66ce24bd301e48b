//! Tree generation: a wooden trunk capped by a three-layer leaf canopy.

use blockworld_core::{BlockId, BlockType};
use glam::IVec3;

use crate::World;

/// One square layer of leaves centred on the trunk column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CanopyLayer {
    /// Side length of the square footprint (odd).
    pub size: i32,
    /// Height above the top trunk block.
    pub y_offset: i32,
    /// Omit the four outermost corners.
    pub trim_corners: bool,
}

/// Canopy layers, bottom to top.
pub const CANOPY_LAYERS: [CanopyLayer; 3] = [
    CanopyLayer {
        size: 5,
        y_offset: 0,
        trim_corners: false,
    },
    CanopyLayer {
        size: 5,
        y_offset: 1,
        trim_corners: true,
    },
    CanopyLayer {
        size: 3,
        y_offset: 2,
        trim_corners: false,
    },
];

impl CanopyLayer {
    /// Horizontal offsets `(dx, dz)` covered by this layer, row by row.
    pub fn footprint(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        let half = self.size / 2;
        (-half..=half).flat_map(move |dx| {
            (-half..=half).filter_map(move |dz| {
                let corner = dx.abs() == half && dz.abs() == half;
                (!(self.trim_corners && corner)).then_some((dx, dz))
            })
        })
    }
}

/// Tree structure with position and materials.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tree {
    /// Lattice position of the lowest trunk block.
    pub base: IVec3,
    /// Number of trunk blocks.
    pub trunk_height: i32,
    /// Trunk material.
    pub trunk: BlockType,
    /// Canopy material.
    pub leaves: BlockType,
}

impl Tree {
    /// Create a wood/leaves tree at the given base.
    pub fn new(base: IVec3, trunk_height: i32) -> Self {
        Self {
            base,
            trunk_height,
            trunk: BlockType::Wood,
            leaves: BlockType::Leaves,
        }
    }

    /// Lattice y of the topmost trunk block.
    pub fn trunk_top(&self) -> i32 {
        self.base.y + self.trunk_height - 1
    }

    /// Every block of the tree: trunk bottom-up, then canopy layers in order.
    ///
    /// The lowest canopy layer shares the trunk top cell; both blocks are kept.
    pub fn blocks(&self) -> Vec<(IVec3, BlockType)> {
        let mut out = Vec::new();
        for dy in 0..self.trunk_height {
            out.push((self.base + IVec3::new(0, dy, 0), self.trunk));
        }

        let top = self.trunk_top();
        for layer in &CANOPY_LAYERS {
            for (dx, dz) in layer.footprint() {
                out.push((
                    IVec3::new(self.base.x + dx, top + layer.y_offset, self.base.z + dz),
                    self.leaves,
                ));
            }
        }
        out
    }

    /// Insert the tree into the world without duplicate checks.
    pub fn place_into(&self, world: &mut World) -> Vec<BlockId> {
        self.blocks()
            .into_iter()
            .map(|(position, block_type)| world.insert(position, block_type))
            .collect()
    }
}
