//! Block materials, identifiers and placed block records.

use std::fmt;
use std::str::FromStr;

use glam::IVec3;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Block material. Every material shares the unit-cube hitbox.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlockType {
    /// Grass
    Grass,
    /// Sand
    Sand,
    /// Water
    Water,
    /// Stone
    Stone,
    /// Wood (tree trunks)
    Wood,
    /// Dirt
    Dirt,
    /// Lava
    Lava,
    /// Gold
    Gold,
    /// Glass
    Glass,
    /// Leaves (tree canopies)
    Leaves,
}

impl BlockType {
    /// All block types in declaration order (also the default hotbar order).
    pub const ALL: [BlockType; 10] = [
        BlockType::Grass,
        BlockType::Sand,
        BlockType::Water,
        BlockType::Stone,
        BlockType::Wood,
        BlockType::Dirt,
        BlockType::Lava,
        BlockType::Gold,
        BlockType::Glass,
        BlockType::Leaves,
    ];

    /// Lowercase name, also used as the texture key by renderers.
    pub fn name(self) -> &'static str {
        match self {
            BlockType::Grass => "grass",
            BlockType::Sand => "sand",
            BlockType::Water => "water",
            BlockType::Stone => "stone",
            BlockType::Wood => "wood",
            BlockType::Dirt => "dirt",
            BlockType::Lava => "lava",
            BlockType::Gold => "gold",
            BlockType::Glass => "glass",
            BlockType::Leaves => "leaves",
        }
    }
}

impl fmt::Display for BlockType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a block name does not match any [`BlockType`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown block type `{0}`")]
pub struct ParseBlockTypeError(pub String);

impl FromStr for BlockType {
    type Err = ParseBlockTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BlockType::ALL
            .into_iter()
            .find(|ty| ty.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseBlockTypeError(s.to_string()))
    }
}

/// Stable handle to a block inside a registry.
///
/// Ids are handed out in increasing order and never reused, so ordering by id
/// is the same as ordering by insertion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct BlockId(pub u64);

impl fmt::Display for BlockId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A unit cube anchored at an integer lattice point.
///
/// The block occupies `[x, x+1] × [y, y+1] × [z, z+1]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Block {
    /// Lattice position of the minimum corner.
    pub position: IVec3,
    /// Material.
    pub block_type: BlockType,
}

impl Block {
    /// Create a block record.
    pub fn new(position: IVec3, block_type: BlockType) -> Self {
        Self {
            position,
            block_type,
        }
    }
}
