//! Ray-based block removal and placement.

use blockworld_core::{Block, BlockId, BlockType};
use glam::{IVec3, Vec3};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{Ray, RayHit, World};

/// Targeting tunables.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TargetingConfig {
    /// Largest allowed distance between the player and the hit point.
    pub placement_range: f32,
}

impl Default for TargetingConfig {
    fn default() -> Self {
        Self {
            placement_range: 5.0,
        }
    }
}

/// What an action did to the world.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum TargetOutcome {
    /// The targeted block was removed.
    Removed {
        /// Id of the removed block.
        id: BlockId,
        /// The removed block.
        block: Block,
    },
    /// A new block was inserted next to the targeted face.
    Placed {
        /// Id of the new block.
        id: BlockId,
        /// The new block.
        block: Block,
    },
    /// The cell in front of the targeted face is already filled.
    Occupied {
        /// Cell that would have received the block.
        position: IVec3,
    },
    /// A block was hit but too far from the player.
    OutOfRange {
        /// Distance from the player to the hit point.
        distance: f32,
    },
    /// The ray hit nothing.
    NoTarget,
}

impl TargetOutcome {
    /// Whether the world changed.
    pub fn mutated(&self) -> bool {
        matches!(self, Self::Removed { .. } | Self::Placed { .. })
    }
}

/// Cell that receives a block placed against the struck face.
pub fn placement_cell(hit: &RayHit) -> IVec3 {
    hit.block_pos + hit.face_normal
}

/// Resolves pointer actions against the world.
#[derive(Debug, Clone, Default)]
pub struct Targeting {
    config: TargetingConfig,
}

impl Targeting {
    /// Create a targeting helper.
    pub fn new(config: TargetingConfig) -> Self {
        Self { config }
    }

    /// Active configuration.
    pub fn config(&self) -> &TargetingConfig {
        &self.config
    }

    /// Nearest hit along `ray` if it lies within range of `player`.
    pub fn target(&self, world: &World, ray: Ray, player: Vec3) -> Result<RayHit, TargetOutcome> {
        let hit = world.raycast(ray).ok_or(TargetOutcome::NoTarget)?;
        let distance = hit.point.distance(player);
        if distance <= self.config.placement_range {
            Ok(hit)
        } else {
            Err(TargetOutcome::OutOfRange { distance })
        }
    }

    /// Primary action: remove the targeted block.
    pub fn break_block(&self, world: &mut World, ray: Ray, player: Vec3) -> TargetOutcome {
        let hit = match self.target(world, ray, player) {
            Ok(hit) => hit,
            Err(outcome) => {
                debug!(?outcome, "primary action ignored");
                return outcome;
            }
        };
        match world.remove(hit.block) {
            Some(block) => TargetOutcome::Removed {
                id: hit.block,
                block,
            },
            None => TargetOutcome::NoTarget,
        }
    }

    /// Secondary action: place `block_type` against the targeted face unless the cell is filled.
    pub fn place_block(
        &self,
        world: &mut World,
        ray: Ray,
        player: Vec3,
        block_type: BlockType,
    ) -> TargetOutcome {
        let hit = match self.target(world, ray, player) {
            Ok(hit) => hit,
            Err(outcome) => {
                debug!(?outcome, "secondary action ignored");
                return outcome;
            }
        };

        let position = placement_cell(&hit);
        if world.find_at(position).is_some() {
            debug!(?position, "placement cell occupied");
            return TargetOutcome::Occupied { position };
        }

        let id = world.insert(position, block_type);
        debug!(%id, ?position, %block_type, "block placed");
        TargetOutcome::Placed {
            id,
            block: Block::new(position, block_type),
        }
    }
}
