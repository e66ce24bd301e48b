//! World state: the block registry plus a queue of mutations for renderers.

use blockworld_core::{Block, BlockId, BlockType};
use blockworld_physics::{Aabb, BoxQuery};
use glam::IVec3;
use serde::Serialize;
use tracing::debug;

use crate::{BlockRegistry, Ray, RayHit};

/// A registry mutation a renderer mirrors (add or remove a cube).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BlockEvent {
    /// A block was inserted.
    Added {
        /// Registry id.
        id: BlockId,
        /// Inserted block.
        block: Block,
    },
    /// A block was removed.
    Removed {
        /// Registry id.
        id: BlockId,
        /// Removed block.
        block: Block,
    },
}

/// Owns the block registry and records every mutation made through it.
#[derive(Debug, Default)]
pub struct World {
    blocks: BlockRegistry,
    events: Vec<BlockEvent>,
}

impl World {
    /// Create an empty world.
    pub fn new() -> Self {
        Self::default()
    }

    /// Read-only access to the registry.
    pub fn blocks(&self) -> &BlockRegistry {
        &self.blocks
    }

    /// Insert a block and record the mutation.
    pub fn insert(&mut self, position: IVec3, block_type: BlockType) -> BlockId {
        let id = self.blocks.insert(position, block_type);
        self.events.push(BlockEvent::Added {
            id,
            block: Block::new(position, block_type),
        });
        id
    }

    /// Remove a block and record the mutation. Unknown ids are a no-op.
    pub fn remove(&mut self, id: BlockId) -> Option<Block> {
        let block = self.blocks.remove(id)?;
        debug!(%id, position = ?block.position, block_type = %block.block_type, "block removed");
        self.events.push(BlockEvent::Removed { id, block });
        Some(block)
    }

    /// Earliest block at exactly `position`.
    pub fn find_at(&self, position: IVec3) -> Option<BlockId> {
        self.blocks.find_at(position)
    }

    /// Nearest block struck by `ray`.
    pub fn raycast(&self, ray: Ray) -> Option<RayHit> {
        self.blocks.raycast(ray)
    }

    /// Number of mutations waiting to be drained.
    pub fn pending_events(&self) -> usize {
        self.events.len()
    }

    /// Hand all recorded mutations to the caller, oldest first.
    pub fn drain_events(&mut self) -> Vec<BlockEvent> {
        std::mem::take(&mut self.events)
    }
}

impl BoxQuery for World {
    fn intersect_box(&self, query: &Aabb) -> Option<(BlockId, Aabb)> {
        self.blocks.intersect_box(query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mutations_are_recorded_in_order() {
        let mut world = World::new();
        let id = world.insert(IVec3::new(1, 0, 1), BlockType::Glass);
        world.remove(id);

        let events = world.drain_events();
        assert_eq!(events.len(), 2);
        assert!(matches!(events[0], BlockEvent::Added { id: added, .. } if added == id));
        assert!(matches!(events[1], BlockEvent::Removed { id: removed, .. } if removed == id));
        assert_eq!(world.pending_events(), 0);
    }

    #[test]
    fn failed_removal_records_nothing() {
        let mut world = World::new();
        assert!(world.remove(BlockId(3)).is_none());
        assert_eq!(world.pending_events(), 0);
    }

    #[test]
    fn events_serialize_with_kind_tag() {
        let event = BlockEvent::Added {
            id: BlockId(4),
            block: Block::new(IVec3::new(1, 2, 3), BlockType::Lava),
        };
        let json = serde_json::to_value(event).unwrap();
        assert_eq!(json["kind"], "added");
        assert_eq!(json["block"]["block_type"], "lava");
        assert_eq!(json["id"], 4);
    }
}
