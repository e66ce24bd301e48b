//! Owning store of placed blocks with a lattice-cell index.
//!
//! Blocks live in a `BTreeMap` keyed by monotonically increasing ids, so
//! iteration order is insertion order. A `HashMap` from lattice cell to the ids
//! stored there serves point and box queries without scanning every block.

use std::collections::{BTreeMap, HashMap};

use blockworld_core::{Block, BlockId, BlockType};
use blockworld_physics::{Aabb, BoxQuery};
use glam::{I64Vec3, IVec3};

/// Insertion-ordered block storage.
#[derive(Debug, Clone, Default)]
pub struct BlockRegistry {
    blocks: BTreeMap<BlockId, Block>,
    cells: HashMap<IVec3, Vec<BlockId>>,
    next_id: u64,
}

impl BlockRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored blocks.
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    /// Returns true when no blocks are stored.
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Add a block. Positions are not checked for duplicates here.
    pub fn insert(&mut self, position: IVec3, block_type: BlockType) -> BlockId {
        let id = BlockId(self.next_id);
        self.next_id += 1;
        self.blocks.insert(id, Block::new(position, block_type));
        // Ids only grow, so each cell list stays sorted.
        self.cells.entry(position).or_default().push(id);
        id
    }

    /// Delete a block, returning it. Unknown ids are a no-op.
    pub fn remove(&mut self, id: BlockId) -> Option<Block> {
        let block = self.blocks.remove(&id)?;
        if let Some(ids) = self.cells.get_mut(&block.position) {
            ids.retain(|stored| *stored != id);
            if ids.is_empty() {
                self.cells.remove(&block.position);
            }
        }
        Some(block)
    }

    /// Look up a block by id.
    pub fn get(&self, id: BlockId) -> Option<&Block> {
        self.blocks.get(&id)
    }

    /// Whether `id` is still stored.
    pub fn contains(&self, id: BlockId) -> bool {
        self.blocks.contains_key(&id)
    }

    /// All blocks in insertion order.
    pub fn all(&self) -> impl Iterator<Item = (BlockId, &Block)> + '_ {
        self.blocks.iter().map(|(id, block)| (*id, block))
    }

    /// Earliest stored block at exactly `position`.
    pub fn find_at(&self, position: IVec3) -> Option<BlockId> {
        self.cells
            .get(&position)
            .and_then(|ids| ids.first().copied())
    }

    /// First block in storage order whose unit cube intersects `query`.
    pub fn intersect_box(&self, query: &Aabb) -> Option<(BlockId, Aabb)> {
        let (lo, hi) = query.touched_cells();
        let extent = hi.as_i64vec3() - lo.as_i64vec3() + I64Vec3::ONE;
        if extent.min_element() <= 0 {
            return None;
        }

        let cell_count = extent
            .x
            .saturating_mul(extent.y)
            .saturating_mul(extent.z);
        if cell_count > self.blocks.len() as i64 {
            return self.scan_box(query);
        }

        let mut best: Option<(BlockId, Aabb)> = None;
        for x in lo.x..=hi.x {
            for y in lo.y..=hi.y {
                for z in lo.z..=hi.z {
                    let cell = IVec3::new(x, y, z);
                    let Some(first) = self.cells.get(&cell).and_then(|ids| ids.first()) else {
                        continue;
                    };
                    if best.is_some_and(|(current, _)| current < *first) {
                        continue;
                    }
                    let bounds = Aabb::unit_cube(cell);
                    if bounds.intersects(query) {
                        best = Some((*first, bounds));
                    }
                }
            }
        }
        best
    }

    fn scan_box(&self, query: &Aabb) -> Option<(BlockId, Aabb)> {
        self.blocks.iter().find_map(|(id, block)| {
            let bounds = Aabb::unit_cube(block.position);
            bounds.intersects(query).then_some((*id, bounds))
        })
    }
}

impl BoxQuery for BlockRegistry {
    fn intersect_box(&self, query: &Aabb) -> Option<(BlockId, Aabb)> {
        BlockRegistry::intersect_box(self, query)
    }
}
