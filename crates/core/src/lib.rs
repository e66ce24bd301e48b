#![warn(missing_docs)]
//! Core primitives shared across the workspace.

pub mod block;
pub mod input;

use rand::{rngs::StdRng, SeedableRng};
use serde::{Deserialize, Serialize};

// Re-export commonly used types
pub use block::{Block, BlockId, BlockType, ParseBlockTypeError};
pub use input::{HeldKeys, LookDelta, PointerAction, TickInput, MAX_LOOK_DELTA};

/// Frame-driven simulation tick counter (one tick per display refresh).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SimTick(pub u64);

impl SimTick {
    /// First tick in any timeline.
    pub const ZERO: Self = Self(0);

    /// Advance by `delta` ticks.
    pub fn advance(self, delta: u64) -> Self {
        Self(self.0 + delta)
    }
}

/// Helper to derive a reproducible RNG from a world seed and a domain tag.
///
/// Distinct domains (terrain, trees, ...) draw from independent streams so that
/// adding a consumer to one does not shift the numbers seen by another.
pub fn scoped_rng(world_seed: u64, domain: u64) -> StdRng {
    let seed = world_seed ^ domain.wrapping_mul(0x9E37_79B9_7F4A_7C15);
    StdRng::seed_from_u64(seed)
}
