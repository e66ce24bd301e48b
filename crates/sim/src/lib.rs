#![warn(missing_docs)]
//! Single-player session: owns the world, the player and the hotbar, and
//! advances them one frame at a time from [`TickInput`] snapshots.

mod config;
mod session;

pub use config::{ConfigError, SessionConfig};
pub use session::{ActionOutcome, FrameOutput, Session};

/// Domain tag mixed into the world seed for terrain and tree rolls.
pub const WORLDGEN_DOMAIN: u64 = 0x5745_4c44;

pub use blockworld_core::{PointerAction, TickInput};
