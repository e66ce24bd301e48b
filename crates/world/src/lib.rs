//! Block storage, spatial queries, world generation and block targeting.

#![warn(missing_docs)]

mod generation;
mod hotbar;
mod raycast;
mod registry;
mod targeting;
mod trees;
mod world;

pub use generation::*;
pub use hotbar::*;
pub use raycast::*;
pub use registry::*;
pub use targeting::*;
pub use trees::*;
pub use world::*;
