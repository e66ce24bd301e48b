//! Per-tick input snapshot handed from the event collaborator to the simulation.

use serde::{Deserialize, Serialize};

/// Largest accepted look delta per axis, in pointer units.
pub const MAX_LOOK_DELTA: f32 = 10_000.0;

bitflags::bitflags! {
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    /// Movement-related keys held at tick time.
    pub struct HeldKeys: u8 {
        /// Move along the facing direction.
        const FORWARD = 0b0000_0001;
        /// Move against the facing direction.
        const BACKWARD = 0b0000_0010;
        /// Strafe left.
        const LEFT = 0b0000_0100;
        /// Strafe right.
        const RIGHT = 0b0000_1000;
        /// Jump when grounded.
        const JUMP = 0b0001_0000;
        /// Use sprint speed.
        const SPRINT = 0b0010_0000;
        /// Crouch (reduced height).
        const CROUCH = 0b0100_0000;
    }
}

/// Pointer motion accumulated since the previous tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct LookDelta {
    /// Horizontal motion (positive = right).
    pub x: f32,
    /// Vertical motion (positive = down).
    pub y: f32,
}

impl LookDelta {
    /// Zero motion.
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    /// Create a delta from raw pointer motion.
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Drop non-finite components and clamp the rest to [`MAX_LOOK_DELTA`].
    pub fn sanitized(self) -> Self {
        fn clean(v: f32) -> f32 {
            if v.is_finite() {
                v.clamp(-MAX_LOOK_DELTA, MAX_LOOK_DELTA)
            } else {
                0.0
            }
        }
        Self {
            x: clean(self.x),
            y: clean(self.y),
        }
    }

    /// Whether there is no motion at all.
    pub fn is_zero(&self) -> bool {
        self.x == 0.0 && self.y == 0.0
    }
}

impl std::ops::AddAssign for LookDelta {
    fn add_assign(&mut self, rhs: Self) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

/// Pointer-button action trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PointerAction {
    /// Remove the targeted block.
    Primary,
    /// Place the selected block type next to the targeted block.
    Secondary,
}

/// Everything the simulation reads for one tick.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickInput {
    /// Keys held at tick time.
    pub keys: HeldKeys,
    /// Look motion since the last tick (already sanitized by the producer).
    pub look: LookDelta,
    /// Actions triggered since the last tick, in order.
    pub actions: Vec<PointerAction>,
    /// Hotbar slot requested since the last tick (0-based).
    pub select_slot: Option<usize>,
}

impl TickInput {
    /// Input with only `keys` held.
    pub fn with_keys(keys: HeldKeys) -> Self {
        Self {
            keys,
            ..Default::default()
        }
    }
}
