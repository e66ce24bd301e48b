use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Player movement and body tunables. Speeds and accelerations are per tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    /// Feet position at session start.
    pub spawn: Vec3,
    /// Walking speed.
    pub move_speed: f32,
    /// Speed while the sprint key is held.
    pub sprint_speed: f32,
    /// Body height while standing.
    pub standing_height: f32,
    /// Body height while crouching.
    pub crouch_height: f32,
    /// Half of the body's x/z extent.
    pub half_width: f32,
    /// Upward velocity set by a jump.
    pub jump_speed: f32,
    /// Added to vertical velocity every tick (negative pulls down).
    pub gravity: f32,
    /// Radians of rotation per pointer unit.
    pub look_sensitivity: f32,
    /// Feet below `top + snap_tolerance` on contact are snapped onto the block.
    pub snap_tolerance: f32,
    /// Gap left between the feet and the supporting surface after a snap.
    pub resting_epsilon: f32,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            spawn: Vec3::new(0.0, 2.0, 5.0),
            move_speed: 0.1,
            sprint_speed: 0.2,
            standing_height: 2.5,
            crouch_height: 1.25,
            half_width: 0.1,
            jump_speed: 0.2,
            gravity: -0.02,
            look_sensitivity: 0.002,
            snap_tolerance: 0.1,
            resting_epsilon: 1e-4,
        }
    }
}
