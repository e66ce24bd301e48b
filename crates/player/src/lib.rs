#![warn(missing_docs)]
//! First-person player controller: walking, gravity, jumping and crouching
//! against the block world.

mod config;

pub use config::PlayerConfig;

use blockworld_camera::{CameraPose, Orientation};
use blockworld_core::{HeldKeys, LookDelta};
use blockworld_physics::{resolve, BoxQuery};
use glam::{Vec2, Vec3};
use serde::Serialize;
use tracing::{debug, trace};

/// Continuous player state.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PlayerState {
    /// Feet position in world units.
    pub position: Vec3,
    /// View orientation.
    pub orientation: Orientation,
    /// Vertical velocity in units per tick.
    pub velocity_y: f32,
    /// Current body height (standing or crouched).
    pub height: f32,
}

/// Owns the player record and advances it once per tick.
#[derive(Debug, Clone)]
pub struct PlayerController {
    state: PlayerState,
    config: PlayerConfig,
    grounded: bool,
    crouching: bool,
}

impl PlayerController {
    /// Spawn a player at `config.spawn`, standing, facing yaw 0 / pitch 0.
    pub fn new(config: PlayerConfig) -> Self {
        let state = PlayerState {
            position: config.spawn,
            orientation: Orientation::default(),
            velocity_y: 0.0,
            height: config.standing_height,
        };
        Self {
            state,
            config,
            grounded: false,
            crouching: false,
        }
    }

    /// Current state.
    pub fn state(&self) -> &PlayerState {
        &self.state
    }

    /// Active configuration.
    pub fn config(&self) -> &PlayerConfig {
        &self.config
    }

    /// Feet position.
    pub fn position(&self) -> Vec3 {
        self.state.position
    }

    /// Whether the body rested against a block at the end of the last tick.
    pub fn grounded(&self) -> bool {
        self.grounded
    }

    /// Whether the crouch key was held during the last tick.
    pub fn crouching(&self) -> bool {
        self.crouching
    }

    /// Move the player without touching velocity or contact state.
    pub fn teleport(&mut self, position: Vec3) {
        self.state.position = position;
    }

    /// Apply pointer motion. Non-finite or absurd deltas are sanitized first.
    pub fn apply_look(&mut self, delta: LookDelta) {
        let delta = delta.sanitized();
        if delta.is_zero() {
            return;
        }
        self.state
            .orientation
            .apply_look(delta, self.config.look_sensitivity);
    }

    /// Eye pose for the renderer: feet plus half the body height.
    pub fn camera_pose(&self) -> CameraPose {
        let PlayerState {
            position,
            orientation,
            height,
            ..
        } = self.state;
        CameraPose {
            position: Vec3::new(position.x, position.y + height / 2.0, position.z),
            orientation,
        }
    }

    /// Horizontal displacement `(dx, dz)` requested by the held keys.
    ///
    /// Directions add up without normalization, so diagonal movement is faster.
    pub fn walk_displacement(&self, keys: HeldKeys) -> Vec2 {
        let speed = if keys.contains(HeldKeys::SPRINT) {
            self.config.sprint_speed
        } else {
            self.config.move_speed
        };
        let forward = self.state.orientation.walk_forward();
        let right = self.state.orientation.walk_right();

        let mut direction = Vec2::ZERO;
        if keys.contains(HeldKeys::FORWARD) {
            direction += forward;
        }
        if keys.contains(HeldKeys::BACKWARD) {
            direction -= forward;
        }
        if keys.contains(HeldKeys::LEFT) {
            direction -= right;
        }
        if keys.contains(HeldKeys::RIGHT) {
            direction += right;
        }
        direction * speed
    }

    /// Advance one tick against `world` and publish the resulting camera pose.
    pub fn tick<W: BoxQuery + ?Sized>(&mut self, world: &W, keys: HeldKeys) -> CameraPose {
        let half_width = self.config.half_width;

        // Horizontal: both axes move together or not at all.
        let step = self.walk_displacement(keys);
        if step != Vec2::ZERO {
            let pos = self.state.position;
            let candidate = Vec3::new(pos.x + step.x, pos.y, pos.z + step.y);
            if resolve(world, candidate, self.state.height, half_width).is_none() {
                self.state.position = candidate;
            }
        }

        // Vertical integration; gravity applies every tick.
        self.state.position.y += self.state.velocity_y;
        self.state.velocity_y += self.config.gravity;

        match resolve(world, self.state.position, self.state.height, half_width) {
            Some(contact) => {
                self.state.velocity_y = 0.0;
                self.grounded = true;
                let top = contact.max.y;
                if self.state.position.y < top + self.config.snap_tolerance {
                    self.state.position.y = top + self.config.resting_epsilon;
                }
            }
            None => self.grounded = false,
        }

        if keys.contains(HeldKeys::JUMP) && self.grounded {
            self.state.velocity_y = self.config.jump_speed;
            self.grounded = false;
            debug!(position = ?self.state.position, "jump");
        }

        self.crouching = keys.contains(HeldKeys::CROUCH);
        self.state.height = if self.crouching {
            self.config.crouch_height
        } else {
            self.config.standing_height
        };

        let pose = self.camera_pose();
        trace!(
            position = ?self.state.position,
            velocity_y = self.state.velocity_y,
            grounded = self.grounded,
            "player tick"
        );
        pose
    }
}
