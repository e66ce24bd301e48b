#![warn(missing_docs)]
//! Camera system for first-person 3D rendering.

use blockworld_core::LookDelta;
use glam::{Mat4, Quat, Vec2, Vec3};
use serde::{Deserialize, Serialize};

/// Pitch limit; looking straight up or down is allowed.
pub const PITCH_LIMIT: f32 = std::f32::consts::FRAC_PI_2;

/// Yaw/pitch pair. Rotation order is yaw about world up, then pitch about local
/// right, so the camera never rolls.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Orientation {
    /// Horizontal rotation in radians around +Y. Unbounded.
    pub yaw: f32,
    /// Vertical rotation in radians, always within [-PITCH_LIMIT, PITCH_LIMIT].
    pub pitch: f32,
}

impl Orientation {
    /// Create an orientation, clamping pitch.
    pub fn new(yaw: f32, pitch: f32) -> Self {
        Self {
            yaw,
            pitch: pitch.clamp(-PITCH_LIMIT, PITCH_LIMIT),
        }
    }

    /// Apply pointer motion. Rightward motion decreases yaw (turns right) and
    /// downward motion decreases pitch. Pitch is clamped to +/- pi/2.
    pub fn apply_look(&mut self, delta: LookDelta, sensitivity: f32) {
        self.yaw -= delta.x * sensitivity;
        self.pitch -= delta.y * sensitivity;
        self.pitch = self.pitch.clamp(-PITCH_LIMIT, PITCH_LIMIT);
    }

    /// Rotation quaternion (yaw, then pitch).
    pub fn rotation(&self) -> Quat {
        Quat::from_rotation_y(self.yaw) * Quat::from_rotation_x(self.pitch)
    }

    /// View direction. Yaw 0 / pitch 0 looks down -Z.
    pub fn forward(&self) -> Vec3 {
        Vec3::new(
            -self.yaw.sin() * self.pitch.cos(),
            self.pitch.sin(),
            -self.yaw.cos() * self.pitch.cos(),
        )
    }

    /// Horizontal walking direction `(x, z)` for the current yaw.
    pub fn walk_forward(&self) -> Vec2 {
        Vec2::new(-self.yaw.sin(), -self.yaw.cos())
    }

    /// Horizontal strafe direction `(x, z)` pointing to the camera's right.
    pub fn walk_right(&self) -> Vec2 {
        Vec2::new(self.yaw.cos(), -self.yaw.sin())
    }
}

/// Published eye position and orientation for one tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CameraPose {
    /// Eye position in world space.
    pub position: Vec3,
    /// View orientation.
    pub orientation: Orientation,
}

impl CameraPose {
    /// View direction.
    pub fn forward(&self) -> Vec3 {
        self.orientation.forward()
    }

    /// Compute the view matrix (world space -> camera space).
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::from_rotation_translation(self.orientation.rotation(), self.position).inverse()
    }
}

/// First-person camera: a pose plus projection parameters.
#[derive(Debug, Clone)]
pub struct Camera {
    /// Current pose.
    pub pose: CameraPose,
    /// Vertical field of view in radians.
    pub fov: f32,
    /// Aspect ratio (width / height).
    pub aspect: f32,
    /// Near clipping plane distance.
    pub near: f32,
    /// Far clipping plane distance.
    pub far: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            pose: CameraPose::default(),
            fov: 75f32.to_radians(),
            aspect: 16.0 / 9.0,
            near: 0.1,
            far: 1000.0,
        }
    }
}

impl Camera {
    /// Create a camera at the given pose.
    pub fn new(pose: CameraPose) -> Self {
        Self {
            pose,
            ..Default::default()
        }
    }

    /// Compute the view matrix (world space -> camera space).
    pub fn view_matrix(&self) -> Mat4 {
        self.pose.view_matrix()
    }

    /// Compute the projection matrix (camera space -> clip space).
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov, self.aspect, self.near, self.far)
    }

    /// Compute the combined view-projection matrix.
    pub fn view_projection_matrix(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    /// Update the aspect ratio (call when the viewport resizes).
    pub fn set_aspect(&mut self, width: u32, height: u32) {
        if height > 0 {
            self.aspect = width as f32 / height as f32;
        }
    }

    /// Convert viewport pixel coordinates to a world-space ray `(origin, direction)`.
    pub fn screen_to_ray(&self, screen_pos: (f32, f32), screen_size: (u32, u32)) -> (Vec3, Vec3) {
        // Normalized device coordinates (-1 to 1), y up
        let x = (2.0 * screen_pos.0) / screen_size.0.max(1) as f32 - 1.0;
        let y = 1.0 - (2.0 * screen_pos.1) / screen_size.1.max(1) as f32;

        let inv_proj = self.projection_matrix().inverse();
        let ray_eye = inv_proj.project_point3(Vec3::new(x, y, -1.0));
        let ray_eye = Vec3::new(ray_eye.x, ray_eye.y, -1.0);

        let direction = self.pose.orientation.rotation() * ray_eye;
        (self.pose.position, direction.normalize())
    }
}
