//! Facing and spin rotations derived from the eased state.

use glam::{Mat3, Quat, Vec3};

/// Rotation that turns the local `+z` axis toward `direction`, keeping
/// `+y` as close to world up as possible.
///
/// A zero or non-finite direction faces straight ahead. Directions parallel
/// to world up fall back to `+z` as the up reference.
#[must_use]
pub fn look_rotation(direction: Vec3) -> Quat {
    let forward = direction.try_normalize().unwrap_or(Vec3::Z);
    let up = if forward.cross(Vec3::Y).length_squared() < 1e-8 {
        Vec3::Z
    } else {
        Vec3::Y
    };
    let right = up.cross(forward).normalize();
    let up = forward.cross(right);
    Quat::from_mat3(&Mat3::from_cols(right, up, forward))
}

/// The eased orientation state for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Orientation {
    /// Spin angle in radians about the spinning part's local `z` axis.
    pub spin_angle: f32,
    /// Direction the whole object faces.
    pub look_at: Vec3,
}

impl Orientation {
    /// Rotation of the whole object.
    #[must_use]
    pub fn model_rotation(&self) -> Quat {
        look_rotation(self.look_at)
    }

    /// Local rotation of the spinning part.
    #[must_use]
    pub fn spin_rotation(&self) -> Quat {
        Quat::from_rotation_z(self.spin_angle)
    }
}
