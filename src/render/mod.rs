//! The render collaborator seam.
//!
//! The viewer core never draws anything itself. It resolves the sub-mesh it
//! animates into a [`MeshHandle`] once, then every frame hands an
//! [`ObjectPose`] to a [`RenderSurface`] and asks it to render.

#[cfg(test)]
pub(crate) mod recording;

use glam::{Mat4, Quat, Vec3};

use crate::error::GyreError;
use crate::options::DisplayOptions;
use crate::orientation::Orientation;

/// Opaque reference to a named mesh inside a render surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MeshHandle(pub(crate) usize);

impl MeshHandle {
    /// Index of the mesh in the surface's mesh list.
    #[must_use]
    pub fn index(self) -> usize {
        self.0
    }
}

/// Transform state for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObjectPose {
    /// Rotation of the whole object.
    pub model_rotation: Quat,
    /// The mesh that spins about its local `z` axis.
    pub spin_mesh: MeshHandle,
    /// Spin angle in radians.
    pub spin_angle: f32,
    /// Local rotation of the spinning mesh.
    pub spin_rotation: Quat,
}

impl ObjectPose {
    /// Build a pose from an eased orientation.
    #[must_use]
    pub fn new(orientation: &Orientation, spin_mesh: MeshHandle) -> Self {
        Self {
            model_rotation: orientation.model_rotation(),
            spin_mesh,
            spin_angle: orientation.spin_angle,
            spin_rotation: orientation.spin_rotation(),
        }
    }

    /// World matrix of the whole object at uniform `scale`.
    #[must_use]
    pub fn model_matrix(&self, scale: f32) -> Mat4 {
        Mat4::from_scale_rotation_translation(
            Vec3::splat(scale),
            self.model_rotation,
            Vec3::ZERO,
        )
    }

    /// World matrix of `mesh`: the spinning mesh gets its local spin applied
    /// before the object transform.
    #[must_use]
    pub fn mesh_matrix(&self, mesh: MeshHandle, scale: f32) -> Mat4 {
        let model = self.model_matrix(scale);
        if mesh == self.spin_mesh {
            model * Mat4::from_quat(self.spin_rotation)
        } else {
            model
        }
    }
}

/// Something that can draw the animated object.
///
/// Implemented by [`MeshRenderer`](crate::gpu::MeshRenderer) for wgpu and by
/// recording fakes in tests.
pub trait RenderSurface {
    /// Viewport size in physical pixels.
    fn size(&self) -> (u32, u32);

    /// Viewport width / height. Degenerate sizes report `1.0`.
    fn aspect(&self) -> f32 {
        let (width, height) = self.size();
        if width == 0 || height == 0 {
            return 1.0;
        }
        width as f32 / height as f32
    }

    /// Resolve a named mesh.
    fn mesh(&self, name: &str) -> Option<MeshHandle>;

    /// Set the transforms used by the next [`render`](Self::render).
    fn apply_pose(&mut self, pose: &ObjectPose);

    /// Draw and present the current frame.
    ///
    /// # Errors
    ///
    /// Returns [`GyreError::Render`] when the frame could not be drawn.
    fn render(&mut self) -> Result<(), GyreError>;

    /// Viewport resized to `width` × `height` physical pixels.
    fn resize(&mut self, width: u32, height: u32);

    /// Display options changed at runtime.
    fn set_display(&mut self, _display: &DisplayOptions) {}

    /// Release GPU or platform resources. Called once, on dispose.
    fn dispose(&mut self) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pose() -> ObjectPose {
        let orientation = Orientation {
            spin_angle: std::f32::consts::FRAC_PI_2,
            look_at: Vec3::Z,
        };
        ObjectPose::new(&orientation, MeshHandle(1))
    }

    #[test]
    fn only_the_spin_mesh_spins() {
        let pose = pose();
        let body = pose.mesh_matrix(MeshHandle(0), 1.0);
        let blades = pose.mesh_matrix(MeshHandle(1), 1.0);
        assert!((body.transform_vector3(Vec3::X) - Vec3::X).length() < 1e-6);
        assert!(
            (blades.transform_vector3(Vec3::X) - Vec3::Y).length() < 1e-6
        );
    }

    #[test]
    fn spin_rotation_matches_angle() {
        let pose = pose();
        let expected = Quat::from_rotation_z(pose.spin_angle);
        assert!(pose.spin_rotation.abs_diff_eq(expected, 1e-6));
    }

    #[test]
    fn scale_is_uniform() {
        let m = pose().model_matrix(0.5);
        assert!((m.transform_point3(Vec3::ONE) - Vec3::splat(0.5)).length() < 1e-6);
    }
}
