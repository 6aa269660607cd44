//! Built-in propeller model generated from boxes.

use std::f32::consts::TAU;

use glam::{Quat, Vec3};

use super::{AssetSource, Assets, MeshData, Model, Vertex};
use crate::error::GyreError;

/// Name of the static fuselage mesh.
pub const BODY_MESH: &str = "Body";
/// Name of the mesh driven by the spin angle.
pub const PROPELLER_MESH: &str = "Propeller";

/// Blade pitch about each blade's long axis, in radians.
const BLADE_PITCH: f32 = 0.3;

/// Outward normal and the two face tangents, ordered so `u × v = normal`.
const FACES: [(Vec3, Vec3, Vec3); 6] = [
    (Vec3::X, Vec3::Y, Vec3::Z),
    (Vec3::NEG_X, Vec3::Z, Vec3::Y),
    (Vec3::Y, Vec3::Z, Vec3::X),
    (Vec3::NEG_Y, Vec3::X, Vec3::Z),
    (Vec3::Z, Vec3::X, Vec3::Y),
    (Vec3::NEG_Z, Vec3::Y, Vec3::X),
];

/// Append an oriented box with flat-shaded faces.
fn push_box(mesh: &mut MeshData, center: Vec3, half: Vec3, rotation: Quat) {
    for (normal, u, v) in FACES {
        let base = mesh.vertices.len() as u32;
        for (su, sv) in [(-1.0, -1.0), (1.0, -1.0), (1.0, 1.0), (-1.0, 1.0)] {
            let local = (normal + u * su + v * sv) * half;
            mesh.vertices.push(Vertex {
                position: (center + rotation * local).to_array(),
                normal: (rotation * normal).to_array(),
            });
        }
        mesh.indices.extend_from_slice(&[
            base,
            base + 1,
            base + 2,
            base,
            base + 2,
            base + 3,
        ]);
    }
}

/// A fuselage with a hub-and-blades propeller facing `+z`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProceduralPropeller {
    /// Number of blades (at least one).
    pub blade_count: u32,
}

impl Default for ProceduralPropeller {
    fn default() -> Self {
        Self { blade_count: 3 }
    }
}

impl ProceduralPropeller {
    fn body() -> MeshData {
        let mut mesh = MeshData::named(BODY_MESH);
        push_box(
            &mut mesh,
            Vec3::new(0.0, 0.0, -2.5),
            Vec3::new(0.9, 0.9, 2.5),
            Quat::IDENTITY,
        );
        mesh
    }

    fn propeller(&self) -> MeshData {
        let mut mesh = MeshData::named(PROPELLER_MESH);
        push_box(
            &mut mesh,
            Vec3::new(0.0, 0.0, 0.3),
            Vec3::new(0.5, 0.5, 0.3),
            Quat::IDENTITY,
        );
        for i in 0..self.blade_count {
            let angle = i as f32 * TAU / self.blade_count as f32;
            let spoke = Quat::from_rotation_z(angle);
            push_box(
                &mut mesh,
                spoke * Vec3::new(0.0, 2.2, 0.3),
                Vec3::new(0.35, 1.8, 0.06),
                spoke * Quat::from_rotation_y(BLADE_PITCH),
            );
        }
        mesh
    }
}

impl AssetSource for ProceduralPropeller {
    fn load(&self) -> Result<Assets, GyreError> {
        if self.blade_count == 0 {
            return Err(GyreError::AssetLoad(
                "propeller needs at least one blade".into(),
            ));
        }
        let model = Model {
            meshes: vec![Self::body(), self.propeller()],
        };
        log::debug!(
            "built procedural propeller: {} blades, {} vertices",
            self.blade_count,
            model.meshes.iter().map(|m| m.vertices.len()).sum::<usize>()
        );
        Ok(Assets { model })
    }
}
