//! Model data and the asset-loading seam.
//!
//! Loading happens once, before the viewer exists. If an [`AssetSource`]
//! fails, initialization stops there: no surface is built, no input is
//! accepted and no frame is scheduled.

mod procedural;

pub use procedural::{ProceduralPropeller, BODY_MESH, PROPELLER_MESH};

use crate::error::GyreError;

/// Interleaved vertex: position then normal.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    /// Object-space position.
    pub position: [f32; 3],
    /// Object-space unit normal.
    pub normal: [f32; 3],
}

/// One named indexed triangle mesh.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MeshData {
    /// Lookup name (e.g. `"Propeller"`).
    pub name: String,
    /// Vertex data.
    pub vertices: Vec<Vertex>,
    /// Triangle list indices into `vertices`.
    pub indices: Vec<u32>,
}

impl MeshData {
    /// An empty mesh with the given name.
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}

/// A model made of named meshes sharing one object transform.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Model {
    /// Meshes in draw order.
    pub meshes: Vec<MeshData>,
}

impl Model {
    /// Index of the first mesh called `name`.
    #[must_use]
    pub fn mesh_index(&self, name: &str) -> Option<usize> {
        self.meshes.iter().position(|m| m.name == name)
    }
}

/// Everything the viewer needs before its first frame.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Assets {
    /// The displayed model.
    pub model: Model,
}

/// Produces the viewer's assets.
pub trait AssetSource {
    /// Load (or build) the assets.
    ///
    /// # Errors
    ///
    /// Returns [`GyreError::AssetLoad`] when the assets cannot be produced.
    fn load(&self) -> Result<Assets, GyreError>;
}
