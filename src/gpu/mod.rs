//! GPU rendering through wgpu.
//!
//! [`MeshRenderer`] opens a device for a window and implements
//! [`RenderSurface`](crate::render::RenderSurface).

/// Window surface and device setup.
pub mod device;
/// Indexed-mesh renderer for the spinning model.
pub mod mesh_renderer;
/// Shared wgpu boilerplate helpers for pipelines and depth targets.
pub mod pipeline_helpers;

pub use device::GpuInitError;
pub use mesh_renderer::MeshRenderer;
