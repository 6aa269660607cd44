//! wgpu implementation of [`RenderSurface`].
//!
//! Each mesh of the model gets its own vertex/index buffers and a uniform
//! holding the camera, its world matrix and the material. The whole model
//! shares one pipeline and one depth buffer.

use glam::{Mat4, Vec3};
use wgpu::util::DeviceExt;

use super::device::{GpuInitError, WindowGpu};
use super::pipeline_helpers;
use crate::assets::{MeshData, Model, Vertex};
use crate::error::GyreError;
use crate::options::{responsive_scale, DisplayOptions};
use crate::render::{MeshHandle, ObjectPose, RenderSurface};

const NEAR: f32 = 0.1;
const FAR: f32 = 1000.0;

/// Per-mesh uniform.
/// NOTE: Must match the WGSL `MeshUniform` layout exactly (176 bytes)
#[repr(C)]
#[derive(Debug, Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
struct MeshUniform {
    view_proj: [[f32; 4]; 4],
    model: [[f32; 4]; 4],
    color: [f32; 4],
    material: [f32; 4],
    eye: [f32; 4],
}

impl MeshUniform {
    fn new(camera: &Camera, model: Mat4, display: &DisplayOptions) -> Self {
        let [r, g, b] = display.model_color;
        Self {
            view_proj: camera.view_proj.to_cols_array_2d(),
            model: model.to_cols_array_2d(),
            color: [r, g, b, 1.0],
            material: [display.metalness, display.roughness, 0.0, 0.0],
            eye: camera.eye.extend(1.0).to_array(),
        }
    }
}

/// Fixed camera on the +z axis looking at the origin.
#[derive(Debug, Clone, Copy)]
struct Camera {
    eye: Vec3,
    view_proj: Mat4,
}

impl Camera {
    fn new(display: &DisplayOptions, aspect: f32) -> Self {
        let eye = Vec3::new(0.0, 0.0, display.camera_distance);
        let view = Mat4::look_at_rh(eye, Vec3::ZERO, Vec3::Y);
        let proj = Mat4::perspective_rh(
            display.fovy.to_radians(),
            aspect,
            NEAR,
            FAR,
        );
        Self {
            eye,
            view_proj: proj * view,
        }
    }
}

fn vertex_layout() -> wgpu::VertexBufferLayout<'static> {
    const ATTRIBUTES: [wgpu::VertexAttribute; 2] =
        wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x3];
    wgpu::VertexBufferLayout {
        array_stride: size_of::<Vertex>() as wgpu::BufferAddress,
        step_mode: wgpu::VertexStepMode::Vertex,
        attributes: &ATTRIBUTES,
    }
}

/// GPU-resident copy of one [`MeshData`].
struct GpuMesh {
    name: String,
    vertex_buffer: wgpu::Buffer,
    index_buffer: wgpu::Buffer,
    index_count: u32,
    uniform_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
}

impl GpuMesh {
    fn new(
        device: &wgpu::Device,
        layout: &wgpu::BindGroupLayout,
        mesh: &MeshData,
    ) -> Self {
        let vertex_buffer =
            device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some(&format!("{} Vertices", mesh.name)),
                contents: bytemuck::cast_slice(&mesh.vertices),
                usage: wgpu::BufferUsages::VERTEX,
            });
        let index_buffer =
            device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some(&format!("{} Indices", mesh.name)),
                contents: bytemuck::cast_slice(&mesh.indices),
                usage: wgpu::BufferUsages::INDEX,
            });
        let uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some(&format!("{} Uniform", mesh.name)),
            size: size_of::<MeshUniform>() as wgpu::BufferAddress,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some(&format!("{} Bind Group", mesh.name)),
            layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            }],
        });
        Self {
            name: mesh.name.clone(),
            vertex_buffer,
            index_buffer,
            index_count: mesh.indices.len() as u32,
            uniform_buffer,
            bind_group,
        }
    }

    fn destroy(&self) {
        self.vertex_buffer.destroy();
        self.index_buffer.destroy();
        self.uniform_buffer.destroy();
    }
}

/// Draws a [`Model`] into a window surface.
pub struct MeshRenderer {
    gpu: WindowGpu,
    pipeline: wgpu::RenderPipeline,
    depth_view: wgpu::TextureView,
    meshes: Vec<GpuMesh>,
    display: DisplayOptions,
    pose: Option<ObjectPose>,
    disposed: bool,
}

impl MeshRenderer {
    /// Open the GPU for `window`, upload `model` and build the pipeline.
    ///
    /// # Errors
    ///
    /// Returns [`GpuInitError`] when no surface, adapter or device is
    /// available.
    pub async fn new(
        window: impl Into<wgpu::SurfaceTarget<'static>>,
        size: (u32, u32),
        model: &Model,
        display: &DisplayOptions,
    ) -> Result<Self, GpuInitError> {
        let gpu = WindowGpu::open(window, size.0, size.1).await?;
        let device = &gpu.device;
        let shader = device.create_shader_module(wgpu::include_wgsl!(
            "../../assets/shaders/mesh.wgsl"
        ));
        let layout =
            device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                label: Some("Mesh Bind Group Layout"),
                entries: &[pipeline_helpers::uniform_buffer(0)],
            });
        let pipeline = pipeline_helpers::create_mesh_pipeline(
            device,
            "Mesh Pipeline",
            &shader,
            gpu.config.format,
            vertex_layout(),
            &[&layout],
        );
        let depth_view = pipeline_helpers::create_depth_view(
            device,
            gpu.config.width,
            gpu.config.height,
        );
        let meshes = model
            .meshes
            .iter()
            .map(|mesh| GpuMesh::new(device, &layout, mesh))
            .collect::<Vec<_>>();
        log::debug!("uploaded {} meshes", meshes.len());

        Ok(Self {
            gpu,
            pipeline,
            depth_view,
            meshes,
            display: display.clone(),
            pose: None,
            disposed: false,
        })
    }

    fn write_uniforms(&self) {
        let width = self.gpu.config.width;
        let camera = Camera::new(&self.display, self.aspect());
        let scale = responsive_scale(width as f32, &self.display);
        for (index, mesh) in self.meshes.iter().enumerate() {
            let model = self.pose.map_or_else(
                || Mat4::from_scale(Vec3::splat(scale)),
                |pose| pose.mesh_matrix(MeshHandle(index), scale),
            );
            let uniform = MeshUniform::new(&camera, model, &self.display);
            self.gpu.queue.write_buffer(
                &mesh.uniform_buffer,
                0,
                bytemuck::cast_slice(&[uniform]),
            );
        }
    }

    fn clear_color(&self) -> wgpu::Color {
        let [r, g, b] = self.display.background;
        wgpu::Color {
            r: f64::from(r),
            g: f64::from(g),
            b: f64::from(b),
            a: 1.0,
        }
    }
}

impl RenderSurface for MeshRenderer {
    fn size(&self) -> (u32, u32) {
        (self.gpu.config.width, self.gpu.config.height)
    }

    fn mesh(&self, name: &str) -> Option<MeshHandle> {
        self.meshes.iter().position(|m| m.name == name).map(MeshHandle)
    }

    fn apply_pose(&mut self, pose: &ObjectPose) {
        self.pose = Some(*pose);
    }

    fn render(&mut self) -> Result<(), GyreError> {
        if self.disposed {
            return Err(GyreError::Render("renderer disposed".into()));
        }

        let frame = match self.gpu.surface.get_current_texture() {
            Ok(frame) => frame,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                log::debug!("surface lost or outdated, reconfiguring");
                self.gpu.configure();
                return Ok(());
            }
            Err(wgpu::SurfaceError::Timeout) => {
                log::warn!("surface timeout, skipping frame");
                return Ok(());
            }
            Err(e) => return Err(GyreError::Render(e.to_string())),
        };
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        self.write_uniforms();

        let mut encoder = self.gpu.device.create_command_encoder(
            &wgpu::CommandEncoderDescriptor {
                label: Some("Mesh Encoder"),
            },
        );
        {
            let mut pass =
                encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                    label: Some("Mesh Pass"),
                    color_attachments: &[Some(
                        wgpu::RenderPassColorAttachment {
                            view: &view,
                            resolve_target: None,
                            ops: wgpu::Operations {
                                load: wgpu::LoadOp::Clear(self.clear_color()),
                                store: wgpu::StoreOp::Store,
                            },
                            depth_slice: None,
                        },
                    )],
                    depth_stencil_attachment: Some(
                        wgpu::RenderPassDepthStencilAttachment {
                            view: &self.depth_view,
                            depth_ops: Some(wgpu::Operations {
                                load: wgpu::LoadOp::Clear(1.0),
                                store: wgpu::StoreOp::Store,
                            }),
                            stencil_ops: None,
                        },
                    ),
                    ..Default::default()
                });

            pass.set_pipeline(&self.pipeline);
            for mesh in self.meshes.iter().filter(|m| m.index_count > 0) {
                pass.set_bind_group(0, &mesh.bind_group, &[]);
                pass.set_vertex_buffer(0, mesh.vertex_buffer.slice(..));
                pass.set_index_buffer(
                    mesh.index_buffer.slice(..),
                    wgpu::IndexFormat::Uint32,
                );
                pass.draw_indexed(0..mesh.index_count, 0, 0..1);
            }
        }
        let _ = self.gpu.queue.submit(std::iter::once(encoder.finish()));
        frame.present();
        Ok(())
    }

    fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        self.gpu.config.width = width;
        self.gpu.config.height = height;
        self.gpu.configure();
        self.depth_view = pipeline_helpers::create_depth_view(
            &self.gpu.device,
            width,
            height,
        );
    }

    fn set_display(&mut self, display: &DisplayOptions) {
        self.display = display.clone();
    }

    fn dispose(&mut self) {
        if self.disposed {
            return;
        }
        for mesh in &self.meshes {
            mesh.destroy();
        }
        self.disposed = true;
        log::debug!("mesh renderer disposed");
    }
}
