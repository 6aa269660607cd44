//! In-memory [`RenderSurface`] that records every call, for tests.

use std::cell::Cell;
use std::rc::Rc;

use super::{MeshHandle, ObjectPose, RenderSurface};
use crate::assets::Model;
use crate::error::GyreError;
use crate::options::DisplayOptions;

#[derive(Debug, Default)]
pub(crate) struct RecordingSurface {
    pub mesh_names: Vec<String>,
    pub size: (u32, u32),
    pub poses: Vec<ObjectPose>,
    pub renders: usize,
    pub disposed: Rc<Cell<bool>>,
    pub display: Option<DisplayOptions>,
    pub fail_render: bool,
}

impl RecordingSurface {
    pub fn from_model(model: &Model) -> Self {
        Self {
            mesh_names: model.meshes.iter().map(|m| m.name.clone()).collect(),
            size: (800, 400),
            ..Self::default()
        }
    }
}

impl RenderSurface for RecordingSurface {
    fn size(&self) -> (u32, u32) {
        self.size
    }

    fn mesh(&self, name: &str) -> Option<MeshHandle> {
        self.mesh_names.iter().position(|n| n == name).map(MeshHandle)
    }

    fn apply_pose(&mut self, pose: &ObjectPose) {
        self.poses.push(*pose);
    }

    fn render(&mut self) -> Result<(), GyreError> {
        if self.fail_render {
            return Err(GyreError::Render("surface lost".into()));
        }
        self.renders += 1;
        Ok(())
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.size = (width, height);
    }

    fn set_display(&mut self, display: &DisplayOptions) {
        self.display = Some(display.clone());
    }

    fn dispose(&mut self) {
        self.disposed.set(true);
    }
}
