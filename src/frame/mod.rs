//! Per-frame sequencing: measure time, ease orientation, render.

mod timing;

pub use timing::FrameTiming;

use crate::error::GyreError;
use crate::input::InputAggregator;
use crate::orientation::OrientationController;
use crate::render::{MeshHandle, ObjectPose, RenderSurface};

/// Runs the orientation controller exactly once per rendered frame.
///
/// The delta handed to the controller is wall-clock time since the
/// previous frame, so a frame dropped by the host lengthens the next
/// delta instead of losing spin.
pub struct FrameDriver {
    controller: OrientationController,
    timing: FrameTiming,
}

impl FrameDriver {
    /// Create a driver capped at `target_fps` (0 = unlimited).
    #[must_use]
    pub fn new(target_fps: u32) -> Self {
        Self {
            controller: OrientationController::new(),
            timing: FrameTiming::new(target_fps),
        }
    }

    /// The orientation controller.
    #[must_use]
    pub fn controller(&self) -> &OrientationController {
        &self.controller
    }

    /// Frame timing and FPS.
    #[must_use]
    pub fn timing(&self) -> &FrameTiming {
        &self.timing
    }

    /// Change the frame cap (0 = unlimited).
    pub fn set_target_fps(&mut self, target_fps: u32) {
        self.timing.set_target_fps(target_fps);
    }

    /// Restart the frame clock, e.g. when the loop first starts.
    pub fn restart_clock(&mut self) {
        self.timing.restart();
    }

    /// Whether the frame cap allows rendering now.
    #[must_use]
    pub fn should_render(&self) -> bool {
        self.timing.should_render()
    }

    /// Run one frame timed by the wall clock.
    ///
    /// # Errors
    ///
    /// Propagates the surface's render error.
    pub fn tick<S: RenderSurface>(
        &mut self,
        input: &mut InputAggregator,
        surface: &mut S,
        spin_mesh: MeshHandle,
    ) -> Result<ObjectPose, GyreError> {
        let dt = self.timing.begin_frame();
        self.step(input, surface, spin_mesh, dt)
    }

    /// Run one frame with an explicit `dt` in seconds.
    ///
    /// # Errors
    ///
    /// Propagates the surface's render error. The orientation has already
    /// advanced when that happens.
    pub fn step<S: RenderSurface>(
        &mut self,
        input: &mut InputAggregator,
        surface: &mut S,
        spin_mesh: MeshHandle,
        dt: f32,
    ) -> Result<ObjectPose, GyreError> {
        let orientation =
            self.controller.advance(input, dt, surface.aspect());
        let pose = ObjectPose::new(&orientation, spin_mesh);
        surface.apply_pose(&pose);
        surface.render()?;
        Ok(pose)
    }
}
