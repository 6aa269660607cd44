//! The viewer core that ties input, easing and rendering together.

mod construction;
mod input;

use crate::error::GyreError;
use crate::frame::FrameDriver;
use crate::input::InputAggregator;
use crate::options::Options;
use crate::orientation::Orientation;
use crate::render::{MeshHandle, ObjectPose, RenderSurface};

/// The interactive spin viewer core.
///
/// Owns the input aggregator, the frame driver, the render surface and the
/// handle of the spinning sub-mesh. It exists only after assets have loaded
/// and the spinning mesh has been found, so a live `SpinViewer` can always
/// be ticked.
///
/// # Construction
///
/// Use [`SpinViewer::initialize`] to load assets and build a surface in one
/// step, or [`SpinViewer::from_surface`] when the surface already exists.
///
/// # Frame loop
///
/// Forward device events through [`handle_input`](Self::handle_input) and
/// call [`tick`](Self::tick) once per display refresh. Call
/// [`resize`](Self::resize) when the viewport changes.
///
/// # Teardown
///
/// [`dispose`](Self::dispose) consumes the viewer, so neither input nor
/// frames can reach it afterwards.
pub struct SpinViewer<S: RenderSurface> {
    input: InputAggregator,
    driver: FrameDriver,
    surface: S,
    spin_mesh: MeshHandle,
    options: Options,
}

impl<S: RenderSurface> SpinViewer<S> {
    /// Run one frame timed by the wall clock.
    ///
    /// # Errors
    ///
    /// Returns the surface's render error; the orientation still advanced.
    pub fn tick(&mut self) -> Result<ObjectPose, GyreError> {
        self.driver
            .tick(&mut self.input, &mut self.surface, self.spin_mesh)
    }

    /// Run one frame with an explicit delta in seconds.
    ///
    /// # Errors
    ///
    /// Returns the surface's render error; the orientation still advanced.
    pub fn tick_with_delta(
        &mut self,
        dt: f32,
    ) -> Result<ObjectPose, GyreError> {
        self.driver
            .step(&mut self.input, &mut self.surface, self.spin_mesh, dt)
    }

    /// Whether the frame cap allows another frame now.
    #[must_use]
    pub fn should_render(&self) -> bool {
        self.driver.should_render()
    }

    /// Current eased orientation.
    #[must_use]
    pub fn orientation(&self) -> Orientation {
        self.driver.controller().orientation()
    }

    /// Read-only interaction state.
    #[must_use]
    pub fn input(&self) -> &InputAggregator {
        &self.input
    }

    /// Smoothed frames per second.
    #[must_use]
    pub fn fps(&self) -> f32 {
        self.driver.timing().fps()
    }

    /// The render surface.
    #[must_use]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Handle of the spinning sub-mesh.
    #[must_use]
    pub fn spin_mesh(&self) -> MeshHandle {
        self.spin_mesh
    }

    /// Options in effect.
    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Replace the options. Interaction tuning applies from the next event
    /// or frame and display settings from the next render; the current
    /// motion state is kept.
    pub fn set_options(&mut self, options: Options) {
        self.input.set_options(&options.interaction);
        self.driver.set_target_fps(options.display.target_fps);
        self.surface.set_display(&options.display);
        self.options = options;
    }

    /// Release the render surface and stop accepting input.
    pub fn dispose(mut self) {
        self.surface.dispose();
        log::info!("spin viewer disposed");
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use super::*;
    use crate::assets::{
        AssetSource, Assets, MeshData, Model, ProceduralPropeller, BODY_MESH,
    };
    use crate::input::{InputEvent, MouseButton};
    use crate::render::recording::RecordingSurface;

    fn viewer() -> SpinViewer<RecordingSurface> {
        SpinViewer::initialize(
            &ProceduralPropeller::default(),
            |assets: &Assets, _: &Options| {
                Ok(RecordingSurface::from_model(&assets.model))
            },
            Options::default(),
        )
        .unwrap()
    }

    struct FailingSource;

    impl AssetSource for FailingSource {
        fn load(&self) -> Result<Assets, GyreError> {
            Err(GyreError::AssetLoad("model.glb: not found".into()))
        }
    }

    #[test]
    fn asset_failure_stops_initialization() {
        let mut built = false;
        let result = SpinViewer::initialize(
            &FailingSource,
            |assets: &Assets, _: &Options| {
                built = true;
                Ok(RecordingSurface::from_model(&assets.model))
            },
            Options::default(),
        );
        assert!(matches!(result, Err(GyreError::AssetLoad(_))));
        assert!(!built);
    }

    #[test]
    fn missing_spin_mesh_is_reported() {
        let result = SpinViewer::initialize(
            &ProceduralPropeller::default(),
            |_: &Assets, _: &Options| Ok(RecordingSurface::default()),
            Options::default(),
        );
        assert!(matches!(result, Err(GyreError::MissingMesh(_))));
    }

    struct BodyOnly;

    impl AssetSource for BodyOnly {
        fn load(&self) -> Result<Assets, GyreError> {
            Ok(Assets {
                model: Model {
                    meshes: vec![MeshData::named(BODY_MESH)],
                },
            })
        }
    }

    #[test]
    fn model_without_propeller_never_builds_a_surface() {
        let mut built = false;
        let result = SpinViewer::initialize(
            &BodyOnly,
            |assets: &Assets, _: &Options| {
                built = true;
                Ok(RecordingSurface::from_model(&assets.model))
            },
            Options::default(),
        );
        assert!(matches!(result, Err(GyreError::MissingMesh(_))));
        assert!(!built);
    }

    #[test]
    fn surface_failure_propagates() {
        let result = SpinViewer::<RecordingSurface>::initialize(
            &ProceduralPropeller::default(),
            |_: &Assets, _: &Options| {
                Err(GyreError::Render("no adapter".into()))
            },
            Options::default(),
        );
        assert!(matches!(result, Err(GyreError::Render(_))));
    }

    #[test]
    fn initialize_resolves_propeller_and_viewport() {
        let viewer = viewer();
        assert_eq!(viewer.spin_mesh().index(), 1);
        assert_eq!(viewer.input().viewport().width, 800);
        assert_eq!(viewer.input().viewport().height, 400);
    }

    #[test]
    fn ticks_render_once_each() {
        let mut viewer = viewer();
        for _ in 0..4 {
            let _ = viewer.tick_with_delta(0.016).unwrap();
        }
        assert_eq!(viewer.surface().renders, 4);
        assert_eq!(viewer.surface().poses.len(), 4);
    }

    #[test]
    fn touch_then_wheel_ignores_wheel() {
        let mut viewer = viewer();
        let _ = viewer.tick_with_delta(0.016).unwrap();
        let before = viewer.input().spin_target();

        assert!(viewer.handle_input(InputEvent::TouchStart {
            x: 100.0,
            y: 100.0,
            in_capture_region: true,
        }));
        assert!(!viewer.handle_input(InputEvent::Wheel { delta_y: 100.0 }));
        assert_eq!(viewer.input().spin_target(), before);

        let _ = viewer.tick_with_delta(0.0).unwrap();
        assert_eq!(viewer.input().spin_target(), before);
    }

    #[test]
    fn drag_turns_the_model() {
        let mut viewer = viewer();
        let _ = viewer.handle_input(InputEvent::PointerMoved { x: 400.0, y: 200.0 });
        let _ = viewer.handle_input(InputEvent::MouseButton {
            button: MouseButton::Left,
            pressed: true,
        });
        let _ = viewer.handle_input(InputEvent::PointerMoved { x: 800.0, y: 200.0 });
        let pose = viewer.tick_with_delta(0.016).unwrap();
        assert!(viewer.orientation().look_at.x > 0.0);
        assert!((pose.model_rotation * glam::Vec3::Z).x > 0.0);
    }

    #[test]
    fn resize_updates_viewport_and_surface() {
        let mut viewer = viewer();
        viewer.resize(1000, 250);
        assert_eq!(viewer.surface().size, (1000, 250));
        assert_eq!(viewer.input().viewport().width, 1000);
        assert!((viewer.surface().aspect() - 4.0).abs() < 1e-6);
    }

    #[test]
    fn set_options_retunes_interaction() {
        let mut viewer = viewer();
        let mut options = Options::default();
        options.interaction.scroll_sensitivity = 0.03;
        viewer.set_options(options);
        let _ = viewer.handle_input(InputEvent::Wheel { delta_y: 100.0 });
        assert!((viewer.input().spin_target() - -3.0).abs() < 1e-6);
    }

    #[test]
    fn set_options_reaches_surface_and_frame_cap() {
        let mut viewer = viewer();
        assert!(viewer.surface().display.is_none());

        let mut options = Options::default();
        options.display.min_scale = 0.5;
        options.display.metalness = 0.2;
        options.display.target_fps = 30;
        viewer.set_options(options.clone());

        assert_eq!(viewer.surface().display.as_ref(), Some(&options.display));
        assert_eq!(viewer.driver.timing().target_fps(), 30);
        assert_eq!(viewer.options(), &options);
    }

    #[test]
    fn dispose_releases_surface() {
        let viewer = viewer();
        let disposed = Rc::clone(&viewer.surface().disposed);
        assert!(!disposed.get());
        viewer.dispose();
        assert!(disposed.get());
    }
}
