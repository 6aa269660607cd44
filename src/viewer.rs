//! Standalone spin viewer window backed by winit.
//!
//! ```no_run
//! # use gyre::Viewer;
//! Viewer::builder()
//!     .with_title("Propeller")
//!     .with_blade_count(4)
//!     .build()
//!     .run()
//!     .unwrap();
//! ```

use std::sync::Arc;

use winit::{
    application::ApplicationHandler,
    event::{ElementState, MouseScrollDelta, Touch, TouchPhase, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::PhysicalKey,
    window::{Window, WindowId},
};

use crate::{
    assets::{Assets, ProceduralPropeller},
    error::GyreError,
    gpu::MeshRenderer,
    input::ScrollKey,
    options::Options,
    InputEvent, MouseButton, SpinViewer,
};

// ── Builder ──────────────────────────────────────────────────────────────

/// Fluent builder for [`Viewer`].
pub struct ViewerBuilder {
    options: Option<Options>,
    title: String,
    blade_count: u32,
}

impl ViewerBuilder {
    /// Create a builder with sensible defaults (title "Gyre", default
    /// options, three blades).
    fn new() -> Self {
        Self {
            options: None,
            title: "Gyre".into(),
            blade_count: ProceduralPropeller::default().blade_count,
        }
    }

    /// Override the default options.
    #[must_use]
    pub fn with_options(mut self, options: Options) -> Self {
        self.options = Some(options);
        self
    }

    /// Set the window title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Number of propeller blades on the built-in model.
    #[must_use]
    pub fn with_blade_count(mut self, blade_count: u32) -> Self {
        self.blade_count = blade_count;
        self
    }

    /// Consume the builder and produce a [`Viewer`].
    #[must_use]
    pub fn build(self) -> Viewer {
        Viewer {
            options: self.options.unwrap_or_default(),
            title: self.title,
            blade_count: self.blade_count,
        }
    }
}

// ── Viewer ───────────────────────────────────────────────────────────────

/// A standalone window that displays the spinning propeller.
///
/// Construct via [`Viewer::builder`], then call [`run`](Self::run) to
/// enter the event loop.
pub struct Viewer {
    options: Options,
    title: String,
    blade_count: u32,
}

impl Viewer {
    /// Start a new builder.
    #[must_use]
    pub fn builder() -> ViewerBuilder {
        ViewerBuilder::new()
    }

    /// Open the window and run the event loop. Blocks until the window is
    /// closed.
    ///
    /// # Errors
    ///
    /// Returns [`GyreError::Viewer`] if the event loop fails, or the
    /// initialization error if the window, GPU or model could not be set up.
    pub fn run(self) -> Result<(), GyreError> {
        let event_loop =
            EventLoop::new().map_err(|e| GyreError::Viewer(e.to_string()))?;
        event_loop.set_control_flow(ControlFlow::Poll);

        let mut app = ViewerApp {
            window: None,
            viewer: None,
            primary_touch: PrimaryTouch::default(),
            shift: false,
            options: self.options,
            title: self.title,
            blade_count: self.blade_count,
            init_error: None,
        };

        event_loop
            .run_app(&mut app)
            .map_err(|e| GyreError::Viewer(e.to_string()))?;

        app.init_error.map_or(Ok(()), Err)
    }
}

// ── Winit app ────────────────────────────────────────────────────────────

/// Internal winit application handler.
struct ViewerApp {
    window: Option<Arc<Window>>,
    viewer: Option<SpinViewer<MeshRenderer>>,
    primary_touch: PrimaryTouch,
    shift: bool,
    options: Options,
    title: String,
    blade_count: u32,
    init_error: Option<GyreError>,
}

/// Surface size for a window, never zero.
fn viewport_size(inner: winit::dpi::PhysicalSize<u32>) -> (u32, u32) {
    (inner.width.max(1), inner.height.max(1))
}

/// Convert a winit wheel delta to DOM-style pixels (positive = scroll down).
#[allow(clippy::cast_possible_truncation)]
fn wheel_pixels(delta: MouseScrollDelta, line_pixels: f32) -> f32 {
    match delta {
        MouseScrollDelta::LineDelta(_, y) => -y * line_pixels,
        MouseScrollDelta::PixelDelta(pos) => -pos.y as f32,
    }
}

/// Follows the first finger down and drops events from any other.
#[derive(Debug, Default)]
struct PrimaryTouch {
    id: Option<u64>,
}

impl PrimaryTouch {
    /// Whether an event from finger `id` in `phase` should be forwarded.
    fn accept(&mut self, id: u64, phase: TouchPhase) -> bool {
        match (phase, self.id) {
            (TouchPhase::Started, None) => {
                self.id = Some(id);
                true
            }
            (TouchPhase::Started, Some(_)) => false,
            (TouchPhase::Moved, current) => current == Some(id),
            (TouchPhase::Ended | TouchPhase::Cancelled, current) => {
                if current == Some(id) {
                    self.id = None;
                    true
                } else {
                    false
                }
            }
        }
    }
}

/// Map a touch to the matching input event. Only touch-starts inside the
/// capture region pan; the rest scroll.
#[allow(clippy::cast_possible_truncation)]
fn touch_event(
    phase: TouchPhase,
    x: f64,
    y: f64,
    viewer: &SpinViewer<MeshRenderer>,
) -> InputEvent {
    let (x, y) = (x as f32, y as f32);
    match phase {
        TouchPhase::Started => {
            let input = viewer.input();
            let region = input.options().touch_capture;
            InputEvent::TouchStart {
                x,
                y,
                in_capture_region: region.contains(x, y, input.viewport()),
            }
        }
        TouchPhase::Moved => InputEvent::TouchMoved { x, y },
        TouchPhase::Ended | TouchPhase::Cancelled => InputEvent::TouchEnd,
    }
}

impl ViewerApp {
    fn fail(&mut self, event_loop: &ActiveEventLoop, error: GyreError) {
        log::error!("viewer initialization failed: {error}");
        self.init_error = Some(error);
        event_loop.exit();
    }

    fn shutdown(&mut self, event_loop: &ActiveEventLoop) {
        if let Some(viewer) = self.viewer.take() {
            viewer.dispose();
        }
        event_loop.exit();
    }
}

impl ApplicationHandler for ViewerApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let monitor = event_loop
            .primary_monitor()
            .or_else(|| event_loop.available_monitors().next());
        let attrs = if let Some(mon) = &monitor {
            let mon_size = mon.size();
            let scale = mon.scale_factor();
            #[allow(clippy::cast_possible_truncation)]
            let logical_w = (f64::from(mon_size.width) / scale * 0.75) as u32;
            #[allow(clippy::cast_possible_truncation)]
            let logical_h = (f64::from(mon_size.height) / scale * 0.75) as u32;
            Window::default_attributes()
                .with_title(&self.title)
                .with_inner_size(winit::dpi::LogicalSize::new(
                    logical_w, logical_h,
                ))
        } else {
            Window::default_attributes().with_title(&self.title)
        };

        let window = match event_loop.create_window(attrs) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                self.fail(event_loop, GyreError::Viewer(e.to_string()));
                return;
            }
        };

        let size = viewport_size(window.inner_size());
        let source = ProceduralPropeller {
            blade_count: self.blade_count,
        };
        let surface_window = Arc::clone(&window);
        let result = SpinViewer::initialize(
            &source,
            |assets: &Assets, options: &Options| {
                let renderer = pollster::block_on(MeshRenderer::new(
                    surface_window,
                    size,
                    &assets.model,
                    &options.display,
                ))?;
                Ok(renderer)
            },
            self.options.clone(),
        );

        match result {
            Ok(viewer) => {
                window.request_redraw();
                self.window = Some(window);
                self.viewer = Some(viewer);
            }
            Err(e) => self.fail(event_loop, e),
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _id: WindowId,
        event: WindowEvent,
    ) {
        if matches!(event, WindowEvent::CloseRequested) {
            self.shutdown(event_loop);
            return;
        }

        let (Some(window), Some(viewer)) = (&self.window, &mut self.viewer)
        else {
            return;
        };

        match event {
            WindowEvent::Resized(event_size) => {
                let (width, height) = viewport_size(event_size);
                viewer.resize(width, height);
            }

            WindowEvent::RedrawRequested => {
                if viewer.should_render() {
                    if let Err(e) = viewer.tick() {
                        log::error!("{e}");
                    }
                }
                window.request_redraw();
            }

            WindowEvent::MouseInput { button, state, .. } => {
                let _ = viewer.handle_input(InputEvent::MouseButton {
                    button: MouseButton::from(button),
                    pressed: state == ElementState::Pressed,
                });
            }

            WindowEvent::CursorMoved { position, .. } => {
                #[allow(clippy::cast_possible_truncation)]
                let _ = viewer.handle_input(InputEvent::PointerMoved {
                    x: position.x as f32,
                    y: position.y as f32,
                });
            }

            WindowEvent::Touch(Touch {
                id, phase, location, ..
            }) => {
                if self.primary_touch.accept(id, phase) {
                    let event =
                        touch_event(phase, location.x, location.y, viewer);
                    let _ = viewer.handle_input(event);
                }
            }

            WindowEvent::ModifiersChanged(modifiers) => {
                self.shift = modifiers.state().shift_key();
            }

            WindowEvent::KeyboardInput { event, .. } => {
                if event.state != ElementState::Pressed {
                    return;
                }
                let PhysicalKey::Code(code) = event.physical_key else {
                    return;
                };
                if let Some(key) = ScrollKey::from_key_code(code, self.shift) {
                    let _ = viewer.handle_input(InputEvent::Key(key));
                }
            }

            WindowEvent::MouseWheel { delta, .. } => {
                let line_pixels =
                    viewer.options().interaction.wheel_line_pixels;
                let _ = viewer.handle_input(InputEvent::Wheel {
                    delta_y: wheel_pixels(delta, line_pixels),
                });
            }

            _ => (),
        }
    }
}
