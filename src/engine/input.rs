//! Input and viewport methods for SpinViewer

use super::SpinViewer;
use crate::input::{InputEvent, Viewport};
use crate::render::RenderSurface;

impl<S: RenderSurface> SpinViewer<S> {
    /// Process a platform-agnostic input event.
    ///
    /// Events only mutate interaction state; nothing is drawn until the
    /// next [`tick`](Self::tick). Returns `false` if the event was ignored.
    ///
    /// # Example
    ///
    /// ```ignore
    /// viewer.handle_input(InputEvent::PointerMoved { x, y });
    /// viewer.handle_input(InputEvent::Wheel { delta_y: 100.0 });
    /// ```
    pub fn handle_input(&mut self, event: InputEvent) -> bool {
        self.input.handle_event(event)
    }

    /// Viewport resized to `width` × `height` physical pixels.
    pub fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        self.input.set_viewport(Viewport::new(width, height));
        self.surface.resize(width, height);
    }
}
