use super::keys::ScrollKey;

/// Platform-agnostic input events.
///
/// These are fed into an [`InputAggregator`](super::InputAggregator), which
/// reduces them into the spin and look-at targets read every frame.
///
/// # Example
///
/// ```ignore
/// aggregator.handle_event(InputEvent::PointerMoved { x: 100.0, y: 200.0 });
/// aggregator.handle_event(InputEvent::Wheel { delta_y: 120.0 });
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Cursor moved to absolute screen position.
    PointerMoved {
        /// Horizontal position in physical pixels.
        x: f32,
        /// Vertical position in physical pixels.
        y: f32,
    },
    /// Mouse button pressed or released.
    MouseButton {
        /// Which button changed.
        button: MouseButton,
        /// `true` for press, `false` for release.
        pressed: bool,
    },
    /// A finger touched the screen.
    TouchStart {
        /// Horizontal position in physical pixels.
        x: f32,
        /// Vertical position in physical pixels.
        y: f32,
        /// Whether the touch landed on the touch-capture region. Only
        /// those touches start a pan; every touch updates the side flag.
        in_capture_region: bool,
    },
    /// The active touch moved.
    TouchMoved {
        /// Horizontal position in physical pixels.
        x: f32,
        /// Vertical position in physical pixels.
        y: f32,
    },
    /// The touch was lifted or cancelled.
    TouchEnd,
    /// Scroll wheel or trackpad scroll.
    Wheel {
        /// Vertical scroll amount in pixels, positive scrolling down.
        delta_y: f32,
    },
    /// A scrolling key was pressed. Handled like a wheel event.
    Key(ScrollKey),
}

/// Platform-agnostic mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Primary (left) mouse button.
    Left,
    /// Secondary (right) mouse button.
    Right,
    /// Middle mouse button (wheel click).
    Middle,
}

#[cfg(feature = "viewer")]
impl From<winit::event::MouseButton> for MouseButton {
    fn from(button: winit::event::MouseButton) -> Self {
        match button {
            winit::event::MouseButton::Right => Self::Right,
            winit::event::MouseButton::Middle => Self::Middle,
            _ => Self::Left,
        }
    }
}
