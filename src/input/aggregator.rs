//! Reduces raw input events into the spin and look-at targets.
//!
//! The `InputAggregator` owns every piece of interaction state (mode,
//! pointer anchor, touch side, scroll direction and the accumulated spin
//! target). It only ever changes through [`InputAggregator::handle_event`]
//! and the per-frame [`InputAggregator::advance_spin`]; the orientation
//! controller reads it but never writes to it.

use glam::Vec2;

use super::event::{InputEvent, MouseButton};
use super::pointer::{PointerTracker, Viewport};
use crate::options::InteractionOptions;

/// Which device started the current pan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanSource {
    /// Mouse button press.
    Mouse,
    /// Touch inside the capture region.
    Touch,
}

/// The interaction state machine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InteractionMode {
    /// No pointer held; the look-at target relaxes to straight ahead.
    Idle,
    /// Pointer held; the look-at target follows the drag.
    Panning {
        /// Device that owns the pan.
        source: PanSource,
        /// Normalized pointer position when the pan began.
        start: Vec2,
    },
}

impl InteractionMode {
    /// Whether a pan is active.
    #[must_use]
    pub fn is_panning(&self) -> bool {
        matches!(self, Self::Panning { .. })
    }

    /// Whether a touch gesture owns the interaction. Wheel input is
    /// suppressed while this holds.
    #[must_use]
    pub fn is_touch(&self) -> bool {
        matches!(
            self,
            Self::Panning {
                source: PanSource::Touch,
                ..
            }
        )
    }
}

/// Sign applied to free spin and recorded from the last wheel event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpinDirection {
    /// Positive angular direction.
    Forward,
    /// Negative angular direction.
    Reverse,
}

impl SpinDirection {
    /// `+1.0` or `-1.0`.
    #[must_use]
    pub fn sign(self) -> f32 {
        match self {
            Self::Forward => 1.0,
            Self::Reverse => -1.0,
        }
    }

    /// Direction with the given sign; `value` must be non-zero.
    fn from_sign(value: f32) -> Self {
        if value < 0.0 {
            Self::Reverse
        } else {
            Self::Forward
        }
    }
}

/// Scroll-derived spin parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollState {
    /// Direction of the last accepted wheel event.
    pub direction: SpinDirection,
    /// Blend factor applied to the spin angle each frame.
    pub ratio: f32,
}

/// Converts [`InputEvent`]s into interaction state.
///
/// # Usage
///
/// ```ignore
/// let mut aggregator = InputAggregator::new(&options.interaction);
/// aggregator.set_viewport(Viewport::new(1280, 720));
/// let _ = aggregator.handle_event(InputEvent::Wheel { delta_y: 100.0 });
/// ```
#[derive(Debug, Clone)]
pub struct InputAggregator {
    options: InteractionOptions,
    viewport: Viewport,
    pointer: PointerTracker,
    mode: InteractionMode,
    /// Last touch-start landed on the left half of the viewport.
    touch_left: bool,
    /// Last vertical pixel position of a touch that began outside the
    /// capture region; its movement scrolls the spin.
    scroll_touch: Option<f32>,
    scroll: ScrollState,
    /// Unwrapped spin attractor in radians.
    spin_target: f32,
}

impl InputAggregator {
    /// Fresh state: idle, spinning forward, first frame snaps.
    #[must_use]
    pub fn new(options: &InteractionOptions) -> Self {
        Self {
            options: options.clone(),
            viewport: Viewport::default(),
            pointer: PointerTracker::new(),
            mode: InteractionMode::Idle,
            touch_left: false,
            scroll_touch: None,
            scroll: ScrollState {
                direction: SpinDirection::Forward,
                ratio: options.initial_spin_ease,
            },
            spin_target: 0.0,
        }
    }

    /// Replace the interaction tuning. Current state is kept.
    pub fn set_options(&mut self, options: &InteractionOptions) {
        self.options = options.clone();
    }

    /// Interaction tuning in effect.
    #[must_use]
    pub fn options(&self) -> &InteractionOptions {
        &self.options
    }

    /// Update the viewport used to normalize pixel positions.
    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    /// Current viewport.
    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Current interaction mode.
    #[must_use]
    pub fn mode(&self) -> InteractionMode {
        self.mode
    }

    /// Whether the last touch-start was on the left half.
    #[must_use]
    pub fn is_touch_left(&self) -> bool {
        self.touch_left
    }

    /// Scroll direction and spin blend ratio.
    #[must_use]
    pub fn scroll(&self) -> ScrollState {
        self.scroll
    }

    /// Accumulated spin target in radians.
    #[must_use]
    pub fn spin_target(&self) -> f32 {
        self.spin_target
    }

    /// Latest normalized pointer position.
    #[must_use]
    pub fn pointer(&self) -> Vec2 {
        self.pointer.position()
    }

    /// Process one input event.
    ///
    /// Returns `false` when the event was ignored (non-primary mouse
    /// buttons, a second touch while one is down, wheel input during a
    /// touch gesture, zero wheel deltas).
    pub fn handle_event(&mut self, event: InputEvent) -> bool {
        match event {
            InputEvent::PointerMoved { x, y } => {
                self.pointer.update(x, y, self.viewport);
                true
            }
            InputEvent::TouchMoved { x, y } => {
                self.pointer.update(x, y, self.viewport);
                if let Some(last_y) = self.scroll_touch {
                    self.scroll_touch = Some(y);
                    let delta_y =
                        (last_y - y) * self.options.touch_scroll_multiplier;
                    let _ = self.apply_wheel(delta_y);
                }
                true
            }
            InputEvent::MouseButton { button, pressed } => {
                self.handle_mouse_button(button, pressed)
            }
            InputEvent::TouchStart {
                x,
                y,
                in_capture_region,
            } => self.handle_touch_start(x, y, in_capture_region),
            InputEvent::TouchEnd => {
                self.scroll_touch = None;
                self.end_pan();
                true
            }
            InputEvent::Wheel { delta_y } => self.apply_wheel(delta_y),
            InputEvent::Key(key) => self.apply_wheel(
                key.delta(self.viewport.height, self.options.key_scroll_step),
            ),
        }
    }

    /// Advance the spin target by free rotation for `dt` seconds.
    ///
    /// Negative or non-finite deltas are treated as zero.
    pub fn advance_spin(&mut self, dt: f32) -> f32 {
        let dt = if dt.is_finite() { dt.max(0.0) } else { 0.0 };
        self.spin_target +=
            self.scroll.direction.sign() * dt * self.options.spin_speed;
        self.spin_target
    }

    /// Pointer displacement since the pan began; zero while idle.
    #[must_use]
    pub fn look_displacement(&self) -> Vec2 {
        match self.mode {
            InteractionMode::Panning { start, .. } => {
                self.pointer.position() - start
            }
            InteractionMode::Idle => Vec2::ZERO,
        }
    }

    fn handle_mouse_button(&mut self, button: MouseButton, pressed: bool) -> bool {
        if button != MouseButton::Left {
            return false;
        }
        if pressed {
            if self.mode.is_panning() {
                return false;
            }
            self.begin_pan(PanSource::Mouse);
            return true;
        }
        // A release never ends a touch gesture.
        if self.mode.is_touch() {
            return false;
        }
        self.end_pan();
        true
    }

    fn handle_touch_start(
        &mut self,
        x: f32,
        y: f32,
        in_capture_region: bool,
    ) -> bool {
        // Only the first finger counts.
        if self.mode.is_panning() || self.scroll_touch.is_some() {
            return false;
        }
        self.pointer.update(x, y, self.viewport);
        self.touch_left = self.pointer.position().x < 0.0;
        if in_capture_region {
            self.begin_pan(PanSource::Touch);
        } else {
            self.scroll_touch = Some(y);
        }
        true
    }

    fn begin_pan(&mut self, source: PanSource) {
        let start = self.pointer.position();
        log::debug!("pan started ({source:?}) at {start}");
        self.mode = InteractionMode::Panning { source, start };
    }

    fn end_pan(&mut self) {
        if self.mode.is_panning() {
            log::debug!("pan ended");
        }
        self.mode = InteractionMode::Idle;
        self.pointer.clear();
    }

    fn apply_wheel(&mut self, delta_y: f32) -> bool {
        if self.mode.is_touch() {
            log::debug!("wheel ignored during touch gesture");
            return false;
        }
        if delta_y == 0.0 || !delta_y.is_finite() {
            return false;
        }
        let side = if self.touch_left { 1.0 } else { -1.0 };
        self.spin_target += side * delta_y * self.options.scroll_sensitivity;
        self.scroll = ScrollState {
            direction: SpinDirection::from_sign(side * delta_y.signum()),
            ratio: self.options.wheel_ease,
        };
        true
    }
}
