use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::input::Viewport;
use crate::orientation::EaseMode;

/// Rectangle of the viewport, in fractions of its size, where a touch
/// starts a pan. Touches elsewhere scroll the spin instead.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, JsonSchema)]
#[serde(default)]
pub struct CaptureRegion {
    /// Left edge as a fraction of the width.
    pub left: f32,
    /// Top edge as a fraction of the height.
    pub top: f32,
    /// Right edge as a fraction of the width.
    pub right: f32,
    /// Bottom edge as a fraction of the height.
    pub bottom: f32,
}

impl CaptureRegion {
    /// The whole viewport.
    pub const FULL: Self = Self {
        left: 0.0,
        top: 0.0,
        right: 1.0,
        bottom: 1.0,
    };

    /// Whether the pixel position `(x, y)` lies inside the region. Edges
    /// are inclusive.
    #[must_use]
    pub fn contains(&self, x: f32, y: f32, viewport: Viewport) -> bool {
        let fx = x / viewport.width.max(1) as f32;
        let fy = y / viewport.height.max(1) as f32;
        (self.left..=self.right).contains(&fx)
            && (self.top..=self.bottom).contains(&fy)
    }
}

impl Default for CaptureRegion {
    /// The middle half of the viewport, full height.
    fn default() -> Self {
        Self {
            left: 0.25,
            top: 0.0,
            right: 0.75,
            bottom: 1.0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Interaction", inline)]
#[serde(default)]
/// Tuning for how input turns into motion.
pub struct InteractionOptions {
    /// Radians of spin per pixel of wheel travel.
    #[schemars(title = "Scroll Sensitivity", range(min = 0.001, max = 0.1), extend("step" = 0.001))]
    pub scroll_sensitivity: f32,
    /// Free-spin rate in radians per second.
    #[schemars(title = "Spin Speed", range(min = 0.0, max = 5.0), extend("step" = 0.05))]
    pub spin_speed: f32,
    /// Spin blend ratio after a wheel event.
    #[schemars(title = "Wheel Ease", range(min = 0.001, max = 1.0), extend("step" = 0.001))]
    pub wheel_ease: f32,
    /// Spin blend ratio before the first wheel event.
    #[schemars(skip)]
    pub initial_spin_ease: f32,
    /// Look-at blend ratio while dragging.
    #[schemars(title = "Drag Follow", range(min = 0.01, max = 1.0), extend("step" = 0.01))]
    pub pan_look_ease: f32,
    /// Look-at blend ratio while released.
    #[schemars(title = "Settle", range(min = 0.01, max = 1.0), extend("step" = 0.01))]
    pub idle_look_ease: f32,
    /// Whether blend ratios are applied per frame or per unit time.
    #[schemars(title = "Ease Mode")]
    pub ease_mode: EaseMode,
    /// Frame rate at which time-normalized easing matches per-frame easing.
    #[schemars(skip)]
    pub reference_fps: f32,
    /// Pixels per line for line-based wheel deltas.
    #[schemars(skip)]
    pub wheel_line_pixels: f32,
    /// Scroll pixels per pixel of vertical finger travel outside the
    /// capture region.
    #[schemars(title = "Touch Scroll", range(min = 0.1, max = 10.0), extend("step" = 0.1))]
    pub touch_scroll_multiplier: f32,
    /// Scroll pixels per arrow-key press.
    #[schemars(skip)]
    pub key_scroll_step: f32,
    /// Where a touch pans instead of scrolling.
    #[schemars(skip)]
    pub touch_capture: CaptureRegion,
}

impl Default for InteractionOptions {
    fn default() -> Self {
        Self {
            scroll_sensitivity: 0.015,
            spin_speed: 0.8,
            wheel_ease: 0.01,
            initial_spin_ease: 1.0,
            pan_look_ease: 0.8,
            idle_look_ease: 0.1,
            ease_mode: EaseMode::PerFrame,
            reference_fps: 60.0,
            wheel_line_pixels: 100.0,
            touch_scroll_multiplier: 2.0,
            key_scroll_step: 120.0,
            touch_capture: CaptureRegion::default(),
        }
    }
}
