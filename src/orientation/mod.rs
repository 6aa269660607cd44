//! Orientation easing: turns aggregated input targets into the spin angle
//! and facing direction drawn each frame.

/// Per-frame easing controller.
pub mod controller;
/// Blend helpers and the frame-rate handling of blend ratios.
pub mod easing;
/// Orientation values and look-at rotation math.
pub mod pose;

pub use controller::OrientationController;
pub use easing::{lerp, EaseMode};
pub use pose::{look_rotation, Orientation};
