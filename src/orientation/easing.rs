//! Exponential easing toward a moving target.
//!
//! Every eased quantity in the viewer follows the same per-step blend,
//! `current += (target - current) * ratio`, which converges geometrically
//! without overshoot for ratios in `[0, 1]`.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// How a blend ratio relates to elapsed time.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum EaseMode {
    /// The ratio is applied once per frame regardless of frame duration.
    /// Settling takes longer in wall-clock time at lower frame rates.
    #[default]
    PerFrame,
    /// The ratio is treated as the per-frame fraction at a reference frame
    /// rate and rescaled by the actual frame duration, so settling time is
    /// independent of frame rate.
    TimeNormalized,
}

impl EaseMode {
    /// Blend factor to apply for a frame lasting `dt` seconds.
    ///
    /// `ratio` is clamped to `[0, 1]`. In time-normalized mode a
    /// non-positive `dt` yields `0.0` (no movement).
    #[inline]
    #[must_use]
    pub fn effective_ratio(self, ratio: f32, dt: f32, reference_fps: f32) -> f32 {
        let ratio = if ratio.is_finite() { ratio.clamp(0.0, 1.0) } else { 0.0 };
        match self {
            Self::PerFrame => ratio,
            Self::TimeNormalized => {
                let valid = dt.is_finite()
                    && dt > 0.0
                    && reference_fps.is_finite()
                    && reference_fps > 0.0;
                if !valid {
                    return 0.0;
                }
                1.0 - (1.0 - ratio).powf(dt * reference_fps)
            }
        }
    }
}

/// Linear interpolation between `a` and `b` by `t`.
#[inline]
#[must_use]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lerp_endpoints() {
        assert_eq!(lerp(2.0, 6.0, 0.0), 2.0);
        assert_eq!(lerp(2.0, 6.0, 0.5), 4.0);
        assert_eq!(lerp(2.0, 6.0, 1.0), 6.0);
    }

    #[test]
    fn lerp_is_fixed_at_target() {
        assert_eq!(lerp(3.25, 3.25, 0.01), 3.25);
    }

    #[test]
    fn per_frame_ignores_dt() {
        let mode = EaseMode::PerFrame;
        assert_eq!(mode.effective_ratio(0.1, 0.001, 60.0), 0.1);
        assert_eq!(mode.effective_ratio(0.1, 1.0, 60.0), 0.1);
    }

    #[test]
    fn ratio_is_clamped() {
        let mode = EaseMode::PerFrame;
        assert_eq!(mode.effective_ratio(1.5, 0.016, 60.0), 1.0);
        assert_eq!(mode.effective_ratio(-0.5, 0.016, 60.0), 0.0);
        assert_eq!(mode.effective_ratio(f32::NAN, 0.016, 60.0), 0.0);
    }

    #[test]
    fn time_normalized_matches_at_reference_rate() {
        let mode = EaseMode::TimeNormalized;
        let r = mode.effective_ratio(0.1, 1.0 / 60.0, 60.0);
        assert!((r - 0.1).abs() < 1e-5);
    }

    #[test]
    fn time_normalized_is_rate_independent() {
        // Two 30 fps frames should settle as far as four 60 fps frames.
        let mode = EaseMode::TimeNormalized;
        let mut slow = 0.0;
        for _ in 0..2 {
            slow = lerp(slow, 1.0, mode.effective_ratio(0.1, 1.0 / 30.0, 60.0));
        }
        let mut fast = 0.0;
        for _ in 0..4 {
            fast = lerp(fast, 1.0, mode.effective_ratio(0.1, 1.0 / 60.0, 60.0));
        }
        assert!((slow - fast).abs() < 1e-5);
    }

    #[test]
    fn time_normalized_zero_dt_holds_still() {
        let mode = EaseMode::TimeNormalized;
        assert_eq!(mode.effective_ratio(0.8, 0.0, 60.0), 0.0);
        assert_eq!(mode.effective_ratio(0.8, -0.1, 60.0), 0.0);
    }

    #[test]
    fn full_ratio_snaps_in_both_modes() {
        assert_eq!(EaseMode::PerFrame.effective_ratio(1.0, 0.016, 60.0), 1.0);
        assert_eq!(
            EaseMode::TimeNormalized.effective_ratio(1.0, 0.016, 60.0),
            1.0
        );
    }
}
