//! Per-frame easing of the spin angle and look-at direction.

use glam::Vec3;

use super::easing::lerp;
use super::pose::Orientation;
use crate::input::InputAggregator;

/// Eases the displayed orientation toward the aggregator's targets.
///
/// There is no velocity state: the spin target keeps advancing at a
/// constant rate while `current` trails it by the blend ratio, so the
/// apparent momentum after a wheel nudge comes entirely from that lag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrientationController {
    spin: f32,
    look_at: Vec3,
}

impl OrientationController {
    /// Facing straight ahead with no spin.
    #[must_use]
    pub fn new() -> Self {
        Self {
            spin: 0.0,
            look_at: Vec3::Z,
        }
    }

    /// Current eased state.
    #[must_use]
    pub fn orientation(&self) -> Orientation {
        Orientation {
            spin_angle: self.spin,
            look_at: self.look_at,
        }
    }

    /// Where the look-at vector is heading this frame.
    ///
    /// While panning this is the drag displacement stretched by `aspect`
    /// and pushed one unit forward; while idle it is straight ahead.
    #[must_use]
    pub fn look_target(input: &InputAggregator, aspect: f32) -> Vec3 {
        let d = input.look_displacement();
        Vec3::new(d.x * aspect, d.y, 1.0)
            .try_normalize()
            .unwrap_or(Vec3::Z)
    }

    /// Run one frame of `dt` seconds and return the new orientation.
    pub fn advance(
        &mut self,
        input: &mut InputAggregator,
        dt: f32,
        aspect: f32,
    ) -> Orientation {
        let opts = input.options().clone();

        let spin_target = input.advance_spin(dt);
        let spin_ratio = opts.ease_mode.effective_ratio(
            input.scroll().ratio,
            dt,
            opts.reference_fps,
        );
        self.spin = lerp(self.spin, spin_target, spin_ratio);

        let look_ease = if input.mode().is_panning() {
            opts.pan_look_ease
        } else {
            opts.idle_look_ease
        };
        let look_ratio =
            opts.ease_mode
                .effective_ratio(look_ease, dt, opts.reference_fps);
        let target = Self::look_target(input, aspect);
        self.look_at += (target - self.look_at) * look_ratio;

        self.orientation()
    }
}

impl Default for OrientationController {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::{InputEvent, MouseButton, SpinDirection, Viewport};
    use crate::options::InteractionOptions;
    use crate::orientation::EaseMode;

    const DT: f32 = 0.016;

    fn setup() -> (OrientationController, InputAggregator) {
        let mut input = InputAggregator::new(&InteractionOptions::default());
        input.set_viewport(Viewport::new(800, 400));
        (OrientationController::new(), input)
    }

    fn press(input: &mut InputAggregator, pressed: bool) {
        let _ = input.handle_event(InputEvent::MouseButton {
            button: MouseButton::Left,
            pressed,
        });
    }

    #[test]
    fn first_frame_snaps_spin_to_target() {
        let (mut ctl, mut input) = setup();
        let o = ctl.advance(&mut input, DT, 2.0);
        assert_eq!(o.spin_angle, input.spin_target());
        assert!((o.spin_angle - DT * 0.8).abs() < 1e-6);
    }

    #[test]
    fn zero_dt_at_rest_is_a_fixed_point() {
        let (mut ctl, mut input) = setup();
        let _ = ctl.advance(&mut input, 0.0, 2.0);
        let before = ctl.orientation();
        for _ in 0..5 {
            let _ = ctl.advance(&mut input, 0.0, 2.0);
        }
        assert_eq!(ctl.orientation(), before);
        assert_eq!(before.look_at, Vec3::Z);
    }

    #[test]
    fn idle_spin_traces_target_without_overshoot() {
        let (mut ctl, mut input) = setup();
        let _ = ctl.advance(&mut input, 0.0, 2.0);

        // A left-side touch makes a downward wheel spin forward.
        let _ = input.handle_event(InputEvent::TouchStart {
            x: 10.0,
            y: 10.0,
            in_capture_region: false,
        });
        let _ = input.handle_event(InputEvent::TouchEnd);
        let _ = input.handle_event(InputEvent::Wheel { delta_y: 20.0 });
        assert_eq!(input.scroll().direction, SpinDirection::Forward);
        assert_eq!(input.scroll().ratio, 0.01);

        let start_target = input.spin_target();
        let mut previous_gap = start_target - ctl.orientation().spin_angle;
        let mut previous_spin = ctl.orientation().spin_angle;
        for frame in 1..=10 {
            let o = ctl.advance(&mut input, DT, 2.0);
            let expected = start_target + frame as f32 * 0.0128;
            assert!((input.spin_target() - expected).abs() < 1e-5);
            assert!(o.spin_angle > previous_spin);
            assert!(o.spin_angle <= input.spin_target());
            let gap = input.spin_target() - o.spin_angle;
            assert!(gap < previous_gap + 0.0128);
            previous_gap = gap;
            previous_spin = o.spin_angle;
        }
        assert!((input.spin_target() - start_target - 0.128).abs() < 1e-5);
    }

    #[test]
    fn spin_moves_at_most_one_lerp_step() {
        let (mut ctl, mut input) = setup();
        let _ = ctl.advance(&mut input, DT, 2.0);
        let _ = input.handle_event(InputEvent::Wheel { delta_y: 500.0 });
        let before = ctl.orientation().spin_angle;
        let o = ctl.advance(&mut input, DT, 2.0);
        let step = (input.spin_target() - before) * 0.01;
        assert!((o.spin_angle - (before + step)).abs() < 1e-6);
    }

    #[test]
    fn press_and_release_without_motion_keeps_look_target() {
        let (mut ctl, mut input) = setup();
        let _ = input.handle_event(InputEvent::PointerMoved { x: 100.0, y: 50.0 });
        let before = OrientationController::look_target(&input, 2.0);

        press(&mut input, true);
        assert_eq!(OrientationController::look_target(&input, 2.0), before);
        let o = ctl.advance(&mut input, DT, 2.0);
        assert_eq!(o.look_at, Vec3::Z);

        press(&mut input, false);
        assert_eq!(OrientationController::look_target(&input, 2.0), before);
        assert_eq!(before, Vec3::Z);
    }

    #[test]
    fn dragging_turns_toward_pointer() {
        let (mut ctl, mut input) = setup();
        let _ = input.handle_event(InputEvent::PointerMoved { x: 400.0, y: 200.0 });
        press(&mut input, true);
        let _ = input.handle_event(InputEvent::PointerMoved { x: 600.0, y: 200.0 });

        let target = OrientationController::look_target(&input, 2.0);
        assert!((target - Vec3::new(1.0, 0.0, 1.0).normalize()).length() < 1e-6);

        let o = ctl.advance(&mut input, DT, 2.0);
        let expected = Vec3::Z + (target - Vec3::Z) * 0.8;
        assert!((o.look_at - expected).length() < 1e-6);
    }

    #[test]
    fn release_settles_back_slowly() {
        let (mut ctl, mut input) = setup();
        press(&mut input, true);
        let _ = input.handle_event(InputEvent::PointerMoved { x: 800.0, y: 0.0 });
        for _ in 0..30 {
            let _ = ctl.advance(&mut input, DT, 2.0);
        }
        let turned = ctl.orientation().look_at;
        assert!(turned.x > 0.5);

        press(&mut input, false);
        let o = ctl.advance(&mut input, DT, 2.0);
        let expected = turned + (Vec3::Z - turned) * 0.1;
        assert!((o.look_at - expected).length() < 1e-6);

        for _ in 0..200 {
            let _ = ctl.advance(&mut input, DT, 2.0);
        }
        assert!((ctl.orientation().look_at - Vec3::Z).length() < 1e-3);
    }

    #[test]
    fn time_normalized_zero_dt_holds_everything() {
        let opts = InteractionOptions {
            ease_mode: EaseMode::TimeNormalized,
            ..InteractionOptions::default()
        };
        let mut input = InputAggregator::new(&opts);
        let mut ctl = OrientationController::new();
        let _ = input.handle_event(InputEvent::Wheel { delta_y: 100.0 });
        let before = ctl.orientation();
        let _ = ctl.advance(&mut input, 0.0, 1.0);
        assert_eq!(ctl.orientation(), before);
    }
}
