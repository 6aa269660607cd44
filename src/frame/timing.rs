use web_time::{Duration, Instant};

fn min_frame_duration(target_fps: u32) -> Duration {
    if target_fps > 0 {
        Duration::from_secs_f64(1.0 / f64::from(target_fps))
    } else {
        Duration::ZERO
    }
}

/// Wall-clock frame timing with FPS calculation and optional frame limiting
pub struct FrameTiming {
    /// Target FPS (0 = unlimited)
    target_fps: u32,
    /// Minimum frame duration based on target FPS
    min_frame_duration: Duration,
    /// Last frame timestamp
    last_frame: Instant,
    /// Smoothed FPS using exponential moving average
    smoothed_fps: f32,
    /// Smoothing factor (lower = smoother, 0.0-1.0)
    smoothing: f32,
}

impl FrameTiming {
    /// Create a new frame timer with the given FPS target (0 = unlimited).
    #[must_use]
    pub fn new(target_fps: u32) -> Self {
        Self {
            target_fps,
            min_frame_duration: min_frame_duration(target_fps),
            last_frame: Instant::now(),
            smoothed_fps: 60.0, // Start with reasonable default
            smoothing: 0.05,    /* 5% new value, 95% old value for smooth
                                 * display */
        }
    }

    /// Change the frame cap (0 = unlimited).
    pub fn set_target_fps(&mut self, target_fps: u32) {
        self.target_fps = target_fps;
        self.min_frame_duration = min_frame_duration(target_fps);
    }

    /// Current frame cap (0 = unlimited).
    #[must_use]
    pub fn target_fps(&self) -> u32 {
        self.target_fps
    }

    /// Restart the clock so the next frame measures from now.
    pub fn restart(&mut self) {
        self.last_frame = Instant::now();
    }

    /// Returns true if enough time has passed since the last frame to render
    /// another.
    #[must_use]
    pub fn should_render(&self) -> bool {
        if self.target_fps == 0 {
            return true;
        }
        self.last_frame.elapsed() >= self.min_frame_duration
    }

    /// Mark the start of a frame and return the seconds elapsed since the
    /// previous one.
    pub fn begin_frame(&mut self) -> f32 {
        let now = Instant::now();
        let elapsed = now.duration_since(self.last_frame);
        self.last_frame = now;

        let frame_time = elapsed.as_secs_f32();
        self.record(frame_time);
        frame_time
    }

    /// Fold one frame duration into the smoothed FPS.
    fn record(&mut self, frame_time: f32) {
        if frame_time > 0.0 {
            let instant_fps = 1.0 / frame_time;
            // Exponential moving average for smooth display
            self.smoothed_fps = self.smoothed_fps * (1.0 - self.smoothing)
                + instant_fps * self.smoothing;
        }
    }

    /// Get the current FPS (smoothed)
    #[must_use]
    pub fn fps(&self) -> f32 {
        self.smoothed_fps
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unlimited_always_renders() {
        assert!(FrameTiming::new(0).should_render());
    }

    #[test]
    fn capped_waits_for_frame_budget() {
        let mut timing = FrameTiming::new(1);
        timing.restart();
        assert!(!timing.should_render());
    }

    #[test]
    fn cap_can_be_lifted() {
        let mut timing = FrameTiming::new(1);
        timing.restart();
        timing.set_target_fps(0);
        assert_eq!(timing.target_fps(), 0);
        assert!(timing.should_render());
    }

    #[test]
    fn begin_frame_measures_wall_clock() {
        let mut timing = FrameTiming::new(0);
        timing.restart();
        std::thread::sleep(Duration::from_millis(5));
        let dt = timing.begin_frame();
        assert!(dt >= 0.005);
    }

    #[test]
    fn fps_moves_toward_frame_rate() {
        let mut timing = FrameTiming::new(0);
        for _ in 0..200 {
            timing.record(1.0 / 30.0);
        }
        assert!((timing.fps() - 30.0).abs() < 0.5);
        timing.record(0.0);
        assert!((timing.fps() - 30.0).abs() < 0.5);
    }
}
