//! Frame clock producing the per-frame delta.

use web_time::{Duration, Instant};

/// Longest frame step handed to the controller, in seconds. A stalled
/// window (drag, breakpoint, suspended tab) would otherwise fling the
/// camera on the next frame.
const DEFAULT_MAX_DELTA: f32 = 0.1;

/// Frame clock: per-frame delta for the controller, smoothed FPS, and
/// optional frame limiting.
pub struct FrameTiming {
    /// Target FPS (0 = unlimited)
    target_fps: u32,
    /// Minimum frame duration based on target FPS
    min_frame_duration: Duration,
    /// Last frame timestamp
    last_frame: Instant,
    /// Upper bound on the delta returned by [`FrameTiming::begin_frame`]
    max_delta: f32,
    /// Smoothed FPS using exponential moving average
    smoothed_fps: f32,
    /// Smoothing factor (lower = smoother, 0.0-1.0)
    smoothing: f32,
}

impl FrameTiming {
    /// Create a new frame clock with the given FPS target (0 = unlimited).
    pub fn new(target_fps: u32) -> Self {
        let min_frame_duration = if target_fps > 0 {
            Duration::from_secs_f64(1.0 / f64::from(target_fps))
        } else {
            Duration::ZERO
        };

        Self {
            target_fps,
            min_frame_duration,
            last_frame: Instant::now(),
            max_delta: DEFAULT_MAX_DELTA,
            smoothed_fps: 60.0,
            smoothing: 0.05,
        }
    }

    /// Override the delta cap in seconds.
    #[must_use]
    pub fn with_max_delta(mut self, max_delta: f32) -> Self {
        self.max_delta = max_delta;
        self
    }

    /// Whether enough time has passed since the last frame to run another.
    pub fn should_render(&self) -> bool {
        if self.target_fps == 0 {
            return true;
        }
        self.last_frame.elapsed() >= self.min_frame_duration
    }

    /// Start a frame: returns the seconds elapsed since the previous one,
    /// capped at the configured maximum.
    pub fn begin_frame(&mut self) -> f32 {
        let now = Instant::now();
        let elapsed = now.duration_since(self.last_frame);
        self.last_frame = now;
        self.advance(elapsed)
    }

    fn advance(&mut self, elapsed: Duration) -> f32 {
        let frame_time = elapsed.as_secs_f32();
        if frame_time > 0.0 {
            let instant_fps = 1.0 / frame_time;
            self.smoothed_fps = self.smoothed_fps * (1.0 - self.smoothing)
                + instant_fps * self.smoothing;
        }
        frame_time.min(self.max_delta)
    }

    /// Get the current FPS (smoothed)
    pub fn fps(&self) -> f32 {
        self.smoothed_fps
    }
}
