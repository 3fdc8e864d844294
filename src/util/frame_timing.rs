//! Frame timing with smoothed FPS calculation and optional frame limiting.

use web_time::{Duration, Instant};

/// Tracks per-frame timing and exposes an exponentially smoothed FPS.
///
/// Hosts drive the display-synchronized loop themselves; this helper only
/// answers "has enough time passed to render" for capped setups and keeps
/// a readable FPS figure for diagnostics overlays.
#[derive(Debug, Clone, Copy)]
pub struct FrameTiming {
    /// Target FPS (0 = unlimited).
    target_fps: u32,
    /// Minimum frame duration derived from `target_fps`.
    min_frame_duration: Duration,
    /// Timestamp of the last completed frame.
    last_frame: Instant,
    /// Exponential moving average of instantaneous FPS.
    smoothed_fps: f32,
    /// EMA factor: share of the newest sample in the average.
    smoothing: f32,
}

impl FrameTiming {
    /// Frame timer with the given FPS cap (0 = unlimited), starting at
    /// `now`.
    #[must_use]
    pub fn new(target_fps: u32, now: Instant) -> Self {
        let min_frame_duration = if target_fps > 0 {
            Duration::from_secs_f64(1.0 / f64::from(target_fps))
        } else {
            Duration::ZERO
        };

        Self {
            target_fps,
            min_frame_duration,
            last_frame: now,
            smoothed_fps: 60.0,
            smoothing: 0.05,
        }
    }

    /// Whether enough time has passed since the last frame to render.
    #[must_use]
    pub fn should_render(&self, now: Instant) -> bool {
        if self.target_fps == 0 {
            return true;
        }
        now.saturating_duration_since(self.last_frame)
            >= self.min_frame_duration
    }

    /// Record a completed frame at `now` and update the FPS average.
    pub fn end_frame(&mut self, now: Instant) {
        let elapsed = now.saturating_duration_since(self.last_frame);
        self.last_frame = now;

        let frame_time = elapsed.as_secs_f32();
        if frame_time > 0.0 {
            let instant_fps = 1.0 / frame_time;
            self.smoothed_fps = self.smoothed_fps * (1.0 - self.smoothing)
                + instant_fps * self.smoothing;
        }
    }

    /// Current smoothed FPS.
    #[must_use]
    pub fn fps(&self) -> f32 {
        self.smoothed_fps
    }
}
