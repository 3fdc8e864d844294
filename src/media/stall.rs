//! Advisory playback-stall heuristic.

use web_time::{Duration, Instant};

/// Detects a stalled video by watching its reported playback time.
///
/// If the time fails to advance by more than a small epsilon within the
/// timeout window while playback is supposed to be active, the detector
/// reports buffering; it clears as soon as time advances again. Purely
/// advisory: it surfaces a diagnostic and never alters playback state.
#[derive(Debug, Clone, Copy)]
pub struct StallDetector {
    /// Window without progress before the stall reports.
    timeout: Duration,
    /// Minimum playback-time delta that counts as progress, seconds.
    epsilon: f64,
    /// Last observed playback time.
    last_time: f64,
    /// Wall-clock timestamp of the last observed progress.
    last_advance: Option<Instant>,
}

impl StallDetector {
    /// Detector with the given no-progress window and epsilon.
    #[must_use]
    pub fn new(timeout: Duration, epsilon: f64) -> Self {
        Self {
            timeout,
            epsilon,
            last_time: 0.0,
            last_advance: None,
        }
    }

    /// Observe one tick. Returns whether playback looks stalled.
    ///
    /// `playing` is whether playback is supposed to be active; while it
    /// is not, the detector idles and reports no stall.
    pub fn observe(
        &mut self,
        playback_time: f64,
        playing: bool,
        now: Instant,
    ) -> bool {
        if !playing {
            self.last_advance = None;
            self.last_time = playback_time;
            return false;
        }

        if (playback_time - self.last_time).abs() > self.epsilon {
            self.last_time = playback_time;
            self.last_advance = Some(now);
            return false;
        }

        match self.last_advance {
            Some(since) => {
                now.saturating_duration_since(since) >= self.timeout
            }
            None => {
                self.last_advance = Some(now);
                false
            }
        }
    }

    /// Forget progress history (e.g. after an explicit `playing` event).
    pub fn reset(&mut self) {
        self.last_advance = None;
    }
}
