//! Monotonic animation clock.
//!
//! Owns elapsed-time and per-tick delta so time-based oscillation
//! (twinkle, spiral flow) runs independent of frame rate. Callers pass
//! `now` explicitly, which keeps the clock deterministic under test.

use web_time::Instant;

/// Elapsed/delta bookkeeping for the per-frame tick.
#[derive(Debug, Clone, Copy)]
pub struct AnimationClock {
    /// Session start timestamp.
    start: Instant,
    /// Timestamp of the most recent tick.
    last_tick: Instant,
    /// Seconds since `start`, as of the most recent tick.
    elapsed: f32,
    /// Seconds between the two most recent ticks.
    delta: f32,
}

impl AnimationClock {
    /// Clock starting at `now` with zero elapsed time.
    #[must_use]
    pub fn new(now: Instant) -> Self {
        Self {
            start: now,
            last_tick: now,
            elapsed: 0.0,
            delta: 0.0,
        }
    }

    /// Advance the clock to `now`.
    ///
    /// A `now` earlier than the previous tick clamps the delta to zero
    /// rather than running time backwards.
    pub fn tick(&mut self, now: Instant) {
        self.delta = now
            .checked_duration_since(self.last_tick)
            .map_or(0.0, |d| d.as_secs_f32());
        self.elapsed = now
            .checked_duration_since(self.start)
            .map_or(self.elapsed, |d| d.as_secs_f32());
        self.last_tick = now;
    }

    /// Seconds since the clock was created, as of the last tick.
    #[must_use]
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    /// Seconds between the two most recent ticks.
    #[must_use]
    pub fn delta(&self) -> f32 {
        self.delta
    }
}

#[cfg(test)]
mod tests {
    use web_time::Duration;

    use super::*;

    #[test]
    fn starts_at_zero() {
        let clock = AnimationClock::new(Instant::now());
        assert_eq!(clock.elapsed(), 0.0);
        assert_eq!(clock.delta(), 0.0);
    }

    #[test]
    fn tick_accumulates_elapsed_and_delta() {
        let t0 = Instant::now();
        let mut clock = AnimationClock::new(t0);

        clock.tick(t0 + Duration::from_millis(16));
        assert!((clock.delta() - 0.016).abs() < 1e-4);
        assert!((clock.elapsed() - 0.016).abs() < 1e-4);

        clock.tick(t0 + Duration::from_millis(48));
        assert!((clock.delta() - 0.032).abs() < 1e-4);
        assert!((clock.elapsed() - 0.048).abs() < 1e-4);
    }

    #[test]
    fn backwards_time_clamps_delta() {
        let t0 = Instant::now();
        let mut clock = AnimationClock::new(t0 + Duration::from_secs(1));
        clock.tick(t0);
        assert_eq!(clock.delta(), 0.0);
    }
}
