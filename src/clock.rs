use std::time::{Duration, Instant};

/// Keeps the main loop from running faster than a given number of frames per
/// second
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct FrameLimiter {
    last_tick: Instant,
}

impl FrameLimiter {
    pub(crate) fn new() -> FrameLimiter {
        FrameLimiter {
            last_tick: Instant::now(),
        }
    }

    /// Sleep until at least `1 / rate` seconds have passed since the previous
    /// call (or, for the first call, since the limiter was created), then
    /// return how long it has actually been.
    pub(crate) fn tick(&mut self, rate: f64) -> Duration {
        let last = self.last_tick;
        let wait = frame_period(rate).saturating_sub(last.elapsed());
        if !wait.is_zero() {
            std::thread::sleep(wait);
        }
        let now = Instant::now();
        self.last_tick = now;
        now.saturating_duration_since(last)
    }
}

/// The length of one frame at `rate` frames per second.  Non-positive or
/// non-finite rates give a zero-length frame.
pub(crate) fn frame_period(rate: f64) -> Duration {
    if rate.is_finite() && rate > 0.0 {
        Duration::try_from_secs_f64(rate.recip()).unwrap_or(Duration::MAX)
    } else {
        Duration::ZERO
    }
}
