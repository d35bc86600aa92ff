use std::time::Duration;

/// Real time elapsed between successive readings of a millisecond clock.
///
/// Never clamped: timers that must fire after a wall-clock quiet period
/// (the rate cool-down) need the full gap, even after a stalled or hidden tab.
#[derive(Clone, Copy, Debug, Default)]
pub struct ElapsedClock {
    last_ms: Option<f64>,
}

impl ElapsedClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Time since the previous reading. The first reading, a clock that went
    /// backwards, or a non-finite timestamp all yield zero.
    pub fn elapsed(&mut self, now_ms: f64) -> Duration {
        if !now_ms.is_finite() {
            return Duration::ZERO;
        }
        let prev = self.last_ms.replace(now_ms);
        match prev {
            Some(last) if now_ms > last => Duration::from_secs_f64((now_ms - last) / 1000.0),
            _ => Duration::ZERO,
        }
    }
}
