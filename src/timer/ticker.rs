// src/timer/ticker.rs
use std::time::{Duration, Instant};

/// Fixed-cadence deadline. Polled, never runs on its own.
#[derive(Clone, Debug)]
pub struct Ticker {
    period: Duration,
    next: Instant,
}

impl Ticker {
    /// First tick fires one `period` after `now`.
    pub fn start(now: Instant, period: Duration) -> Self {
        let period = period.max(Duration::from_millis(1));
        Self { period, next: now + period }
    }

    /// Number of ticks that became due up to `now`; consumes them.
    pub fn due(&mut self, now: Instant) -> u32 {
        let mut n = 0;
        while now >= self.next {
            n += 1;
            self.next += self.period;
        }
        n
    }

    pub fn until_next(&self, now: Instant) -> Duration {
        self.next.saturating_duration_since(now)
    }

    pub fn period(&self) -> Duration { self.period }
}
