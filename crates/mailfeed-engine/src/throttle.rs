use std::cell::Cell;
use std::time::{Duration, Instant};

/// Default spacing between dispatched scroll handlers
pub const SCROLL_THROTTLE_INTERVAL: Duration = Duration::from_millis(50);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ThrottleState {
    Open,
    Dispatched,
    Cooling { until: Instant },
}

/// Gate for bursty scroll events.
///
/// A dispatched handler holds the gate closed until it either calls
/// [`reset`](Self::reset) or returns through [`finish`](Self::finish), after
/// which the gate stays closed for one more interval. Events arriving while
/// closed are dropped, not queued.
#[derive(Debug)]
pub struct ScrollThrottle {
    interval: Duration,
    state: Cell<ThrottleState>,
}

impl Default for ScrollThrottle {
    fn default() -> Self {
        Self::new(SCROLL_THROTTLE_INTERVAL)
    }
}

impl ScrollThrottle {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            state: Cell::new(ThrottleState::Open),
        }
    }

    /// Returns true if the caller may dispatch its handler now
    pub fn try_dispatch(&self, now: Instant) -> bool {
        let open = match self.state.get() {
            ThrottleState::Open => true,
            ThrottleState::Cooling { until } => now >= until,
            ThrottleState::Dispatched => false,
        };
        if open {
            self.state.set(ThrottleState::Dispatched);
        }
        open
    }

    /// Handler signals that it has drained its work; reopens immediately
    pub fn reset(&self) {
        self.state.set(ThrottleState::Open);
    }

    /// Handler returned; if it never reset, reopen after one interval
    pub fn finish(&self, now: Instant) {
        if self.state.get() == ThrottleState::Dispatched {
            self.state.set(ThrottleState::Cooling {
                until: now + self.interval,
            });
        }
    }

    pub fn is_dispatched(&self) -> bool {
        self.state.get() == ThrottleState::Dispatched
    }
}
