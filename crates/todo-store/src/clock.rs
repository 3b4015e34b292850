//! Creation timestamps.

/// Source of `createdAt` values
pub trait Clock {
    /// Milliseconds since the Unix epoch
    fn now_millis(&self) -> i64;
}

/// Wall clock; on wasm32 chrono reads `Date.now()`
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> i64 {
        chrono::Utc::now().timestamp_millis()
    }
}

/// Deterministic clock advancing by a fixed step on every read
#[cfg(test)]
#[derive(Debug)]
pub(crate) struct StepClock {
    next: std::cell::Cell<i64>,
    step: i64,
}

#[cfg(test)]
impl StepClock {
    pub(crate) fn new(start: i64, step: i64) -> Self {
        Self {
            next: std::cell::Cell::new(start),
            step,
        }
    }
}

#[cfg(test)]
impl Clock for StepClock {
    fn now_millis(&self) -> i64 {
        let now = self.next.get();
        self.next.set(now + self.step);
        now
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_clock_is_after_2020() {
        assert!(SystemClock.now_millis() > 1_577_836_800_000);
    }

    #[test]
    fn test_step_clock() {
        let clock = StepClock::new(100, 10);
        assert_eq!(clock.now_millis(), 100);
        assert_eq!(clock.now_millis(), 110);
    }
}
