use chrono::Utc;

/// Source of "now" in milliseconds since the Unix epoch.
pub trait Clock {
    fn now_millis(&self) -> i64;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> i64 {
        Utc::now().timestamp_millis()
    }
}

#[cfg(any(test, feature = "test_utils"))]
pub use manual::ManualClock;

#[cfg(any(test, feature = "test_utils"))]
mod manual {
    use super::Clock;
    use std::cell::Cell;
    use std::rc::Rc;

    /// A clock that only moves when told to. Clones share the same time.
    #[derive(Debug, Clone, Default)]
    pub struct ManualClock {
        now: Rc<Cell<i64>>,
    }

    impl ManualClock {
        pub fn new(start: i64) -> Self {
            Self {
                now: Rc::new(Cell::new(start)),
            }
        }

        pub fn set(&self, millis: i64) {
            self.now.set(millis);
        }

        pub fn advance(&self, millis: i64) {
            self.now.set(self.now.get() + millis);
        }
    }

    impl Clock for ManualClock {
        fn now_millis(&self) -> i64 {
            self.now.get()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manual_clock_clones_share_time() {
        let clock = ManualClock::new(10);
        let other = clock.clone();
        clock.advance(5);
        assert_eq!(other.now_millis(), 15);
        other.set(100);
        assert_eq!(clock.now_millis(), 100);
    }

    #[test]
    fn system_clock_is_after_2020() {
        assert!(SystemClock.now_millis() > 1_577_836_800_000);
    }
}
