use std::time::{Duration, Instant};

pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(300);

/// A single cancellable scheduled value.
///
/// Every [`schedule`](Debouncer::schedule) replaces the pending value and
/// pushes the deadline out to `now + delay`, so a burst of calls collapses
/// into one value that becomes available once the burst has been quiet for
/// `delay`. Time is passed in by the caller; the debouncer never sleeps or
/// spawns anything, it is driven from the owner's event loop via
/// [`poll`](Debouncer::poll).
#[derive(Debug)]
pub struct Debouncer<T> {
    delay: Duration,
    pending: Option<Pending<T>>,
}

#[derive(Debug)]
struct Pending<T> {
    value: T,
    deadline: Instant,
}

impl<T> Debouncer<T> {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn schedule(&mut self, value: T, now: Instant) {
        self.pending = Some(Pending {
            value,
            deadline: now + self.delay,
        });
    }

    /// Takes the pending value if its quiet period has elapsed at `now`.
    pub fn poll(&mut self, now: Instant) -> Option<T> {
        match &self.pending {
            Some(p) if p.deadline <= now => self.pending.take().map(|p| p.value),
            _ => None,
        }
    }

    /// Takes the pending value immediately, regardless of its deadline.
    pub fn flush(&mut self) -> Option<T> {
        self.pending.take().map(|p| p.value)
    }

    /// Drops the pending value. Returns whether there was one.
    pub fn cancel(&mut self) -> bool {
        self.pending.take().is_some()
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|p| p.deadline)
    }
}

impl<T> Default for Debouncer<T> {
    fn default() -> Self {
        Self::new(DEFAULT_DEBOUNCE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn fires_after_quiet_period() {
        let t0 = Instant::now();
        let mut d = Debouncer::new(ms(300));
        d.schedule("a", t0);

        assert_eq!(d.poll(t0 + ms(299)), None);
        assert_eq!(d.poll(t0 + ms(300)), Some("a"));
        assert_eq!(d.poll(t0 + ms(900)), None);
    }

    #[test]
    fn rescheduling_coalesces_and_extends_deadline() {
        let t0 = Instant::now();
        let mut d = Debouncer::new(ms(300));
        d.schedule(1, t0);
        d.schedule(2, t0 + ms(200));
        d.schedule(3, t0 + ms(400));

        assert_eq!(d.poll(t0 + ms(600)), None);
        assert_eq!(d.deadline(), Some(t0 + ms(700)));
        assert_eq!(d.poll(t0 + ms(700)), Some(3));
        assert!(!d.is_pending());
    }

    #[test]
    fn cancel_and_flush() {
        let t0 = Instant::now();
        let mut d = Debouncer::default();
        assert_eq!(d.delay(), DEFAULT_DEBOUNCE);

        d.schedule("x", t0);
        assert!(d.cancel());
        assert!(!d.cancel());
        assert_eq!(d.poll(t0 + ms(1_000)), None);

        d.schedule("y", t0);
        assert_eq!(d.flush(), Some("y"));
        assert_eq!(d.flush(), None);
    }
}
