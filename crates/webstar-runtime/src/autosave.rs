#![forbid(unsafe_code)]

//! Debounced autosave.
//!
//! Each [`schedule`](AutosaveDebouncer::schedule) replaces the pending value
//! and pushes the deadline out by `delay_ms`; [`poll`](AutosaveDebouncer::poll)
//! releases the value once the deadline has passed. Time is supplied by the
//! caller, so behavior is deterministic under test.

/// Default quiet period before a settings change is saved.
pub const DEFAULT_AUTOSAVE_DELAY_MS: u64 = 1_000;

#[derive(Debug, Clone, PartialEq)]
struct Pending<T> {
    value: T,
    due_ms: u64,
}

/// Last-writer-wins debouncer.
#[derive(Debug, Clone, PartialEq)]
pub struct AutosaveDebouncer<T> {
    delay_ms: u64,
    pending: Option<Pending<T>>,
}

impl<T> Default for AutosaveDebouncer<T> {
    fn default() -> Self {
        Self::new(DEFAULT_AUTOSAVE_DELAY_MS)
    }
}

impl<T> AutosaveDebouncer<T> {
    #[must_use]
    pub const fn new(delay_ms: u64) -> Self {
        Self {
            delay_ms,
            pending: None,
        }
    }

    #[must_use]
    pub const fn delay_ms(&self) -> u64 {
        self.delay_ms
    }

    /// Replace the pending value and restart the quiet period.
    pub fn schedule(&mut self, value: T, now_ms: u64) {
        self.pending = Some(Pending {
            value,
            due_ms: now_ms.saturating_add(self.delay_ms),
        });
    }

    /// Release the pending value if its deadline has passed.
    pub fn poll(&mut self, now_ms: u64) -> Option<T> {
        match &self.pending {
            Some(p) if now_ms >= p.due_ms => self.pending.take().map(|p| p.value),
            _ => None,
        }
    }

    /// Release the pending value immediately.
    pub fn flush(&mut self) -> Option<T> {
        self.pending.take().map(|p| p.value)
    }

    /// Drop the pending value. Returns whether anything was pending.
    pub fn cancel(&mut self) -> bool {
        self.pending.take().is_some()
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Deadline of the pending value, if any.
    #[must_use]
    pub fn due_ms(&self) -> Option<u64> {
        self.pending.as_ref().map(|p| p.due_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn releases_after_quiet_period() {
        let mut d = AutosaveDebouncer::new(500);
        d.schedule(1, 1_000);
        assert_eq!(d.poll(1_499), None);
        assert_eq!(d.poll(1_500), Some(1));
        assert_eq!(d.poll(2_000), None);
    }

    #[test]
    fn reschedule_extends_deadline_and_keeps_latest() {
        let mut d = AutosaveDebouncer::new(500);
        d.schedule("a", 0);
        d.schedule("b", 400);
        assert_eq!(d.due_ms(), Some(900));
        assert_eq!(d.poll(600), None);
        assert_eq!(d.poll(900), Some("b"));
    }

    #[test]
    fn flush_and_cancel() {
        let mut d = AutosaveDebouncer::default();
        assert_eq!(d.delay_ms(), DEFAULT_AUTOSAVE_DELAY_MS);
        d.schedule(7, 0);
        assert_eq!(d.flush(), Some(7));
        assert!(!d.is_pending());
        d.schedule(8, 0);
        assert!(d.cancel());
        assert!(!d.cancel());
        assert_eq!(d.poll(u64::MAX), None);
    }

    #[test]
    fn deadline_saturates() {
        let mut d = AutosaveDebouncer::new(10);
        d.schedule((), u64::MAX - 1);
        assert_eq!(d.due_ms(), Some(u64::MAX));
        assert_eq!(d.poll(u64::MAX), Some(()));
    }
}
