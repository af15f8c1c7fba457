//! Repeating timer ownership.
//!
//! A [`Scheduler`] hands out repeating-tick registrations whose handle
//! cancels the registration when dropped (the same contract as
//! `gloo_timers::callback::Interval`). [`TimerSlot`] owns at most one such
//! handle, so a carousel can never have two tick streams running at once.

/// Source of repeating ticks.
///
/// What a tick *does* is bound by the implementor when it is constructed;
/// the slot only controls when registrations start and stop.
pub trait Scheduler {
    /// Cancels the registration when dropped
    type Handle;

    /// Register a tick every `period_ms` milliseconds, first one a full
    /// period from now.
    fn repeat(&self, period_ms: u32) -> Self::Handle;
}

/// Exclusive owner of a single repeating registration.
pub struct TimerSlot<S: Scheduler> {
    scheduler: S,
    period_ms: u32,
    handle: Option<S::Handle>,
}

impl<S: Scheduler> TimerSlot<S> {
    pub fn new(scheduler: S, period_ms: u32) -> Self {
        Self {
            scheduler,
            period_ms,
            handle: None,
        }
    }

    /// (Re)start the interval from now. Any previous registration is
    /// cancelled before the new one is created.
    pub fn start(&mut self) {
        self.stop();
        self.handle = Some(self.scheduler.repeat(self.period_ms));
        tracing::trace!(period_ms = self.period_ms, "timer started");
    }

    pub fn stop(&mut self) {
        // Drop explicitly so cancellation happens before a replacement exists
        drop(self.handle.take());
    }

    pub fn is_running(&self) -> bool {
        self.handle.is_some()
    }

    pub fn period_ms(&self) -> u32 {
        self.period_ms
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Test clock
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
pub(crate) mod fake {
    use std::cell::RefCell;
    use std::rc::{Rc, Weak};

    use super::Scheduler;

    struct Registration {
        id: u64,
        period_ms: u64,
        next_due: u64,
    }

    #[derive(Default)]
    struct ClockState {
        now: u64,
        next_id: u64,
        created: usize,
        timers: Vec<Registration>,
    }

    /// Deterministic stand-in for the browser's interval primitive.
    #[derive(Clone, Default)]
    pub struct FakeClock {
        state: Rc<RefCell<ClockState>>,
    }

    pub struct FakeHandle {
        id: u64,
        state: Weak<RefCell<ClockState>>,
    }

    impl Drop for FakeHandle {
        fn drop(&mut self) {
            if let Some(state) = self.state.upgrade() {
                state.borrow_mut().timers.retain(|t| t.id != self.id);
            }
        }
    }

    impl Scheduler for FakeClock {
        type Handle = FakeHandle;

        fn repeat(&self, period_ms: u32) -> FakeHandle {
            let mut state = self.state.borrow_mut();
            let id = state.next_id;
            state.next_id += 1;
            state.created += 1;
            let next_due = state.now + u64::from(period_ms);
            state.timers.push(Registration {
                id,
                period_ms: u64::from(period_ms),
                next_due,
            });
            FakeHandle {
                id,
                state: Rc::downgrade(&self.state),
            }
        }
    }

    impl FakeClock {
        pub fn new() -> Self {
            Self::default()
        }

        /// Live registrations right now
        pub fn active(&self) -> usize {
            self.state.borrow().timers.len()
        }

        /// Registrations ever created
        pub fn created(&self) -> usize {
            self.state.borrow().created
        }

        pub fn now(&self) -> u64 {
            self.state.borrow().now
        }

        /// Move time forward by `ms`, returning how many ticks came due
        /// across all live registrations.
        pub fn advance(&self, ms: u64) -> usize {
            let mut state = self.state.borrow_mut();
            let target = state.now + ms;
            let mut fired = 0;
            for timer in &mut state.timers {
                while timer.period_ms > 0 && timer.next_due <= target {
                    fired += 1;
                    timer.next_due += timer.period_ms;
                }
            }
            state.now = target;
            fired
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fake::FakeClock;
    use super::*;

    #[test]
    fn test_start_registers_one_timer() {
        let clock = FakeClock::new();
        let mut slot = TimerSlot::new(clock.clone(), 1000);
        assert!(!slot.is_running());

        slot.start();
        assert!(slot.is_running());
        assert_eq!(clock.active(), 1);
        assert_eq!(clock.advance(999), 0);
        assert_eq!(clock.advance(1), 1);
        assert_eq!(clock.advance(3000), 3);
    }

    #[test]
    fn test_restart_replaces_previous_registration() {
        let clock = FakeClock::new();
        let mut slot = TimerSlot::new(clock.clone(), 1000);

        for _ in 0..5 {
            slot.start();
            assert_eq!(clock.active(), 1);
        }
        assert_eq!(clock.created(), 5);
        // Only one stream ticks
        assert_eq!(clock.advance(2000), 2);
    }

    #[test]
    fn test_restart_measures_full_period_from_restart() {
        let clock = FakeClock::new();
        let mut slot = TimerSlot::new(clock.clone(), 1000);
        slot.start();

        assert_eq!(clock.advance(700), 0);
        slot.start();
        assert_eq!(clock.advance(700), 0);
        assert_eq!(clock.advance(300), 1);
    }

    #[test]
    fn test_stop_cancels() {
        let clock = FakeClock::new();
        let mut slot = TimerSlot::new(clock.clone(), 500);
        slot.start();
        slot.stop();
        assert!(!slot.is_running());
        assert_eq!(clock.active(), 0);
        assert_eq!(clock.advance(5000), 0);

        // Stopping twice is harmless
        slot.stop();
        assert_eq!(slot.period_ms(), 500);
    }
}
