//! Browser-backed [`Scheduler`] built on `gloo_timers` intervals.

use std::cell::{OnceCell, RefCell};
use std::rc::{Rc, Weak};

use autenticos_core::Scheduler;
use gloo_timers::callback::Interval;

/// Repeating timer whose ticks run a fixed callback.
///
/// Each registration is a `gloo_timers` [`Interval`], which clears itself
/// when dropped.
pub struct IntervalScheduler {
    on_tick: Rc<dyn Fn()>,
}

impl IntervalScheduler {
    pub fn new(on_tick: impl Fn() + 'static) -> Self {
        Self {
            on_tick: Rc::new(on_tick),
        }
    }
}

impl Scheduler for IntervalScheduler {
    type Handle = Interval;

    fn repeat(&self, period_ms: u32) -> Interval {
        let on_tick = self.on_tick.clone();
        Interval::new(period_ms, move || on_tick())
    }
}

/// Late binding between a scheduler and the controller it ticks.
///
/// The controller owns its scheduler, so the scheduler has to exist before
/// the controller does. The binding hands out the scheduler first and is
/// pointed at the finished controller afterwards.
pub struct TickBinding<C> {
    target: Rc<OnceCell<Weak<RefCell<C>>>>,
}

impl<C: 'static> TickBinding<C> {
    pub fn new(tick: fn(&mut C)) -> (Self, IntervalScheduler) {
        let target: Rc<OnceCell<Weak<RefCell<C>>>> = Rc::default();
        let slot = target.clone();
        let scheduler = IntervalScheduler::new(move || {
            let Some(controller) = slot.get().and_then(Weak::upgrade) else {
                return;
            };
            match controller.try_borrow_mut() {
                Ok(mut controller) => tick(&mut controller),
                Err(_) => tracing::debug!("tick dropped: controller busy"),
            };
        });
        (Self { target }, scheduler)
    }

    pub fn bind(self, controller: &Rc<RefCell<C>>) {
        let _ = self.target.set(Rc::downgrade(controller));
    }
}
