//! Single-slide carousel with modular wraparound.

use crate::timer::{Scheduler, TimerSlot};

use super::PauseSignals;
use super::index::wrap_index;

/// Only the end of this transition finishes a slide's exit. Transforms and
/// other properties animate concurrently and must not clean up early.
pub const EXIT_TRANSITION_PROPERTY: &str = "opacity";

/// Where a finished transition ran. Transition events bubble, so one ending
/// on an image inside a slide also reaches the slide's listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionOrigin {
    Slide,
    Descendant,
}

/// Presentation state of one slide.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlideState {
    /// Hidden, resting in its entry position
    Idle,
    Active,
    /// Playing its exit transition
    Leaving,
}

/// Projection of carousel state onto the page.
///
/// Implementations write classes and attributes; they are never read back.
pub trait SlideView {
    /// Project `state` onto slide `index` (`active` / `leaving` classes)
    fn show_slide_state(&mut self, index: usize, state: SlideState);

    /// Clear any inline transform left over from the exit animation
    fn reset_slide_transform(&mut self, index: usize);

    /// Mark exactly the dot at `index` active and selected
    fn highlight_dot(&mut self, index: usize);
}

pub struct VerticalCarousel<V: SlideView, S: Scheduler> {
    view: V,
    timer: TimerSlot<S>,
    slides: Vec<SlideState>,
    current: usize,
    pause: PauseSignals,
}

impl<V: SlideView, S: Scheduler> VerticalCarousel<V, S> {
    /// Build a carousel over `slide_count` slides with slide 0 active.
    ///
    /// Returns `None` for an empty carousel: there is nothing to rotate and
    /// no further setup happens.
    pub fn new(view: V, scheduler: S, slide_count: usize, interval_ms: u32) -> Option<Self> {
        if slide_count == 0 {
            return None;
        }
        let mut slides = vec![SlideState::Idle; slide_count];
        slides[0] = SlideState::Active;
        Some(Self {
            view,
            timer: TimerSlot::new(scheduler, interval_ms),
            slides,
            current: 0,
            pause: PauseSignals::default(),
        })
    }

    /// Project the initial state and start auto-advancing.
    pub fn mount(&mut self) {
        for (index, state) in self.slides.iter().enumerate() {
            self.view.show_slide_state(index, *state);
        }
        self.view.highlight_dot(self.current);
        self.timer.start();
        tracing::debug!(
            slides = self.slides.len(),
            interval_ms = self.timer.period_ms(),
            "vertical carousel mounted"
        );
    }

    /// Show the slide at `target`, wrapping out-of-range values in either
    /// direction. Returns `false` (and touches nothing) when `target` is
    /// already showing.
    pub fn go_to(&mut self, target: isize) -> bool {
        let next = wrap_index(target, self.slides.len());
        if next == self.current {
            return false;
        }

        let prev = self.current;
        self.slides[prev] = SlideState::Leaving;
        self.view.show_slide_state(prev, SlideState::Leaving);

        // A slide still leaving from an earlier step is pulled straight back
        // to active; its pending transition end is ignored.
        self.slides[next] = SlideState::Active;
        self.view.show_slide_state(next, SlideState::Active);

        self.current = next;
        self.view.highlight_dot(next);
        tracing::trace!(from = prev, to = next, "vertical carousel moved");
        true
    }

    pub fn advance(&mut self) -> bool {
        self.go_to(self.current as isize + 1)
    }

    /// Timer callback
    pub fn tick(&mut self) {
        if self.pause.is_paused() {
            tracing::trace!(
                hover = self.pause.pointer_hover(),
                hidden = self.pause.container_hidden(),
                "vertical carousel tick skipped"
            );
            return;
        }
        self.advance();
    }

    /// Dot click. Selecting the current slide does nothing; anything else
    /// moves there and restarts the interval.
    pub fn select(&mut self, index: usize) {
        if index == self.current {
            return;
        }
        self.go_to(index as isize);
        self.timer.start();
    }

    /// A transition finished on slide `index` or inside it.
    pub fn on_transition_end(&mut self, index: usize, property: &str, origin: TransitionOrigin) {
        if origin != TransitionOrigin::Slide || property != EXIT_TRANSITION_PROPERTY {
            return;
        }
        let Some(state) = self.slides.get_mut(index) else {
            return;
        };
        if *state != SlideState::Leaving {
            return;
        }
        *state = SlideState::Idle;
        self.view.show_slide_state(index, SlideState::Idle);
        self.view.reset_slide_transform(index);
    }

    pub fn pointer_enter(&mut self) {
        self.pause.set_pointer_hover(true);
    }

    pub fn pointer_leave(&mut self) {
        self.pause.set_pointer_hover(false);
    }

    /// Containing dialog visibility changed. Becoming visible again is
    /// treated like a fresh mount and restarts the interval.
    pub fn set_container_visible(&mut self, visible: bool) {
        let was_hidden = self.pause.set_container_hidden(!visible);
        if was_hidden && visible {
            self.timer.start();
            tracing::debug!("vertical carousel resumed with its container");
        }
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn slide_count(&self) -> usize {
        self.slides.len()
    }

    pub fn slide_state(&self, index: usize) -> Option<SlideState> {
        self.slides.get(index).copied()
    }

    pub fn is_paused(&self) -> bool {
        self.pause.is_paused()
    }

    pub fn timer_running(&self) -> bool {
        self.timer.is_running()
    }

    pub fn view(&self) -> &V {
        &self.view
    }
}
