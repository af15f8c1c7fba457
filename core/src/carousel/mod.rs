//! Auto-advancing carousels
//!
//! Two variants share the timer and pause policy:
//!
//! - [`VerticalCarousel`]: one slide visible, modular wraparound, may live
//!   inside a modal and pause while it is hidden.
//! - [`HorizontalCarousel`]: a responsive window of 1–3 cards, advancing
//!   until the last card is visible and then jumping back to the start.
//!
//! A tick that lands while the carousel is paused is skipped, not
//! cancelled: the interval keeps running so unpausing resumes on the next
//! natural boundary. Manual navigation restarts the interval.

pub mod horizontal;
pub mod index;
pub mod vertical;
pub mod window;


pub use horizontal::{HorizontalCarousel, TrackLayout, TrackView};
pub use index::{advance_or_reset, max_index, wrap_index};
pub use vertical::{
    EXIT_TRANSITION_PROPERTY, SlideState, SlideView, TransitionOrigin, VerticalCarousel,
};
pub use window::Breakpoints;

/// Independent reasons a carousel should hold still.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PauseSignals {
    pointer_hover: bool,
    container_hidden: bool,
}

impl PauseSignals {
    pub fn set_pointer_hover(&mut self, hovering: bool) {
        self.pointer_hover = hovering;
    }

    /// Returns the previous value
    pub fn set_container_hidden(&mut self, hidden: bool) -> bool {
        std::mem::replace(&mut self.container_hidden, hidden)
    }

    pub fn pointer_hover(&self) -> bool {
        self.pointer_hover
    }

    pub fn container_hidden(&self) -> bool {
        self.container_hidden
    }

    /// Effective pause: any signal set
    pub fn is_paused(&self) -> bool {
        self.pointer_hover || self.container_hidden
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pause_is_or_of_signals() {
        let mut pause = PauseSignals::default();
        assert!(!pause.is_paused());

        pause.set_pointer_hover(true);
        assert!(pause.is_paused());

        assert!(!pause.set_container_hidden(true));
        pause.set_pointer_hover(false);
        // Hover cleared, still hidden
        assert!(pause.is_paused());

        assert!(pause.set_container_hidden(false));
        assert!(!pause.is_paused());
    }
}
