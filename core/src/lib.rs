//! Page behavior state for the Auténticos portfolio site.
//!
//! Everything here is platform independent. The browser crate implements
//! the view and scheduler traits over the DOM and feeds events in.

pub mod carousel;
pub mod contact;
pub mod effects;
pub mod modal;
pub mod nav;
pub mod reveal;
pub mod timeline;
pub mod timer;

// Re-exports for convenience
pub use carousel::{
    Breakpoints, HorizontalCarousel, PauseSignals, SlideState, SlideView, TrackLayout, TrackView,
    TransitionOrigin, VerticalCarousel,
};
pub use contact::{ContactSubmission, SubmitError};
pub use modal::{ModalManager, ModalView};
pub use nav::NavState;
pub use timer::{Scheduler, TimerSlot};
