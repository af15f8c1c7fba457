//! Page components
//!
//! Each component finds its markup, binds it to the matching state in
//! `autenticos-core`, and reports whether it mounted. A component whose
//! markup is missing simply does not mount; the rest of the page is
//! unaffected.

pub mod carousel;
pub mod contact;
pub mod effects;
pub mod modal;
pub mod nav;
pub mod reveal;

pub use modal::{SharedModals, close_modal, open_modal};
