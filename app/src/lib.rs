//! Browser entry point for the Auténticos site.
//!
//! Loads the embedded [`SiteConfig`](autenticos_types::SiteConfig), then
//! mounts every page component once the document has been parsed.

pub mod components;
pub mod config;
pub mod dom;
pub mod scheduler;

use autenticos_types::SiteConfig;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Event};

use crate::components::{carousel, contact, effects, modal, nav, reveal};

pub use components::{close_modal, open_modal};

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    if dioxus_logger::init(tracing::Level::INFO).is_err() {
        web_sys::console::warn_1(&"tracing subscriber already installed".into());
    }

    let doc = dom::document().ok_or_else(|| JsValue::from_str("no document"))?;
    let config = config::load();

    if doc.ready_state() == "loading" {
        let ready_doc = doc.clone();
        let mut pending = Some(config);
        dom::listen(&doc, "DOMContentLoaded", move |_: Event| {
            if let Some(config) = pending.take() {
                mount_page(&ready_doc, &config);
            }
        });
    } else {
        mount_page(&doc, &config);
    }
    Ok(())
}

/// Mount every component whose markup is present.
fn mount_page(doc: &Document, config: &SiteConfig) {
    let modals = modal::mount(doc, &config.modals);

    let nav_mounted = nav::mount_nav(doc, &config.nav);
    nav::mount_active_link(doc, &config.nav);
    let back_to_top = nav::mount_back_to_top(doc, &config.back_to_top);
    let anchors = nav::mount_smooth_scroll(doc);
    nav::mount_marquee(doc);

    let revealed = reveal::mount_reveal(doc, &config.reveal).unwrap_or_else(|e| {
        tracing::warn!(error = ?e, "reveal animations unavailable");
        0
    });
    let timeline = reveal::mount_timeline(doc, &config.timeline).unwrap_or_else(|e| {
        tracing::warn!(error = ?e, "timeline unavailable");
        false
    });

    let tilted = effects::mount_tilt(doc, &config.effects);
    effects::mount_parallax(doc, &config.effects);

    let contact_form = contact::mount(doc, &config.contact);

    let vertical = carousel::mount_vertical(doc, &config.carousel, &modals);
    let testimonials = carousel::mount_testimonials(doc, &config.carousel);

    tracing::info!(
        nav = nav_mounted,
        back_to_top,
        anchors,
        revealed,
        timeline,
        tilted,
        contact_form,
        vertical,
        testimonials,
        "page mounted"
    );
}
