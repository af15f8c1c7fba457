//! Fade-in-on-view for tagged elements and the evolution timeline.

use autenticos_core::reveal::{parse_delay, stagger_delay};
use autenticos_core::timeline::{node_delay, progress_line};
use autenticos_types::{RevealConfig, TimelineConfig};
use gloo_timers::callback::Timeout;
use js_sys::Array;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{
    Document, Element, Event, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit,
};

use crate::dom;

/// Observer that hands each element to `on_visible` the first time it
/// intersects, then stops watching it.
fn observe_once(
    threshold: f64,
    root_margin: Option<&str>,
    on_visible: impl Fn(Element) + 'static,
) -> Result<IntersectionObserver, JsValue> {
    let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
        move |entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                if !entry.is_intersecting() {
                    continue;
                }
                let target = entry.target();
                observer.unobserve(&target);
                on_visible(target);
            }
        },
    );

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(threshold));
    if let Some(margin) = root_margin {
        options.set_root_margin(margin);
    }
    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
    callback.forget();
    Ok(observer)
}

/// Tag the configured selectors with staggered `data-delay`s and fade every
/// `[data-animate]` element in once it scrolls into view.
pub fn mount_reveal(doc: &Document, config: &RevealConfig) -> Result<usize, JsValue> {
    for selector in &config.targets {
        for (i, el) in dom::query_all(doc, selector).iter().enumerate() {
            if el.has_attribute("data-animate") {
                continue;
            }
            dom::set_attr(el, "data-animate", "");
            dom::set_attr(el, "data-delay", &stagger_delay(i, config.stagger_ms).to_string());
        }
    }

    let observer = observe_once(config.threshold, Some(&config.root_margin), |el| {
        let delay = parse_delay(el.get_attribute("data-delay").as_deref());
        Timeout::new(delay, move || dom::set_class(&el, "visible", true)).forget();
    })?;

    let pending = dom::query_all(doc, "[data-animate]:not(.visible)");
    for el in &pending {
        observer.observe(el);
    }
    Ok(pending.len())
}

/// Progress line and node entry for `#ruta-evolucion`.
pub fn mount_timeline(doc: &Document, config: &TimelineConfig) -> Result<bool, JsValue> {
    let (Some(section), Some(progress)) = (
        dom::by_id(doc, "ruta-evolucion"),
        dom::by_id(doc, "timelineProgress"),
    ) else {
        return Ok(false);
    };
    let nodes = dom::query_all(doc, ".timeline-node");
    if nodes.is_empty() {
        return Ok(false);
    }

    let observer = observe_once(config.node_threshold, None, |node| {
        dom::set_class(&node, "visible", true);
    })?;
    for (i, node) in nodes.iter().enumerate() {
        dom::set_style(node, "transition-delay", &node_delay(i, config.node_stagger_secs));
        observer.observe(node);
    }

    let update = {
        let config = config.clone();
        move || {
            let rect = section.get_bounding_client_rect();
            let line = progress_line(
                &config,
                rect.top(),
                rect.height(),
                dom::viewport_width(),
                dom::viewport_height(),
            );
            let (width, height) = line.css_size();
            dom::set_style(&progress, "width", &width);
            dom::set_style(&progress, "height", &height);
        }
    };

    update();
    if let Some(window) = dom::window() {
        let on_scroll = update.clone();
        dom::listen_passive(&window, "scroll", move |_: Event| on_scroll());
        dom::listen_passive(&window, "resize", move |_: Event| update());
    }
    Ok(true)
}
