//! Pointer tilt on cards and hero parallax (hover-capable devices only).

use autenticos_core::effects::{Rect, TILT_RESET_TRANSITION, parallax_transform, tilt_transform};
use autenticos_types::EffectsConfig;
use gloo_timers::callback::Timeout;
use web_sys::{Document, Event, MouseEvent};

use crate::dom;

pub fn mount_tilt(doc: &Document, config: &EffectsConfig) -> usize {
    if !dom::can_hover() {
        return 0;
    }
    let cards = dom::query_all(doc, ".service-card, .testimonial-card");
    for card in &cards {
        let degrees = config.tilt_degrees;
        let target = card.clone();
        dom::listen(card, "mousemove", move |e: MouseEvent| {
            let bounds = target.get_bounding_client_rect();
            let rect = Rect {
                left: bounds.left(),
                top: bounds.top(),
                width: bounds.width(),
                height: bounds.height(),
            };
            if let Some(transform) =
                tilt_transform(rect, f64::from(e.client_x()), f64::from(e.client_y()), degrees)
            {
                dom::set_style(&target, "transform", &transform);
            }
        });

        let reset_ms = config.tilt_reset_ms;
        let target = card.clone();
        dom::listen(card, "mouseleave", move |_: MouseEvent| {
            dom::set_style(&target, "transform", "");
            dom::set_style(&target, "transition", TILT_RESET_TRANSITION);
            let settled = target.clone();
            Timeout::new(reset_ms, move || dom::set_style(&settled, "transition", "")).forget();
        });
    }
    cards.len()
}

pub fn mount_parallax(doc: &Document, config: &EffectsConfig) -> bool {
    let Some(hero) = doc.query_selector(".hero__img").ok().flatten() else {
        return false;
    };
    if !dom::can_hover() {
        return false;
    }
    let Some(window) = dom::window() else {
        return false;
    };
    let factor = config.parallax_factor;
    dom::listen_passive(&window, "scroll", move |_: Event| {
        dom::set_style(&hero, "transform", &parallax_transform(dom::scroll_y(), factor));
    });
    true
}
