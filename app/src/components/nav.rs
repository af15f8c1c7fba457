//! Navigation bar, active link highlighting, back-to-top and in-page anchors.

use std::cell::RefCell;
use std::rc::Rc;

use autenticos_core::NavState;
use autenticos_core::nav::{SectionOffset, active_section, back_to_top_visible, section_href};
use autenticos_types::{BackToTopConfig, NavConfig};
use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, Event, HtmlElement, MouseEvent, Node, ScrollBehavior,
    ScrollIntoViewOptions, ScrollLogicalPosition, ScrollToOptions,
};

use crate::dom;

/// Scrolled styling and the mobile menu. Needs `#nav`, `#navToggle` and
/// `#navMenu`; returns `false` if any is missing.
pub fn mount_nav(doc: &Document, config: &NavConfig) -> bool {
    let (Some(nav), Some(toggle), Some(menu)) = (
        dom::by_id(doc, "nav"),
        dom::by_id(doc, "navToggle"),
        dom::by_id(doc, "navMenu"),
    ) else {
        return false;
    };
    let Some(window) = dom::window() else {
        return false;
    };
    let state = Rc::new(RefCell::new(NavState::new(config)));

    {
        let state = state.clone();
        let nav = nav.clone();
        dom::listen_passive(&window, "scroll", move |_: Event| {
            let scrolled = state.borrow_mut().on_scroll(dom::scroll_y());
            dom::set_class(&nav, "scrolled", scrolled);
        });
    }

    let show_menu = {
        let toggle = toggle.clone();
        let menu = menu.clone();
        move |open: bool| {
            dom::set_class(&menu, "open", open);
            dom::set_class(&toggle, "open", open);
            dom::set_body_scroll_locked(open);
        }
    };

    {
        let state = state.clone();
        let show_menu = show_menu.clone();
        dom::listen(&toggle, "click", move |_: MouseEvent| {
            let open = state.borrow_mut().toggle_menu();
            show_menu(open);
        });
    }

    for link in dom::query_all_in(&menu, ".nav__link") {
        let state = state.clone();
        let show_menu = show_menu.clone();
        dom::listen(&link, "click", move |_: MouseEvent| {
            state.borrow_mut().close_menu();
            show_menu(false);
        });
    }

    {
        let state = state.clone();
        dom::listen(doc, "click", move |e: MouseEvent| {
            let target = e.target().and_then(|t| t.dyn_into::<Node>().ok());
            if nav.contains(target.as_ref()) {
                return;
            }
            if state.borrow_mut().close_menu() {
                show_menu(false);
            }
        });
    }

    true
}

/// Highlight the nav link for the section currently in view.
pub fn mount_active_link(doc: &Document, config: &NavConfig) {
    let sections = dom::query_all(doc, "section[id]");
    let links = dom::query_all(doc, ".nav__link[href^=\"#\"]");
    if sections.is_empty() || links.is_empty() {
        return;
    }
    let Some(window) = dom::window() else {
        return;
    };
    let offset = config.active_link_offset_px;

    dom::listen_passive(&window, "scroll", move |_: Event| {
        // Offsets move with layout, so read them fresh each time
        let offsets: Vec<SectionOffset> = sections
            .iter()
            .filter_map(|s| {
                let html = s.dyn_ref::<HtmlElement>()?;
                Some(SectionOffset {
                    id: s.id(),
                    top: f64::from(html.offset_top()),
                })
            })
            .collect();
        let current = active_section(&offsets, dom::scroll_y(), offset).map(section_href);
        for link in &links {
            let active = current.is_some() && link.get_attribute("href") == current;
            dom::set_class(link, "nav__link--active", active);
        }
    });
}

pub fn mount_back_to_top(doc: &Document, config: &BackToTopConfig) -> bool {
    let Some(button) = dom::by_id(doc, "backToTop") else {
        return false;
    };
    let Some(window) = dom::window() else {
        return false;
    };
    let threshold = config.threshold_px;

    {
        let button = button.clone();
        dom::listen_passive(&window, "scroll", move |_: Event| {
            dom::set_class(&button, "show", back_to_top_visible(dom::scroll_y(), threshold));
        });
    }

    dom::listen(&button, "click", move |e: MouseEvent| {
        e.prevent_default();
        let options = ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    });
    true
}

/// Smooth scrolling for `href="#section"` anchors whose target exists.
pub fn mount_smooth_scroll(doc: &Document) -> usize {
    let anchors = dom::query_all(doc, "a[href^=\"#\"]");
    let count = anchors.len();
    for anchor in anchors {
        let doc = doc.clone();
        let href_source = anchor.clone();
        dom::listen(&anchor, "click", move |e: MouseEvent| {
            let Some(href) = href_source.get_attribute("href") else {
                return;
            };
            if href == "#" {
                return;
            }
            let Some(target) = doc.query_selector(&href).ok().flatten() else {
                return;
            };
            e.prevent_default();
            scroll_into_view(&target);
        });
    }
    count
}

fn scroll_into_view(target: &Element) {
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(ScrollLogicalPosition::Start);
    target.scroll_into_view_with_scroll_into_view_options(&options);
}

/// Pause the logo marquee while hovered.
pub fn mount_marquee(doc: &Document) -> bool {
    let Some(marquee) = dom::by_id(doc, "marqueeInner") else {
        return false;
    };
    let paused = marquee.clone();
    dom::listen(&marquee, "mouseenter", move |_: MouseEvent| {
        dom::set_style(&paused, "animation-play-state", "paused");
    });
    let running = marquee.clone();
    dom::listen(&marquee, "mouseleave", move |_: MouseEvent| {
        dom::set_style(&running, "animation-play-state", "running");
    });
    true
}
