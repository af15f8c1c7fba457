//! DOM bindings for the vertical image carousels and the testimonials track.

use std::cell::RefCell;
use std::rc::Rc;

use autenticos_core::{
    HorizontalCarousel, SlideState, SlideView, TrackLayout, TrackView, TransitionOrigin,
    VerticalCarousel,
};
use autenticos_types::{
    CarouselConfig, DEFAULT_HORIZONTAL_INTERVAL_MS, parse_interval_attr, valid_interval,
};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, MouseEvent, TransitionEvent};

use crate::components::modal::SharedModals;
use crate::dom;
use crate::scheduler::{IntervalScheduler, TickBinding};

// ─────────────────────────────────────────────────────────────────────────────
// Views
// ─────────────────────────────────────────────────────────────────────────────

struct DomSlides {
    slides: Vec<Element>,
    dots: Vec<Element>,
}

impl SlideView for DomSlides {
    fn show_slide_state(&mut self, index: usize, state: SlideState) {
        let Some(slide) = self.slides.get(index) else {
            return;
        };
        dom::set_class(slide, "active", state == SlideState::Active);
        dom::set_class(slide, "leaving", state == SlideState::Leaving);
    }

    fn reset_slide_transform(&mut self, index: usize) {
        if let Some(slide) = self.slides.get(index) {
            dom::set_style(slide, "transform", "");
        }
    }

    fn highlight_dot(&mut self, index: usize) {
        for (i, dot) in self.dots.iter().enumerate() {
            let selected = i == index;
            dom::set_class(dot, "active", selected);
            dom::set_attr(dot, "aria-selected", if selected { "true" } else { "false" });
        }
    }
}

struct DomTrack {
    track: Element,
    first_item: Element,
    dots: Vec<Element>,
}

impl TrackView for DomTrack {
    fn viewport_width(&self) -> f64 {
        dom::viewport_width()
    }

    fn item_width(&self) -> f64 {
        self.first_item
            .dyn_ref::<HtmlElement>()
            .map(|el| f64::from(el.offset_width()))
            .unwrap_or(0.0)
    }

    fn set_track_offset(&mut self, offset_px: f64) {
        dom::set_style(&self.track, "transform", &format!("translateX(-{offset_px}px)"));
    }

    fn highlight_dot(&mut self, index: usize) {
        for (i, dot) in self.dots.iter().enumerate() {
            dom::set_class(dot, "active", i == index);
        }
    }
}

type Vertical = VerticalCarousel<DomSlides, IntervalScheduler>;
type Horizontal = HorizontalCarousel<DomTrack, IntervalScheduler>;

// ─────────────────────────────────────────────────────────────────────────────
// Vertical
// ─────────────────────────────────────────────────────────────────────────────

/// Mount every `.v-carousel` on the page. Returns how many were mounted.
pub fn mount_vertical(doc: &Document, config: &CarouselConfig, modals: &SharedModals) -> usize {
    dom::query_all(doc, ".v-carousel")
        .into_iter()
        .filter(|root| mount_one_vertical(root, config, modals))
        .count()
}

fn mount_one_vertical(root: &Element, config: &CarouselConfig, modals: &SharedModals) -> bool {
    let slides = dom::query_all_in(root, ".v-carousel__slide");
    let dots = dom::query_all_in(root, ".v-carousel__dot");
    let interval = parse_interval_attr(
        root.get_attribute("data-interval").as_deref(),
        config.vertical_default_interval_ms,
    );

    let slide_count = slides.len();
    let view = DomSlides {
        slides: slides.clone(),
        dots: dots.clone(),
    };
    let (binding, scheduler) = TickBinding::<Vertical>::new(Vertical::tick);
    let Some(carousel) = VerticalCarousel::new(view, scheduler, slide_count, interval) else {
        return false;
    };
    let carousel = Rc::new(RefCell::new(carousel));
    binding.bind(&carousel);

    for (i, slide) in slides.iter().enumerate() {
        let carousel = carousel.clone();
        let own = slide.clone();
        dom::listen(slide, "transitionend", move |e: TransitionEvent| {
            let on_slide = e
                .target()
                .and_then(|t| t.dyn_into::<Element>().ok())
                .is_some_and(|t| t == own);
            let origin = if on_slide {
                TransitionOrigin::Slide
            } else {
                TransitionOrigin::Descendant
            };
            carousel
                .borrow_mut()
                .on_transition_end(i, &e.property_name(), origin);
        });
    }

    for (i, dot) in dots.iter().enumerate() {
        let carousel = carousel.clone();
        dom::listen(dot, "click", move |_: MouseEvent| {
            carousel.borrow_mut().select(i);
        });
    }

    {
        let carousel = carousel.clone();
        dom::listen(root, "mouseenter", move |_: MouseEvent| {
            carousel.borrow_mut().pointer_enter();
        });
    }
    {
        let carousel = carousel.clone();
        dom::listen(root, "mouseleave", move |_: MouseEvent| {
            carousel.borrow_mut().pointer_leave();
        });
    }

    // Carousels inside a modal hold still while it is closed
    if let Ok(Some(modal)) = root.closest(".modal") {
        let id = modal.id();
        let mut modals = modals.borrow_mut();
        if modals.contains(&id) {
            carousel
                .borrow_mut()
                .set_container_visible(modals.is_open(&id));
            let carousel = carousel.clone();
            modals.subscribe(&id, move |visible| {
                if let Ok(mut carousel) = carousel.try_borrow_mut() {
                    carousel.set_container_visible(visible);
                }
            });
        }
    }

    carousel.borrow_mut().mount();
    tracing::debug!(slides = slide_count, interval_ms = interval, "vertical carousel ready");
    true
}

// ─────────────────────────────────────────────────────────────────────────────
// Horizontal
// ─────────────────────────────────────────────────────────────────────────────

/// Mount the testimonials carousel, if the page has one.
pub fn mount_testimonials(doc: &Document, config: &CarouselConfig) -> bool {
    let Some(root) = dom::by_id(doc, "testimonialsCarousel") else {
        return false;
    };
    let Some(track) = dom::query_in(&root, ".testimonials-track") else {
        return false;
    };
    let items = dom::query_all_in(&track, ".testimonial-card");
    let dots = dom::query_all_in(&root, ".h-carousel__dot");
    let Some(first_item) = items.first().cloned() else {
        return false;
    };

    let view = DomTrack {
        track,
        first_item,
        dots: dots.clone(),
    };
    let (binding, scheduler) = TickBinding::<Horizontal>::new(Horizontal::tick);
    let Some(carousel) = HorizontalCarousel::new(
        view,
        scheduler,
        items.len(),
        dots.len(),
        TrackLayout::from(config),
        valid_interval(config.horizontal_interval_ms).unwrap_or(DEFAULT_HORIZONTAL_INTERVAL_MS),
    ) else {
        return false;
    };
    let carousel = Rc::new(RefCell::new(carousel));
    binding.bind(&carousel);

    for (i, dot) in dots.iter().enumerate() {
        let carousel = carousel.clone();
        dom::listen(dot, "click", move |_: MouseEvent| {
            carousel.borrow_mut().select(i);
        });
    }
    {
        let carousel = carousel.clone();
        dom::listen(&root, "mouseenter", move |_: MouseEvent| {
            carousel.borrow_mut().pointer_enter();
        });
    }
    {
        let carousel = carousel.clone();
        dom::listen(&root, "mouseleave", move |_: MouseEvent| {
            carousel.borrow_mut().pointer_leave();
        });
    }
    if let Some(window) = dom::window() {
        let carousel = carousel.clone();
        dom::listen(&window, "resize", move |_: web_sys::Event| {
            carousel.borrow_mut().on_resize();
        });
    }

    carousel.borrow_mut().mount();
    true
}
