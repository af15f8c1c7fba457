//! Multi-card testimonials carousel.
//!
//! The track is a single row of equally sized cards translated left by
//! `current * (card_width + gap)`. Card width is measured from the first
//! card, so cards of differing widths drift out of alignment.

use autenticos_types::CarouselConfig;

use crate::timer::{Scheduler, TimerSlot};

use super::PauseSignals;
use super::index::{advance_or_reset, max_index};
use super::window::Breakpoints;

/// Projection of the track onto the page, plus the two measurements the
/// layout depends on.
pub trait TrackView {
    fn viewport_width(&self) -> f64;

    /// Rendered width of the first card
    fn item_width(&self) -> f64;

    /// Translate the track left by `offset_px`
    fn set_track_offset(&mut self, offset_px: f64);

    /// Mark exactly the dot at `index` active
    fn highlight_dot(&mut self, index: usize);
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackLayout {
    pub gap_px: f64,
    pub breakpoints: Breakpoints,
}

impl Default for TrackLayout {
    fn default() -> Self {
        Self {
            gap_px: 24.0,
            breakpoints: Breakpoints::default(),
        }
    }
}

impl From<&CarouselConfig> for TrackLayout {
    fn from(config: &CarouselConfig) -> Self {
        Self {
            gap_px: config.horizontal_gap_px,
            breakpoints: Breakpoints::from(config),
        }
    }
}

pub struct HorizontalCarousel<V: TrackView, S: Scheduler> {
    view: V,
    timer: TimerSlot<S>,
    layout: TrackLayout,
    item_count: usize,
    visible_count: usize,
    current: usize,
    pause: PauseSignals,
}

impl<V: TrackView, S: Scheduler> HorizontalCarousel<V, S> {
    /// Returns `None` when there are no cards or no dots to drive.
    pub fn new(
        view: V,
        scheduler: S,
        item_count: usize,
        dot_count: usize,
        layout: TrackLayout,
        interval_ms: u32,
    ) -> Option<Self> {
        if item_count == 0 || dot_count == 0 {
            return None;
        }
        let visible_count = layout.breakpoints.visible_count(view.viewport_width());
        Some(Self {
            view,
            timer: TimerSlot::new(scheduler, interval_ms),
            layout,
            item_count,
            visible_count,
            current: 0,
            pause: PauseSignals::default(),
        })
    }

    pub fn mount(&mut self) {
        self.render();
        self.timer.start();
        tracing::debug!(
            items = self.item_count,
            visible = self.visible_count,
            "horizontal carousel mounted"
        );
    }

    /// Recompute the window for the current viewport and clamp the index
    /// so the window never runs past the last card.
    fn refresh_window(&mut self) -> usize {
        self.visible_count = self
            .layout
            .breakpoints
            .visible_count(self.view.viewport_width());
        let max = max_index(self.item_count, self.visible_count);
        if self.current > max {
            self.current = max;
        }
        max
    }

    /// Re-derive the window, then translate the track and sync the dots.
    pub fn render(&mut self) {
        self.refresh_window();
        let offset = self.current as f64 * (self.view.item_width() + self.layout.gap_px);
        self.view.set_track_offset(offset);
        self.view.highlight_dot(self.current);
    }

    /// Advance one card, or jump back to the first once the last card is
    /// in view.
    pub fn next(&mut self) {
        let max = self.refresh_window();
        self.current = advance_or_reset(self.current, max);
        self.render();
    }

    /// Dot click: show `index` and restart the interval.
    pub fn select(&mut self, index: usize) {
        self.current = index;
        self.render();
        self.timer.start();
    }

    pub fn on_resize(&mut self) {
        self.render();
    }

    /// Timer callback
    pub fn tick(&mut self) {
        if self.pause.is_paused() {
            tracing::trace!("horizontal carousel tick skipped");
            return;
        }
        self.next();
    }

    pub fn pointer_enter(&mut self) {
        self.pause.set_pointer_hover(true);
    }

    pub fn pointer_leave(&mut self) {
        self.pause.set_pointer_hover(false);
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn visible_count(&self) -> usize {
        self.visible_count
    }

    pub fn max_index(&self) -> usize {
        max_index(self.item_count, self.visible_count)
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

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }
}
