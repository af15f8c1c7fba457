//! Navigation bar state: scrolled styling, mobile menu, active section.

use autenticos_types::NavConfig;

#[derive(Debug, Clone, PartialEq)]
pub struct NavState {
    scrolled_threshold_px: f64,
    scrolled: bool,
    menu_open: bool,
}

impl NavState {
    pub fn new(config: &NavConfig) -> Self {
        Self {
            scrolled_threshold_px: config.scrolled_threshold_px,
            scrolled: false,
            menu_open: false,
        }
    }

    /// Update for a new scroll position, returning whether the nav should
    /// carry the `scrolled` class.
    pub fn on_scroll(&mut self, scroll_y: f64) -> bool {
        self.scrolled = scroll_y > self.scrolled_threshold_px;
        self.scrolled
    }

    /// Flip the mobile menu, returning the new open state
    pub fn toggle_menu(&mut self) -> bool {
        self.menu_open = !self.menu_open;
        self.menu_open
    }

    /// Returns whether the menu was open
    pub fn close_menu(&mut self) -> bool {
        std::mem::replace(&mut self.menu_open, false)
    }

    pub fn is_scrolled(&self) -> bool {
        self.scrolled
    }

    pub fn is_menu_open(&self) -> bool {
        self.menu_open
    }
}

/// A page section and where it starts
#[derive(Debug, Clone, PartialEq)]
pub struct SectionOffset {
    pub id: String,
    pub top: f64,
}

/// The section the reader is in: the last one whose top (less `offset`)
/// has scrolled past. Sections are expected in document order.
pub fn active_section(sections: &[SectionOffset], scroll_y: f64, offset: f64) -> Option<&str> {
    sections
        .iter()
        .rev()
        .find(|s| scroll_y >= s.top - offset)
        .map(|s| s.id.as_str())
}

/// The `href` a nav link must carry to be highlighted for `section`
pub fn section_href(section: &str) -> String {
    format!("#{section}")
}

/// Back-to-top button visibility
pub fn back_to_top_visible(scroll_y: f64, threshold_px: f64) -> bool {
    scroll_y > threshold_px
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sections() -> Vec<SectionOffset> {
        [("inicio", 0.0), ("nosotros", 800.0), ("servicios", 1600.0), ("contacto", 2600.0)]
            .into_iter()
            .map(|(id, top)| SectionOffset {
                id: id.to_string(),
                top,
            })
            .collect()
    }

    #[test]
    fn test_scrolled_threshold_is_exclusive() {
        let mut nav = NavState::new(&NavConfig::default());
        assert!(!nav.on_scroll(0.0));
        assert!(!nav.on_scroll(60.0));
        assert!(nav.on_scroll(60.5));
        assert!(nav.is_scrolled());
        assert!(!nav.on_scroll(10.0));
    }

    #[test]
    fn test_menu_toggle_and_close() {
        let mut nav = NavState::new(&NavConfig::default());
        assert!(nav.toggle_menu());
        assert!(nav.is_menu_open());
        assert!(nav.close_menu());
        assert!(!nav.close_menu());
        assert!(nav.toggle_menu());
        assert!(!nav.toggle_menu());
    }

    #[test]
    fn test_active_section() {
        let s = sections();
        assert_eq!(active_section(&s, 0.0, 100.0), Some("inicio"));
        assert_eq!(active_section(&s, 699.0, 100.0), Some("inicio"));
        assert_eq!(active_section(&s, 700.0, 100.0), Some("nosotros"));
        assert_eq!(active_section(&s, 5000.0, 100.0), Some("contacto"));
    }

    #[test]
    fn test_active_section_before_first() {
        let s = vec![SectionOffset {
            id: "hero".to_string(),
            top: 500.0,
        }];
        assert_eq!(active_section(&s, 0.0, 100.0), None);
        assert_eq!(active_section(&[], 300.0, 100.0), None);
        assert_eq!(section_href("hero"), "#hero");
    }

    #[test]
    fn test_back_to_top() {
        assert!(!back_to_top_visible(400.0, 400.0));
        assert!(back_to_top_visible(401.0, 400.0));
    }
}
