//! Responsive window sizing for the horizontal carousel.

use autenticos_types::CarouselConfig;

/// Viewport width buckets. Both bounds are exclusive, so a width sitting
/// exactly on a breakpoint falls into the narrower bucket.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Breakpoints {
    pub wide_px: f64,
    pub medium_px: f64,
}

impl Default for Breakpoints {
    fn default() -> Self {
        Self {
            wide_px: 1024.0,
            medium_px: 768.0,
        }
    }
}

impl From<&CarouselConfig> for Breakpoints {
    fn from(config: &CarouselConfig) -> Self {
        Self {
            wide_px: config.wide_breakpoint_px,
            medium_px: config.medium_breakpoint_px,
        }
    }
}

impl Breakpoints {
    /// Items shown side by side at viewport width `width`
    pub fn visible_count(&self, width: f64) -> usize {
        if width > self.wide_px {
            3
        } else if width > self.medium_px {
            2
        } else {
            1
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visible_count_buckets() {
        let bp = Breakpoints::default();
        assert_eq!(bp.visible_count(1440.0), 3);
        assert_eq!(bp.visible_count(1024.5), 3);
        assert_eq!(bp.visible_count(1024.0), 2);
        assert_eq!(bp.visible_count(900.0), 2);
        assert_eq!(bp.visible_count(768.0), 1);
        assert_eq!(bp.visible_count(375.0), 1);
        assert_eq!(bp.visible_count(0.0), 1);
    }

    #[test]
    fn test_from_config() {
        let config = CarouselConfig {
            wide_breakpoint_px: 1200.0,
            medium_breakpoint_px: 600.0,
            ..CarouselConfig::default()
        };
        let bp = Breakpoints::from(&config);
        assert_eq!(bp.visible_count(1200.0), 2);
        assert_eq!(bp.visible_count(601.0), 2);
        assert_eq!(bp.visible_count(600.0), 1);
        assert_eq!(Breakpoints::from(&CarouselConfig::default()), Breakpoints::default());
    }
}
