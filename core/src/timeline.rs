//! "Ruta evolución" timeline progress line.

use autenticos_types::TimelineConfig;

/// Which way the progress line is drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// Size of the progress line for one frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProgressLine {
    pub percent: f64,
    pub orientation: Orientation,
}

impl ProgressLine {
    /// CSS `(width, height)` values
    pub fn css_size(&self) -> (String, String) {
        let fill = format!("{}%", self.percent);
        match self.orientation {
            Orientation::Horizontal => (fill, "4px".to_string()),
            Orientation::Vertical => ("4px".to_string(), fill),
        }
    }
}

/// How far through the section the reader is, 0–100.
///
/// Reaches 100 a little before the section leaves the viewport; the slack is
/// `tail_fraction` of the viewport height.
pub fn progress_percent(section_top: f64, section_height: f64, viewport_height: f64, tail_fraction: f64) -> f64 {
    let scrolled = viewport_height - section_top;
    let total = section_height + viewport_height * tail_fraction;
    if total <= 0.0 {
        return 0.0;
    }
    (scrolled / total * 100.0).clamp(0.0, 100.0)
}

pub fn progress_line(
    config: &TimelineConfig,
    section_top: f64,
    section_height: f64,
    viewport_width: f64,
    viewport_height: f64,
) -> ProgressLine {
    let percent = progress_percent(section_top, section_height, viewport_height, config.tail_fraction);
    let orientation = if viewport_width > config.horizontal_breakpoint_px {
        Orientation::Horizontal
    } else {
        Orientation::Vertical
    };
    ProgressLine {
        percent,
        orientation,
    }
}

/// `transition-delay` for the `index`-th node
pub fn node_delay(index: usize, stagger_secs: f64) -> String {
    format!("{}s", index as f64 * stagger_secs)
}
