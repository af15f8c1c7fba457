//! Site configuration.
//!
//! Every tunable used by the page behavior lives here. All sections are
//! `#[serde(default)]`, so a TOML file only needs the keys it overrides and
//! an empty document yields exactly the values the page ships with.

use serde::{Deserialize, Serialize};

/// Errors that can occur while loading the site configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to parse site config: {0}")]
    Parse(#[from] toml::de::Error),
}

// ─────────────────────────────────────────────────────────────────────────────
// Root
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub nav: NavConfig,
    pub back_to_top: BackToTopConfig,
    pub carousel: CarouselConfig,
    pub reveal: RevealConfig,
    pub timeline: TimelineConfig,
    pub effects: EffectsConfig,
    pub contact: ContactConfig,
    pub modals: ModalsConfig,
}

impl SiteConfig {
    /// Parse a config document. Missing keys fall back to defaults and
    /// unknown keys are ignored.
    ///
    /// Out-of-range carousel intervals are replaced with the built-in ones.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let mut config: Self = toml::from_str(s)?;
        config.carousel.sanitize();
        Ok(config)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Sections
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavConfig {
    /// Scroll distance after which the nav bar gets the `scrolled` class
    pub scrolled_threshold_px: f64,
    /// How far above a section's top the active-link switch happens
    pub active_link_offset_px: f64,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            scrolled_threshold_px: 60.0,
            active_link_offset_px: 100.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BackToTopConfig {
    pub threshold_px: f64,
}

impl Default for BackToTopConfig {
    fn default() -> Self {
        Self {
            threshold_px: 400.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CarouselConfig {
    /// Used when a vertical carousel has no usable `data-interval`
    pub vertical_default_interval_ms: u32,
    pub horizontal_interval_ms: u32,
    /// Must match the CSS `gap` of the testimonials track
    pub horizontal_gap_px: f64,
    /// Viewports wider than this show three testimonials
    pub wide_breakpoint_px: f64,
    /// Viewports wider than this (and not wide) show two
    pub medium_breakpoint_px: f64,
}

/// Browser timers take a signed 32-bit delay.
pub const MAX_INTERVAL_MS: u32 = i32::MAX as u32;

pub const DEFAULT_VERTICAL_INTERVAL_MS: u32 = 4000;
pub const DEFAULT_HORIZONTAL_INTERVAL_MS: u32 = 5000;

/// `Some(ms)` when `ms` is usable as a timer period.
pub fn valid_interval(ms: u32) -> Option<u32> {
    (1..=MAX_INTERVAL_MS).contains(&ms).then_some(ms)
}

impl CarouselConfig {
    /// Replace zero or oversized intervals with the built-in defaults.
    pub fn sanitize(&mut self) {
        self.vertical_default_interval_ms = valid_interval(self.vertical_default_interval_ms)
            .unwrap_or(DEFAULT_VERTICAL_INTERVAL_MS);
        self.horizontal_interval_ms =
            valid_interval(self.horizontal_interval_ms).unwrap_or(DEFAULT_HORIZONTAL_INTERVAL_MS);
    }
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            vertical_default_interval_ms: DEFAULT_VERTICAL_INTERVAL_MS,
            horizontal_interval_ms: DEFAULT_HORIZONTAL_INTERVAL_MS,
            horizontal_gap_px: 24.0,
            wide_breakpoint_px: 1024.0,
            medium_breakpoint_px: 768.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RevealConfig {
    pub stagger_ms: u32,
    pub threshold: f64,
    pub root_margin: String,
    /// Selectors whose matches are auto-tagged with `data-animate`
    pub targets: Vec<String>,
}

impl Default for RevealConfig {
    fn default() -> Self {
        let targets = [
            ".hero__badge",
            ".hero__title",
            ".hero__sub",
            ".hero__actions",
            ".hero__stats",
            ".hero__visual",
            ".section-header",
            ".section-badge",
            ".section-title",
            ".section-desc",
            ".about-lead",
            ".about-body",
            ".about-pillars",
            ".about-card",
            ".pillar",
            ".ruta-card",
            ".dimension-item",
            ".service-card",
            ".team-card",
            ".clients-card",
            ".testimonial-card",
            ".cta-card",
            ".footer__brand",
            ".footer__col",
        ];
        Self {
            stagger_ms: 80,
            threshold: 0.12,
            root_margin: "0px 0px -40px 0px".to_string(),
            targets: targets.iter().map(|s| s.to_string()).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimelineConfig {
    /// Above this viewport width the progress line runs horizontally
    pub horizontal_breakpoint_px: f64,
    pub node_stagger_secs: f64,
    /// Extra scroll distance (as a fraction of viewport height) folded into
    /// the denominator so the line completes before the section leaves
    pub tail_fraction: f64,
    pub node_threshold: f64,
}

impl Default for TimelineConfig {
    fn default() -> Self {
        Self {
            horizontal_breakpoint_px: 900.0,
            node_stagger_secs: 0.15,
            tail_fraction: 0.2,
            node_threshold: 0.3,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EffectsConfig {
    pub tilt_degrees: f64,
    pub tilt_reset_ms: u32,
    pub parallax_factor: f64,
}

impl Default for EffectsConfig {
    fn default() -> Self {
        Self {
            tilt_degrees: 8.0,
            tilt_reset_ms: 400,
            parallax_factor: 0.06,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactConfig {
    pub endpoint: String,
    pub subject: String,
    pub template: String,
    pub success_display_ms: u32,
    pub sending_label: String,
    pub sending_icon: String,
    pub rejected_message: String,
    pub network_message: String,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://formsubmit.co/ajax/contacto@autenticos.co".to_string(),
            subject: "Nuevo mensaje de contacto - Portafolio Auténticos".to_string(),
            template: "table".to_string(),
            success_display_ms: 5000,
            sending_label: "Enviando...".to_string(),
            sending_icon: "⟳".to_string(),
            rejected_message: "Hubo un error al enviar el mensaje. Por favor intenta de nuevo."
                .to_string(),
            network_message: "No se pudo establecer conexión. Verifica tu internet.".to_string(),
        }
    }
}

/// Element id that opens a modal when clicked
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModalTrigger {
    pub trigger: String,
    pub modal: String,
}

impl ModalTrigger {
    fn new(trigger: &str, modal: &str) -> Self {
        Self {
            trigger: trigger.to_string(),
            modal: modal.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModalsConfig {
    pub triggers: Vec<ModalTrigger>,
}

impl Default for ModalsConfig {
    fn default() -> Self {
        Self {
            triggers: vec![
                ModalTrigger::new("btnConocenos", "modalEquipo"),
                ModalTrigger::new("btnNosotros", "modalNosotros"),
                ModalTrigger::new("cardExtraordinarios", "modalExtraordinarios"),
                ModalTrigger::new("cardFascinantes", "modalFascinantes"),
                ModalTrigger::new("cardTrascendentes", "modalTrascendentes"),
                ModalTrigger::new("cardGenuinos", "modalGenuinos"),
                ModalTrigger::new("cardConscientes", "modalConscientes"),
            ],
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Attribute parsing
// ─────────────────────────────────────────────────────────────────────────────

/// Parse a `data-interval` style attribute.
///
/// Accepts a leading run of ASCII digits (so `"3500ms"` is 3500). Anything
/// missing, non-numeric, zero or above [`MAX_INTERVAL_MS`] falls back to
/// `default`, and an unusable `default` falls back to
/// [`DEFAULT_VERTICAL_INTERVAL_MS`].
///
/// # Examples
/// ```
/// use autenticos_types::config::parse_interval_attr;
/// assert_eq!(parse_interval_attr(Some("2500"), 4000), 2500);
/// assert_eq!(parse_interval_attr(Some("fast"), 4000), 4000);
/// assert_eq!(parse_interval_attr(None, 4000), 4000);
/// ```
pub fn parse_interval_attr(raw: Option<&str>, default: u32) -> u32 {
    let default = valid_interval(default).unwrap_or(DEFAULT_VERTICAL_INTERVAL_MS);
    let Some(raw) = raw else {
        return default;
    };
    let trimmed = raw.trim_start();
    let digits_end = trimmed
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(trimmed.len());
    trimmed[..digits_end]
        .parse::<u32>()
        .ok()
        .and_then(valid_interval)
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_is_default() {
        let config = SiteConfig::from_toml_str("").unwrap();
        assert_eq!(config, SiteConfig::default());
        assert_eq!(config.carousel.vertical_default_interval_ms, 4000);
        assert_eq!(config.carousel.horizontal_interval_ms, 5000);
        assert_eq!(config.modals.triggers.len(), 7);
    }

    #[test]
    fn test_partial_override() {
        let toml = r#"
[carousel]
horizontal_interval_ms = 7000

[contact]
endpoint = "https://example.test/submit"
"#;
        let config = SiteConfig::from_toml_str(toml).unwrap();
        assert_eq!(config.carousel.horizontal_interval_ms, 7000);
        assert_eq!(config.carousel.horizontal_gap_px, 24.0);
        assert_eq!(config.contact.endpoint, "https://example.test/submit");
        assert_eq!(config.contact.template, "table");
        assert_eq!(config.nav.scrolled_threshold_px, 60.0);
    }

    #[test]
    fn test_modal_triggers_replace_defaults() {
        let toml = r#"
[[modals.triggers]]
trigger = "btnOnly"
modal = "modalOnly"
"#;
        let config = SiteConfig::from_toml_str(toml).unwrap();
        assert_eq!(
            config.modals.triggers,
            vec![ModalTrigger::new("btnOnly", "modalOnly")]
        );
    }

    #[test]
    fn test_malformed_document_errors() {
        let err = SiteConfig::from_toml_str("[carousel\nbroken").unwrap_err();
        assert!(err.to_string().starts_with("failed to parse site config"));
    }

    #[test]
    fn test_roundtrip_through_toml() {
        let config = SiteConfig::default();
        let text = toml::to_string(&config).unwrap();
        assert_eq!(SiteConfig::from_toml_str(&text).unwrap(), config);
    }

    #[test]
    fn test_parse_interval_attr() {
        assert_eq!(parse_interval_attr(Some("2500"), 4000), 2500);
        assert_eq!(parse_interval_attr(Some("3500ms"), 4000), 3500);
        assert_eq!(parse_interval_attr(Some("  1200"), 4000), 1200);
        assert_eq!(parse_interval_attr(Some("0"), 4000), 4000);
        assert_eq!(parse_interval_attr(Some(""), 4000), 4000);
        assert_eq!(parse_interval_attr(Some("-200"), 4000), 4000);
        assert_eq!(parse_interval_attr(Some("abc"), 4000), 4000);
        assert_eq!(parse_interval_attr(None, 4000), 4000);
    }

    #[test]
    fn test_parse_interval_attr_rejects_oversized() {
        assert_eq!(parse_interval_attr(Some("3000000000"), 4000), 4000);
        assert_eq!(parse_interval_attr(Some("2147483648"), 4000), 4000);
        assert_eq!(parse_interval_attr(Some("2147483647"), 4000), MAX_INTERVAL_MS);
        assert_eq!(parse_interval_attr(Some("99999999999"), 4000), 4000);
    }

    #[test]
    fn test_parse_interval_attr_unusable_default() {
        assert_eq!(parse_interval_attr(None, 0), DEFAULT_VERTICAL_INTERVAL_MS);
        assert_eq!(parse_interval_attr(Some("abc"), u32::MAX), DEFAULT_VERTICAL_INTERVAL_MS);
        assert_eq!(parse_interval_attr(Some("1500"), 0), 1500);
    }

    #[test]
    fn test_zero_intervals_fall_back() {
        let toml = "[carousel]\nhorizontal_interval_ms = 0\nvertical_default_interval_ms = 0\n";
        let config = SiteConfig::from_toml_str(toml).unwrap();
        assert_eq!(config.carousel.horizontal_interval_ms, DEFAULT_HORIZONTAL_INTERVAL_MS);
        assert_eq!(config.carousel.vertical_default_interval_ms, DEFAULT_VERTICAL_INTERVAL_MS);
    }

    #[test]
    fn test_oversized_intervals_fall_back() {
        let toml = "[carousel]\nhorizontal_interval_ms = 3000000000\nvertical_default_interval_ms = 2500\n";
        let config = SiteConfig::from_toml_str(toml).unwrap();
        assert_eq!(config.carousel.horizontal_interval_ms, DEFAULT_HORIZONTAL_INTERVAL_MS);
        assert_eq!(config.carousel.vertical_default_interval_ms, 2500);
    }
}
