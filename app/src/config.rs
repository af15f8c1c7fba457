//! Site configuration embedded at build time.

use autenticos_types::SiteConfig;

const SITE_TOML: &str = include_str!("../site.toml");

/// Parse the embedded config, falling back to defaults if it is malformed.
pub fn load() -> SiteConfig {
    match SiteConfig::from_toml_str(SITE_TOML) {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!(error = %e, "invalid embedded site config, using defaults");
            SiteConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_config_parses() {
        let config = SiteConfig::from_toml_str(SITE_TOML).unwrap();
        assert_eq!(config.carousel.horizontal_interval_ms, 5000);
        assert_eq!(config.contact.success_display_ms, 5000);
        assert_eq!(load(), config);
    }
}
