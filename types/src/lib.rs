//! Shared configuration types for the Auténticos site behavior layer.

pub mod config;

pub use config::{
    BackToTopConfig, CarouselConfig, ConfigError, ContactConfig, DEFAULT_HORIZONTAL_INTERVAL_MS,
    DEFAULT_VERTICAL_INTERVAL_MS, EffectsConfig, MAX_INTERVAL_MS, ModalTrigger, ModalsConfig,
    NavConfig, RevealConfig, SiteConfig, TimelineConfig, parse_interval_attr, valid_interval,
};
