//! Site content loading
//!
//! Page copy is a TOML document deserialized into [`SiteConfig`]. The
//! frontend embeds it at build time and falls back to the built-in defaults
//! if it does not parse.

use tracing::{info, warn};
use trinity_types::SiteConfig;

use crate::error::ConfigError;

/// Parse and validate a site content document.
pub fn parse_site_config(text: &str) -> Result<SiteConfig, ConfigError> {
    let config: SiteConfig =
        toml::from_str(text).map_err(|source| ConfigError::ParseToml { source })?;
    validate(&config)?;
    Ok(config)
}

/// Check the parts of the config that serde cannot.
pub fn validate(config: &SiteConfig) -> Result<(), ConfigError> {
    if config.school_name.trim().is_empty() {
        return Err(ConfigError::Invalid {
            reason: "school_name is empty".to_string(),
        });
    }

    let thresholds = [
        ("counter_threshold", config.animation.counter_threshold),
        ("reveal_threshold", config.animation.reveal_threshold),
    ];
    for (name, value) in thresholds {
        if !(0.0..=1.0).contains(&value) {
            return Err(ConfigError::Invalid {
                reason: format!("animation.{name} must be between 0 and 1, got {value}"),
            });
        }
    }

    Ok(())
}

/// Parse `text`, or log why not and use [`SiteConfig::default`].
pub fn load_or_default(text: &str) -> SiteConfig {
    match parse_site_config(text) {
        Ok(config) => {
            info!(
                school = %config.school_name,
                counters = config.counters().count(),
                faqs = config.faq.items.len(),
                "site config loaded"
            );
            config
        }
        Err(err) => {
            warn!(error = %err, source = ?std::error::Error::source(&err), "using default site config");
            SiteConfig::default()
        }
    }
}
