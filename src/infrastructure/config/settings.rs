//! Application configuration loading and validation.
//!
//! Provides the main [`Config`] struct that aggregates all settings. Every
//! section is optional; an empty file yields the built-in site table, a 5 s
//! frame timeout and `info` logging.
//!
//! # Example
//!
//! ```no_run
//! use betxtract::infrastructure::config::settings::Config;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load("config.toml")?;
//!     config.init_logging();
//!     let registry = config.registry();
//!     Ok(())
//! }
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;

use super::bridge::BridgeConfig;
use super::logging::LoggingConfig;
use super::sites::SiteOverride;
use crate::domain::{SiteRegistry, SourceId};
use crate::error::{ConfigError, Result};

/// Main application configuration.
///
/// Load from a TOML file using [`Config::load`] or parse directly with
/// [`Config::parse_toml`].
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Logging and tracing configuration.
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Frame bridge settings for the exchange source.
    #[serde(default)]
    pub bridge: BridgeConfig,

    /// Overrides keyed by source id (`parisSport`, `betclic`, ...).
    #[serde(default)]
    pub sites: BTreeMap<String, SiteOverride>,
}

impl Config {
    /// Parse configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is malformed or validation fails.
    #[allow(clippy::result_large_err)]
    pub fn parse_toml(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    #[allow(clippy::result_large_err)]
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        Self::parse_toml(&content)
    }

    #[allow(clippy::result_large_err)]
    fn validate(&self) -> Result<()> {
        self.logging.validate()?;
        self.bridge.validate()?;
        for (id, site) in &self.sites {
            if id.parse::<SourceId>().is_err() {
                return Err(ConfigError::InvalidValue {
                    field: "sites",
                    reason: format!("unknown source id '{id}'"),
                }
                .into());
            }
            site.validate(id)?;
        }
        Ok(())
    }

    /// Initialize logging based on configuration.
    pub fn init_logging(&self) {
        self.logging.init();
    }

    /// Built-in site table with this configuration's overrides applied.
    #[must_use]
    pub fn registry(&self) -> SiteRegistry {
        let mut registry = SiteRegistry::builtin();
        for (id, site) in &self.sites {
            let Ok(id) = id.parse::<SourceId>() else {
                continue;
            };
            if let Some(definition) = registry.get_mut(id) {
                site.apply(definition);
            }
        }
        registry
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn empty_config_uses_defaults() {
        let config = Config::parse_toml("").unwrap();
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.bridge.timeout_ms, 5_000);
        assert_eq!(config.bridge.source_tag, "betxtract");
        assert_eq!(config.registry().iter().count(), SourceId::ALL.len());
    }

    #[test]
    fn site_override_replaces_fields() {
        let toml = r#"
            [sites.betclic]
            domain = "betclic.com"

            [sites.betclic.selectors]
            odds = ".price"
        "#;
        let registry = Config::parse_toml(toml).unwrap().registry();
        let betclic = registry.get(SourceId::Betclic).unwrap();
        assert_eq!(betclic.domain, "betclic.com");
        assert_eq!(betclic.selectors.odds, ".price");
        assert_eq!(betclic.selectors.events, "sports-events-event-card");
        assert!(registry.detect("www.betclic.com").is_some());
    }

    #[test]
    fn unknown_site_is_rejected() {
        let result = Config::parse_toml("[sites.bwin]\nname = \"Bwin\"");
        assert!(matches!(
            result,
            Err(Error::Config(ConfigError::InvalidValue { field: "sites", .. }))
        ));
    }

    #[test]
    fn broken_selector_is_rejected() {
        let result = Config::parse_toml("[sites.pmu.selectors]\nodds = \"div[\"");
        assert!(matches!(
            result,
            Err(Error::Config(ConfigError::InvalidValue { field: "sites", .. }))
        ));
    }

    #[test]
    fn zero_timeout_is_rejected() {
        let result = Config::parse_toml("[bridge]\ntimeout_ms = 0");
        assert!(matches!(
            result,
            Err(Error::Config(ConfigError::InvalidValue {
                field: "bridge.timeout_ms",
                ..
            }))
        ));
    }

    #[test]
    fn unknown_log_format_is_rejected() {
        let result = Config::parse_toml("[logging]\nformat = \"xml\"");
        assert!(matches!(
            result,
            Err(Error::Config(ConfigError::InvalidValue {
                field: "logging.format",
                ..
            }))
        ));
    }
}
