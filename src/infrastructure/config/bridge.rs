//! Frame bridge configuration.

use std::time::Duration;

use serde::Deserialize;

use crate::error::ConfigError;

/// Settings for cross-context frame requests.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct BridgeConfig {
    /// Time to wait for a frame reply before giving up.
    pub timeout_ms: u64,
    /// Value of the `source` tag on outgoing requests.
    pub source_tag: String,
}

impl BridgeConfig {
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if self.timeout_ms == 0 {
            return Err(ConfigError::InvalidValue {
                field: "bridge.timeout_ms",
                reason: "must be greater than 0".to_string(),
            });
        }
        if self.source_tag.trim().is_empty() {
            return Err(ConfigError::MissingField {
                field: "bridge.source_tag",
            });
        }
        Ok(())
    }
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            timeout_ms: 5_000,
            source_tag: "betxtract".into(),
        }
    }
}
