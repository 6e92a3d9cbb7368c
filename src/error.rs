use thiserror::Error;

/// Configuration-related errors with structured variants.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing required field: {field}")]
    MissingField { field: &'static str },

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[source] toml::de::Error),
}

/// Pipeline-level negative results.
///
/// None of these are raised for a single malformed event; those are logged
/// and skipped inside the adapters.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExtractError {
    #[error("unknown source: {source_id}")]
    UnknownSource { source_id: String },

    #[error("unsupported site: {host}")]
    UnsupportedSite { host: String },

    #[error("unknown action: {action}")]
    UnknownAction { action: String },

    #[error("invalid selector '{selector}': {reason}")]
    InvalidSelector { selector: String, reason: String },

    #[error("source {source_id} needs a frame channel but none was provided")]
    MissingFrameChannel { source_id: String },

    #[error("a frame request is already in flight on this bridge")]
    BridgeBusy,

    #[error("frame channel error: {0}")]
    Channel(String),
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Extract(#[from] ExtractError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
