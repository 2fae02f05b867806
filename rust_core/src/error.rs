//! Error types for the fallible edges of the crate.
//!
//! The business-hours evaluator and the proximity filter never fail. Errors
//! only arise when building a query, loading configuration or parsing a
//! wall-clock string through the strict entry point.

/// Error building a [`crate::core::domain::ProximityQuery`].
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum QueryError {
    #[error("Invalid query center: ({latitude}, {longitude})")]
    InvalidCenter { latitude: f64, longitude: f64 },

    #[error("Radius must be a positive finite number of kilometers, got {0}")]
    InvalidRadius(f64),

    #[error("max_results must be greater than zero")]
    ZeroMaxResults,
}

/// Error parsing a wall-clock time such as `"9:00 AM"` or `"17:30"`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TimeParseError {
    #[error("Empty time string")]
    Empty,

    #[error("Malformed time: {0:?}")]
    Malformed(String),

    #[error("Time out of range: {0:?}")]
    OutOfRange(String),
}

/// Error loading [`crate::config::CoreConfig`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("No truckmap.toml found in standard locations")]
    NotFound,
}

impl From<QueryError> for ConfigError {
    fn from(e: QueryError) -> Self {
        ConfigError::Invalid(e.to_string())
    }
}
