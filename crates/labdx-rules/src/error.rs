use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RulesError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {name}: {source}")]
    Parse {
        name: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("{field} must not be empty")]
    EmptyField { field: &'static str },

    #[error("duplicate reference range for '{0}'")]
    DuplicateParameter(String),

    #[error("invalid bounds for '{key}': min {min} must be finite and not above max {max}")]
    InvalidBounds { key: String, min: f64, max: f64 },

    #[error("reference range for '{key}' needs min >= 0 and max > 0, got {min} - {max}")]
    InvalidThreshold { key: String, min: f64, max: f64 },

    #[error("pattern '{0}' has no conditions")]
    EmptyPattern(String),

    #[error("pattern '{diagnosis}' lists '{key}' more than once")]
    DuplicateCondition { diagnosis: String, key: String },

    #[error("pattern '{diagnosis}' refers to unknown parameter '{key}'")]
    UnknownParameter { diagnosis: String, key: String },
}
