//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.

use thiserror::Error;

/// Errors raised by the aggregation core
///
/// Every variant is fatal: `analyze` either returns a full result or one of these.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AnalysisError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Unresolved {kind} reference '{key}' in purchase record #{record}")]
    UnresolvedReference {
        kind: ReferenceKind,
        key: String,
        record: usize,
    },
}

/// Which index a failed lookup went through
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReferenceKind {
    Seller,
    Product,
}

impl std::fmt::Display for ReferenceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReferenceKind::Seller => write!(f, "seller"),
            ReferenceKind::Product => write!(f, "product"),
        }
    }
}

/// Errors that can occur while loading a dataset
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("Failed to read dataset: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON deserialization failed: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// Errors that can occur during file output
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to write file: {0}")]
    WriteFailed(#[from] std::io::Error),

    #[error("Failed to serialize JSON: {0}")]
    SerializationFailed(#[from] serde_json::Error),

    #[error("Invalid output path: {0}")]
    InvalidPath(String),
}

/// Errors that can occur while loading formula configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config TOML: {0}")]
    ParseFailed(#[from] toml::de::Error),

    #[error("Unknown {kind} formula: {name}")]
    UnknownFormula { kind: &'static str, name: String },

    #[error("Invalid bonus policy: {0}")]
    InvalidPolicy(String),
}
