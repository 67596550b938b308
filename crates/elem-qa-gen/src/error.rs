//! Error types for elem-qa-gen

use thiserror::Error;

/// Result type alias for suite-generation operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while producing a test suite
#[derive(Debug, Error)]
pub enum Error {
    /// Listing or instantiating an element inside the registry failed.
    /// Aborts the whole setup phase; never caught locally.
    #[error("Registry introspection failed: {0}")]
    Registry(String),

    /// A snapshot file did not describe a usable registry
    #[error("Invalid registry snapshot: {0}")]
    InvalidSnapshot(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// YAML serialization error
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
