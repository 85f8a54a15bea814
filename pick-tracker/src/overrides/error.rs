//! Override table error types.

use thiserror::Error;

/// Errors that can occur while loading an override table.
#[derive(Debug, Error)]
pub enum OverrideError {
    /// Failed to read the override file.
    #[error("Failed to read file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse TOML content.
    #[error("Failed to parse overrides in '{path}': {source}")]
    Toml {
        path: String,
        #[source]
        source: toml::de::Error,
    },

    /// An entry is not a valid override.
    #[error("Validation error in '{path}': {message}")]
    Validation { path: String, message: String },
}
