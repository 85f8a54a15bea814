//! Record store error types.

use thiserror::Error;

/// Errors that can occur while loading the pull request corpus.
#[derive(Debug, Error)]
pub enum RecordError {
    /// Failed to read a corpus file.
    #[error("Failed to read corpus '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The corpus file is not a JSON array of records.
    #[error("Failed to parse corpus '{path}': {source}")]
    Json {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    /// SQLite error while reading the `prs` table.
    #[error("Failed to query database '{path}': {source}")]
    Sqlite {
        path: String,
        #[source]
        source: rusqlite::Error,
    },

    /// A database row holds data that is not JSON.
    #[error("Stored data for PR #{pr} is not valid JSON: {source}")]
    MalformedData {
        pr: i64,
        #[source]
        source: serde_json::Error,
    },

    /// A record is missing a required field or has one of the wrong type.
    #[error("PR #{pr} has invalid or missing data: {source}")]
    InvalidRecord {
        pr: u64,
        #[source]
        source: serde_json::Error,
    },

    /// A record has no usable `number` field, so it cannot be identified.
    #[error("Record at position {index} has no usable PR number: {source}")]
    MissingNumber {
        index: usize,
        #[source]
        source: serde_json::Error,
    },

    /// The same PR number was supplied twice.
    #[error("PR #{pr} appears more than once in the corpus")]
    DuplicateRecord { pr: u64 },
}
