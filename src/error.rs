//! Error types for the resume page pipeline

use thiserror::Error;

/// Result type alias for page operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while loading and rendering the page
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    ConfigError(String),

    /// A data source could not be reached or returned a non-success status
    #[error("Failed to fetch resume data: {0}")]
    FetchError(String),

    /// A data source responded, but the body was not a valid Resume Document
    #[error("Failed to parse resume data: {0}")]
    ParseError(String),

    /// Both the primary and the fallback source failed
    #[error("All resume sources failed: {0}")]
    LoadError(String),

    /// The HTML shell is missing a required container or cannot be updated
    #[error("Invalid page shell: {0}")]
    ShellError(String),

    /// Reading or writing the persisted theme preference failed
    #[error("Theme storage failed: {0}")]
    StorageError(String),

    /// Generic error
    #[error("{0}")]
    Other(String),
}
