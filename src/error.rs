//! Error types for the Spyglass library.
//!
//! All fallible operations return [`Result`], whose error side is the
//! [`SpyglassError`] enum.
//!
//! # Examples
//!
//! ```
//! use spyglass::error::{Result, SpyglassError};
//!
//! fn example_operation() -> Result<()> {
//!     Err(SpyglassError::invalid_config("max_segments must be at least 1"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for Spyglass operations.
#[derive(Error, Debug)]
pub enum SpyglassError {
    /// I/O errors (loading the document, reading a config file)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A segment could not be indexed, or the per-segment results could not
    /// be merged into a global index.
    #[error("Indexing error: {0}")]
    Indexing(String),

    /// Breakpoints could not be turned into segments.
    #[error("Segmentation error: {0}")]
    Segmentation(String),

    /// Invalid configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// Thread pool construction errors
    #[error("Thread pool error: {0}")]
    ThreadPool(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for operations that may fail with SpyglassError.
pub type Result<T> = std::result::Result<T, SpyglassError>;

impl SpyglassError {
    /// Create a new indexing error.
    pub fn indexing<S: Into<String>>(msg: S) -> Self {
        SpyglassError::Indexing(msg.into())
    }

    /// Create a new segmentation error.
    pub fn segmentation<S: Into<String>>(msg: S) -> Self {
        SpyglassError::Segmentation(msg.into())
    }

    /// Create a new invalid config error.
    pub fn invalid_config<S: Into<String>>(msg: S) -> Self {
        SpyglassError::Config(msg.into())
    }

    /// Create a new thread pool error.
    pub fn thread_pool<S: Into<String>>(msg: S) -> Self {
        SpyglassError::ThreadPool(msg.into())
    }
}
