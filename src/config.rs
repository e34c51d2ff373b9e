//! Configuration for building a searcher.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::analysis::tokenizer::Separator;
use crate::error::{Result, SpyglassError};

/// Default upper bound on the number of segments (and indexing workers).
pub const DEFAULT_MAX_SEGMENTS: usize = 4;

/// Largest accepted `max_segments`. Each segment gets its own OS thread.
pub const MAX_SEGMENTS_LIMIT: usize = 64;

/// Configuration for the segment → index → merge pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearcherConfig {
    /// Maximum number of segments the document is split into.
    /// One indexing worker is started per segment.
    pub max_segments: usize,

    /// Characters that end a token.
    pub separator: Separator,

    /// Prefix for the names of the indexing worker threads.
    pub thread_name_prefix: String,
}

impl Default for SearcherConfig {
    fn default() -> Self {
        Self {
            max_segments: DEFAULT_MAX_SEGMENTS,
            separator: Separator::Space,
            thread_name_prefix: "segment-indexer".to_string(),
        }
    }
}

impl SearcherConfig {
    /// Create a configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the maximum number of segments.
    pub fn with_max_segments(mut self, max_segments: usize) -> Self {
        self.max_segments = max_segments;
        self
    }

    /// Set the token separator.
    pub fn with_separator(mut self, separator: Separator) -> Self {
        self.separator = separator;
        self
    }

    /// Set the worker thread name prefix.
    pub fn with_thread_name_prefix<S: Into<String>>(mut self, prefix: S) -> Self {
        self.thread_name_prefix = prefix.into();
        self
    }

    /// Check that the configuration can drive a pipeline.
    pub fn validate(&self) -> Result<()> {
        if self.max_segments == 0 {
            return Err(SpyglassError::invalid_config(
                "max_segments must be at least 1",
            ));
        }
        if self.max_segments > MAX_SEGMENTS_LIMIT {
            return Err(SpyglassError::invalid_config(format!(
                "max_segments must be at most {MAX_SEGMENTS_LIMIT}, got {}",
                self.max_segments
            )));
        }
        Ok(())
    }

    /// Load and validate a configuration from a JSON file.
    ///
    /// Missing fields take their default values.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: SearcherConfig = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn test_default_config() {
        let config = SearcherConfig::default();
        assert_eq!(config.max_segments, 4);
        assert_eq!(config.separator, Separator::Space);
        assert_eq!(config.thread_name_prefix, "segment-indexer");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_builder() {
        let config = SearcherConfig::new()
            .with_max_segments(2)
            .with_separator(Separator::Whitespace)
            .with_thread_name_prefix("worker");

        assert_eq!(config.max_segments, 2);
        assert_eq!(config.separator, Separator::Whitespace);
        assert_eq!(config.thread_name_prefix, "worker");
    }

    #[test]
    fn test_zero_segments_rejected() {
        let config = SearcherConfig::new().with_max_segments(0);
        assert!(matches!(config.validate(), Err(SpyglassError::Config(_))));
    }

    #[test]
    fn test_segment_limit() {
        let config = SearcherConfig::new().with_max_segments(MAX_SEGMENTS_LIMIT);
        assert!(config.validate().is_ok());

        let config = SearcherConfig::new().with_max_segments(MAX_SEGMENTS_LIMIT + 1);
        let err = config.validate().unwrap_err();
        assert!(matches!(err, SpyglassError::Config(_)));
        assert!(err.to_string().contains("at most 64"));
    }

    #[test]
    fn test_from_json_file_partial() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"max_segments": 3, "separator": "whitespace"}}"#).unwrap();

        let config = SearcherConfig::from_json_file(file.path()).unwrap();
        assert_eq!(config.max_segments, 3);
        assert_eq!(config.separator, Separator::Whitespace);
        assert_eq!(config.thread_name_prefix, "segment-indexer");
    }

    #[test]
    fn test_from_json_file_invalid() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"max_segments": 0}}"#).unwrap();
        assert!(SearcherConfig::from_json_file(file.path()).is_err());

        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();
        assert!(matches!(
            SearcherConfig::from_json_file(file.path()),
            Err(SpyglassError::Json(_))
        ));
    }
}
