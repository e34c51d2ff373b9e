//! The searcher: index once, query many times.
//!
//! A [`Searcher`] runs the whole segment → index → merge pipeline at
//! construction time and is immutable afterwards, so it can be shared
//! between threads and queried concurrently without locking.
//!
//! # Examples
//!
//! ```
//! use spyglass::search::Searcher;
//!
//! let searcher = Searcher::new("The quick brown fox. The fox jumps.").unwrap();
//!
//! assert_eq!(searcher.search("fox", 1), vec!["brown fox. The", "The fox jumps."]);
//! assert_eq!(searcher.search("fox", 0), vec!["fox", "fox"]);
//! assert!(searcher.search("zebra", 2).is_empty());
//! ```

use std::path::Path;

use crate::analysis::normalizer::normalize_query;
use crate::config::SearcherConfig;
use crate::error::Result;
use crate::global_index::{GlobalIndex, IndexStats};
use crate::loader::load_document;
use crate::parallel_index::ParallelIndexEngine;
use crate::search::context::render_context;

/// Keyword-in-context searcher over a single in-memory document.
#[derive(Debug, Clone)]
pub struct Searcher {
    index: GlobalIndex,
    config: SearcherConfig,
}

impl Searcher {
    /// Index `text` with the default configuration.
    pub fn new(text: &str) -> Result<Self> {
        Self::with_config(text, SearcherConfig::default())
    }

    /// Index `text` with the given configuration.
    ///
    /// Fails if the configuration is invalid or any segment fails to index.
    pub fn with_config(text: &str, config: SearcherConfig) -> Result<Self> {
        let engine = ParallelIndexEngine::new(config)?;
        let index = engine.build(text)?;

        Ok(Searcher {
            index,
            config: engine.config().clone(),
        })
    }

    /// Load a document from disk and index it with the default configuration.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::from_path_with_config(path, SearcherConfig::default())
    }

    /// Load a document from disk and index it with the given configuration.
    pub fn from_path_with_config<P: AsRef<Path>>(path: P, config: SearcherConfig) -> Result<Self> {
        let text = load_document(path)?;
        Self::with_config(&text, config)
    }

    /// Find every occurrence of `query_word`, with `context_words` tokens of
    /// context on each side.
    ///
    /// Matching is case-insensitive and ignores punctuation around the
    /// document's tokens. With `context_words == 0` the query word itself is
    /// returned once per occurrence. Results are in document order; a word
    /// that does not occur yields an empty vector.
    pub fn search(&self, query_word: &str, context_words: usize) -> Vec<String> {
        let positions = self.positions(query_word);

        if context_words == 0 {
            return vec![query_word.to_string(); positions.len()];
        }

        positions
            .into_iter()
            .map(|position| render_context(self.index.tokens(), position, context_words))
            .collect()
    }

    /// Ascending global token positions at which `query_word` occurs.
    pub fn positions(&self, query_word: &str) -> Vec<usize> {
        self.index.positions(&normalize_query(query_word))
    }

    /// The document's tokens in order.
    pub fn tokens(&self) -> &[String] {
        self.index.tokens()
    }

    /// Number of tokens in the document.
    pub fn token_count(&self) -> usize {
        self.index.token_count()
    }

    /// Statistics about the built index.
    pub fn stats(&self) -> IndexStats {
        self.index.stats()
    }

    /// The underlying index.
    pub fn index(&self) -> &GlobalIndex {
        &self.index
    }

    /// The configuration this searcher was built with.
    pub fn config(&self) -> &SearcherConfig {
        &self.config
    }
}
