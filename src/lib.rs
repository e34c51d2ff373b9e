//! # Spyglass
//!
//! Index a text document once, in parallel, then answer any number of
//! "find word W with K words of context" queries against the index.
//!
//! ## Pipeline
//!
//! - [`segment::Segmenter`] cuts the document into a few sentence-aligned
//!   segments
//! - [`segment::index_segment`] tokenizes and indexes one segment, on its own
//!   worker thread
//! - [`global_index::GlobalIndex::merge`] joins the per-segment results in
//!   segment order and records cumulative token counts
//! - [`search::Searcher::search`] translates local hits to global positions
//!   and renders the context windows
//!
//! ```
//! use spyglass::Searcher;
//!
//! let searcher = Searcher::new("The quick brown fox. The fox jumps.")?;
//! assert_eq!(searcher.search("the", 1), vec!["The quick", "fox. The fox"]);
//! # Ok::<(), spyglass::error::SpyglassError>(())
//! ```

pub mod analysis;
pub mod cli;
pub mod config;
pub mod error;
pub mod global_index;
pub mod loader;
pub mod parallel_index;
pub mod search;
pub mod segment;

pub mod prelude {
    pub use crate::config::SearcherConfig;
    pub use crate::error::{Result, SpyglassError};
    pub use crate::search::Searcher;
}

pub use search::Searcher;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
