//! Keyword-in-context search over a built index.

pub mod context;
pub mod searcher;

pub use searcher::Searcher;
