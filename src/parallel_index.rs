//! Parallel construction of the document index.
//!
//! The engine segments the document, indexes every segment on its own worker
//! thread, waits for all of them, and merges the results by segment id.

pub mod engine;

pub use engine::ParallelIndexEngine;
