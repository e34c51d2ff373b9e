//! Document segmentation and per-segment indexing.
//!
//! A document is cut into a few contiguous [`Segment`]s by the
//! [`segmenter`], and each segment is tokenized and indexed on its own by
//! the [`indexer`]. Segments never share state, so they can be indexed on
//! separate threads.

pub mod indexer;
pub mod segmenter;

use serde::{Deserialize, Serialize};

pub use indexer::{SegmentResult, index_segment};
pub use segmenter::Segmenter;

/// A contiguous, inclusive byte range of the document assigned to one worker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Segment {
    /// Segment identifier, equal to its position in document order.
    pub id: usize,

    /// First byte of the segment.
    pub start: usize,

    /// Last byte of the segment (inclusive).
    pub end: usize,
}

impl Segment {
    /// Create a new segment.
    pub fn new(id: usize, start: usize, end: usize) -> Self {
        Segment { id, start, end }
    }
}
