//! Merging per-segment results into one document-wide index.
//!
//! The merge only runs once every segment has been indexed: translating a
//! local position of segment `i` needs the final token counts of segments
//! `0..i`. Results are slotted by segment id and folded in ascending id
//! order, whatever order the workers finished in.

use std::collections::BTreeSet;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::{Result, SpyglassError};
use crate::segment::Segment;
use crate::segment::indexer::{SegmentResult, TermPositions};

/// Statistics for one indexed segment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SegmentStats {
    /// Segment identifier.
    pub segment_id: usize,

    /// First byte of the segment.
    pub start: usize,

    /// Last byte of the segment (inclusive).
    pub end: usize,

    /// Number of tokens in the segment.
    pub token_count: usize,

    /// Number of distinct normalized terms in the segment.
    pub distinct_terms: usize,
}

/// Statistics for a whole index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexStats {
    /// Number of segments the document was split into.
    pub segment_count: usize,

    /// Number of tokens in the document.
    pub total_tokens: usize,

    /// Number of distinct normalized terms across all segments.
    pub distinct_terms: usize,

    /// Per-segment statistics, in segment order.
    pub segments: Vec<SegmentStats>,
}

/// Immutable document-wide index.
///
/// Holds the global token sequence, the cumulative token count of every
/// segment, and the per-segment term indices with their local positions.
#[derive(Debug, Clone, Default)]
pub struct GlobalIndex {
    tokens: Vec<String>,
    cumulative_counts: Vec<usize>,
    segments: Vec<Segment>,
    term_indices: Vec<TermPositions>,
}

impl GlobalIndex {
    /// Merge the results of segments `0..segment_count`.
    ///
    /// `results` may arrive in any order. A missing, duplicated or
    /// out-of-range segment id fails the merge.
    pub fn merge(results: Vec<SegmentResult>, segment_count: usize) -> Result<Self> {
        let mut slots: Vec<Option<SegmentResult>> = vec![None; segment_count];

        for result in results {
            let id = result.segment_id();
            let slot = slots.get_mut(id).ok_or_else(|| {
                SpyglassError::indexing(format!(
                    "segment {id} is out of range for {segment_count} segments"
                ))
            })?;
            if slot.is_some() {
                return Err(SpyglassError::indexing(format!(
                    "segment {id} was indexed more than once"
                )));
            }
            *slot = Some(result);
        }

        let mut index = GlobalIndex {
            tokens: Vec::new(),
            cumulative_counts: Vec::with_capacity(segment_count),
            segments: Vec::with_capacity(segment_count),
            term_indices: Vec::with_capacity(segment_count),
        };

        let mut running_total = 0;
        for (id, slot) in slots.into_iter().enumerate() {
            let result = slot.ok_or_else(|| {
                SpyglassError::indexing(format!("segment {id} has no indexing result"))
            })?;
            let (segment, tokens, term_index) = result.into_parts();

            running_total += tokens.len();
            index.tokens.extend(tokens);
            index.cumulative_counts.push(running_total);
            index.segments.push(segment);
            index.term_indices.push(term_index);
        }

        debug!(
            "Merged {} segments into {} tokens (cumulative counts {:?})",
            index.segments.len(),
            index.tokens.len(),
            index.cumulative_counts
        );

        Ok(index)
    }

    /// The whole-document token sequence.
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// Number of tokens in the document.
    pub fn token_count(&self) -> usize {
        self.tokens.len()
    }

    /// Token at a global position.
    pub fn token(&self, position: usize) -> Option<&str> {
        self.tokens.get(position).map(String::as_str)
    }

    /// Total token count of segments `0..=i`, for every segment `i`.
    pub fn cumulative_counts(&self) -> &[usize] {
        &self.cumulative_counts
    }

    /// Segments in document order.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Number of segments.
    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }

    /// Translate a local position of `segment_id` into a global position.
    ///
    /// Returns `None` if the index has no segment `segment_id`.
    pub fn global_position(&self, segment_id: usize, local: usize) -> Option<usize> {
        if segment_id >= self.segments.len() {
            return None;
        }
        let offset = match segment_id.checked_sub(1) {
            Some(previous) => self.cumulative_counts[previous],
            None => 0,
        };
        Some(offset + local)
    }

    /// Ascending, deduplicated global positions of a normalized term.
    pub fn positions(&self, term: &str) -> Vec<usize> {
        let mut positions = BTreeSet::new();
        for (segment_id, term_index) in self.term_indices.iter().enumerate() {
            if let Some(locals) = term_index.get(term) {
                positions.extend(
                    locals
                        .iter()
                        .filter_map(|&local| self.global_position(segment_id, local)),
                );
            }
        }
        positions.into_iter().collect()
    }

    /// Collect statistics about the index.
    pub fn stats(&self) -> IndexStats {
        let mut previous = 0;
        let segments: Vec<SegmentStats> = self
            .segments
            .iter()
            .zip(&self.cumulative_counts)
            .zip(&self.term_indices)
            .map(|((segment, &cumulative), term_index)| {
                let token_count = cumulative - previous;
                previous = cumulative;
                SegmentStats {
                    segment_id: segment.id,
                    start: segment.start,
                    end: segment.end,
                    token_count,
                    distinct_terms: term_index.len(),
                }
            })
            .collect();

        let distinct_terms = self
            .term_indices
            .iter()
            .flat_map(|term_index| term_index.keys())
            .collect::<BTreeSet<_>>()
            .len();

        IndexStats {
            segment_count: self.segments.len(),
            total_tokens: self.tokens.len(),
            distinct_terms,
            segments,
        }
    }
}
