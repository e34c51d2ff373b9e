//! Per-segment tokenization and term indexing.
//!
//! [`index_segment`] is run once per segment, each on its own worker. It
//! reads only its own byte range of the shared document and writes only to
//! the [`SegmentResult`] it returns, so no locking is involved.

use ahash::{AHashMap, AHashSet};

use crate::analysis::normalizer::normalize_token;
use crate::analysis::tokenizer::SeparatorTokenizer;
use crate::error::{Result, SpyglassError};
use crate::segment::Segment;

/// Normalized term → local positions of the tokens carrying that term.
pub type TermPositions = AHashMap<String, AHashSet<usize>>;

/// Tokens and term index of one segment.
///
/// Positions are local: they index into this segment's own token list.
#[derive(Debug, Clone)]
pub struct SegmentResult {
    segment: Segment,
    tokens: Vec<String>,
    normalized_index: TermPositions,
}

impl SegmentResult {
    /// Identifier of the segment this result belongs to.
    pub fn segment_id(&self) -> usize {
        self.segment.id
    }

    /// The segment this result was built from.
    pub fn segment(&self) -> &Segment {
        &self.segment
    }

    /// Tokens in document order, with original casing and punctuation.
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// Number of tokens in this segment.
    pub fn token_count(&self) -> usize {
        self.tokens.len()
    }

    /// Number of distinct normalized terms in this segment.
    pub fn distinct_terms(&self) -> usize {
        self.normalized_index.len()
    }

    /// Local positions of a normalized term, if it occurs in this segment.
    pub fn positions(&self, term: &str) -> Option<&AHashSet<usize>> {
        self.normalized_index.get(term)
    }

    /// Split the result into its segment, tokens and term index.
    pub fn into_parts(self) -> (Segment, Vec<String>, TermPositions) {
        (self.segment, self.tokens, self.normalized_index)
    }
}

/// Tokenize and index one segment of `document`.
///
/// Every token is kept verbatim in the token list; its local position is
/// recorded under its normalized form. Tokens that normalize to an empty
/// term (pure punctuation) are kept in the token list but not indexed.
pub fn index_segment(
    document: &str,
    segment: &Segment,
    tokenizer: &SeparatorTokenizer,
) -> Result<SegmentResult> {
    let words = tokenizer
        .tokenize_range(document, segment.start, segment.end)
        .map_err(|e| SpyglassError::indexing(format!("segment {}: {e}", segment.id)))?;

    let mut tokens = Vec::with_capacity(words.len());
    let mut normalized_index = TermPositions::new();

    for word in words {
        tokens.push(word.to_string());
        let position = tokens.len() - 1;

        let term = normalize_token(word);
        if term.is_empty() {
            continue;
        }
        normalized_index.entry(term).or_default().insert(position);
    }

    Ok(SegmentResult {
        segment: *segment,
        tokens,
        normalized_index,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted(set: &AHashSet<usize>) -> Vec<usize> {
        let mut positions: Vec<usize> = set.iter().copied().collect();
        positions.sort_unstable();
        positions
    }

    #[test]
    fn test_index_segment() {
        let doc = "The quick brown fox. The fox jumps.";
        let tokenizer = SeparatorTokenizer::default();

        let result = index_segment(doc, &Segment::new(0, 0, doc.len() - 1), &tokenizer).unwrap();

        assert_eq!(
            result.tokens(),
            &["The", "quick", "brown", "fox.", "The", "fox", "jumps."]
        );
        assert_eq!(sorted(result.positions("the").unwrap()), vec![0, 4]);
        assert_eq!(sorted(result.positions("fox").unwrap()), vec![3, 5]);
        assert_eq!(sorted(result.positions("jumps").unwrap()), vec![6]);
        assert!(result.positions("The").is_none());
        assert!(result.positions("fox.").is_none());
        assert_eq!(result.distinct_terms(), 5);
    }

    #[test]
    fn test_positions_are_local() {
        let doc = "The quick brown fox. The fox jumps.";
        let tokenizer = SeparatorTokenizer::default();

        let result = index_segment(doc, &Segment::new(1, 20, doc.len() - 1), &tokenizer).unwrap();

        assert_eq!(result.segment_id(), 1);
        assert_eq!(result.tokens(), &["The", "fox", "jumps."]);
        assert_eq!(sorted(result.positions("fox").unwrap()), vec![1]);
    }

    #[test]
    fn test_punctuation_tokens_not_indexed() {
        let doc = "wait -- what?";
        let tokenizer = SeparatorTokenizer::default();

        let result = index_segment(doc, &Segment::new(0, 0, doc.len() - 1), &tokenizer).unwrap();

        assert_eq!(result.token_count(), 3);
        assert!(result.positions("").is_none());
        assert_eq!(sorted(result.positions("what").unwrap()), vec![2]);
    }

    #[test]
    fn test_out_of_bounds_segment_fails() {
        let doc = "short";
        let tokenizer = SeparatorTokenizer::default();

        let err = index_segment(doc, &Segment::new(3, 2, 10), &tokenizer).unwrap_err();
        assert!(matches!(err, SpyglassError::Indexing(_)));
        assert!(err.to_string().contains("segment 3"));
    }

    #[test]
    fn test_into_parts() {
        let doc = "a b a";
        let tokenizer = SeparatorTokenizer::default();
        let segment = Segment::new(0, 0, doc.len() - 1);

        let (seg, tokens, index) = index_segment(doc, &segment, &tokenizer)
            .unwrap()
            .into_parts();

        assert_eq!(seg, segment);
        assert_eq!(tokens, vec!["a", "b", "a"]);
        assert_eq!(index.len(), 2);
        assert_eq!(sorted(&index["a"]), vec![0, 2]);
    }
}
