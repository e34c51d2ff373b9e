//! Text analysis for Spyglass.
//!
//! Tokens are maximal runs of non-separator bytes taken verbatim from the
//! document. Index keys are derived from tokens by [`normalizer`].

pub mod normalizer;
pub mod tokenizer;
