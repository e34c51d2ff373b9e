//! Index key normalization.
//!
//! Tokens keep their original casing and punctuation in the token sequence.
//! Only the index keys are normalized: punctuation on either end (ASCII or
//! Unicode, such as `…` or `”`) is removed and the rest is lower-cased.
//! Query words are lower-cased but not stripped.

/// Normalize a token into an index key.
///
/// Everything that is not alphanumeric is trimmed from both ends; inner
/// punctuation is kept.
///
/// # Examples
///
/// ```
/// use spyglass::analysis::normalizer::normalize_token;
///
/// assert_eq!(normalize_token("Fox."), "fox");
/// assert_eq!(normalize_token("end?!\""), "end");
/// assert_eq!(normalize_token("“Fox…”"), "fox");
/// assert_eq!(normalize_token("don’t"), "don’t");
/// ```
pub fn normalize_token(token: &str) -> String {
    token
        .trim_matches(|c: char| !c.is_alphanumeric())
        .to_lowercase()
}

/// Normalize a query word for lookup.
pub fn normalize_query(query: &str) -> String {
    query.to_lowercase()
}
