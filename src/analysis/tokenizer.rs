//! Separator-based tokenizer.
//!
//! The tokenizer works on byte ranges of a borrowed document so that the
//! segment indexers can tokenize their own slice of the text without copying
//! it. Separators are ASCII, so every token boundary is also a UTF-8
//! character boundary.
//!
//! # Examples
//!
//! ```
//! use spyglass::analysis::tokenizer::{SeparatorTokenizer, Separator};
//!
//! let tokenizer = SeparatorTokenizer::new(Separator::Space);
//! let tokens = tokenizer.tokenize("The  quick fox.");
//! assert_eq!(tokens, vec!["The", "quick", "fox."]);
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{Result, SpyglassError};

/// Which bytes end a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Separator {
    /// Only the space character. Line breaks and tabs stay inside tokens.
    Space,

    /// Any ASCII whitespace (space, tab, line feed, form feed, carriage return).
    Whitespace,
}

impl Separator {
    /// Whether `byte` ends a token.
    #[inline]
    pub fn matches(self, byte: u8) -> bool {
        match self {
            Separator::Space => byte == b' ',
            Separator::Whitespace => byte.is_ascii_whitespace(),
        }
    }
}

/// A tokenizer that splits text on a [`Separator`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SeparatorTokenizer {
    separator: Separator,
}

impl Default for SeparatorTokenizer {
    fn default() -> Self {
        Self::new(Separator::Space)
    }
}

impl SeparatorTokenizer {
    /// Create a new tokenizer.
    pub fn new(separator: Separator) -> Self {
        SeparatorTokenizer { separator }
    }

    /// Get the name of this tokenizer.
    pub fn name(&self) -> &'static str {
        match self.separator {
            Separator::Space => "space",
            Separator::Whitespace => "whitespace",
        }
    }

    /// Tokenize a whole document.
    pub fn tokenize<'a>(&self, text: &'a str) -> Vec<&'a str> {
        if text.is_empty() {
            return Vec::new();
        }
        // The full range always passes validation.
        self.tokenize_range(text, 0, text.len() - 1)
            .unwrap_or_default()
    }

    /// Tokenize the inclusive byte range `start..=end` of `document`.
    ///
    /// A separator flushes the pending token unless it is empty, so runs of
    /// separators never produce empty tokens. Reaching `end` flushes whatever
    /// is pending even when it is not followed by a separator.
    pub fn tokenize_range<'a>(
        &self,
        document: &'a str,
        start: usize,
        end: usize,
    ) -> Result<Vec<&'a str>> {
        check_range(document, start, end)?;

        let bytes = document.as_bytes();
        let mut tokens = Vec::new();
        let mut token_start: Option<usize> = None;

        for (i, &byte) in bytes.iter().enumerate().take(end + 1).skip(start) {
            if self.separator.matches(byte) {
                if let Some(s) = token_start.take() {
                    tokens.push(&document[s..i]);
                }
            } else if token_start.is_none() {
                token_start = Some(i);
            }
        }

        if let Some(s) = token_start {
            tokens.push(&document[s..=end]);
        }

        Ok(tokens)
    }

    /// Count the tokens of a whole document without collecting them.
    pub fn count_tokens(&self, text: &str) -> usize {
        let mut count = 0;
        let mut in_token = false;
        for &byte in text.as_bytes() {
            if self.separator.matches(byte) {
                in_token = false;
            } else if !in_token {
                in_token = true;
                count += 1;
            }
        }
        count
    }
}

/// Validate an inclusive byte range against `document`.
fn check_range(document: &str, start: usize, end: usize) -> Result<()> {
    if start > end {
        return Err(SpyglassError::indexing(format!(
            "range start {start} is after range end {end}"
        )));
    }
    if end >= document.len() {
        return Err(SpyglassError::indexing(format!(
            "range end {end} is outside a document of {} bytes",
            document.len()
        )));
    }
    if !document.is_char_boundary(start) || !document.is_char_boundary(end + 1) {
        return Err(SpyglassError::indexing(format!(
            "range {start}..={end} does not fall on character boundaries"
        )));
    }
    Ok(())
}
