//! Context window rendering.

/// Render the window of `context_words` tokens on each side of `position`.
///
/// Positions outside the document contribute empty placeholders, which the
/// final trim removes, so a window at the start or end of the document is
/// simply shorter. The joined window is trimmed and a single trailing comma
/// is dropped; any other punctuation is kept.
///
/// # Examples
///
/// ```
/// use spyglass::search::context::render_context;
///
/// let tokens: Vec<String> = ["Well,", "hello", "there,", "friend"]
///     .iter()
///     .map(|t| t.to_string())
///     .collect();
///
/// assert_eq!(render_context(&tokens, 1, 1), "Well, hello there");
/// assert_eq!(render_context(&tokens, 0, 2), "Well, hello there");
/// ```
pub fn render_context(tokens: &[String], position: usize, context_words: usize) -> String {
    if tokens.is_empty() {
        return String::new();
    }

    let first = position.saturating_sub(context_words);
    let last = position
        .saturating_add(context_words)
        .min(tokens.len() - 1);

    let window = if first <= last {
        tokens[first..=last].join(" ")
    } else {
        String::new()
    };

    let trimmed = window.trim();
    trimmed.strip_suffix(',').unwrap_or(trimmed).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(text: &str) -> Vec<String> {
        text.split(' ').map(str::to_string).collect()
    }

    #[test]
    fn test_window_inside_document() {
        let tokens = tokens("The quick brown fox. The fox jumps.");
        assert_eq!(render_context(&tokens, 3, 1), "brown fox. The");
        assert_eq!(render_context(&tokens, 5, 1), "The fox jumps.");
        assert_eq!(render_context(&tokens, 3, 2), "quick brown fox. The fox");
    }

    #[test]
    fn test_window_overruns_document() {
        let tokens = tokens("The quick brown fox. The fox jumps.");
        assert_eq!(render_context(&tokens, 0, 2), "The quick brown");
        assert_eq!(render_context(&tokens, 6, 3), "fox. The fox jumps.");
        assert_eq!(
            render_context(&tokens, 3, 100),
            "The quick brown fox. The fox jumps."
        );
        assert_eq!(
            render_context(&tokens, 3, usize::MAX),
            "The quick brown fox. The fox jumps."
        );
    }

    #[test]
    fn test_only_one_trailing_comma_stripped() {
        let doubled = tokens("a b,,");
        assert_eq!(render_context(&doubled, 0, 1), "a b,");
    }

    #[test]
    fn test_other_trailing_punctuation_kept() {
        let listed = tokens("one, two, three;");
        assert_eq!(render_context(&listed, 0, 1), "one, two");
        assert_eq!(render_context(&listed, 2, 1), "two, three;");
    }

    #[test]
    fn test_surrounding_whitespace_trimmed() {
        let tokens = vec!["line.\n".to_string(), "next".to_string()];
        assert_eq!(render_context(&tokens, 1, 1), "line.\n next");
        assert_eq!(render_context(&tokens, 0, 0), "line.");
    }

    #[test]
    fn test_empty_tokens() {
        assert_eq!(render_context(&[], 0, 3), "");
    }
}
