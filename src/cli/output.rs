//! Output formatting for CLI commands.

use serde::{Deserialize, Serialize};

use crate::cli::args::{OutputFormat, SpyglassArgs};
use crate::error::Result;
use crate::global_index::IndexStats;

/// Result of searching for one word.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WordMatches {
    pub word: String,
    pub context_words: usize,
    pub total_matches: usize,
    pub matches: Vec<String>,
}

/// Result of a search command.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResults {
    pub file: String,
    pub duration_ms: u64,
    pub results: Vec<WordMatches>,
}

/// Render search results in the selected format.
pub fn format_search_results(results: &SearchResults, args: &SpyglassArgs) -> Result<String> {
    match args.output_format {
        OutputFormat::Json => format_json(results, args.pretty),
        OutputFormat::Human => Ok(format_search_results_human(results, args.verbosity())),
    }
}

/// Render index statistics in the selected format.
pub fn format_index_stats(stats: &IndexStats, args: &SpyglassArgs) -> Result<String> {
    match args.output_format {
        OutputFormat::Json => format_json(stats, args.pretty),
        OutputFormat::Human => Ok(format_index_stats_human(stats)),
    }
}

fn format_json<T: Serialize>(value: &T, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(json)
}

/// One match per line. Headers are added when several words were searched
/// or when running verbosely.
fn format_search_results_human(results: &SearchResults, verbosity: u8) -> String {
    let with_headers = results.results.len() > 1 || verbosity > 1;
    let mut out = String::new();

    for word in &results.results {
        if with_headers {
            out.push_str(&format!(
                "{} ({} matches):\n",
                word.word, word.total_matches
            ));
        }
        for line in &word.matches {
            if with_headers {
                out.push_str("  ");
            }
            out.push_str(line);
            out.push('\n');
        }
    }

    if verbosity > 1 {
        out.push_str(&format!(
            "Searched {} in {}ms\n",
            results.file, results.duration_ms
        ));
    }

    out
}

fn format_index_stats_human(stats: &IndexStats) -> String {
    let mut out = String::new();
    out.push_str(&format!("Segments:       {}\n", stats.segment_count));
    out.push_str(&format!("Total tokens:   {}\n", stats.total_tokens));
    out.push_str(&format!("Distinct terms: {}\n", stats.distinct_terms));

    for segment in &stats.segments {
        out.push_str(&format!(
            "  segment {}: bytes {}..={}, {} tokens, {} distinct terms\n",
            segment.segment_id,
            segment.start,
            segment.end,
            segment.token_count,
            segment.distinct_terms
        ));
    }

    out
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;
    use crate::global_index::SegmentStats;

    fn results(words: Vec<(&str, Vec<&str>)>) -> SearchResults {
        SearchResults {
            file: "book.txt".to_string(),
            duration_ms: 3,
            results: words
                .into_iter()
                .map(|(word, matches)| WordMatches {
                    word: word.to_string(),
                    context_words: 1,
                    total_matches: matches.len(),
                    matches: matches.iter().map(|m| m.to_string()).collect(),
                })
                .collect(),
        }
    }

    #[test]
    fn test_single_word_human() {
        let args = SpyglassArgs::parse_from(["spyglass", "search", "book.txt", "fox"]);
        let input = results(vec![("fox", vec!["brown fox. The", "The fox jumps."])]);
        let out = format_search_results(&input, &args).unwrap();

        assert_eq!(out, "brown fox. The\nThe fox jumps.\n");
    }

    #[test]
    fn test_several_words_human() {
        let args = SpyglassArgs::parse_from(["spyglass", "search", "book.txt", "fox", "zebra"]);
        let input = results(vec![("fox", vec!["fox"]), ("zebra", vec![])]);
        let out = format_search_results(&input, &args).unwrap();

        assert_eq!(out, "fox (1 matches):\n  fox\nzebra (0 matches):\n");
    }

    #[test]
    fn test_search_json() {
        let args = SpyglassArgs::parse_from(["spyglass", "-f", "json", "search", "book.txt", "fox"]);
        let input = results(vec![("fox", vec!["fox", "fox"])]);
        let out = format_search_results(&input, &args).unwrap();

        let parsed: SearchResults = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed, input);
    }

    #[test]
    fn test_stats_human() {
        let args = SpyglassArgs::parse_from(["spyglass", "stats", "book.txt"]);
        let stats = IndexStats {
            segment_count: 1,
            total_tokens: 3,
            distinct_terms: 2,
            segments: vec![SegmentStats {
                segment_id: 0,
                start: 0,
                end: 10,
                token_count: 3,
                distinct_terms: 2,
            }],
        };

        let out = format_index_stats(&stats, &args).unwrap();
        assert!(out.contains("Total tokens:   3"));
        assert!(out.contains("segment 0: bytes 0..=10, 3 tokens, 2 distinct terms"));
    }
}
