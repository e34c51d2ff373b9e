//! Command implementations for the Spyglass CLI.

use std::time::Instant;

use anyhow::Context;
use log::info;

use crate::analysis::tokenizer::Separator;
use crate::cli::args::*;
use crate::cli::output::*;
use crate::config::SearcherConfig;
use crate::search::Searcher;

/// Execute a CLI command, returning the text to print.
pub fn execute_command(args: &SpyglassArgs) -> anyhow::Result<String> {
    match &args.command {
        Command::Search(search_args) => search_file(search_args, args),
        Command::Stats(stats_args) => show_stats(stats_args, args),
    }
}

/// Search a file for every requested word.
fn search_file(args: &SearchArgs, cli_args: &SpyglassArgs) -> anyhow::Result<String> {
    let start = Instant::now();
    let searcher = build_searcher(&args.index)?;

    let results = args
        .words
        .iter()
        .map(|word| {
            let matches = searcher.search(word, args.context_words);
            info!("'{}': {} matches", word, matches.len());
            WordMatches {
                word: word.clone(),
                context_words: args.context_words,
                total_matches: matches.len(),
                matches,
            }
        })
        .collect();

    let results = SearchResults {
        file: args.index.file.display().to_string(),
        duration_ms: start.elapsed().as_millis() as u64,
        results,
    };

    Ok(format_search_results(&results, cli_args)?)
}

/// Show how a file is segmented and indexed.
fn show_stats(args: &StatsArgs, cli_args: &SpyglassArgs) -> anyhow::Result<String> {
    let searcher = build_searcher(&args.index)?;
    Ok(format_index_stats(&searcher.stats(), cli_args)?)
}

/// Resolve the searcher configuration: config file first, then flags.
fn load_config(args: &IndexArgs) -> anyhow::Result<SearcherConfig> {
    let mut config = match &args.config {
        Some(path) => SearcherConfig::from_json_file(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => SearcherConfig::default(),
    };

    if let Some(max_segments) = args.max_segments {
        config = config.with_max_segments(max_segments);
    }
    if args.whitespace {
        config = config.with_separator(Separator::Whitespace);
    }

    config.validate()?;
    Ok(config)
}

fn build_searcher(args: &IndexArgs) -> anyhow::Result<Searcher> {
    let config = load_config(args)?;
    Searcher::from_path_with_config(&args.file, config)
        .with_context(|| format!("failed to index {}", args.file.display()))
}
