//! Command implementations for the Lexica CLI.

use std::time::Instant;

use crate::cli::args::*;
use crate::cli::output::*;
use crate::engine::LookupEngine;
use crate::error::Result;

/// Execute a CLI command.
pub fn execute_command(args: LexicaArgs) -> Result<()> {
    match &args.command {
        Command::Search(search_args) => search_dictionary(search_args.clone(), &args),
        Command::Check(check_args) => check_word(check_args.clone(), &args),
        Command::Stats(stats_args) => show_stats(stats_args.clone(), &args),
    }
}

/// Run prefix and/or fuzzy matching over a dictionary file.
fn search_dictionary(args: SearchArgs, cli_args: &LexicaArgs) -> Result<()> {
    if cli_args.verbosity() > 1 {
        println!("Loading dictionary from: {}", args.dictionary.display());
    }

    let engine = LookupEngine::from_file(&args.dictionary)?;

    if cli_args.verbosity() > 1 {
        println!("Loaded {} words", engine.word_count());
        println!();
    }

    let start = Instant::now();

    let prefix_matches = args
        .mode
        .includes_prefix()
        .then(|| engine.prefix_search(&args.query));
    let fuzzy_matches = args
        .mode
        .includes_fuzzy()
        .then(|| engine.fuzzy_search(&args.query, args.max_distance));

    let duration = start.elapsed();

    let report = SearchReport {
        query: args.query,
        max_distance: args.max_distance,
        prefix_matches,
        fuzzy_matches,
        duration_ms: duration.as_millis() as u64,
    };

    output_search(&report, cli_args)
}

/// Check exact membership of a single word.
fn check_word(args: CheckArgs, cli_args: &LexicaArgs) -> Result<()> {
    let engine = LookupEngine::from_file(&args.dictionary)?;

    let report = CheckReport {
        found: engine.trie().contains(&args.word),
        word: args.word,
    };

    output_check(&report, cli_args)
}

/// Print statistics about a dictionary file.
fn show_stats(args: StatsArgs, cli_args: &LexicaArgs) -> Result<()> {
    let engine = LookupEngine::from_file(&args.dictionary)?;
    let trie = engine.trie();

    let longest_word_chars = trie
        .words()
        .iter()
        .map(|word| word.chars().count())
        .max()
        .unwrap_or(0);

    let stats = DictionaryStats {
        path: args.dictionary.to_string_lossy().to_string(),
        word_count: trie.len(),
        node_count: trie.node_count(),
        longest_word_chars,
    };

    output_stats(&stats, cli_args)
}
