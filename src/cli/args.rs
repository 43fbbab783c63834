//! Command line argument parsing for the Lexica CLI using clap.

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Lexica - a word-dictionary lookup engine
#[derive(Parser, Debug, Clone)]
#[command(name = "lexica")]
#[command(about = "Prefix and fuzzy word lookups over a plain-text dictionary")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct LexicaArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl LexicaArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Query a dictionary with prefix and fuzzy matching
    Search(SearchArgs),

    /// Check whether a word is stored in a dictionary
    Check(CheckArgs),

    /// Show dictionary statistics
    Stats(StatsArgs),
}

/// Arguments for searching a dictionary
#[derive(Parser, Debug, Clone)]
pub struct SearchArgs {
    /// Path to the dictionary file (one word per line)
    #[arg(value_name = "DICTIONARY")]
    pub dictionary: PathBuf,

    /// Query string
    #[arg(value_name = "QUERY")]
    pub query: String,

    /// Maximum edit distance for fuzzy matches
    #[arg(short = 'd', long, default_value = "2")]
    pub max_distance: usize,

    /// Query modes to run
    #[arg(short = 'm', long, default_value = "both")]
    pub mode: SearchMode,
}

/// Query modes available in the CLI
#[derive(ValueEnum, Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchMode {
    /// Prefix and fuzzy matching
    Both,
    /// Exact-prefix enumeration only
    Prefix,
    /// Fuzzy matching only
    Fuzzy,
}

impl SearchMode {
    /// Whether prefix enumeration runs in this mode
    pub fn includes_prefix(&self) -> bool {
        matches!(self, SearchMode::Both | SearchMode::Prefix)
    }

    /// Whether fuzzy matching runs in this mode
    pub fn includes_fuzzy(&self) -> bool {
        matches!(self, SearchMode::Both | SearchMode::Fuzzy)
    }
}

/// Arguments for the exact membership check
#[derive(Parser, Debug, Clone)]
pub struct CheckArgs {
    /// Path to the dictionary file (one word per line)
    #[arg(value_name = "DICTIONARY")]
    pub dictionary: PathBuf,

    /// Word to look up
    #[arg(value_name = "WORD")]
    pub word: String,
}

/// Arguments for dictionary statistics
#[derive(Parser, Debug, Clone)]
pub struct StatsArgs {
    /// Path to the dictionary file (one word per line)
    #[arg(value_name = "DICTIONARY")]
    pub dictionary: PathBuf,
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_basic_search_command() {
        let args = LexicaArgs::try_parse_from([
            "lexica",
            "search",
            "/path/to/words.txt",
            "cat",
            "--max-distance",
            "3",
        ])
        .unwrap();

        if let Command::Search(search_args) = args.command {
            assert_eq!(search_args.dictionary, PathBuf::from("/path/to/words.txt"));
            assert_eq!(search_args.query, "cat");
            assert_eq!(search_args.max_distance, 3);
            assert!(matches!(search_args.mode, SearchMode::Both));
        } else {
            panic!("Expected Search command");
        }
    }

    #[test]
    fn test_search_modes() {
        let args = LexicaArgs::try_parse_from([
            "lexica",
            "search",
            "/path/to/words.txt",
            "cat",
            "--mode",
            "fuzzy",
        ])
        .unwrap();

        if let Command::Search(search_args) = args.command {
            assert!(matches!(search_args.mode, SearchMode::Fuzzy));
            assert!(search_args.mode.includes_fuzzy());
            assert!(!search_args.mode.includes_prefix());
        } else {
            panic!("Expected Search command");
        }
    }

    #[test]
    fn test_default_max_distance() {
        let args =
            LexicaArgs::try_parse_from(["lexica", "search", "/path/to/words.txt", "cat"]).unwrap();

        if let Command::Search(search_args) = args.command {
            assert_eq!(search_args.max_distance, 2);
        } else {
            panic!("Expected Search command");
        }
    }

    #[test]
    fn test_check_command() {
        let args =
            LexicaArgs::try_parse_from(["lexica", "check", "/path/to/words.txt", "cat"]).unwrap();

        if let Command::Check(check_args) = args.command {
            assert_eq!(check_args.dictionary, PathBuf::from("/path/to/words.txt"));
            assert_eq!(check_args.word, "cat");
        } else {
            panic!("Expected Check command");
        }
    }

    #[test]
    fn test_verbosity_levels() {
        // Default verbosity
        let args = LexicaArgs::try_parse_from(["lexica", "stats", "words.txt"]).unwrap();
        assert_eq!(args.verbosity(), 1);

        // Multiple verbose flags
        let args = LexicaArgs::try_parse_from(["lexica", "-vv", "stats", "words.txt"]).unwrap();
        assert_eq!(args.verbosity(), 2);

        // Quiet flag
        let args = LexicaArgs::try_parse_from(["lexica", "--quiet", "stats", "words.txt"]).unwrap();
        assert_eq!(args.verbosity(), 0);
    }

    #[test]
    fn test_output_format() {
        let args =
            LexicaArgs::try_parse_from(["lexica", "--format", "json", "stats", "words.txt"])
                .unwrap();
        assert!(matches!(args.output_format, OutputFormat::Json));
    }
}
