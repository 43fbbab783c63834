//! Output formatting for CLI commands.

use serde::{Deserialize, Serialize};

use crate::cli::args::{LexicaArgs, OutputFormat};
use crate::error::Result;
use crate::fuzzy::FuzzyMatch;

/// Result structure for search operations.
#[derive(Debug, Serialize, Deserialize)]
pub struct SearchReport {
    pub query: String,
    pub max_distance: usize,
    /// Present when the prefix mode ran
    pub prefix_matches: Option<Vec<String>>,
    /// Present when the fuzzy mode ran
    pub fuzzy_matches: Option<Vec<FuzzyMatch>>,
    pub duration_ms: u64,
}

/// Result structure for the membership check.
#[derive(Debug, Serialize, Deserialize)]
pub struct CheckReport {
    pub word: String,
    pub found: bool,
}

/// Dictionary statistics.
#[derive(Debug, Serialize, Deserialize)]
pub struct DictionaryStats {
    pub path: String,
    pub word_count: usize,
    pub node_count: usize,
    pub longest_word_chars: usize,
}

/// Output a search report in the configured format.
pub fn output_search(report: &SearchReport, args: &LexicaArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => print_search_human(report, args),
        OutputFormat::Json => print_json(report, args),
    }
}

/// Output a check report in the configured format.
pub fn output_check(report: &CheckReport, args: &LexicaArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => {
            if report.found {
                println!("'{}' is in the dictionary", report.word);
            } else {
                println!("'{}' is not in the dictionary", report.word);
            }
            Ok(())
        }
        OutputFormat::Json => print_json(report, args),
    }
}

/// Output dictionary statistics in the configured format.
pub fn output_stats(stats: &DictionaryStats, args: &LexicaArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => {
            println!("Dictionary Statistics:");
            println!("═════════════════════");
            println!("Path: {}", stats.path);
            println!("Words: {}", stats.word_count);
            println!("Trie nodes: {}", stats.node_count);
            println!("Longest word: {} chars", stats.longest_word_chars);
            Ok(())
        }
        OutputFormat::Json => print_json(stats, args),
    }
}

/// Print search results the way the interactive prompt shows them.
fn print_search_human(report: &SearchReport, args: &LexicaArgs) -> Result<()> {
    if let Some(prefix_matches) = &report.prefix_matches {
        println!("Prefix Matches:");
        if prefix_matches.is_empty() {
            println!("No exact prefix matches found.");
        } else {
            for word in prefix_matches {
                println!("- {word}");
            }
        }
        println!();
    }

    if let Some(fuzzy_matches) = &report.fuzzy_matches {
        println!("Fuzzy Matches (Levenshtein <= {}):", report.max_distance);
        if fuzzy_matches.is_empty() {
            println!("No fuzzy matches found.");
        } else {
            for m in fuzzy_matches {
                println!("- {} (distance: {})", m.word, m.distance);
            }
        }
    }

    if args.verbosity() > 1 {
        println!();
        println!("Search time: {}ms", report.duration_ms);
    }

    Ok(())
}

/// Serialize any report as JSON, pretty-printed on request.
fn print_json<T: Serialize>(value: &T, args: &LexicaArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{json}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_report_json_shape() {
        let report = SearchReport {
            query: "cat".to_string(),
            max_distance: 2,
            prefix_matches: Some(vec!["cat".to_string(), "cart".to_string()]),
            fuzzy_matches: Some(vec![FuzzyMatch::new("cat".to_string(), 0)]),
            duration_ms: 1,
        };

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["query"], "cat");
        assert_eq!(json["prefix_matches"][1], "cart");
        assert_eq!(json["fuzzy_matches"][0]["distance"], 0);
    }

    #[test]
    fn test_check_report_roundtrip() {
        let report = CheckReport {
            word: "cat".to_string(),
            found: true,
        };
        let json = serde_json::to_string(&report).unwrap();
        let parsed: CheckReport = serde_json::from_str(&json).unwrap();
        assert!(parsed.found);
        assert_eq!(parsed.word, "cat");
    }
}
