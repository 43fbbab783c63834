//! Fuzzy matching over a prefix trie.

use serde::{Deserialize, Serialize};

use crate::fuzzy::levenshtein::levenshtein_distance_within;
use crate::trie::PrefixTrie;

/// Default edit-distance bound for fuzzy queries.
pub const DEFAULT_MAX_DISTANCE: usize = 2;

/// A dictionary word within the distance bound of a query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FuzzyMatch {
    /// The matched dictionary word.
    pub word: String,
    /// Edit distance from the query.
    pub distance: usize,
}

impl FuzzyMatch {
    /// Create a new fuzzy match.
    pub fn new(word: String, distance: usize) -> Self {
        FuzzyMatch { word, distance }
    }
}

/// Rank every word stored in `trie` by edit distance to `query`.
///
/// Enumerates the full vocabulary, keeps the words with distance at most
/// `max_distance`, and sorts them ascending by distance. The sort is stable,
/// so equal-distance matches keep their enumeration order (which is itself
/// unspecified across sibling subtrees). Each qualifying word appears
/// exactly once.
pub fn fuzzy_matches(trie: &PrefixTrie, query: &str, max_distance: usize) -> Vec<FuzzyMatch> {
    let mut matches: Vec<FuzzyMatch> = trie
        .words()
        .into_iter()
        .filter_map(|word| {
            levenshtein_distance_within(query, &word, max_distance)
                .map(|distance| FuzzyMatch::new(word, distance))
        })
        .collect();

    matches.sort_by_key(|m| m.distance);
    matches
}
