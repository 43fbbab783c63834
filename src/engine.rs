//! Query façade over the trie and the fuzzy matcher.

use std::io::BufRead;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::dictionary;
use crate::error::Result;
use crate::fuzzy::{self, DEFAULT_MAX_DISTANCE, FuzzyMatch};
use crate::trie::PrefixTrie;

/// Combined answer for a single query: exact-prefix matches plus fuzzy
/// matches ordered by distance. Structured data only; formatting belongs to
/// the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LookupResults {
    /// Words sharing the query as an exact prefix.
    pub prefix_matches: Vec<String>,
    /// Words within the distance bound, closest first.
    pub fuzzy_matches: Vec<FuzzyMatch>,
}

/// A loaded dictionary ready for prefix and fuzzy queries.
///
/// The constructors finish all insertions before returning, so an engine a
/// caller can observe is always fully built; queries never see a
/// partially-built trie.
#[derive(Debug, Clone, Default)]
pub struct LookupEngine {
    trie: PrefixTrie,
}

impl LookupEngine {
    /// Build an engine from an in-memory word sequence.
    ///
    /// Blank entries are skipped, mirroring the file loader.
    pub fn build<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut trie = PrefixTrie::new();
        for word in words {
            let word = word.as_ref().trim();
            if !word.is_empty() {
                trie.insert(word);
            }
        }
        LookupEngine { trie }
    }

    /// Build an engine from any buffered reader, one word per line.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
        Ok(Self::build(dictionary::read_words(reader)?))
    }

    /// Build an engine from a dictionary file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Ok(Self::build(dictionary::load_words(path)?))
    }

    /// Access the underlying trie.
    pub fn trie(&self) -> &PrefixTrie {
        &self.trie
    }

    /// Number of distinct dictionary words.
    pub fn word_count(&self) -> usize {
        self.trie.len()
    }

    /// All dictionary words starting with `prefix`.
    pub fn prefix_search(&self, prefix: &str) -> Vec<String> {
        self.trie.words_with_prefix(prefix)
    }

    /// Dictionary words within `max_distance` edits of `query`, closest
    /// first.
    pub fn fuzzy_search(&self, query: &str, max_distance: usize) -> Vec<FuzzyMatch> {
        fuzzy::fuzzy_matches(&self.trie, query, max_distance)
    }

    /// Run both query modes with the default distance bound.
    pub fn lookup(&self, query: &str) -> LookupResults {
        self.lookup_with_distance(query, DEFAULT_MAX_DISTANCE)
    }

    /// Run both query modes with an explicit distance bound.
    pub fn lookup_with_distance(&self, query: &str, max_distance: usize) -> LookupResults {
        LookupResults {
            prefix_matches: self.prefix_search(query),
            fuzzy_matches: self.fuzzy_search(query, max_distance),
        }
    }
}
