//! Dictionary word-list loading.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::Result;

/// Read words from a buffered reader, one word per line.
///
/// Lines are trimmed and blank lines skipped, so the trie never receives an
/// empty word through this path. There is no case folding and no
/// character-set filtering: the dictionary decides its own alphabet.
pub fn read_words<R: BufRead>(reader: R) -> Result<Vec<String>> {
    let mut words = Vec::new();

    for line in reader.lines() {
        let line = line?;
        let word = line.trim();
        if !word.is_empty() {
            words.push(word.to_string());
        }
    }

    Ok(words)
}

/// Load a dictionary file with one word per line.
///
/// An unreadable source is fatal for the surrounding run: the error is
/// returned to the caller and nothing is inserted.
pub fn load_words<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let file = File::open(path)?;
    read_words(BufReader::new(file))
}
