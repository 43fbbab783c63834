//! Approximate matching by edit distance.
//!
//! This module provides Levenshtein distance computation and the fuzzy
//! query mode: ranking every dictionary word by its distance to a query
//! string, bounded by a maximum distance.

pub mod levenshtein;
pub mod matcher;

// Re-export commonly used types
pub use levenshtein::*;
pub use matcher::*;
