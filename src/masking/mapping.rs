//! Original-to-masked mapping cache
//!
//! One [`MappingTable`] exists per field category and lives exactly as
//! long as the run. It enforces the core pseudonymization invariant:
//! at most one masked value is ever created per distinct original, and
//! repeated lookups return the byte-identical cached value. Rerunning
//! with a fresh table produces a fresh, unrelated set of masked values.

use std::collections::{HashMap, HashSet};

/// Per-category cache of original value to masked replacement
#[derive(Debug, Default)]
pub struct MappingTable {
    entries: HashMap<String, String>,
    issued: HashSet<String>,
}

impl MappingTable {
    /// Create an empty mapping table
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up the cached replacement for an original value
    pub fn get(&self, original: &str) -> Option<&str> {
        self.entries.get(original).map(String::as_str)
    }

    /// Check whether an original value has already been mapped
    pub fn contains(&self, original: &str) -> bool {
        self.entries.contains_key(original)
    }

    /// Check whether a candidate replacement has already been issued.
    ///
    /// Used by generators to retry on collision so that synthetic
    /// replacements stay unique within the run.
    pub fn contains_value(&self, candidate: &str) -> bool {
        self.issued.contains(candidate)
    }

    /// Record a mapping from an original value to its replacement
    ///
    /// First sight wins: an original that is already mapped keeps its
    /// existing replacement and the new candidate is discarded.
    pub fn insert(&mut self, original: &str, replacement: String) {
        if self.entries.contains_key(original) {
            return;
        }
        self.issued.insert(replacement.clone());
        self.entries.insert(original.to_string(), replacement);
    }

    /// Number of distinct originals mapped so far
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no mappings have been created yet
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
