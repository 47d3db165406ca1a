// SPDX-License-Identifier: MIT OR Apache-2.0
//! Field mappings.

use serde::{Deserialize, Serialize};

/// One mapping row: where a value lives in the old document and where its
/// counterpart lives in the new one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MappingEntry {
    /// Path expression into the old document.
    pub old_path: String,
    /// Path expression into the new document.
    pub new_path: String,
}

impl MappingEntry {
    /// Create an entry from a pair of path expressions.
    pub fn new(old_path: impl Into<String>, new_path: impl Into<String>) -> Self {
        Self {
            old_path: old_path.into(),
            new_path: new_path.into(),
        }
    }
}

/// An ordered list of mapping entries.
///
/// Entry order is comparison order and report row order. Old paths are
/// unique in practice but duplicates are not rejected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mapping {
    entries: Vec<MappingEntry>,
}

impl Mapping {
    /// Create an empty mapping.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Build a mapping from `(old, new)` path pairs.
    pub fn from_pairs<I, S>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (S, S)>,
        S: Into<String>,
    {
        Self {
            entries: pairs
                .into_iter()
                .map(|(old, new)| MappingEntry::new(old, new))
                .collect(),
        }
    }

    /// Append an entry.
    pub fn push(&mut self, entry: MappingEntry) {
        self.entries.push(entry);
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, MappingEntry> {
        self.entries.iter()
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// `true` when the mapping holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<MappingEntry> for Mapping {
    fn from_iter<I: IntoIterator<Item = MappingEntry>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl<'mapping> IntoIterator for &'mapping Mapping {
    type Item = &'mapping MappingEntry;
    type IntoIter = std::slice::Iter<'mapping, MappingEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_is_preserved() {
        let mapping = Mapping::from_pairs([("b", "y"), ("a", "x"), ("c", "z")]);
        let old_paths: Vec<_> = mapping.iter().map(|e| e.old_path.as_str()).collect();
        assert_eq!(old_paths, ["b", "a", "c"]);
    }

    #[test]
    fn test_duplicates_are_kept() {
        let mapping = Mapping::from_pairs([("a", "x"), ("a", "x")]);
        assert_eq!(mapping.len(), 2);
    }
}
