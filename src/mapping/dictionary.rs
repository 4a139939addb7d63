use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// One mapping row: a physical (database) identifier, the logical (business)
/// name it stands for, and an optional free-text description.
///
/// `physical` is a literal identifier, never a pattern. The loader only
/// produces entries whose physical and logical names are both non-blank.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MappingEntry {
    /// The identifier as it appears in SQL source.
    pub physical: String,
    /// The human-readable name substituted for it.
    pub logical: String,
    /// Description carried into the matched-tables report, if the source row had one.
    pub description: Option<String>,
}

impl MappingEntry {
    /// Build an entry from its parts.
    pub fn new(
        physical: impl Into<String>,
        logical: impl Into<String>,
        description: Option<String>,
    ) -> Self {
        Self {
            physical: physical.into(),
            logical: logical.into(),
            description,
        }
    }
}

/// An ordered set of mapping entries keyed by physical name.
///
/// Iteration order is source-row order, which the rewrite engine depends on
/// (replacements chain through the accumulated text). A duplicate physical
/// name does not append: the entry keeps the position of its first occurrence
/// and takes the logical name and description of the last (last-write-wins,
/// matching how the source spreadsheet collapses into a dictionary).
#[derive(Debug, Clone, Default)]
pub struct MappingDictionary {
    entries: Vec<MappingEntry>,
    index: HashMap<String, usize>,
}

impl MappingDictionary {
    /// Create an empty dictionary.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an entry, collapsing duplicate physical names last-write-wins.
    pub fn insert(&mut self, entry: MappingEntry) {
        if let Some(&position) = self.index.get(&entry.physical) {
            self.entries[position].logical = entry.logical;
            self.entries[position].description = entry.description;
        } else {
            self.index.insert(entry.physical.clone(), self.entries.len());
            self.entries.push(entry);
        }
    }

    /// Look up an entry by its physical name.
    pub fn get(&self, physical: &str) -> Option<&MappingEntry> {
        self.index.get(physical).map(|&position| &self.entries[position])
    }

    /// Iterate entries in source-row order.
    pub fn iter(&self) -> impl Iterator<Item = &MappingEntry> {
        self.entries.iter()
    }

    /// Number of distinct physical names.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the dictionary holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<MappingEntry> for MappingDictionary {
    fn from_iter<I: IntoIterator<Item = MappingEntry>>(iter: I) -> Self {
        let mut dictionary = Self::new();
        for entry in iter {
            dictionary.insert(entry);
        }
        dictionary
    }
}
