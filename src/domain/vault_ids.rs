//! The set of note identifiers that wiki-links may resolve to.

use std::collections::HashSet;

/// Known note identifiers in a vault.
///
/// Identifiers are note file names without the `.md` extension. Lookups are
/// exact and case-sensitive: `Rust` and `rust` are different notes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VaultIds(HashSet<String>);

impl VaultIds {
    /// Creates an empty identifier set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an identifier. Returns false if it was already present.
    pub fn insert(&mut self, id: impl Into<String>) -> bool {
        self.0.insert(id.into())
    }

    /// Returns true if `id` names a known note.
    pub fn contains(&self, id: &str) -> bool {
        self.0.contains(id)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over identifiers in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Returns identifiers sorted lexicographically.
    pub fn sorted(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.iter().collect();
        ids.sort_unstable();
        ids
    }
}

impl<S: Into<String>> FromIterator<S> for VaultIds {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

impl<S: Into<String>> Extend<S> for VaultIds {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        self.0.extend(iter.into_iter().map(Into::into));
    }
}

impl From<HashSet<String>> for VaultIds {
    fn from(ids: HashSet<String>) -> Self {
        Self(ids)
    }
}
