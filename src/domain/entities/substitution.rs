//! Substitution table
//!
//! Maps original file paths to their transformed copies in the shadow
//! directory. Built by the transform stage, read by the overlay file system.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// One redirection from an original path to its shadow copy
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Substitute {
    from_path: PathBuf,
    to_path: PathBuf,
}

impl Substitute {
    pub fn new(from_path: impl Into<PathBuf>, to_path: impl Into<PathBuf>) -> Self {
        Self {
            from_path: from_path.into(),
            to_path: to_path.into(),
        }
    }

    pub fn from_path(&self) -> &Path {
        &self.from_path
    }

    pub fn to_path(&self) -> &Path {
        &self.to_path
    }
}

/// Ordered, append-only list of substitutes.
///
/// Lookups are exact path matches. When the same original path was recorded
/// more than once the first entry wins.
#[derive(Debug, Clone, Default)]
pub struct SubstitutionTable {
    entries: Vec<Substitute>,
    first_by_from: HashMap<PathBuf, usize>,
}

impl SubstitutionTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, substitute: Substitute) {
        let index = self.entries.len();
        self.first_by_from
            .entry(substitute.from_path.clone())
            .or_insert(index);
        self.entries.push(substitute);
    }

    /// Shadow path for `from`, if it was substituted
    pub fn lookup(&self, from: &Path) -> Option<&Path> {
        self.first_by_from
            .get(from)
            .map(|&index| self.entries[index].to_path())
    }

    pub fn contains(&self, from: &Path) -> bool {
        self.first_by_from.contains_key(from)
    }

    /// Distinct original paths, in the order they were first recorded
    pub fn from_paths(&self) -> Vec<PathBuf> {
        self.entries
            .iter()
            .enumerate()
            .filter(|(index, s)| self.first_by_from.get(&s.from_path) == Some(index))
            .map(|(_, s)| s.from_path.clone())
            .collect()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Substitute> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a SubstitutionTable {
    type Item = &'a Substitute;
    type IntoIter = std::slice::Iter<'a, Substitute>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
