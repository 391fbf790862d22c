//! File enumeration filters
//!
//! Include and exclude patterns use gitignore semantics through the `ignore`
//! crate, relative to the directory being listed.

use ignore::gitignore::{Gitignore, GitignoreBuilder};
use std::path::{Path, PathBuf};

/// Decides which files a `read_directory` call returns
#[derive(Debug)]
pub struct FileMatcher {
    root: PathBuf,
    extensions: Vec<String>,
    includes: Option<Gitignore>,
    excludes: Option<Gitignore>,
    depth: Option<usize>,
}

impl FileMatcher {
    /// An empty `includes` list admits every file; an empty `extensions`
    /// list admits every extension.
    pub fn new(
        root: &Path,
        extensions: &[String],
        excludes: &[String],
        includes: &[String],
        depth: Option<usize>,
        case_sensitive: bool,
    ) -> Self {
        Self {
            root: root.to_path_buf(),
            extensions: extensions.to_vec(),
            includes: build_patterns(root, includes, case_sensitive),
            excludes: build_patterns(root, excludes, case_sensitive),
            depth,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn max_depth(&self) -> Option<usize> {
        self.depth
    }

    /// Whether a file at `path` belongs in the listing
    pub fn matches(&self, path: &Path) -> bool {
        let Ok(relative) = path.strip_prefix(&self.root) else {
            return false;
        };
        if relative.as_os_str().is_empty() {
            return false;
        }
        if let Some(depth) = self.depth {
            if relative.components().count() > depth + 1 {
                return false;
            }
        }
        if !self.has_allowed_extension(path) {
            return false;
        }
        if let Some(excludes) = &self.excludes {
            if excludes.matched_path_or_any_parents(path, false).is_ignore() {
                return false;
            }
        }
        match &self.includes {
            Some(includes) => includes.matched_path_or_any_parents(path, false).is_ignore(),
            None => true,
        }
    }

    fn has_allowed_extension(&self, path: &Path) -> bool {
        if self.extensions.is_empty() {
            return true;
        }
        let name = path.to_string_lossy();
        self.extensions.iter().any(|ext| name.ends_with(ext.as_str()))
    }
}

fn build_patterns(root: &Path, patterns: &[String], case_sensitive: bool) -> Option<Gitignore> {
    if patterns.is_empty() {
        return None;
    }
    let mut builder = GitignoreBuilder::new(root);
    if let Err(e) = builder.case_insensitive(!case_sensitive) {
        tracing::warn!("cannot set pattern case sensitivity: {}", e);
    }
    for pattern in patterns {
        if let Err(e) = builder.add_line(None, pattern) {
            tracing::warn!("ignoring invalid file pattern '{}': {}", pattern, e);
        }
    }
    match builder.build() {
        Ok(matcher) => Some(matcher),
        Err(e) => {
            tracing::warn!("cannot build file patterns: {}", e);
            None
        }
    }
}
