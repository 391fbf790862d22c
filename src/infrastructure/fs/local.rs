//! Local File System Implementation
//!
//! Implements the FileSystem port for local disk operations.

use std::cell::RefCell;
use std::path::{Path, PathBuf};

use ignore::WalkBuilder;
use tempfile::TempDir;

use super::matcher::FileMatcher;
use crate::domain::ports::file_system::{FileSystem, FsError, FsResult};

/// Prefix of every shadow directory created in the OS temp location
const TEMP_PREFIX: &str = "recheck-";

/// Local file system implementation
///
/// Temporary directories stay alive until they are removed explicitly or
/// the `LocalFs` is dropped.
#[derive(Debug, Default)]
pub struct LocalFs {
    temporary: RefCell<Vec<TempDir>>,
}

impl LocalFs {
    /// Create a new LocalFs instance
    pub fn new() -> Self {
        Self::default()
    }
}

impl FileSystem for LocalFs {
    fn current_directory(&self) -> PathBuf {
        std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
    }

    fn file_exists(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn read_file(&self, path: &Path) -> Option<String> {
        match std::fs::read_to_string(path) {
            Ok(content) => Some(content),
            Err(e) => {
                tracing::debug!("cannot read {}: {}", path.display(), e);
                None
            }
        }
    }

    fn read_directory(
        &self,
        root: &Path,
        extensions: &[String],
        excludes: &[String],
        includes: &[String],
        depth: Option<usize>,
    ) -> Vec<PathBuf> {
        let matcher = FileMatcher::new(
            root,
            extensions,
            excludes,
            includes,
            depth,
            self.use_case_sensitive_file_names(),
        );

        let mut walker = WalkBuilder::new(root);
        walker.standard_filters(false).follow_links(false);
        if let Some(depth) = matcher.max_depth() {
            walker.max_depth(Some(depth + 1));
        }

        let mut files: Vec<PathBuf> = walker
            .build()
            .filter_map(|entry| match entry {
                Ok(entry) => Some(entry),
                Err(e) => {
                    tracing::debug!("skipping unreadable entry under {}: {}", root.display(), e);
                    None
                }
            })
            .filter(|entry| entry.file_type().is_some_and(|t| t.is_file()))
            .map(|entry| entry.into_path())
            .filter(|path| matcher.matches(path))
            .collect();
        files.sort();
        files
    }

    fn write_file(&self, path: &Path, content: &str) -> FsResult<()> {
        // Ensure parent directories exist
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| FsError::at(parent, e))?;
        }
        std::fs::write(path, content).map_err(|e| FsError::at(path, e))
    }

    fn create_temporary_directory(&self) -> FsResult<PathBuf> {
        let dir = tempfile::Builder::new().prefix(TEMP_PREFIX).tempdir()?;
        let path = dir.path().to_path_buf();
        self.temporary.borrow_mut().push(dir);
        Ok(path)
    }

    fn remove_temporary_directory(&self, path: &Path) -> FsResult<()> {
        let mut temporary = self.temporary.borrow_mut();
        match temporary.iter().position(|dir| dir.path() == path) {
            Some(index) => temporary.remove(index).close().map_err(|e| FsError::at(path, e)),
            None => Err(FsError::NotFound(path.to_path_buf())),
        }
    }

    fn use_case_sensitive_file_names(&self) -> bool {
        !cfg!(any(windows, target_os = "macos"))
    }
}
