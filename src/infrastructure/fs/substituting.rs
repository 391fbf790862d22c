//! Substituting File System
//!
//! Decorates a base FileSystem so that every original path recorded in a
//! SubstitutionTable reads as its transformed shadow copy. A second
//! compilation through this view sees the original project layout with the
//! transformed contents, while nothing under the original tree changes.

use std::path::{Path, PathBuf};

use crate::domain::entities::SubstitutionTable;
use crate::domain::ports::file_system::{FileSystem, FsResult};

pub struct SubstitutingFs<'a, F: FileSystem + ?Sized> {
    base: &'a F,
    substitutions: &'a SubstitutionTable,
}

impl<'a, F: FileSystem + ?Sized> SubstitutingFs<'a, F> {
    pub fn new(base: &'a F, substitutions: &'a SubstitutionTable) -> Self {
        Self {
            base,
            substitutions,
        }
    }

    pub fn substitutions(&self) -> &SubstitutionTable {
        self.substitutions
    }
}

impl<F: FileSystem + ?Sized> FileSystem for SubstitutingFs<'_, F> {
    fn current_directory(&self) -> PathBuf {
        self.base.current_directory()
    }

    fn file_exists(&self, path: &Path) -> bool {
        self.substitutions.contains(path) || self.base.file_exists(path)
    }

    fn read_file(&self, path: &Path) -> Option<String> {
        match self.substitutions.lookup(path) {
            Some(shadow) => self.base.read_file(shadow),
            None => self.base.read_file(path),
        }
    }

    /// Only substituted files exist as far as enumeration is concerned;
    /// the filters are not applied.
    fn read_directory(
        &self,
        _root: &Path,
        _extensions: &[String],
        _excludes: &[String],
        _includes: &[String],
        _depth: Option<usize>,
    ) -> Vec<PathBuf> {
        self.substitutions.from_paths()
    }

    fn write_file(&self, path: &Path, content: &str) -> FsResult<()> {
        self.base.write_file(path, content)
    }

    fn create_temporary_directory(&self) -> FsResult<PathBuf> {
        self.base.create_temporary_directory()
    }

    fn remove_temporary_directory(&self, path: &Path) -> FsResult<()> {
        self.base.remove_temporary_directory(path)
    }

    fn use_case_sensitive_file_names(&self) -> bool {
        true
    }
}
