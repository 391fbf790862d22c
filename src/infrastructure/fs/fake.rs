//! In-memory file system for tests
//!
//! Entries are `(path, data)` pairs. Relative paths resolve against the
//! configured current directory. Every write is also recorded so tests can
//! check where the pipeline wrote.

use std::cell::{Cell, RefCell};
use std::path::{Path, PathBuf};

use super::matcher::FileMatcher;
use crate::domain::ports::file_system::{FileSystem, FsResult};
use crate::domain::value_objects::path::absolutize;

/// Root under which fake temporary directories are handed out
const FAKE_TEMP_ROOT: &str = "/tmp";

/// One fake file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FakeFileEntry {
    pub path: PathBuf,
    pub data: String,
}

impl FakeFileEntry {
    pub fn new(path: impl Into<PathBuf>, data: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            data: data.into(),
        }
    }
}

#[derive(Debug)]
pub struct FakeFs {
    current_directory: PathBuf,
    entries: RefCell<Vec<FakeFileEntry>>,
    writes: RefCell<Vec<PathBuf>>,
    temporary_directories: RefCell<Vec<PathBuf>>,
    next_temporary: Cell<usize>,
}

impl FakeFs {
    pub fn new(current_directory: impl Into<PathBuf>, entries: Vec<FakeFileEntry>) -> Self {
        let current_directory = current_directory.into();
        let entries = entries
            .into_iter()
            .map(|entry| FakeFileEntry {
                path: absolutize(&current_directory, &entry.path),
                data: entry.data,
            })
            .collect();
        Self {
            current_directory,
            entries: RefCell::new(entries),
            writes: RefCell::new(Vec::new()),
            temporary_directories: RefCell::new(Vec::new()),
            next_temporary: Cell::new(0),
        }
    }

    /// Convenience constructor from `(path, data)` pairs
    pub fn with_files(current_directory: impl Into<PathBuf>, files: &[(&str, &str)]) -> Self {
        Self::new(
            current_directory,
            files
                .iter()
                .map(|(path, data)| FakeFileEntry::new(*path, *data))
                .collect(),
        )
    }

    /// Every path written so far, in write order
    pub fn writes(&self) -> Vec<PathBuf> {
        self.writes.borrow().clone()
    }

    /// Snapshot of all entries
    pub fn entries(&self) -> Vec<FakeFileEntry> {
        self.entries.borrow().clone()
    }

    /// Temporary directories handed out and not yet removed
    pub fn temporary_directories(&self) -> Vec<PathBuf> {
        self.temporary_directories.borrow().clone()
    }

    fn absolute(&self, path: &Path) -> PathBuf {
        absolutize(&self.current_directory, path)
    }
}

impl FileSystem for FakeFs {
    fn current_directory(&self) -> PathBuf {
        self.current_directory.clone()
    }

    fn file_exists(&self, path: &Path) -> bool {
        let path = self.absolute(path);
        self.entries.borrow().iter().any(|entry| entry.path == path)
    }

    fn read_file(&self, path: &Path) -> Option<String> {
        let path = self.absolute(path);
        self.entries
            .borrow()
            .iter()
            .find(|entry| entry.path == path)
            .map(|entry| entry.data.clone())
    }

    fn read_directory(
        &self,
        root: &Path,
        extensions: &[String],
        excludes: &[String],
        includes: &[String],
        depth: Option<usize>,
    ) -> Vec<PathBuf> {
        let root = self.absolute(root);
        let matcher = FileMatcher::new(
            &root,
            extensions,
            excludes,
            includes,
            depth,
            self.use_case_sensitive_file_names(),
        );
        let mut files: Vec<PathBuf> = self
            .entries
            .borrow()
            .iter()
            .map(|entry| entry.path.clone())
            .filter(|path| matcher.matches(path))
            .collect();
        files.sort();
        files.dedup();
        files
    }

    fn write_file(&self, path: &Path, content: &str) -> FsResult<()> {
        let path = self.absolute(path);
        self.writes.borrow_mut().push(path.clone());
        let mut entries = self.entries.borrow_mut();
        match entries.iter_mut().find(|entry| entry.path == path) {
            Some(entry) => entry.data = content.to_string(),
            None => entries.push(FakeFileEntry::new(path, content)),
        }
        Ok(())
    }

    fn create_temporary_directory(&self) -> FsResult<PathBuf> {
        let index = self.next_temporary.get();
        self.next_temporary.set(index + 1);
        let path = Path::new(FAKE_TEMP_ROOT).join(format!("recheck-shadow-{index}"));
        self.temporary_directories.borrow_mut().push(path.clone());
        Ok(path)
    }

    fn remove_temporary_directory(&self, path: &Path) -> FsResult<()> {
        let path = self.absolute(path);
        self.temporary_directories.borrow_mut().retain(|dir| *dir != path);
        self.entries
            .borrow_mut()
            .retain(|entry| !entry.path.starts_with(&path));
        Ok(())
    }
}
