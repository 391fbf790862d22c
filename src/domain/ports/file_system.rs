//! FileSystem port - abstraction over file I/O operations
//!
//! Every stage of the pipeline reads and writes through this trait, so the
//! whole recheck can run against the real disk, an in-memory fake, or an
//! overlay that redirects original paths to their transformed copies.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Result type for file system operations
pub type FsResult<T> = Result<T, FsError>;

/// File system operation errors
#[derive(Error, Debug)]
pub enum FsError {
    /// File not found
    #[error("File not found: {}", .0.display())]
    NotFound(PathBuf),
    /// Permission denied
    #[error("Permission denied: {}", .0.display())]
    PermissionDenied(PathBuf),
    /// I/O error
    #[error("I/O error: {0}")]
    Io(std::io::Error),
    /// Other error
    #[error("{0}")]
    Other(String),
}

impl FsError {
    /// Classify an I/O error raised while touching `path`.
    pub fn at(path: &Path, err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => FsError::NotFound(path.to_path_buf()),
            std::io::ErrorKind::PermissionDenied => FsError::PermissionDenied(path.to_path_buf()),
            _ => FsError::Io(err),
        }
    }
}

impl From<std::io::Error> for FsError {
    fn from(err: std::io::Error) -> Self {
        FsError::at(Path::new(""), err)
    }
}

/// Abstract file system interface
///
/// Implementations:
/// - `LocalFs` - real disk and OS temp directories
/// - `FakeFs` - in-memory entries for testing
/// - `SubstitutingFs` - overlay redirecting original paths to shadow copies
pub trait FileSystem {
    /// Directory relative paths are resolved against
    fn current_directory(&self) -> PathBuf;

    /// Check if file exists
    fn file_exists(&self, path: &Path) -> bool;

    /// Read file content; `None` when missing or unreadable
    fn read_file(&self, path: &Path) -> Option<String>;

    /// List files under `root` that pass the extension, exclude and include
    /// filters, optionally bounded to `depth` directory levels.
    ///
    /// The result is sorted so it is stable for a fixed file system state.
    fn read_directory(
        &self,
        root: &Path,
        extensions: &[String],
        excludes: &[String],
        includes: &[String],
        depth: Option<usize>,
    ) -> Vec<PathBuf>;

    /// Write content to file, creating parent directories, overwriting
    fn write_file(&self, path: &Path, content: &str) -> FsResult<()>;

    /// Allocate a fresh, writable directory; never returns the same path twice
    fn create_temporary_directory(&self) -> FsResult<PathBuf>;

    /// Release a directory obtained from `create_temporary_directory`
    fn remove_temporary_directory(&self, path: &Path) -> FsResult<()>;

    /// Whether paths differing only in case name different files
    fn use_case_sensitive_file_names(&self) -> bool {
        true
    }
}

impl<T: FileSystem + ?Sized> FileSystem for &T {
    fn current_directory(&self) -> PathBuf {
        (**self).current_directory()
    }

    fn file_exists(&self, path: &Path) -> bool {
        (**self).file_exists(path)
    }

    fn read_file(&self, path: &Path) -> Option<String> {
        (**self).read_file(path)
    }

    fn read_directory(
        &self,
        root: &Path,
        extensions: &[String],
        excludes: &[String],
        includes: &[String],
        depth: Option<usize>,
    ) -> Vec<PathBuf> {
        (**self).read_directory(root, extensions, excludes, includes, depth)
    }

    fn write_file(&self, path: &Path, content: &str) -> FsResult<()> {
        (**self).write_file(path, content)
    }

    fn create_temporary_directory(&self) -> FsResult<PathBuf> {
        (**self).create_temporary_directory()
    }

    fn remove_temporary_directory(&self, path: &Path) -> FsResult<()> {
        (**self).remove_temporary_directory(path)
    }

    fn use_case_sensitive_file_names(&self) -> bool {
        (**self).use_case_sensitive_file_names()
    }
}
