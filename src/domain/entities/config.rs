//! Project configuration entities
//!
//! `RawConfig` is the configuration text parsed once per run.
//! `ResolvedConfig` is that configuration interpreted against one particular
//! file system view; a run produces two of them (before and after transform).

use std::path::{Path, PathBuf};

/// Parsed but not yet interpreted configuration
#[derive(Debug, Clone, PartialEq)]
pub struct RawConfig {
    path: PathBuf,
    root_dir: PathBuf,
    value: serde_json::Value,
}

impl RawConfig {
    /// `path` must be absolute; the root directory is its parent
    pub fn new(path: impl Into<PathBuf>, value: serde_json::Value) -> Self {
        let path = path.into();
        let root_dir = path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("/"));
        Self {
            path,
            root_dir,
            value,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Directory relative paths in the configuration are resolved against
    pub fn root_dir(&self) -> &Path {
        &self.root_dir
    }

    pub fn value(&self) -> &serde_json::Value {
        &self.value
    }
}

/// Outcome of interpreting a configuration: files, options and any errors
#[derive(Debug, Clone)]
pub struct ParsedConfig<O> {
    pub file_names: Vec<PathBuf>,
    pub options: O,
    pub errors: Vec<super::Diagnostic>,
}

/// Configuration interpreted into a concrete list of absolute file names
#[derive(Debug, Clone)]
pub struct ResolvedConfig<O> {
    config_path: PathBuf,
    root_dir: PathBuf,
    file_names: Vec<PathBuf>,
    options: O,
}

impl<O> ResolvedConfig<O> {
    pub fn new(raw: &RawConfig, file_names: Vec<PathBuf>, options: O) -> Self {
        Self {
            config_path: raw.path().to_path_buf(),
            root_dir: raw.root_dir().to_path_buf(),
            file_names,
            options,
        }
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    pub fn root_dir(&self) -> &Path {
        &self.root_dir
    }

    pub fn file_names(&self) -> &[PathBuf] {
        &self.file_names
    }

    pub fn options(&self) -> &O {
        &self.options
    }
}
