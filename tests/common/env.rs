//! Temp-directory projects for recheck tests.

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

/// Result of running the recheck binary
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

/// A project laid out on disk in its own temp directory
pub struct TestProject {
    pub root: TempDir,
}

impl TestProject {
    pub fn new() -> Self {
        Self {
            root: tempfile::tempdir().expect("failed to create temp project"),
        }
    }

    /// Write `content` at `relative`, creating parent directories
    pub fn with_file(self, relative: &str, content: &str) -> Self {
        let path = self.path(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("failed to create parent");
        }
        std::fs::write(&path, content).expect("failed to write project file");
        self
    }

    pub fn path(&self, relative: &str) -> PathBuf {
        self.root.path().join(relative)
    }

    pub fn config_path(&self) -> PathBuf {
        self.path("tsconfig.json")
    }

    /// Every file currently in the project, with its content
    pub fn snapshot(&self) -> Vec<(PathBuf, String)> {
        let mut files = Vec::new();
        collect(self.root.path(), &mut files);
        files.sort();
        files
    }

    /// Run the recheck binary from the project root
    pub fn run(&self, args: &[&str]) -> TestResult {
        let output = Command::new(env!("CARGO_BIN_EXE_recheck"))
            .current_dir(self.root.path())
            .args(args)
            .env_remove("RUST_LOG")
            .output()
            .expect("failed to execute recheck");
        TestResult {
            success: output.status.success(),
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        }
    }
}

fn collect(dir: &Path, out: &mut Vec<(PathBuf, String)>) {
    for entry in std::fs::read_dir(dir).expect("failed to list project") {
        let path = entry.expect("bad directory entry").path();
        if path.is_dir() {
            collect(&path, out);
        } else {
            let content = std::fs::read_to_string(&path).unwrap_or_default();
            out.push((path, content));
        }
    }
}
