//! Diagnostic entity
//!
//! A single issue reported by the configuration reader, a transformer, or the
//! checker. Formatting for humans lives in `domain::services`.

use std::fmt;
use std::path::{Path, PathBuf};

/// Severity of a diagnostic
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiagnosticCategory {
    Error,
    Warning,
    Message,
}

impl DiagnosticCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            DiagnosticCategory::Error => "error",
            DiagnosticCategory::Warning => "warning",
            DiagnosticCategory::Message => "message",
        }
    }
}

impl fmt::Display for DiagnosticCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 1-based line and column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

/// A reported issue, optionally attributed to a file location
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub file: Option<PathBuf>,
    pub start: Option<Position>,
    pub category: DiagnosticCategory,
    pub code: u32,
    pub message: String,
}

impl Diagnostic {
    /// Diagnostic attached to a location in a file
    pub fn at(
        file: impl Into<PathBuf>,
        start: Position,
        category: DiagnosticCategory,
        code: u32,
        message: impl Into<String>,
    ) -> Self {
        Self {
            file: Some(file.into()),
            start: Some(start),
            category,
            code,
            message: message.into(),
        }
    }

    /// Diagnostic about a file as a whole
    pub fn in_file(
        file: impl Into<PathBuf>,
        category: DiagnosticCategory,
        code: u32,
        message: impl Into<String>,
    ) -> Self {
        Self {
            file: Some(file.into()),
            start: None,
            category,
            code,
            message: message.into(),
        }
    }

    /// Diagnostic not tied to any file
    pub fn global(category: DiagnosticCategory, code: u32, message: impl Into<String>) -> Self {
        Self {
            file: None,
            start: None,
            category,
            code,
            message: message.into(),
        }
    }

    pub fn error_at(
        file: impl Into<PathBuf>,
        start: Position,
        code: u32,
        message: impl Into<String>,
    ) -> Self {
        Self::at(file, start, DiagnosticCategory::Error, code, message)
    }

    pub fn file(&self) -> Option<&Path> {
        self.file.as_deref()
    }

    pub fn is_error(&self) -> bool {
        self.category == DiagnosticCategory::Error
    }
}
