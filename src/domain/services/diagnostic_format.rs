//! Plain-text diagnostic formatting
//!
//! Produces `file(line,col): error TS1234: message` lines, with file names
//! shown relative to the current directory when possible.

use std::path::{Path, PathBuf};

use crate::domain::entities::Diagnostic;
use crate::domain::ports::FileSystem;
use crate::domain::value_objects::path::relative_to;

/// Platform line ending
#[cfg(windows)]
pub const NEW_LINE: &str = "\r\n";
#[cfg(not(windows))]
pub const NEW_LINE: &str = "\n";

/// Everything the formatter needs to know about its environment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatHost {
    current_directory: PathBuf,
    new_line: &'static str,
}

impl FormatHost {
    pub fn new(current_directory: impl Into<PathBuf>, new_line: &'static str) -> Self {
        Self {
            current_directory: current_directory.into(),
            new_line,
        }
    }

    /// Current directory from `fs`, platform line ending
    pub fn for_file_system(fs: &dyn FileSystem) -> Self {
        Self::new(fs.current_directory(), NEW_LINE)
    }

    pub fn current_directory(&self) -> &Path {
        &self.current_directory
    }

    /// File names are used as given; no case folding
    pub fn canonical_file_name<'a>(&self, file_name: &'a Path) -> &'a Path {
        file_name
    }

    pub fn new_line(&self) -> &'static str {
        self.new_line
    }

    fn display_name(&self, file: &Path) -> String {
        let canonical = self.canonical_file_name(file);
        match relative_to(&self.current_directory, canonical) {
            Some(relative) if !relative.as_os_str().is_empty() => relative.display().to_string(),
            _ => canonical.display().to_string(),
        }
    }
}

/// Format one diagnostic, terminated by the host's line ending
pub fn format_diagnostic(diagnostic: &Diagnostic, host: &FormatHost) -> String {
    let mut out = String::new();
    if let Some(file) = diagnostic.file() {
        out.push_str(&host.display_name(file));
        if let Some(start) = diagnostic.start {
            out.push_str(&format!("({},{})", start.line, start.column));
        }
        out.push_str(": ");
    }
    out.push_str(&format!(
        "{} TS{}: {}",
        diagnostic.category, diagnostic.code, diagnostic.message
    ));
    out.push_str(host.new_line());
    out
}

/// Format each diagnostic separately, preserving order
pub fn format_diagnostics(diagnostics: &[Diagnostic], host: &FormatHost) -> Vec<String> {
    diagnostics
        .iter()
        .map(|d| format_diagnostic(d, host))
        .collect()
}
