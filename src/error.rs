//! Error types for recheck
//!
//! Only configuration problems and a failed shadow directory allocation are
//! fatal. Everything that goes wrong per file is reported as a diagnostic.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::entities::Diagnostic;
use crate::domain::ports::FsError;

/// Result type alias for pipeline operations
pub type RecheckResult<T> = Result<T, RecheckError>;

/// Fatal pipeline errors
#[derive(Error, Debug)]
pub enum RecheckError {
    /// The configuration file does not exist on the given file system
    #[error("Configuration file {} does not exist.", .path.display())]
    ConfigNotFound { path: PathBuf },

    /// The configuration file exists but its text could not be read
    #[error("Cannot read file '{}'.", .path.display())]
    ConfigUnreadable { path: PathBuf },

    /// The configuration text is not valid structured configuration
    #[error("{}", .diagnostic.message)]
    ConfigParse { path: PathBuf, diagnostic: Diagnostic },

    /// The configuration parsed but could not be turned into files and options
    #[error("configuration has {} error(s): {}", .diagnostics.len(), first_message(.diagnostics))]
    ConfigValidation { diagnostics: Vec<Diagnostic> },

    /// No shadow directory could be allocated for the transformed files
    #[error("could not create shadow directory: {0}")]
    ShadowDirectory(#[source] FsError),
}

impl RecheckError {
    /// Diagnostics carried by the error, if it has any.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        match self {
            RecheckError::ConfigParse { diagnostic, .. } => std::slice::from_ref(diagnostic),
            RecheckError::ConfigValidation { diagnostics } => diagnostics,
            RecheckError::ConfigNotFound { .. }
            | RecheckError::ConfigUnreadable { .. }
            | RecheckError::ShadowDirectory(_) => &[],
        }
    }
}

fn first_message(diagnostics: &[Diagnostic]) -> &str {
    diagnostics
        .first()
        .map(|d| d.message.as_str())
        .unwrap_or_default()
}
