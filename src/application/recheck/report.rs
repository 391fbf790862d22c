//! Recheck Report

use std::path::PathBuf;

use crate::domain::entities::{Diagnostic, SubstitutionTable};

/// Outcome of a recheck run that got past configuration
#[derive(Debug)]
pub struct RecheckReport {
    /// Where the transformed files were written
    pub shadow_directory: PathBuf,
    pub substitutions: SubstitutionTable,
    /// Reported by transformers or by failed writes
    pub transform_diagnostics: Vec<Diagnostic>,
    /// Reported by type checking the transformed project
    pub diagnostics: Vec<Diagnostic>,
}

impl RecheckReport {
    /// Transform diagnostics first, then recheck diagnostics
    pub fn all_diagnostics(&self) -> impl Iterator<Item = &Diagnostic> {
        self.transform_diagnostics.iter().chain(&self.diagnostics)
    }

    pub fn is_clean(&self) -> bool {
        self.transform_diagnostics.is_empty() && self.diagnostics.is_empty()
    }

    pub fn error_count(&self) -> usize {
        self.all_diagnostics().filter(|d| d.is_error()).count()
    }
}
