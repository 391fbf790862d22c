//! Recheck Stage
//!
//! Phase two: type check the transformed project through the overlay.

use crate::domain::entities::{Diagnostic, ResolvedConfig};
use crate::domain::ports::{FileSystem, Frontend};

pub struct RecheckStage<'a, FE: Frontend> {
    frontend: &'a FE,
}

impl<'a, FE: Frontend> RecheckStage<'a, FE> {
    pub fn new(frontend: &'a FE) -> Self {
        Self { frontend }
    }

    /// Semantic diagnostics followed by syntactic diagnostics
    pub fn run(&self, resolved: &ResolvedConfig<FE::Options>, fs: &dyn FileSystem) -> Vec<Diagnostic> {
        let program = self
            .frontend
            .create_program(resolved.file_names(), resolved.options(), fs);
        let mut diagnostics = self.frontend.semantic_diagnostics(&program);
        let semantic = diagnostics.len();
        diagnostics.extend(self.frontend.syntactic_diagnostics(&program));
        tracing::info!(
            "recheck found {} semantic and {} syntactic diagnostic(s)",
            semantic,
            diagnostics.len() - semantic
        );
        diagnostics
    }
}
