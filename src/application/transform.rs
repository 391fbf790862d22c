//! Transform Stage
//!
//! Phase one of a recheck run: every project file is parsed, pushed through
//! the transformer chain, printed, and written below the shadow directory.
//! Each written output is recorded in the substitution table. Syntax errors
//! of the input are reported here, since the printed copy no longer has them.

use std::path::Path;

use crate::domain::entities::{
    Diagnostic, DiagnosticCategory, ResolvedConfig, Substitute, SubstitutionTable,
};
use crate::domain::ports::{BoxedTransformer, FileSystem, Frontend, SourceUnit};
use crate::domain::value_objects::path::shadow_path;
use crate::domain::value_objects::LanguageLevel;

/// Everything phase one produced
#[derive(Debug, Default)]
pub struct TransformOutcome {
    pub substitutions: SubstitutionTable,
    pub diagnostics: Vec<Diagnostic>,
}

pub struct TransformStage<'a, FE: Frontend, FS: FileSystem + ?Sized> {
    frontend: &'a FE,
    file_system: &'a FS,
}

impl<'a, FE: Frontend, FS: FileSystem + ?Sized> TransformStage<'a, FE, FS> {
    pub fn new(frontend: &'a FE, file_system: &'a FS) -> Self {
        Self {
            frontend,
            file_system,
        }
    }

    pub fn run(
        &self,
        resolved: &ResolvedConfig<FE::Options>,
        shadow_dir: &Path,
        transformers: &[BoxedTransformer<FE>],
    ) -> TransformOutcome {
        let mut outcome = TransformOutcome::default();

        for file_name in resolved.file_names() {
            let Some(text) = self.file_system.read_file(file_name) else {
                tracing::debug!("skipping unreadable file {}", file_name.display());
                continue;
            };

            let source = self
                .frontend
                .parse_source(file_name, &text, LanguageLevel::LATEST);
            outcome
                .diagnostics
                .extend(source.parse_diagnostics().iter().cloned());
            let output = self
                .frontend
                .transform(source, transformers, resolved.options());
            outcome.diagnostics.extend(output.diagnostics);

            for transformed in &output.transformed {
                self.write_output(resolved.root_dir(), shadow_dir, transformed, &mut outcome);
            }
        }

        tracing::info!(
            "transformed {} file(s) into {} output(s)",
            resolved.file_names().len(),
            outcome.substitutions.len()
        );
        outcome
    }

    fn write_output(
        &self,
        root: &Path,
        shadow_dir: &Path,
        transformed: &FE::SourceFile,
        outcome: &mut TransformOutcome,
    ) {
        let from_path = transformed.file_name();
        let to_path = shadow_path(shadow_dir, root, from_path);

        // First output under a name wins
        if outcome.substitutions.contains(from_path) {
            tracing::warn!("duplicate output {}", from_path.display());
            outcome.diagnostics.push(Diagnostic::global(
                DiagnosticCategory::Error,
                5056,
                format!(
                    "Cannot write file '{}' because it would be overwritten by multiple input files.",
                    to_path.display()
                ),
            ));
            return;
        }

        let printed = self.frontend.print(transformed);
        match self.file_system.write_file(&to_path, &printed) {
            Ok(()) => {
                tracing::debug!("{} -> {}", from_path.display(), to_path.display());
                outcome
                    .substitutions
                    .push(Substitute::new(from_path, to_path));
            }
            Err(e) => {
                tracing::warn!("failed to write {}: {}", to_path.display(), e);
                outcome.diagnostics.push(Diagnostic::global(
                    DiagnosticCategory::Error,
                    5033,
                    format!("Could not write file '{}': {}.", to_path.display(), e),
                ));
            }
        }
    }
}
