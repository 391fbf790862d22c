//! Recheck Use Case
//!
//! Orchestrates a run:
//! 1. Load and interpret the configuration against the real file system
//! 2. Allocate a shadow directory
//! 3. Transform every project file into the shadow directory
//! 4. Interpret the configuration again through the substituting overlay
//! 5. Type check the transformed project
//! 6. Release the shadow directory

use std::path::Path;

use crate::application::{ConfigResolver, RecheckStage, TransformStage};
use crate::domain::entities::Diagnostic;
use crate::domain::ports::{BoxedTransformer, FileSystem, Frontend};
use crate::domain::services::{format_diagnostic, format_diagnostics, FormatHost};
use crate::error::{RecheckError, RecheckResult};
use crate::infrastructure::fs::SubstitutingFs;

use super::options::RecheckOptions;
use super::report::RecheckReport;

/// Recheck use case, parameterized by the front end and the file system
pub struct RecheckUseCase<FE, FS>
where
    FE: Frontend,
    FS: FileSystem,
{
    frontend: FE,
    file_system: FS,
    options: RecheckOptions,
}

impl<FE, FS> RecheckUseCase<FE, FS>
where
    FE: Frontend,
    FS: FileSystem,
{
    pub fn new(frontend: FE, file_system: FS) -> Self {
        Self {
            frontend,
            file_system,
            options: RecheckOptions::default(),
        }
    }

    pub fn with_options(mut self, options: RecheckOptions) -> Self {
        self.options = options;
        self
    }

    pub fn file_system(&self) -> &FS {
        &self.file_system
    }

    /// Run the pipeline; configuration problems and a missing shadow
    /// directory are the only errors.
    pub fn execute(
        &self,
        config_path: impl AsRef<Path>,
        transformers: &[BoxedTransformer<FE>],
    ) -> RecheckResult<RecheckReport> {
        let config_path = config_path.as_ref();
        let resolver = ConfigResolver::new(&self.frontend);

        let raw = resolver.load(config_path, &self.file_system)?;
        let resolved = resolver.interpret(&raw, &self.file_system)?;

        let shadow_directory = self
            .file_system
            .create_temporary_directory()
            .map_err(RecheckError::ShadowDirectory)?;
        tracing::debug!("shadow directory {}", shadow_directory.display());

        let outcome = TransformStage::new(&self.frontend, &self.file_system).run(
            &resolved,
            &shadow_directory,
            transformers,
        );

        let diagnostics = {
            let overlay = SubstitutingFs::new(&self.file_system, &outcome.substitutions);
            resolver
                .interpret(&raw, &overlay)
                .map(|transformed| RecheckStage::new(&self.frontend).run(&transformed, &overlay))
        };

        self.release(&shadow_directory);

        Ok(RecheckReport {
            shadow_directory,
            substitutions: outcome.substitutions,
            transform_diagnostics: outcome.diagnostics,
            diagnostics: diagnostics?,
        })
    }

    /// Run the pipeline and format the result as text.
    ///
    /// A fatal error yields a single entry; otherwise there is one entry per
    /// diagnostic and a clean run yields none.
    pub fn recheck(
        &self,
        config_path: impl AsRef<Path>,
        transformers: &[BoxedTransformer<FE>],
    ) -> Vec<String> {
        let host = FormatHost::for_file_system(&self.file_system);
        match self.execute(config_path, transformers) {
            Ok(report) => {
                let diagnostics: Vec<Diagnostic> = report.all_diagnostics().cloned().collect();
                format_diagnostics(&diagnostics, &host)
            }
            Err(e) => vec![format_error(&e, &host)],
        }
    }

    fn release(&self, shadow_directory: &Path) {
        if self.options.keep_shadow_directory {
            tracing::info!("keeping shadow directory {}", shadow_directory.display());
            return;
        }
        if let Err(e) = self.file_system.remove_temporary_directory(shadow_directory) {
            tracing::warn!(
                "failed to remove shadow directory {}: {}",
                shadow_directory.display(),
                e
            );
        }
    }
}

fn format_error(error: &RecheckError, host: &FormatHost) -> String {
    match error.diagnostics() {
        [] => error.to_string(),
        diagnostics => diagnostics
            .iter()
            .map(|d| format_diagnostic(d, host))
            .collect(),
    }
}
