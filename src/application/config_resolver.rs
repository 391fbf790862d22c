//! Config Resolver
//!
//! Reads the project configuration once and interprets it against any
//! file system view. The pipeline interprets the same raw configuration
//! twice: against the real file system and against the overlay.

use std::path::Path;

use crate::domain::entities::{RawConfig, ResolvedConfig};
use crate::domain::ports::{FileSystem, Frontend};
use crate::domain::value_objects::path::absolutize;
use crate::error::{RecheckError, RecheckResult};

pub struct ConfigResolver<'a, FE: Frontend> {
    frontend: &'a FE,
}

impl<'a, FE: Frontend> ConfigResolver<'a, FE> {
    pub fn new(frontend: &'a FE) -> Self {
        Self { frontend }
    }

    /// Read and parse the configuration file.
    ///
    /// Relative paths resolve against the file system's current directory.
    pub fn load(&self, config_path: &Path, fs: &dyn FileSystem) -> RecheckResult<RawConfig> {
        let absolute = absolutize(&fs.current_directory(), config_path);
        if !fs.file_exists(&absolute) {
            return Err(RecheckError::ConfigNotFound {
                path: config_path.to_path_buf(),
            });
        }
        let Some(text) = fs.read_file(&absolute) else {
            return Err(RecheckError::ConfigUnreadable { path: absolute });
        };

        let value = self
            .frontend
            .parse_config(&absolute, &text)
            .map_err(|diagnostic| RecheckError::ConfigParse {
                path: absolute.clone(),
                diagnostic,
            })?;

        tracing::debug!("loaded configuration {}", absolute.display());
        Ok(RawConfig::new(absolute, value))
    }

    /// Interpret `raw` into files and options, listing files through `fs`
    pub fn interpret(
        &self,
        raw: &RawConfig,
        fs: &dyn FileSystem,
    ) -> RecheckResult<ResolvedConfig<FE::Options>> {
        let parsed = self.frontend.interpret_config(raw, fs);
        if !parsed.errors.is_empty() {
            return Err(RecheckError::ConfigValidation {
                diagnostics: parsed.errors,
            });
        }
        tracing::debug!(
            "{} resolved to {} file(s)",
            raw.path().display(),
            parsed.file_names.len()
        );
        Ok(ResolvedConfig::new(raw, parsed.file_names, parsed.options))
    }

    pub fn resolve(
        &self,
        config_path: &Path,
        fs: &dyn FileSystem,
    ) -> RecheckResult<ResolvedConfig<FE::Options>> {
        let raw = self.load(config_path, fs)?;
        self.interpret(&raw, fs)
    }
}
