//! Ready-made MiniTs transformers

use std::path::{Path, PathBuf};

use super::ast::SourceFile;
use super::config::CompilerOptions;
use crate::domain::ports::{SourceUnit, TransformContext, Transformer};

/// Writes each file under a new name with `suffix` inserted before the
/// extension: `test.ts` becomes `test.renamed.ts` for suffix `renamed`.
#[derive(Debug, Clone)]
pub struct RenameWithSuffix {
    suffix: String,
}

pub fn rename_with_suffix(suffix: impl Into<String>) -> RenameWithSuffix {
    RenameWithSuffix {
        suffix: suffix.into(),
    }
}

impl RenameWithSuffix {
    pub fn renamed_path(&self, path: &Path) -> PathBuf {
        let stem = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        let name = match path.extension() {
            Some(ext) => format!("{}.{}.{}", stem, self.suffix, ext.to_string_lossy()),
            None => format!("{}.{}", stem, self.suffix),
        };
        path.with_file_name(name)
    }
}

impl Transformer<SourceFile, CompilerOptions> for RenameWithSuffix {
    fn transform(
        &self,
        unit: SourceFile,
        _context: &mut TransformContext<'_, CompilerOptions>,
    ) -> Vec<SourceFile> {
        let renamed = self.renamed_path(unit.file_name());
        vec![unit.renamed(renamed)]
    }
}
