//! MiniTs - a small TypeScript-like front end
//!
//! Supports variable declarations with primitive type annotations across a
//! set of script files sharing one global scope. It is enough to drive the
//! recheck pipeline end to end and to report real type errors.

pub mod ast;
pub mod checker;
pub mod config;
pub mod lexer;
pub mod parser;
pub mod printer;
pub mod transformers;

use std::path::{Path, PathBuf};

use crate::domain::entities::{Diagnostic, ParsedConfig, RawConfig};
use crate::domain::ports::{FileSystem, Frontend};
use crate::domain::value_objects::LanguageLevel;

pub use ast::SourceFile;
pub use checker::Program;
pub use config::CompilerOptions;
pub use transformers::{rename_with_suffix, RenameWithSuffix};

#[derive(Debug, Clone, Copy, Default)]
pub struct MiniTs;

impl Frontend for MiniTs {
    type SourceFile = SourceFile;
    type Options = CompilerOptions;
    type Program = Program;

    fn parse_config(&self, path: &Path, text: &str) -> Result<serde_json::Value, Diagnostic> {
        config::parse_config_text(path, text)
    }

    fn interpret_config(&self, raw: &RawConfig, fs: &dyn FileSystem) -> ParsedConfig<CompilerOptions> {
        config::interpret(raw, fs)
    }

    fn parse_source(&self, file_name: &Path, text: &str, level: LanguageLevel) -> SourceFile {
        parser::parse_source_file(file_name, text, level)
    }

    fn print(&self, source: &SourceFile) -> String {
        printer::print_source_file(source)
    }

    fn create_program(
        &self,
        file_names: &[PathBuf],
        options: &CompilerOptions,
        fs: &dyn FileSystem,
    ) -> Program {
        Program::create(file_names, options, fs)
    }

    fn semantic_diagnostics(&self, program: &Program) -> Vec<Diagnostic> {
        program.semantic_diagnostics()
    }

    fn syntactic_diagnostics(&self, program: &Program) -> Vec<Diagnostic> {
        program.syntactic_diagnostics()
    }
}
