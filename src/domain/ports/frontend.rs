//! Frontend port - the compiler capability the pipeline drives
//!
//! Parsing, printing, configuration interpretation and type checking are
//! supplied by a front end. The pipeline only moves files and diagnostics
//! between these operations, so any compiler can be plugged in.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::domain::entities::{Diagnostic, ParsedConfig, RawConfig};
use crate::domain::ports::FileSystem;
use crate::domain::value_objects::LanguageLevel;

/// A parsed source file that knows which file it will be written as
pub trait SourceUnit {
    fn file_name(&self) -> &Path;

    /// Syntax errors found while parsing the unit
    fn parse_diagnostics(&self) -> &[Diagnostic] {
        &[]
    }
}

/// State shared with transformers while one input file is transformed
pub struct TransformContext<'a, O> {
    options: &'a O,
    file_name: PathBuf,
    diagnostics: Vec<Diagnostic>,
}

impl<'a, O> TransformContext<'a, O> {
    pub fn new(file_name: impl Into<PathBuf>, options: &'a O) -> Self {
        Self {
            options,
            file_name: file_name.into(),
            diagnostics: Vec::new(),
        }
    }

    /// Compiler options of the project being transformed
    pub fn options(&self) -> &O {
        self.options
    }

    /// Name of the unit currently handed to the transformer
    pub fn file_name(&self) -> &Path {
        &self.file_name
    }

    pub fn report(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    fn enter(&mut self, file_name: &Path) {
        self.file_name = file_name.to_path_buf();
    }

    fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.diagnostics
    }
}

/// A whole-file transformation.
///
/// Returning an empty vector drops the file; returning several splits it.
pub trait Transformer<A, O> {
    fn transform(&self, unit: A, context: &mut TransformContext<'_, O>) -> Vec<A>;
}

impl<A, O, F> Transformer<A, O> for F
where
    F: Fn(A, &mut TransformContext<'_, O>) -> Vec<A>,
{
    fn transform(&self, unit: A, context: &mut TransformContext<'_, O>) -> Vec<A> {
        self(unit, context)
    }
}

/// Boxed transformer for front end `F`
pub type BoxedTransformer<F> =
    Box<dyn Transformer<<F as Frontend>::SourceFile, <F as Frontend>::Options>>;

/// Result of running the transformer chain over one input file
#[derive(Debug)]
pub struct TransformOutput<A> {
    pub transformed: Vec<A>,
    pub diagnostics: Vec<Diagnostic>,
}

/// Compiler front end capability set
pub trait Frontend {
    type SourceFile: SourceUnit;
    type Options: Clone + fmt::Debug;
    type Program;

    /// Parse configuration text into structured configuration.
    ///
    /// The error diagnostic is surfaced to the user verbatim.
    fn parse_config(&self, path: &Path, text: &str) -> Result<serde_json::Value, Diagnostic>;

    /// Turn structured configuration into files and options, enumerating
    /// files through `fs`.
    fn interpret_config(&self, raw: &RawConfig, fs: &dyn FileSystem)
        -> ParsedConfig<Self::Options>;

    fn parse_source(&self, file_name: &Path, text: &str, level: LanguageLevel) -> Self::SourceFile;

    fn print(&self, source: &Self::SourceFile) -> String;

    /// Build a program from root files, reading them through `fs`
    fn create_program(
        &self,
        file_names: &[PathBuf],
        options: &Self::Options,
        fs: &dyn FileSystem,
    ) -> Self::Program;

    fn semantic_diagnostics(&self, program: &Self::Program) -> Vec<Diagnostic>;

    fn syntactic_diagnostics(&self, program: &Self::Program) -> Vec<Diagnostic>;

    /// Run `transformers` in order; each one sees every output of the
    /// previous one.
    fn transform(
        &self,
        source: Self::SourceFile,
        transformers: &[BoxedTransformer<Self>],
        options: &Self::Options,
    ) -> TransformOutput<Self::SourceFile> {
        let mut context = TransformContext::new(source.file_name(), options);
        let mut current = vec![source];
        for transformer in transformers {
            let mut next = Vec::with_capacity(current.len());
            for unit in current {
                context.enter(unit.file_name());
                next.extend(transformer.transform(unit, &mut context));
            }
            current = next;
        }
        TransformOutput {
            transformed: current,
            diagnostics: context.into_diagnostics(),
        }
    }
}
