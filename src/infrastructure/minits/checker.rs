//! MiniTs program and type checker
//!
//! All root files share one global scope, like TypeScript scripts without
//! imports or exports.

use std::collections::{HashMap, HashSet};
use std::fmt;
use std::path::{Path, PathBuf};

use super::ast::{Expression, SourceFile, VariableDeclaration};
use super::config::CompilerOptions;
use super::parser::parse_source_file;
use crate::domain::entities::Diagnostic;
use crate::domain::ports::{FileSystem, SourceUnit};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Type {
    String,
    Number,
    Boolean,
    Any,
}

impl Type {
    fn from_name(name: &str) -> Option<Type> {
        match name {
            "string" => Some(Type::String),
            "number" => Some(Type::Number),
            "boolean" => Some(Type::Boolean),
            "any" => Some(Type::Any),
            _ => None,
        }
    }

    fn is_assignable_to(self, target: Type) -> bool {
        self == target || self == Type::Any || target == Type::Any
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Type::String => "string",
            Type::Number => "number",
            Type::Boolean => "boolean",
            Type::Any => "any",
        })
    }
}

/// A set of parsed root files plus the options they were compiled with
#[derive(Debug)]
pub struct Program {
    files: Vec<SourceFile>,
    options: CompilerOptions,
}

impl Program {
    /// Parse every readable root file through `fs`, in the given order.
    pub fn create(file_names: &[PathBuf], options: &CompilerOptions, fs: &dyn FileSystem) -> Self {
        let mut files = Vec::with_capacity(file_names.len());
        for file_name in file_names {
            match fs.read_file(file_name) {
                Some(text) => files.push(parse_source_file(file_name, &text, options.target)),
                None => tracing::debug!("root file {} is unreadable, skipping", file_name.display()),
            }
        }
        Self {
            files,
            options: options.clone(),
        }
    }

    pub fn source_files(&self) -> &[SourceFile] {
        &self.files
    }

    pub fn options(&self) -> &CompilerOptions {
        &self.options
    }

    pub fn syntactic_diagnostics(&self) -> Vec<Diagnostic> {
        self.files
            .iter()
            .flat_map(|file| file.parse_diagnostics.iter().cloned())
            .collect()
    }

    pub fn semantic_diagnostics(&self) -> Vec<Diagnostic> {
        Checker::new(&self.files).check()
    }
}

struct Symbol<'a> {
    file: &'a Path,
    declaration: &'a VariableDeclaration,
}

struct Checker<'a> {
    files: &'a [SourceFile],
    globals: HashMap<&'a str, Vec<Symbol<'a>>>,
}

impl<'a> Checker<'a> {
    fn new(files: &'a [SourceFile]) -> Self {
        let mut globals: HashMap<&'a str, Vec<Symbol<'a>>> = HashMap::new();
        for file in files {
            for declaration in file.declarations() {
                globals
                    .entry(declaration.name.text.as_str())
                    .or_default()
                    .push(Symbol {
                        file: file.file_name(),
                        declaration,
                    });
            }
        }
        Self { files, globals }
    }

    fn check(&self) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();
        for file in self.files {
            let mut file_diagnostics = Vec::new();
            for declaration in file.declarations() {
                self.check_declaration(file.file_name(), declaration, &mut file_diagnostics);
            }
            file_diagnostics.sort_by_key(|d: &Diagnostic| d.start);
            diagnostics.extend(file_diagnostics);
        }
        diagnostics
    }

    fn check_declaration(
        &self,
        file: &Path,
        declaration: &VariableDeclaration,
        out: &mut Vec<Diagnostic>,
    ) {
        let name = &declaration.name;
        if self.is_redeclared(&name.text) {
            out.push(Diagnostic::error_at(
                file,
                name.pos,
                2451,
                format!("Cannot redeclare block-scoped variable '{}'.", name.text),
            ));
        }

        let declared = match &declaration.type_annotation {
            Some(annotation) => match Type::from_name(&annotation.text) {
                Some(ty) => Some(ty),
                None => {
                    out.push(Diagnostic::error_at(
                        file,
                        annotation.pos,
                        2304,
                        format!("Cannot find name '{}'.", annotation.text),
                    ));
                    None
                }
            },
            None => None,
        };

        let Some(initializer) = &declaration.initializer else {
            return;
        };

        let actual = match initializer {
            Expression::Identifier(ident) => {
                if !self.globals.contains_key(ident.text.as_str()) {
                    out.push(Diagnostic::error_at(
                        file,
                        ident.pos,
                        2304,
                        format!("Cannot find name '{}'.", ident.text),
                    ));
                    return;
                }
                let mut visiting = HashSet::new();
                visiting.insert(name.text.as_str());
                self.type_of_name(&ident.text, &mut visiting)
            }
            literal => literal_type(literal),
        };

        if let Some(declared) = declared {
            if !actual.is_assignable_to(declared) {
                out.push(Diagnostic::error_at(
                    file,
                    name.pos,
                    2322,
                    format!("Type '{actual}' is not assignable to type '{declared}'."),
                ));
            }
        }
    }

    fn is_redeclared(&self, name: &str) -> bool {
        match self.globals.get(name) {
            Some(symbols) if symbols.len() > 1 => symbols
                .iter()
                .any(|s| s.declaration.kind.is_block_scoped()),
            _ => false,
        }
    }

    /// Type of the first declaration of `name`; cycles and unknown names are `any`
    fn type_of_name<'n>(&'n self, name: &'n str, visiting: &mut HashSet<&'n str>) -> Type {
        if !visiting.insert(name) {
            return Type::Any;
        }
        let Some(symbol) = self.globals.get(name).and_then(|symbols| symbols.first()) else {
            return Type::Any;
        };
        tracing::trace!("resolving '{}' declared in {}", name, symbol.file.display());
        let declaration = symbol.declaration;
        if let Some(ty) = declaration
            .type_annotation
            .as_ref()
            .and_then(|annotation| Type::from_name(&annotation.text))
        {
            return ty;
        }
        match &declaration.initializer {
            Some(Expression::Identifier(ident)) => self.type_of_name(&ident.text, visiting),
            Some(literal) => literal_type(literal),
            None => Type::Any,
        }
    }
}

fn literal_type(expression: &Expression) -> Type {
    match expression {
        Expression::String { .. } => Type::String,
        Expression::Number { .. } => Type::Number,
        Expression::Boolean { .. } => Type::Boolean,
        Expression::Identifier(_) => Type::Any,
    }
}
