//! MiniTs syntax tree

use std::path::{Path, PathBuf};

use crate::domain::entities::{Diagnostic, Position};
use crate::domain::ports::SourceUnit;
use crate::domain::value_objects::LanguageLevel;

#[derive(Debug, Clone, PartialEq)]
pub struct SourceFile {
    file_name: PathBuf,
    pub language_level: LanguageLevel,
    pub statements: Vec<Statement>,
    /// Syntax errors found while parsing this file
    pub parse_diagnostics: Vec<Diagnostic>,
}

impl SourceFile {
    pub fn new(
        file_name: impl Into<PathBuf>,
        language_level: LanguageLevel,
        statements: Vec<Statement>,
        parse_diagnostics: Vec<Diagnostic>,
    ) -> Self {
        Self {
            file_name: file_name.into(),
            language_level,
            statements,
            parse_diagnostics,
        }
    }

    /// Same content written under another name
    pub fn renamed(mut self, file_name: impl Into<PathBuf>) -> Self {
        self.file_name = file_name.into();
        self
    }

    pub fn declarations(&self) -> impl Iterator<Item = &VariableDeclaration> {
        self.statements.iter().map(|statement| match statement {
            Statement::Variable(declaration) => declaration,
        })
    }
}

impl SourceUnit for SourceFile {
    fn file_name(&self) -> &Path {
        &self.file_name
    }

    fn parse_diagnostics(&self) -> &[Diagnostic] {
        &self.parse_diagnostics
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    Variable(VariableDeclaration),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeclarationKind {
    Const,
    Let,
    Var,
}

impl DeclarationKind {
    pub fn keyword(self) -> &'static str {
        match self {
            DeclarationKind::Const => "const",
            DeclarationKind::Let => "let",
            DeclarationKind::Var => "var",
        }
    }

    pub fn is_block_scoped(self) -> bool {
        !matches!(self, DeclarationKind::Var)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identifier {
    pub text: String,
    pub pos: Position,
}

#[derive(Debug, Clone, PartialEq)]
pub struct VariableDeclaration {
    pub kind: DeclarationKind,
    pub keyword_pos: Position,
    pub name: Identifier,
    /// Name of the annotated type, resolved by the checker
    pub type_annotation: Option<Identifier>,
    pub initializer: Option<Expression>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    /// `value` is unescaped; `quote` is the delimiter it was written with
    String {
        value: String,
        quote: char,
        pos: Position,
    },
    /// Source text of the literal, printed back verbatim
    Number { text: String, pos: Position },
    Boolean { value: bool, pos: Position },
    Identifier(Identifier),
}

impl Expression {
    pub fn pos(&self) -> Position {
        match self {
            Expression::String { pos, .. }
            | Expression::Number { pos, .. }
            | Expression::Boolean { pos, .. } => *pos,
            Expression::Identifier(ident) => ident.pos,
        }
    }
}
