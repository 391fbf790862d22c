//! MiniTs parser.
//!
//! Recovers from errors by skipping to the next declaration keyword so that
//! one bad statement does not hide the rest of the file.

use std::path::Path;

use super::ast::{DeclarationKind, Expression, Identifier, SourceFile, Statement, VariableDeclaration};
use super::lexer::{Lexer, Token, TokenKind};
use crate::domain::entities::Diagnostic;
use crate::domain::value_objects::LanguageLevel;

pub fn parse_source_file(file_name: &Path, source: &str, level: LanguageLevel) -> SourceFile {
    let (tokens, mut diagnostics) = Lexer::new(file_name, source).tokenize();
    let mut parser = Parser {
        file_name,
        tokens,
        index: 0,
        diagnostics: Vec::new(),
    };
    let statements = parser.parse_statements();
    diagnostics.extend(parser.diagnostics);
    diagnostics.sort_by_key(|d| d.start);
    SourceFile::new(file_name, level, statements, diagnostics)
}

struct Parser<'a> {
    file_name: &'a Path,
    tokens: Vec<Token>,
    index: usize,
    diagnostics: Vec<Diagnostic>,
}

impl Parser<'_> {
    fn parse_statements(&mut self) -> Vec<Statement> {
        let mut statements = Vec::new();
        while self.peek().kind != TokenKind::Eof {
            let kind = self.peek().kind;
            match kind {
                TokenKind::Semicolon => {
                    self.advance();
                }
                kind if kind.is_declaration_keyword() => {
                    if let Some(declaration) = self.parse_variable_declaration() {
                        statements.push(Statement::Variable(declaration));
                    } else {
                        self.recover();
                    }
                }
                _ => {
                    self.error_at_current(1128, "Declaration or statement expected.");
                    self.advance();
                    self.recover();
                }
            }
        }
        statements
    }

    fn parse_variable_declaration(&mut self) -> Option<VariableDeclaration> {
        let keyword = self.advance();
        let kind = match keyword.kind {
            TokenKind::Const => DeclarationKind::Const,
            TokenKind::Let => DeclarationKind::Let,
            _ => DeclarationKind::Var,
        };

        let name = self.expect_identifier()?;

        let type_annotation = if self.peek().kind == TokenKind::Colon {
            self.advance();
            Some(self.expect_identifier()?)
        } else {
            None
        };

        let initializer = if self.peek().kind == TokenKind::Equals {
            self.advance();
            Some(self.parse_expression()?)
        } else {
            if kind == DeclarationKind::Const {
                self.diagnostics.push(Diagnostic::error_at(
                    self.file_name,
                    name.pos,
                    1155,
                    "'const' declarations must be initialized.",
                ));
            }
            None
        };

        self.parse_statement_end()?;

        Some(VariableDeclaration {
            kind,
            keyword_pos: keyword.pos,
            name,
            type_annotation,
            initializer,
        })
    }

    fn parse_expression(&mut self) -> Option<Expression> {
        let token = self.peek().clone();
        let expression = match token.kind {
            TokenKind::String => Expression::String {
                value: token.text,
                quote: token.quote.unwrap_or('"'),
                pos: token.pos,
            },
            TokenKind::Number => Expression::Number {
                text: token.text,
                pos: token.pos,
            },
            TokenKind::True | TokenKind::False => Expression::Boolean {
                value: token.kind == TokenKind::True,
                pos: token.pos,
            },
            TokenKind::Identifier => Expression::Identifier(Identifier {
                text: token.text,
                pos: token.pos,
            }),
            _ => {
                self.error_at_current(1109, "Expression expected.");
                return None;
            }
        };
        self.advance();
        Some(expression)
    }

    /// Accept `;`, a line break, or end of input
    fn parse_statement_end(&mut self) -> Option<()> {
        let (kind, after_newline) = {
            let next = self.peek();
            (next.kind, next.after_newline)
        };
        match kind {
            TokenKind::Semicolon => {
                self.advance();
                Some(())
            }
            TokenKind::Eof => Some(()),
            _ if after_newline => Some(()),
            _ => {
                self.error_at_current(1005, "';' expected.");
                None
            }
        }
    }

    fn expect_identifier(&mut self) -> Option<Identifier> {
        let token = self.peek().clone();
        if token.kind == TokenKind::Identifier {
            self.advance();
            Some(Identifier {
                text: token.text,
                pos: token.pos,
            })
        } else {
            self.error_at_current(1003, "Identifier expected.");
            None
        }
    }

    /// Skip to the next token that can start a statement
    fn recover(&mut self) {
        loop {
            let kind = self.peek().kind;
            match kind {
                TokenKind::Eof => return,
                kind if kind.is_declaration_keyword() => return,
                TokenKind::Semicolon => {
                    self.advance();
                    return;
                }
                _ => {
                    self.advance();
                }
            }
        }
    }

    fn error_at_current(&mut self, code: u32, message: &str) {
        let pos = self.peek().pos;
        self.diagnostics
            .push(Diagnostic::error_at(self.file_name, pos, code, message));
    }

    fn peek(&self) -> &Token {
        // Eof is always the last token, so clamping keeps us on it.
        &self.tokens[self.index.min(self.tokens.len() - 1)]
    }

    fn advance(&mut self) -> Token {
        let token = self.peek().clone();
        if self.index < self.tokens.len() - 1 {
            self.index += 1;
        }
        token
    }
}
