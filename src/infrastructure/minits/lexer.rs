//! MiniTs lexer.

use std::path::Path;

use crate::domain::entities::{Diagnostic, Position};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub pos: Position,
    pub text: String,
    /// A line break separates this token from the previous one
    pub after_newline: bool,
    /// Delimiter of a string literal
    pub quote: Option<char>,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Const,
    Let,
    Var,
    True,
    False,
    Identifier,
    /// `text` holds the unquoted value
    String,
    Number,
    Colon,
    Equals,
    Semicolon,
    Eof,
}

impl TokenKind {
    pub fn is_declaration_keyword(self) -> bool {
        matches!(self, TokenKind::Const | TokenKind::Let | TokenKind::Var)
    }
}

pub struct Lexer<'a> {
    file_name: &'a Path,
    chars: Vec<char>,
    index: usize,
    line: usize,
    column: usize,
    saw_newline: bool,
    diagnostics: Vec<Diagnostic>,
}

impl<'a> Lexer<'a> {
    pub fn new(file_name: &'a Path, source: &str) -> Self {
        Self {
            file_name,
            chars: source.chars().collect(),
            index: 0,
            line: 1,
            column: 1,
            saw_newline: false,
            diagnostics: Vec::new(),
        }
    }

    /// Tokenize the whole input. The last token is always `Eof`.
    pub fn tokenize(mut self) -> (Vec<Token>, Vec<Diagnostic>) {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token();
            let done = token.kind == TokenKind::Eof;
            tokens.push(token);
            if done {
                break;
            }
        }
        (tokens, self.diagnostics)
    }

    fn next_token(&mut self) -> Token {
        loop {
            self.skip_trivia();
            let pos = self.position();
            let Some(c) = self.peek() else {
                return self.token(TokenKind::Eof, pos, String::new());
            };

            match c {
                ':' => {
                    self.bump();
                    return self.token(TokenKind::Colon, pos, ":".to_string());
                }
                '=' => {
                    self.bump();
                    return self.token(TokenKind::Equals, pos, "=".to_string());
                }
                ';' => {
                    self.bump();
                    return self.token(TokenKind::Semicolon, pos, ";".to_string());
                }
                '"' | '\'' => return self.string(c, pos),
                c if c.is_ascii_digit() => return self.number(pos),
                c if is_identifier_start(c) => return self.word(pos),
                _ => {
                    self.bump();
                    self.diagnostics.push(Diagnostic::error_at(
                        self.file_name,
                        pos,
                        1127,
                        "Invalid character.",
                    ));
                }
            }
        }
    }

    fn token(&mut self, kind: TokenKind, pos: Position, text: String) -> Token {
        let after_newline = std::mem::take(&mut self.saw_newline);
        Token {
            kind,
            pos,
            text,
            after_newline,
            quote: None,
        }
    }

    fn skip_trivia(&mut self) {
        while let Some(c) = self.peek() {
            if c == '\n' {
                self.saw_newline = true;
                self.bump();
            } else if c.is_whitespace() {
                self.bump();
            } else if c == '/' && self.peek_at(1) == Some('/') {
                while let Some(c) = self.peek() {
                    if c == '\n' {
                        break;
                    }
                    self.bump();
                }
            } else {
                break;
            }
        }
    }

    fn string(&mut self, quote: char, pos: Position) -> Token {
        self.bump();
        let mut value = String::new();
        loop {
            match self.peek() {
                None | Some('\n') => {
                    self.diagnostics.push(Diagnostic::error_at(
                        self.file_name,
                        self.position(),
                        1002,
                        "Unterminated string literal.",
                    ));
                    break;
                }
                Some(c) if c == quote => {
                    self.bump();
                    break;
                }
                Some('\\') => {
                    self.bump();
                    if let Some(escaped) = self.bump() {
                        value.push(match escaped {
                            'n' => '\n',
                            't' => '\t',
                            'r' => '\r',
                            '0' => '\0',
                            other => other,
                        });
                    }
                }
                Some(c) => {
                    value.push(c);
                    self.bump();
                }
            }
        }
        Token {
            quote: Some(quote),
            ..self.token(TokenKind::String, pos, value)
        }
    }

    fn number(&mut self, pos: Position) -> Token {
        let mut text = String::new();
        let mut seen_dot = false;
        while let Some(c) = self.peek() {
            if c.is_ascii_digit() || c == '_' {
                text.push(c);
            } else if c == '.' && !seen_dot && self.peek_at(1).is_some_and(|n| n.is_ascii_digit()) {
                seen_dot = true;
                text.push(c);
            } else {
                break;
            }
            self.bump();
        }
        self.token(TokenKind::Number, pos, text)
    }

    fn word(&mut self, pos: Position) -> Token {
        let mut text = String::new();
        while let Some(c) = self.peek() {
            if !is_identifier_part(c) {
                break;
            }
            text.push(c);
            self.bump();
        }
        let kind = match text.as_str() {
            "const" => TokenKind::Const,
            "let" => TokenKind::Let,
            "var" => TokenKind::Var,
            "true" => TokenKind::True,
            "false" => TokenKind::False,
            _ => TokenKind::Identifier,
        };
        self.token(kind, pos, text)
    }

    fn position(&self) -> Position {
        Position::new(self.line, self.column)
    }

    fn peek(&self) -> Option<char> {
        self.chars.get(self.index).copied()
    }

    fn peek_at(&self, offset: usize) -> Option<char> {
        self.chars.get(self.index + offset).copied()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.index += 1;
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(c)
    }
}

fn is_identifier_start(c: char) -> bool {
    c == '_' || c == '$' || c.is_alphabetic()
}

fn is_identifier_part(c: char) -> bool {
    is_identifier_start(c) || c.is_alphanumeric()
}
