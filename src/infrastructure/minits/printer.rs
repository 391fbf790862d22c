//! MiniTs printer
//!
//! Tokens that carry a source position are printed at that position, so a
//! reparsed unit reports diagnostics where the original text would. Nodes
//! whose position is already behind the output (moved or synthesized by a
//! transformer) fall back to the canonical layout: one statement per line
//! and single spaces. Every statement ends with `;`, LF line endings.

use super::ast::{Expression, SourceFile, Statement, VariableDeclaration};
use crate::domain::entities::Position;

pub fn print_source_file(file: &SourceFile) -> String {
    let mut printer = Printer::new();
    for statement in &file.statements {
        match statement {
            Statement::Variable(declaration) => printer.declaration(declaration),
        }
    }
    printer.finish()
}

/// Separator written before a positioned token: the canonical form and the
/// shortest form that still lexes the same
struct Lead {
    canonical: &'static str,
    minimal: &'static str,
}

const SPACE: Lead = Lead {
    canonical: " ",
    minimal: " ",
};
const COLON: Lead = Lead {
    canonical: ": ",
    minimal: ":",
};
const EQUALS: Lead = Lead {
    canonical: " = ",
    minimal: "=",
};

struct Printer {
    out: String,
    cursor: Position,
}

impl Printer {
    fn new() -> Self {
        Self {
            out: String::new(),
            cursor: Position::new(1, 1),
        }
    }

    fn finish(mut self) -> String {
        if !self.out.is_empty() {
            self.out.push('\n');
        }
        self.out
    }

    fn declaration(&mut self, declaration: &VariableDeclaration) {
        self.statement_start(declaration.keyword_pos);
        self.write(declaration.kind.keyword());
        self.place(&SPACE, declaration.name.pos);
        self.write(&declaration.name.text);
        if let Some(annotation) = &declaration.type_annotation {
            self.place(&COLON, annotation.pos);
            self.write(&annotation.text);
        }
        if let Some(initializer) = &declaration.initializer {
            self.place(&EQUALS, initializer.pos());
            self.expression(initializer);
        }
        self.write(";");
    }

    fn expression(&mut self, expression: &Expression) {
        match expression {
            Expression::String { value, quote, .. } => {
                let mut text = String::with_capacity(value.len() + 2);
                text.push(*quote);
                for c in value.chars() {
                    match c {
                        '\\' => text.push_str("\\\\"),
                        '\n' => text.push_str("\\n"),
                        '\r' => text.push_str("\\r"),
                        '\0' => text.push_str("\\0"),
                        c if c == *quote => {
                            text.push('\\');
                            text.push(c);
                        }
                        c => text.push(c),
                    }
                }
                text.push(*quote);
                self.write(&text);
            }
            Expression::Number { text, .. } => self.write(text),
            Expression::Boolean { value, .. } => self.write(if *value { "true" } else { "false" }),
            Expression::Identifier(ident) => self.write(&ident.text),
        }
    }

    /// The previous statement always ends with `;`, so a statement may
    /// start right after it
    fn statement_start(&mut self, target: Position) {
        if target >= self.cursor {
            self.advance_to(target);
        } else if !self.out.is_empty() {
            self.newline();
        }
    }

    /// Write `lead` so that the next token starts at `target` if there is
    /// room for it
    fn place(&mut self, lead: &Lead, target: Position) {
        if target.line > self.cursor.line {
            self.write(lead.minimal.trim_end());
            self.advance_to(target);
            return;
        }
        let available = if target.line == self.cursor.line {
            target.column.saturating_sub(self.cursor.column)
        } else {
            0
        };
        if available >= lead.canonical.len() {
            self.pad(available - lead.canonical.len());
            self.write(lead.canonical);
        } else if available >= lead.minimal.len() {
            self.write(lead.minimal);
            self.pad(available - lead.minimal.len());
        } else {
            self.write(lead.canonical);
        }
    }

    fn advance_to(&mut self, target: Position) {
        while self.cursor.line < target.line {
            self.newline();
        }
        self.pad(target.column.saturating_sub(self.cursor.column));
    }

    fn newline(&mut self) {
        self.out.push('\n');
        self.cursor = Position::new(self.cursor.line + 1, 1);
    }

    fn pad(&mut self, count: usize) {
        self.out.push_str(&" ".repeat(count));
        self.cursor.column += count;
    }

    /// `text` never contains a line break
    fn write(&mut self, text: &str) {
        self.out.push_str(text);
        self.cursor.column += text.chars().count();
    }
}
