//! Rendering of top-level declarations.

use std::fmt::Write;

/// Name of the permissive fallback validator declared in every prologue.
pub const DEFINED_NON_NULL_ANY_SCHEMA: &str = "definedNonNullAnySchema";

/// What a declaration introduces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeclarationKind {
    Type,
    Const,
    Function,
}

/// A named top-level declaration.
///
/// `name` is everything between the keyword and the body, so it may carry
/// a parameter list or a type annotation (`UserSchema(): z.ZodType<User>`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    pub export: bool,
    pub kind: DeclarationKind,
    pub name: String,
    /// Initializer for types and consts, statement block for functions.
    pub body: String,
}

impl Declaration {
    pub fn new(kind: DeclarationKind, name: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            export: false,
            kind,
            name: name.into(),
            body: body.into(),
        }
    }

    pub fn exported(mut self) -> Self {
        self.export = true;
        self
    }

    /// Render as source text terminated by a newline.
    pub fn render(&self) -> String {
        let mut out = String::new();
        if self.export {
            out.push_str("export ");
        }
        match self.kind {
            DeclarationKind::Type => {
                let _ = writeln!(out, "type {} = {};", self.name, self.body);
            }
            DeclarationKind::Const => {
                let _ = writeln!(out, "const {} = {};", self.name, self.body);
            }
            DeclarationKind::Function => {
                let _ = writeln!(out, "function {} {{\n{}\n}}", self.name, self.body);
            }
        }
        out
    }
}

/// Indent every line of `text` by `level` steps of two spaces.
pub fn indent(text: &str, level: usize) -> String {
    let pad = "  ".repeat(level);
    text.lines()
        .map(|line| {
            if line.is_empty() {
                String::new()
            } else {
                format!("{pad}{line}")
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Helpers shared by every backend's prologue: the `definedNonNullAny`
/// type and its runtime predicate.
pub fn defined_non_null_helpers() -> Vec<Declaration> {
    vec![
        Declaration::new(DeclarationKind::Type, "definedNonNullAny", "{}"),
        Declaration::new(
            DeclarationKind::Const,
            "isDefinedNonNullAny",
            "(v: any): v is definedNonNullAny => v !== undefined && v !== null",
        )
        .exported(),
    ]
}
