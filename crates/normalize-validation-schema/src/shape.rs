//! Classification of type expressions.

use crate::ir::TypeExpr;

/// The outermost shape of a type expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeShape<'a> {
    Named(&'a str),
    List(&'a TypeExpr),
    NonNull(&'a TypeExpr),
}

/// The wrapper directly enclosing a type expression during descent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Parent {
    /// The expression is the field's own type.
    #[default]
    None,
    List,
    NonNull,
}

/// Classify `ty` by its outermost modifier.
///
/// Returns `None` for shapes a well-formed schema cannot produce, namely a
/// non-null wrapper directly around another non-null wrapper.
pub fn classify(ty: &TypeExpr) -> Option<TypeShape<'_>> {
    match ty {
        TypeExpr::Named(name) => Some(TypeShape::Named(name)),
        TypeExpr::List(inner) => Some(TypeShape::List(inner)),
        TypeExpr::NonNull(inner) => match inner.as_ref() {
            TypeExpr::NonNull(_) => None,
            _ => Some(TypeShape::NonNull(inner)),
        },
    }
}
