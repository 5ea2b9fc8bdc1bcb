//! Resolution of named type references.

use crate::config::ExportStyle;
use crate::context::Context;
use crate::ir::TypeDefinitionKind;
use crate::scalar::{resolve_scalar, scalar_primitive};
use crate::traits::Primitive;

/// Definition kind behind a named reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReferenceKind {
    Enum,
    InputObject,
    Object,
    /// Declared scalars, built-ins and names missing from the schema.
    Scalar,
}

/// A resolved named type reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reference {
    pub kind: ReferenceKind,
    /// Validator expression for the bare type.
    pub expr: String,
    /// Input objects may reference themselves, so uses must be deferred.
    pub is_input_like: bool,
    /// Primitive kind when the reference is a scalar with one.
    pub primitive: Option<Primitive>,
}

/// Resolve the named type `name` to its validator expression.
pub fn resolve(name: &str, ctx: &Context<'_>) -> Reference {
    let kind = match ctx.index.get(name).map(|def| &def.kind) {
        Some(TypeDefinitionKind::Enum { .. }) => ReferenceKind::Enum,
        Some(TypeDefinitionKind::InputObject { .. }) => ReferenceKind::InputObject,
        Some(TypeDefinitionKind::Object { .. }) => ReferenceKind::Object,
        Some(TypeDefinitionKind::Scalar) | None => ReferenceKind::Scalar,
    };

    let expr = match kind {
        ReferenceKind::Enum => ctx.names.schema_name(name),
        ReferenceKind::InputObject | ReferenceKind::Object => match ctx.config.export_type {
            ExportStyle::Const => ctx.names.schema_name(name),
            ExportStyle::Function => format!("{}()", ctx.names.schema_name(name)),
        },
        ReferenceKind::Scalar => resolve_scalar(name, ctx),
    };

    let primitive = match kind {
        ReferenceKind::Scalar => scalar_primitive(name, ctx.config),
        _ => None,
    };

    Reference {
        kind,
        expr,
        is_input_like: kind == ReferenceKind::InputObject,
        primitive,
    }
}
