//! Scalar to validator mapping.

use crate::config::GenerationConfig;
use crate::context::Context;
use crate::traits::Primitive;

/// Primitive kind of a scalar, from the `scalars` table or the GraphQL built-ins.
///
/// An entry in `scalars` wins over the built-in mapping, so mapping a
/// scalar to a non-primitive type name makes it unmapped.
pub fn scalar_primitive(name: &str, config: &GenerationConfig) -> Option<Primitive> {
    if let Some(type_name) = config.scalars.get(name) {
        return Primitive::from_type_name(type_name);
    }
    match name {
        "ID" | "String" => Some(Primitive::String),
        "Int" | "Float" => Some(Primitive::Number),
        "Boolean" => Some(Primitive::Boolean),
        _ => None,
    }
}

/// Validator expression for the scalar `name`.
///
/// Overrides from `scalar_schemas` are emitted verbatim. Scalars with no
/// override and no primitive kind fall back to the permissive
/// defined-non-null validator.
pub fn resolve_scalar(name: &str, ctx: &Context<'_>) -> String {
    if let Some(schema) = ctx.config.scalar_schemas.get(name) {
        return schema.clone();
    }
    match scalar_primitive(name, ctx.config) {
        Some(primitive) => ctx.builder.primitive(primitive),
        None => {
            tracing::warn!(
                scalar = name,
                backend = ctx.builder.name(),
                "unhandled scalar, accepting any defined non-null value"
            );
            ctx.builder.defined_non_null_any()
        }
    }
}
