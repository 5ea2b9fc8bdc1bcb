//! Field validator generation.
//!
//! Descends a field's type expression and composes the backend's
//! vocabulary bottom-up. Nullability is decided by the wrapper directly
//! around each level:
//!
//! | type       | zod output                          |
//! |------------|-------------------------------------|
//! | `String`   | `z.string().nullish()`              |
//! | `String!`  | `z.string()`                        |
//! | `[String]` | `z.array(z.string().nullable()).nullish()` |
//! | `[String!]!` | `z.array(z.string())`             |
//!
//! References to input objects are wrapped in the backend's lazy construct
//! because input types may reference themselves.

use crate::context::Context;
use crate::directive::{augment, directive_calls};
use crate::ir::{FieldDefinition, TypeExpr};
use crate::resolve::resolve;
use crate::shape::{Parent, TypeShape, classify};
use crate::traits::Primitive;

/// Complete validator expression for `field`.
pub fn field_validator(field: &FieldDefinition, ctx: &Context<'_>) -> String {
    generate(&field.ty, Parent::None, field, ctx)
}

/// Validator expression for `ty`, one level of `field`'s type expression.
pub fn generate(ty: &TypeExpr, parent: Parent, field: &FieldDefinition, ctx: &Context<'_>) -> String {
    descend(ty, parent, parent == Parent::List, field, ctx)
}

/// `in_list` is set below the field's outermost list. Only that list
/// carries the field's directives; nested lists are left bare.
fn descend(
    ty: &TypeExpr,
    parent: Parent,
    in_list: bool,
    field: &FieldDefinition,
    ctx: &Context<'_>,
) -> String {
    let builder = ctx.builder;
    match classify(ty) {
        Some(TypeShape::List(inner)) => {
            let element = descend(inner, Parent::List, true, field, ctx);
            let array = builder.array_of(&element);
            let array = if in_list {
                array
            } else {
                augment(&array, &field.directives, ctx)
            };
            if parent == Parent::NonNull {
                array
            } else {
                builder.nullish(&array)
            }
        }
        Some(TypeShape::NonNull(inner)) => descend(inner, Parent::NonNull, in_list, field, ctx),
        Some(TypeShape::Named(name)) => named(name, parent, field, ctx),
        None => {
            tracing::warn!(field = %field.name, ty = %ty, "unhandled type expression");
            String::new()
        }
    }
}

fn named(name: &str, parent: Parent, field: &FieldDefinition, ctx: &Context<'_>) -> String {
    let builder = ctx.builder;
    let reference = resolve(name, ctx);

    let expr = match parent {
        // Directives describe the field, not each element.
        Parent::List => builder.nullable(&reference.expr),
        Parent::NonNull => {
            let mut calls = directive_calls(&field.directives, &ctx.config.directives);
            if ctx.config.not_allow_empty_string && reference.primitive == Some(Primitive::String) {
                calls.push(builder.min_length(1));
            }
            builder.refine(&reference.expr, &calls)
        }
        Parent::None => builder.nullish(&augment(&reference.expr, &field.directives, ctx)),
    };

    if reference.is_input_like {
        builder.lazy(&expr)
    } else {
        expr
    }
}
