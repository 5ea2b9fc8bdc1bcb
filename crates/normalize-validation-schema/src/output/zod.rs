//! Zod backend.
//!
//! Refinements chain as methods (`z.string().min(1).nullish()`); object
//! validators are typed through a `Properties<T>` helper so the compiler
//! checks that every field of `T` has a validator.

use super::{chain_calls, quoted_values};
use crate::declaration::{
    DEFINED_NON_NULL_ANY_SCHEMA, Declaration, DeclarationKind, defined_non_null_helpers,
};
use crate::traits::{Primitive, ValidatorBuilder, ValidatorCall};

/// Static instance of the Zod backend for registry.
pub static ZOD_BACKEND: ZodBackend = ZodBackend;

/// Zod validator builder.
pub struct ZodBackend;

impl ValidatorBuilder for ZodBackend {
    fn name(&self) -> &'static str {
        "zod"
    }

    fn import_statement(&self) -> String {
        "import { z } from 'zod'".to_string()
    }

    fn prologue(&self) -> Vec<Declaration> {
        let mut decls = vec![Declaration::new(
            DeclarationKind::Type,
            "Properties<T>",
            "Required<{\n  [K in keyof T]: z.ZodType<T[K], any, T[K]>;\n}>",
        )];
        decls.extend(defined_non_null_helpers());
        // zod has no built-in validator for "anything but null or undefined".
        decls.push(
            Declaration::new(
                DeclarationKind::Const,
                DEFINED_NON_NULL_ANY_SCHEMA,
                "z.any().refine((v) => isDefinedNonNullAny(v))",
            )
            .exported(),
        );
        decls
    }

    fn primitive(&self, primitive: Primitive) -> String {
        match primitive {
            Primitive::String => "z.string()",
            Primitive::Number => "z.number()",
            Primitive::Boolean => "z.boolean()",
        }
        .to_string()
    }

    fn array_of(&self, element: &str) -> String {
        format!("z.array({element})")
    }

    fn nullable(&self, expr: &str) -> String {
        format!("{expr}.nullable()")
    }

    fn nullish(&self, expr: &str) -> String {
        format!("{expr}.nullish()")
    }

    fn lazy(&self, expr: &str) -> String {
        format!("z.lazy(() => {expr})")
    }

    fn refine(&self, expr: &str, calls: &[ValidatorCall]) -> String {
        chain_calls(expr, calls)
    }

    fn min_length(&self, len: usize) -> ValidatorCall {
        ValidatorCall::new("min", vec![len.to_string()])
    }

    fn literal_enum(&self, values: &[String]) -> String {
        format!("z.enum([{}])", quoted_values(values))
    }

    fn native_enum(&self, type_name: &str) -> String {
        format!("z.nativeEnum({type_name})")
    }

    fn object_open(&self) -> String {
        "z.object({".to_string()
    }

    fn typename_literal(&self, type_name: &str) -> String {
        format!("z.literal('{type_name}').optional()")
    }

    fn object_annotation(&self, type_name: &str) -> String {
        format!("z.ZodObject<Properties<{type_name}>>")
    }
}
