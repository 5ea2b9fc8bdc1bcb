//! MyZod backend.

use super::{chain_calls, quoted_values};
use crate::declaration::{
    DEFINED_NON_NULL_ANY_SCHEMA, Declaration, DeclarationKind, defined_non_null_helpers,
};
use crate::traits::{Primitive, ValidatorBuilder, ValidatorCall};

/// Static instance of the MyZod backend for registry.
pub static MYZOD_BACKEND: MyZodBackend = MyZodBackend;

/// MyZod validator builder.
pub struct MyZodBackend;

impl ValidatorBuilder for MyZodBackend {
    fn name(&self) -> &'static str {
        "myzod"
    }

    fn import_statement(&self) -> String {
        "import * as myzod from 'myzod'".to_string()
    }

    fn prologue(&self) -> Vec<Declaration> {
        let mut decls = defined_non_null_helpers();
        decls.push(
            Declaration::new(
                DeclarationKind::Const,
                DEFINED_NON_NULL_ANY_SCHEMA,
                "myzod.unknown().withPredicate(isDefinedNonNullAny)",
            )
            .exported(),
        );
        decls
    }

    fn primitive(&self, primitive: Primitive) -> String {
        match primitive {
            Primitive::String => "myzod.string()",
            Primitive::Number => "myzod.number()",
            Primitive::Boolean => "myzod.boolean()",
        }
        .to_string()
    }

    fn array_of(&self, element: &str) -> String {
        format!("myzod.array({element})")
    }

    fn nullable(&self, expr: &str) -> String {
        format!("{expr}.nullable()")
    }

    // myzod has no nullish(); optional and nullable compose.
    fn nullish(&self, expr: &str) -> String {
        format!("{expr}.optional().nullable()")
    }

    fn lazy(&self, expr: &str) -> String {
        format!("myzod.lazy(() => {expr})")
    }

    fn refine(&self, expr: &str, calls: &[ValidatorCall]) -> String {
        chain_calls(expr, calls)
    }

    fn min_length(&self, len: usize) -> ValidatorCall {
        ValidatorCall::new("min", vec![len.to_string()])
    }

    fn literal_enum(&self, values: &[String]) -> String {
        format!("myzod.literals({})", quoted_values(values))
    }

    fn native_enum(&self, type_name: &str) -> String {
        format!("myzod.enum({type_name})")
    }

    fn object_open(&self) -> String {
        "myzod.object({".to_string()
    }

    fn typename_literal(&self, type_name: &str) -> String {
        format!("myzod.literal('{type_name}').optional()")
    }

    fn object_annotation(&self, type_name: &str) -> String {
        format!("myzod.Type<{type_name}>")
    }
}
