//! Yup backend.
//!
//! Yup schemas accept `undefined` unless told otherwise, so every base
//! validator is marked `.defined()` and optionality is opted back in by the
//! nullish suffix.

use super::{chain_calls, quoted_values};
use crate::declaration::{
    DEFINED_NON_NULL_ANY_SCHEMA, Declaration, DeclarationKind, defined_non_null_helpers,
};
use crate::traits::{Primitive, ValidatorBuilder, ValidatorCall};

/// Static instance of the Yup backend for registry.
pub static YUP_BACKEND: YupBackend = YupBackend;

/// Yup validator builder.
pub struct YupBackend;

impl ValidatorBuilder for YupBackend {
    fn name(&self) -> &'static str {
        "yup"
    }

    fn import_statement(&self) -> String {
        "import * as yup from 'yup'".to_string()
    }

    fn prologue(&self) -> Vec<Declaration> {
        let mut decls = defined_non_null_helpers();
        decls.push(
            Declaration::new(
                DeclarationKind::Const,
                DEFINED_NON_NULL_ANY_SCHEMA,
                "yup.mixed().test('defined-non-null-any', 'value must not be null or undefined', isDefinedNonNullAny)",
            )
            .exported(),
        );
        decls
    }

    fn primitive(&self, primitive: Primitive) -> String {
        match primitive {
            Primitive::String => "yup.string().defined()",
            Primitive::Number => "yup.number().defined()",
            Primitive::Boolean => "yup.boolean().defined()",
        }
        .to_string()
    }

    fn array_of(&self, element: &str) -> String {
        format!("yup.array({element}).defined()")
    }

    fn nullable(&self, expr: &str) -> String {
        format!("{expr}.nullable()")
    }

    fn nullish(&self, expr: &str) -> String {
        format!("{expr}.nullable().optional()")
    }

    fn lazy(&self, expr: &str) -> String {
        format!("yup.lazy(() => {expr})")
    }

    fn refine(&self, expr: &str, calls: &[ValidatorCall]) -> String {
        chain_calls(expr, calls)
    }

    fn min_length(&self, len: usize) -> ValidatorCall {
        ValidatorCall::new("min", vec![len.to_string()])
    }

    fn literal_enum(&self, values: &[String]) -> String {
        format!("yup.string().oneOf([{}]).defined()", quoted_values(values))
    }

    fn native_enum(&self, type_name: &str) -> String {
        format!("yup.string<{type_name}>().oneOf(Object.values({type_name})).defined()")
    }

    fn object_open(&self) -> String {
        "yup.object({".to_string()
    }

    fn typename_literal(&self, type_name: &str) -> String {
        format!("yup.string<'{type_name}'>().optional()")
    }

    fn object_annotation(&self, type_name: &str) -> String {
        format!("yup.ObjectSchema<{type_name}>")
    }
}
