//! Valibot backend.
//!
//! Valibot composes by wrapping rather than chaining: modifiers are
//! functions (`v.nullish(v.string())`) and constraints go through
//! `v.pipe(schema, ...actions)`.

use super::quoted_values;
use crate::declaration::{
    DEFINED_NON_NULL_ANY_SCHEMA, Declaration, DeclarationKind, defined_non_null_helpers,
};
use crate::traits::{Primitive, ValidatorBuilder, ValidatorCall};

/// Static instance of the Valibot backend for registry.
pub static VALIBOT_BACKEND: ValibotBackend = ValibotBackend;

/// Valibot validator builder.
pub struct ValibotBackend;

impl ValidatorBuilder for ValibotBackend {
    fn name(&self) -> &'static str {
        "valibot"
    }

    fn import_statement(&self) -> String {
        "import * as v from 'valibot'".to_string()
    }

    fn prologue(&self) -> Vec<Declaration> {
        let mut decls = defined_non_null_helpers();
        decls.push(
            Declaration::new(
                DeclarationKind::Const,
                DEFINED_NON_NULL_ANY_SCHEMA,
                "v.pipe(v.any(), v.check((value) => isDefinedNonNullAny(value)))",
            )
            .exported(),
        );
        decls
    }

    fn primitive(&self, primitive: Primitive) -> String {
        match primitive {
            Primitive::String => "v.string()",
            Primitive::Number => "v.number()",
            Primitive::Boolean => "v.boolean()",
        }
        .to_string()
    }

    fn array_of(&self, element: &str) -> String {
        format!("v.array({element})")
    }

    fn nullable(&self, expr: &str) -> String {
        format!("v.nullable({expr})")
    }

    fn nullish(&self, expr: &str) -> String {
        format!("v.nullish({expr})")
    }

    fn lazy(&self, expr: &str) -> String {
        format!("v.lazy(() => {expr})")
    }

    fn refine(&self, expr: &str, calls: &[ValidatorCall]) -> String {
        if calls.is_empty() {
            return expr.to_string();
        }
        let actions: Vec<String> = calls
            .iter()
            .map(|call| format!("v.{}({})", call.method, call.args.join(", ")))
            .collect();
        format!("v.pipe({expr}, {})", actions.join(", "))
    }

    fn min_length(&self, len: usize) -> ValidatorCall {
        ValidatorCall::new("minLength", vec![len.to_string()])
    }

    fn literal_enum(&self, values: &[String]) -> String {
        format!("v.picklist([{}])", quoted_values(values))
    }

    fn native_enum(&self, type_name: &str) -> String {
        format!("v.enum({type_name})")
    }

    fn object_open(&self) -> String {
        "v.object({".to_string()
    }

    fn typename_literal(&self, type_name: &str) -> String {
        format!("v.optional(v.literal('{type_name}'))")
    }

    fn object_annotation(&self, type_name: &str) -> String {
        format!("v.GenericSchema<{type_name}>")
    }
}
