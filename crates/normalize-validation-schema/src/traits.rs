//! Traits for validation library backends.

use crate::declaration::Declaration;

/// Primitive kind underlying a scalar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Primitive {
    String,
    Number,
    Boolean,
}

impl Primitive {
    /// Map a target type name (`"string"`, `"number"`, `"boolean"`) to a primitive.
    pub fn from_type_name(name: &str) -> Option<Self> {
        match name {
            "string" => Some(Primitive::String),
            "number" => Some(Primitive::Number),
            "boolean" => Some(Primitive::Boolean),
            _ => None,
        }
    }
}

/// A constraint call appended to a validator, e.g. `min(5)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatorCall {
    pub method: String,
    /// Already-rendered argument expressions.
    pub args: Vec<String>,
}

impl ValidatorCall {
    pub fn new(method: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            method: method.into(),
            args,
        }
    }
}

/// Vocabulary of a target validation library.
///
/// The field generator is written against this trait only; each backend
/// decides how a sequence, an optional value or a refinement is spelled.
///
/// # Implementing Custom Backends
///
/// ```ignore
/// use normalize_validation_schema::{ValidatorBuilder, register_backend};
///
/// struct MyBackend;
///
/// impl ValidatorBuilder for MyBackend {
///     fn name(&self) -> &'static str { "my-backend" }
///     // ...
/// }
///
/// // Register before first use
/// register_backend(&MyBackend);
/// ```
pub trait ValidatorBuilder: Send + Sync {
    /// Unique backend identifier (e.g., "zod", "valibot").
    fn name(&self) -> &'static str;

    /// Statement importing the validation library.
    fn import_statement(&self) -> String;

    /// Helper declarations emitted once before all generated validators.
    fn prologue(&self) -> Vec<Declaration>;

    /// Validator for a primitive scalar.
    fn primitive(&self, primitive: Primitive) -> String;

    /// Validator accepting any value except `undefined` and `null`.
    fn defined_non_null_any(&self) -> String {
        crate::declaration::DEFINED_NON_NULL_ANY_SCHEMA.to_string()
    }

    /// Sequence of `element`.
    fn array_of(&self, element: &str) -> String;

    /// `expr` or `null`.
    fn nullable(&self, expr: &str) -> String;

    /// `expr`, `null` or absent.
    fn nullish(&self, expr: &str) -> String;

    /// Defer building `expr` until first use.
    fn lazy(&self, expr: &str) -> String;

    /// Apply constraint calls to `expr`, in order. No calls returns `expr`.
    fn refine(&self, expr: &str, calls: &[ValidatorCall]) -> String;

    /// Constraint requiring a string of at least `len` characters.
    fn min_length(&self, len: usize) -> ValidatorCall;

    /// Validator restricted to the given string literals.
    fn literal_enum(&self, values: &[String]) -> String;

    /// Validator bound to a native enum type.
    fn native_enum(&self, type_name: &str) -> String;

    /// Opening of an object validator; closed by `})`.
    fn object_open(&self) -> String;

    /// Optional literal constraint for the `__typename` field.
    fn typename_literal(&self, type_name: &str) -> String;

    /// Type annotation of a generated object validator for `type_name`.
    fn object_annotation(&self, type_name: &str) -> String;
}
