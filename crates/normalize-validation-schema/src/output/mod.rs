//! Validation library backends.
//!
//! Each backend implements [`ValidatorBuilder`](crate::traits::ValidatorBuilder)
//! and is reachable by name through the registry.

use crate::traits::ValidatorCall;

// Zod
#[cfg(feature = "backend-zod")]
pub mod zod;

#[cfg(feature = "backend-zod")]
pub use zod::ZodBackend;

// MyZod
#[cfg(feature = "backend-myzod")]
pub mod myzod;

#[cfg(feature = "backend-myzod")]
pub use myzod::MyZodBackend;

// Valibot
#[cfg(feature = "backend-valibot")]
pub mod valibot;

#[cfg(feature = "backend-valibot")]
pub use valibot::ValibotBackend;

// Yup
#[cfg(feature = "backend-yup")]
pub mod yup;

#[cfg(feature = "backend-yup")]
pub use yup::YupBackend;

/// Method-chaining refinement: `expr.a(x).b(y)`.
#[allow(dead_code)]
pub(crate) fn chain_calls(expr: &str, calls: &[ValidatorCall]) -> String {
    let mut out = expr.to_string();
    for call in calls {
        out.push('.');
        out.push_str(&call.method);
        out.push('(');
        out.push_str(&call.args.join(", "));
        out.push(')');
    }
    out
}

/// `'A', 'B'` for enum value lists.
#[allow(dead_code)]
pub(crate) fn quoted_values(values: &[String]) -> String {
    values
        .iter()
        .map(|v| format!("'{v}'"))
        .collect::<Vec<_>>()
        .join(", ")
}
