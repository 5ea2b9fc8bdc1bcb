//! Registry of validation backends.

use crate::traits::ValidatorBuilder;
use std::sync::{OnceLock, PoisonError, RwLock};

/// Global registry of backends.
static BACKENDS: RwLock<Vec<&'static dyn ValidatorBuilder>> = RwLock::new(Vec::new());
static INITIALIZED: OnceLock<()> = OnceLock::new();

/// Register a custom backend.
///
/// Built-in backends are registered first, so a custom backend cannot
/// shadow a built-in name.
pub fn register_backend(backend: &'static dyn ValidatorBuilder) {
    init_builtin();
    BACKENDS
        .write()
        .unwrap_or_else(PoisonError::into_inner)
        .push(backend);
}

/// Initialize built-in backends (called automatically on first use).
fn init_builtin() {
    INITIALIZED.get_or_init(|| {
        #[allow(unused_mut, unused_variables)]
        let mut backends = BACKENDS.write().unwrap_or_else(PoisonError::into_inner);

        #[cfg(feature = "backend-zod")]
        {
            backends.push(&crate::output::zod::ZOD_BACKEND);
        }

        #[cfg(feature = "backend-myzod")]
        {
            backends.push(&crate::output::myzod::MYZOD_BACKEND);
        }

        #[cfg(feature = "backend-valibot")]
        {
            backends.push(&crate::output::valibot::VALIBOT_BACKEND);
        }

        #[cfg(feature = "backend-yup")]
        {
            backends.push(&crate::output::yup::YUP_BACKEND);
        }
    });
}

/// Get a backend by name.
pub fn get_backend(name: &str) -> Option<&'static dyn ValidatorBuilder> {
    init_builtin();
    BACKENDS
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .iter()
        .find(|b| b.name() == name)
        .copied()
}

/// List all registered backends.
pub fn backends() -> Vec<&'static dyn ValidatorBuilder> {
    init_builtin();
    BACKENDS
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .clone()
}

/// List all registered backend names.
pub fn backend_names() -> Vec<&'static str> {
    init_builtin();
    BACKENDS
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .iter()
        .map(|b| b.name())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_lookup() {
        let names = backend_names();
        assert!(!names.is_empty() || cfg!(not(feature = "default")));
        assert!(get_backend("joi").is_none());
    }

    #[cfg(feature = "backend-zod")]
    #[test]
    fn test_builtin_backends_by_name() {
        assert_eq!(get_backend("zod").map(|b| b.name()), Some("zod"));
        #[cfg(feature = "backend-valibot")]
        assert_eq!(get_backend("valibot").map(|b| b.name()), Some("valibot"));
        #[cfg(feature = "backend-myzod")]
        assert_eq!(get_backend("myzod").map(|b| b.name()), Some("myzod"));
        #[cfg(feature = "backend-yup")]
        assert_eq!(get_backend("yup").map(|b| b.name()), Some("yup"));
    }
}
