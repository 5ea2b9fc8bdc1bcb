//! Runtime validator generation from GraphQL schema graphs.
//!
//! `normalize-validation-schema` turns the type definitions of a parsed
//! GraphQL schema into validator source for TypeScript validation
//! libraries (Zod, MyZod, Valibot, Yup).
//!
//! # Architecture
//!
//! ```text
//! Schema graph          Core                      Backends
//! ────────────     ──────────────────────     ───────────────
//! enum         ─┐   field.rs (descent)   ┌─> zod
//! input        ─┼─> resolve / scalar  ───┼─> myzod
//! type         ─┤   directive            ├─> valibot
//! scalar       ─┘   emit.rs (per type)   └─> yup
//! ```
//!
//! The recursive field generator only speaks the
//! [`ValidatorBuilder`] vocabulary, so every backend shares the same
//! nullability, list and recursion handling.
//!
//! # Example
//!
//! ```
//! use normalize_validation_schema::{GenerationConfig, generate};
//! use normalize_validation_schema::ir::{FieldDefinition, Schema, TypeDefinition, TypeExpr};
//!
//! let mut schema = Schema::new();
//! schema.add(TypeDefinition::input_object(
//!     "Point",
//!     vec![
//!         FieldDefinition::new("x", TypeExpr::named("Int").non_null()),
//!         FieldDefinition::new("y", TypeExpr::named("Int").non_null()),
//!     ],
//! ));
//!
//! let output = generate(&schema, &GenerationConfig::default()).unwrap();
//! assert!(output.content.contains("x: z.number()"));
//! ```
//!
//! # Feature Flags
//!
//! - `backend-zod` - Zod schema generation
//! - `backend-myzod` - MyZod schema generation
//! - `backend-valibot` - Valibot schema generation
//! - `backend-yup` - Yup schema generation
//! - `typescript-validators` - all of the above (default)

pub mod config;
pub mod context;
pub mod declaration;
pub mod directive;
pub mod emit;
pub mod field;
pub mod generate;
pub mod ir;
pub mod naming;
pub mod output;
pub mod registry;
pub mod resolve;
pub mod scalar;
pub mod shape;
pub mod traits;

pub use config::{ConfigError, ExportStyle, GenerationConfig};
pub use context::Context;
pub use declaration::{Declaration, DeclarationKind};
pub use emit::{Emitted, EmittedDeclaration, ImportSet, emit};
pub use field::field_validator;
pub use generate::{GenerateError, GeneratedOutput, generate, generate_with};
pub use ir::{Schema, SchemaError, SchemaIndex};
pub use naming::{DefaultNameConverter, NameConverter};
pub use traits::{Primitive, ValidatorBuilder, ValidatorCall};

pub use registry::{backend_names, backends, get_backend, register_backend};

#[cfg(feature = "backend-zod")]
pub use output::zod::ZodBackend;

#[cfg(feature = "backend-myzod")]
pub use output::myzod::MyZodBackend;

#[cfg(feature = "backend-valibot")]
pub use output::valibot::ValibotBackend;

#[cfg(feature = "backend-yup")]
pub use output::yup::YupBackend;
