//! Generation configuration.
//!
//! Read once per run and never mutated by the generator. Usually loaded
//! from TOML:
//!
//! ```toml
//! schema = "zod"
//! export_type = "const"
//! enums_as_types = true
//! not_allow_empty_string = true
//! import_from = "../types"
//!
//! [scalars]
//! Date = "string"
//!
//! [scalar_schemas]
//! Email = "z.string().email()"
//!
//! [directives.constraint]
//! minLength = "min"
//! startsWith = ["regex", "/^$1/", "message"]
//! format = { email = "email", uri = "url" }
//! ```

use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Error that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid configuration: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("unknown validation backend `{0}`")]
    UnknownBackend(String),
}

/// How generated object validators are declared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExportStyle {
    /// `export function UserSchema() { return ... }`, built on every call.
    #[default]
    Function,
    /// `export const UserSchema = ...`, built once when the module loads.
    Const,
}

/// Mapping for one directive argument.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum ArgumentMapping {
    /// `minLength = "min"`, shorthand for `["min", "$1"]`.
    Method(String),
    /// `startsWith = ["regex", "/^$1/", "message"]`.
    Call(Vec<String>),
    /// `format = { email = "email" }`, selected by the argument's value.
    ByValue(BTreeMap<String, ValueMapping>),
}

/// Mapping selected by a directive argument's value.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum ValueMapping {
    /// A bare method call without arguments.
    Method(String),
    /// Method name followed by argument templates.
    Call(Vec<String>),
}

/// Directive name to argument name to mapping.
pub type DirectiveConfig = BTreeMap<String, BTreeMap<String, ArgumentMapping>>;

/// Root configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    /// Name of the validation backend (`zod`, `myzod`, `valibot`, ...).
    pub schema: String,
    pub export_type: ExportStyle,
    /// Validate enums against their value names instead of the native enum.
    pub enums_as_types: bool,
    /// Scalar name to target type name (`string`, `number`, `boolean`, ...).
    pub scalars: BTreeMap<String, String>,
    /// Scalar name to a validator expression, emitted verbatim.
    pub scalar_schemas: BTreeMap<String, String>,
    pub directives: DirectiveConfig,
    /// Reject `""` for non-null string fields.
    pub not_allow_empty_string: bool,
    /// Import generated types from this module instead of expecting them in scope.
    pub import_from: Option<String>,
    /// Emit validators for object (output) types.
    pub with_object_type: bool,
    pub types_prefix: String,
    pub types_suffix: String,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            schema: "zod".to_string(),
            export_type: ExportStyle::default(),
            enums_as_types: false,
            scalars: BTreeMap::new(),
            scalar_schemas: BTreeMap::new(),
            directives: DirectiveConfig::new(),
            not_allow_empty_string: false,
            import_from: None,
            with_object_type: true,
            types_prefix: String::new(),
            types_suffix: String::new(),
        }
    }
}

impl GenerationConfig {
    /// Parse configuration from TOML text.
    pub fn from_toml_str(input: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(input)?)
    }

    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }
}
