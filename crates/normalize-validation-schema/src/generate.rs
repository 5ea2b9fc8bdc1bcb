//! Whole-schema generation.

use crate::config::{ConfigError, GenerationConfig};
use crate::context::Context;
use crate::emit::{ImportSet, emit};
use crate::ir::{Schema, SchemaError, SchemaIndex};
use crate::naming::{DefaultNameConverter, NameConverter};
use crate::registry::get_backend;
use crate::traits::ValidatorBuilder;

/// Error from [`generate`].
#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Schema(#[from] SchemaError),
}

/// Generated source, split the way code generators usually splice it:
/// imports go at the top of the file, content after them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedOutput {
    /// Import statements.
    pub prepend: Vec<String>,
    /// Prologue helpers followed by one declaration per type.
    pub content: String,
}

impl GeneratedOutput {
    /// The complete generated file.
    pub fn render(&self) -> String {
        format!("{}\n{}", self.prepend.join("\n"), self.content)
    }
}

/// Generate validators for `schema` with the backend named in `config`.
pub fn generate(schema: &Schema, config: &GenerationConfig) -> Result<GeneratedOutput, GenerateError> {
    let builder = get_backend(&config.schema)
        .ok_or_else(|| ConfigError::UnknownBackend(config.schema.clone()))?;
    tracing::debug!(backend = builder.name(), "resolved validation backend");

    let index = schema.index()?;
    let names = DefaultNameConverter::from_config(config);
    Ok(generate_with(&index, config, builder, &names))
}

/// Generate validators with an explicit backend and name converter.
///
/// Never fails: problems with individual fields are logged and degrade to
/// permissive validators.
pub fn generate_with(
    index: &SchemaIndex<'_>,
    config: &GenerationConfig,
    builder: &dyn ValidatorBuilder,
    names: &dyn NameConverter,
) -> GeneratedOutput {
    let ctx = Context::new(index, config, builder, names);

    let mut blocks: Vec<String> = builder.prologue().iter().map(|d| d.render()).collect();
    let mut imports = ImportSet::new();
    for def in &index.schema().definitions {
        if let Some(emitted) = emit(def, &ctx) {
            imports.merge(emitted.imports);
            blocks.push(emitted.declaration.body);
        }
    }

    let mut prepend = vec![builder.import_statement()];
    if let Some(source) = &config.import_from {
        if !imports.is_empty() {
            let type_names: Vec<&str> = imports.iter().collect();
            prepend.push(format!(
                "import {{ {} }} from '{}'",
                type_names.join(", "),
                source
            ));
        }
    }

    GeneratedOutput {
        prepend,
        content: format!("\n{}", blocks.join("\n")),
    }
}
