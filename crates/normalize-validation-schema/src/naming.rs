//! Conversion of schema type names into generated identifiers.

use crate::config::GenerationConfig;

/// Maps a raw schema type name to the identifier used in generated code.
pub trait NameConverter {
    fn convert(&self, raw: &str) -> String;

    /// Identifier of the validator generated for `raw`.
    fn schema_name(&self, raw: &str) -> String {
        format!("{}Schema", self.convert(raw))
    }
}

/// Upper-cases the first character and applies a configured prefix and suffix.
#[derive(Debug, Clone, Default)]
pub struct DefaultNameConverter {
    pub prefix: String,
    pub suffix: String,
}

impl DefaultNameConverter {
    pub fn from_config(config: &GenerationConfig) -> Self {
        Self {
            prefix: config.types_prefix.clone(),
            suffix: config.types_suffix.clone(),
        }
    }
}

impl NameConverter for DefaultNameConverter {
    fn convert(&self, raw: &str) -> String {
        let mut chars = raw.chars();
        let capitalized: String = match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        };
        format!("{}{}{}", self.prefix, capitalized, self.suffix)
    }
}
