//! Intermediate representation of a parsed GraphQL schema graph.
//!
//! The generator never parses SDL itself. Callers hand it a [`Schema`],
//! either built programmatically or deserialized from JSON, and the
//! generator walks it read-only.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// Errors raised while loading or indexing a schema.
#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    #[error("invalid schema document: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid type reference `{input}`: {reason}")]
    TypeReference { input: String, reason: &'static str },

    #[error("type `{0}` is defined more than once")]
    DuplicateDefinition(String),
}

/// A complete schema: type definitions in declaration order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Schema {
    pub definitions: Vec<TypeDefinition>,
}

/// A named type definition.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TypeDefinition {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(flatten)]
    pub kind: TypeDefinitionKind,
}

/// The kind of a type definition.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TypeDefinitionKind {
    /// `enum Status { ACTIVE INACTIVE }`
    Enum { values: Vec<String> },
    /// `input Point { x: Int! }`
    InputObject { fields: Vec<FieldDefinition> },
    /// `type User { id: ID! }`
    Object { fields: Vec<FieldDefinition> },
    /// `scalar Date`
    Scalar,
}

/// A field of an input or object type.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldDefinition {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: TypeExpr,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub directives: Vec<Directive>,
}

/// A directive applied to a field, e.g. `@constraint(minLength: 5)`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Directive {
    pub name: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub arguments: Vec<DirectiveArgument>,
}

/// One argument of a directive application. Order is preserved.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DirectiveArgument {
    pub name: String,
    pub value: serde_json::Value,
}

/// A type expression: a named type wrapped in list and non-null modifiers.
///
/// Serialized in GraphQL type-reference notation, e.g. `"[String!]!"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum TypeExpr {
    Named(String),
    List(Box<TypeExpr>),
    NonNull(Box<TypeExpr>),
}

impl Schema {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, def: TypeDefinition) {
        self.definitions.push(def);
    }

    /// Load a schema from its JSON representation.
    pub fn from_json_str(input: &str) -> Result<Self, SchemaError> {
        Ok(serde_json::from_str(input)?)
    }

    /// Build the name lookup used during generation.
    pub fn index(&self) -> Result<SchemaIndex<'_>, SchemaError> {
        SchemaIndex::new(self)
    }
}

impl TypeDefinition {
    pub fn enumeration(name: impl Into<String>, values: Vec<&str>) -> Self {
        Self {
            name: name.into(),
            description: None,
            kind: TypeDefinitionKind::Enum {
                values: values.into_iter().map(String::from).collect(),
            },
        }
    }

    pub fn input_object(name: impl Into<String>, fields: Vec<FieldDefinition>) -> Self {
        Self {
            name: name.into(),
            description: None,
            kind: TypeDefinitionKind::InputObject { fields },
        }
    }

    pub fn object(name: impl Into<String>, fields: Vec<FieldDefinition>) -> Self {
        Self {
            name: name.into(),
            description: None,
            kind: TypeDefinitionKind::Object { fields },
        }
    }

    pub fn scalar(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            kind: TypeDefinitionKind::Scalar,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Fields of an input or object type; empty for enums and scalars.
    pub fn fields(&self) -> &[FieldDefinition] {
        match &self.kind {
            TypeDefinitionKind::InputObject { fields } | TypeDefinitionKind::Object { fields } => {
                fields
            }
            TypeDefinitionKind::Enum { .. } | TypeDefinitionKind::Scalar => &[],
        }
    }
}

impl FieldDefinition {
    pub fn new(name: impl Into<String>, ty: TypeExpr) -> Self {
        Self {
            name: name.into(),
            ty,
            directives: Vec::new(),
        }
    }

    pub fn with_directive(mut self, directive: Directive) -> Self {
        self.directives.push(directive);
        self
    }
}

impl Directive {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            arguments: Vec::new(),
        }
    }

    pub fn with_argument(mut self, name: impl Into<String>, value: serde_json::Value) -> Self {
        self.arguments.push(DirectiveArgument {
            name: name.into(),
            value,
        });
        self
    }
}

impl TypeExpr {
    pub fn named(name: impl Into<String>) -> Self {
        TypeExpr::Named(name.into())
    }

    pub fn list(self) -> Self {
        TypeExpr::List(Box::new(self))
    }

    pub fn non_null(self) -> Self {
        TypeExpr::NonNull(Box::new(self))
    }

    /// The named type at the bottom of the modifiers.
    pub fn base_name(&self) -> &str {
        match self {
            TypeExpr::Named(name) => name,
            TypeExpr::List(inner) | TypeExpr::NonNull(inner) => inner.base_name(),
        }
    }
}

impl fmt::Display for TypeExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeExpr::Named(name) => f.write_str(name),
            TypeExpr::List(inner) => write!(f, "[{}]", inner),
            TypeExpr::NonNull(inner) => write!(f, "{}!", inner),
        }
    }
}

impl FromStr for TypeExpr {
    type Err = SchemaError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let err = |reason| SchemaError::TypeReference {
            input: input.to_string(),
            reason,
        };

        let trimmed = input.trim();
        if let Some(inner) = trimmed.strip_suffix('!') {
            let inner = inner.trim_end();
            if inner.ends_with('!') {
                return Err(err("non-null modifier applied twice"));
            }
            let inner: TypeExpr = inner.parse().map_err(|_| err("malformed non-null type"))?;
            return Ok(inner.non_null());
        }
        if let Some(rest) = trimmed.strip_prefix('[') {
            let inner = rest
                .strip_suffix(']')
                .ok_or_else(|| err("unterminated list type"))?;
            let inner: TypeExpr = inner
                .parse()
                .map_err(|_| err("malformed list element type"))?;
            return Ok(inner.list());
        }

        let mut chars = trimmed.chars();
        match chars.next() {
            Some(c) if c == '_' || c.is_ascii_alphabetic() => {}
            _ => return Err(err("expected a type name")),
        }
        if !chars.all(|c| c == '_' || c.is_ascii_alphanumeric()) {
            return Err(err("type name contains invalid characters"));
        }
        Ok(TypeExpr::named(trimmed))
    }
}

impl TryFrom<String> for TypeExpr {
    type Error = SchemaError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<TypeExpr> for String {
    fn from(value: TypeExpr) -> Self {
        value.to_string()
    }
}

/// Name lookup over a [`Schema`].
///
/// The type graph may be cyclic, so references are resolved by name on
/// demand instead of by walking a tree.
#[derive(Debug)]
pub struct SchemaIndex<'a> {
    schema: &'a Schema,
    by_name: HashMap<&'a str, &'a TypeDefinition>,
}

impl<'a> SchemaIndex<'a> {
    pub fn new(schema: &'a Schema) -> Result<Self, SchemaError> {
        let mut by_name = HashMap::with_capacity(schema.definitions.len());
        for def in &schema.definitions {
            if by_name.insert(def.name.as_str(), def).is_some() {
                return Err(SchemaError::DuplicateDefinition(def.name.clone()));
            }
        }
        Ok(Self { schema, by_name })
    }

    pub fn schema(&self) -> &'a Schema {
        self.schema
    }

    pub fn get(&self, name: &str) -> Option<&'a TypeDefinition> {
        self.by_name.get(name).copied()
    }

    /// Whether `name` refers to an input object type.
    pub fn is_input_type(&self, name: &str) -> bool {
        matches!(
            self.get(name).map(|def| &def.kind),
            Some(TypeDefinitionKind::InputObject { .. })
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn build_schema_programmatically() {
        let mut schema = Schema::new();
        schema.add(TypeDefinition::enumeration("Status", vec!["ACTIVE", "INACTIVE"]));
        schema.add(TypeDefinition::input_object(
            "Filter",
            vec![
                FieldDefinition::new("status", TypeExpr::named("Status").non_null()),
                FieldDefinition::new("next", TypeExpr::named("Filter")),
            ],
        ));

        let index = schema.index().unwrap();
        assert!(index.is_input_type("Filter"));
        assert!(!index.is_input_type("Status"));
        assert!(!index.is_input_type("Missing"));
        assert_eq!(index.get("Filter").unwrap().fields().len(), 2);
    }

    #[test]
    fn duplicate_definitions_are_rejected() {
        let mut schema = Schema::new();
        schema.add(TypeDefinition::scalar("Date"));
        schema.add(TypeDefinition::scalar("Date"));

        let err = schema.index().unwrap_err();
        assert!(matches!(err, SchemaError::DuplicateDefinition(name) if name == "Date"));
    }

    #[test]
    fn parse_type_references() {
        assert_eq!("Int".parse::<TypeExpr>().unwrap(), TypeExpr::named("Int"));
        assert_eq!(
            "[String!]!".parse::<TypeExpr>().unwrap(),
            TypeExpr::named("String").non_null().list().non_null()
        );
        assert_eq!(
            "[[ID]]".parse::<TypeExpr>().unwrap(),
            TypeExpr::named("ID").list().list()
        );
    }

    #[test]
    fn reject_malformed_type_references() {
        for input in ["", "String!!", "[String", "1Bad", "Foo-Bar", "[]"] {
            assert!(input.parse::<TypeExpr>().is_err(), "accepted {input:?}");
        }
    }

    #[test]
    fn type_reference_display_matches_notation() {
        let ty = TypeExpr::named("Node").list().non_null();
        assert_eq!(ty.to_string(), "[Node]!");
        assert_eq!(ty.base_name(), "Node");
    }

    #[test]
    fn deserialize_schema_document() {
        let doc = json!({
            "definitions": [
                { "name": "Date", "kind": "scalar" },
                {
                    "name": "EventInput",
                    "kind": "input_object",
                    "fields": [
                        {
                            "name": "title",
                            "type": "String!",
                            "directives": [
                                { "name": "constraint", "arguments": [{ "name": "minLength", "value": 3 }] }
                            ]
                        },
                        { "name": "when", "type": "Date" }
                    ]
                }
            ]
        });

        let schema = Schema::from_json_str(&doc.to_string()).unwrap();
        assert_eq!(schema.definitions.len(), 2);
        let fields = schema.definitions[1].fields();
        assert_eq!(fields[0].ty, TypeExpr::named("String").non_null());
        assert_eq!(fields[0].directives[0].arguments[0].value, json!(3));
    }

    #[test]
    fn invalid_type_reference_fails_deserialization() {
        let doc = r#"{"definitions":[{"name":"A","kind":"object","fields":[{"name":"f","type":"[Int"}]}]}"#;
        assert!(matches!(Schema::from_json_str(doc), Err(SchemaError::Json(_))));
    }
}
