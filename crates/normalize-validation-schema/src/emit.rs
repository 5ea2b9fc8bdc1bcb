//! Per-type declaration emission.

use crate::config::ExportStyle;
use crate::context::Context;
use crate::declaration::{Declaration, DeclarationKind, indent};
use crate::field::field_validator;
use crate::ir::{FieldDefinition, TypeDefinition, TypeDefinitionKind};
use std::collections::HashSet;

/// Type names referenced by generated declarations, in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportSet {
    names: Vec<String>,
    seen: HashSet<String>,
}

impl ImportSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `name` unless already present.
    pub fn insert(&mut self, name: impl Into<String>) {
        let name = name.into();
        if self.seen.insert(name.clone()) {
            self.names.push(name);
        }
    }

    /// Append the names of `other` not yet recorded, keeping their order.
    pub fn merge(&mut self, other: ImportSet) {
        for name in other.names {
            self.insert(name);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }
}

/// A generated validator declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmittedDeclaration {
    /// Validator identifier, e.g. `UserSchema`.
    pub name: String,
    /// Rendered source text.
    pub body: String,
}

/// Output of [`emit`]: the declaration and the type names it references.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Emitted {
    pub declaration: EmittedDeclaration,
    pub imports: ImportSet,
}

/// Emit the validator declaration for `def`.
///
/// Scalars produce nothing, and object types only when
/// `with_object_type` is set.
pub fn emit(def: &TypeDefinition, ctx: &Context<'_>) -> Option<Emitted> {
    let type_name = ctx.names.convert(&def.name);
    let schema_name = ctx.names.schema_name(&def.name);

    let declaration = match &def.kind {
        TypeDefinitionKind::Enum { values } => {
            let body = if ctx.config.enums_as_types {
                ctx.builder.literal_enum(values)
            } else {
                ctx.builder.native_enum(&type_name)
            };
            Declaration::new(DeclarationKind::Const, schema_name.clone(), body).exported()
        }
        TypeDefinitionKind::InputObject { fields } => {
            object_declaration(&schema_name, &type_name, None, fields, ctx)
        }
        TypeDefinitionKind::Object { fields } => {
            if !ctx.config.with_object_type {
                return None;
            }
            object_declaration(&schema_name, &type_name, Some(def.name.as_str()), fields, ctx)
        }
        TypeDefinitionKind::Scalar => return None,
    };

    tracing::debug!(
        type_name = %def.name,
        schema = %schema_name,
        backend = ctx.builder.name(),
        "emitted validator"
    );

    let mut imports = ImportSet::new();
    imports.insert(type_name);
    Some(Emitted {
        declaration: EmittedDeclaration {
            name: schema_name,
            body: declaration.render(),
        },
        imports,
    })
}

/// `typename` is the raw GraphQL name for object types, which carry a
/// `__typename` entry; input objects pass `None`.
fn object_declaration(
    schema_name: &str,
    type_name: &str,
    typename: Option<&str>,
    fields: &[FieldDefinition],
    ctx: &Context<'_>,
) -> Declaration {
    let builder = ctx.builder;

    let mut entries = Vec::with_capacity(fields.len() + 1);
    if let Some(typename) = typename {
        entries.push(format!("__typename: {}", builder.typename_literal(typename)));
    }
    for field in fields {
        entries.push(format!("{}: {}", field.name, field_validator(field, ctx)));
    }

    let mut object = builder.object_open();
    object.push('\n');
    if !entries.is_empty() {
        object.push_str(&indent(&entries.join(",\n"), 1));
        object.push('\n');
    }
    object.push_str("})");

    let annotation = builder.object_annotation(type_name);
    let declaration = match ctx.config.export_type {
        ExportStyle::Const => Declaration::new(
            DeclarationKind::Const,
            format!("{schema_name}: {annotation}"),
            object,
        ),
        ExportStyle::Function => Declaration::new(
            DeclarationKind::Function,
            format!("{schema_name}(): {annotation}"),
            indent(&format!("return {object}"), 1),
        ),
    };
    declaration.exported()
}

#[cfg(all(test, feature = "backend-zod"))]
mod tests {
    use super::*;
    use crate::config::GenerationConfig;
    use crate::ir::{Schema, TypeExpr};
    use crate::naming::DefaultNameConverter;
    use crate::output::zod::ZOD_BACKEND;

    fn emit_all(schema: &Schema, config: &GenerationConfig) -> Vec<Emitted> {
        let index = schema.index().unwrap();
        let names = DefaultNameConverter::from_config(config);
        let ctx = Context::new(&index, config, &ZOD_BACKEND, &names);
        schema
            .definitions
            .iter()
            .filter_map(|def| emit(def, &ctx))
            .collect()
    }

    fn point_schema() -> Schema {
        let mut schema = Schema::new();
        schema.add(TypeDefinition::input_object(
            "Point",
            vec![
                FieldDefinition::new("x", TypeExpr::named("Int").non_null()),
                FieldDefinition::new("y", TypeExpr::named("Int").non_null()),
            ],
        ));
        schema
    }

    #[test]
    fn input_object_function_form() {
        let emitted = emit_all(&point_schema(), &GenerationConfig::default());
        assert_eq!(emitted.len(), 1);
        assert_eq!(emitted[0].declaration.name, "PointSchema");
        insta::assert_snapshot!(&emitted[0].declaration.body, @r"
        export function PointSchema(): z.ZodObject<Properties<Point>> {
          return z.object({
            x: z.number(),
            y: z.number()
          })
        }
        ");
    }

    #[test]
    fn input_object_const_form() {
        let config = GenerationConfig {
            export_type: ExportStyle::Const,
            ..Default::default()
        };
        let emitted = emit_all(&point_schema(), &config);
        insta::assert_snapshot!(&emitted[0].declaration.body, @r"
        export const PointSchema: z.ZodObject<Properties<Point>> = z.object({
          x: z.number(),
          y: z.number()
        });
        ");
    }

    #[test]
    fn object_type_carries_typename() {
        let mut schema = Schema::new();
        schema.add(TypeDefinition::object(
            "User",
            vec![FieldDefinition::new("name", TypeExpr::named("String"))],
        ));
        let emitted = emit_all(&schema, &GenerationConfig::default());
        insta::assert_snapshot!(&emitted[0].declaration.body, @r"
        export function UserSchema(): z.ZodObject<Properties<User>> {
          return z.object({
            __typename: z.literal('User').optional(),
            name: z.string().nullish()
          })
        }
        ");
    }

    #[test]
    fn object_types_can_be_skipped() {
        let mut schema = point_schema();
        schema.add(TypeDefinition::object("User", vec![]));
        let config = GenerationConfig {
            with_object_type: false,
            ..Default::default()
        };
        let emitted = emit_all(&schema, &config);
        assert_eq!(emitted.len(), 1);
        assert_eq!(emitted[0].declaration.name, "PointSchema");
    }

    #[test]
    fn enum_styles() {
        let mut schema = Schema::new();
        schema.add(TypeDefinition::enumeration("Color", vec!["RED", "GREEN", "BLUE"]));

        let native = emit_all(&schema, &GenerationConfig::default());
        assert_eq!(
            native[0].declaration.body,
            "export const ColorSchema = z.nativeEnum(Color);\n"
        );

        let config = GenerationConfig {
            enums_as_types: true,
            ..Default::default()
        };
        let literal = emit_all(&schema, &config);
        assert_eq!(
            literal[0].declaration.body,
            "export const ColorSchema = z.enum(['RED', 'GREEN', 'BLUE']);\n"
        );
    }

    #[test]
    fn scalars_emit_nothing() {
        let mut schema = Schema::new();
        schema.add(TypeDefinition::scalar("Date"));
        assert!(emit_all(&schema, &GenerationConfig::default()).is_empty());
    }

    #[test]
    fn imports_record_converted_names() {
        let mut schema = point_schema();
        schema.add(TypeDefinition::enumeration("color", vec!["RED"]));
        let config = GenerationConfig {
            types_prefix: "Gql".into(),
            ..Default::default()
        };
        let emitted = emit_all(&schema, &config);
        let names: Vec<&str> = emitted.iter().flat_map(|e| e.imports.iter()).collect();
        assert_eq!(names, vec!["GqlPoint", "GqlColor"]);
        assert_eq!(emitted[1].declaration.name, "GqlColorSchema");
    }

    #[test]
    fn import_set_deduplicates_in_order() {
        let mut a = ImportSet::new();
        a.insert("B");
        a.insert("A");
        a.insert("B");
        let mut b = ImportSet::new();
        b.insert("A");
        b.insert("C");
        a.merge(b);
        assert_eq!(a.iter().collect::<Vec<_>>(), vec!["B", "A", "C"]);
        assert_eq!(a.len(), 3);
    }

    #[test]
    fn import_set_scales_to_large_schemas() {
        let mut imports = ImportSet::new();
        for round in 0..2 {
            for i in 0..10_000 {
                imports.insert(format!("Type{i}"));
            }
            assert_eq!(imports.len(), 10_000, "round {round}");
        }
        assert_eq!(imports.iter().next(), Some("Type0"));
        assert_eq!(imports.iter().last(), Some("Type9999"));
    }

    #[test]
    fn empty_object() {
        let mut schema = Schema::new();
        schema.add(TypeDefinition::input_object("Empty", vec![]));
        let config = GenerationConfig {
            export_type: ExportStyle::Const,
            ..Default::default()
        };
        let emitted = emit_all(&schema, &config);
        assert_eq!(
            emitted[0].declaration.body,
            "export const EmptySchema: z.ZodObject<Properties<Empty>> = z.object({\n});\n"
        );
    }
}
