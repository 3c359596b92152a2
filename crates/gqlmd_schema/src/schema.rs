//! Schema definition consumed by the printer.

use indexmap::IndexMap;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::directive::{AppliedDirective, DirectiveDefinition};
use crate::types::{Category, TypeRef};

/// Built-in scalars registered by [`SchemaBuilder::new`].
const BUILTIN_SCALARS: [(&str, &str); 5] = [
    ("Int", "The `Int` scalar type represents non-fractional signed whole numeric values."),
    ("Float", "The `Float` scalar type represents signed double-precision fractional values."),
    ("String", "The `String` scalar type represents textual data, represented as UTF-8 character sequences."),
    ("Boolean", "The `Boolean` scalar type represents `true` or `false`."),
    ("ID", "The `ID` scalar type represents a unique identifier."),
];

/// Errors raised while loading a schema.
#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("invalid schema document: {0}")]
    Json(#[from] serde_json::Error),

    #[error("type `{0}` is defined more than once")]
    DuplicateType(String),

    #[error("directive `@{0}` is defined more than once")]
    DuplicateDirective(String),
}

/// A GraphQL schema.
#[derive(Debug, Clone, Default)]
pub struct Schema {
    pub types: IndexMap<String, TypeDef>,
    pub directives: IndexMap<String, DirectiveDefinition>,
}

/// Serialized schema document: `{"types": [...], "directives": [...]}`.
#[derive(Debug, Deserialize)]
struct SchemaDocument {
    #[serde(default)]
    types: Vec<TypeDef>,
    #[serde(default)]
    directives: Vec<DirectiveDefinition>,
}

impl Schema {
    /// Creates a new empty schema.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads a schema from its JSON document.
    ///
    /// Built-in scalars are always present; the document may redefine them.
    pub fn from_json(json: &str) -> Result<Self, SchemaError> {
        let document: SchemaDocument = serde_json::from_str(json)?;
        let mut builder = SchemaBuilder::new();
        let mut seen = FxHashSet::default();

        for type_def in document.types {
            if !seen.insert(type_def.name().to_string()) {
                return Err(SchemaError::DuplicateType(type_def.name().to_string()));
            }
            builder = builder.add_type(type_def);
        }

        for directive in document.directives {
            if builder.schema.directives.contains_key(&directive.name) {
                return Err(SchemaError::DuplicateDirective(directive.name));
            }
            builder = builder.add_directive(directive);
        }

        Ok(builder.build())
    }

    /// Gets a type by name.
    pub fn get_type(&self, name: &str) -> Option<&TypeDef> {
        self.types.get(name)
    }

    /// Gets a directive definition by name.
    pub fn get_directive(&self, name: &str) -> Option<&DirectiveDefinition> {
        self.directives.get(name)
    }

    /// Returns all types in declaration order.
    pub fn types(&self) -> impl Iterator<Item = &TypeDef> {
        self.types.values()
    }

    /// Returns all directive definitions in declaration order.
    pub fn directives(&self) -> impl Iterator<Item = &DirectiveDefinition> {
        self.directives.values()
    }

    /// Returns the objects and interfaces implementing the interface `name`.
    pub fn implementors(&self, name: &str) -> Vec<&TypeDef> {
        self.types()
            .filter(|ty| ty.interfaces().iter().any(|iface| iface == name))
            .collect()
    }

    /// Returns the unions listing `name` as a possible type.
    pub fn unions_containing(&self, name: &str) -> Vec<&TypeDef> {
        self.types()
            .filter(|ty| matches!(ty, TypeDef::Union(u) if u.members.iter().any(|m| m == name)))
            .collect()
    }

    /// Resolves type names to their definitions, skipping unknown names.
    pub fn resolve_types<'a>(&'a self, names: &'a [String]) -> Vec<&'a TypeDef> {
        names.iter().filter_map(|name| self.get_type(name)).collect()
    }
}

/// A named type definition.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TypeDef {
    Scalar(ScalarDef),
    Object(ObjectDef),
    Interface(InterfaceDef),
    Union(UnionDef),
    Enum(EnumDef),
    InputObject(InputObjectDef),
}

impl TypeDef {
    /// Returns the type name.
    pub fn name(&self) -> &str {
        match self {
            Self::Scalar(s) => &s.name,
            Self::Object(o) => &o.name,
            Self::Interface(i) => &i.name,
            Self::Union(u) => &u.name,
            Self::Enum(e) => &e.name,
            Self::InputObject(i) => &i.name,
        }
    }

    /// Returns the type description.
    pub fn description(&self) -> Option<&str> {
        match self {
            Self::Scalar(s) => s.description.as_deref(),
            Self::Object(o) => o.description.as_deref(),
            Self::Interface(i) => i.description.as_deref(),
            Self::Union(u) => u.description.as_deref(),
            Self::Enum(e) => e.description.as_deref(),
            Self::InputObject(i) => i.description.as_deref(),
        }
    }

    /// Returns the documentation category.
    pub fn category(&self) -> Category {
        match self {
            Self::Scalar(_) => Category::Scalar,
            Self::Object(_) => Category::Object,
            Self::Interface(_) => Category::Interface,
            Self::Union(_) => Category::Union,
            Self::Enum(_) => Category::Enum,
            Self::InputObject(_) => Category::Input,
        }
    }

    /// Returns the directives applied to the type.
    pub fn directives(&self) -> &[AppliedDirective] {
        match self {
            Self::Scalar(s) => &s.directives,
            Self::Object(o) => &o.directives,
            Self::Interface(i) => &i.directives,
            Self::Union(u) => &u.directives,
            Self::Enum(e) => &e.directives,
            Self::InputObject(i) => &i.directives,
        }
    }

    /// Returns the output fields of objects and interfaces.
    pub fn fields(&self) -> &[FieldDef] {
        match self {
            Self::Object(o) => &o.fields,
            Self::Interface(i) => &i.fields,
            _ => &[],
        }
    }

    /// Returns the interfaces implemented by objects and interfaces.
    pub fn interfaces(&self) -> &[String] {
        match self {
            Self::Object(o) => &o.interfaces,
            Self::Interface(i) => &i.interfaces,
            _ => &[],
        }
    }

    /// Returns a reference to this type.
    pub fn as_type_ref(&self) -> TypeRef {
        TypeRef::named(self.name(), self.category())
    }

    fn normalize(&mut self) {
        if let Self::InputObject(input) = self {
            for field in &mut input.fields {
                field.kind = InputValueKind::InputField;
            }
        }
    }
}

/// Scalar type definition.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScalarDef {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub specified_by_url: Option<String>,
    #[serde(default)]
    pub directives: Vec<AppliedDirective>,
}

impl ScalarDef {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            specified_by_url: None,
            directives: Vec::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_specified_by_url(mut self, url: impl Into<String>) -> Self {
        self.specified_by_url = Some(url.into());
        self
    }

    pub fn with_directive(mut self, directive: AppliedDirective) -> Self {
        self.directives.push(directive);
        self
    }
}

/// Object type definition.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObjectDef {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub fields: Vec<FieldDef>,
    #[serde(default)]
    pub interfaces: Vec<String>,
    #[serde(default)]
    pub directives: Vec<AppliedDirective>,
}

impl ObjectDef {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            fields: Vec::new(),
            interfaces: Vec::new(),
            directives: Vec::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_field(mut self, field: FieldDef) -> Self {
        self.fields.push(field);
        self
    }

    pub fn implements(mut self, interface: impl Into<String>) -> Self {
        self.interfaces.push(interface.into());
        self
    }

    pub fn with_directive(mut self, directive: AppliedDirective) -> Self {
        self.directives.push(directive);
        self
    }
}

/// Interface type definition.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InterfaceDef {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub fields: Vec<FieldDef>,
    #[serde(default)]
    pub interfaces: Vec<String>,
    #[serde(default)]
    pub directives: Vec<AppliedDirective>,
}

impl InterfaceDef {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            fields: Vec::new(),
            interfaces: Vec::new(),
            directives: Vec::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_field(mut self, field: FieldDef) -> Self {
        self.fields.push(field);
        self
    }

    pub fn implements(mut self, interface: impl Into<String>) -> Self {
        self.interfaces.push(interface.into());
        self
    }

    pub fn with_directive(mut self, directive: AppliedDirective) -> Self {
        self.directives.push(directive);
        self
    }
}

/// Union type definition.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnionDef {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub members: Vec<String>,
    #[serde(default)]
    pub directives: Vec<AppliedDirective>,
}

impl UnionDef {
    pub fn new(name: impl Into<String>, members: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            name: name.into(),
            description: None,
            members: members.into_iter().map(Into::into).collect(),
            directives: Vec::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_directive(mut self, directive: AppliedDirective) -> Self {
        self.directives.push(directive);
        self
    }
}

/// Enum type definition.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnumDef {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub values: Vec<EnumValueDef>,
    #[serde(default)]
    pub directives: Vec<AppliedDirective>,
}

impl EnumDef {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            values: Vec::new(),
            directives: Vec::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_value(mut self, value: EnumValueDef) -> Self {
        self.values.push(value);
        self
    }

    pub fn with_directive(mut self, directive: AppliedDirective) -> Self {
        self.directives.push(directive);
        self
    }
}

/// Enum value definition.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnumValueDef {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub deprecated: bool,
    #[serde(default)]
    pub deprecation_reason: Option<String>,
    #[serde(default)]
    pub directives: Vec<AppliedDirective>,
}

impl EnumValueDef {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            deprecated: false,
            deprecation_reason: None,
            directives: Vec::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn deprecated(mut self, reason: Option<&str>) -> Self {
        self.deprecated = true;
        self.deprecation_reason = reason.map(str::to_string);
        self
    }

    pub fn with_directive(mut self, directive: AppliedDirective) -> Self {
        self.directives.push(directive);
        self
    }
}

/// Input object type definition.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InputObjectDef {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub fields: Vec<InputValueDef>,
    #[serde(default)]
    pub directives: Vec<AppliedDirective>,
}

impl InputObjectDef {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            fields: Vec::new(),
            directives: Vec::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_field(mut self, mut field: InputValueDef) -> Self {
        field.kind = InputValueKind::InputField;
        self.fields.push(field);
        self
    }

    pub fn with_directive(mut self, directive: AppliedDirective) -> Self {
        self.directives.push(directive);
        self
    }
}

/// Field definition.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldDef {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub ty: TypeRef,
    #[serde(default)]
    pub arguments: Vec<InputValueDef>,
    #[serde(default)]
    pub deprecated: bool,
    #[serde(default)]
    pub deprecation_reason: Option<String>,
    #[serde(default)]
    pub directives: Vec<AppliedDirective>,
}

impl FieldDef {
    pub fn new(name: impl Into<String>, ty: TypeRef) -> Self {
        Self {
            name: name.into(),
            description: None,
            ty,
            arguments: Vec::new(),
            deprecated: false,
            deprecation_reason: None,
            directives: Vec::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_argument(mut self, argument: InputValueDef) -> Self {
        self.arguments.push(argument);
        self
    }

    pub fn deprecated(mut self, reason: Option<&str>) -> Self {
        self.deprecated = true;
        self.deprecation_reason = reason.map(str::to_string);
        self
    }

    pub fn with_directive(mut self, directive: AppliedDirective) -> Self {
        self.directives.push(directive);
        self
    }
}

/// Whether an input value is a field argument or an input object field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputValueKind {
    #[default]
    Argument,
    InputField,
}

/// Input value definition (argument or input field).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InputValueDef {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub ty: TypeRef,
    #[serde(default)]
    pub default_value: Option<String>,
    #[serde(default)]
    pub deprecated: bool,
    #[serde(default)]
    pub deprecation_reason: Option<String>,
    #[serde(default)]
    pub directives: Vec<AppliedDirective>,
    #[serde(skip)]
    pub kind: InputValueKind,
}

impl InputValueDef {
    pub fn new(name: impl Into<String>, ty: TypeRef) -> Self {
        Self {
            name: name.into(),
            description: None,
            ty,
            default_value: None,
            deprecated: false,
            deprecation_reason: None,
            directives: Vec::new(),
            kind: InputValueKind::Argument,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_default_value(mut self, value: impl Into<String>) -> Self {
        self.default_value = Some(value.into());
        self
    }

    pub fn deprecated(mut self, reason: Option<&str>) -> Self {
        self.deprecated = true;
        self.deprecation_reason = reason.map(str::to_string);
        self
    }

    pub fn with_directive(mut self, directive: AppliedDirective) -> Self {
        self.directives.push(directive);
        self
    }
}

/// Schema builder.
#[derive(Debug, Default)]
pub struct SchemaBuilder {
    schema: Schema,
}

impl SchemaBuilder {
    /// Creates a new schema builder with the built-in scalars.
    pub fn new() -> Self {
        let mut builder = Self::default();
        for (name, description) in BUILTIN_SCALARS {
            builder.schema.types.insert(
                name.to_string(),
                TypeDef::Scalar(ScalarDef::new(name).with_description(description)),
            );
        }
        builder
    }

    /// Adds a type, replacing any type of the same name.
    pub fn add_type(mut self, mut type_def: TypeDef) -> Self {
        type_def.normalize();
        self.schema
            .types
            .insert(type_def.name().to_string(), type_def);
        self
    }

    /// Adds a directive definition.
    pub fn add_directive(mut self, directive: DirectiveDefinition) -> Self {
        self.schema
            .directives
            .insert(directive.name.clone(), directive);
        self
    }

    /// Builds the schema.
    pub fn build(self) -> Schema {
        self.schema
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn schema() -> Schema {
        SchemaBuilder::new()
            .add_type(TypeDef::Interface(InterfaceDef::new("Node")))
            .add_type(TypeDef::Object(ObjectDef::new("User").implements("Node")))
            .add_type(TypeDef::Object(ObjectDef::new("Post").implements("Node")))
            .add_type(TypeDef::Union(UnionDef::new("SearchResult", ["User", "Post"])))
            .build()
    }

    #[test]
    fn test_builtin_scalars() {
        let schema = SchemaBuilder::new().build();
        for name in ["Int", "Float", "String", "Boolean", "ID"] {
            assert_eq!(schema.get_type(name).map(TypeDef::category), Some(Category::Scalar));
        }
    }

    #[test]
    fn test_implementors() {
        let schema = schema();
        let names: Vec<&str> = schema.implementors("Node").iter().map(|t| t.name()).collect();
        assert_eq!(names, ["User", "Post"]);
    }

    #[test]
    fn test_unions_containing() {
        let schema = schema();
        let names: Vec<&str> = schema.unions_containing("Post").iter().map(|t| t.name()).collect();
        assert_eq!(names, ["SearchResult"]);
        assert!(schema.unions_containing("Node").is_empty());
    }

    #[test]
    fn test_input_fields_are_normalized() {
        let input = InputObjectDef {
            name: "Filter".to_string(),
            description: None,
            fields: vec![InputValueDef::new("term", TypeRef::scalar("String"))],
            directives: Vec::new(),
        };
        let schema = SchemaBuilder::new().add_type(TypeDef::InputObject(input)).build();
        let Some(TypeDef::InputObject(filter)) = schema.get_type("Filter") else {
            panic!("Filter should be an input object");
        };
        assert_eq!(filter.fields[0].kind, InputValueKind::InputField);
    }

    #[test]
    fn test_resolve_types_skips_unknown() {
        let schema = schema();
        let names = vec!["User".to_string(), "Missing".to_string()];
        assert_eq!(schema.resolve_types(&names).len(), 1);
    }
}
