//! Directive definitions and applications.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::schema::InputValueDef;

/// Directive location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DirectiveLocation {
    Query,
    Mutation,
    Subscription,
    Field,
    FragmentDefinition,
    FragmentSpread,
    InlineFragment,
    VariableDefinition,
    Schema,
    Scalar,
    Object,
    FieldDefinition,
    ArgumentDefinition,
    Interface,
    Union,
    Enum,
    EnumValue,
    InputObject,
    InputFieldDefinition,
}

impl DirectiveLocation {
    /// Returns the SDL spelling of the location.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Query => "QUERY",
            Self::Mutation => "MUTATION",
            Self::Subscription => "SUBSCRIPTION",
            Self::Field => "FIELD",
            Self::FragmentDefinition => "FRAGMENT_DEFINITION",
            Self::FragmentSpread => "FRAGMENT_SPREAD",
            Self::InlineFragment => "INLINE_FRAGMENT",
            Self::VariableDefinition => "VARIABLE_DEFINITION",
            Self::Schema => "SCHEMA",
            Self::Scalar => "SCALAR",
            Self::Object => "OBJECT",
            Self::FieldDefinition => "FIELD_DEFINITION",
            Self::ArgumentDefinition => "ARGUMENT_DEFINITION",
            Self::Interface => "INTERFACE",
            Self::Union => "UNION",
            Self::Enum => "ENUM",
            Self::EnumValue => "ENUM_VALUE",
            Self::InputObject => "INPUT_OBJECT",
            Self::InputFieldDefinition => "INPUT_FIELD_DEFINITION",
        }
    }
}

impl fmt::Display for DirectiveLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Directive definition.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DirectiveDefinition {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub arguments: Vec<InputValueDef>,
    #[serde(default)]
    pub locations: Vec<DirectiveLocation>,
    #[serde(default)]
    pub repeatable: bool,
}

impl DirectiveDefinition {
    /// Creates a directive definition declared at the given locations.
    pub fn new(name: impl Into<String>, locations: impl IntoIterator<Item = DirectiveLocation>) -> Self {
        Self {
            name: name.into(),
            description: None,
            arguments: Vec::new(),
            locations: locations.into_iter().collect(),
            repeatable: false,
        }
    }

    /// Sets the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Adds an argument.
    pub fn with_argument(mut self, argument: InputValueDef) -> Self {
        self.arguments.push(argument);
        self
    }

    /// Marks the directive as repeatable.
    pub fn repeatable(mut self) -> Self {
        self.repeatable = true;
        self
    }

    /// Returns true if the directive may be applied at `location`.
    pub fn is_valid_location(&self, location: DirectiveLocation) -> bool {
        self.locations.contains(&location)
    }
}

/// A directive applied to a schema element, e.g. `@auth(role: "admin")`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppliedDirective {
    pub name: String,
    #[serde(default)]
    pub arguments: IndexMap<String, serde_json::Value>,
}

impl AppliedDirective {
    /// Creates an application without arguments.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            arguments: IndexMap::new(),
        }
    }

    /// Adds an argument.
    pub fn with_argument(mut self, name: impl Into<String>, value: serde_json::Value) -> Self {
        self.arguments.insert(name.into(), value);
        self
    }

    /// Returns an argument value.
    pub fn argument(&self, name: &str) -> Option<&serde_json::Value> {
        self.arguments.get(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_location() {
        let doc = DirectiveDefinition::new("doc", [DirectiveLocation::Object]);
        assert!(doc.is_valid_location(DirectiveLocation::Object));
        assert!(!doc.is_valid_location(DirectiveLocation::FieldDefinition));
    }

    #[test]
    fn test_applied_directive_arguments() {
        let auth = AppliedDirective::new("auth").with_argument("role", serde_json::json!("admin"));
        assert_eq!(auth.argument("role"), Some(&serde_json::json!("admin")));
        assert!(auth.argument("scope").is_none());
    }

    #[test]
    fn test_location_display() {
        assert_eq!(DirectiveLocation::InputFieldDefinition.to_string(), "INPUT_FIELD_DEFINITION");
    }
}
