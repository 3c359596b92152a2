//! Type categories and wrapped type references.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The documentation category of a named schema entity.
///
/// `Directive` only classifies directive definitions; it never appears inside
/// a [`TypeRef`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Object,
    Input,
    Union,
    Interface,
    Enum,
    Scalar,
    Directive,
}

impl Category {
    /// All categories, in page generation order.
    pub const ALL: [Category; 7] = [
        Category::Object,
        Category::Input,
        Category::Union,
        Category::Interface,
        Category::Enum,
        Category::Scalar,
        Category::Directive,
    ];

    /// Returns the category identifier (`object`, `input`, ...).
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Object => "object",
            Self::Input => "input",
            Self::Union => "union",
            Self::Interface => "interface",
            Self::Enum => "enum",
            Self::Scalar => "scalar",
            Self::Directive => "directive",
        }
    }

    /// Returns the directory holding pages of this category.
    pub const fn directory(self) -> &'static str {
        match self {
            Self::Object => "objects",
            Self::Input => "inputs",
            Self::Union => "unions",
            Self::Interface => "interfaces",
            Self::Enum => "enums",
            Self::Scalar => "scalars",
            Self::Directive => "directives",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A reference to a type, possibly wrapped in list/non-null modifiers.
///
/// The serialized form follows introspection: `{"kind": "NON_NULL", "ofType": ...}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TypeRef {
    Named {
        name: String,
        category: Category,
    },
    List {
        #[serde(rename = "ofType")]
        of_type: Box<TypeRef>,
    },
    NonNull {
        #[serde(rename = "ofType")]
        of_type: Box<TypeRef>,
    },
}

impl TypeRef {
    pub fn named(name: impl Into<String>, category: Category) -> Self {
        Self::Named {
            name: name.into(),
            category,
        }
    }

    pub fn list(inner: TypeRef) -> Self {
        Self::List {
            of_type: Box::new(inner),
        }
    }

    pub fn non_null(inner: TypeRef) -> Self {
        Self::NonNull {
            of_type: Box::new(inner),
        }
    }

    /// Shorthand for a named scalar reference.
    pub fn scalar(name: impl Into<String>) -> Self {
        Self::named(name, Category::Scalar)
    }

    /// Returns the wrapped type, or `None` for a named type.
    pub fn of_type(&self) -> Option<&TypeRef> {
        match self {
            Self::Named { .. } => None,
            Self::List { of_type } | Self::NonNull { of_type } => Some(of_type),
        }
    }
}
