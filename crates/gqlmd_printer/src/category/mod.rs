//! Per-category page strategies and the entity they dispatch on.

mod directive;
mod enums;
mod input;
mod interface;
mod object;
mod scalar;
mod union;

use gqlmd_schema::{
    AppliedDirective, Category, DirectiveDefinition, DirectiveLocation, InputValueDef, Schema, SchemaElement,
    TypeDef,
};

use crate::options::{PrinterConfig, RenderOptions};

/// A page-level schema entity: a named type or a directive definition.
#[derive(Debug, Clone, Copy)]
pub enum Entity<'a> {
    Type(&'a TypeDef),
    Directive(&'a DirectiveDefinition),
}

impl<'a> Entity<'a> {
    /// Page category of the entity.
    pub fn page_category(&self) -> Category {
        match self {
            Self::Type(ty) => TypeDef::category(ty),
            Self::Directive(_) => Category::Directive,
        }
    }

    /// Metadata sections of the entity page.
    pub(crate) fn print_metadata(&self, schema: &'a Schema, options: RenderOptions<'a>) -> String {
        match *self {
            Self::Type(TypeDef::Object(def)) => object::print_metadata(def, schema, options),
            Self::Type(TypeDef::Interface(def)) => interface::print_metadata(def, schema, options),
            Self::Type(TypeDef::InputObject(def)) => input::print_metadata(def, options),
            Self::Type(TypeDef::Union(def)) => union::print_metadata(def, schema, options),
            Self::Type(TypeDef::Enum(def)) => enums::print_metadata(def, options),
            Self::Type(TypeDef::Scalar(def)) => scalar::print_metadata(def, options),
            Self::Directive(def) => directive::print_metadata(def, options),
        }
    }

    /// SDL definition of the entity, without the fence.
    pub(crate) fn print_code(&self, config: &PrinterConfig) -> String {
        match *self {
            Self::Type(TypeDef::Object(def)) => object::print_code(def, config),
            Self::Type(TypeDef::Interface(def)) => interface::print_code(def, config),
            Self::Type(TypeDef::InputObject(def)) => input::print_code(def, config),
            Self::Type(TypeDef::Union(def)) => union::print_code(def),
            Self::Type(TypeDef::Enum(def)) => enums::print_code(def, config),
            Self::Type(TypeDef::Scalar(def)) => scalar::print_code(def),
            Self::Directive(def) => directive::print_code(def, config),
        }
    }
}

impl SchemaElement for Entity<'_> {
    fn name(&self) -> &str {
        match self {
            Self::Type(ty) => ty.name(),
            Self::Directive(directive) => &directive.name,
        }
    }

    fn description(&self) -> Option<&str> {
        match self {
            Self::Type(ty) => ty.description(),
            Self::Directive(directive) => directive.description.as_deref(),
        }
    }

    fn applied_directives(&self) -> &[AppliedDirective] {
        match self {
            Self::Type(ty) => ty.directives(),
            Self::Directive(directive) => directive.applied_directives(),
        }
    }

    fn location(&self) -> Option<DirectiveLocation> {
        match self {
            Self::Type(ty) => SchemaElement::location(*ty),
            Self::Directive(directive) => directive.location(),
        }
    }

    fn arguments(&self) -> &[InputValueDef] {
        match self {
            Self::Type(_) => &[],
            Self::Directive(directive) => &directive.arguments,
        }
    }

    fn category(&self) -> Option<Category> {
        Some(self.page_category())
    }
}
