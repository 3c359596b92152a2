//! Markdown/MDX printer for GraphQL schema types.
//!
//! This crate renders one documentation page per named type or directive:
//! - `modifier`: list/non-null unwrapping and type signatures
//! - `filter`: skip/only/deprecated inclusion policy
//! - `badge`: heading badges
//! - `description`: deprecation call-outs, descriptions, custom directive text
//! - `section` / `item`: heading sections of fields, arguments and values
//! - `code`: SDL code blocks
//! - `category`: one page strategy per type category
//!
//! # Example
//!
//! ```ignore
//! use gqlmd_printer::{Printer, PrinterConfig};
//!
//! let config = PrinterConfig::default();
//! let printer = Printer::new(&schema, &config);
//! let page = printer.print_type("User");
//! ```

pub mod badge;
pub mod category;
pub mod code;
pub mod description;
pub mod directive;
pub mod filter;
pub mod item;
pub mod link;
pub mod modifier;
pub mod options;
pub mod section;
pub mod strings;

pub use badge::Badge;
pub use category::Entity;
pub use directive::{CustomDirective, CustomDirectiveMap, DirectiveDescriptor, DirectiveTag};
pub use filter::should_include;
pub use modifier::{signature, unwrap, Modifier, Unwrapped};
pub use options::{
    AdmonitionSyntax, Collapsible, DeprecatedPolicy, DirectiveFilter, Locale, PrinterConfig, RenderOptions,
};

use gqlmd_core::MARKDOWN_EOP;
use gqlmd_schema::{Schema, SchemaElement};
use tracing::debug;

use crate::badge::{custom_tags, element_badges, print_badges};
use crate::code::print_code_block;
use crate::description::print_description;
use crate::filter::is_printable;

/// Renders documentation pages for the entities of a schema.
#[derive(Debug, Clone, Copy)]
pub struct Printer<'a> {
    schema: &'a Schema,
    config: &'a PrinterConfig,
}

impl<'a> Printer<'a> {
    /// Creates a printer over a schema.
    pub fn new(schema: &'a Schema, config: &'a PrinterConfig) -> Self {
        Self { schema, config }
    }

    /// Root render options.
    pub fn options(&self) -> RenderOptions<'a> {
        self.config.options()
    }

    /// Looks up a type, or a directive when the name starts with `@` or no
    /// type matches.
    pub fn entity(&self, name: &str) -> Option<Entity<'a>> {
        if let Some(directive) = name.strip_prefix('@') {
            return self.schema.get_directive(directive).map(Entity::Directive);
        }
        self.schema
            .get_type(name)
            .map(Entity::Type)
            .or_else(|| self.schema.get_directive(name).map(Entity::Directive))
    }

    /// Every type then every directive, in declaration order.
    pub fn entities(&self) -> impl Iterator<Item = Entity<'a>> + 'a {
        let schema = self.schema;
        schema
            .types()
            .map(Entity::Type)
            .chain(schema.directives().map(Entity::Directive))
    }

    /// Renders the page of the named entity, empty when it is unknown or
    /// excluded.
    pub fn print_type(&self, name: &str) -> String {
        match self.entity(name) {
            Some(entity) => self.print_entity(entity),
            None => {
                debug!(name, "no such type or directive");
                String::new()
            }
        }
    }

    /// Renders the page of an entity: description, badges, metadata sections
    /// and the SDL code block. Excluded entities render as an empty string.
    pub fn print_entity(&self, entity: Entity<'a>) -> String {
        let config = self.config;
        if !is_printable(&entity, config) {
            debug!(name = entity.name(), "entity excluded");
            return String::new();
        }

        let options = self.options();
        let description = print_description(&entity, options, &config.locale.no_description);
        let description = description.trim_start_matches('\n');

        let mut badges = element_badges(&entity, options);
        badges.extend(custom_tags(&entity, config));
        let badges = if badges.is_empty() {
            String::new()
        } else {
            format!("{MARKDOWN_EOP}{}", print_badges(&badges))
        };

        let metadata = entity.print_metadata(self.schema, options);
        let code = print_code_block(&entity.print_code(config));

        debug!(name = entity.name(), category = %entity.page_category(), "page rendered");
        format!("{description}{badges}{MARKDOWN_EOP}{metadata}{code}")
    }
}
