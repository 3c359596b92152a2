//! Page URLs and heading links.

use gqlmd_core::markdown::{code_span, link};
use gqlmd_core::slugify;
use gqlmd_schema::{Category, SchemaElement, TypeRef};

use crate::modifier::{named_type, signature};
use crate::options::{PrinterConfig, RenderOptions};
use crate::strings;

/// URL of the page documenting a named type or directive, e.g.
/// `/types/objects/user.mdx`.
pub fn page_url(category: Category, name: &str, config: &PrinterConfig) -> String {
    format!(
        "{}/{}/{}{}",
        config.base_path.trim_end_matches('/'),
        category.directory(),
        slugify(name),
        config.link_extension
    )
}

/// In-page anchor of a heading.
pub fn anchor(name: &str) -> String {
    format!("#{}", slugify(name))
}

/// Link label of an element: its name in a code span, or the dotted
/// `Parent.name` form when an enclosing type is known.
pub fn link_label(name: &str, parent_type: Option<&str>) -> String {
    match parent_type {
        Some(parent) => format!("<code style={{{{ fontWeight: 'normal' }}}}>{parent}.<b>{name}</b></code>"),
        None => code_span(name),
    }
}

/// Heading link of an element. Named types and directives link to their
/// page, other elements to their anchor.
pub fn print_link<E: SchemaElement + ?Sized>(element: &E, options: RenderOptions<'_>) -> String {
    let name = element.name();
    let url = match element.category() {
        Some(category) => page_url(category, name, options.config),
        None => anchor(name),
    };
    link(&link_label(name, options.parent_type), &url)
}

/// Link to the page of the named type behind a type reference, labelled
/// with the full signature.
pub fn print_type_link(ty: &TypeRef, config: &PrinterConfig) -> String {
    let (name, category) = named_type(ty);
    format!(
        "{}{}",
        strings::BULLET,
        link(&code_span(&signature(ty)), &page_url(category, name, config))
    )
}
