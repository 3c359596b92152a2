//! Description blocks: deprecation call-out, escaped text and custom
//! directive descriptions.

use gqlmd_core::{escape_mdx, MARKDOWN_EOP};
use gqlmd_schema::SchemaElement;

use crate::options::{AdmonitionSyntax, PrinterConfig, RenderOptions};

/// Renders a call-out block. A blank `text` leaves the block body empty.
pub fn print_warning(text: Option<&str>, title: &str, syntax: AdmonitionSyntax) -> String {
    let body = match text {
        Some(text) if !text.trim().is_empty() => format!("{MARKDOWN_EOP}{text}{MARKDOWN_EOP}"),
        _ => MARKDOWN_EOP.to_string(),
    };
    match syntax {
        AdmonitionSyntax::Caution => format!("{MARKDOWN_EOP}:::caution {title}{body}:::"),
        AdmonitionSyntax::Warning => format!("{MARKDOWN_EOP}:::warning[{title}]{body}:::"),
    }
}

/// Deprecation call-out of a deprecated element, empty otherwise.
pub fn print_deprecation<E: SchemaElement + ?Sized>(element: &E, config: &PrinterConfig) -> String {
    if !element.is_deprecated() {
        return String::new();
    }
    let reason = element.deprecation_reason().map(escape_mdx);
    print_warning(reason.as_deref(), &config.locale.deprecated_title(), config.admonition)
}

/// Escaped description, or the escaped fallback when it is absent or blank.
pub fn format_description(description: Option<&str>, fallback: &str) -> String {
    let text = description
        .filter(|description| !description.trim().is_empty())
        .unwrap_or(fallback);
    format!("{MARKDOWN_EOP}{}", escape_mdx(text))
}

/// Texts of the custom directive descriptors matching `element`, empty when
/// none resolves to text.
pub fn print_custom_directives<E: SchemaElement>(element: &E, config: &PrinterConfig) -> String {
    let texts: Vec<String> = config
        .custom_directives
        .resolve(element)
        .values()
        .filter_map(|(applied, custom)| {
            let text = custom.descriptor.as_ref()?.describe(applied, element);
            (!text.is_empty()).then(|| escape_mdx(&text).into_owned())
        })
        .collect();

    if texts.is_empty() {
        return String::new();
    }
    format!("{MARKDOWN_EOP}{}", texts.join(MARKDOWN_EOP))
}

/// Full description block of an element.
pub fn print_description<E: SchemaElement>(element: &E, options: RenderOptions<'_>, fallback: &str) -> String {
    let config = options.config;
    let deprecation = print_deprecation(element, config);
    let description = format_description(element.description(), fallback);
    let custom = print_custom_directives(element, config);
    format!("{deprecation}{description}{custom}")
}
