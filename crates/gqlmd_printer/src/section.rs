//! Titled sections of items.

use gqlmd_core::MARKDOWN_EOP;
use gqlmd_schema::SchemaElement;
use tracing::trace;

use crate::item::print_section_item;
use crate::options::{DeprecatedPolicy, RenderOptions};

/// Renders every item one level below `options.level`, dropping excluded
/// items, joined by paragraph breaks.
pub fn print_section_items<E: SchemaElement>(items: &[E], options: RenderOptions<'_>) -> String {
    let item_options = options.with_level(options.level.deeper());
    items
        .iter()
        .map(|item| print_section_item(item, item_options))
        .filter(|block| !block.is_empty())
        .collect::<Vec<_>>()
        .join(MARKDOWN_EOP)
}

/// Renders a section of items under a `title` heading.
///
/// Empty when there is no printable item. The heading is left out when the
/// title is empty or the section is collapsible.
pub fn print_section<E: SchemaElement>(items: &[E], title: &str, options: RenderOptions<'_>) -> String {
    if items.is_empty() {
        return String::new();
    }

    let content = print_section_items(items, options);
    if content.is_empty() {
        trace!(title, "every section item is excluded");
        return String::new();
    }

    if let Some(collapsible) = options.collapsible {
        return format!(
            "<Details dataOpen={{{}}} dataClose={{{}}}>{MARKDOWN_EOP}{content}{MARKDOWN_EOP}</Details>{MARKDOWN_EOP}",
            collapsible.data_open, collapsible.data_close
        );
    }

    let heading = if title.is_empty() {
        String::new()
    } else {
        format!("{} {title}{MARKDOWN_EOP}", options.level.marker())
    };
    format!("{heading}{content}{MARKDOWN_EOP}")
}

/// Renders the members of a type (fields, values, arguments) as a section
/// labelled with the owning type.
///
/// Under the `group` policy, deprecated members move to a second,
/// collapsible section.
pub fn print_metadata_section<E: SchemaElement>(
    parent_type: &str,
    members: &[E],
    title: &str,
    options: RenderOptions<'_>,
) -> String {
    let options = options.with_parent_type(parent_type);
    if options.config.deprecated != DeprecatedPolicy::Group {
        return print_section(members, title, options);
    }

    let (deprecated, current): (Vec<&E>, Vec<&E>) = members.iter().partition(|member| member.is_deprecated());
    let mut section = print_section(&current, title, options);
    section.push_str(&print_section(
        &deprecated,
        "",
        options.with_collapsible(&options.config.deprecated_section),
    ));
    section
}
