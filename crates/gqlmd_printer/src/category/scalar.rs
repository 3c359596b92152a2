use gqlmd_core::markdown::link;
use gqlmd_core::MARKDOWN_EOP;
use gqlmd_schema::ScalarDef;

use crate::options::RenderOptions;
use crate::strings;

pub(super) fn print_metadata(scalar: &ScalarDef, options: RenderOptions<'_>) -> String {
    match scalar.specified_by_url.as_deref() {
        Some(url) if !url.is_empty() => format!(
            "{} {}{MARKDOWN_EOP}{}{MARKDOWN_EOP}",
            options.level.marker(),
            strings::SPECIFICATION,
            link(url, url)
        ),
        _ => String::new(),
    }
}

pub(super) fn print_code(scalar: &ScalarDef) -> String {
    match scalar.specified_by_url.as_deref() {
        Some(url) if !url.is_empty() => format!("scalar {} @specifiedBy(url: \"{url}\")", scalar.name),
        _ => format!("scalar {}", scalar.name),
    }
}
