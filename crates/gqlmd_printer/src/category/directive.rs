use gqlmd_schema::DirectiveDefinition;

use crate::code::CodeWriter;
use crate::options::{PrinterConfig, RenderOptions};
use crate::section::print_metadata_section;
use crate::strings;

pub(super) fn print_metadata(directive: &DirectiveDefinition, options: RenderOptions<'_>) -> String {
    print_metadata_section(&directive.name, &directive.arguments, strings::ARGUMENTS, options)
}

pub(super) fn print_code(directive: &DirectiveDefinition, config: &PrinterConfig) -> String {
    let mut writer = CodeWriter::new(config);
    writer.push_str("directive @");
    writer.push_str(&directive.name);
    writer.arguments(&directive.arguments, 0);
    if directive.repeatable {
        writer.push_str(" repeatable");
    }
    if !directive.locations.is_empty() {
        let locations: Vec<&str> = directive.locations.iter().map(|location| location.as_str()).collect();
        writer.push_str(" on ");
        writer.push_str(&locations.join(" | "));
    }
    writer.finish()
}
