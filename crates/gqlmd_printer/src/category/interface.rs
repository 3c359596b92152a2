use gqlmd_schema::{InterfaceDef, Schema};

use super::object::print_code_type;
use crate::options::{PrinterConfig, RenderOptions};
use crate::section::{print_metadata_section, print_section};
use crate::strings;

pub(super) fn print_metadata(interface: &InterfaceDef, schema: &Schema, options: RenderOptions<'_>) -> String {
    let fields = print_metadata_section(&interface.name, &interface.fields, strings::FIELDS, options);
    let interfaces = print_section(&schema.resolve_types(&interface.interfaces), strings::INTERFACES, options);
    let implemented_by = print_section(&schema.implementors(&interface.name), strings::IMPLEMENTED_BY, options);
    format!("{fields}{interfaces}{implemented_by}")
}

pub(super) fn print_code(interface: &InterfaceDef, config: &PrinterConfig) -> String {
    print_code_type("interface", &interface.name, &interface.interfaces, &interface.fields, config)
}
