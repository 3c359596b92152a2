use gqlmd_schema::EnumDef;

use crate::code::CodeWriter;
use crate::options::{PrinterConfig, RenderOptions};
use crate::section::print_metadata_section;
use crate::strings;

pub(super) fn print_metadata(enum_type: &EnumDef, options: RenderOptions<'_>) -> String {
    print_metadata_section(&enum_type.name, &enum_type.values, strings::VALUES, options)
}

pub(super) fn print_code(enum_type: &EnumDef, config: &PrinterConfig) -> String {
    let mut writer = CodeWriter::new(config);
    writer.push_str("enum ");
    writer.push_str(&enum_type.name);
    writer.push_str(" {\n");
    for value in &enum_type.values {
        writer.value(value, 1);
    }
    writer.push_str("}");
    writer.finish()
}
