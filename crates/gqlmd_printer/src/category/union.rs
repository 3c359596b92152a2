use gqlmd_schema::{Schema, UnionDef};

use crate::options::RenderOptions;
use crate::section::print_section;
use crate::strings;

pub(super) fn print_metadata(union: &UnionDef, schema: &Schema, options: RenderOptions<'_>) -> String {
    print_section(
        &schema.resolve_types(&union.members),
        strings::POSSIBLE_TYPES,
        options.with_parent_type(&union.name),
    )
}

pub(super) fn print_code(union: &UnionDef) -> String {
    format!("union {} = {}", union.name, union.members.join(" | "))
}
