use gqlmd_schema::{FieldDef, ObjectDef, Schema};

use crate::code::CodeWriter;
use crate::options::{PrinterConfig, RenderOptions};
use crate::section::{print_metadata_section, print_section};
use crate::strings;

pub(super) fn print_metadata(object: &ObjectDef, schema: &Schema, options: RenderOptions<'_>) -> String {
    let fields = print_metadata_section(&object.name, &object.fields, strings::FIELDS, options);
    let interfaces = print_section(&schema.resolve_types(&object.interfaces), strings::INTERFACES, options);
    let member_of = print_section(&schema.unions_containing(&object.name), strings::MEMBER_OF, options);
    format!("{fields}{interfaces}{member_of}")
}

pub(super) fn print_code(object: &ObjectDef, config: &PrinterConfig) -> String {
    print_code_type("type", &object.name, &object.interfaces, &object.fields, config)
}

/// `keyword Name implements A, B { ... }`, shared by objects and interfaces.
pub(super) fn print_code_type(
    keyword: &str,
    name: &str,
    interfaces: &[String],
    fields: &[FieldDef],
    config: &PrinterConfig,
) -> String {
    let mut writer = CodeWriter::new(config);
    writer.push_str(keyword);
    writer.push_str(" ");
    writer.push_str(name);
    if !interfaces.is_empty() {
        writer.push_str(" implements ");
        writer.push_str(&interfaces.join(", "));
    }
    writer.fields(fields);
    writer.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use gqlmd_schema::{AppliedDirective, InterfaceDef, SchemaBuilder, TypeDef, TypeRef, UnionDef};

    fn user() -> ObjectDef {
        ObjectDef::new("User")
            .implements("Node")
            .implements("Named")
            .with_field(FieldDef::new("id", TypeRef::non_null(TypeRef::scalar("ID"))))
            .with_field(FieldDef::new("name", TypeRef::scalar("String")))
            .with_field(FieldDef::new("secret", TypeRef::scalar("String")).with_directive(AppliedDirective::new("noDoc")))
    }

    #[test]
    fn test_code() {
        let config = PrinterConfig::default().skip_directive("noDoc");
        assert_eq!(
            print_code(&user(), &config),
            "type User implements Node, Named {\n  id: ID!\n  name: String\n}"
        );
    }

    #[test]
    fn test_metadata_relations() {
        let schema = SchemaBuilder::new()
            .add_type(TypeDef::Interface(InterfaceDef::new("Node")))
            .add_type(TypeDef::Object(user()))
            .add_type(TypeDef::Union(UnionDef::new("SearchResult", ["User"])))
            .build();
        let config = PrinterConfig::default();
        let metadata = print_metadata(&user(), &schema, config.options());

        let fields = metadata.find("### Fields").unwrap_or(usize::MAX);
        let interfaces = metadata.find("### Interfaces").unwrap_or(usize::MAX);
        let member_of = metadata.find("### Member of").unwrap_or(usize::MAX);
        assert!(fields < interfaces && interfaces < member_of && member_of < usize::MAX);
        assert!(metadata.contains("User.<b>id</b>"));
        assert!(metadata.contains("[`Node`](/types/interfaces/node.mdx)"));
        assert!(metadata.contains("[`SearchResult`](/types/unions/search-result.mdx)"));
    }
}
