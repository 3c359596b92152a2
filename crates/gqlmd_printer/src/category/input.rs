use gqlmd_schema::InputObjectDef;

use crate::code::CodeWriter;
use crate::options::{PrinterConfig, RenderOptions};
use crate::section::print_metadata_section;
use crate::strings;

pub(super) fn print_metadata(input: &InputObjectDef, options: RenderOptions<'_>) -> String {
    print_metadata_section(&input.name, &input.fields, strings::FIELDS, options)
}

pub(super) fn print_code(input: &InputObjectDef, config: &PrinterConfig) -> String {
    let mut writer = CodeWriter::new(config);
    writer.push_str("input ");
    writer.push_str(&input.name);
    writer.fields(&input.fields);
    writer.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use gqlmd_schema::{InputValueDef, TypeRef};

    fn test_name() -> InputObjectDef {
        InputObjectDef::new("TestName")
            .with_field(InputValueDef::new("one", TypeRef::scalar("String")))
            .with_field(InputValueDef::new("two", TypeRef::scalar("Boolean")))
    }

    #[test]
    fn test_metadata() {
        let config = PrinterConfig::default();
        insta::assert_snapshot!(print_metadata(&test_name(), config.options()), @r###"
        ### Fields

        #### [<code style={{ fontWeight: 'normal' }}>TestName.<b>one</b></code>](#one)<Bullet />[`String`](/types/scalars/string.mdx) <Badge class="badge badge--secondary" text="scalar"/> 



        #### [<code style={{ fontWeight: 'normal' }}>TestName.<b>two</b></code>](#two)<Bullet />[`Boolean`](/types/scalars/boolean.mdx) <Badge class="badge badge--secondary" text="scalar"/> 
        "###);
    }

    #[test]
    fn test_code() {
        assert_eq!(
            print_code(&test_name(), &PrinterConfig::default()),
            "input TestName {\n  one: String\n  two: Boolean\n}"
        );
    }

    #[test]
    fn test_code_default_values() {
        let input = InputObjectDef::new("Page")
            .with_field(InputValueDef::new("first", TypeRef::scalar("Int")).with_default_value("10"));
        assert_eq!(
            print_code(&input, &PrinterConfig::default()),
            "input Page {\n  first: Int = 10\n}"
        );
    }
}
