//! Section items: one heading block per field, argument, value or type.

use gqlmd_core::MARKDOWN_EOL;
use gqlmd_schema::SchemaElement;

use crate::badge::{element_badges, print_badges};
use crate::description::print_description;
use crate::filter::is_printable;
use crate::link::{print_link, print_type_link};
use crate::options::RenderOptions;
use crate::section::print_section;

/// Renders one item block at `options.level`, followed by its arguments one
/// level deeper. Excluded elements render as an empty string.
pub fn print_section_item<E: SchemaElement>(element: &E, options: RenderOptions<'_>) -> String {
    let config = options.config;
    if !is_printable(element, config) {
        return String::new();
    }

    let marker = options.level.marker();
    let link = print_link(element, options);
    let type_link = element
        .declared_type()
        .map(|ty| print_type_link(ty, config))
        .unwrap_or_default();
    let badges = print_badges(&element_badges(element, options));
    let description = print_description(element, options, "");

    let mut item = format!(
        "{marker} {link}{type_link} {badges} {MARKDOWN_EOL}{}{MARKDOWN_EOL}",
        description.trim()
    );

    let arguments = element.arguments();
    if !arguments.is_empty() {
        let argument_options = options
            .with_parent_type(element.name())
            .without_collapsible();
        item.push_str(&print_section(arguments, "", argument_options));
    }

    item
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::{DeprecatedPolicy, PrinterConfig};
    use gqlmd_core::markdown::HeadingLevel;
    use gqlmd_schema::{AppliedDirective, Category, FieldDef, InputValueDef, ObjectDef, TypeDef, TypeRef};

    fn item_options(config: &PrinterConfig) -> RenderOptions<'_> {
        config.options().with_level(HeadingLevel::new(4))
    }

    #[test]
    fn test_named_type_item() {
        let config = PrinterConfig::default();
        let object = TypeDef::Object(ObjectDef::new("EntityTypeName").with_description("Lorem ipsum"));
        insta::assert_snapshot!(print_section_item(&object, item_options(&config)), @r###"
        #### [`EntityTypeName`](/types/objects/entity-type-name.mdx) <Badge class="badge badge--secondary" text="object"/> 
        Lorem ipsum
        "###);
    }

    #[test]
    fn test_non_null_field_item() {
        let config = PrinterConfig::default();
        let field = FieldDef::new(
            "EntityTypeName",
            TypeRef::non_null(TypeRef::named("NonNullableObjectType", Category::Object)),
        );
        assert_eq!(
            print_section_item(&field, item_options(&config)),
            "#### [`EntityTypeName`](#entity-type-name)<Bullet />[`NonNullableObjectType!`](/types/objects/non-nullable-object-type.mdx) <Badge class=\"badge badge--secondary\" text=\"non-null\"/> \n\n"
        );
    }

    #[test]
    fn test_list_field_item() {
        let config = PrinterConfig::default();
        let field = FieldDef::new(
            "EntityTypeNameList",
            TypeRef::list(TypeRef::non_null(TypeRef::scalar("Int"))),
        );
        assert_eq!(
            print_section_item(&field, item_options(&config)),
            "#### [`EntityTypeNameList`](#entity-type-name-list)<Bullet />[`[Int!]`](/types/scalars/int.mdx) <Badge class=\"badge badge--secondary\" text=\"list\"/> \n\n"
        );
    }

    #[test]
    fn test_field_item_with_arguments() {
        let config = PrinterConfig::default();
        let field = FieldDef::new("EntityTypeName", TypeRef::scalar("String"))
            .with_argument(InputValueDef::new("ParameterTypeName", TypeRef::scalar("String")));
        let item = print_section_item(&field, item_options(&config));
        assert_eq!(
            item,
            concat!(
                "#### [`EntityTypeName`](#entity-type-name)<Bullet />[`String`](/types/scalars/string.mdx) <Badge class=\"badge badge--secondary\" text=\"scalar\"/> \n\n",
                "##### [<code style={{ fontWeight: 'normal' }}>EntityTypeName.<b>ParameterTypeName</b></code>](#parameter-type-name)<Bullet />[`String`](/types/scalars/string.mdx) <Badge class=\"badge badge--secondary\" text=\"scalar\"/> \n\n",
                "\n\n",
            )
        );
    }

    #[test]
    fn test_deprecated_item_skips_argument_with_skip_directive() {
        let config = PrinterConfig::default().skip_directive("noDoc");
        let field = FieldDef::new("EntityTypeName", TypeRef::scalar("String"))
            .deprecated(None)
            .with_argument(
                InputValueDef::new("ParameterTypeName", TypeRef::scalar("String"))
                    .with_directive(AppliedDirective::new("doc")),
            )
            .with_argument(
                InputValueDef::new("ParameterSkipDoc", TypeRef::scalar("String"))
                    .with_directive(AppliedDirective::new("noDoc")),
            );
        let item = print_section_item(&field, item_options(&config));
        assert!(item.starts_with(
            "#### [`EntityTypeName`](#entity-type-name)<Bullet />[`String`](/types/scalars/string.mdx) <Badge class=\"badge badge--deprecated badge--secondary\" text=\"deprecated\"/> <Badge class=\"badge badge--secondary\" text=\"scalar\"/> \n:::warning[DEPRECATED]\n\n:::\n"
        ));
        assert!(item.contains("EntityTypeName.<b>ParameterTypeName</b>"));
        assert!(!item.contains("ParameterSkipDoc"));
    }

    #[test]
    fn test_excluded_item() {
        let config = PrinterConfig::default().skip_directive("noDoc");
        let field = FieldDef::new("secret", TypeRef::scalar("String"))
            .with_directive(AppliedDirective::new("noDoc"));
        assert_eq!(print_section_item(&field, item_options(&config)), "");

        let config = PrinterConfig::default().with_deprecated(DeprecatedPolicy::Skip);
        let field = FieldDef::new("old", TypeRef::scalar("String")).deprecated(Some("gone"));
        assert_eq!(print_section_item(&field, item_options(&config)), "");
    }

    #[test]
    fn test_parent_type_label() {
        let config = PrinterConfig::default().with_type_badges(false);
        let field = FieldDef::new("EntityTypeName", TypeRef::scalar("String"));
        let item = print_section_item(&field, item_options(&config).with_parent_type("parentTypePrefix"));
        assert_eq!(
            item,
            "#### [<code style={{ fontWeight: 'normal' }}>parentTypePrefix.<b>EntityTypeName</b></code>](#entity-type-name)<Bullet />[`String`](/types/scalars/string.mdx)  \n\n"
        );
    }
}
