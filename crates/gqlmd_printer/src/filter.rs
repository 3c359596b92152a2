//! Directive-driven inclusion policy.

use gqlmd_schema::SchemaElement;
use tracing::trace;

use crate::options::{DeprecatedPolicy, PrinterConfig};

/// Decides whether `element` is documented.
///
/// Rules, first exclusion wins:
/// 1. the element carries a skip directive;
/// 2. deprecated elements are skipped and the element is deprecated;
/// 3. only-directives are configured, at least one of them is declared for the
///    element's location, and the element carries none of those.
///
/// Only-directives declared for other locations never exclude the element.
/// An absent element is always excluded.
pub fn should_include<E: SchemaElement + ?Sized>(element: Option<&E>, config: &PrinterConfig) -> bool {
    let Some(element) = element else {
        return false;
    };

    if let Some(directive) = config
        .skip_doc_directives
        .iter()
        .find(|name| element.has_directive(name))
    {
        trace!(element = element.name(), directive = %directive, "skipped by directive");
        return false;
    }

    if config.deprecated == DeprecatedPolicy::Skip && element.is_deprecated() {
        trace!(element = element.name(), "skipped as deprecated");
        return false;
    }

    has_only_directive(element, config)
}

fn has_only_directive<E: SchemaElement + ?Sized>(element: &E, config: &PrinterConfig) -> bool {
    let location = element.location();
    let mut applicable = config
        .only_doc_directives
        .iter()
        .filter(|filter| filter.applies_to(location))
        .peekable();

    if applicable.peek().is_none() {
        return true;
    }

    let included = applicable.any(|filter| element.has_directive(&filter.name));
    if !included {
        trace!(element = element.name(), "missing only-directive");
    }
    included
}

/// Shorthand for [`should_include`] on a present element.
pub fn is_printable<E: SchemaElement + ?Sized>(element: &E, config: &PrinterConfig) -> bool {
    should_include(Some(element), config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::DirectiveFilter;
    use gqlmd_schema::{
        AppliedDirective, DirectiveLocation, EnumDef, FieldDef, TypeDef, TypeRef,
    };

    fn enum_type() -> TypeDef {
        TypeDef::Enum(EnumDef::new("test").with_directive(AppliedDirective::new("public")))
    }

    #[test]
    fn test_no_options_includes() {
        assert!(is_printable(&enum_type(), &PrinterConfig::default()));
    }

    #[test]
    fn test_absent_element_excluded() {
        assert!(!should_include::<TypeDef>(None, &PrinterConfig::default()));
    }

    #[test]
    fn test_skip_directive() {
        let config = PrinterConfig::default().skip_directive("public");
        assert!(!is_printable(&enum_type(), &config));

        let config = PrinterConfig::default().skip_directive("noDoc");
        assert!(is_printable(&enum_type(), &config));
    }

    #[test]
    fn test_skip_directive_takes_precedence() {
        let config = PrinterConfig::default()
            .skip_directive("public")
            .only_directive(DirectiveFilter::new("public", [DirectiveLocation::Enum]));
        assert!(!is_printable(&enum_type(), &config));
    }

    #[test]
    fn test_deprecated_policy() {
        let field = FieldDef::new("old", TypeRef::scalar("String")).deprecated(Some("use new"));
        let skip = PrinterConfig::default().with_deprecated(DeprecatedPolicy::Skip);
        assert!(!is_printable(&field, &skip));
        assert!(is_printable(&field, &PrinterConfig::default()));
        let group = PrinterConfig::default().with_deprecated(DeprecatedPolicy::Group);
        assert!(is_printable(&field, &group));
    }

    #[test]
    fn test_only_directive_present() {
        let config = PrinterConfig::default()
            .only_directive(DirectiveFilter::new("public", [DirectiveLocation::Enum]));
        assert!(is_printable(&enum_type(), &config));
    }

    #[test]
    fn test_only_directive_missing_at_valid_location() {
        let config = PrinterConfig::default()
            .only_directive(DirectiveFilter::new("noDoc", [DirectiveLocation::Enum]));
        assert!(!is_printable(&enum_type(), &config));
    }

    #[test]
    fn test_only_directive_other_location_passes_through() {
        let config = PrinterConfig::default()
            .only_directive(DirectiveFilter::new("doc", [DirectiveLocation::Object]));
        assert!(is_printable(&enum_type(), &config));
    }

    #[test]
    fn test_only_directive_and_skip_deprecated() {
        let field = FieldDef::new("old", TypeRef::scalar("String"))
            .deprecated(None)
            .with_directive(AppliedDirective::new("public"));
        let config = PrinterConfig::default()
            .with_deprecated(DeprecatedPolicy::Skip)
            .only_directive(DirectiveFilter::new("public", [DirectiveLocation::FieldDefinition]));
        assert!(!is_printable(&field, &config));
    }
}
