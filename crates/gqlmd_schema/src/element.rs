//! The capability set the printer needs from a schema element.

use crate::directive::{AppliedDirective, DirectiveDefinition, DirectiveLocation};
use crate::schema::{EnumValueDef, FieldDef, InputValueDef, InputValueKind, TypeDef};
use crate::types::{Category, TypeRef};

/// A documented schema element: named type, field, argument, enum value or
/// directive definition.
pub trait SchemaElement {
    /// Element name.
    fn name(&self) -> &str;

    /// Documentation string.
    fn description(&self) -> Option<&str>;

    /// Directives applied to the element, in declaration order.
    fn applied_directives(&self) -> &[AppliedDirective];

    /// The directive location matching the element kind.
    ///
    /// `None` for elements no directive can be applied to.
    fn location(&self) -> Option<DirectiveLocation>;

    /// True if the element carries an explicit deprecation flag or a
    /// non-empty deprecation reason.
    fn is_deprecated(&self) -> bool {
        false
    }

    /// Deprecation reason, if any.
    fn deprecation_reason(&self) -> Option<&str> {
        None
    }

    /// Declared type of fields and input values.
    fn declared_type(&self) -> Option<&TypeRef> {
        None
    }

    /// Default value of arguments and input fields, as SDL text.
    fn default_value(&self) -> Option<&str> {
        None
    }

    /// Arguments declared by fields and directives.
    fn arguments(&self) -> &[InputValueDef] {
        &[]
    }

    /// Page category of named types and directive definitions.
    fn category(&self) -> Option<Category> {
        None
    }

    /// Returns true if a directive named `name` is applied to the element.
    fn has_directive(&self, name: &str) -> bool {
        self.applied_directives().iter().any(|d| d.name == name)
    }
}

fn is_deprecated(flag: bool, reason: Option<&str>) -> bool {
    flag || reason.is_some_and(|r| !r.trim().is_empty())
}

impl<T: SchemaElement + ?Sized> SchemaElement for &T {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn description(&self) -> Option<&str> {
        (**self).description()
    }

    fn applied_directives(&self) -> &[AppliedDirective] {
        (**self).applied_directives()
    }

    fn location(&self) -> Option<DirectiveLocation> {
        (**self).location()
    }

    fn is_deprecated(&self) -> bool {
        (**self).is_deprecated()
    }

    fn deprecation_reason(&self) -> Option<&str> {
        (**self).deprecation_reason()
    }

    fn declared_type(&self) -> Option<&TypeRef> {
        (**self).declared_type()
    }

    fn default_value(&self) -> Option<&str> {
        (**self).default_value()
    }

    fn arguments(&self) -> &[InputValueDef] {
        (**self).arguments()
    }

    fn category(&self) -> Option<Category> {
        (**self).category()
    }
}

impl SchemaElement for TypeDef {
    fn name(&self) -> &str {
        TypeDef::name(self)
    }

    fn description(&self) -> Option<&str> {
        TypeDef::description(self)
    }

    fn applied_directives(&self) -> &[AppliedDirective] {
        self.directives()
    }

    fn location(&self) -> Option<DirectiveLocation> {
        Some(match self {
            TypeDef::Scalar(_) => DirectiveLocation::Scalar,
            TypeDef::Object(_) => DirectiveLocation::Object,
            TypeDef::Interface(_) => DirectiveLocation::Interface,
            TypeDef::Union(_) => DirectiveLocation::Union,
            TypeDef::Enum(_) => DirectiveLocation::Enum,
            TypeDef::InputObject(_) => DirectiveLocation::InputObject,
        })
    }

    fn category(&self) -> Option<Category> {
        Some(TypeDef::category(self))
    }
}

impl SchemaElement for FieldDef {
    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    fn applied_directives(&self) -> &[AppliedDirective] {
        &self.directives
    }

    fn location(&self) -> Option<DirectiveLocation> {
        Some(DirectiveLocation::FieldDefinition)
    }

    fn is_deprecated(&self) -> bool {
        is_deprecated(self.deprecated, self.deprecation_reason.as_deref())
    }

    fn deprecation_reason(&self) -> Option<&str> {
        self.deprecation_reason.as_deref()
    }

    fn declared_type(&self) -> Option<&TypeRef> {
        Some(&self.ty)
    }

    fn arguments(&self) -> &[InputValueDef] {
        &self.arguments
    }
}

impl SchemaElement for InputValueDef {
    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    fn applied_directives(&self) -> &[AppliedDirective] {
        &self.directives
    }

    fn location(&self) -> Option<DirectiveLocation> {
        Some(match self.kind {
            InputValueKind::Argument => DirectiveLocation::ArgumentDefinition,
            InputValueKind::InputField => DirectiveLocation::InputFieldDefinition,
        })
    }

    fn is_deprecated(&self) -> bool {
        is_deprecated(self.deprecated, self.deprecation_reason.as_deref())
    }

    fn deprecation_reason(&self) -> Option<&str> {
        self.deprecation_reason.as_deref()
    }

    fn declared_type(&self) -> Option<&TypeRef> {
        Some(&self.ty)
    }

    fn default_value(&self) -> Option<&str> {
        self.default_value.as_deref()
    }
}

impl SchemaElement for EnumValueDef {
    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    fn applied_directives(&self) -> &[AppliedDirective] {
        &self.directives
    }

    fn location(&self) -> Option<DirectiveLocation> {
        Some(DirectiveLocation::EnumValue)
    }

    fn is_deprecated(&self) -> bool {
        is_deprecated(self.deprecated, self.deprecation_reason.as_deref())
    }

    fn deprecation_reason(&self) -> Option<&str> {
        self.deprecation_reason.as_deref()
    }
}

impl SchemaElement for DirectiveDefinition {
    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    fn applied_directives(&self) -> &[AppliedDirective] {
        &[]
    }

    fn location(&self) -> Option<DirectiveLocation> {
        None
    }

    fn arguments(&self) -> &[InputValueDef] {
        &self.arguments
    }

    fn category(&self) -> Option<Category> {
        Some(Category::Directive)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::ObjectDef;

    #[test]
    fn test_deprecation_from_reason() {
        let mut field = FieldDef::new("old", TypeRef::scalar("String"));
        assert!(!field.is_deprecated());
        field.deprecation_reason = Some("use `new`".to_string());
        assert!(field.is_deprecated());
        field.deprecation_reason = Some("  ".to_string());
        assert!(!field.is_deprecated());
        field.deprecated = true;
        assert!(field.is_deprecated());
    }

    #[test]
    fn test_locations() {
        let object = TypeDef::Object(ObjectDef::new("User"));
        assert_eq!(SchemaElement::location(&object), Some(DirectiveLocation::Object));
        let argument = InputValueDef::new("id", TypeRef::scalar("ID"));
        assert_eq!(argument.location(), Some(DirectiveLocation::ArgumentDefinition));
    }

    #[test]
    fn test_has_directive() {
        let field = FieldDef::new("secret", TypeRef::scalar("String"))
            .with_directive(AppliedDirective::new("noDoc"));
        assert!(field.has_directive("noDoc"));
        assert!(!field.has_directive("doc"));
    }

    #[test]
    fn test_reference_delegates() {
        let value = EnumValueDef::new("RED").deprecated(Some("gone"));
        let by_ref = &value;
        assert!(by_ref.is_deprecated());
        assert_eq!(SchemaElement::deprecation_reason(&by_ref), Some("gone"));
    }
}
