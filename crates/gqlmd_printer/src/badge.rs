//! Badges: short labels printed next to headings.

use gqlmd_schema::{Category, SchemaElement, TypeRef};

use crate::modifier::named_type;
use crate::options::{PrinterConfig, RenderOptions};
use crate::strings;

/// A badge value, rendered as a `<Badge />` component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Badge {
    pub text: String,
    pub classname: String,
}

impl Badge {
    pub fn new(text: impl Into<String>, classname: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            classname: classname.into(),
        }
    }

    /// A badge with the secondary style.
    pub fn secondary(text: impl Into<String>) -> Self {
        Self::new(text, strings::CSS_BADGE_SECONDARY)
    }

    /// Renders the badge markup.
    pub fn print(&self) -> String {
        format!(r#"<Badge class="badge {}" text="{}"/>"#, self.classname, self.text)
    }
}

/// Group label of a type if it is assigned to one, else its category name.
pub fn category_badge(name: &str, category: Category, config: &PrinterConfig) -> Badge {
    let text = config
        .groups
        .get(name)
        .map_or_else(|| config.locale.category_name(category), String::as_str);
    Badge::secondary(text)
}

/// Badges of a type reference: `non-null` for a non-null reference, else
/// `list` for a list, else the leaf's group or category. Empty when type
/// badges are disabled.
pub fn type_badges(ty: &TypeRef, config: &PrinterConfig) -> Vec<Badge> {
    if !config.type_badges {
        return Vec::new();
    }
    let locale = &config.locale;
    match ty {
        TypeRef::NonNull { .. } => vec![Badge::secondary(&locale.non_null)],
        TypeRef::List { .. } => vec![Badge::secondary(&locale.list)],
        TypeRef::Named { .. } => {
            let (name, category) = named_type(ty);
            vec![category_badge(name, category, config)]
        }
    }
}

/// Badges printed next to an element heading.
///
/// Empty when type badges are disabled. Deprecated elements lead with a
/// `deprecated` badge.
pub fn element_badges<E: SchemaElement + ?Sized>(element: &E, options: RenderOptions<'_>) -> Vec<Badge> {
    let config = options.config;
    if !config.type_badges {
        return Vec::new();
    }

    let mut badges = Vec::new();
    if element.is_deprecated() {
        badges.push(Badge::new(&config.locale.deprecated, strings::CSS_BADGE_DEPRECATED));
    }

    if let Some(ty) = element.declared_type() {
        badges.extend(type_badges(ty, config));
    } else if let Some(category) = element.category() {
        badges.push(category_badge(element.name(), category, config));
    }
    badges
}

/// Badges produced by the custom directives applied to `element`.
pub fn custom_tags<E: SchemaElement>(element: &E, config: &PrinterConfig) -> Vec<Badge> {
    config
        .custom_directives
        .resolve(element)
        .values()
        .filter_map(|(applied, custom)| custom.tag.as_ref()?.tag(applied, element))
        .collect()
}

/// Renders badges separated by single spaces.
pub fn print_badges(badges: &[Badge]) -> String {
    badges.iter().map(Badge::print).collect::<Vec<_>>().join(" ")
}
