//! Printer configuration and per-call render options.

use gqlmd_core::markdown::HeadingLevel;
use gqlmd_schema::{Category, DirectiveDefinition, DirectiveLocation};
use rustc_hash::FxHashMap;

use crate::directive::CustomDirectiveMap;
use crate::strings;

/// How deprecated elements are documented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DeprecatedPolicy {
    /// Deprecated elements are printed in place.
    #[default]
    Default,
    /// Deprecated members are moved to a collapsible section.
    Group,
    /// Deprecated elements are left out.
    Skip,
}

impl DeprecatedPolicy {
    /// Parses a policy name (`default`, `group`, `skip`).
    pub fn parse(policy: &str) -> Option<Self> {
        match policy {
            "default" => Some(Self::Default),
            "group" => Some(Self::Group),
            "skip" => Some(Self::Skip),
            _ => None,
        }
    }
}

/// Call-out syntax of the host site generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AdmonitionSyntax {
    /// `:::caution TITLE` (host major version 2 and older).
    Caution,
    /// `:::warning[TITLE]`.
    #[default]
    Warning,
}

impl AdmonitionSyntax {
    /// Selects the syntax from the host version string, e.g. `2.4.2`.
    ///
    /// Unparseable versions select the current syntax.
    pub fn from_host_version(version: &str) -> Self {
        let major = version
            .trim()
            .trim_start_matches('v')
            .split('.')
            .next()
            .and_then(|major| major.parse::<u32>().ok());
        match major {
            Some(major) if major <= 2 => Self::Caution,
            _ => Self::Warning,
        }
    }
}

/// Labels of a collapsible (details) section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Collapsible {
    pub data_open: String,
    pub data_close: String,
}

impl Default for Collapsible {
    fn default() -> Self {
        Self {
            data_open: strings::HIDE_DEPRECATED.to_string(),
            data_close: strings::SHOW_DEPRECATED.to_string(),
        }
    }
}

/// An only-directive filter: a directive name and the locations it was
/// declared for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectiveFilter {
    pub name: String,
    pub locations: Vec<DirectiveLocation>,
}

impl DirectiveFilter {
    pub fn new(name: impl Into<String>, locations: impl IntoIterator<Item = DirectiveLocation>) -> Self {
        Self {
            name: name.into(),
            locations: locations.into_iter().collect(),
        }
    }

    /// Returns true if the directive may gate an element at `location`.
    pub fn applies_to(&self, location: Option<DirectiveLocation>) -> bool {
        location.is_some_and(|location| self.locations.contains(&location))
    }
}

impl From<&DirectiveDefinition> for DirectiveFilter {
    fn from(definition: &DirectiveDefinition) -> Self {
        Self::new(definition.name.clone(), definition.locations.iter().copied())
    }
}

/// Display strings of the generated pages.
#[derive(Debug, Clone)]
pub struct Locale {
    categories: FxHashMap<Category, String>,
    pub no_description: String,
    pub deprecated: String,
    pub non_null: String,
    pub list: String,
}

impl Default for Locale {
    fn default() -> Self {
        Self {
            categories: FxHashMap::default(),
            no_description: strings::NO_DESCRIPTION_TEXT.to_string(),
            deprecated: strings::DEPRECATED.to_string(),
            non_null: strings::NON_NULL.to_string(),
            list: strings::LIST.to_string(),
        }
    }
}

impl Locale {
    /// Returns the display name of a category.
    pub fn category_name(&self, category: Category) -> &str {
        self.categories
            .get(&category)
            .map_or(category.as_str(), String::as_str)
    }

    /// Overrides the display name of a category.
    pub fn with_category_name(mut self, category: Category, name: impl Into<String>) -> Self {
        self.categories.insert(category, name.into());
        self
    }

    /// Title of deprecation call-outs.
    pub fn deprecated_title(&self) -> String {
        self.deprecated.to_uppercase()
    }
}

/// Printer configuration, resolved once and shared by every render call.
#[derive(Debug, Clone)]
pub struct PrinterConfig {
    /// Root of the type pages, e.g. `/types`.
    pub base_path: String,
    /// Page file extension, e.g. `.mdx`.
    pub link_extension: String,
    /// Print type badges.
    pub type_badges: bool,
    pub deprecated: DeprecatedPolicy,
    /// Elements carrying one of these directives are not documented.
    pub skip_doc_directives: Vec<String>,
    /// Only elements carrying one of these directives are documented.
    pub only_doc_directives: Vec<DirectiveFilter>,
    pub custom_directives: CustomDirectiveMap,
    /// Type name to group label.
    pub groups: FxHashMap<String, String>,
    pub admonition: AdmonitionSyntax,
    pub locale: Locale,
    /// Labels of the collapsible deprecated section.
    pub deprecated_section: Collapsible,
    /// Heading level of top-level sections.
    pub level: HeadingLevel,
}

impl Default for PrinterConfig {
    fn default() -> Self {
        Self {
            base_path: "/types".to_string(),
            link_extension: ".mdx".to_string(),
            type_badges: true,
            deprecated: DeprecatedPolicy::Default,
            skip_doc_directives: Vec::new(),
            only_doc_directives: Vec::new(),
            custom_directives: CustomDirectiveMap::default(),
            groups: FxHashMap::default(),
            admonition: AdmonitionSyntax::Warning,
            locale: Locale::default(),
            deprecated_section: Collapsible::default(),
            level: HeadingLevel::SECTION,
        }
    }
}

impl PrinterConfig {
    /// Creates a configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_base_path(mut self, base_path: impl Into<String>) -> Self {
        self.base_path = base_path.into();
        self
    }

    pub fn with_type_badges(mut self, enabled: bool) -> Self {
        self.type_badges = enabled;
        self
    }

    pub fn with_deprecated(mut self, policy: DeprecatedPolicy) -> Self {
        self.deprecated = policy;
        self
    }

    pub fn skip_directive(mut self, name: impl Into<String>) -> Self {
        self.skip_doc_directives.push(name.into());
        self
    }

    pub fn only_directive(mut self, filter: DirectiveFilter) -> Self {
        self.only_doc_directives.push(filter);
        self
    }

    pub fn with_custom_directives(mut self, custom_directives: CustomDirectiveMap) -> Self {
        self.custom_directives = custom_directives;
        self
    }

    pub fn with_group(mut self, type_name: impl Into<String>, group: impl Into<String>) -> Self {
        self.groups.insert(type_name.into(), group.into());
        self
    }

    pub fn with_admonition(mut self, admonition: AdmonitionSyntax) -> Self {
        self.admonition = admonition;
        self
    }

    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    /// Root render options for this configuration.
    pub fn options(&self) -> RenderOptions<'_> {
        RenderOptions::new(self)
    }
}

/// Options threaded through every render call.
///
/// Recursive calls derive modified copies; the configuration itself is
/// never mutated.
#[derive(Debug, Clone, Copy)]
pub struct RenderOptions<'a> {
    pub config: &'a PrinterConfig,
    pub level: HeadingLevel,
    /// Name of the enclosing type, used for dotted `Parent.name` labels.
    pub parent_type: Option<&'a str>,
    pub collapsible: Option<&'a Collapsible>,
}

impl<'a> RenderOptions<'a> {
    pub fn new(config: &'a PrinterConfig) -> Self {
        Self {
            config,
            level: config.level,
            parent_type: None,
            collapsible: None,
        }
    }

    #[must_use]
    pub fn with_level(self, level: HeadingLevel) -> Self {
        Self { level, ..self }
    }

    #[must_use]
    pub fn with_parent_type(self, parent_type: &'a str) -> Self {
        Self {
            parent_type: Some(parent_type),
            ..self
        }
    }

    #[must_use]
    pub fn without_parent_type(self) -> Self {
        Self {
            parent_type: None,
            ..self
        }
    }

    #[must_use]
    pub fn with_collapsible(self, collapsible: &'a Collapsible) -> Self {
        Self {
            collapsible: Some(collapsible),
            ..self
        }
    }

    #[must_use]
    pub fn without_collapsible(self) -> Self {
        Self {
            collapsible: None,
            ..self
        }
    }
}
