//! JSON configuration file and its resolution into a printer configuration.

use gqlmd_printer::{
    AdmonitionSyntax, Badge, CustomDirective, CustomDirectiveMap, DeprecatedPolicy, DirectiveFilter, Locale,
    PrinterConfig,
};
use gqlmd_schema::{AppliedDirective, Category, Schema, SchemaElement};
use indexmap::IndexMap;
use serde::Deserialize;
use std::path::Path;
use tracing::{debug, warn};

use crate::error::{CliError, Result};

/// Deprecation policy as written in the configuration file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeprecatedSetting {
    #[default]
    Default,
    Group,
    Skip,
}

impl From<DeprecatedSetting> for DeprecatedPolicy {
    fn from(setting: DeprecatedSetting) -> Self {
        match setting {
            DeprecatedSetting::Default => Self::Default,
            DeprecatedSetting::Group => Self::Group,
            DeprecatedSetting::Skip => Self::Skip,
        }
    }
}

/// Badge produced by a custom directive.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TagConfig {
    /// Badge text template.
    pub text: String,
    #[serde(default)]
    pub classname: Option<String>,
}

/// Handlers of one custom directive.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomDirectiveConfig {
    /// Description template, e.g. `Requires the {{role}} role.`
    #[serde(default)]
    pub descriptor: Option<String>,
    #[serde(default)]
    pub tag: Option<TagConfig>,
}

/// Contents of `gqlmd.json`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Config {
    pub base_path: Option<String>,
    pub link_extension: Option<String>,
    pub type_badges: Option<bool>,
    pub deprecated: DeprecatedSetting,
    /// Directive names excluding an element from the documentation.
    pub skip_doc_directive: Vec<String>,
    /// Directive names an element must carry to be documented.
    pub only_doc_directive: Vec<String>,
    pub custom_directive: IndexMap<String, CustomDirectiveConfig>,
    /// Type name to group label.
    pub groups: IndexMap<String, String>,
    /// Display names overriding the category badges.
    pub category_names: IndexMap<Category, String>,
    /// Version of the site generator, selecting the call-out syntax.
    #[serde(alias = "docusaurusVersion")]
    pub host_version: Option<String>,
    /// Text prepended to every page, e.g. component imports.
    pub mdx_declaration: Option<String>,
}

impl Config {
    /// Reads a configuration file.
    pub fn load(path: &Path) -> Result<Self> {
        let source = std::fs::read_to_string(path).map_err(|source| CliError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&source).map_err(|source| CliError::Config {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Resolves the configuration against a schema.
    ///
    /// Only-directives unknown to the schema are ignored with a warning.
    pub fn resolve(&self, schema: &Schema) -> PrinterConfig {
        let mut config = PrinterConfig::default().with_deprecated(self.deprecated.into());

        if let Some(base_path) = &self.base_path {
            config = config.with_base_path(base_path.as_str());
        }
        if let Some(extension) = &self.link_extension {
            config.link_extension.clone_from(extension);
        }
        if let Some(type_badges) = self.type_badges {
            config = config.with_type_badges(type_badges);
        }
        if let Some(version) = &self.host_version {
            config = config.with_admonition(AdmonitionSyntax::from_host_version(version));
        }

        for name in &self.skip_doc_directive {
            config = config.skip_directive(directive_name(name));
        }
        for name in &self.only_doc_directive {
            match schema.get_directive(directive_name(name)) {
                Some(definition) => config = config.only_directive(DirectiveFilter::from(definition)),
                None => warn!(directive = %name, "unknown only-directive ignored"),
            }
        }

        for (type_name, group) in &self.groups {
            config = config.with_group(type_name.as_str(), group.as_str());
        }

        let locale = self
            .category_names
            .iter()
            .fold(Locale::default(), |locale, (category, name)| {
                locale.with_category_name(*category, name.as_str())
            });
        config = config.with_locale(locale);

        let mut custom = CustomDirectiveMap::new();
        for (name, directive) in &self.custom_directive {
            debug!(directive = %name, "custom directive registered");
            custom.insert(directive_name(name), custom_directive(directive));
        }
        config.with_custom_directives(custom)
    }
}

/// Directive names may be written with their `@` sigil.
fn directive_name(name: &str) -> &str {
    name.strip_prefix('@').unwrap_or(name)
}

fn custom_directive(config: &CustomDirectiveConfig) -> CustomDirective {
    let mut custom = CustomDirective::new();
    if let Some(template) = config.descriptor.clone() {
        custom = custom.with_descriptor(move |directive: &AppliedDirective, _: &dyn SchemaElement| {
            interpolate(&template, directive)
        });
    }
    if let Some(tag) = config.tag.clone() {
        custom = custom.with_tag(move |directive: &AppliedDirective, _: &dyn SchemaElement| {
            let text = interpolate(&tag.text, directive);
            if text.is_empty() {
                return None;
            }
            Some(match &tag.classname {
                Some(classname) => Badge::new(text, classname.as_str()),
                None => Badge::secondary(text),
            })
        });
    }
    custom
}

/// Replaces `{{directive}}` with the directive name and `{{arg}}` with the
/// value of argument `arg`. Unknown placeholders are kept verbatim.
pub fn interpolate(template: &str, directive: &AppliedDirective) -> String {
    let mut output = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find("{{") {
        output.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        let Some(end) = after.find("}}") else {
            output.push_str(&rest[start..]);
            return output;
        };

        let key = after[..end].trim();
        if key == "directive" {
            output.push_str(&directive.name);
        } else if let Some(value) = directive.argument(key) {
            match value {
                serde_json::Value::String(text) => output.push_str(text),
                other => output.push_str(&other.to_string()),
            }
        } else {
            output.push_str(&rest[start..start + 2 + end + 2]);
        }
        rest = &after[end + 2..];
    }

    output.push_str(rest);
    output
}
