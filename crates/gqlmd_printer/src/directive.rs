//! Custom directives: documentation text and badges produced from directives
//! applied to schema elements.

use gqlmd_schema::{AppliedDirective, SchemaElement};
use indexmap::IndexMap;
use std::fmt;
use std::sync::Arc;

use crate::badge::Badge;

/// Produces documentation text for an applied directive.
pub trait DirectiveDescriptor: Send + Sync {
    fn describe(&self, directive: &AppliedDirective, element: &dyn SchemaElement) -> String;
}

impl<F> DirectiveDescriptor for F
where
    F: Fn(&AppliedDirective, &dyn SchemaElement) -> String + Send + Sync,
{
    fn describe(&self, directive: &AppliedDirective, element: &dyn SchemaElement) -> String {
        self(directive, element)
    }
}

/// Produces a badge for an applied directive.
pub trait DirectiveTag: Send + Sync {
    fn tag(&self, directive: &AppliedDirective, element: &dyn SchemaElement) -> Option<Badge>;
}

impl<F> DirectiveTag for F
where
    F: Fn(&AppliedDirective, &dyn SchemaElement) -> Option<Badge> + Send + Sync,
{
    fn tag(&self, directive: &AppliedDirective, element: &dyn SchemaElement) -> Option<Badge> {
        self(directive, element)
    }
}

/// Handlers registered for one custom directive.
#[derive(Clone, Default)]
pub struct CustomDirective {
    pub descriptor: Option<Arc<dyn DirectiveDescriptor>>,
    pub tag: Option<Arc<dyn DirectiveTag>>,
}

impl CustomDirective {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_descriptor(mut self, descriptor: impl DirectiveDescriptor + 'static) -> Self {
        self.descriptor = Some(Arc::new(descriptor));
        self
    }

    pub fn with_tag(mut self, tag: impl DirectiveTag + 'static) -> Self {
        self.tag = Some(Arc::new(tag));
        self
    }
}

impl fmt::Debug for CustomDirective {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CustomDirective")
            .field("descriptor", &self.descriptor.is_some())
            .field("tag", &self.tag.is_some())
            .finish()
    }
}

/// Custom directives by name, in registration order.
#[derive(Debug, Clone, Default)]
pub struct CustomDirectiveMap {
    directives: IndexMap<String, CustomDirective>,
}

impl CustomDirectiveMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers handlers for a directive, replacing previous ones.
    pub fn insert(&mut self, name: impl Into<String>, directive: CustomDirective) {
        self.directives.insert(name.into(), directive);
    }

    /// Builder form of [`CustomDirectiveMap::insert`].
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, directive: CustomDirective) -> Self {
        self.insert(name, directive);
        self
    }

    pub fn get(&self, name: &str) -> Option<&CustomDirective> {
        self.directives.get(name)
    }

    pub fn is_empty(&self) -> bool {
        self.directives.is_empty()
    }

    pub fn len(&self) -> usize {
        self.directives.len()
    }

    /// Matches the directives applied to `element` against the registered
    /// ones, in the element's declaration order. A directive applied more than
    /// once is resolved once, from its first application.
    pub fn resolve<'a, E: SchemaElement + ?Sized>(
        &'a self,
        element: &'a E,
    ) -> IndexMap<&'a str, (&'a AppliedDirective, &'a CustomDirective)> {
        let mut resolved = IndexMap::new();
        if self.directives.is_empty() {
            return resolved;
        }
        for applied in element.applied_directives() {
            if let Some(custom) = self.directives.get(&applied.name) {
                resolved
                    .entry(applied.name.as_str())
                    .or_insert((applied, custom));
            }
        }
        resolved
    }
}
