//! Plain namespaces of attributes.

use std::any::Any;

use indexmap::IndexMap;

use crate::Attribute;

/// A named namespace, such as `colour.biochemistry`, holding its members in
/// declaration order.
///
/// A `Module` performs ordinary lookups only. Redirection of renamed and
/// removed members is layered on top by [`ModuleApi`](crate::ModuleApi).
#[derive(Debug, Clone)]
pub struct Module {
    name: String,
    attributes: IndexMap<String, Attribute>,
}

impl Module {
    /// Create an empty namespace with the given fully-qualified name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: IndexMap::new(),
        }
    }

    /// Add a member, replacing any member of the same name.
    pub fn with<T: Any + Send + Sync>(self, name: impl Into<String>, value: T) -> Self {
        self.with_attribute(name, Attribute::new(value))
    }

    /// Add an already wrapped member.
    pub fn with_attribute(mut self, name: impl Into<String>, attribute: Attribute) -> Self {
        self.attributes.insert(name.into(), attribute);
        self
    }

    /// Register `alias` as a second name for the existing member `target`.
    ///
    /// Both names share one allocation. An unknown `target` leaves the
    /// namespace unchanged.
    pub fn with_alias(self, alias: impl Into<String>, target: &str) -> Self {
        match self.attributes.get(target).cloned() {
            Some(attribute) => self.with_attribute(alias, attribute),
            None => {
                tracing::debug!(module = %self.name, target, "alias target missing");
                self
            }
        }
    }

    /// Fully-qualified namespace name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Ordinary lookup.
    pub fn get(&self, name: &str) -> Option<&Attribute> {
        self.attributes.get(name)
    }

    /// Check whether `name` is an ordinary member.
    pub fn contains(&self, name: &str) -> bool {
        self.attributes.contains_key(name)
    }

    /// Member names in declaration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.attributes.keys().map(String::as_str)
    }

    /// Number of members.
    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    /// Check whether the namespace has no members.
    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }
}
