//! Redirecting namespaces.

use colour_errors::{AttributeError, ConfigError};

use crate::{
    ApiChanges, Attribute, ChangeRule, ChangeTable, DeprecationConfig, DeprecationWarning, Module,
    WarningCategory, WarningSink,
};

/// Resolves fully-qualified names to their targets.
///
/// Rename rules store the qualified name of their replacement; resolving it
/// requires a root that knows every installed namespace. The registry is the
/// usual root; a single [`Module`] can serve as the root for rules that stay
/// inside it.
pub trait AttributeRoot {
    /// Resolve `qualified` by ordinary lookup, without applying any change
    /// table.
    ///
    /// # Errors
    ///
    /// Returns [`AttributeError::NoNamespace`] for an unqualified name,
    /// [`AttributeError::ModuleNotFound`] when the namespace is unknown and
    /// [`AttributeError::NotFound`] when the member is missing.
    fn lookup(&self, qualified: &str) -> Result<Attribute, AttributeError>;
}

/// Split `a.b.c` into `("a.b", "c")`.
///
/// # Errors
///
/// Returns [`AttributeError::NoNamespace`] when `qualified` has no dot.
pub fn split_qualified(qualified: &str) -> Result<(&str, &str), AttributeError> {
    match qualified.rsplit_once('.') {
        Some((module, attribute)) if !module.is_empty() && !attribute.is_empty() => {
            Ok((module, attribute))
        }
        _ => Err(AttributeError::NoNamespace(qualified.to_owned())),
    }
}

impl AttributeRoot for Module {
    fn lookup(&self, qualified: &str) -> Result<Attribute, AttributeError> {
        let (module, attribute) = split_qualified(qualified)?;
        if module != self.name() {
            return Err(AttributeError::ModuleNotFound(module.to_owned()));
        }
        self.get(attribute)
            .cloned()
            .ok_or_else(|| AttributeError::not_found(module, attribute))
    }
}

/// A namespace wrapped with its change table.
///
/// Every lookup consults the table first:
///
/// | rule | outcome |
/// |---|---|
/// | renamed | warn, return the replacement |
/// | future renamed | warn, return the replacement |
/// | removed | fail with [`AttributeError::Removed`] |
/// | future removed | warn, return the current member |
/// | changed | warn, return the current member |
///
/// Names without a rule resolve by ordinary lookup on the namespace and fail
/// with [`AttributeError::NotFound`] when absent. A call emits at most one
/// warning and never mutates the table or the namespace.
#[derive(Debug, Clone)]
pub struct ModuleApi {
    module: Module,
    changes: ChangeTable,
}

impl ModuleApi {
    /// Wrap `module` with `changes`.
    pub fn new(module: Module, changes: ChangeTable) -> Self {
        Self { module, changes }
    }

    /// Wrap `module` with the table built from `changes`.
    ///
    /// During a documentation build the table is left empty so that old
    /// names are not redirected.
    ///
    /// # Errors
    ///
    /// Returns an error if a change descriptor is malformed.
    pub fn from_changes(
        module: Module,
        changes: &ApiChanges,
        config: &DeprecationConfig,
    ) -> Result<Self, ConfigError> {
        let table = if config.documentation_build {
            tracing::debug!(module = %module.name(), "documentation build, change table skipped");
            ChangeTable::empty()
        } else {
            ChangeTable::build(changes)?
        };
        Ok(Self::new(module, table))
    }

    /// Fully-qualified namespace name.
    pub fn name(&self) -> &str {
        self.module.name()
    }

    /// Wrapped namespace.
    pub fn module(&self) -> &Module {
        &self.module
    }

    /// Change table.
    pub fn changes(&self) -> &ChangeTable {
        &self.changes
    }

    /// Resolve an unqualified attribute name.
    ///
    /// # Errors
    ///
    /// Returns [`AttributeError::Removed`] for removed names,
    /// [`AttributeError::NotFound`] for names neither declared nor present,
    /// and any error raised by `root` while resolving a replacement.
    pub fn getattr(
        &self,
        name: &str,
        root: &dyn AttributeRoot,
        sink: &dyn WarningSink,
    ) -> Result<Attribute, AttributeError> {
        let Some(rule) = self.changes.get(name) else {
            return self.current(name);
        };

        match rule {
            ChangeRule::Renamed { name: old, new_name } => {
                let target = root.lookup(new_name)?;
                self.warn(sink, WarningCategory::Renamed, old, rule);
                Ok(target)
            }
            ChangeRule::FutureRenamed { name: old, new_name } => {
                let target = root.lookup(new_name)?;
                self.warn(sink, WarningCategory::FutureRenamed, old, rule);
                Ok(target)
            }
            ChangeRule::Removed { name: old, message } => {
                Err(AttributeError::removed(old.as_str(), message.clone()))
            }
            ChangeRule::FutureRemoved { name: old } => {
                self.warn(sink, WarningCategory::FutureRemoved, old, rule);
                self.current(name)
            }
            ChangeRule::Changed { name: old, .. } => {
                self.warn(sink, WarningCategory::Changed, old, rule);
                self.current(name)
            }
        }
    }

    /// Public member names: the namespace's names minus every name that has
    /// a change rule, sorted.
    pub fn dir(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .module
            .names()
            .filter(|name| !self.changes.contains(name))
            .map(str::to_owned)
            .collect();
        names.sort();
        names
    }

    fn current(&self, name: &str) -> Result<Attribute, AttributeError> {
        self.module
            .get(name)
            .cloned()
            .ok_or_else(|| self.not_found(name))
    }

    fn not_found(&self, name: &str) -> AttributeError {
        AttributeError::not_found(self.module.name(), name)
    }

    fn warn(
        &self,
        sink: &dyn WarningSink,
        category: WarningCategory,
        old: &str,
        rule: &ChangeRule,
    ) {
        if let Some(message) = rule.warning_message() {
            sink.emit(&DeprecationWarning::new(category, old, message));
        }
    }
}
