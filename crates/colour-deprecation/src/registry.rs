//! Registry of installed namespaces.

use std::any::{Any, type_name};
use std::fmt;
use std::sync::Arc;

use colour_errors::{AttributeError, ConfigError};
use indexmap::IndexMap;

use crate::{Attribute, AttributeRoot, ModuleApi, TracingSink, WarningSink, split_qualified};

/// The installed namespaces of a process, plus the warning sink every lookup
/// reports to.
///
/// Built once at startup through [`RegistryBuilder`] and immutable
/// afterwards, so lookups from several threads need no locking. Callers hold
/// the registry (usually behind the `colour::Colour` facade) and pass it
/// where attribute resolution is needed.
pub struct ModuleRegistry {
    modules: IndexMap<String, ModuleApi>,
    sink: Arc<dyn WarningSink>,
}

impl ModuleRegistry {
    /// Start building a registry.
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::default()
    }

    /// Installed namespace by fully-qualified name.
    pub fn module(&self, name: &str) -> Option<&ModuleApi> {
        self.modules.get(name)
    }

    /// Names of the installed namespaces, in installation order.
    pub fn module_names(&self) -> impl Iterator<Item = &str> {
        self.modules.keys().map(String::as_str)
    }

    /// Installed namespaces, in installation order.
    pub fn modules(&self) -> impl Iterator<Item = &ModuleApi> {
        self.modules.values()
    }

    /// Warning sink used by lookups.
    pub fn sink(&self) -> &dyn WarningSink {
        self.sink.as_ref()
    }

    /// Resolve `name` on the installed namespace `module`, applying its
    /// change table.
    ///
    /// # Errors
    ///
    /// Returns [`AttributeError::ModuleNotFound`] for an unknown namespace and
    /// whatever [`ModuleApi::getattr`] raises otherwise.
    pub fn getattr(&self, module: &str, name: &str) -> Result<Attribute, AttributeError> {
        let api = self
            .modules
            .get(module)
            .ok_or_else(|| AttributeError::ModuleNotFound(module.to_owned()))?;
        api.getattr(name, self, self.sink.as_ref())
    }

    /// Resolve a fully-qualified name such as `colour.biochemistry.old_fn`,
    /// applying the change table of its namespace.
    ///
    /// # Errors
    ///
    /// Returns [`AttributeError::NoNamespace`] for an unqualified name and
    /// whatever [`ModuleRegistry::getattr`] raises otherwise.
    pub fn get_attribute(&self, qualified: &str) -> Result<Attribute, AttributeError> {
        let (module, name) = split_qualified(qualified)?;
        self.getattr(module, name)
    }

    /// Resolve a fully-qualified name and copy out its value as `T`.
    ///
    /// # Errors
    ///
    /// Returns [`AttributeError::TypeMismatch`] when the attribute holds
    /// another type, and whatever [`ModuleRegistry::get_attribute`] raises
    /// otherwise.
    pub fn get<T: Any + Clone>(&self, qualified: &str) -> Result<T, AttributeError> {
        let attribute = self.get_attribute(qualified)?;
        attribute
            .downcast_ref::<T>()
            .cloned()
            .ok_or_else(|| AttributeError::TypeMismatch {
                name: qualified.to_owned(),
                expected: type_name::<T>(),
                actual: attribute.type_name(),
            })
    }
}

impl AttributeRoot for ModuleRegistry {
    fn lookup(&self, qualified: &str) -> Result<Attribute, AttributeError> {
        let (module, name) = split_qualified(qualified)?;
        let api = self
            .modules
            .get(module)
            .ok_or_else(|| AttributeError::ModuleNotFound(module.to_owned()))?;
        api.module()
            .get(name)
            .cloned()
            .ok_or_else(|| AttributeError::not_found(module, name))
    }
}

impl fmt::Debug for ModuleRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModuleRegistry")
            .field("modules", &self.modules.keys().collect::<Vec<_>>())
            .finish_non_exhaustive()
    }
}

/// Builder for [`ModuleRegistry`].
#[derive(Default)]
pub struct RegistryBuilder {
    modules: IndexMap<String, ModuleApi>,
    sink: Option<Arc<dyn WarningSink>>,
}

impl RegistryBuilder {
    /// Report warnings to `sink` instead of `tracing`.
    pub fn sink(mut self, sink: Arc<dyn WarningSink>) -> Self {
        self.sink = Some(sink);
        self
    }

    /// Install a namespace. Each namespace can be installed once.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::AlreadyInstalled`] if a namespace of the same
    /// name was installed before.
    pub fn install(mut self, api: ModuleApi) -> Result<Self, ConfigError> {
        if self.modules.contains_key(api.name()) {
            return Err(ConfigError::AlreadyInstalled(api.name().to_owned()));
        }
        tracing::debug!(
            module = %api.name(),
            members = api.module().len(),
            changes = api.changes().len(),
            "namespace installed"
        );
        self.modules.insert(api.name().to_owned(), api);
        Ok(self)
    }

    /// Finish building.
    pub fn build(self) -> ModuleRegistry {
        ModuleRegistry {
            modules: self.modules,
            sink: self.sink.unwrap_or_else(|| Arc::new(TracingSink)),
        }
    }
}

impl fmt::Debug for RegistryBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegistryBuilder")
            .field("modules", &self.modules.keys().collect::<Vec<_>>())
            .field("custom_sink", &self.sink.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ApiChanges, ChangeTable, Module, RecordingSink};

    fn registry(sink: Arc<RecordingSink>) -> Result<ModuleRegistry, ConfigError> {
        let changes = ApiChanges::new()
            .renamed("pkg.old_fn", "other.new_fn")
            .removed("pkg.gone_fn");
        let pkg = ModuleApi::new(
            Module::new("pkg").with("value", 7_u8),
            ChangeTable::build(&changes)?,
        );
        let other = ModuleApi::new(
            Module::new("other").with("new_fn", String::from("target")),
            ChangeTable::empty(),
        );
        Ok(ModuleRegistry::builder()
            .sink(sink)
            .install(pkg)?
            .install(other)?
            .build())
    }

    #[test]
    fn test_rename_across_namespaces() -> Result<(), Box<dyn std::error::Error>> {
        let sink = Arc::new(RecordingSink::new());
        let registry = registry(sink.clone())?;
        let old = registry.get_attribute("pkg.old_fn")?;
        let new = registry.get_attribute("other.new_fn")?;
        assert!(old.ptr_eq(&new));
        assert_eq!(sink.len(), 1);
        Ok(())
    }

    #[test]
    fn test_unknown_module() -> Result<(), ConfigError> {
        let registry = registry(Arc::new(RecordingSink::new()))?;
        assert_eq!(
            registry.get_attribute("missing.value").err(),
            Some(AttributeError::ModuleNotFound("missing".into()))
        );
        assert_eq!(
            registry.get_attribute("value").err(),
            Some(AttributeError::NoNamespace("value".into()))
        );
        Ok(())
    }

    #[test]
    fn test_typed_get() -> Result<(), Box<dyn std::error::Error>> {
        let registry = registry(Arc::new(RecordingSink::new()))?;
        assert_eq!(registry.get::<u8>("pkg.value")?, 7);
        assert!(matches!(
            registry.get::<u32>("pkg.value"),
            Err(AttributeError::TypeMismatch { actual: "u8", .. })
        ));
        Ok(())
    }

    #[test]
    fn test_double_install_is_rejected() {
        let result = ModuleRegistry::builder()
            .install(ModuleApi::new(Module::new("pkg"), ChangeTable::empty()))
            .and_then(|b| b.install(ModuleApi::new(Module::new("pkg"), ChangeTable::empty())));
        assert!(matches!(result, Err(ConfigError::AlreadyInstalled(name)) if name == "pkg"));
    }

    #[test]
    fn test_lookup_skips_change_table() -> Result<(), ConfigError> {
        let registry = registry(Arc::new(RecordingSink::new()))?;
        assert_eq!(
            registry.lookup("pkg.old_fn").err(),
            Some(AttributeError::not_found("pkg", "old_fn"))
        );
        Ok(())
    }

    #[test]
    fn test_module_names_in_install_order() -> Result<(), ConfigError> {
        let registry = registry(Arc::new(RecordingSink::new()))?;
        let names: Vec<_> = registry.module_names().collect();
        assert_eq!(names, ["pkg", "other"]);
        assert!(format!("{registry:?}").contains("pkg"));
        Ok(())
    }
}
