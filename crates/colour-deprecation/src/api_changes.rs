//! Declarative API change input.
//!
//! Each namespace declares its changes once, either in code through the
//! builder methods or as a document keyed by change-kind label:
//!
//! ```yaml
//! ObjectRenamed:
//!   - [colour.biochemistry.reaction_rate_michealis_menten, colour.biochemistry.reaction_rate_michaelis_menten]
//! ObjectRemoved:
//!   - [colour.biochemistry.gone_fn]
//!   - [colour.biochemistry.other_fn, "use reaction_rate_michaelis_menten"]
//! ArgumentRenamed:
//!   - [K_m, k_m]
//! ```

use std::path::Path;

use colour_errors::ConfigError;
use serde::{Deserialize, Serialize};

use crate::{ArgumentChange, ChangeKind, ChangeRule};

type Descriptor = Vec<String>;

/// API changes of one namespace, grouped by change-kind label.
///
/// Within a label, descriptors keep their declaration order. Across labels
/// the processing order is fixed by [`ChangeKind::ALL`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ApiChanges {
    /// `(old, new)` descriptors
    #[serde(rename = "ObjectRenamed", default, skip_serializing_if = "Vec::is_empty")]
    pub renamed: Vec<Descriptor>,
    /// `(old, new)` descriptors
    #[serde(rename = "ObjectFutureRenamed", default, skip_serializing_if = "Vec::is_empty")]
    pub future_renamed: Vec<Descriptor>,
    /// `(old,)` or `(old, message)` descriptors
    #[serde(rename = "ObjectRemoved", default, skip_serializing_if = "Vec::is_empty")]
    pub removed: Vec<Descriptor>,
    /// `(old,)` descriptors
    #[serde(rename = "ObjectFutureRemoved", default, skip_serializing_if = "Vec::is_empty")]
    pub future_removed: Vec<Descriptor>,
    /// `(old, message)` descriptors
    #[serde(rename = "Changed", default, skip_serializing_if = "Vec::is_empty")]
    pub changed: Vec<Descriptor>,
    /// `(old, new)` argument descriptors
    #[serde(rename = "ArgumentRenamed", default, skip_serializing_if = "Vec::is_empty")]
    pub argument_renamed: Vec<Descriptor>,
    /// `(old,)` argument descriptors
    #[serde(rename = "ArgumentRemoved", default, skip_serializing_if = "Vec::is_empty")]
    pub argument_removed: Vec<Descriptor>,
    /// `(old, new)` argument descriptors
    #[serde(
        rename = "ArgumentFutureRenamed",
        default,
        skip_serializing_if = "Vec::is_empty"
    )]
    pub argument_future_renamed: Vec<Descriptor>,
    /// `(old,)` argument descriptors
    #[serde(
        rename = "ArgumentFutureRemoved",
        default,
        skip_serializing_if = "Vec::is_empty"
    )]
    pub argument_future_removed: Vec<Descriptor>,
}

impl ApiChanges {
    /// Create an empty change set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a YAML (or JSON) document.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] if the document is malformed or uses an
    /// unknown label.
    pub fn from_yaml_str(document: &str) -> Result<Self, ConfigError> {
        serde_yaml::from_str(document).map_err(ConfigError::parse)
    }

    /// Read and parse a YAML (or JSON) file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read and
    /// [`ConfigError::Parse`] if it is malformed.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let document = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml_str(&document)
    }

    /// Declare `name` renamed to `new_name`.
    pub fn renamed(mut self, name: impl Into<String>, new_name: impl Into<String>) -> Self {
        self.renamed.push(vec![name.into(), new_name.into()]);
        self
    }

    /// Declare `name` as going to be renamed to `new_name`.
    pub fn future_renamed(mut self, name: impl Into<String>, new_name: impl Into<String>) -> Self {
        self.future_renamed.push(vec![name.into(), new_name.into()]);
        self
    }

    /// Declare `name` removed.
    pub fn removed(mut self, name: impl Into<String>) -> Self {
        self.removed.push(vec![name.into()]);
        self
    }

    /// Declare `name` removed, with an explanation.
    pub fn removed_with_message(
        mut self,
        name: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        self.removed.push(vec![name.into(), message.into()]);
        self
    }

    /// Declare `name` as going to be removed.
    pub fn future_removed(mut self, name: impl Into<String>) -> Self {
        self.future_removed.push(vec![name.into()]);
        self
    }

    /// Declare a behaviour change of `name`.
    pub fn changed(mut self, name: impl Into<String>, message: impl Into<String>) -> Self {
        self.changed.push(vec![name.into(), message.into()]);
        self
    }

    /// Declare keyword argument `name` renamed to `new_name`.
    pub fn argument_renamed(
        mut self,
        name: impl Into<String>,
        new_name: impl Into<String>,
    ) -> Self {
        self.argument_renamed.push(vec![name.into(), new_name.into()]);
        self
    }

    /// Declare keyword argument `name` removed.
    pub fn argument_removed(mut self, name: impl Into<String>) -> Self {
        self.argument_removed.push(vec![name.into()]);
        self
    }

    /// Declare keyword argument `name` as going to be renamed to `new_name`.
    pub fn argument_future_renamed(
        mut self,
        name: impl Into<String>,
        new_name: impl Into<String>,
    ) -> Self {
        self.argument_future_renamed
            .push(vec![name.into(), new_name.into()]);
        self
    }

    /// Declare keyword argument `name` as going to be removed.
    pub fn argument_future_removed(mut self, name: impl Into<String>) -> Self {
        self.argument_future_removed.push(vec![name.into()]);
        self
    }

    /// Check whether no change of any kind is declared.
    pub fn is_empty(&self) -> bool {
        self.renamed.is_empty()
            && self.future_renamed.is_empty()
            && self.removed.is_empty()
            && self.future_removed.is_empty()
            && self.changed.is_empty()
            && self.argument_renamed.is_empty()
            && self.argument_removed.is_empty()
            && self.argument_future_renamed.is_empty()
            && self.argument_future_removed.is_empty()
    }

    /// Object rules in processing order.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidDescriptor`] for a descriptor with the
    /// wrong arity and [`ConfigError::NoNamespace`] for an unqualified name.
    pub fn object_rules(&self) -> Result<Vec<ChangeRule>, ConfigError> {
        let mut rules = Vec::new();
        for kind in ChangeKind::ALL {
            let (descriptors, expected) = match kind {
                ChangeKind::Renamed => (&self.renamed, "(old, new)"),
                ChangeKind::FutureRenamed => (&self.future_renamed, "(old, new)"),
                ChangeKind::Removed => (&self.removed, "(old,) or (old, message)"),
                ChangeKind::FutureRemoved => (&self.future_removed, "(old,)"),
                ChangeKind::Changed => (&self.changed, "(old, message)"),
            };
            for descriptor in descriptors {
                let invalid = || ConfigError::InvalidDescriptor {
                    label: kind.label().to_owned(),
                    descriptor: descriptor.clone(),
                    expected,
                };
                let rule = match (kind, descriptor.as_slice()) {
                    (ChangeKind::Renamed, [old, new]) => {
                        ChangeRule::renamed(qualified(old)?, qualified(new)?)
                    }
                    (ChangeKind::FutureRenamed, [old, new]) => {
                        ChangeRule::future_renamed(qualified(old)?, qualified(new)?)
                    }
                    (ChangeKind::Removed, [old]) => ChangeRule::removed(qualified(old)?),
                    (ChangeKind::Removed, [old, message]) => {
                        ChangeRule::removed_with_message(qualified(old)?, message.as_str())
                    }
                    (ChangeKind::FutureRemoved, [old]) => {
                        ChangeRule::future_removed(qualified(old)?)
                    }
                    (ChangeKind::Changed, [old, message]) => {
                        ChangeRule::changed(qualified(old)?, message.as_str())
                    }
                    _ => return Err(invalid()),
                };
                rules.push(rule);
            }
        }
        Ok(rules)
    }

    /// Argument changes, renames first.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidDescriptor`] for a descriptor with the
    /// wrong arity.
    pub fn argument_changes(&self) -> Result<Vec<ArgumentChange>, ConfigError> {
        let mut changes = Vec::new();
        let groups: [(&str, &Vec<Descriptor>, &'static str); 4] = [
            ("ArgumentRenamed", &self.argument_renamed, "(old, new)"),
            ("ArgumentRemoved", &self.argument_removed, "(old,)"),
            ("ArgumentFutureRenamed", &self.argument_future_renamed, "(old, new)"),
            ("ArgumentFutureRemoved", &self.argument_future_removed, "(old,)"),
        ];
        for (label, descriptors, expected) in groups {
            for descriptor in descriptors {
                let change = match (label, descriptor.as_slice()) {
                    ("ArgumentRenamed", [old, new]) => ArgumentChange::Renamed {
                        name: old.clone(),
                        new_name: new.clone(),
                    },
                    ("ArgumentRemoved", [old]) => ArgumentChange::Removed { name: old.clone() },
                    ("ArgumentFutureRenamed", [old, new]) => ArgumentChange::FutureRenamed {
                        name: old.clone(),
                        new_name: new.clone(),
                    },
                    ("ArgumentFutureRemoved", [old]) => {
                        ArgumentChange::FutureRemoved { name: old.clone() }
                    }
                    _ => {
                        return Err(ConfigError::InvalidDescriptor {
                            label: label.to_owned(),
                            descriptor: descriptor.clone(),
                            expected,
                        });
                    }
                };
                changes.push(change);
            }
        }
        Ok(changes)
    }
}

fn qualified(name: &str) -> Result<&str, ConfigError> {
    match name.rsplit_once('.') {
        Some((namespace, attribute)) if !namespace.is_empty() && !attribute.is_empty() => Ok(name),
        _ => Err(ConfigError::NoNamespace(name.to_owned())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_preserves_order_within_label() -> Result<(), ConfigError> {
        let changes = ApiChanges::new()
            .renamed("pkg.a", "pkg.b")
            .renamed("pkg.c", "pkg.d");
        let names: Vec<_> = changes
            .object_rules()?
            .iter()
            .map(|r| r.name().to_owned())
            .collect();
        assert_eq!(names, ["pkg.a", "pkg.c"]);
        Ok(())
    }

    #[test]
    fn test_processing_order_across_labels() -> Result<(), ConfigError> {
        let changes = ApiChanges::new()
            .changed("pkg.e", "changed")
            .removed("pkg.c")
            .future_removed("pkg.d")
            .future_renamed("pkg.b", "pkg.b2")
            .renamed("pkg.a", "pkg.a2");
        let kinds: Vec<_> = changes.object_rules()?.iter().map(ChangeRule::kind).collect();
        assert_eq!(kinds, ChangeKind::ALL);
        Ok(())
    }

    #[test]
    fn test_unqualified_name_is_rejected() {
        let result = ApiChanges::new().removed("gone_fn").object_rules();
        assert!(matches!(result, Err(ConfigError::NoNamespace(name)) if name == "gone_fn"));
    }

    #[test]
    fn test_wrong_arity_is_rejected() {
        let mut changes = ApiChanges::new();
        changes.renamed.push(vec!["pkg.only_old".into()]);
        assert!(matches!(
            changes.object_rules(),
            Err(ConfigError::InvalidDescriptor { label, .. }) if label == "ObjectRenamed"
        ));
    }

    #[test]
    fn test_parse_yaml_document() -> Result<(), ConfigError> {
        let changes = ApiChanges::from_yaml_str(
            "ObjectRenamed:\n  - [pkg.old_fn, pkg.new_fn]\nObjectRemoved:\n  - [pkg.gone_fn]\n",
        )?;
        assert_eq!(
            changes,
            ApiChanges::new()
                .renamed("pkg.old_fn", "pkg.new_fn")
                .removed("pkg.gone_fn")
        );
        Ok(())
    }

    #[test]
    fn test_parse_json_document() -> Result<(), ConfigError> {
        let changes = ApiChanges::from_yaml_str(r#"{"ObjectRemoved": [["pkg.gone_fn"]]}"#)?;
        assert_eq!(changes.object_rules()?, [ChangeRule::removed("pkg.gone_fn")]);
        Ok(())
    }

    #[test]
    fn test_unknown_label_is_rejected() {
        let result = ApiChanges::from_yaml_str("ObjectVanished:\n  - [pkg.x]\n");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_argument_changes() -> Result<(), ConfigError> {
        let changes = ApiChanges::new()
            .argument_removed("legacy")
            .argument_renamed("K_m", "k_m");
        let names: Vec<_> = changes
            .argument_changes()?
            .iter()
            .map(|c| c.name().to_owned())
            .collect();
        assert_eq!(names, ["K_m", "legacy"]);
        assert!(!changes.is_empty());
        assert!(ApiChanges::new().is_empty());
        Ok(())
    }
}
