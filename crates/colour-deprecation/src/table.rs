//! Immutable change tables keyed by unqualified attribute name.

use colour_errors::ConfigError;
use indexmap::IndexMap;

use crate::{ApiChanges, ChangeRule};

/// Mapping from old attribute name (last dotted segment) to its rule.
///
/// Built once per namespace and never mutated afterwards. Keys are matched
/// case-sensitively and exactly.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChangeTable {
    rules: IndexMap<String, ChangeRule>,
}

impl ChangeTable {
    /// Create an empty table.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a table from declared changes.
    ///
    /// Rules colliding on the same key follow ordinary map insertion: the
    /// rule processed last wins and no error is raised.
    ///
    /// # Errors
    ///
    /// Returns an error if a descriptor is malformed.
    pub fn build(changes: &ApiChanges) -> Result<Self, ConfigError> {
        Ok(Self::from_rules(changes.object_rules()?))
    }

    /// Build a table from declared changes, rejecting key collisions.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::DuplicateRule`] on the first collision, or an
    /// error if a descriptor is malformed.
    pub fn try_build(changes: &ApiChanges) -> Result<Self, ConfigError> {
        Self::try_from_rules(changes.object_rules()?)
    }

    /// Build a table from rules in declaration order, last write wins.
    pub fn from_rules(rules: impl IntoIterator<Item = ChangeRule>) -> Self {
        let mut table = IndexMap::new();
        for rule in rules {
            let key = rule.key().to_owned();
            if let Some(previous) = table.insert(key, rule) {
                tracing::debug!(
                    previous = %previous.name(),
                    "change rule overwritten by a later rule with the same key"
                );
            }
        }
        Self { rules: table }
    }

    /// Build a table from rules in declaration order, rejecting collisions.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::DuplicateRule`] on the first collision.
    pub fn try_from_rules(
        rules: impl IntoIterator<Item = ChangeRule>,
    ) -> Result<Self, ConfigError> {
        let mut table: IndexMap<String, ChangeRule> = IndexMap::new();
        for rule in rules {
            if let Some(previous) = table.get(rule.key()) {
                return Err(ConfigError::DuplicateRule {
                    key: rule.key().to_owned(),
                    previous: previous.name().to_owned(),
                    next: rule.name().to_owned(),
                });
            }
            table.insert(rule.key().to_owned(), rule);
        }
        Ok(Self { rules: table })
    }

    /// Rule for an unqualified attribute name.
    pub fn get(&self, name: &str) -> Option<&ChangeRule> {
        self.rules.get(name)
    }

    /// Check whether an unqualified attribute name has a rule.
    pub fn contains(&self, name: &str) -> bool {
        self.rules.contains_key(name)
    }

    /// Rules in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ChangeRule)> {
        self.rules.iter().map(|(key, rule)| (key.as_str(), rule))
    }

    /// Number of rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Check whether the table holds no rule.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
