//! Change rules for namespace members and keyword arguments.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Kind of an object change, named after the labels used in change inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChangeKind {
    /// `ObjectRenamed`
    #[serde(rename = "ObjectRenamed")]
    Renamed,
    /// `ObjectRemoved`
    #[serde(rename = "ObjectRemoved")]
    Removed,
    /// `ObjectFutureRenamed`
    #[serde(rename = "ObjectFutureRenamed")]
    FutureRenamed,
    /// `ObjectFutureRemoved`
    #[serde(rename = "ObjectFutureRemoved")]
    FutureRemoved,
    /// `Changed`
    #[serde(rename = "Changed")]
    Changed,
}

impl ChangeKind {
    /// Every kind, in the order change inputs are processed.
    pub const ALL: [ChangeKind; 5] = [
        ChangeKind::Renamed,
        ChangeKind::FutureRenamed,
        ChangeKind::Removed,
        ChangeKind::FutureRemoved,
        ChangeKind::Changed,
    ];

    /// Input label of this kind.
    pub fn label(self) -> &'static str {
        match self {
            ChangeKind::Renamed => "ObjectRenamed",
            ChangeKind::Removed => "ObjectRemoved",
            ChangeKind::FutureRenamed => "ObjectFutureRenamed",
            ChangeKind::FutureRemoved => "ObjectFutureRemoved",
            ChangeKind::Changed => "Changed",
        }
    }
}

impl fmt::Display for ChangeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Migration rule for one namespace member.
///
/// Names are kept fully qualified (`colour.biochemistry.old_name`) so that
/// messages can name them unambiguously; the rule is keyed in a
/// [`ChangeTable`](crate::ChangeTable) by the last dotted segment only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum ChangeRule {
    /// The member was renamed; the old name resolves to the new one.
    Renamed {
        /// Qualified old name
        name: String,
        /// Qualified new name
        new_name: String,
    },
    /// The member was removed; the old name fails.
    Removed {
        /// Qualified old name
        name: String,
        /// Optional explanation
        #[serde(default, skip_serializing_if = "Option::is_none")]
        message: Option<String>,
    },
    /// The member will be renamed; the new name is already available.
    FutureRenamed {
        /// Qualified old name
        name: String,
        /// Qualified new name
        new_name: String,
    },
    /// The member will be removed; it still resolves today.
    FutureRemoved {
        /// Qualified old name
        name: String,
    },
    /// The member still exists but its behaviour or signature changed.
    Changed {
        /// Qualified name
        name: String,
        /// Explanation shown verbatim
        message: String,
    },
}

impl ChangeRule {
    /// Create a rename rule.
    pub fn renamed(name: impl Into<String>, new_name: impl Into<String>) -> Self {
        ChangeRule::Renamed {
            name: name.into(),
            new_name: new_name.into(),
        }
    }

    /// Create a removal rule.
    pub fn removed(name: impl Into<String>) -> Self {
        ChangeRule::Removed {
            name: name.into(),
            message: None,
        }
    }

    /// Create a removal rule with an explanation.
    pub fn removed_with_message(name: impl Into<String>, message: impl Into<String>) -> Self {
        ChangeRule::Removed {
            name: name.into(),
            message: Some(message.into()),
        }
    }

    /// Create a future rename rule.
    pub fn future_renamed(name: impl Into<String>, new_name: impl Into<String>) -> Self {
        ChangeRule::FutureRenamed {
            name: name.into(),
            new_name: new_name.into(),
        }
    }

    /// Create a future removal rule.
    pub fn future_removed(name: impl Into<String>) -> Self {
        ChangeRule::FutureRemoved { name: name.into() }
    }

    /// Create a behaviour change rule.
    pub fn changed(name: impl Into<String>, message: impl Into<String>) -> Self {
        ChangeRule::Changed {
            name: name.into(),
            message: message.into(),
        }
    }

    /// Kind of this rule.
    pub fn kind(&self) -> ChangeKind {
        match self {
            ChangeRule::Renamed { .. } => ChangeKind::Renamed,
            ChangeRule::Removed { .. } => ChangeKind::Removed,
            ChangeRule::FutureRenamed { .. } => ChangeKind::FutureRenamed,
            ChangeRule::FutureRemoved { .. } => ChangeKind::FutureRemoved,
            ChangeRule::Changed { .. } => ChangeKind::Changed,
        }
    }

    /// Qualified old name.
    pub fn name(&self) -> &str {
        match self {
            ChangeRule::Renamed { name, .. }
            | ChangeRule::Removed { name, .. }
            | ChangeRule::FutureRenamed { name, .. }
            | ChangeRule::FutureRemoved { name }
            | ChangeRule::Changed { name, .. } => name,
        }
    }

    /// Qualified replacement name, for rename rules.
    pub fn new_name(&self) -> Option<&str> {
        match self {
            ChangeRule::Renamed { new_name, .. } | ChangeRule::FutureRenamed { new_name, .. } => {
                Some(new_name)
            }
            _ => None,
        }
    }

    /// Table key: the last dotted segment of the old name.
    pub fn key(&self) -> &str {
        last_segment(self.name())
    }

    /// Warning text emitted on access, or `None` for removals which fail
    /// instead of warning.
    pub fn warning_message(&self) -> Option<String> {
        match self {
            ChangeRule::Renamed { name, new_name } => Some(format!(
                "{name} attribute is no longer available, please use '{new_name}' attribute."
            )),
            ChangeRule::FutureRenamed { name, new_name } => Some(format!(
                "{name} attribute is deprecated and will be renamed to '{new_name}' in a future release."
            )),
            ChangeRule::FutureRemoved { name } => Some(format!(
                "{name} attribute is deprecated and will be removed in a future release."
            )),
            ChangeRule::Changed { message, .. } => Some(message.clone()),
            ChangeRule::Removed { .. } => None,
        }
    }
}

impl fmt::Display for ChangeRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChangeRule::Renamed { name, new_name } => write!(f, "{name} -> {new_name}"),
            ChangeRule::FutureRenamed { name, new_name } => {
                write!(f, "{name} -> {new_name} (future)")
            }
            ChangeRule::Removed { name, .. } => write!(f, "{name} (removed)"),
            ChangeRule::FutureRemoved { name } => write!(f, "{name} (future removal)"),
            ChangeRule::Changed { name, message } => write!(f, "{name} (changed: {message})"),
        }
    }
}

/// Migration rule for one keyword argument.
///
/// Argument names are unqualified: they are matched against the keys of a
/// keyword map by [`handle_arguments_deprecation`](crate::handle_arguments_deprecation).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum ArgumentChange {
    /// The argument was renamed; its value moves to the new key.
    Renamed {
        /// Old argument name
        name: String,
        /// New argument name
        new_name: String,
    },
    /// The argument was removed; its value is dropped.
    Removed {
        /// Old argument name
        name: String,
    },
    /// The argument will be renamed; its value is copied to the new key.
    FutureRenamed {
        /// Old argument name
        name: String,
        /// New argument name
        new_name: String,
    },
    /// The argument will be removed; its value is kept.
    FutureRemoved {
        /// Old argument name
        name: String,
    },
}

impl ArgumentChange {
    /// Old argument name.
    pub fn name(&self) -> &str {
        match self {
            ArgumentChange::Renamed { name, .. }
            | ArgumentChange::Removed { name }
            | ArgumentChange::FutureRenamed { name, .. }
            | ArgumentChange::FutureRemoved { name } => name,
        }
    }

    /// Warning text emitted when the argument is passed.
    pub fn warning_message(&self) -> String {
        match self {
            ArgumentChange::Renamed { name, new_name } => {
                format!("\"{name}\" argument has been renamed to \"{new_name}\".")
            }
            ArgumentChange::Removed { name } => {
                format!("\"{name}\" argument has been removed and is unused.")
            }
            ArgumentChange::FutureRenamed { name, new_name } => format!(
                "\"{name}\" argument is deprecated and will be renamed to \"{new_name}\" in a future release."
            ),
            ArgumentChange::FutureRemoved { name } => format!(
                "\"{name}\" argument is deprecated and will be removed in a future release."
            ),
        }
    }
}

pub(crate) fn last_segment(name: &str) -> &str {
    name.rsplit_once('.').map_or(name, |(_, last)| last)
}
