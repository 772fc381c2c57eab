//! Deprecation warning channel.
//!
//! Resolution never prints anything itself: it hands a [`DeprecationWarning`]
//! to a [`WarningSink`]. The default sink forwards to `tracing`; tests and
//! tools use [`RecordingSink`] to inspect what was emitted, and
//! [`FilteredSink`] applies the configured [`WarningAction`].

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use colour_errors::ConfigError;
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

/// Category of a deprecation warning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WarningCategory {
    /// A renamed attribute was accessed through its old name
    Renamed,
    /// An attribute that will be renamed was accessed through its old name
    FutureRenamed,
    /// An attribute that will be removed was accessed
    FutureRemoved,
    /// An attribute whose behaviour changed was accessed
    Changed,
    /// A renamed keyword argument was passed
    ArgumentRenamed,
    /// A removed keyword argument was passed
    ArgumentRemoved,
    /// A keyword argument that will be renamed was passed
    ArgumentFutureRenamed,
    /// A keyword argument that will be removed was passed
    ArgumentFutureRemoved,
}

impl WarningCategory {
    /// Check whether the warning announces a change that has not happened
    /// yet.
    pub fn is_future(self) -> bool {
        matches!(
            self,
            WarningCategory::FutureRenamed
                | WarningCategory::FutureRemoved
                | WarningCategory::ArgumentFutureRenamed
                | WarningCategory::ArgumentFutureRemoved
        )
    }
}

impl fmt::Display for WarningCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            WarningCategory::Renamed => "renamed",
            WarningCategory::FutureRenamed => "future-renamed",
            WarningCategory::FutureRemoved => "future-removed",
            WarningCategory::Changed => "changed",
            WarningCategory::ArgumentRenamed => "argument-renamed",
            WarningCategory::ArgumentRemoved => "argument-removed",
            WarningCategory::ArgumentFutureRenamed => "argument-future-renamed",
            WarningCategory::ArgumentFutureRemoved => "argument-future-removed",
        };
        f.write_str(name)
    }
}

/// A non-fatal diagnostic emitted during resolution.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DeprecationWarning {
    /// Warning category
    pub category: WarningCategory,
    /// Qualified attribute name, or argument name, the warning is about
    pub attribute: String,
    /// Human-readable message
    pub message: String,
}

impl DeprecationWarning {
    /// Create a warning.
    pub fn new(
        category: WarningCategory,
        attribute: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            category,
            attribute: attribute.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for DeprecationWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Destination for deprecation warnings.
///
/// Implementations must be `Send + Sync`: one sink is shared by every
/// lookup made through a registry, from any thread.
pub trait WarningSink: Send + Sync {
    /// Deliver one warning.
    fn emit(&self, warning: &DeprecationWarning);
}

impl<S: WarningSink + ?Sized> WarningSink for Arc<S> {
    fn emit(&self, warning: &DeprecationWarning) {
        (**self).emit(warning);
    }
}

impl<S: WarningSink + ?Sized> WarningSink for &S {
    fn emit(&self, warning: &DeprecationWarning) {
        (**self).emit(warning);
    }
}

/// Sink forwarding warnings to `tracing` at `warn` level.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl WarningSink for TracingSink {
    fn emit(&self, warning: &DeprecationWarning) {
        tracing::warn!(
            target: "colour::deprecation",
            category = %warning.category,
            attribute = %warning.attribute,
            "{}",
            warning.message
        );
    }
}

/// Sink collecting warnings in memory.
#[derive(Debug, Default)]
pub struct RecordingSink {
    warnings: Mutex<Vec<DeprecationWarning>>,
}

impl RecordingSink {
    /// Create an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of every warning recorded so far.
    pub fn warnings(&self) -> Vec<DeprecationWarning> {
        self.warnings.lock().clone()
    }

    /// Remove and return every warning recorded so far.
    pub fn take(&self) -> Vec<DeprecationWarning> {
        std::mem::take(&mut *self.warnings.lock())
    }

    /// Number of warnings recorded so far.
    pub fn len(&self) -> usize {
        self.warnings.lock().len()
    }

    /// Check whether nothing was recorded.
    pub fn is_empty(&self) -> bool {
        self.warnings.lock().is_empty()
    }
}

impl WarningSink for RecordingSink {
    fn emit(&self, warning: &DeprecationWarning) {
        self.warnings.lock().push(warning.clone());
    }
}

/// What to do with a deprecation warning.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WarningAction {
    /// Deliver every warning
    #[default]
    Always,
    /// Deliver each distinct message once
    Once,
    /// Drop every warning
    Ignore,
}

impl WarningAction {
    /// Every action, in documentation order.
    pub const ALL: [WarningAction; 3] = [
        WarningAction::Always,
        WarningAction::Once,
        WarningAction::Ignore,
    ];

    /// Lowercase name.
    pub fn as_str(self) -> &'static str {
        match self {
            WarningAction::Always => "always",
            WarningAction::Once => "once",
            WarningAction::Ignore => "ignore",
        }
    }
}

impl fmt::Display for WarningAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WarningAction {
    type Err = ConfigError;

    /// Parse an action name. `true` means the warnings are filtered out
    /// (`ignore`) and `false` that they are not (`always`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "always" | "default" | "false" => Ok(WarningAction::Always),
            "once" => Ok(WarningAction::Once),
            "ignore" | "true" => Ok(WarningAction::Ignore),
            _ => Err(ConfigError::InvalidWarningAction(s.to_owned())),
        }
    }
}

/// Sink applying a [`WarningAction`] before delivering to an inner sink.
#[derive(Debug)]
pub struct FilteredSink<S> {
    inner: S,
    action: WarningAction,
    seen: Mutex<HashSet<String>>,
}

impl<S: WarningSink> FilteredSink<S> {
    /// Wrap `inner` with the given action.
    pub fn new(inner: S, action: WarningAction) -> Self {
        Self {
            inner,
            action,
            seen: Mutex::new(HashSet::new()),
        }
    }

    /// Configured action.
    pub fn action(&self) -> WarningAction {
        self.action
    }

    /// Wrapped sink.
    pub fn inner(&self) -> &S {
        &self.inner
    }
}

impl<S: WarningSink> WarningSink for FilteredSink<S> {
    fn emit(&self, warning: &DeprecationWarning) {
        match self.action {
            WarningAction::Always => self.inner.emit(warning),
            WarningAction::Once => {
                if self.seen.lock().insert(warning.message.clone()) {
                    self.inner.emit(warning);
                }
            }
            WarningAction::Ignore => {}
        }
    }
}
