//! Prelude module for declaring and resolving API changes.

pub use crate::{
    ApiChanges, ArgumentChange, Attribute, AttributeRoot, ChangeKind, ChangeRule, ChangeTable,
    DeprecationConfig, DeprecationWarning, FilteredSink, Module, ModuleApi, ModuleRegistry,
    RecordingSink, TracingSink, WarningAction, WarningCategory, WarningSink,
    handle_arguments_deprecation,
};
pub use colour_errors::{AttributeError, ConfigError};
