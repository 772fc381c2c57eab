//! Compatibility redirector for colour namespaces
//!
//! Public names move between releases. Each namespace declares how its names
//! changed in an [`ApiChanges`] document; the declarations are compiled once
//! into an immutable [`ChangeTable`] and every attribute lookup made through
//! the wrapping [`ModuleApi`] consults that table before falling back to the
//! namespace itself.
//!
//! # Architecture
//!
//! - [`change`]: change rules for members and keyword arguments
//! - [`api_changes`]: declarative change input (builder, YAML, JSON)
//! - [`table`]: change table builder
//! - [`module`] / [`attribute`]: plain namespaces of type-erased values
//! - [`module_api`]: the redirecting wrapper and attribute resolution
//! - [`registry`]: installed namespaces, qualified resolution
//! - [`arguments`]: keyword argument deprecation
//! - [`warning`]: warning channel and filters
//! - [`config`]: warning filter and documentation build settings
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use colour_deprecation::prelude::*;
//!
//! fn double(x: f64) -> f64 {
//!     x * 2.0
//! }
//!
//! let changes = ApiChanges::new().renamed("pkg.old_fn", "pkg.new_fn");
//! let module = Module::new("pkg").with("new_fn", double as fn(f64) -> f64);
//! let api = ModuleApi::from_changes(module, &changes, &DeprecationConfig::default())?;
//!
//! let sink = Arc::new(RecordingSink::new());
//! let registry = ModuleRegistry::builder().sink(sink.clone()).install(api)?.build();
//!
//! let old = registry.get::<fn(f64) -> f64>("pkg.old_fn")?;
//! assert_eq!(old(2.0), 4.0);
//! assert_eq!(sink.len(), 1);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![deny(unsafe_op_in_unsafe_fn, clippy::unwrap_used)]
#![warn(missing_docs, rust_2018_idioms)]

pub mod api_changes;
pub mod arguments;
pub mod attribute;
pub mod change;
pub mod config;
pub mod module;
pub mod module_api;
pub mod prelude;
pub mod registry;
pub mod table;
pub mod warning;

pub use api_changes::ApiChanges;
pub use arguments::handle_arguments_deprecation;
pub use attribute::Attribute;
pub use change::{ArgumentChange, ChangeKind, ChangeRule};
pub use config::{DOCUMENTATION_BUILD_ENV, DeprecationConfig, FILTER_USAGE_WARNINGS_ENV};
pub use module::Module;
pub use module_api::{AttributeRoot, ModuleApi, split_qualified};
pub use registry::{ModuleRegistry, RegistryBuilder};
pub use table::ChangeTable;
pub use warning::{
    DeprecationWarning, FilteredSink, RecordingSink, TracingSink, WarningAction, WarningCategory,
    WarningSink,
};
