//! Convenience re-exports for common test utilities.
//!
//! ```rust,ignore
//! use colour_test_helpers::prelude::*;
//! ```

pub use crate::must::{must, must_parse, must_some, must_with};
pub use crate::{assert_approx_eq, assert_rel_eq, assert_sorted};

/// Return type for tests that propagate errors with `?`.
pub type TestResult = Result<(), Box<dyn std::error::Error>>;
