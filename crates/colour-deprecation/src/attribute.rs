//! Type-erased namespace members.

use std::any::{Any, type_name};
use std::fmt;
use std::sync::Arc;

/// A shared, type-erased value stored in a [`Module`](crate::Module).
///
/// Cloning an `Attribute` clones the handle, not the value: two handles
/// obtained for the same member compare equal under [`Attribute::ptr_eq`].
/// Aliases registered through [`Module::with_alias`](crate::Module::with_alias)
/// share one allocation, which is how a renamed name resolves to the
/// *same* object as its replacement.
#[derive(Clone)]
pub struct Attribute {
    value: Arc<dyn Any + Send + Sync>,
    type_name: &'static str,
}

impl Attribute {
    /// Wrap a value.
    pub fn new<T: Any + Send + Sync>(value: T) -> Self {
        Self {
            value: Arc::new(value),
            type_name: type_name::<T>(),
        }
    }

    /// Borrow the value as `T` if that is its concrete type.
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.value.downcast_ref::<T>()
    }

    /// Check the concrete type of the value.
    pub fn is<T: Any>(&self) -> bool {
        self.value.is::<T>()
    }

    /// Check whether two handles refer to the same allocation.
    pub fn ptr_eq(&self, other: &Attribute) -> bool {
        Arc::ptr_eq(&self.value, &other.value)
    }

    /// Name of the concrete type, for diagnostics.
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }
}

impl fmt::Debug for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Attribute({})", self.type_name)
    }
}
