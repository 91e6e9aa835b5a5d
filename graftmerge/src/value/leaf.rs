//! Opaque scalar leaves with reference identity.

use std::sync::Arc;

/// A non-decomposable leaf such as a callback or symbol.
///
/// Leaves compare by identity: two leaves are equal only when one was cloned
/// from the other, regardless of their names.
#[derive(Clone, Debug)]
pub struct Leaf(Arc<str>);

impl Leaf {
    /// Create a new leaf with a fresh identity.
    #[must_use]
    pub fn new(name: &str) -> Self {
        Self(Arc::from(name))
    }

    /// Descriptive name given at construction.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl PartialEq for Leaf {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}
