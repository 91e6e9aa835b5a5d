//! Convenience constructors for `MergeError`.

use std::sync::Arc;

use figment::Error as FigmentError;

use super::MergeError;
use crate::graph::NodeId;

impl MergeError {
    /// Construct an options error from a Figment failure.
    #[must_use]
    pub fn options(err: FigmentError) -> Self {
        Self::Options(Box::new(err))
    }

    /// Construct an options error wrapped in [`Arc`].
    #[must_use]
    pub fn options_arc(err: FigmentError) -> Arc<Self> {
        Arc::new(Self::options(err))
    }

    /// Construct a cycle error wrapped in [`Arc`].
    #[must_use]
    pub fn cycle_arc(node: NodeId) -> Arc<Self> {
        Arc::new(Self::Cycle { node })
    }

    /// Construct an unrepresentable-value error wrapped in [`Arc`].
    #[must_use]
    pub fn unrepresentable_arc(kind: &'static str) -> Arc<Self> {
        Arc::new(Self::Unrepresentable { kind })
    }

    /// Construct a dangling-handle error wrapped in [`Arc`].
    #[must_use]
    pub fn dangling_arc(node: NodeId) -> Arc<Self> {
        Arc::new(Self::DanglingNode { node })
    }
}

impl From<FigmentError> for MergeError {
    fn from(err: FigmentError) -> Self {
        Self::options(err)
    }
}
