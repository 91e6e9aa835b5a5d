//! Primary error enum for the crate.

use figment::Error as FigmentError;
use thiserror::Error;

use crate::graph::NodeId;

/// Errors raised at the edges of the merge engine.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum MergeError {
    /// Merge options could not be extracted from their providers.
    #[error("Failed to load merge options: {0}")]
    Options(#[from] Box<FigmentError>),

    /// A value reaches itself and cannot be rendered as a tree.
    #[error("cyclic value detected at node {node}")]
    Cycle {
        /// First node found on its own path.
        node: NodeId,
    },

    /// A value has no JSON rendering.
    #[error("cannot render {kind} as JSON")]
    Unrepresentable {
        /// Description of the offending value.
        kind: &'static str,
    },

    /// A handle does not refer to a node of the graph it was used with.
    #[error("node {node} does not belong to this graph")]
    DanglingNode {
        /// The foreign handle.
        node: NodeId,
    },
}
