//! Snapshots of a graph used to prove that merges leave inputs untouched.

use anyhow::{Result, ensure};
use graftmerge::{Graph, Node, NodeId};

/// Frozen copy of every node that existed when the snapshot was taken.
#[derive(Debug)]
pub struct GraphSnapshot {
    nodes: Vec<(NodeId, Node)>,
}

impl GraphSnapshot {
    /// Capture the current contents of `graph`.
    #[must_use]
    pub fn capture(graph: &Graph) -> Self {
        Self {
            nodes: graph.iter().map(|(id, node)| (id, node.clone())).collect(),
        }
    }

    /// Number of nodes captured.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` when the snapshot captured an empty graph.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Check that every captured node is still present and unchanged.
    ///
    /// Nodes allocated after the snapshot are ignored.
    ///
    /// # Errors
    ///
    /// Returns an error naming the first node that changed or disappeared.
    pub fn ensure_unchanged(&self, graph: &Graph) -> Result<()> {
        for (id, before) in &self.nodes {
            let after = graph.node(*id);
            ensure!(
                after == Some(before),
                "node {id} changed: before {before:?}, after {after:?}"
            );
        }
        Ok(())
    }
}
