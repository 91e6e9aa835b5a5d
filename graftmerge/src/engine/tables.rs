//! Identity-keyed tables that live for one top-level merge.

use std::collections::HashMap;

use crate::graph::NodeId;

/// Maps an input node with no merge counterpart to its single clone.
///
/// Reusing the clone keeps shared sub-structures shared in the output and
/// closes cycles that run entirely within one input.
#[derive(Debug, Default)]
pub(super) struct CloneTable {
    clones: HashMap<NodeId, NodeId>,
}

impl CloneTable {
    pub(super) fn get(&self, original: NodeId) -> Option<NodeId> {
        self.clones.get(&original).copied()
    }

    pub(super) fn insert(&mut self, original: NodeId, clone: NodeId) {
        self.clones.insert(original, clone);
    }
}

/// Maps a `(target, source)` node pair to the output produced for it.
///
/// Entries are registered before the output is populated, so re-entering a
/// pair through a cycle yields the in-progress node.
#[derive(Debug, Default)]
pub(super) struct PairTable {
    pairs: HashMap<NodeId, HashMap<NodeId, NodeId>>,
}

impl PairTable {
    pub(super) fn get(&self, target: NodeId, source: NodeId) -> Option<NodeId> {
        self.pairs.get(&target)?.get(&source).copied()
    }

    pub(super) fn insert(&mut self, target: NodeId, source: NodeId, output: NodeId) {
        self.pairs.entry(target).or_default().insert(source, output);
    }
}

/// One in-progress `(target, source)` merge.
#[derive(Debug)]
struct Frame {
    target: NodeId,
    output: NodeId,
    clones: CloneTable,
}

/// Target nodes whose merge is currently in progress, innermost last.
///
/// A target-only value that refers back to one of these is redirected to
/// the corresponding output so the output keeps the target's cycles.
/// Target-side copies depend on those redirections, so each frame keeps its
/// own clone table and discards it on exit. Copies made outside any frame
/// go to the base table.
#[derive(Debug, Default)]
pub(super) struct ActiveTargets {
    base: CloneTable,
    frames: Vec<Frame>,
}

impl ActiveTargets {
    pub(super) fn enter(&mut self, target: NodeId, output: NodeId) {
        self.frames.push(Frame {
            target,
            output,
            clones: CloneTable::default(),
        });
    }

    pub(super) fn exit(&mut self) {
        self.frames.pop();
    }

    pub(super) fn resolve(&self, target: NodeId) -> Option<NodeId> {
        self.frames
            .iter()
            .rev()
            .find(|frame| frame.target == target)
            .map(|frame| frame.output)
    }

    /// Target-side clone table of the innermost frame.
    pub(super) fn clones(&self) -> &CloneTable {
        self.frames.last().map_or(&self.base, |frame| &frame.clones)
    }

    pub(super) fn clones_mut(&mut self) -> &mut CloneTable {
        self.frames
            .last_mut()
            .map_or(&mut self.base, |frame| &mut frame.clones)
    }
}
