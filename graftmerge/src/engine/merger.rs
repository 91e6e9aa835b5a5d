//! Recursive merge over a pair of input nodes.

use tracing::trace;

use super::tables::{ActiveTargets, CloneTable, PairTable};
use crate::MergeOptions;
use crate::graph::{Graph, Node, NodeId};
use crate::value::{Kind, MapNode, Value};

/// Which input a value without a merge counterpart came from.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Side {
    Target,
    Source,
}

/// State for one top-level merge call.
pub(super) struct Merger<'g> {
    graph: &'g mut Graph,
    options: MergeOptions,
    source_clones: CloneTable,
    pairs: PairTable,
    active: ActiveTargets,
}

impl<'g> Merger<'g> {
    pub(super) fn new(graph: &'g mut Graph, options: MergeOptions) -> Self {
        Self {
            graph,
            options,
            source_clones: CloneTable::default(),
            pairs: PairTable::default(),
            active: ActiveTargets::default(),
        }
    }

    pub(super) fn empty_map(&mut self) -> Value {
        self.graph.insert(Node::Map(MapNode::new()))
    }

    pub(super) fn clone_source(&mut self, value: &Value) -> Value {
        self.clone_value(Side::Source, value)
    }

    pub(super) fn clone_target(&mut self, value: &Value) -> Value {
        self.clone_value(Side::Target, value)
    }

    /// Merge `source` over `target` where both sides are present.
    pub(super) fn merge(&mut self, target: &Value, source: &Value) -> Value {
        if target.node_id().is_some() && target.node_id() == source.node_id() {
            return target.clone();
        }

        let source_kind = self.graph.kind(source);
        let Some(source_id) = source.node_id().filter(|_| source_kind != Kind::Opaque) else {
            return source.clone();
        };
        let Some(target_id) = target.node_id() else {
            return self.clone_source(source);
        };

        if let Some(output) = self.pairs.get(target_id, source_id) {
            trace!(target = %target_id, source = %source_id, output = %output, "pair table hit");
            return Value::Node(output);
        }

        match (self.graph.kind(target), source_kind) {
            (Kind::Sequence, Kind::Sequence) => self.merge_sequences(target_id, source_id),
            (Kind::Map, Kind::Map) => self.merge_maps(target_id, source_id),
            _ => {
                let output = self.clone_source(source);
                if let Some(output_id) = output.node_id() {
                    self.pairs.insert(target_id, source_id, output_id);
                }
                output
            }
        }
    }

    fn merge_sequences(&mut self, target_id: NodeId, source_id: NodeId) -> Value {
        let output = self.graph.alloc(Node::Sequence(Vec::new()));
        self.pairs.insert(target_id, source_id, output);
        self.active.enter(target_id, output);

        let target_items = if self.options.merge_arrays {
            self.elements(target_id)
        } else {
            Vec::new()
        };
        let source_items = self.elements(source_id);

        let mut items = Vec::with_capacity(target_items.len() + source_items.len());
        for item in &target_items {
            items.push(self.clone_target(item));
        }
        for item in &source_items {
            items.push(self.clone_source(item));
        }

        self.active.exit();
        self.graph.fill(output, Node::Sequence(items));
        Value::Node(output)
    }

    fn merge_maps(&mut self, target_id: NodeId, source_id: NodeId) -> Value {
        let output = self.graph.alloc(Node::Map(MapNode::new()));
        self.pairs.insert(target_id, source_id, output);
        self.active.enter(target_id, output);

        let target_map = self.entries(target_id);
        let source_map = self.entries(source_id);
        let mut merged = MapNode::with_capacity(target_map.len() + source_map.len());

        // Target keys claim their slots first; shared keys are overwritten
        // below without moving.
        for (key, value) in target_map.iter() {
            let copied = if source_map.contains_key(key) {
                Value::Undefined
            } else {
                self.clone_target(value)
            };
            merged.insert(key, copied);
        }

        for (key, value) in source_map.iter() {
            let next = match target_map.get(key) {
                Some(existing)
                    if self.graph.is_structured(existing) && self.graph.is_structured(value) =>
                {
                    self.merge(existing, value)
                }
                _ => self.clone_source(value),
            };
            merged.insert(key, next);
        }

        self.active.exit();
        self.graph.fill(output, Node::Map(merged));
        Value::Node(output)
    }

    fn clone_value(&mut self, side: Side, value: &Value) -> Value {
        let Some(id) = value.node_id() else {
            return value.clone();
        };
        if side == Side::Target
            && let Some(output) = self.active.resolve(id)
        {
            trace!(target = %id, output = %output, "target refers to a node being merged");
            return Value::Node(output);
        }
        if let Some(existing) = self.clones(side).get(id) {
            trace!(?side, original = %id, clone = %existing, "clone table hit");
            return Value::Node(existing);
        }

        match self.graph.kind(value) {
            Kind::Sequence => {
                let items = self.elements(id);
                let output = self.graph.alloc(Node::Sequence(Vec::with_capacity(items.len())));
                self.clones_mut(side).insert(id, output);
                let cloned = items
                    .iter()
                    .map(|item| self.clone_value(side, item))
                    .collect();
                self.graph.fill(output, Node::Sequence(cloned));
                Value::Node(output)
            }
            Kind::Map => {
                let entries = self.entries(id);
                let output = self.graph.alloc(Node::Map(MapNode::new()));
                self.clones_mut(side).insert(id, output);
                let mut cloned = MapNode::with_capacity(entries.len());
                for (key, item) in entries.iter() {
                    let copy = self.clone_value(side, item);
                    cloned.insert(key, copy);
                }
                self.graph.fill(output, Node::Map(cloned));
                Value::Node(output)
            }
            Kind::Opaque | Kind::Scalar => value.clone(),
        }
    }

    fn clones(&self, side: Side) -> &CloneTable {
        match side {
            Side::Target => self.active.clones(),
            Side::Source => &self.source_clones,
        }
    }

    fn clones_mut(&mut self, side: Side) -> &mut CloneTable {
        match side {
            Side::Target => self.active.clones_mut(),
            Side::Source => &mut self.source_clones,
        }
    }

    fn elements(&self, id: NodeId) -> Vec<Value> {
        match self.graph.node(id) {
            Some(Node::Sequence(items)) => items.clone(),
            _ => Vec::new(),
        }
    }

    fn entries(&self, id: NodeId) -> MapNode {
        match self.graph.node(id) {
            Some(Node::Map(map)) => map.clone(),
            _ => MapNode::new(),
        }
    }
}
