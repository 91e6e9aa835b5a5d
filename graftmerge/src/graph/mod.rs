//! Arena that owns every structured node of a value graph.
//!
//! Nodes are addressed by [`NodeId`] handles. A handle is the reference
//! identity used by the merge engine's clone and pair tables, so two values
//! are "the same node" exactly when they carry the same handle. Merging
//! appends new nodes to the arena and never rewrites nodes that existed
//! before the call.

mod json;

use std::fmt;

use crate::value::{Kind, MapNode, Opaque, Value};
use crate::{MergeOptions, engine};

/// Stable handle to a node stored in a [`Graph`].
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct NodeId(usize);

impl NodeId {
    /// Position of the node inside its arena.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Structured node payload.
#[derive(Clone, Debug, PartialEq)]
pub enum Node {
    /// Ordered list of values.
    Sequence(Vec<Value>),
    /// Plain keyed record.
    Map(MapNode),
    /// Replace-only structured value.
    Opaque(Opaque),
}

impl Node {
    /// Classification of this node.
    #[must_use]
    pub const fn kind(&self) -> Kind {
        match self {
            Self::Sequence(_) => Kind::Sequence,
            Self::Map(_) => Kind::Map,
            Self::Opaque(_) => Kind::Opaque,
        }
    }
}

/// Arena of structured nodes.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Graph {
    nodes: Vec<Node>,
}

impl Graph {
    /// Create an empty graph.
    #[must_use]
    pub const fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    /// Number of nodes allocated so far.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` when no node has been allocated.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Store `node` and return a value referring to it.
    pub fn insert(&mut self, node: Node) -> Value {
        Value::Node(self.alloc(node))
    }

    pub(crate) fn alloc(&mut self, node: Node) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(node);
        id
    }

    /// Overwrite a node allocated during the current merge.
    pub(crate) fn fill(&mut self, id: NodeId, node: Node) {
        if let Some(slot) = self.nodes.get_mut(id.0) {
            *slot = node;
        }
    }

    /// Allocate a map from `entries`.
    pub fn map<K, I>(&mut self, entries: I) -> Value
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, Value)>,
    {
        self.insert(Node::Map(entries.into_iter().collect()))
    }

    /// Allocate a sequence from `items`.
    pub fn sequence<I>(&mut self, items: I) -> Value
    where
        I: IntoIterator<Item = Value>,
    {
        self.insert(Node::Sequence(items.into_iter().collect()))
    }

    /// Allocate an opaque node.
    pub fn opaque(&mut self, opaque: Opaque) -> Value {
        self.insert(Node::Opaque(opaque))
    }

    /// Node behind `id`, if it belongs to this graph.
    #[must_use]
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0)
    }

    /// Node behind `value`, if `value` is a handle into this graph.
    #[must_use]
    pub fn get(&self, value: &Value) -> Option<&Node> {
        value.node_id().and_then(|id| self.node(id))
    }

    /// Iterate over every node in allocation order.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &Node)> {
        self.nodes
            .iter()
            .enumerate()
            .map(|(index, node)| (NodeId(index), node))
    }

    /// Classify `value`.
    ///
    /// A handle this graph does not own is reported as [`Kind::Opaque`]:
    /// unknown structured values are treated as atomic rather than rejected.
    #[must_use]
    pub fn kind(&self, value: &Value) -> Kind {
        match value {
            Value::Node(id) => self.node(*id).map_or(Kind::Opaque, Node::kind),
            _ => Kind::Scalar,
        }
    }

    /// Returns `true` when `value` is a sequence, map or opaque node.
    #[must_use]
    pub fn is_structured(&self, value: &Value) -> bool {
        self.kind(value).is_structured()
    }

    /// Returns `true` when `value` is specifically a plain map.
    #[must_use]
    pub fn is_plain_map(&self, value: &Value) -> bool {
        self.kind(value) == Kind::Map
    }

    /// Entry `key` of the map behind `value`.
    #[must_use]
    pub fn lookup(&self, value: &Value, key: &str) -> Option<&Value> {
        match self.get(value)? {
            Node::Map(map) => map.get(key),
            _ => None,
        }
    }

    /// Element `index` of the sequence behind `value`.
    #[must_use]
    pub fn element(&self, value: &Value, index: usize) -> Option<&Value> {
        match self.get(value)? {
            Node::Sequence(items) => items.get(index),
            _ => None,
        }
    }

    /// Number of entries or elements of the map or sequence behind `value`.
    #[must_use]
    pub fn len_of(&self, value: &Value) -> Option<usize> {
        match self.get(value)? {
            Node::Map(map) => Some(map.len()),
            Node::Sequence(items) => Some(items.len()),
            Node::Opaque(_) => None,
        }
    }

    /// Set `key` on the map behind `map`.
    ///
    /// Used to build self-referential inputs. Returns `false` when `map` is
    /// not a map in this graph.
    pub fn set_entry(&mut self, map: &Value, key: &str, value: Value) -> bool {
        match map.node_id().and_then(|id| self.nodes.get_mut(id.0)) {
            Some(Node::Map(entries)) => {
                entries.insert(key, value);
                true
            }
            _ => false,
        }
    }

    /// Append `value` to the sequence behind `sequence`.
    ///
    /// Returns `false` when `sequence` is not a sequence in this graph.
    pub fn push_element(&mut self, sequence: &Value, value: Value) -> bool {
        match sequence.node_id().and_then(|id| self.nodes.get_mut(id.0)) {
            Some(Node::Sequence(items)) => {
                items.push(value);
                true
            }
            _ => false,
        }
    }

    /// Merge `source` over `target`, allocating the result in this graph.
    ///
    /// See [`crate::deep_merge`].
    pub fn deep_merge(&mut self, target: &Value, source: &Value, options: MergeOptions) -> Value {
        engine::deep_merge(self, target, source, options)
    }
}
