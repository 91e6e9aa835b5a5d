//! Value model shared by the graph arena and the merge engine.
//!
//! Scalars are stored inline in [`Value`]. Structured values (sequences, maps
//! and opaque objects) live in a [`crate::Graph`] and are referenced through
//! [`Value::Node`] handles, which carry the identity the merge engine relies
//! on.

mod leaf;
mod map;
mod opaque;

pub use leaf::Leaf;
pub use map::MapNode;
pub use opaque::Opaque;

use crate::graph::NodeId;

/// A single point in a value graph.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Value {
    /// Marker for a missing value, distinct from [`Value::Null`].
    #[default]
    Undefined,
    /// Explicit null.
    Null,
    /// Boolean scalar.
    Bool(bool),
    /// Numeric scalar.
    Number(f64),
    /// String scalar.
    String(String),
    /// Non-decomposable leaf compared by identity.
    Leaf(Leaf),
    /// Handle to a structured node owned by a [`crate::Graph`].
    Node(NodeId),
}

impl Value {
    /// Returns the node handle when this value refers to a structured node.
    #[must_use]
    pub const fn node_id(&self) -> Option<NodeId> {
        match self {
            Self::Node(id) => Some(*id),
            _ => None,
        }
    }

    /// Returns `true` for [`Value::Undefined`].
    #[must_use]
    pub const fn is_undefined(&self) -> bool {
        matches!(self, Self::Undefined)
    }

    /// Returns `true` for [`Value::Null`].
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns the numeric payload, if any.
    #[must_use]
    pub const fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the string payload, if any.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<u32> for Value {
    fn from(value: u32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::String(value.to_owned())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<Leaf> for Value {
    fn from(value: Leaf) -> Self {
        Self::Leaf(value)
    }
}

impl From<NodeId> for Value {
    fn from(value: NodeId) -> Self {
        Self::Node(value)
    }
}

/// Classification of a value as seen by the merge engine.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Kind {
    /// Inline scalar, including `Undefined`, `Null` and leaves.
    Scalar,
    /// Ordered list of values.
    Sequence,
    /// Plain keyed record eligible for key-wise merging.
    Map,
    /// Structured value that is never decomposed.
    Opaque,
}

impl Kind {
    /// Returns `true` for every kind the engine recurses into or replaces by
    /// reference (everything except [`Kind::Scalar`]).
    #[must_use]
    pub const fn is_structured(self) -> bool {
        !matches!(self, Self::Scalar)
    }

    /// Lower-case name used in log fields and error messages.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Scalar => "scalar",
            Self::Sequence => "sequence",
            Self::Map => "map",
            Self::Opaque => "opaque",
        }
    }
}

impl std::fmt::Display for Kind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
