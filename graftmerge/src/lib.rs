//! Core crate for the `graftmerge` deep-merge engine.
//!
//! Values live in a [`Graph`] arena so that shared and self-referential
//! structures have a stable identity. [`deep_merge`] combines a target and a
//! source value into a freshly allocated output value without touching either
//! input, terminating on cyclic inputs and preserving their cycle topology.
//!
//! ```rust
//! use graftmerge::{Graph, MergeOptions};
//! use serde_json::json;
//!
//! let mut graph = Graph::new();
//! let target = graph.import_json(json!({"a": 1, "b": {"c": 2, "d": 3}}));
//! let source = graph.import_json(json!({"b": {"c": 10}, "e": 4}));
//!
//! let merged = graph.deep_merge(&target, &source, MergeOptions::default());
//! assert_eq!(
//!     graph.export_json(&merged)?,
//!     json!({"a": 1, "b": {"c": 10, "d": 3}, "e": 4}),
//! );
//! # Ok::<_, std::sync::Arc<graftmerge::MergeError>>(())
//! ```

pub mod composer;
mod engine;
mod error;
mod graph;
mod options;
mod result_ext;
mod value;

pub use composer::{LayerProvenance, MergeComposer, MergeLayer};
pub use engine::deep_merge;
pub use error::{MergeError, MergeResult};
pub use graph::{Graph, Node, NodeId};
pub use options::{MergeOptions, normalize_prefix};
pub use result_ext::MergeResultExt;
pub use value::{Kind, Leaf, MapNode, Opaque, Value};
