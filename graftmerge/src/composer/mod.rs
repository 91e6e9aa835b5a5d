//! Layered composition on top of the pairwise merge.
//!
//! A [`MergeComposer`] collects values in precedence order and folds them
//! with one [`crate::deep_merge`] call per layer, so each later layer acts as
//! the source merged over everything before it.

use tracing::debug;

use crate::graph::Graph;
use crate::value::Value;
use crate::{MergeOptions, engine};

/// Provenance of a merge layer.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum LayerProvenance {
    /// Baseline values.
    Defaults,
    /// Values read from a file.
    File,
    /// Values collected from the environment.
    Environment,
    /// Explicit caller-supplied overrides.
    Override,
}

/// A value tagged with where it came from.
#[derive(Clone, Debug, PartialEq)]
pub struct MergeLayer {
    provenance: LayerProvenance,
    value: Value,
    label: Option<String>,
}

impl MergeLayer {
    /// Construct a layer with the given provenance.
    #[must_use]
    pub const fn new(provenance: LayerProvenance, value: Value) -> Self {
        Self {
            provenance,
            value,
            label: None,
        }
    }

    /// Attach a human-readable label, such as a file name.
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Returns the provenance of the layer.
    #[must_use]
    pub const fn provenance(&self) -> LayerProvenance {
        self.provenance
    }

    /// Returns the label, if one was attached.
    #[must_use]
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Returns the layer's value.
    #[must_use]
    pub const fn value(&self) -> &Value {
        &self.value
    }
}

/// Builder that accumulates [`MergeLayer`] instances.
///
/// ```rust
/// use graftmerge::{Graph, MergeComposer, MergeOptions};
/// use serde_json::json;
///
/// let mut graph = Graph::new();
/// let mut composer = MergeComposer::new();
/// composer.push_defaults(graph.import_json(json!({"port": 3000, "tags": ["base"]})));
/// composer.push_environment(graph.import_json(json!({"port": 4000})));
/// composer.push_override(graph.import_json(json!({"tags": ["cli"]})));
///
/// let merged = composer.compose(&mut graph, MergeOptions::new().with_merge_arrays(true));
/// assert_eq!(
///     graph.export_json(&merged)?,
///     json!({"port": 4000, "tags": ["base", "cli"]}),
/// );
/// # Ok::<_, std::sync::Arc<graftmerge::MergeError>>(())
/// ```
#[derive(Debug, Default)]
pub struct MergeComposer {
    layers: Vec<MergeLayer>,
}

impl MergeComposer {
    /// Create an empty composer.
    #[must_use]
    pub const fn new() -> Self {
        Self { layers: Vec::new() }
    }

    /// Create a composer with preallocated capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            layers: Vec::with_capacity(capacity),
        }
    }

    /// Push a defaults layer.
    pub fn push_defaults(&mut self, value: Value) {
        self.push_layer(MergeLayer::new(LayerProvenance::Defaults, value));
    }

    /// Push a file layer labelled with its path.
    pub fn push_file(&mut self, value: Value, path: impl Into<String>) {
        self.push_layer(MergeLayer::new(LayerProvenance::File, value).with_label(path));
    }

    /// Push an environment layer.
    pub fn push_environment(&mut self, value: Value) {
        self.push_layer(MergeLayer::new(LayerProvenance::Environment, value));
    }

    /// Push an override layer.
    pub fn push_override(&mut self, value: Value) {
        self.push_layer(MergeLayer::new(LayerProvenance::Override, value));
    }

    /// Push an arbitrary layer.
    pub fn push_layer(&mut self, layer: MergeLayer) {
        self.layers.push(layer);
    }

    /// Layers accumulated so far, lowest precedence first.
    #[must_use]
    pub fn layers(&self) -> &[MergeLayer] {
        &self.layers
    }

    /// Fold every layer into a single value, later layers winning.
    ///
    /// Each step is an independent two-way merge; no state is shared between
    /// steps. A composer without layers yields an empty map.
    pub fn compose(self, graph: &mut Graph, options: MergeOptions) -> Value {
        let mut merged = Value::Undefined;
        for layer in &self.layers {
            debug!(
                provenance = ?layer.provenance(),
                label = layer.label().unwrap_or_default(),
                "merging layer"
            );
            merged = engine::deep_merge(graph, &merged, layer.value(), options);
        }
        if self.layers.is_empty() {
            merged = engine::deep_merge(graph, &merged, &Value::Undefined, options);
        }
        merged
    }
}
