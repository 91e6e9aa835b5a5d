//! Deep merge of two value graphs.
//!
//! The engine walks a target and a source value in lock step and writes a
//! new value into the same [`Graph`]. Source values take precedence at every
//! level; plain maps merge key by key and sequences are replaced or
//! concatenated depending on [`MergeOptions::merge_arrays`].
//!
//! Two identity-keyed tables make the walk safe on cyclic inputs. The pair
//! table remembers the output allocated for each `(target, source)` pair and
//! is consulted before recursing, so a cycle re-entering a pair receives the
//! output node that is still being populated. Clone tables remember the copy
//! made of each node that has no counterpart on the other side, so shared
//! structure is copied once and the copies stay shared.

mod merger;
mod tables;

use tracing::debug;

use crate::MergeOptions;
use crate::graph::Graph;
use crate::value::Value;

use merger::Merger;

/// Merge `source` over `target`, returning a newly allocated value.
///
/// Neither input is modified. Root values that are not maps, sequences or
/// opaque nodes count as absent:
///
/// | target     | source     | result               |
/// |------------|------------|----------------------|
/// | absent     | absent     | empty map            |
/// | absent     | structured | clone of `source`    |
/// | structured | absent     | clone of `target`    |
/// | structured | structured | recursive merge      |
///
/// Opaque nodes are returned by reference from whichever side wins, and a
/// node shared by both inputs at the same position is returned as is. A map
/// or sequence source that replaces an opaque target is copied, so the
/// result never aliases it.
///
/// # Examples
///
/// ```rust
/// use graftmerge::{Graph, MergeOptions, deep_merge};
/// use serde_json::json;
///
/// let mut graph = Graph::new();
/// let target = graph.import_json(json!({"arr": [1, 2]}));
/// let source = graph.import_json(json!({"arr": [3, 4]}));
///
/// let replaced = deep_merge(&mut graph, &target, &source, MergeOptions::default());
/// assert_eq!(graph.export_json(&replaced)?, json!({"arr": [3, 4]}));
///
/// let options = MergeOptions::new().with_merge_arrays(true);
/// let concatenated = deep_merge(&mut graph, &target, &source, options);
/// assert_eq!(graph.export_json(&concatenated)?, json!({"arr": [1, 2, 3, 4]}));
/// # Ok::<_, std::sync::Arc<graftmerge::MergeError>>(())
/// ```
pub fn deep_merge(
    graph: &mut Graph,
    target: &Value,
    source: &Value,
    options: MergeOptions,
) -> Value {
    let target_kind = graph.kind(target);
    let source_kind = graph.kind(source);
    debug!(
        target = %target_kind,
        source = %source_kind,
        merge_arrays = options.merge_arrays,
        "deep merge"
    );

    let mut merger = Merger::new(graph, options);
    match (target_kind.is_structured(), source_kind.is_structured()) {
        (false, false) => merger.empty_map(),
        (false, true) => merger.clone_source(source),
        (true, false) => merger.clone_target(target),
        (true, true) => merger.merge(target, source),
    }
}
