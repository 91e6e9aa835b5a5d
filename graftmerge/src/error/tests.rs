//! Unit tests for error construction and display.

use rstest::rstest;

use super::MergeError;
use crate::graph::{Graph, Node};
use crate::value::MapNode;

#[rstest]
fn figment_errors_convert_into_options_variant() {
    let err: MergeError = figment::Error::from("boom").into();
    assert!(matches!(err, MergeError::Options(_)));
    assert!(err.to_string().contains("boom"));
}

#[rstest]
fn options_arc_wraps_figment_failure() {
    let err = MergeError::options_arc(figment::Error::from("bad flag"));
    assert!(matches!(*err, MergeError::Options(_)));
    assert!(err.to_string().contains("bad flag"));
}

#[rstest]
fn arc_constructors_render_context() {
    let mut graph = Graph::new();
    let node = graph.insert(Node::Map(MapNode::new()));
    let id = node.node_id().expect("map handle");

    let cycle = MergeError::cycle_arc(id);
    assert_eq!(cycle.to_string(), "cyclic value detected at node #0");

    let leaf = MergeError::unrepresentable_arc("leaf");
    assert_eq!(leaf.to_string(), "cannot render leaf as JSON");

    let dangling = MergeError::dangling_arc(id);
    assert!(matches!(*dangling, MergeError::DanglingNode { node } if node == id));
}
