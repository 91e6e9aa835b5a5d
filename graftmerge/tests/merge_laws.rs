//! Integration tests for the precedence and shape rules of `deep_merge`.
//!
//! Covers array replacement and concatenation, deep key union, root handling,
//! type-mismatch resolution and scalar/opaque precedence.
use anyhow::{Result, ensure};
use graftmerge::{Graph, Kind, MergeOptions, Opaque, Value, deep_merge};
use rstest::{fixture, rstest};
use serde_json::json;
use test_helpers::snapshot::GraphSnapshot;

#[fixture]
fn graph() -> Graph {
    Graph::new()
}

fn to_anyhow<T, E: std::fmt::Display>(result: Result<T, E>) -> Result<T> {
    result.map_err(|err| anyhow::anyhow!(err.to_string()))
}

fn merge_json(
    graph: &mut Graph,
    target: serde_json::Value,
    source: serde_json::Value,
    options: MergeOptions,
) -> Result<serde_json::Value> {
    let target = graph.import_json(target);
    let source = graph.import_json(source);
    let merged = deep_merge(graph, &target, &source, options);
    to_anyhow(graph.export_json(&merged))
}

#[rstest]
fn arrays_are_replaced_by_default(mut graph: Graph) -> Result<()> {
    let merged = merge_json(
        &mut graph,
        json!({"arr": [1, 2]}),
        json!({"arr": [3, 4]}),
        MergeOptions::default(),
    )?;
    ensure!(merged == json!({"arr": [3, 4]}), "unexpected merge {merged}");
    Ok(())
}

#[rstest]
fn arrays_concatenate_into_a_new_sequence(mut graph: Graph) -> Result<()> {
    let target = graph.import_json(json!({"arr": [1, 2]}));
    let source = graph.import_json(json!({"arr": [3, 4]}));
    let options = MergeOptions::new().with_merge_arrays(true);

    let merged = deep_merge(&mut graph, &target, &source, options);
    let exported = to_anyhow(graph.export_json(&merged))?;
    ensure!(
        exported == json!({"arr": [1, 2, 3, 4]}),
        "unexpected merge {exported}"
    );

    let merged_arr = graph.lookup(&merged, "arr");
    ensure!(
        merged_arr != graph.lookup(&target, "arr"),
        "output array aliases the target array"
    );
    ensure!(
        merged_arr != graph.lookup(&source, "arr"),
        "output array aliases the source array"
    );
    Ok(())
}

#[rstest]
fn nested_maps_union_their_keys(mut graph: Graph) -> Result<()> {
    let merged = merge_json(
        &mut graph,
        json!({"a": 1, "b": {"c": 2, "d": 3}}),
        json!({"b": {"c": 10}, "e": 4}),
        MergeOptions::default(),
    )?;
    ensure!(
        merged == json!({"a": 1, "b": {"c": 10, "d": 3}, "e": 4}),
        "unexpected merge {merged}"
    );
    Ok(())
}

#[rstest]
#[case::null_and_undefined(json!(null), None, json!({}))]
#[case::null_target(json!(null), Some(json!({"a": 1})), json!({"a": 1}))]
#[case::undefined_source(json!({"a": 1}), None, json!({"a": 1}))]
fn absent_roots(
    mut graph: Graph,
    #[case] target: serde_json::Value,
    #[case] source: Option<serde_json::Value>,
    #[case] expected: serde_json::Value,
) -> Result<()> {
    let target = graph.import_json(target);
    let source = source.map_or(Value::Undefined, |json| graph.import_json(json));
    let merged = deep_merge(&mut graph, &target, &source, MergeOptions::default());
    let exported = to_anyhow(graph.export_json(&merged))?;
    ensure!(exported == expected, "expected {expected}, got {exported}");
    Ok(())
}

#[rstest]
#[case::sequence_wins(json!({"k": {"a": 1}}), json!({"k": [1]}), Kind::Sequence)]
#[case::map_wins(json!({"k": [1]}), json!({"k": {"a": 1}}), Kind::Map)]
fn type_mismatch_resolves_to_source_shape(
    mut graph: Graph,
    #[case] target: serde_json::Value,
    #[case] source: serde_json::Value,
    #[case] expected: Kind,
) -> Result<()> {
    let target = graph.import_json(target);
    let source = graph.import_json(source);
    let merged = deep_merge(&mut graph, &target, &source, MergeOptions::default());
    let value = graph.lookup(&merged, "k").cloned().unwrap_or_default();
    ensure!(
        graph.kind(&value) == expected,
        "expected {expected}, got {}",
        graph.kind(&value)
    );
    ensure!(
        Some(&value) != graph.lookup(&source, "k"),
        "mismatch result should be a fresh copy"
    );
    Ok(())
}

#[rstest]
fn scalars_and_opaques_take_source_value(mut graph: Graph) -> Result<()> {
    let when = graph.opaque(Opaque::Date(chrono::DateTime::<chrono::Utc>::UNIX_EPOCH));
    let pattern = graph.opaque(Opaque::pattern("^x$"));
    let target = graph.import_json(json!({"n": 1, "s": "old", "when": {"y": 1}, "re": null}));
    let source = graph.map([
        ("n", Value::from(2)),
        ("s", Value::from("new")),
        ("when", when.clone()),
        ("re", pattern.clone()),
    ]);

    let merged = deep_merge(&mut graph, &target, &source, MergeOptions::default());
    ensure!(graph.lookup(&merged, "n") == Some(&Value::from(2)), "n");
    ensure!(graph.lookup(&merged, "s") == Some(&Value::from("new")), "s");
    ensure!(graph.lookup(&merged, "when") == Some(&when), "date not by reference");
    ensure!(graph.lookup(&merged, "re") == Some(&pattern), "pattern not by reference");
    Ok(())
}

#[rstest]
fn nested_output_nodes_are_fresh_allocations(mut graph: Graph) -> Result<()> {
    let target = graph.import_json(json!({"keep": {"x": [1]}, "both": {"y": 1}}));
    let source = graph.import_json(json!({"both": {"z": 2}, "new": {"w": [3]}}));
    let snapshot = GraphSnapshot::capture(&graph);

    let merged = deep_merge(&mut graph, &target, &source, MergeOptions::default());
    snapshot.ensure_unchanged(&graph)?;

    for key in ["keep", "both", "new"] {
        let node = graph
            .lookup(&merged, key)
            .and_then(Value::node_id)
            .ok_or_else(|| anyhow::anyhow!("{key} is not a node"))?;
        ensure!(
            node.index() >= snapshot.len(),
            "{key} reuses input node {node}"
        );
    }
    Ok(())
}

#[rstest]
fn disjoint_maps_merge_to_their_union(mut graph: Graph) -> Result<()> {
    let merged = merge_json(
        &mut graph,
        json!({"a": 1, "b": {"c": [true]}}),
        json!({"d": "x", "e": {"f": null}}),
        MergeOptions::default(),
    )?;
    ensure!(
        merged == json!({"a": 1, "b": {"c": [true]}, "d": "x", "e": {"f": null}}),
        "unexpected merge {merged}"
    );
    Ok(())
}
