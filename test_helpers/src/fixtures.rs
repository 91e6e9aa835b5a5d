//! Builders for self-referential and mutually referential graphs.

use graftmerge::{Graph, Value};

/// Allocate an empty map.
pub fn empty_map(graph: &mut Graph) -> Value {
    graph.map(Vec::<(String, Value)>::new())
}

/// Build `{ <key>: <itself>, ...entries }`.
pub fn self_referential_map(graph: &mut Graph, key: &str, entries: Vec<(String, Value)>) -> Value {
    let root = graph.map(entries);
    graph.set_entry(&root, key, root.clone());
    root
}

/// Build a ring of `len` maps where each map's `next` entry points at the
/// following map and the last one points back at the first.
///
/// Every map also carries its position under `index`. Returns the first map,
/// or an empty map when `len` is zero.
pub fn ring(graph: &mut Graph, len: u32) -> Value {
    let members: Vec<Value> = (0..len)
        .map(|index| graph.map([("index", Value::from(index))]))
        .collect();
    for (current, next) in members.iter().zip(members.iter().cycle().skip(1)) {
        graph.set_entry(current, "next", next.clone());
    }
    members.first().cloned().unwrap_or_else(|| empty_map(graph))
}

/// Build two maps `a` and `b` with `a.peer == b` and `b.peer == a`.
pub fn mutual_pair(graph: &mut Graph) -> (Value, Value) {
    let a = graph.map([("side", Value::from("a"))]);
    let b = graph.map([("side", Value::from("b")), ("peer", a.clone())]);
    graph.set_entry(&a, "peer", b.clone());
    (a, b)
}
