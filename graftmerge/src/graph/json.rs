//! Bridge between [`serde_json::Value`] trees and graph values.
//!
//! Import always allocates fresh nodes. Export walks the graph depth first
//! and refuses cycles, since JSON cannot express them.

use std::collections::HashSet;

use serde_json::{Map as JsonMap, Number, Value as Json};

use super::{Graph, Node, NodeId};
use crate::value::{MapNode, Opaque, Value};
use crate::{MergeError, MergeResult};

/// Largest magnitude below which every integral `f64` is exact.
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

impl Graph {
    /// Allocate `json` in this graph and return the root value.
    ///
    /// Objects become maps (keeping key order), arrays become sequences.
    pub fn import_json(&mut self, json: Json) -> Value {
        match json {
            Json::Null => Value::Null,
            Json::Bool(flag) => Value::Bool(flag),
            Json::Number(number) => number.as_f64().map_or(Value::Null, Value::Number),
            Json::String(text) => Value::String(text),
            Json::Array(items) => {
                let values: Vec<Value> = items.into_iter().map(|item| self.import_json(item)).collect();
                self.insert(Node::Sequence(values))
            }
            Json::Object(entries) => {
                let mut map = MapNode::with_capacity(entries.len());
                for (key, item) in entries {
                    let value = self.import_json(item);
                    map.insert(key, value);
                }
                self.insert(Node::Map(map))
            }
        }
    }

    /// Render an acyclic `value` as JSON.
    ///
    /// `Undefined` map entries are skipped; `Undefined` anywhere else renders
    /// as `null`. Opaque nodes render as single-key tagged objects
    /// (`$date`, `$pattern`, `$instance`).
    ///
    /// # Errors
    ///
    /// Returns [`MergeError::Cycle`] when `value` reaches itself,
    /// [`MergeError::Unrepresentable`] for leaves and non-finite numbers, and
    /// [`MergeError::DanglingNode`] for handles this graph does not own.
    pub fn export_json(&self, value: &Value) -> MergeResult<Json> {
        let mut path = HashSet::new();
        self.export_value(value, &mut path)
    }

    fn export_value(&self, value: &Value, path: &mut HashSet<NodeId>) -> MergeResult<Json> {
        match value {
            Value::Undefined | Value::Null => Ok(Json::Null),
            Value::Bool(flag) => Ok(Json::Bool(*flag)),
            Value::Number(number) => export_number(*number),
            Value::String(text) => Ok(Json::String(text.clone())),
            Value::Leaf(_) => Err(MergeError::unrepresentable_arc("leaf")),
            Value::Node(id) => {
                let node = self
                    .node(*id)
                    .ok_or_else(|| MergeError::dangling_arc(*id))?;
                if !path.insert(*id) {
                    return Err(MergeError::cycle_arc(*id));
                }
                let rendered = self.export_node(node, path);
                path.remove(id);
                rendered
            }
        }
    }

    fn export_node(&self, node: &Node, path: &mut HashSet<NodeId>) -> MergeResult<Json> {
        match node {
            Node::Sequence(items) => items
                .iter()
                .map(|item| self.export_value(item, path))
                .collect::<MergeResult<Vec<_>>>()
                .map(Json::Array),
            Node::Map(map) => self.export_map(map, path).map(Json::Object),
            Node::Opaque(opaque) => self.export_opaque(opaque, path),
        }
    }

    fn export_map(
        &self,
        map: &MapNode,
        path: &mut HashSet<NodeId>,
    ) -> MergeResult<JsonMap<String, Json>> {
        let mut object = JsonMap::new();
        for (key, item) in map.iter().filter(|(_, item)| !item.is_undefined()) {
            object.insert(key.to_owned(), self.export_value(item, path)?);
        }
        Ok(object)
    }

    fn export_opaque(&self, opaque: &Opaque, path: &mut HashSet<NodeId>) -> MergeResult<Json> {
        let mut tagged = JsonMap::new();
        match opaque {
            Opaque::Date(at) => {
                tagged.insert("$date".to_owned(), Json::String(at.to_rfc3339()));
            }
            Opaque::Pattern { source, flags } => {
                let mut body = JsonMap::new();
                body.insert("source".to_owned(), Json::String(source.clone()));
                body.insert("flags".to_owned(), Json::String(flags.clone()));
                tagged.insert("$pattern".to_owned(), Json::Object(body));
            }
            Opaque::Instance { class, fields } => {
                tagged.insert("$instance".to_owned(), Json::String(class.clone()));
                tagged.insert(
                    "fields".to_owned(),
                    Json::Object(self.export_map(fields, path)?),
                );
            }
        }
        Ok(Json::Object(tagged))
    }
}

#[expect(
    clippy::cast_possible_truncation,
    reason = "integral values below 2^53 convert to i64 exactly"
)]
fn export_number(number: f64) -> MergeResult<Json> {
    if !number.is_finite() {
        return Err(MergeError::unrepresentable_arc("non-finite number"));
    }
    if number.fract() == 0.0 && number.abs() < MAX_EXACT_INTEGER {
        return Ok(Json::Number(Number::from(number as i64)));
    }
    Number::from_f64(number)
        .map(Json::Number)
        .ok_or_else(|| MergeError::unrepresentable_arc("non-finite number"))
}
