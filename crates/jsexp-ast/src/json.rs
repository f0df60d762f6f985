//! JSON encoding of node trees.
//!
//! Parsers outside this workspace hand trees over as JSON, in serde's
//! externally tagged layout:
//!
//! ```json
//! { "position": { "line": 1, "column": 3 },
//!   "kind": { "OpEqual": { "left":  { "position": ..., "kind": { "Name": "i" } },
//!                          "right": { "position": ..., "kind": { "Number": 10 } } } } }
//! ```
//!
//! Marker kinds are bare strings (`"kind": "Semicolon"`). Before decoding, the
//! loader checks every kind name against [`KIND_TABLE`], so a tree produced
//! for a newer node model fails with a [`DispatchError`] that names the
//! offending kind and where it sits, rather than a generic shape error.
//!
//! Every node costs two or three levels of JSON nesting, so serde_json's
//! built-in recursion limit is turned off and decoding runs through
//! `serde_stacker` instead. Node nesting is bounded by [`MAX_SEXP_DEPTH`].

use crate::node::{Category, KIND_TABLE, Node, NodeKind};
use jsexp_common::Position;
use jsexp_common::limits::MAX_SEXP_DEPTH;
use serde::Deserialize;
use serde_json::Value;
use std::io::Read;
use thiserror::Error;

/// A node kind with no registered mapping.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error(
    "no mapping for node kind `{kind}`{}",
    .position.map(|p| format!(" at {p}")).unwrap_or_default()
)]
pub struct DispatchError {
    pub kind: String,
    pub position: Option<Position>,
}

#[derive(Debug, Error)]
pub enum LoadError {
    #[error(transparent)]
    Dispatch(#[from] DispatchError),
    #[error("node tree nesting exceeds the limit of {limit} levels at {position}")]
    TooDeep { limit: u32, position: Position },
    #[error("malformed node tree: {0}")]
    Json(#[from] serde_json::Error),
    #[error("failed to read node tree: {0}")]
    Io(#[from] std::io::Error),
}

/// Load a tree from JSON text.
pub fn from_str(text: &str) -> Result<Node, LoadError> {
    let mut de = serde_json::Deserializer::from_str(text);
    de.disable_recursion_limit();
    let value = Value::deserialize(serde_stacker::Deserializer::new(&mut de))?;
    de.end()?;
    from_value(value)
}

/// Load a tree from a JSON stream.
pub fn from_reader(mut reader: impl Read) -> Result<Node, LoadError> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    from_str(&text)
}

/// Load a tree from an already-parsed JSON value.
pub fn from_value(value: Value) -> Result<Node, LoadError> {
    if let Err(err) = check_kinds(&value, MAX_SEXP_DEPTH) {
        dismantle(value);
        return Err(err);
    }
    let node = Node::deserialize(serde_stacker::Deserializer::new(value))?;
    tracing::debug!(kind = node.kind.name(), "loaded node tree");
    Ok(node)
}

/// Serialize a tree to compact JSON.
pub fn to_string(node: &Node) -> Result<String, LoadError> {
    Ok(serde_json::to_string(node)?)
}

/// Serialize a tree to indented JSON.
pub fn to_string_pretty(node: &Node) -> Result<String, LoadError> {
    Ok(serde_json::to_string_pretty(node)?)
}

/// Walk the raw tree in pre-order, rejecting the first unknown kind name and
/// any node nested deeper than `max_depth`.
///
/// Values that do not look like nodes are skipped here; serde reports them
/// with full context when the tree is decoded.
fn check_kinds(root: &Value, max_depth: u32) -> Result<(), LoadError> {
    let mut stack = vec![(root, 1u32)];
    while let Some((value, depth)) = stack.pop() {
        let Some(node) = value.as_object() else {
            continue;
        };
        let (name, payload) = match node.get("kind") {
            Some(Value::String(name)) => (name.as_str(), None),
            Some(Value::Object(tagged)) if tagged.len() == 1 => {
                let Some((name, payload)) = tagged.iter().next() else {
                    continue;
                };
                (name.as_str(), Some(payload))
            }
            _ => continue,
        };

        let position = || read_position(node.get("position"));
        let Some(category) = NodeKind::category_of(name) else {
            tracing::debug!(kind = name, "rejecting unknown node kind");
            return Err(DispatchError {
                kind: name.to_string(),
                position: position(),
            }
            .into());
        };
        if depth > max_depth {
            return Err(LoadError::TooDeep {
                limit: max_depth,
                position: position().unwrap_or_default(),
            });
        }

        let Some(payload) = payload else {
            continue;
        };
        let child = depth + 1;
        // Pushed right-to-left so children are checked in source order.
        match category {
            Category::Literal => {}
            Category::Unary => stack.push((payload, child)),
            Category::Binary => {
                stack.extend(payload.get("right").map(|right| (right, child)));
                stack.extend(payload.get("left").map(|left| (left, child)));
            }
            Category::Sequence => {
                if let Some(elements) = payload.as_array() {
                    stack.extend(elements.iter().rev().map(|element| (element, child)));
                }
            }
            Category::Function => stack.extend(payload.get("body").map(|body| (body, child))),
        }
    }
    Ok(())
}

/// Drop a value without recursing once per nesting level.
fn dismantle(value: Value) {
    let mut stack = vec![value];
    while let Some(value) = stack.pop() {
        match value {
            Value::Array(items) => stack.extend(items),
            Value::Object(map) => stack.extend(map.into_iter().map(|(_, value)| value)),
            _ => {}
        }
    }
}

fn read_position(value: Option<&Value>) -> Option<Position> {
    let value = value?;
    let line = value.get("line")?.as_u64()?;
    let column = value.get("column")?.as_u64()?;
    Some(Position::new(
        u32::try_from(line).ok()?,
        u32::try_from(column).ok()?,
    ))
}

/// Names of every kind the loader accepts.
pub fn known_kinds() -> impl Iterator<Item = &'static str> {
    KIND_TABLE.iter().map(|&(name, _)| name)
}

#[cfg(test)]
#[path = "../tests/json_tests.rs"]
mod tests;
