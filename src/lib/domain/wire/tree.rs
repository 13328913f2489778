//! Typed intermediate tree used for key renaming

use serde_json::{Map, Value};

use super::case::snake_case;

/// A JSON document split into renameable structure and passthrough leaves.
#[derive(Clone, Debug, PartialEq)]
pub enum WireNode {
    /// An object whose keys are renamed on output
    Object(Vec<(String, WireNode)>),

    /// An array whose elements are converted independently
    Array(Vec<WireNode>),

    /// A string, number, boolean or null, emitted as is
    Leaf(Value),

    /// A subtree under an exempted key, emitted verbatim
    Opaque(Value),
}

impl WireNode {
    /// Build a named object field whose value is converted like any other.
    pub fn field(key: &str, value: impl Into<Value>) -> (String, WireNode) {
        (key.to_string(), WireNode::from_value(value.into(), &[]))
    }

    /// Build a named object field whose value is emitted verbatim.
    pub fn opaque_field(key: &str, value: impl Into<Value>) -> (String, WireNode) {
        (key.to_string(), WireNode::Opaque(value.into()))
    }

    /// Build a tree from a JSON value, marking every subtree reachable under
    /// one of the `exempt` keys as [`WireNode::Opaque`].
    pub fn from_value(value: Value, exempt: &[&str]) -> Self {
        match value {
            Value::Object(map) => WireNode::Object(
                map.into_iter()
                    .map(|(key, value)| {
                        let node = if exempt.contains(&key.as_str()) {
                            WireNode::Opaque(value)
                        } else {
                            WireNode::from_value(value, exempt)
                        };

                        (key, node)
                    })
                    .collect(),
            ),
            Value::Array(items) => WireNode::Array(
                items
                    .into_iter()
                    .map(|item| WireNode::from_value(item, exempt))
                    .collect(),
            ),
            leaf => WireNode::Leaf(leaf),
        }
    }

    /// Render the tree back to JSON with every object key snake-cased.
    pub fn into_snake_case(self) -> Value {
        match self {
            WireNode::Object(fields) => Value::Object(
                fields
                    .into_iter()
                    .map(|(key, node)| (snake_case(&key), node.into_snake_case()))
                    .collect::<Map<String, Value>>(),
            ),
            WireNode::Array(items) => {
                Value::Array(items.into_iter().map(WireNode::into_snake_case).collect())
            }
            WireNode::Leaf(value) | WireNode::Opaque(value) => value,
        }
    }
}

/// Rename every object key in `value` to lower-snake case, except inside
/// subtrees held under one of the `exempt` keys.
pub fn to_snake_case(value: Value, exempt: &[&str]) -> Value {
    WireNode::from_value(value, exempt).into_snake_case()
}
