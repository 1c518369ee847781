//! Hierarchical key tree
//!
//! Source catalogs are deep key/value trees with scalar strings at the
//! leaves. Traversal is an explicit recursive descent over a tagged variant:
//! descending into a leaf, or a missing segment at any depth, terminates the
//! lookup with "absent" rather than failing.

use serde::Serialize;
use serde_json::Value as JsonValue;
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum KeyTree {
    Leaf(String),
    Node(BTreeMap<String, KeyTree>),
}

impl KeyTree {
    /// Empty node, the identity element for lookups: every descent misses.
    pub fn empty() -> Self {
        KeyTree::Node(BTreeMap::new())
    }

    /// Build a tree from loosely-typed JSON catalog data.
    ///
    /// Objects become nodes and strings become leaves. Numbers and booleans
    /// are coerced to their display form since downstream values are opaque
    /// strings anyway. Null and arrays carry no usable scalar and map to an
    /// empty leaf, which resolves as absent.
    pub fn from_value(value: &JsonValue) -> Self {
        match value {
            JsonValue::Object(map) => KeyTree::Node(
                map.iter()
                    .map(|(k, v)| (k.clone(), KeyTree::from_value(v)))
                    .collect(),
            ),
            JsonValue::String(s) => KeyTree::Leaf(s.clone()),
            JsonValue::Number(n) => KeyTree::Leaf(n.to_string()),
            JsonValue::Bool(b) => KeyTree::Leaf(b.to_string()),
            JsonValue::Null | JsonValue::Array(_) => KeyTree::Leaf(String::new()),
        }
    }

    /// Look up a direct child by segment name. Leaves have no children.
    pub fn child(&self, segment: &str) -> Option<&KeyTree> {
        match self {
            KeyTree::Node(map) => map.get(segment),
            KeyTree::Leaf(_) => None,
        }
    }

    /// Scalar value at this position, if this is a non-empty leaf.
    pub fn as_scalar(&self) -> Option<&str> {
        match self {
            KeyTree::Leaf(s) if !s.is_empty() => Some(s),
            _ => None,
        }
    }

    /// Child map if this is a node.
    pub fn as_node(&self) -> Option<&BTreeMap<String, KeyTree>> {
        match self {
            KeyTree::Node(map) => Some(map),
            KeyTree::Leaf(_) => None,
        }
    }
}
