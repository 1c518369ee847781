//! KeySetExtractor
//!
//! Pulls the full set of immediate child entries at a `group.subgroup`
//! location, dropping internal bookkeeping keys and anything that is not a
//! plain machine-readable identifier. Used for enumeration-style fields
//! (selectable program names) whose complete value set is authoritative from
//! the source catalog each pass.

use crate::core::KeyTree;
use lazy_static::lazy_static;
use regex::Regex;
use std::collections::BTreeMap;

/// Keys whose lower-cased form contains any of these substrings are not
/// user-selectable entries and are dropped.
const KEY_BLACKLIST: [&str; 3] = ["description", "_recipe_", "_guided_"];

lazy_static! {
    static ref IDENTIFIER_RE: Regex = Regex::new("^[a-z0-9-_]+$").unwrap();
}

pub struct KeySetExtractor;

impl KeySetExtractor {
    /// Extract the filtered child set at `group.subgroup`.
    ///
    /// Keys are lower-cased and must fully match `[a-z0-9-_]+` after
    /// lower-casing; values must be scalar leaves and are kept unchanged.
    /// A malformed path, a lookup miss, or a fully-filtered set all yield an
    /// empty map.
    pub fn extract(two_segment_path: &str, tree: &KeyTree) -> BTreeMap<String, String> {
        let Some((group, subgroup)) = split_two(two_segment_path) else {
            return BTreeMap::new();
        };

        let entries = tree
            .child(group)
            .and_then(|node| node.child(subgroup))
            .and_then(KeyTree::as_node);

        let Some(entries) = entries else {
            return BTreeMap::new();
        };

        entries
            .iter()
            .filter_map(|(key, value)| {
                let lowered = key.to_lowercase();
                if KEY_BLACKLIST.iter().any(|b| lowered.contains(b)) {
                    return None;
                }
                if !IDENTIFIER_RE.is_match(&lowered) {
                    return None;
                }
                let scalar = match value {
                    KeyTree::Leaf(s) => s.clone(),
                    KeyTree::Node(_) => return None,
                };
                Some((lowered, scalar))
            })
            .collect()
    }
}

/// Split into exactly two segments; anything else is malformed.
fn split_two(path: &str) -> Option<(&str, &str)> {
    let (first, last) = path.split_once('.')?;
    if last.contains('.') {
        return None;
    }
    Some((first, last))
}
