//! KeyResolver
//!
//! Resolves a dotted path, or an ordered list of dotted paths, against a
//! primary hierarchical tree with a single-hop fallback: when the primary
//! tree misses, the whole traversal is retried exactly once against the
//! fallback tree. No further chaining, so resolution always terminates even
//! if the fallback data itself references missing keys.
//!
//! Absence is a value, not an error: a miss is `None`, and the resolver
//! never panics.

use crate::core::KeyTree;
use crate::resolver::KeyPath;

pub struct KeyResolver;

impl KeyResolver {
    /// Resolve a path or path list against `(primary, fallback)`.
    ///
    /// A single path resolves to the non-empty scalar at its location, or
    /// `None` when any segment misses, the descent runs through a leaf, or
    /// the location holds a subtree rather than a scalar.
    ///
    /// A path list resolves each element independently against the same
    /// tree pair, trims each result, and joins with single spaces. An
    /// unresolved element contributes an empty segment; the separator is
    /// still inserted.
    pub fn resolve(
        path: &KeyPath,
        primary: &KeyTree,
        fallback: Option<&KeyTree>,
    ) -> Option<String> {
        match path {
            KeyPath::Single(p) => Self::resolve_single(p, primary, fallback),
            KeyPath::Joined(paths) => {
                if paths.is_empty() {
                    return None;
                }
                let joined = paths
                    .iter()
                    .map(|p| {
                        Self::resolve_single(p, primary, fallback)
                            .map(|s| s.trim().to_string())
                            .unwrap_or_default()
                    })
                    .collect::<Vec<_>>()
                    .join(" ");
                Some(joined)
            }
        }
    }

    fn resolve_single(path: &str, primary: &KeyTree, fallback: Option<&KeyTree>) -> Option<String> {
        Self::descend(path, primary)
            .or_else(|| fallback.and_then(|tree| Self::descend(path, tree)))
    }

    fn descend(path: &str, tree: &KeyTree) -> Option<String> {
        let mut current = tree;
        for segment in path.split('.') {
            current = current.child(segment)?;
        }
        current.as_scalar().map(str::to_string)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn tree(value: serde_json::Value) -> KeyTree {
        KeyTree::from_value(&value)
    }

    #[test]
    fn test_resolve_hit() {
        let t = tree(json!({"a": {"b": "X"}}));
        assert_eq!(
            KeyResolver::resolve(&"a.b".into(), &t, None),
            Some("X".to_string())
        );
    }

    #[test]
    fn test_resolve_missing_segment() {
        let t = tree(json!({"a": {"b": "X"}}));
        assert_eq!(KeyResolver::resolve(&"a.c".into(), &t, None), None);
        assert_eq!(KeyResolver::resolve(&"x.y".into(), &t, None), None);
    }

    #[test]
    fn test_resolve_through_leaf() {
        let t = tree(json!({"a": {"b": "X"}}));
        assert_eq!(KeyResolver::resolve(&"a.b.c".into(), &t, None), None);
    }

    #[test]
    fn test_resolve_terminates_on_subtree() {
        let t = tree(json!({"a": {"b": {"c": "X"}}}));
        assert_eq!(KeyResolver::resolve(&"a.b".into(), &t, None), None);
    }

    #[test]
    fn test_empty_leaf_is_absent() {
        let t = tree(json!({"a": {"b": ""}}));
        assert_eq!(KeyResolver::resolve(&"a.b".into(), &t, None), None);
    }

    #[test]
    fn test_fallback_single_hop() {
        let primary = KeyTree::empty();
        let fb = tree(json!({"a": {"b": "Y"}}));
        assert_eq!(
            KeyResolver::resolve(&"a.b".into(), &primary, Some(&fb)),
            Some("Y".to_string())
        );
        assert_eq!(
            KeyResolver::resolve(&"a.b".into(), &primary, Some(&KeyTree::empty())),
            None
        );
    }

    #[test]
    fn test_primary_wins_over_fallback() {
        let primary = tree(json!({"a": {"b": "P"}}));
        let fb = tree(json!({"a": {"b": "F"}}));
        assert_eq!(
            KeyResolver::resolve(&"a.b".into(), &primary, Some(&fb)),
            Some("P".to_string())
        );
    }

    #[test]
    fn test_path_list_join() {
        let t = tree(json!({"a": {"b": "X"}, "c": {"d": "Y"}}));
        assert_eq!(
            KeyResolver::resolve(&["a.b", "c.d"].into(), &t, None),
            Some("X Y".to_string())
        );
    }

    #[test]
    fn test_path_list_trims_elements() {
        let t = tree(json!({"a": {"b": "  X "}, "c": {"d": " Y"}}));
        assert_eq!(
            KeyResolver::resolve(&["a.b", "c.d"].into(), &t, None),
            Some("X Y".to_string())
        );
    }

    #[test]
    fn test_path_list_missing_element_keeps_separator() {
        let t = tree(json!({"a": {"b": "X"}}));
        assert_eq!(
            KeyResolver::resolve(&["a.b", "c.d"].into(), &t, None),
            Some("X ".to_string())
        );
    }

    #[test]
    fn test_path_list_elements_fall_back_independently() {
        let primary = tree(json!({"a": {"b": "X"}}));
        let fb = tree(json!({"c": {"d": "Y"}}));
        assert_eq!(
            KeyResolver::resolve(&["a.b", "c.d"].into(), &primary, Some(&fb)),
            Some("X Y".to_string())
        );
    }

    #[test]
    fn test_empty_path_list() {
        let t = tree(json!({}));
        assert_eq!(
            KeyResolver::resolve(&KeyPath::Joined(vec![]), &t, None),
            None
        );
    }
}
