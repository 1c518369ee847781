//! EntityMerger
//!
//! Applies resolved scalars and extracted key sets into the entity-indexed
//! output tree: `category -> entity_id -> {"state": {code -> string}, "name"}`.
//! The output document is round-tripped across passes, so merging never
//! deletes keys it does not own: intermediate containers are created on
//! demand and a failed resolution leaves any previously persisted value
//! untouched. The one deliberate exception is [`EntityMerger::merge_key_set`],
//! which replaces the whole `state` subtree of its entity because the
//! extracted set is authoritative each pass.

use crate::core::KeyTree;
use crate::resolver::{KeyPath, KeyResolver, KeySetExtractor, ResolutionTable};
use serde_json::{Map, Value};

pub struct EntityMerger;

impl EntityMerger {
    /// Resolve every `(code, path)` in `table` and write the hits under the
    /// entity's `state` map. Misses make no write at all, so a manually
    /// curated or previously resolved value survives a pass where the source
    /// catalog lacks the key. Returns the number of codes written.
    pub fn merge_codes(
        output: &mut Value,
        category: &str,
        entity_id: &str,
        table: &ResolutionTable,
        primary: &KeyTree,
        fallback: Option<&KeyTree>,
    ) -> usize {
        let mut written = 0;
        for (code, path) in table {
            let Some(resolved) = KeyResolver::resolve(path, primary, fallback) else {
                continue;
            };
            let Some(state) = state_map(output, category, entity_id) else {
                continue;
            };
            state.insert(code.clone(), Value::String(resolved));
            written += 1;
        }
        written
    }

    /// Extract the filtered key set at `two_segment_path` and assign it
    /// wholesale as the entity's `state` map. Codes present only in a prior
    /// run and absent from the fresh extraction are dropped. Returns the
    /// size of the assigned set.
    pub fn merge_key_set(
        output: &mut Value,
        category: &str,
        entity_id: &str,
        two_segment_path: &str,
        tree: &KeyTree,
    ) -> usize {
        let set = KeySetExtractor::extract(two_segment_path, tree);
        let count = set.len();
        let Some(entity) = entity_map(output, category, entity_id) else {
            return 0;
        };
        let state: Map<String, Value> = set
            .into_iter()
            .map(|(k, v)| (k, Value::String(v)))
            .collect();
        entity.insert("state".to_string(), Value::Object(state));
        count
    }

    /// Resolve a display name and write it as the entity's `name`. Same
    /// preserve-on-miss policy as [`EntityMerger::merge_codes`]. Returns
    /// whether a write happened.
    pub fn merge_name(
        output: &mut Value,
        category: &str,
        entity_id: &str,
        path: &KeyPath,
        primary: &KeyTree,
        fallback: Option<&KeyTree>,
    ) -> bool {
        let Some(resolved) = KeyResolver::resolve(path, primary, fallback) else {
            return false;
        };
        let Some(entity) = entity_map(output, category, entity_id) else {
            return false;
        };
        entity.insert("name".to_string(), Value::String(resolved));
        true
    }
}

/// Descend to (or create) the object at `map[key]`. Returns `None` when a
/// pre-existing value at that key is not an object; the caller skips the
/// write rather than clobbering foreign data.
fn object_entry<'a>(map: &'a mut Map<String, Value>, key: &str) -> Option<&'a mut Map<String, Value>> {
    map.entry(key)
        .or_insert_with(|| Value::Object(Map::new()))
        .as_object_mut()
}

fn entity_map<'a>(
    output: &'a mut Value,
    category: &str,
    entity_id: &str,
) -> Option<&'a mut Map<String, Value>> {
    let root = output.as_object_mut()?;
    let category_map = object_entry(root, category)?;
    object_entry(category_map, entity_id)
}

fn state_map<'a>(
    output: &'a mut Value,
    category: &str,
    entity_id: &str,
) -> Option<&'a mut Map<String, Value>> {
    let entity = entity_map(output, category, entity_id)?;
    object_entry(entity, "state")
}
