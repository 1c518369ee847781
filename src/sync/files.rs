//! Catalog file I/O
//!
//! Thin JSON loading and persistence around the engine. Target files are
//! written atomically through a temp file in the same directory so a crashed
//! pass never leaves a half-written translation file behind.

use crate::core::{KeyTree, Result, SyncError};
use serde::Serialize;
use serde_json::Value;
use std::fs;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

fn read_json(path: &Path) -> Result<Value> {
    let text = fs::read_to_string(path)?;
    serde_json::from_str(&text).map_err(|source| SyncError::ParseError {
        path: path.to_path_buf(),
        source,
    })
}

/// Load a source catalog as a hierarchical key tree.
pub fn load_tree(path: &Path) -> Result<KeyTree> {
    Ok(KeyTree::from_value(&read_json(path)?))
}

/// Load a previously persisted output document, or an empty object when the
/// file does not exist yet. An existing file that is not a JSON object is
/// refused rather than silently replaced, since saving over it would destroy
/// whatever it holds.
pub fn load_output(path: &Path) -> Result<Value> {
    if !path.is_file() {
        return Ok(Value::Object(serde_json::Map::new()));
    }
    let value = read_json(path)?;
    if !value.is_object() {
        return Err(SyncError::PersistError {
            path: path.to_path_buf(),
            reason: "existing target file is not a JSON object".to_string(),
        });
    }
    Ok(value)
}

/// Persist the output document with 4-space indentation, atomically.
pub fn save_output(path: &Path, output: &Value) -> Result<()> {
    let parent = path.parent().unwrap_or_else(|| Path::new("."));
    fs::create_dir_all(parent)?;

    let mut file = NamedTempFile::new_in(parent)?;
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut file, formatter);
    output
        .serialize(&mut serializer)
        .map_err(|e| SyncError::SerializeError(e.to_string()))?;
    file.write_all(b"\n")?;

    file.persist(path).map_err(|e| SyncError::PersistError {
        path: path.to_path_buf(),
        reason: e.error.to_string(),
    })?;
    Ok(())
}
