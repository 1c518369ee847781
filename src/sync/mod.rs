//! Synchronization driver
//!
//! Orchestrates one resolution pass per locale: load the locale's source
//! catalog, the fixed fallback catalog, and the previously persisted output
//! document; feed the static resolution tables through the engine in a fixed
//! order; persist the merged result. The engine itself is silent on misses
//! (missing locale data is common, not exceptional); the driver reports
//! per-field counts at debug level and a per-locale summary at info.

mod files;

pub use files::{load_output, load_tree, save_output};

use crate::core::{KeyTree, Result, SyncError};
use crate::merger::EntityMerger;
use crate::tables;
use serde_json::Value;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Officially supported locales of the source catalog service.
pub const SUPPORTED_LOCALES: [&str; 19] = [
    "cs", // Czech
    "de", // German
    "el", // Greek
    "en", // English
    "es", // Spanish
    "fr", // French
    "he", // Hebrew
    "hr", // Croatian
    "it", // Italian
    "nl", // Dutch
    "pl", // Polish
    "pt", // Portuguese
    "ro", // Romanian
    "ru", // Russian
    "sk", // Slovak
    "sl", // Slovenian
    "sr", // Serbian
    "tr", // Turkish
    "zh", // Chinese
];

/// Top-level envelope of the output document under which all categories live.
const ENTITY_ROOT: &str = "entity";

#[derive(Debug, Clone)]
pub struct SyncConfig {
    pub source_dir: PathBuf,
    pub target_dir: PathBuf,
    pub fallback_locale: String,
    pub locales: Vec<String>,
}

impl SyncConfig {
    pub fn new(source_dir: impl Into<PathBuf>, target_dir: impl Into<PathBuf>) -> Self {
        Self {
            source_dir: source_dir.into(),
            target_dir: target_dir.into(),
            fallback_locale: "en".to_string(),
            locales: SUPPORTED_LOCALES.iter().map(|l| l.to_string()).collect(),
        }
    }

    pub fn fallback_locale(mut self, locale: impl Into<String>) -> Self {
        self.fallback_locale = locale.into();
        self
    }

    pub fn locales<I, S>(mut self, locales: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.locales = locales.into_iter().map(Into::into).collect();
        self
    }
}

/// Counters for one locale pass, for reporting only.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PassStats {
    pub codes_written: usize,
    pub sets_assigned: usize,
    pub names_written: usize,
}

/// Run one pass for every configured locale.
pub fn run(config: &SyncConfig) -> Result<()> {
    let fallback = load_fallback(config);
    for locale in &config.locales {
        match run_locale_pass(locale, config, fallback.as_ref()) {
            Ok(stats) => info!(
                locale = %locale,
                codes = stats.codes_written,
                sets = stats.sets_assigned,
                names = stats.names_written,
                "locale synchronized"
            ),
            Err(SyncError::MissingCatalog(l)) => {
                warn!(locale = %l, "no source catalog, skipping");
            }
            Err(e) => return Err(e),
        }
    }
    Ok(())
}

/// Run a single locale pass and persist the merged output document.
pub fn run_locale_pass(
    locale: &str,
    config: &SyncConfig,
    fallback: Option<&KeyTree>,
) -> Result<PassStats> {
    let source = catalog_path(&config.source_dir, locale);
    if !source.is_file() {
        return Err(SyncError::MissingCatalog(locale.to_string()));
    }
    let primary = load_tree(&source)?;

    let target = catalog_path(&config.target_dir, locale);
    let mut output = load_output(&target)?;

    let stats = apply_tables(&mut output, &primary, fallback);

    save_output(&target, &output)?;
    Ok(stats)
}

/// Apply all configured resolution tables to one output document, in fixed
/// order: sensor code tables, select code tables, program key-set replaces,
/// then name assignments. Order matters when several tables target the same
/// entity, since the key-set replace overwrites the whole `state` subtree.
pub fn apply_tables(output: &mut Value, primary: &KeyTree, fallback: Option<&KeyTree>) -> PassStats {
    let mut stats = PassStats::default();

    let Some(root) = output.as_object_mut() else {
        return stats;
    };
    let envelope = root
        .entry(ENTITY_ROOT)
        .or_insert_with(|| Value::Object(serde_json::Map::new()));
    if !envelope.is_object() {
        return stats;
    }
    let entity = envelope;

    for (field, table) in tables::sensor_code_tables() {
        let written = EntityMerger::merge_codes(entity, "sensor", field, &table, primary, fallback);
        debug!(field, written, total = table.len(), "sensor codes merged");
        stats.codes_written += written;
    }

    for (field, table) in tables::select_code_tables() {
        let written = EntityMerger::merge_codes(entity, "select", field, &table, primary, fallback);
        debug!(field, written, total = table.len(), "select codes merged");
        stats.codes_written += written;
    }

    for (field, path) in tables::program_key_sets() {
        let count = EntityMerger::merge_key_set(entity, "select", field, path, primary);
        debug!(field, count, "program key set assigned");
        stats.sets_assigned += 1;
        stats.codes_written += count;
    }

    for (category, fields) in tables::entity_name_paths() {
        for (field, path) in fields {
            if EntityMerger::merge_name(entity, category, field, &path, primary, fallback) {
                stats.names_written += 1;
            } else {
                debug!(category, field, "name unresolved, existing value kept");
            }
        }
    }

    stats
}

fn load_fallback(config: &SyncConfig) -> Option<KeyTree> {
    let path = catalog_path(&config.source_dir, &config.fallback_locale);
    match load_tree(&path) {
        Ok(tree) => Some(tree),
        Err(e) => {
            warn!(
                locale = %config.fallback_locale,
                error = %e,
                "fallback catalog unavailable, resolving without fallback"
            );
            None
        }
    }
}

fn catalog_path(dir: &Path, locale: &str) -> PathBuf {
    dir.join(format!("{locale}.json"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_apply_tables_writes_under_entity_envelope() {
        let mut output = json!({});
        let primary = KeyTree::from_value(&json!({
            "WASHING_CMD&CTRL": {"PHASE_READY": {"TITLE": "Ready"}}
        }));
        let stats = apply_tables(&mut output, &primary, None);
        assert!(stats.codes_written > 0);
        assert_eq!(
            output["entity"]["sensor"]["washing_modes"]["state"]["0"],
            "Ready"
        );
    }

    #[test]
    fn test_apply_tables_preserves_foreign_document_content() {
        let mut output = json!({
            "title": "Appliances",
            "entity": {"sensor": {"custom": {"name": "Mine"}}}
        });
        let primary = KeyTree::empty();
        apply_tables(&mut output, &primary, None);
        assert_eq!(output["title"], "Appliances");
        assert_eq!(output["entity"]["sensor"]["custom"]["name"], "Mine");
    }

    #[test]
    fn test_program_sets_replace_wholesale() {
        let mut output = json!({
            "entity": {"select": {"programs_wm": {"state": {"stale": "Gone"}}}}
        });
        let primary = KeyTree::from_value(&json!({
            "PROGRAMS": {"WM_WD": {"cotton": "Cotton", "IOM_DESCRIPTION": "x"}}
        }));
        apply_tables(&mut output, &primary, None);
        assert_eq!(
            output["entity"]["select"]["programs_wm"]["state"],
            json!({"cotton": "Cotton"})
        );
    }

    #[test]
    fn test_config_defaults() {
        let config = SyncConfig::new("/src", "/dst");
        assert_eq!(config.fallback_locale, "en");
        assert_eq!(config.locales.len(), SUPPORTED_LOCALES.len());
    }
}
