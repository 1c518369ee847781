use locale_sync::core::SyncError;
use locale_sync::sync::{self, load_output};
use locale_sync::SyncConfig;
use serde_json::json;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn write_json(path: &Path, value: &serde_json::Value) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, serde_json::to_string_pretty(value).unwrap()).unwrap();
}

fn catalog() -> serde_json::Value {
    json!({
        "WASHING_CMD&CTRL": {
            "PHASE_READY": {"TITLE": "Ready"},
            "PHASE_PAUSE": {"TITLE": "Pause"},
            "PHASE_WASHING": {"TITLE": "Washing"}
        },
        "GLOBALS": {"APPLIANCES_NAME": {"WM": "Washing machine"}},
        "PROGRAMS": {"WM_WD": {"COTTON": "Cotton", "IOM_RECIPE_X": "hidden"}}
    })
}

#[test]
fn test_locale_pass_writes_target_file() {
    let dirs = TempDir::new().unwrap();
    let source = dirs.path().join("source");
    let target = dirs.path().join("target");
    write_json(&source.join("de.json"), &catalog());

    let config = SyncConfig::new(&source, &target).locales(["de"]);
    let stats = sync::run_locale_pass("de", &config, None).unwrap();
    assert!(stats.codes_written > 0);
    assert!(stats.names_written > 0);

    let output = load_output(&target.join("de.json")).unwrap();
    assert_eq!(output["entity"]["sensor"]["washing_modes"]["state"]["0"], "Ready");
    assert_eq!(output["entity"]["sensor"]["washing_modes"]["state"]["3"], "Pause");
    assert_eq!(output["entity"]["switch"]["washing_machine"]["name"], "Washing machine");
    assert_eq!(
        output["entity"]["select"]["programs_wm"]["state"],
        json!({"cotton": "Cotton"})
    );
}

#[test]
fn test_prior_output_survives_across_passes() {
    let dirs = TempDir::new().unwrap();
    let source = dirs.path().join("source");
    let target = dirs.path().join("target");
    write_json(&source.join("de.json"), &catalog());
    write_json(
        &target.join("de.json"),
        &json!({
            "config": {"step": {"user": {"title": "Setup"}}},
            "entity": {
                "sensor": {
                    "washing_modes": {"state": {"6": "Manually curated"}},
                    "custom_field": {"name": "Keep me"}
                }
            }
        }),
    );

    let config = SyncConfig::new(&source, &target).locales(["de"]);
    sync::run_locale_pass("de", &config, None).unwrap();

    let output = load_output(&target.join("de.json")).unwrap();
    // Foreign top-level sections and untouched entities survive.
    assert_eq!(output["config"]["step"]["user"]["title"], "Setup");
    assert_eq!(output["entity"]["sensor"]["custom_field"]["name"], "Keep me");
    // Code 6 has no source key in this catalog: the curated value stays.
    assert_eq!(
        output["entity"]["sensor"]["washing_modes"]["state"]["6"],
        "Manually curated"
    );
    // Resolved codes are refreshed.
    assert_eq!(output["entity"]["sensor"]["washing_modes"]["state"]["0"], "Ready");
}

#[test]
fn test_fallback_locale_fills_gaps() {
    let dirs = TempDir::new().unwrap();
    let source = dirs.path().join("source");
    let target = dirs.path().join("target");
    // The primary catalog lacks the pause phase; English supplies it.
    write_json(
        &source.join("sl.json"),
        &json!({"WASHING_CMD&CTRL": {"PHASE_READY": {"TITLE": "Pripravljen"}}}),
    );
    write_json(&source.join("en.json"), &catalog());

    let config = SyncConfig::new(&source, &target).locales(["sl"]);
    sync::run(&config).unwrap();

    let output = load_output(&target.join("sl.json")).unwrap();
    assert_eq!(
        output["entity"]["sensor"]["washing_modes"]["state"]["0"],
        "Pripravljen"
    );
    assert_eq!(output["entity"]["sensor"]["washing_modes"]["state"]["3"], "Pause");
}

#[test]
fn test_missing_source_catalog_is_reported() {
    let dirs = TempDir::new().unwrap();
    let config = SyncConfig::new(dirs.path().join("nope"), dirs.path().join("target"));
    let err = sync::run_locale_pass("de", &config, None).unwrap_err();
    assert!(matches!(err, SyncError::MissingCatalog(l) if l == "de"));
}

#[test]
fn test_run_skips_missing_locales() {
    let dirs = TempDir::new().unwrap();
    let source = dirs.path().join("source");
    let target = dirs.path().join("target");
    write_json(&source.join("en.json"), &catalog());

    // "fr" has no catalog; the run still completes and syncs "en".
    let config = SyncConfig::new(&source, &target).locales(["en", "fr"]);
    sync::run(&config).unwrap();

    assert!(target.join("en.json").is_file());
    assert!(!target.join("fr.json").exists());
}

#[test]
fn test_pass_is_stable_when_rerun() {
    let dirs = TempDir::new().unwrap();
    let source = dirs.path().join("source");
    let target = dirs.path().join("target");
    write_json(&source.join("en.json"), &catalog());

    let config = SyncConfig::new(&source, &target).locales(["en"]);
    sync::run(&config).unwrap();
    let first = fs::read_to_string(target.join("en.json")).unwrap();
    sync::run(&config).unwrap();
    let second = fs::read_to_string(target.join("en.json")).unwrap();
    assert_eq!(first, second);
}
