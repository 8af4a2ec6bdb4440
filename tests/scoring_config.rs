// tests/scoring_config.rs
//
// Config resolution: file → env overrides → validation.
// Env-mutating tests are serialized; each uses its own temp dir.

use mineral_awareness::config::scoring::{
    ENV_ALIGNMENT_FLOOR, ENV_HIGH_THRESHOLD, ENV_MODERATE_THRESHOLD, ENV_SCORING_CONFIG_PATH,
    ENV_TOP_N,
};
use mineral_awareness::{ScoringConfig, ScoringHandle, Thresholds};
use std::{env, fs};

fn clear_env() {
    for k in [
        ENV_SCORING_CONFIG_PATH,
        ENV_HIGH_THRESHOLD,
        ENV_MODERATE_THRESHOLD,
        ENV_ALIGNMENT_FLOOR,
        ENV_TOP_N,
    ] {
        env::remove_var(k);
    }
}

#[test]
fn shipped_config_file_matches_builtin_defaults() {
    let cfg = ScoringConfig::load_from_file("config/scoring.toml").expect("load shipped config");
    assert_eq!(cfg.thresholds, Thresholds::default());
}

#[test]
fn load_from_missing_file_names_the_path() {
    let err = ScoringConfig::load_from_file("does/not/exist.toml")
        .unwrap_err()
        .to_string();
    assert!(err.contains("does/not/exist.toml"), "{err}");
}

#[serial_test::serial]
#[test]
fn default_path_resolves_without_env() {
    clear_env();
    let cfg = ScoringConfig::from_env().expect("shipped config");
    assert_eq!(cfg, ScoringConfig::default());
}

#[serial_test::serial]
#[test]
fn explicit_missing_path_is_an_error() {
    clear_env();
    let tmp = tempfile::tempdir().unwrap();
    let missing = tmp.path().join("nope.toml");
    env::set_var(ENV_SCORING_CONFIG_PATH, missing.display().to_string());

    let err = ScoringConfig::from_env().unwrap_err().to_string();
    assert!(err.contains("Failed to read scoring config"), "{err}");
    assert!(err.contains("nope.toml"), "{err}");
    clear_env();
}

#[serial_test::serial]
#[test]
fn file_then_env_overrides() {
    clear_env();
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join("scoring.toml");
    fs::write(
        &path,
        r#"
[thresholds]
high = 14
moderate = 8
"#,
    )
    .unwrap();
    env::set_var(ENV_SCORING_CONFIG_PATH, path.display().to_string());

    // 1) File only
    let cfg = ScoringConfig::from_env().unwrap();
    assert_eq!(cfg.thresholds.high, 14);
    assert_eq!(cfg.thresholds.moderate, 8);
    assert_eq!(cfg.thresholds.top_n, 3);

    // 2) Env wins over file
    env::set_var(ENV_TOP_N, "5");
    env::set_var(ENV_ALIGNMENT_FLOOR, " 4 ");
    let cfg = ScoringConfig::from_env().unwrap();
    assert_eq!(cfg.thresholds.top_n, 5);
    assert_eq!(cfg.thresholds.alignment_floor, 4);
    assert_eq!(cfg.thresholds.high, 14);

    // 3) Garbage env is ignored
    env::set_var(ENV_HIGH_THRESHOLD, "lots");
    let cfg = ScoringConfig::from_env().unwrap();
    assert_eq!(cfg.thresholds.high, 14);

    clear_env();
}

#[serial_test::serial]
#[test]
fn env_override_that_breaks_ordering_is_an_error() {
    clear_env();
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join("scoring.toml");
    fs::write(&path, "[thresholds]\nhigh = 12\n").unwrap();
    env::set_var(ENV_SCORING_CONFIG_PATH, path.display().to_string());
    env::set_var(ENV_MODERATE_THRESHOLD, "20");

    let err = ScoringConfig::from_env().unwrap_err().to_string();
    assert!(err.contains("must not exceed"), "{err}");
    clear_env();
}

#[serial_test::serial]
#[test]
fn invalid_file_is_an_error() {
    clear_env();
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join("scoring.toml");
    fs::write(&path, "[thresholds]\nhigh = \"twelve\"\n").unwrap();
    env::set_var(ENV_SCORING_CONFIG_PATH, path.display().to_string());

    let err = ScoringConfig::from_env().unwrap_err().to_string();
    assert!(err.contains("Invalid scoring config"), "{err}");
    clear_env();
}

#[serial_test::serial]
#[test]
fn handle_reload_swaps_and_keeps_old_on_error() {
    clear_env();
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join("scoring.toml");
    env::set_var(ENV_SCORING_CONFIG_PATH, path.display().to_string());

    let handle = ScoringHandle::default();

    fs::write(&path, "[thresholds]\ntop_n = 2\n").unwrap();
    let fresh = handle.reload().expect("reload");
    assert_eq!(fresh.thresholds.top_n, 2);
    assert_eq!(handle.thresholds().top_n, 2);

    fs::write(&path, "[thresholds]\ntop_n = 0\n").unwrap();
    assert!(handle.reload().is_err());
    assert_eq!(handle.thresholds().top_n, 2, "failed reload must keep previous config");

    fs::remove_file(&path).unwrap();
    assert!(handle.reload().is_err(), "deleted config must not reset to defaults");
    assert_eq!(handle.thresholds().top_n, 2);

    clear_env();
}
