//! Tests for the shadowguard configuration system.

use std::path::PathBuf;
use std::sync::Mutex;

use shadowguard_core::config::{CliOverrides, ShadowguardConfig};
use shadowguard_core::constants::DEFAULT_MANUAL_EXCLUDES;
use shadowguard_core::errors::ConfigError;

/// Global mutex to serialize tests that modify environment variables.
static ENV_MUTEX: Mutex<()> = Mutex::new(());

fn tempdir() -> tempfile::TempDir {
    tempfile::TempDir::new().unwrap()
}

/// Clear all SHADOWGUARD_ env vars to prevent cross-test contamination.
fn clear_env_vars() {
    for key in [
        "SHADOWGUARD_MAIN_ROOT",
        "SHADOWGUARD_CLEAN_ROOT",
        "SHADOWGUARD_EXTENSION",
        "SHADOWGUARD_MODE",
        "SHADOWGUARD_OUTPUT",
        "SHADOWGUARD_REPORT_MAX",
    ] {
        std::env::remove_var(key);
    }
}

#[test]
fn test_layer_resolution_cli_over_env_over_project() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_env_vars();

    let dir = tempdir();
    std::fs::write(
        dir.path().join("shadowguard.toml"),
        r#"
[policy]
mode = "stereotype"

[report]
max_entries = 10

[scan]
extension = "kt"
"#,
    )
    .unwrap();

    std::env::set_var("SHADOWGUARD_MODE", "all:warn");
    std::env::set_var("SHADOWGUARD_REPORT_MAX", "20");

    let cli = CliOverrides {
        report_max_entries: Some(30),
        ..Default::default()
    };
    let config = ShadowguardConfig::load(dir.path(), Some(&cli)).unwrap();

    // CLI beats env for max_entries
    assert_eq!(config.report.effective_max_entries(), 30);
    // Env beats project for mode
    assert_eq!(config.policy.mode.as_deref(), Some("all:warn"));
    // Project beats defaults for extension
    assert_eq!(config.scan.effective_extension(), "kt");

    clear_env_vars();
}

#[test]
fn test_defaults_without_project_file() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_env_vars();

    let dir = tempdir();
    let config = ShadowguardConfig::load(dir.path(), None).unwrap();

    assert_eq!(config.scan.effective_extension(), "java");
    assert_eq!(
        config.scan.effective_main_root(dir.path()),
        dir.path().join("main/java")
    );
    assert_eq!(
        config.scan.effective_clean_root(dir.path()),
        dir.path().join("app/src/main/java_clean")
    );
    assert_eq!(
        config.output.effective_path(dir.path()),
        dir.path().join("build/generated/dup-fqcn-excludes.txt")
    );
    assert_eq!(config.report.effective_max_entries(), 200);
    assert!(config.policy.mode.is_none());
    assert_eq!(
        config.exclusions.effective_manual().len(),
        DEFAULT_MANUAL_EXCLUDES.len()
    );
}

#[test]
fn test_empty_env_value_is_unset() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_env_vars();

    let dir = tempdir();
    std::env::set_var("SHADOWGUARD_MODE", "   ");
    let config = ShadowguardConfig::load(dir.path(), None).unwrap();
    assert!(config.policy.mode.is_none());

    clear_env_vars();
}

#[test]
fn test_absolute_paths_are_not_rebased() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_env_vars();

    let dir = tempdir();
    let other = tempdir();
    let cli = CliOverrides {
        main_root: Some(other.path().to_path_buf()),
        clean_root: Some(PathBuf::from("legacy")),
        ..Default::default()
    };
    let config = ShadowguardConfig::load(dir.path(), Some(&cli)).unwrap();

    assert_eq!(
        config.scan.effective_main_root(dir.path()),
        other.path().to_path_buf()
    );
    assert_eq!(
        config.scan.effective_clean_root(dir.path()),
        dir.path().join("legacy")
    );
}

#[test]
fn test_manual_list_replaces_builtin() {
    let config = ShadowguardConfig::from_toml(
        r#"
[exclusions]
manual = ["com/acme/Legacy*"]
"#,
    )
    .unwrap();
    assert_eq!(config.exclusions.effective_manual(), vec!["com/acme/Legacy*"]);

    let empty = ShadowguardConfig::from_toml("[exclusions]\nmanual = []\n").unwrap();
    assert!(empty.exclusions.effective_manual().is_empty());
}

#[test]
fn test_invalid_toml_syntax() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_env_vars();

    let dir = tempdir();
    std::fs::write(dir.path().join("shadowguard.toml"), "not valid toml {{{{").unwrap();

    match ShadowguardConfig::load(dir.path(), None).unwrap_err() {
        ConfigError::ParseError { .. } => {}
        other => panic!("Expected ParseError, got: {:?}", other),
    }
}

#[test]
fn test_validation_rejects_bad_values() {
    let dotted = ShadowguardConfig::from_toml("[scan]\nextension = \".java\"\n").unwrap();
    match ShadowguardConfig::validate(&dotted).unwrap_err() {
        ConfigError::ValidationFailed { field, .. } => assert_eq!(field, "scan.extension"),
        other => panic!("Expected ValidationFailed, got: {:?}", other),
    }

    let zero = ShadowguardConfig::from_toml("[report]\nmax_entries = 0\n").unwrap();
    match ShadowguardConfig::validate(&zero).unwrap_err() {
        ConfigError::ValidationFailed { field, .. } => assert_eq!(field, "report.max_entries"),
        other => panic!("Expected ValidationFailed, got: {:?}", other),
    }
}

#[test]
fn test_unrecognized_keys_accepted() {
    let config = ShadowguardConfig::from_toml(
        r#"
[scan]
extension = "java"
future_unknown_key = "hello"

[future_section]
another_key = 42
"#,
    );
    assert!(config.is_ok());
}

#[test]
fn test_toml_round_trip_keeps_mode() {
    let config = ShadowguardConfig::from_toml("[policy]\nmode = \"stereotype:fail\"\n").unwrap();
    let rendered = config.to_toml().unwrap();
    let reparsed = ShadowguardConfig::from_toml(&rendered).unwrap();
    assert_eq!(reparsed.policy.mode.as_deref(), Some("stereotype:fail"));
}
