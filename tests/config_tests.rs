//! Integration tests for configuration management

use campus_records::config::{Config, ConfigOverrides};

#[test]
fn test_config_from_defaults() {
    let config = Config::from_defaults();

    // Should have non-empty defaults for critical fields
    assert!(
        !config.logging.level.is_empty(),
        "Default log level should not be empty"
    );
    assert!(
        !config.paths.data_dir.is_empty(),
        "Default data_dir should not be empty"
    );
    assert!(
        !config.paths.backup_dir.is_empty(),
        "Default backup_dir should not be empty"
    );
}

#[test]
fn test_config_from_toml_basic() {
    let toml_str = r#"
[logging]
level = "info"
file = "/tmp/test.log"
verbose = true

[paths]
data_dir = "./data"
backup_dir = "./backups"
"#;

    let config = Config::from_toml(toml_str).expect("Failed to parse TOML");

    assert_eq!(config.logging.level, "info");
    assert_eq!(config.logging.file, "/tmp/test.log");
    assert!(config.logging.verbose);
    assert_eq!(config.paths.data_dir, "./data");
    assert_eq!(config.paths.backup_dir, "./backups");
}

#[test]
fn test_config_from_toml_missing_fields_use_defaults() {
    let toml_str = r#"
[logging]
level = "warn"
"#;

    let config = Config::from_toml(toml_str).expect("Failed to parse TOML");

    assert_eq!(config.logging.level, "warn");
    assert!(config.logging.file.is_empty());
    assert!(!config.logging.verbose);
    assert!(config.paths.data_dir.is_empty());
}

#[test]
fn test_config_expands_campus_records_variable() {
    let toml_str = r#"
[logging]
level = "warn"

[paths]
data_dir = "$CAMPUS_RECORDS/data"
backup_dir = "plain/backups"
"#;

    let config = Config::from_toml(toml_str).expect("Failed to parse TOML");

    assert!(
        !config.paths.data_dir.contains("$CAMPUS_RECORDS"),
        "Variable should have been expanded, got '{}'",
        config.paths.data_dir
    );
    assert!(config.paths.data_dir.ends_with("data"));
    assert_eq!(config.paths.backup_dir, "plain/backups");
}

#[test]
fn test_merge_defaults_fills_empty_fields_only() {
    let mut config = Config::from_toml(
        r#"
[logging]
level = "error"
"#,
    )
    .expect("Failed to parse TOML");
    let defaults = Config::from_defaults();

    let changed = config.merge_defaults(&defaults);

    assert!(changed, "Empty fields should have been filled");
    assert_eq!(config.logging.level, "error", "Set field must be preserved");
    assert_eq!(config.paths.data_dir, defaults.paths.data_dir);
    assert_eq!(config.paths.backup_dir, defaults.paths.backup_dir);

    // A second merge has nothing left to do
    assert!(!config.merge_defaults(&defaults));
}

#[test]
fn test_apply_overrides() {
    let mut config = Config::from_defaults();

    let overrides = ConfigOverrides {
        level: Some("debug".to_string()),
        file: Some("/tmp/records.log".to_string()),
        verbose: Some(true),
        data_dir: Some("/srv/campus/data".to_string()),
        backup_dir: Some("/srv/campus/backups".to_string()),
    };
    config.apply_overrides(&overrides);

    assert_eq!(config.logging.level, "debug");
    assert_eq!(config.logging.file, "/tmp/records.log");
    assert!(config.logging.verbose);
    assert_eq!(config.paths.data_dir, "/srv/campus/data");
    assert_eq!(config.paths.backup_dir, "/srv/campus/backups");
}

#[test]
fn test_apply_overrides_none_means_no_change() {
    let mut config = Config::from_defaults();
    let original_level = config.logging.level.clone();

    config.apply_overrides(&ConfigOverrides::default());

    assert_eq!(config.logging.level, original_level);
}

#[test]
fn test_get_set_unset_roundtrip() {
    let mut config = Config::from_defaults();
    let defaults = Config::from_defaults();

    config.set("data_dir", "/custom/data").expect("set failed");
    assert_eq!(config.get("data_dir"), Some("/custom/data".to_string()));

    config.unset("data_dir", &defaults).expect("unset failed");
    assert_eq!(config.get("data_dir"), Some(defaults.paths.data_dir.clone()));

    // Hyphenated aliases work too
    config.set("backup-dir", "/b").expect("set failed");
    assert_eq!(config.get("backup-dir"), Some("/b".to_string()));
}

#[test]
fn test_every_documented_key_is_recognized() {
    // The key list shown in CLI messages must stay in step with the accessors
    let mut config = Config::from_defaults();
    let defaults = Config::from_defaults();

    for key in Config::KEYS {
        assert!(config.get(key).is_some(), "get must recognize '{key}'");
        let value = if key == "verbose" { "true" } else { "some-value" };
        assert!(config.set(key, value).is_ok(), "set must recognize '{key}'");
        assert!(
            config.unset(key, &defaults).is_ok(),
            "unset must recognize '{key}'"
        );
    }
}

#[test]
fn test_set_rejects_unknown_key_and_bad_bool() {
    let mut config = Config::from_defaults();

    assert!(config.set("no_such_key", "x").is_err());
    assert!(config.set("verbose", "maybe").is_err());
    assert!(config.set("verbose", "true").is_ok());
    assert!(config.logging.verbose);
}
