use super::*;
use std::fs;
use tempfile::TempDir;

fn raw_with_source(dir: &Path) -> RawConfig {
    RawConfig {
        source_dir_backup: Some(dir.to_string_lossy().into_owned()),
        ..RawConfig::default()
    }
}

#[test]
fn test_defaults_applied_for_omitted_keys() {
    let tmp = TempDir::new().unwrap();
    let json = format!(
        r#"{{ "source_dir_backup": {} }}"#,
        serde_json::to_string(&tmp.path().to_string_lossy()).unwrap()
    );
    let raw: RawConfig = serde_json::from_str(&json).unwrap();
    let config = BackupConfig::from_raw(raw).unwrap();

    assert_eq!(config.source_dir, tmp.path());
    assert!(config.allowed_extensions.is_empty());
    assert_eq!(config.chunk_size, 10_485_760);
    assert_eq!(config.filename_prefix, None);
    assert_eq!(config.folder_name, None);
    assert!(!config.use_date_folder);
    assert_eq!(config.destination_dir, PathBuf::from("."));
}

#[test]
fn test_unknown_keys_ignored() {
    let raw: RawConfig = serde_json::from_str(r#"{ "comment": "nightly", "chunk_size": 4 }"#).unwrap();
    assert_eq!(raw.chunk_size, 4);
}

#[test]
fn test_missing_source_dir() {
    let result = BackupConfig::from_raw(RawConfig::default());
    assert!(matches!(result, Err(ConfigError::MissingSourceDir)));
}

#[test]
fn test_empty_source_dir_counts_as_missing() {
    let raw = RawConfig {
        source_dir_backup: Some(String::new()),
        ..RawConfig::default()
    };
    assert!(matches!(
        BackupConfig::from_raw(raw),
        Err(ConfigError::MissingSourceDir)
    ));
}

#[test]
fn test_nonexistent_source_dir() {
    let tmp = TempDir::new().unwrap();
    let raw = raw_with_source(&tmp.path().join("gone"));
    let err = BackupConfig::from_raw(raw).unwrap_err();
    assert!(matches!(err, ConfigError::SourceDirNotFound(_)));
    assert!(err.to_string().contains("does not exist"));
}

#[test]
fn test_zero_chunk_size_rejected() {
    let tmp = TempDir::new().unwrap();
    let raw = RawConfig {
        chunk_size: 0,
        ..raw_with_source(tmp.path())
    };
    assert!(matches!(
        BackupConfig::from_raw(raw),
        Err(ConfigError::InvalidChunkSize(0))
    ));
}

#[test]
fn test_negative_chunk_size_rejected() {
    let tmp = TempDir::new().unwrap();
    let raw = RawConfig {
        chunk_size: -5,
        ..raw_with_source(tmp.path())
    };
    assert!(matches!(
        BackupConfig::from_raw(raw),
        Err(ConfigError::InvalidChunkSize(-5))
    ));
}

#[test]
fn test_fractional_chunk_size_is_parse_error() {
    let tmp = TempDir::new().unwrap();
    let config_path = tmp.path().join("config.json");
    fs::write(&config_path, r#"{ "source_dir_backup": ".", "chunk_size": 1.5 }"#).unwrap();

    let result = load_config(&config_path);
    assert!(matches!(result, Err(ConfigError::Parse { .. })));
}

#[test]
fn test_empty_overrides_are_unset() {
    let tmp = TempDir::new().unwrap();
    let raw = RawConfig {
        filename_prefix: String::new(),
        folder_name: String::new(),
        ..raw_with_source(tmp.path())
    };
    let config = BackupConfig::from_raw(raw).unwrap();
    assert!(config.filename_prefix.is_none());
    assert!(config.folder_name.is_none());
}

#[test]
fn test_overrides_are_sanitized() {
    let tmp = TempDir::new().unwrap();
    let raw = RawConfig {
        filename_prefix: "daily".to_string(),
        folder_name: "./backups".to_string(),
        ..raw_with_source(tmp.path())
    };
    let config = BackupConfig::from_raw(raw).unwrap();
    assert_eq!(config.filename_prefix.as_deref(), Some("daily"));
    assert_eq!(config.folder_name, Some(PathBuf::from("backups")));
}

#[test]
fn test_traversing_folder_name_rejected() {
    let tmp = TempDir::new().unwrap();
    let raw = RawConfig {
        folder_name: "../outside".to_string(),
        ..raw_with_source(tmp.path())
    };
    let err = BackupConfig::from_raw(raw).unwrap_err();
    assert!(err.to_string().contains("folder_name"));
}

#[test]
fn test_load_config_missing_file() {
    let tmp = TempDir::new().unwrap();
    let result = load_config(tmp.path().join("config.json"));
    assert!(matches!(result, Err(ConfigError::Read { .. })));
}

#[test]
fn test_load_config_malformed_json() {
    let tmp = TempDir::new().unwrap();
    let config_path = tmp.path().join("config.json");
    fs::write(&config_path, "{ not json").unwrap();

    let err = load_config(&config_path).unwrap_err();
    assert!(err.to_string().contains("Failed to parse config file"));
}

#[test]
fn test_load_config_full_document() {
    let tmp = TempDir::new().unwrap();
    let source = tmp.path().join("src");
    fs::create_dir(&source).unwrap();
    let config_path = tmp.path().join("config.json");
    let doc = serde_json::json!({
        "source_dir_backup": source,
        "allowed_extensions": [".log", ".csv"],
        "chunk_size": 1024,
        "filename_prefix": "daily",
        "folder_name": "backups",
        "use_current_date_as_folder": true,
        "destination_dir_backup": tmp.path().join("out"),
    });
    fs::write(&config_path, doc.to_string()).unwrap();

    let config = load_config(&config_path).unwrap();
    assert_eq!(config.source_dir, source);
    assert_eq!(config.allowed_extensions, vec![".log", ".csv"]);
    assert_eq!(config.chunk_size, 1024);
    assert_eq!(config.filename_prefix.as_deref(), Some("daily"));
    assert_eq!(config.folder_name, Some(PathBuf::from("backups")));
    assert!(config.use_date_folder);
    assert_eq!(config.destination_dir, tmp.path().join("out"));
}
