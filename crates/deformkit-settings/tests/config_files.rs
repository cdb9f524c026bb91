//! Loading and saving deformer configs on disk.

use deformkit_settings::{DeformerConfig, SettingsError};
use tempfile::TempDir;

fn customised() -> DeformerConfig {
    let mut config = DeformerConfig::touch();
    config.handle_radius = 9.5;
    config.rotation_handle_distance = 42.0;
    config.z_index.vertex = 40;
    config.cursors.rotate = "alias".to_string();
    config
}

#[test]
fn test_json_save_and_load() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("deformer.json");

    customised().save(&path).expect("Failed to save config");
    let loaded = DeformerConfig::load(&path).expect("Failed to load config");

    assert_eq!(loaded, customised());
}

#[test]
fn test_toml_save_and_load() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("deformer.toml");

    customised().save(&path).expect("Failed to save config");
    let content = std::fs::read_to_string(&path).unwrap();
    assert!(content.contains("touch_primary = true"));

    let loaded = DeformerConfig::load(&path).expect("Failed to load config");
    assert_eq!(loaded, customised());
}

#[test]
fn test_unknown_extension_is_rejected() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("deformer.yaml");

    let err = DeformerConfig::default().save(&path).unwrap_err();
    assert!(matches!(err, SettingsError::UnsupportedFormat(ref ext) if ext == "yaml"));
    assert!(!path.exists());
}

#[test]
fn test_invalid_file_content() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");

    let json = temp_dir.path().join("broken.json");
    std::fs::write(&json, "{ not json").unwrap();
    assert!(matches!(
        DeformerConfig::load(&json),
        Err(SettingsError::Json(_))
    ));

    let toml = temp_dir.path().join("broken.toml");
    std::fs::write(&toml, "handle_radius = [").unwrap();
    assert!(matches!(
        DeformerConfig::load(&toml),
        Err(SettingsError::TomlDe(_))
    ));
}

#[test]
fn test_loaded_values_are_validated() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("zero.toml");
    std::fs::write(&path, "handle_radius = 0.0\n").unwrap();

    assert!(matches!(
        DeformerConfig::load(&path),
        Err(SettingsError::InvalidSetting { .. })
    ));
}

#[test]
fn test_missing_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("absent.json");
    assert!(matches!(
        DeformerConfig::load(&path),
        Err(SettingsError::Io(_))
    ));
}
