//! Tests for TOML config loading, creation, and path resolution.

use super::*;
use std::path::Path;

#[test]
fn load_from_nonexistent_returns_parse_error() {
    let result = load_from_path(Path::new("/tmp/nonexistent_lovewall_config.toml"));
    assert!(matches!(
        result,
        Err(lovewall_common::ConfigError::ParseError(_))
    ));
}

#[test]
fn load_valid_partial_toml() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r##"
[wall]
palette = ["#ff0000", "#00ff00"]
drag_offset = 5.0

[location]
partner_offset_lat = 0.001
"##,
    )
    .unwrap();

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.wall.palette, vec!["#ff0000", "#00ff00"]);
    assert_eq!(config.wall.drag_offset, 5.0);
    assert_eq!(config.location.partner_offset_lat, 0.001);
    // Defaults preserved
    assert_eq!(config.location.partner_offset_lng, -0.0005);
    assert_eq!(config.session.default_user, "u1");
}

#[test]
fn load_custom_roster() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r#"
[session]
default_user = "a"

[[session.members]]
id = "a"
name = "Ana"

[[session.members]]
id = "b"
name = "Ben"
avatar = "https://example.com/ben.png"
"#,
    )
    .unwrap();

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.session.members.len(), 2);
    assert_eq!(config.session.members[0].avatar, "");
    assert_eq!(config.session.members[1].avatar, "https://example.com/ben.png");
}

#[test]
fn load_invalid_toml_returns_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "this is not valid toml {{{").unwrap();

    let result = load_from_path(&path);
    assert!(matches!(
        result,
        Err(lovewall_common::ConfigError::ParseError(_))
    ));
}

#[test]
fn create_and_load_default_config() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("lovewall").join("config.toml");

    create_default_config(&path).unwrap();
    assert!(path.exists());

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.ai.text_model, "gemini-3-flash-preview");
    assert_eq!(config.session.members.len(), 7);
}

#[test]
fn default_config_toml_is_valid() {
    use super::template::default_config_toml;
    use crate::schema::LoveWallConfig;

    let config: LoveWallConfig = toml::from_str(&default_config_toml()).unwrap();
    assert!(crate::validation::validate(&config).is_ok());
}

#[test]
fn default_config_path_is_reasonable() {
    if std::env::var_os(super::paths::CONFIG_PATH_ENV).is_some() {
        return;
    }
    if let Ok(path) = default_config_path() {
        let path_str = path.to_string_lossy();
        assert!(path_str.contains("lovewall"));
        assert!(path_str.ends_with("config.toml"));
    }
}
