//! LoveWall configuration system.
//!
//! TOML-based configuration with full validation. Every section uses
//! serde defaults so partial configs work out of the box.

pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use schema::{LoveWallConfig, CONFIG_SCHEMA_VERSION};

use std::path::Path;

use lovewall_common::ConfigError;

/// Load config from the platform default path, or from `path` when given.
///
/// A missing default file is created from the template. An explicit path
/// must exist. The result is validated either way.
pub fn load_config(path: Option<&Path>) -> Result<LoveWallConfig, ConfigError> {
    let config = match path {
        Some(path) => {
            if !path.exists() {
                return Err(ConfigError::FileNotFound(path.to_path_buf()));
            }
            toml_loader::load_from_path(path)?
        }
        None => toml_loader::load_default()?,
    };

    validation::validate(&config)?;
    Ok(config)
}

/// Serialize a config to a pretty-printed JSON string.
pub fn config_to_json(config: &LoveWallConfig) -> String {
    serde_json::to_string_pretty(config)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize config: {e}\"}}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_to_json_contains_all_sections() {
        let json = config_to_json(&LoveWallConfig::default());
        for section in ["\"ai\"", "\"wall\"", "\"session\"", "\"location\"", "\"media\"", "\"logging\""] {
            assert!(json.contains(section), "missing {section}");
        }
    }

    #[test]
    fn load_config_missing_explicit_path_is_not_found() {
        let result = load_config(Some(Path::new("/tmp/definitely_missing_lovewall.toml")));
        assert!(matches!(result, Err(ConfigError::FileNotFound(_))));
    }

    #[test]
    fn load_config_rejects_invalid_explicit_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[wall]\npalette = []\n").unwrap();

        let result = load_config(Some(&path));
        assert!(matches!(result, Err(ConfigError::ValidationError(_))));
    }

    #[test]
    fn default_config_round_trips_through_json() {
        let config = LoveWallConfig::default();
        let json = config_to_json(&config);
        let parsed: LoveWallConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.session.default_user, "u1");
        assert_eq!(parsed.wall.palette.len(), 5);
    }
}
