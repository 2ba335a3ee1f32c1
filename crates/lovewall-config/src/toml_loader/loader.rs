//! Reading a config file into the schema.

use std::path::Path;

use tracing::{debug, info};

use lovewall_common::ConfigError;

use super::paths::{create_default_config, default_config_path};
use crate::schema::LoveWallConfig;

/// Parse the TOML file at `path`. Absent keys keep their defaults; the
/// result is not validated here.
pub fn load_from_path(path: &Path) -> Result<LoveWallConfig, ConfigError> {
    let text = std::fs::read_to_string(path)
        .map_err(|e| ConfigError::ParseError(format!("cannot read {}: {e}", path.display())))?;
    let config = toml::from_str::<LoveWallConfig>(&text)
        .map_err(|e| ConfigError::ParseError(format!("{}: {e}", path.display())))?;
    debug!(path = %path.display(), "Config parsed");
    Ok(config)
}

/// Load from `default_config_path()`, writing the template first if no
/// file exists yet.
pub fn load_default() -> Result<LoveWallConfig, ConfigError> {
    let path = default_config_path()?;
    if path.exists() {
        let config = load_from_path(&path)?;
        info!(path = %path.display(), "Config loaded");
        return Ok(config);
    }
    create_default_config(&path)?;
    Ok(LoveWallConfig::default())
}
