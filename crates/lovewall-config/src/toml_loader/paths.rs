//! Where the config file lives, and writing the commented default.

use std::path::{Path, PathBuf};

use tracing::info;

use lovewall_common::ConfigError;

use super::template::default_config_toml;

/// Environment variable naming an alternative default config file.
pub const CONFIG_PATH_ENV: &str = "LOVEWALL_CONFIG";

/// `$LOVEWALL_CONFIG` when set, else `<config dir>/lovewall/config.toml`.
pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    if let Some(path) = std::env::var_os(CONFIG_PATH_ENV).filter(|p| !p.is_empty()) {
        return Ok(PathBuf::from(path));
    }
    dirs::config_dir()
        .map(|dir| dir.join("lovewall").join("config.toml"))
        .ok_or_else(|| ConfigError::ParseError("no platform config directory".into()))
}

fn io_error(action: &str, path: &Path, err: std::io::Error) -> ConfigError {
    ConfigError::ParseError(format!("{action} {}: {err}", path.display()))
}

/// Write the template to `path`, creating parent directories.
pub fn create_default_config(path: &Path) -> Result<(), ConfigError> {
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        std::fs::create_dir_all(dir).map_err(|e| io_error("cannot create", dir, e))?;
    }
    std::fs::write(path, default_config_toml()).map_err(|e| io_error("cannot write", path, e))?;
    info!(path = %path.display(), "Wrote default config");
    Ok(())
}
