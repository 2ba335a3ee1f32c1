//! Full configuration validation.
//!
//! Each domain has its own submodule; this orchestrator calls them all and
//! collects errors into a single `ConfigError`.

mod helpers;
mod misc;
mod session;
mod wall;


use crate::schema::LoveWallConfig;
use lovewall_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &LoveWallConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    wall::validate_wall(&mut errors, config);
    session::validate_session(&mut errors, config);
    misc::validate_ai(&mut errors, config);
    misc::validate_location(&mut errors, config);
    misc::validate_media(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
