//! Configuration schema types for LoveWall.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod ai;
mod location;
mod media;
mod session;
mod system;
mod wall;

pub use ai::*;
pub use location::*;
pub use media::*;
pub use session::*;
pub use system::*;
pub use wall::*;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LoveWallConfig {
    pub ai: AiConfig,
    pub wall: WallConfig,
    pub session: SessionConfig,
    pub location: LocationConfig,
    pub media: MediaConfig,
    pub logging: LoggingConfig,
}
