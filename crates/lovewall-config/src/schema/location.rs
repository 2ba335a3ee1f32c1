//! Location sharing configuration.

use serde::{Deserialize, Serialize};

/// Where the partner's position comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PartnerSource {
    /// Simulated partner at a fixed offset from the local fix.
    #[default]
    Mirror,
    /// Partner fixes pushed in with `partner-geo`.
    External,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LocationConfig {
    pub enabled: bool,
    pub partner_source: PartnerSource,
    /// Latitude offset applied when mirroring the partner position.
    pub partner_offset_lat: f64,
    /// Longitude offset applied when mirroring the partner position.
    pub partner_offset_lng: f64,
    /// Advisory hint for the position provider. Fixes typed at the
    /// terminal carry no accuracy, so it is only reported when the watch
    /// starts.
    pub high_accuracy: bool,
}

impl Default for LocationConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            partner_source: PartnerSource::Mirror,
            partner_offset_lat: 0.0005,
            partner_offset_lng: -0.0005,
            high_accuracy: true,
        }
    }
}
