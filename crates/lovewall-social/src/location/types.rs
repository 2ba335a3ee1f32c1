//! Location data types.

use serde::{Deserialize, Serialize};

use lovewall_common::{Timestamp, UserId};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPosition {
    pub lat: f64,
    pub lng: f64,
}

impl GeoPosition {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

/// One reading from the position stream.
#[derive(Debug, Clone, PartialEq)]
pub enum GeoReading {
    Fix(GeoPosition),
    Error(String),
}

/// A member's last known position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationData {
    pub user_id: UserId,
    pub lat: f64,
    pub lng: f64,
    pub timestamp: Timestamp,
}

/// Positions produced by one fix.
#[derive(Debug, Clone, PartialEq)]
pub struct LocationUpdate {
    pub own: LocationData,
    pub partner: Option<LocationData>,
}
