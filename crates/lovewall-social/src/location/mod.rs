//! Location sharing while paired.
//!
//! The local device reports a stream of fixes. Each fix updates the user's
//! own position; the partner's position comes from a
//! `PartnerLocationSource`. `MirroredOffset` fabricates it from the local
//! fix and is only a stand-in until partner positions arrive from a real
//! feed (`ExternalFeed`).

mod source;
mod tracker;
mod types;
mod watch;

pub use source::{ExternalFeed, MirroredOffset, PartnerLocationSource};
pub use tracker::LocationTracker;
pub use types::{GeoPosition, GeoReading, LocationData, LocationUpdate};
pub use watch::LocationWatch;
