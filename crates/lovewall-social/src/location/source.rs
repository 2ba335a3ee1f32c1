//! Partner position sources.

use std::sync::{Arc, Mutex};

use super::types::GeoPosition;

/// Supplies the partner's position whenever the local position changes.
pub trait PartnerLocationSource: Send {
    fn partner_position(&mut self, own: GeoPosition) -> Option<GeoPosition>;
}

/// Simulated partner standing at a fixed offset from the local user.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MirroredOffset {
    pub lat_offset: f64,
    pub lng_offset: f64,
}

impl MirroredOffset {
    pub fn new(lat_offset: f64, lng_offset: f64) -> Self {
        Self {
            lat_offset,
            lng_offset,
        }
    }
}

impl Default for MirroredOffset {
    fn default() -> Self {
        Self::new(0.0005, -0.0005)
    }
}

impl PartnerLocationSource for MirroredOffset {
    fn partner_position(&mut self, own: GeoPosition) -> Option<GeoPosition> {
        Some(GeoPosition::new(
            own.lat + self.lat_offset,
            own.lng + self.lng_offset,
        ))
    }
}

/// Partner positions pushed in from elsewhere; reports the latest one.
///
/// Clones share the same slot, so one handle can sit in the tracker while
/// another receives fixes.
#[derive(Debug, Clone, Default)]
pub struct ExternalFeed {
    latest: Arc<Mutex<Option<GeoPosition>>>,
}

impl ExternalFeed {
    pub fn push(&self, position: GeoPosition) {
        *self.latest.lock().unwrap_or_else(|e| e.into_inner()) = Some(position);
    }

    pub fn latest(&self) -> Option<GeoPosition> {
        *self.latest.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl PartnerLocationSource for ExternalFeed {
    fn partner_position(&mut self, _own: GeoPosition) -> Option<GeoPosition> {
        self.latest()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mirrored_offset_shifts_position() {
        let mut source = MirroredOffset::default();
        let partner = source.partner_position(GeoPosition::new(10.0, 20.0)).unwrap();
        assert!((partner.lat - 10.0005).abs() < 1e-9);
        assert!((partner.lng - 19.9995).abs() < 1e-9);
    }

    #[test]
    fn external_feed_ignores_own_position() {
        let mut feed = ExternalFeed::default();
        let handle = feed.clone();
        assert!(feed.partner_position(GeoPosition::new(1.0, 1.0)).is_none());
        handle.push(GeoPosition::new(48.85, 2.35));
        assert_eq!(
            feed.partner_position(GeoPosition::new(1.0, 1.0)),
            Some(GeoPosition::new(48.85, 2.35))
        );
    }
}
