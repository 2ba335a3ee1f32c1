//! Turns position readings into own/partner location records.

use std::sync::Arc;

use tracing::error;

use lovewall_common::{Clock, UserId};

use super::source::PartnerLocationSource;
use super::types::{GeoReading, LocationData, LocationUpdate};

pub struct LocationTracker {
    user_id: UserId,
    partner_id: UserId,
    source: Box<dyn PartnerLocationSource>,
    clock: Arc<dyn Clock>,
    own: Option<LocationData>,
    partner: Option<LocationData>,
}

impl LocationTracker {
    pub fn new(
        user_id: UserId,
        partner_id: UserId,
        source: Box<dyn PartnerLocationSource>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            user_id,
            partner_id,
            source,
            clock,
            own: None,
            partner: None,
        }
    }

    /// Apply one reading. Errors are logged and change nothing.
    pub fn apply(&mut self, reading: GeoReading) -> Option<LocationUpdate> {
        let position = match reading {
            GeoReading::Fix(position) => position,
            GeoReading::Error(message) => {
                error!("geolocation error: {message}");
                return None;
            }
        };

        let timestamp = self.clock.now_millis();
        let own = LocationData {
            user_id: self.user_id.clone(),
            lat: position.lat,
            lng: position.lng,
            timestamp,
        };
        let partner = self
            .source
            .partner_position(position)
            .map(|p| LocationData {
                user_id: self.partner_id.clone(),
                lat: p.lat,
                lng: p.lng,
                timestamp,
            });

        self.own = Some(own.clone());
        if partner.is_some() {
            self.partner = partner.clone();
        }
        Some(LocationUpdate { own, partner })
    }

    pub fn own(&self) -> Option<&LocationData> {
        self.own.as_ref()
    }

    pub fn partner(&self) -> Option<&LocationData> {
        self.partner.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::location::{ExternalFeed, GeoPosition, MirroredOffset};
    use lovewall_common::Timestamp;

    struct StaticClock;

    impl Clock for StaticClock {
        fn now_millis(&self) -> Timestamp {
            42
        }
    }

    fn tracker(source: Box<dyn PartnerLocationSource>) -> LocationTracker {
        LocationTracker::new(
            UserId::from("u1"),
            UserId::from("u2"),
            source,
            Arc::new(StaticClock),
        )
    }

    #[test]
    fn fix_updates_both_positions() {
        let mut t = tracker(Box::new(MirroredOffset::default()));
        let update = t.apply(GeoReading::Fix(GeoPosition::new(40.0, -3.0))).unwrap();

        assert_eq!(update.own.user_id, UserId::from("u1"));
        assert_eq!(update.own.timestamp, 42);
        let partner = update.partner.unwrap();
        assert_eq!(partner.user_id, UserId::from("u2"));
        assert!((partner.lat - 40.0005).abs() < 1e-9);
        assert!((partner.lng + 3.0005).abs() < 1e-9);
        assert_eq!(t.own().unwrap().lat, 40.0);
    }

    #[test]
    fn error_reading_changes_nothing() {
        let mut t = tracker(Box::new(MirroredOffset::default()));
        t.apply(GeoReading::Fix(GeoPosition::new(1.0, 1.0)));
        assert!(t.apply(GeoReading::Error("timeout".into())).is_none());
        assert_eq!(t.own().unwrap().lat, 1.0);
    }

    #[test]
    fn external_source_without_data_has_no_partner() {
        let mut t = tracker(Box::new(ExternalFeed::default()));
        let update = t.apply(GeoReading::Fix(GeoPosition::new(1.0, 1.0))).unwrap();
        assert!(update.partner.is_none());
        assert!(t.partner().is_none());
    }
}
