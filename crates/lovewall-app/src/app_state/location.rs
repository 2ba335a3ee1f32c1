//! Position tracking while paired.

use tokio::sync::mpsc;
use tracing::{debug, info};

use lovewall_common::UserId;
use lovewall_config::schema::PartnerSource;
use lovewall_social::{
    ExternalFeed, GeoPosition, GeoReading, LocationTracker, LocationWatch, MirroredOffset,
    PartnerLocationSource,
};

use super::core::LoveWallApp;
use super::types::AppEvent;

/// Tracker, position feed and watch task of the current pairing.
pub(super) struct LocationSession {
    pub(super) tracker: LocationTracker,
    feed: mpsc::UnboundedSender<GeoReading>,
    /// Set when partner fixes are pushed in rather than mirrored.
    partner_feed: Option<ExternalFeed>,
    _watch: LocationWatch,
}

impl LoveWallApp {
    pub(super) fn start_location(&mut self, user: UserId, partner: UserId) {
        self.stop_location();
        if !self.config.location.enabled {
            return;
        }
        let location = &self.config.location;
        let (source, partner_feed): (Box<dyn PartnerLocationSource>, _) =
            match location.partner_source {
                PartnerSource::Mirror => {
                    let offset = MirroredOffset::new(
                        location.partner_offset_lat,
                        location.partner_offset_lng,
                    );
                    (Box::new(offset), None)
                }
                PartnerSource::External => {
                    let feed = ExternalFeed::default();
                    (Box::new(feed.clone()), Some(feed))
                }
            };
        let tracker = LocationTracker::new(user, partner, source, self.clock.clone());

        let (feed, readings) = mpsc::unbounded_channel();
        let events = self.events.clone();
        let watch = LocationWatch::spawn(readings, move |reading| {
            let _ = events.send(AppEvent::Geo(reading));
        });
        info!(
            source = ?self.config.location.partner_source,
            high_accuracy = self.config.location.high_accuracy,
            "Location watch started"
        );
        self.location = Some(LocationSession {
            tracker,
            feed,
            partner_feed,
            _watch: watch,
        });
    }

    pub(super) fn stop_location(&mut self) {
        if self.location.take().is_some() {
            info!("Location watch stopped");
        }
    }

    /// Feed a reading into the active watch.
    pub(super) fn report_position(&mut self, reading: GeoReading) {
        match self.location {
            Some(ref session) => {
                let _ = session.feed.send(reading);
            }
            None => debug!("no active location watch"),
        }
    }

    /// Hand a partner fix to the external feed. The next own fix reports it.
    pub(super) fn report_partner_position(&mut self, position: GeoPosition) {
        let Some(ref session) = self.location else {
            debug!("no active location watch");
            return;
        };
        match session.partner_feed {
            Some(ref feed) => feed.push(position),
            None => debug!("partner positions are mirrored; fix ignored"),
        }
    }

    pub(super) fn on_geo_reading(&mut self, reading: GeoReading) {
        let Some(ref mut session) = self.location else {
            debug!("reading arrived after the watch stopped");
            return;
        };
        if let Some(update) = session.tracker.apply(reading) {
            if let Some(partner) = update.partner {
                let line = format!(
                    "You: {:.5}, {:.5}  Partner: {:.5}, {:.5}",
                    update.own.lat, update.own.lng, partner.lat, partner.lng
                );
                self.say(line);
            }
        }
    }
}
