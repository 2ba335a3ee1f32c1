pub mod location;
pub mod roster;
pub mod session;

pub use location::{
    ExternalFeed, GeoPosition, GeoReading, LocationData, LocationTracker, LocationUpdate,
    LocationWatch, MirroredOffset, PartnerLocationSource,
};
pub use roster::{Roster, User, UserStatus};
pub use session::{GroupSession, PairStarted, SessionError, SessionManager, SessionState};
