pub mod errors;
pub mod id;
pub mod pending;
pub mod time;

pub use errors::{ConfigError, LoveWallError, MediaError};
pub use id::{new_id, ItemId, SessionId, UserId};
pub use pending::{PendingFlag, PendingGuard};
pub use time::{Clock, SystemClock, Timestamp};

pub type Result<T> = std::result::Result<T, LoveWallError>;
