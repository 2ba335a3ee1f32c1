//! Types and errors for pairing sessions.

use lovewall_common::{LoveWallError, SessionId, Timestamp, UserId};

use crate::roster::User;

/// Where the signed-in user currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Nobody has joined yet.
    Unjoined,
    /// Joined, choosing a partner.
    Lobby,
    /// Sharing the wall with a partner.
    Paired,
}

/// The single shared pairing plus the waitlist.
///
/// A user id is in at most one of `active_pair` and `waitlist`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GroupSession {
    pub active_pair: Option<(UserId, UserId)>,
    pub start_time: Option<Timestamp>,
    pub waitlist: Vec<UserId>,
}

impl GroupSession {
    pub fn is_paired(&self, id: &UserId) -> bool {
        self.active_pair
            .as_ref()
            .is_some_and(|(a, b)| a == id || b == id)
    }
}

/// Returned by a successful `start_pairing`.
#[derive(Debug, Clone)]
pub struct PairStarted {
    pub session_id: SessionId,
    pub user: User,
    pub partner: User,
    pub start_time: Timestamp,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("no user has joined")]
    NotJoined,
    #[error("unknown member {0}")]
    UnknownUser(UserId),
    #[error("cannot pair with yourself")]
    SelfPairing,
    #[error("member {0} is already on the wall")]
    AlreadyPaired(UserId),
}

impl From<SessionError> for LoveWallError {
    fn from(e: SessionError) -> Self {
        Self::Session(e.to_string())
    }
}
