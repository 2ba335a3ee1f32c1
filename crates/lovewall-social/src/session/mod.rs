//! Pairing session management.
//!
//! Tracks who is signed in, which two members currently share the wall,
//! and who is waiting for a turn. All transitions are synchronous local
//! state changes.

mod manager;
mod types;

pub use manager::SessionManager;
pub use types::{GroupSession, PairStarted, SessionError, SessionState};
