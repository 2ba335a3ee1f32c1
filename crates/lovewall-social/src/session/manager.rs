//! Session manager: join, start and end pairings, waitlist.

use std::sync::Arc;

use tracing::{debug, info};

use lovewall_common::{Clock, SessionId, SystemClock, Timestamp, UserId};

use super::types::{GroupSession, PairStarted, SessionError, SessionState};
use crate::roster::{Roster, User};

/// Owns the current user, the partner and the group session.
pub struct SessionManager {
    roster: Roster,
    clock: Arc<dyn Clock>,
    current_user: Option<User>,
    partner: Option<User>,
    session: GroupSession,
    session_id: Option<SessionId>,
    /// Start time of the most recent pairing, kept after it ends so the
    /// next start is strictly later.
    last_start: Option<Timestamp>,
}

impl SessionManager {
    pub fn new(roster: Roster) -> Self {
        Self::with_clock(roster, Arc::new(SystemClock))
    }

    pub fn with_clock(roster: Roster, clock: Arc<dyn Clock>) -> Self {
        Self {
            roster,
            clock,
            current_user: None,
            partner: None,
            session: GroupSession::default(),
            session_id: None,
            last_start: None,
        }
    }

    /// Sign in as `user_id` and return to the lobby, dropping any pairing.
    pub fn join(&mut self, user_id: &UserId) -> Result<&User, SessionError> {
        let user = self
            .roster
            .find(user_id)
            .cloned()
            .ok_or_else(|| SessionError::UnknownUser(user_id.clone()))?;

        self.clear_pairing();
        info!(user = %user.name, "Joined the lobby");
        Ok(&*self.current_user.insert(user))
    }

    /// Pair the current user with `partner_id`.
    ///
    /// Nothing changes on failure.
    pub fn start_pairing(&mut self, partner_id: &UserId) -> Result<PairStarted, SessionError> {
        let user = self.current_user.clone().ok_or(SessionError::NotJoined)?;
        let partner = self
            .roster
            .find(partner_id)
            .cloned()
            .ok_or_else(|| SessionError::UnknownUser(partner_id.clone()))?;
        if partner.id == user.id {
            return Err(SessionError::SelfPairing);
        }

        let now = self.clock.now_millis();
        let start_time = match self.last_start {
            Some(prev) if now <= prev => prev + 1,
            _ => now,
        };

        let session_id = SessionId::new();
        self.session
            .waitlist
            .retain(|id| id != &user.id && id != &partner.id);
        self.session.active_pair = Some((user.id.clone(), partner.id.clone()));
        self.session.start_time = Some(start_time);
        self.session_id = Some(session_id.clone());
        self.last_start = Some(start_time);
        self.partner = Some(partner.clone());

        info!(%session_id, user = %user.name, partner = %partner.name, "Pairing started");
        Ok(PairStarted {
            session_id,
            user,
            partner,
            start_time,
        })
    }

    /// Leave the wall. Always succeeds.
    pub fn end_pairing(&mut self) {
        if let Some(ref session_id) = self.session_id {
            info!(%session_id, "Pairing ended");
        }
        self.clear_pairing();
    }

    /// Put a member on the waitlist. Returns `false` if already waiting.
    pub fn enqueue(&mut self, user_id: &UserId) -> Result<bool, SessionError> {
        if !self.roster.contains(user_id) {
            return Err(SessionError::UnknownUser(user_id.clone()));
        }
        if self.session.is_paired(user_id) {
            return Err(SessionError::AlreadyPaired(user_id.clone()));
        }
        if self.session.waitlist.contains(user_id) {
            debug!(%user_id, "Already on the waitlist");
            return Ok(false);
        }
        self.session.waitlist.push(user_id.clone());
        Ok(true)
    }

    /// Remove a member from the waitlist. Returns whether they were on it.
    pub fn dequeue(&mut self, user_id: &UserId) -> bool {
        let before = self.session.waitlist.len();
        self.session.waitlist.retain(|id| id != user_id);
        before != self.session.waitlist.len()
    }

    pub fn state(&self) -> SessionState {
        match (&self.current_user, &self.session.active_pair) {
            (None, _) => SessionState::Unjoined,
            (Some(_), None) => SessionState::Lobby,
            (Some(_), Some(_)) => SessionState::Paired,
        }
    }

    pub fn current_user(&self) -> Option<&User> {
        self.current_user.as_ref()
    }

    pub fn partner(&self) -> Option<&User> {
        self.partner.as_ref()
    }

    pub fn session(&self) -> &GroupSession {
        &self.session
    }

    pub fn session_id(&self) -> Option<&SessionId> {
        self.session_id.as_ref()
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    fn clear_pairing(&mut self) {
        self.partner = None;
        self.session.active_pair = None;
        self.session.start_time = None;
        self.session_id = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicI64, Ordering};

    /// Clock that only moves when told to.
    struct FixedClock(AtomicI64);

    impl Clock for FixedClock {
        fn now_millis(&self) -> Timestamp {
            self.0.load(Ordering::SeqCst)
        }
    }

    fn roster() -> Roster {
        Roster::new(vec![
            User::new("u1", "Alex", ""),
            User::new("u2", "Sam", ""),
            User::new("u3", "Jordan", ""),
        ])
    }

    fn manager_at(millis: i64) -> (SessionManager, Arc<FixedClock>) {
        let clock = Arc::new(FixedClock(AtomicI64::new(millis)));
        (SessionManager::with_clock(roster(), clock.clone()), clock)
    }

    fn id(s: &str) -> UserId {
        UserId::from(s)
    }

    #[test]
    fn starts_unjoined() {
        let (mgr, _) = manager_at(1_000);
        assert_eq!(mgr.state(), SessionState::Unjoined);
        assert!(mgr.current_user().is_none());
    }

    #[test]
    fn join_enters_lobby() {
        let (mut mgr, _) = manager_at(1_000);
        assert_eq!(mgr.join(&id("u1")).unwrap().name, "Alex");
        assert_eq!(mgr.state(), SessionState::Lobby);
    }

    #[test]
    fn join_unknown_user_fails() {
        let (mut mgr, _) = manager_at(1_000);
        assert_eq!(
            mgr.join(&id("nobody")).unwrap_err(),
            SessionError::UnknownUser(id("nobody"))
        );
        assert_eq!(mgr.state(), SessionState::Unjoined);
    }

    #[test]
    fn pairing_sets_pair_and_start_time() {
        let (mut mgr, _) = manager_at(5_000);
        mgr.join(&id("u1")).unwrap();
        let started = mgr.start_pairing(&id("u2")).unwrap();

        assert_eq!(started.partner.name, "Sam");
        assert_eq!(started.start_time, 5_000);
        assert_eq!(mgr.state(), SessionState::Paired);
        assert_eq!(
            mgr.session().active_pair,
            Some((id("u1"), id("u2")))
        );
        assert_eq!(mgr.session().start_time, Some(5_000));
        assert_eq!(mgr.partner().unwrap().name, "Sam");
    }

    #[test]
    fn pairing_before_join_fails() {
        let (mut mgr, _) = manager_at(1_000);
        assert_eq!(
            mgr.start_pairing(&id("u2")).unwrap_err(),
            SessionError::NotJoined
        );
        assert_eq!(mgr.session(), &GroupSession::default());
    }

    #[test]
    fn unknown_partner_leaves_pair_unchanged() {
        let (mut mgr, _) = manager_at(1_000);
        mgr.join(&id("u1")).unwrap();
        mgr.start_pairing(&id("u2")).unwrap();
        let before = mgr.session().clone();

        assert!(matches!(
            mgr.start_pairing(&id("ghost")),
            Err(SessionError::UnknownUser(_))
        ));
        assert_eq!(mgr.session(), &before);
        assert_eq!(mgr.partner().unwrap().name, "Sam");
        assert_eq!(mgr.state(), SessionState::Paired);
    }

    #[test]
    fn self_pairing_is_rejected() {
        let (mut mgr, _) = manager_at(1_000);
        mgr.join(&id("u1")).unwrap();
        assert_eq!(
            mgr.start_pairing(&id("u1")).unwrap_err(),
            SessionError::SelfPairing
        );
        assert_eq!(mgr.state(), SessionState::Lobby);
    }

    #[test]
    fn end_pairing_returns_to_lobby() {
        let (mut mgr, _) = manager_at(1_000);
        mgr.join(&id("u1")).unwrap();
        mgr.start_pairing(&id("u2")).unwrap();
        mgr.end_pairing();

        assert_eq!(mgr.state(), SessionState::Lobby);
        assert!(mgr.session().active_pair.is_none());
        assert!(mgr.session().start_time.is_none());
        assert!(mgr.partner().is_none());
        assert!(mgr.session_id().is_none());
    }

    #[test]
    fn end_pairing_when_unpaired_is_harmless() {
        let (mut mgr, _) = manager_at(1_000);
        mgr.end_pairing();
        assert_eq!(mgr.state(), SessionState::Unjoined);
    }

    #[test]
    fn repairing_gets_strictly_later_start_even_with_frozen_clock() {
        let (mut mgr, _) = manager_at(7_000);
        mgr.join(&id("u1")).unwrap();
        let first = mgr.start_pairing(&id("u2")).unwrap().start_time;
        mgr.end_pairing();
        let second = mgr.start_pairing(&id("u2")).unwrap().start_time;
        assert!(second > first);
        assert_eq!(mgr.state(), SessionState::Paired);
    }

    #[test]
    fn repairing_uses_clock_when_it_advanced() {
        let (mut mgr, clock) = manager_at(7_000);
        mgr.join(&id("u1")).unwrap();
        mgr.start_pairing(&id("u2")).unwrap();
        mgr.end_pairing();
        clock.0.store(9_000, Ordering::SeqCst);
        assert_eq!(mgr.start_pairing(&id("u3")).unwrap().start_time, 9_000);
    }

    #[test]
    fn join_clears_existing_pairing() {
        let (mut mgr, _) = manager_at(1_000);
        mgr.join(&id("u1")).unwrap();
        mgr.start_pairing(&id("u2")).unwrap();
        mgr.join(&id("u3")).unwrap();
        assert_eq!(mgr.state(), SessionState::Lobby);
        assert!(mgr.session().active_pair.is_none());
    }

    #[test]
    fn waitlist_respects_pair_exclusivity() {
        let (mut mgr, _) = manager_at(1_000);
        mgr.join(&id("u1")).unwrap();
        assert!(mgr.enqueue(&id("u2")).unwrap());
        assert!(!mgr.enqueue(&id("u2")).unwrap());
        assert!(mgr.enqueue(&id("u3")).unwrap());

        mgr.start_pairing(&id("u2")).unwrap();
        assert_eq!(mgr.session().waitlist, vec![id("u3")]);
        assert_eq!(
            mgr.enqueue(&id("u1")).unwrap_err(),
            SessionError::AlreadyPaired(id("u1"))
        );
        assert!(matches!(
            mgr.enqueue(&id("zz")),
            Err(SessionError::UnknownUser(_))
        ));
    }

    #[test]
    fn dequeue_reports_membership() {
        let (mut mgr, _) = manager_at(1_000);
        mgr.enqueue(&id("u3")).unwrap();
        assert!(mgr.dequeue(&id("u3")));
        assert!(!mgr.dequeue(&id("u3")));
        assert!(mgr.session().waitlist.is_empty());
    }

    #[test]
    fn session_errors_convert() {
        let err = lovewall_common::LoveWallError::from(SessionError::SelfPairing);
        assert_eq!(err.to_string(), "session error: cannot pair with yourself");
    }
}
