//! Wall members.

use serde::{Deserialize, Serialize};

use lovewall_common::UserId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserStatus {
    #[default]
    Available,
    Busy,
    Waiting,
}

/// A wall member. Immutable once created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub avatar: String,
    pub status: UserStatus,
}

impl User {
    pub fn new(id: impl Into<String>, name: impl Into<String>, avatar: impl Into<String>) -> Self {
        Self {
            id: UserId::new(id),
            name: name.into(),
            avatar: avatar.into(),
            status: UserStatus::Available,
        }
    }
}

/// The fixed set of members a pairing can be made from.
#[derive(Debug, Clone, Default)]
pub struct Roster {
    members: Vec<User>,
}

impl Roster {
    pub fn new(members: Vec<User>) -> Self {
        Self { members }
    }

    pub fn find(&self, id: &UserId) -> Option<&User> {
        self.members.iter().find(|m| &m.id == id)
    }

    pub fn contains(&self, id: &UserId) -> bool {
        self.find(id).is_some()
    }

    pub fn members(&self) -> &[User] {
        &self.members
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roster() -> Roster {
        Roster::new(vec![User::new("u1", "Alex", ""), User::new("u2", "Sam", "")])
    }

    #[test]
    fn find_by_id() {
        let roster = roster();
        assert_eq!(roster.find(&UserId::from("u2")).unwrap().name, "Sam");
        assert!(roster.find(&UserId::from("u9")).is_none());
        assert!(roster.contains(&UserId::from("u1")));
        assert_eq!(roster.len(), 2);
    }

    #[test]
    fn status_serializes_lowercase() {
        let json = serde_json::to_string(&UserStatus::Waiting).unwrap();
        assert_eq!(json, "\"waiting\"");
    }

    #[test]
    fn new_users_are_available() {
        assert_eq!(User::new("u1", "Alex", "").status, UserStatus::Available);
    }
}
