//! Roster validation.

use std::collections::HashSet;

use crate::schema::LoveWallConfig;

pub(super) fn validate_session(errors: &mut Vec<String>, config: &LoveWallConfig) {
    let session = &config.session;

    if session.members.len() < 2 {
        errors.push("session.members needs at least two members to pair".into());
    }

    let mut seen = HashSet::new();
    for member in &session.members {
        if member.id.trim().is_empty() {
            errors.push("session.members contains an empty id".into());
        }
        if member.name.trim().is_empty() {
            errors.push(format!("session member {:?} has an empty name", member.id));
        }
        if !seen.insert(member.id.as_str()) {
            errors.push(format!("session member id {:?} is duplicated", member.id));
        }
    }

    if !session.members.iter().any(|m| m.id == session.default_user) {
        errors.push(format!(
            "session.default_user {:?} is not in session.members",
            session.default_user
        ));
    }
}
