//! Member roster and pairing configuration.

use serde::{Deserialize, Serialize};

/// A roster entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberConfig {
    pub id: String,
    pub name: String,
    /// Avatar URL. Empty means derive one from the name.
    #[serde(default)]
    pub avatar: String,
}

impl MemberConfig {
    fn named(id: &str, name: &str) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            avatar: String::new(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    pub members: Vec<MemberConfig>,
    /// Member id that `join` signs in as.
    pub default_user: String,
    /// Seed note text; `{name}` is replaced by the joining user's name.
    pub greeting: String,
    /// Template for derived avatars; `{name}` is replaced by the member name.
    pub avatar_template: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            members: vec![
                MemberConfig::named("u1", "Alex"),
                MemberConfig::named("u2", "Sam"),
                MemberConfig::named("u3", "Jordan"),
                MemberConfig::named("u4", "Casey"),
                MemberConfig::named("u5", "Taylor"),
                MemberConfig::named("u6", "Morgan"),
                MemberConfig::named("u7", "Riley"),
            ],
            default_user: "u1".into(),
            greeting: "Hey {name}! Glad we connected.".into(),
            avatar_template: "https://api.dicebear.com/7.x/avataaars/svg?seed={name}".into(),
        }
    }
}
