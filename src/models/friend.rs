//! Friend card shown on the feed strip and friends grid

use serde::{Deserialize, Serialize};

/// A friend with a short status line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Friend {
    /// Unique identifier
    pub id: u32,
    /// Display name
    pub name: String,
    /// Emoji avatar
    pub avatar: String,
    /// Latest status ("Щука 5кг!")
    pub status: String,
    /// Whether the friend is online
    #[serde(default)]
    pub online: bool,
}

impl Friend {
    /// Create an online friend
    pub fn new(id: u32, name: &str, avatar: &str, status: &str) -> Self {
        Self {
            id,
            name: name.to_string(),
            avatar: avatar.to_string(),
            status: status.to_string(),
            online: true,
        }
    }
}
