//! Chat message model

use chrono::{DateTime, Local, Utc};
use serde::{Deserialize, Serialize};

use super::User;

/// Kind of chat message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageType {
    /// Plain text
    #[default]
    Text,
    /// Voice note
    Voice,
    /// Sticker
    Sticker,
}

/// A message in a city chat room
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    /// Unique identifier within its thread
    pub id: u32,
    /// City chat room
    pub city_id: u32,
    /// Author id
    pub user_id: u32,
    /// Message text
    pub content: String,
    /// Kind of message
    #[serde(default)]
    pub message_type: MessageType,
    /// Message this one replies to
    #[serde(default)]
    pub reply_to: Option<u32>,
    /// Whether the author edited it
    #[serde(default)]
    pub is_edited: bool,
    /// When it was sent
    pub created_at: DateTime<Utc>,
    /// Embedded author
    #[serde(default)]
    pub user: Option<User>,
}

impl Message {
    /// Create a text message timestamped now
    pub fn text(id: u32, author: &User, city_id: u32, content: &str) -> Self {
        Self {
            id,
            city_id,
            user_id: author.id,
            content: content.to_string(),
            message_type: MessageType::Text,
            reply_to: None,
            is_edited: false,
            created_at: Utc::now(),
            user: Some(author.clone()),
        }
    }

    /// Author display name, or a placeholder
    pub fn author_name(&self) -> &str {
        self.user.as_ref().map_or("Рыбак", |u| u.username.as_str())
    }

    /// Local wall-clock time ("09:41")
    pub fn clock_time(&self) -> String {
        self.created_at.with_timezone(&Local).format("%H:%M").to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clock_time_format() {
        let msg = Message::text(1, &User::new(2, "Иван"), 1, "Привет всем!");
        let time = msg.clock_time();
        assert_eq!(time.len(), 5);
        assert_eq!(&time[2..3], ":");
    }

    #[test]
    fn test_message_type_serde() {
        let json = serde_json::to_string(&MessageType::Sticker).unwrap();
        assert_eq!(json, "\"sticker\"");
    }
}
