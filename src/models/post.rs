//! Post model (feed and city walls)

use chrono::{DateTime, Local, Utc};
use serde::{Deserialize, Serialize};

use super::User;

/// A post on the feed or on a city wall
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    /// Unique identifier within its collection
    pub id: u32,
    /// Author id
    pub user_id: u32,
    /// City the post belongs to
    pub city_id: u32,
    /// Post text
    pub content: String,
    /// Attached image URLs
    #[serde(default)]
    pub images: Vec<String>,
    /// Tags without the leading `#`
    #[serde(default)]
    pub tags: Vec<String>,
    /// Number of likes
    pub likes_count: u32,
    /// Number of comments
    pub comments_count: u32,
    /// When the post was created
    pub created_at: DateTime<Utc>,
    /// When the post was last edited
    pub updated_at: DateTime<Utc>,
    /// Embedded author, when the backend expands it
    #[serde(default)]
    pub user: Option<User>,
}

impl Post {
    /// Create a post by `author` in `city_id`, timestamped now
    pub fn new(id: u32, author: &User, city_id: u32, content: &str) -> Self {
        let now = Utc::now();
        Self {
            id,
            user_id: author.id,
            city_id,
            content: content.to_string(),
            images: Vec::new(),
            tags: Vec::new(),
            likes_count: 0,
            comments_count: 0,
            created_at: now,
            updated_at: now,
            user: Some(author.clone()),
        }
    }

    /// Author display name, or a placeholder
    pub fn author_name(&self) -> &str {
        self.user.as_ref().map_or("Рыбак", |u| u.username.as_str())
    }

    /// Relative time in Russian ("5 мин назад", "2 ч назад", "14.01.2025")
    pub fn relative_time(&self) -> String {
        relative_time_at(self.created_at, Utc::now())
    }
}

/// Relative time of `then` as seen from `now`
pub(crate) fn relative_time_at(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let elapsed = now.signed_duration_since(then);
    let minutes = elapsed.num_minutes().max(0);
    let hours = elapsed.num_hours().max(0);

    if minutes < 60 {
        format!("{minutes} мин назад")
    } else if hours < 24 {
        format!("{hours} ч назад")
    } else {
        then.with_timezone(&Local).format("%d.%m.%Y").to_string()
    }
}
