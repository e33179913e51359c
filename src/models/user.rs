//! User model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A fisherman registered in the community
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier (within a session)
    pub id: u32,
    /// Email used to sign in
    #[serde(default)]
    pub email: String,
    /// Display name
    pub username: String,
    /// Avatar URL
    pub avatar_url: Option<String>,
    /// Profile cover URL
    #[serde(default)]
    pub cover_url: Option<String>,
    /// Home city
    #[serde(default)]
    pub city_id: Option<u32>,
    /// Free-form bio
    #[serde(default)]
    pub bio: Option<String>,
    /// Years spent fishing
    pub experience_years: u32,
    /// Number of catches logged
    pub total_catches: u32,
    /// Community rating
    pub rating: u32,
    /// When the account was created
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Create a user with the given id and display name
    pub fn new(id: u32, username: &str) -> Self {
        Self {
            id,
            email: String::new(),
            username: username.to_string(),
            avatar_url: None,
            cover_url: None,
            city_id: None,
            bio: None,
            experience_years: 0,
            total_catches: 0,
            rating: 0,
            created_at: Utc::now(),
        }
    }

    /// Set experience, catches and rating in one go
    pub fn with_stats(mut self, experience_years: u32, total_catches: u32, rating: u32) -> Self {
        self.experience_years = experience_years;
        self.total_catches = total_catches;
        self.rating = rating;
        self
    }

    /// Avatar fallback: first two letters of the name, upper-cased
    pub fn initials(&self) -> String {
        let initials: String = self.username.chars().take(2).collect();
        if initials.is_empty() {
            "РК".to_string()
        } else {
            initials.to_uppercase()
        }
    }
}
