//! Catch log entry

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A logged catch
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Catch {
    /// Unique identifier
    pub id: u32,
    /// Who caught it
    pub user_id: u32,
    /// Species ("щука", "карп", ...)
    pub fish_type: String,
    /// Weight in kilograms
    pub weight: Option<f64>,
    /// Latitude of the spot
    pub latitude: f64,
    /// Longitude of the spot
    pub longitude: f64,
    /// Tackle used
    #[serde(default)]
    pub gear: Option<String>,
    /// Weather at the time
    #[serde(default)]
    pub weather: Option<String>,
    /// Morning/day/evening/night
    #[serde(default)]
    pub time_of_day: Option<String>,
    /// Photo URLs
    #[serde(default)]
    pub images: Vec<String>,
    /// Free-form description
    #[serde(default)]
    pub description: Option<String>,
    /// When it was logged
    pub created_at: DateTime<Utc>,
}
