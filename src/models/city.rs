//! City model

use serde::{Deserialize, Serialize};

/// A city with its own wall and chat room
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct City {
    /// Unique identifier
    pub id: u32,
    /// City name
    pub name: String,
    /// Region/oblast
    pub region: String,
    /// Latitude
    pub latitude: Option<f64>,
    /// Longitude
    pub longitude: Option<f64>,
    /// Population
    #[serde(default)]
    pub population: Option<u32>,
}

impl City {
    /// Create a city with coordinates
    pub fn new(id: u32, name: &str, region: &str, latitude: f64, longitude: f64) -> Self {
        Self {
            id,
            name: name.to_string(),
            region: region.to_string(),
            latitude: Some(latitude),
            longitude: Some(longitude),
            population: None,
        }
    }

    /// Case-insensitive substring match on the city name.
    ///
    /// An empty query matches every city.
    pub fn name_matches(&self, query: &str) -> bool {
        self.name.to_lowercase().contains(&query.to_lowercase())
    }

    /// Coordinates formatted for display, if known
    pub fn coordinates(&self) -> Option<String> {
        match (self.latitude, self.longitude) {
            (Some(lat), Some(lon)) => Some(format!("{lat:.4}, {lon:.4}")),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_matches_ignores_case() {
        let city = City::new(1, "Москва", "Московская область", 55.7558, 37.6173);
        assert!(city.name_matches("моск"));
        assert!(city.name_matches("МОСКВА"));
        assert!(city.name_matches(""));
        assert!(!city.name_matches("Казань"));
    }

    #[test]
    fn test_coordinates() {
        let mut city = City::new(5, "Казань", "Республика Татарстан", 55.8304, 49.0661);
        assert_eq!(city.coordinates().as_deref(), Some("55.8304, 49.0661"));
        city.longitude = None;
        assert!(city.coordinates().is_none());
    }
}
