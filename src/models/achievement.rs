//! Achievement badge

use serde::{Deserialize, Serialize};

/// An achievement a fisherman can earn
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Achievement {
    /// Unique identifier
    pub id: u32,
    /// Badge name
    pub name: String,
    /// What it is awarded for
    #[serde(default)]
    pub description: Option<String>,
    /// Emoji icon
    pub icon: String,
    /// Counter the condition applies to (e.g. "total_catches")
    pub condition_type: String,
    /// Threshold for that counter
    pub condition_value: u32,
}
