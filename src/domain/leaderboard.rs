use serde::{Deserialize, Serialize};

/// A community member shown on the dashboard leaderboard
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub id: String,
    pub name: String,
    /// Length of the entrant's challenge in days
    pub days: u32,
    /// Completion percentage, 0-100
    pub progress: u8,
}

impl LeaderboardEntry {
    pub fn new(id: &str, name: &str, days: u32, progress: u8) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            days,
            progress,
        }
    }
}
