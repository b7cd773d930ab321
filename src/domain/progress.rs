use serde::{Deserialize, Serialize};

/// Number of slots in the rolling week view
pub const WEEK_SLOTS: usize = 7;

/// A user's detox challenge state
///
/// `target == 0` means no challenge has been assigned yet. Once a challenge is
/// assigned `daily` always holds exactly [`WEEK_SLOTS`] percentages.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressRecord {
    /// Completed days, never above `target`
    pub days: u32,
    /// Challenge length in days (7, 14, 21) or 0
    pub target: u32,
    /// Per-slot completion percentages in `[0, 100]`
    pub daily: Vec<u8>,
}

impl ProgressRecord {
    /// Fresh record for a newly assigned challenge
    pub fn started(target: u32) -> Self {
        Self {
            days: 0,
            target,
            daily: vec![0; WEEK_SLOTS],
        }
    }

    pub fn has_challenge(&self) -> bool {
        self.target > 0
    }

    /// Share of the challenge completed, as a percentage
    pub fn percent_complete(&self) -> f64 {
        if self.target == 0 {
            return 0.0;
        }
        f64::from(self.days) / f64::from(self.target) * 100.0
    }
}
