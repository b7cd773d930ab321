//! Core domain types for Reconnect

mod blog;
mod challenge;
mod leaderboard;
mod profile;
mod progress;

pub use blog::BlogPost;
pub use challenge::ChallengeLength;
pub use leaderboard::LeaderboardEntry;
pub use profile::{Profile, avatar_url};
pub use progress::{ProgressRecord, WEEK_SLOTS};
