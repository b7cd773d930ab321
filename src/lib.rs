//! Reconnect - Disconnect to Reconnect
//!
//! Client-local state for a gentle digital-detox habit app. A short
//! questionnaire assigns a 7, 14 or 21-day challenge, each completed day fills
//! a rolling week view, and a seeded leaderboard and blog keep the demo lively.
//!
//! ## State
//!
//! All state lives in a key-value store behind [`store::Storage`]:
//!
//! | key           | value                         |
//! |---------------|-------------------------------|
//! | `user`        | [`Profile`] of the session    |
//! | `progress`    | [`ProgressRecord`]            |
//! | `leaderboard` | list of [`LeaderboardEntry`]  |
//! | `blogPosts`   | list of [`BlogPost`]          |
//!
//! Persistence failures never reach callers; reads fall back to defaults and
//! failed writes leave the in-memory state authoritative.

mod atomic;

pub mod app;
pub mod catalogue;
pub mod config;
pub mod domain;
pub mod leaderboard;
pub mod onboarding;
pub mod progress;
pub mod routes;
pub mod seed;
pub mod session;
pub mod store;

pub use app::App;
pub use domain::*;
