//! First-run demo content
//!
//! A fresh install has an empty store. The leaderboard and blog would render
//! empty, so both are populated with fixed records the first time the app
//! starts. Existing values are never touched.

use chrono::NaiveDate;
use tracing::debug;

use crate::store::{BLOG_POSTS_KEY, LEADERBOARD_KEY, Storage};
use crate::{BlogPost, LeaderboardEntry};

/// Populate `leaderboard` and `blogPosts` if they are absent or falsy
///
/// Safe to call on every start.
pub fn ensure_seeded(storage: &Storage) {
    if !storage.contains(LEADERBOARD_KEY) {
        debug!("Seeding leaderboard");
        storage.write(LEADERBOARD_KEY, &seed_leaderboard());
    }
    if !storage.contains(BLOG_POSTS_KEY) {
        debug!("Seeding blog posts");
        storage.write(BLOG_POSTS_KEY, &seed_blog_posts());
    }
}

/// The four demo entrants
pub fn seed_leaderboard() -> Vec<LeaderboardEntry> {
    vec![
        LeaderboardEntry::new("u1", "Ava", 21, 82),
        LeaderboardEntry::new("u2", "Noah", 14, 68),
        LeaderboardEntry::new("u3", "Liam", 7, 95),
        LeaderboardEntry::new("u4", "Mia", 21, 40),
    ]
}

/// The three demo articles
pub fn seed_blog_posts() -> Vec<BlogPost> {
    vec![
        post(
            "b1",
            "Why Digital Detox Matters",
            "Reclaim your focus and presence with small daily habits.",
            "Constant connectivity fragments our attention. A gentle detox restores intention. \
             Start by scheduling short offline windows and noticing how your mind settles.",
            (2024, 9, 1),
            "Team D2R",
        ),
        post(
            "b2",
            "Micro-breaks, Macro Gains",
            "5 minutes away from screens improves posture and mood.",
            "Stand up, stretch, breathe. These micro-breaks compound into deeper clarity. \
             Pair them with device-free meals for a bigger reset.",
            (2024, 10, 14),
            "Coach Lina",
        ),
        post(
            "b3",
            "Stories from the Community",
            "How people found balance with mindful tech routines.",
            "From muted notifications to bedtime wind-downs, small boundaries created big space. \
             Explore routines and pick one that fits your life.",
            (2024, 11, 5),
            "Community",
        ),
    ]
}

fn post(
    id: &str,
    title: &str,
    excerpt: &str,
    content: &str,
    (year, month, day): (i32, u32, u32),
    author: &str,
) -> BlogPost {
    BlogPost {
        id: id.to_string(),
        title: title.to_string(),
        excerpt: excerpt.to_string(),
        content: content.to_string(),
        date: NaiveDate::from_ymd_opt(year, month, day).unwrap_or(NaiveDate::MIN),
        author: author.to_string(),
    }
}
