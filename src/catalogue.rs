//! Static content: the challenge catalogue, blog posts and motivation quotes

use crate::store::{BLOG_POSTS_KEY, Storage};
use crate::{BlogPost, ChallengeLength};

/// A challenge on offer and the habits it asks for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChallengeInfo {
    pub length: ChallengeLength,
    pub tips: [&'static str; 3],
}

pub static CHALLENGES: [ChallengeInfo; 3] = [
    ChallengeInfo {
        length: ChallengeLength::Seven,
        tips: [
            "No phone at meals",
            "15-min evening wind-down",
            "Mute non-urgent apps",
        ],
    },
    ChallengeInfo {
        length: ChallengeLength::Fourteen,
        tips: [
            "Batch notifications 3x/day",
            "Device-free bedroom",
            "Weekend morning offline",
        ],
    },
    ChallengeInfo {
        length: ChallengeLength::TwentyOne,
        tips: [
            "App limits for socials",
            "Daily 30-min deep work",
            "One day/week mini detox",
        ],
    },
];

/// Dashboard tips shown next to the leaderboard
pub const DASHBOARD_TIPS: [&str; 3] = [
    "Schedule device-free meals.",
    "Batch notifications to specific times.",
    "Place the phone outside the bedroom.",
];

/// Catalogue entries paired with whether each is the user's current plan
pub fn catalogue_for(target: u32) -> Vec<(ChallengeInfo, bool)> {
    let current = ChallengeLength::from_days(target);
    CHALLENGES
        .iter()
        .map(|info| (*info, Some(info.length) == current))
        .collect()
}

/// Stored blog posts, empty if missing or unreadable
pub fn load_posts(storage: &Storage) -> Vec<BlogPost> {
    storage.read(BLOG_POSTS_KEY, Vec::new())
}

pub const QUOTES: [&str; 4] = [
    "Small steps, big clarity.",
    "Be where your feet are.",
    "Airplane mode, grounded mind.",
    "Less screen, more scene.",
];

/// Cycles through [`QUOTES`]; the caller decides when to advance
#[derive(Debug, Clone, Default)]
pub struct QuoteRotator {
    index: usize,
}

impl QuoteRotator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> &'static str {
        QUOTES[self.index]
    }

    /// Move to the next quote, wrapping after the last one
    pub fn advance(&mut self) -> &'static str {
        self.index = (self.index + 1) % QUOTES.len();
        self.current()
    }
}
