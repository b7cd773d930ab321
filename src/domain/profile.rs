use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Base URL for generated initials avatars
const AVATAR_BASE_URL: &str = "https://api.dicebear.com/8.x/initials/svg";

/// Identity of a signed-in visitor
///
/// There is no credential behind a profile; it exists only so views can greet
/// the visitor and guard the pages that need a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    /// Opaque id generated at sign-in (`u_<unix millis>`)
    pub id: String,
    pub name: String,
    pub email: String,
    /// Avatar image URL, derived from the name
    pub avatar: String,
}

impl Profile {
    /// Create a profile signed in at `now`
    pub fn new(name: impl Into<String>, email: impl Into<String>, now: DateTime<Utc>) -> Self {
        let name = name.into();
        Self {
            id: format!("u_{}", now.timestamp_millis()),
            avatar: avatar_url(&name),
            name,
            email: email.into(),
        }
    }

    /// The placeholder profile used by the mock "Continue with Google" sign-in
    pub fn guest(now: DateTime<Utc>) -> Self {
        Self::new("Guest", "guest@example.com", now)
    }
}

/// Initials avatar seeded by the display name
pub fn avatar_url(name: &str) -> String {
    format!("{}?seed={}", AVATAR_BASE_URL, urlencoding::encode(name))
}
