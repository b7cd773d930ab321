//! Signed-in session state
//!
//! The session is purely client-side: a [`Profile`] stored under the `user`
//! key. There is no credential and no server to verify it.

use tracing::info;

use crate::Profile;
use crate::store::{Storage, USER_KEY};

/// Owns the current profile and mirrors it to storage
#[derive(Debug)]
pub struct SessionController {
    storage: Storage,
    current: Option<Profile>,
}

impl SessionController {
    /// Load whatever session was persisted last
    pub fn load(storage: Storage) -> Self {
        let current = storage.read(USER_KEY, None);
        Self { storage, current }
    }

    /// Replace the current session with `profile`
    pub fn login(&mut self, profile: Profile) {
        info!(id = %profile.id, name = %profile.name, "Signed in");
        self.storage.write(USER_KEY, &profile);
        self.current = Some(profile);
    }

    /// End the session and forget the stored profile
    pub fn logout(&mut self) {
        if let Some(profile) = self.current.take() {
            info!(id = %profile.id, "Signed out");
        }
        self.storage.remove(USER_KEY);
    }

    pub fn current(&self) -> Option<&Profile> {
        self.current.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.current.is_some()
    }
}
