//! Application controller
//!
//! [`App`] is built once at start-up. It opens the configured storage, seeds
//! demo content and owns one controller per concern. Views borrow the
//! controllers from here instead of reaching into storage themselves.

use anyhow::{Context, Result};
use chrono::Utc;
use tracing::debug;

use crate::config::{Config, StorageBackendKind};
use crate::leaderboard::{load_leaderboard, top_n};
use crate::onboarding::{Answers, assign_challenge, score};
use crate::progress::ProgressController;
use crate::routes::{Route, RouteDecision, guard};
use crate::seed::ensure_seeded;
use crate::session::SessionController;
use crate::store::{FileBackend, MemoryBackend, Storage};
use crate::{BlogPost, LeaderboardEntry, Profile, ProgressRecord, catalogue};

pub struct App {
    config: Config,
    storage: Storage,
    session: SessionController,
    progress: ProgressController,
}

impl App {
    /// Open the storage described by `config` and start the app on it
    pub fn open(config: Config) -> Result<Self> {
        let storage = match config.storage.backend {
            StorageBackendKind::Memory => Storage::new(MemoryBackend::new()),
            StorageBackendKind::File => {
                let dir = config.data_dir();
                let backend = FileBackend::open(&dir)
                    .with_context(|| format!("Failed to open data directory: {}", dir.display()))?;
                Storage::new(backend)
            }
        };
        Ok(Self::with_storage(config, storage))
    }

    /// Start the app on an existing storage handle
    pub fn with_storage(config: Config, storage: Storage) -> Self {
        debug!("Starting app");
        ensure_seeded(&storage);
        let session = SessionController::load(storage.clone());
        let progress = ProgressController::load(storage.clone());
        Self {
            config,
            storage,
            session,
            progress,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn session(&self) -> &SessionController {
        &self.session
    }

    pub fn progress(&self) -> &ProgressController {
        &self.progress
    }

    /// Decide whether `route` may render for the current session
    pub fn navigate(&self, route: Route) -> RouteDecision {
        guard(route, &self.session)
    }

    /// Mock sign-in: log in `profile` and clear any previous progress
    ///
    /// Returns the route to show next (onboarding).
    pub fn sign_in(&mut self, profile: Profile) -> Route {
        self.session.login(profile);
        self.progress.replace(ProgressRecord::default());
        Route::Onboarding
    }

    /// Sign in as the placeholder guest profile
    pub fn sign_in_guest(&mut self) -> Route {
        self.sign_in(Profile::guest(Utc::now()))
    }

    pub fn sign_out(&mut self) {
        self.session.logout();
    }

    /// Score the questionnaire and start the assigned challenge
    ///
    /// Returns `None` (a redirect to login) without a session.
    pub fn complete_onboarding(&mut self, answers: &Answers) -> Option<&ProgressRecord> {
        if let RouteDecision::Redirect(_) = self.navigate(Route::Onboarding) {
            return None;
        }
        let record = assign_challenge(&self.storage, score(answers));
        self.progress.replace(record);
        Some(self.progress.record())
    }

    /// Mark today done; `None` without a session
    pub fn complete_today(&mut self) -> Option<&ProgressRecord> {
        if let RouteDecision::Redirect(_) = self.navigate(Route::Dashboard) {
            return None;
        }
        Some(self.progress.complete_today())
    }

    /// Leaderboard as shown on the dashboard
    pub fn leaderboard(&self) -> Vec<LeaderboardEntry> {
        top_n(
            &load_leaderboard(&self.storage),
            self.config.dashboard.leaderboard_size,
        )
    }

    pub fn blog_posts(&self) -> Vec<BlogPost> {
        catalogue::load_posts(&self.storage)
    }

    /// Current plan length, 0 when none is assigned
    pub fn current_target(&self) -> u32 {
        self.progress.record().target
    }
}
