//! Local key-value persistence
//!
//! Every piece of app state (session, progress, leaderboard, blog posts) lives
//! under its own key in a [`KeyValueBackend`]. The [`Storage`] adapter is the
//! only thing that talks to a backend: it serializes values as JSON and never
//! lets a persistence failure reach its caller.
//!
//! ```text
//! SessionController ─┐
//! ProgressController ├──► Storage ──► KeyValueBackend
//! seed / onboarding ─┘                 ├─ MemoryBackend
//!                                      └─ FileBackend (~/.reconnect/data/*.json)
//! ```

mod file;
mod memory;

pub use file::FileBackend;
pub use memory::MemoryBackend;

use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, warn};

/// Key holding the signed-in [`Profile`](crate::Profile)
pub const USER_KEY: &str = "user";
/// Key holding the [`ProgressRecord`](crate::ProgressRecord)
pub const PROGRESS_KEY: &str = "progress";
/// Key holding the seeded leaderboard entries
pub const LEADERBOARD_KEY: &str = "leaderboard";
/// Key holding the seeded blog posts
pub const BLOG_POSTS_KEY: &str = "blogPosts";

/// Errors raised by backends and by JSON (de)serialization
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("I/O error for key '{key}': {source}")]
    Io {
        key: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialize value for key '{key}': {source}")]
    Serialize {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to parse value for key '{key}': {source}")]
    Parse {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Storage quota exceeded: {needed} bytes needed, limit is {limit}")]
    QuotaExceeded { needed: usize, limit: usize },

    #[error("Invalid storage key: {0:?}")]
    InvalidKey(String),
}

/// Raw string storage, the native stand-in for browser `localStorage`
pub trait KeyValueBackend: Send + Sync {
    /// Look up the raw value stored under `key`
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Store `value` under `key`, replacing any previous value
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Delete `key`. Removing a missing key is not an error.
    fn remove(&self, key: &str) -> Result<(), StoreError>;
}

/// Result of a write that the adapter refused to propagate
#[derive(Debug)]
pub enum WriteOutcome {
    /// The backend accepted the value
    Stored,
    /// The backend rejected the value; in-memory state stays authoritative
    Dropped(StoreError),
}

impl WriteOutcome {
    pub fn is_stored(&self) -> bool {
        matches!(self, Self::Stored)
    }

    /// The suppressed error, if the write was dropped
    pub fn error(&self) -> Option<&StoreError> {
        match self {
            Self::Stored => None,
            Self::Dropped(e) => Some(e),
        }
    }
}

/// JSON adapter over a backend that degrades to defaults instead of failing
///
/// Cloning is cheap and every clone shares the same backend.
#[derive(Clone)]
pub struct Storage {
    backend: Arc<dyn KeyValueBackend>,
}

impl Storage {
    pub fn new(backend: impl KeyValueBackend + 'static) -> Self {
        Self {
            backend: Arc::new(backend),
        }
    }

    /// Ephemeral storage that forgets everything when dropped
    pub fn in_memory() -> Self {
        Self::new(MemoryBackend::new())
    }

    /// Read `key`, returning `fallback` when it is missing or unreadable
    pub fn read<T: DeserializeOwned>(&self, key: &str, fallback: T) -> T {
        match self.try_read(key) {
            Ok(Some(value)) => value,
            Ok(None) => {
                debug!(key, "No stored value, using fallback");
                fallback
            }
            Err(e) => {
                warn!(key, error = %e, "Unreadable stored value, using fallback");
                fallback
            }
        }
    }

    /// Typed form of [`Storage::read`] that surfaces the failure instead of hiding it
    ///
    /// An empty stored string counts as absent.
    pub fn try_read<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StoreError> {
        let Some(raw) = self.backend.get(key)? else {
            return Ok(None);
        };
        if raw.is_empty() {
            return Ok(None);
        }
        serde_json::from_str(&raw)
            .map(Some)
            .map_err(|source| StoreError::Parse {
                key: key.to_string(),
                source,
            })
    }

    /// Whether `key` holds a parseable JSON value that is not falsy
    ///
    /// `null`, `false`, `0` and `""` count as absent. Empty arrays and objects
    /// are present.
    pub fn contains(&self, key: &str) -> bool {
        match self.try_read::<Value>(key) {
            Ok(Some(value)) => !is_falsy(&value),
            _ => false,
        }
    }

    /// Serialize and store `value`; failures are logged and reported, never raised
    pub fn write<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> WriteOutcome {
        let result = serde_json::to_string(value)
            .map_err(|source| StoreError::Serialize {
                key: key.to_string(),
                source,
            })
            .and_then(|raw| self.backend.set(key, &raw));

        match result {
            Ok(()) => {
                debug!(key, "Stored value");
                WriteOutcome::Stored
            }
            Err(e) => {
                warn!(key, error = %e, "Dropping failed write");
                WriteOutcome::Dropped(e)
            }
        }
    }

    /// Delete `key`; a no-op when it is absent
    pub fn remove(&self, key: &str) -> WriteOutcome {
        match self.backend.remove(key) {
            Ok(()) => WriteOutcome::Stored,
            Err(e) => {
                warn!(key, error = %e, "Dropping failed remove");
                WriteOutcome::Dropped(e)
            }
        }
    }
}

impl std::fmt::Debug for Storage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Storage").finish_non_exhaustive()
    }
}

/// `null`, `false`, zero and the empty string
fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(flag) => !flag,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(_) | Value::Object(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ProgressRecord;
    use serde_json::json;

    /// Backend whose every operation fails, like a disabled `localStorage`
    struct BrokenBackend;

    impl KeyValueBackend for BrokenBackend {
        fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
            Err(StoreError::InvalidKey(key.to_string()))
        }

        fn set(&self, key: &str, _value: &str) -> Result<(), StoreError> {
            Err(StoreError::InvalidKey(key.to_string()))
        }

        fn remove(&self, key: &str) -> Result<(), StoreError> {
            Err(StoreError::InvalidKey(key.to_string()))
        }
    }

    #[test]
    fn test_write_then_read_returns_value() {
        let storage = Storage::in_memory();
        let record = ProgressRecord {
            days: 3,
            target: 14,
            daily: vec![20, 0, 0, 0, 0, 0, 0],
        };

        assert!(storage.write(PROGRESS_KEY, &record).is_stored());
        assert_eq!(storage.read(PROGRESS_KEY, ProgressRecord::default()), record);
    }

    #[test]
    fn test_missing_key_returns_fallback() {
        let storage = Storage::in_memory();
        assert_eq!(storage.read("nothing-here", 42u32), 42);
        assert!(storage.try_read::<u32>("nothing-here").unwrap().is_none());
    }

    #[test]
    fn test_corrupt_value_returns_fallback() {
        let backend = MemoryBackend::new();
        backend.set(PROGRESS_KEY, "{not json").unwrap();
        let storage = Storage::new(backend);

        let record = storage.read(PROGRESS_KEY, ProgressRecord::default());
        assert_eq!(record, ProgressRecord::default());
        assert!(matches!(
            storage.try_read::<ProgressRecord>(PROGRESS_KEY),
            Err(StoreError::Parse { .. })
        ));
    }

    #[test]
    fn test_wrong_shape_returns_fallback() {
        let storage = Storage::in_memory();
        storage.write(PROGRESS_KEY, "a string, not a record");
        assert_eq!(
            storage.read(PROGRESS_KEY, ProgressRecord::default()),
            ProgressRecord::default()
        );
    }

    #[test]
    fn test_empty_string_counts_as_absent() {
        let backend = MemoryBackend::new();
        backend.set(USER_KEY, "").unwrap();
        let storage = Storage::new(backend);

        assert!(!storage.contains(USER_KEY));
        assert_eq!(storage.read(USER_KEY, 7u8), 7);
    }

    #[test]
    fn test_null_is_not_contained() {
        let storage = Storage::in_memory();
        storage.write(LEADERBOARD_KEY, &serde_json::Value::Null);
        assert!(!storage.contains(LEADERBOARD_KEY));

        storage.write(LEADERBOARD_KEY, &Vec::<u8>::new());
        assert!(storage.contains(LEADERBOARD_KEY));
    }

    #[test]
    fn test_falsy_values_are_not_contained() {
        let storage = Storage::in_memory();
        for value in [json!(false), json!(0), json!(0.0), json!("")] {
            storage.write(LEADERBOARD_KEY, &value);
            assert!(!storage.contains(LEADERBOARD_KEY), "{value} counted as present");
        }

        for value in [json!(true), json!(1), json!("0"), json!({})] {
            storage.write(LEADERBOARD_KEY, &value);
            assert!(storage.contains(LEADERBOARD_KEY), "{value} counted as absent");
        }
    }

    #[test]
    fn test_broken_backend_never_raises() {
        let storage = Storage::new(BrokenBackend);

        assert_eq!(storage.read(USER_KEY, 5i32), 5);
        assert!(!storage.contains(USER_KEY));

        let outcome = storage.write(USER_KEY, &1);
        assert!(!outcome.is_stored());
        assert!(outcome.error().is_some());

        assert!(!storage.remove(USER_KEY).is_stored());
    }

    #[test]
    fn test_remove_missing_key_is_noop() {
        let storage = Storage::in_memory();
        assert!(storage.remove("ghost").is_stored());
    }

    #[test]
    fn test_clones_share_backend() {
        let storage = Storage::in_memory();
        let other = storage.clone();
        storage.write(USER_KEY, "shared");
        assert_eq!(other.read(USER_KEY, String::new()), "shared");
    }
}
