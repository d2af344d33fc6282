//! The persistence port: an abstract key-value capability.
//!
//! The engine reads and writes exactly two JSON blobs, each under a
//! well-known key. The trait is deliberately minimal: synchronous string
//! get/set/remove with no transactional guarantees, single-device and
//! single-process by construction.

use rustc_hash::FxHashMap;

use crate::core::StoreError;

/// Durable key for the all-time score table.
pub const SCORES_KEY: &str = "royalCourtScores";

/// Durable key for the settings blob.
pub const SETTINGS_KEY: &str = "royalCourtSettings";

/// Abstract key-value persistence capability.
///
/// Implementations are best-effort: a failure leaves durable state
/// unchanged and is reported through [`StoreError`]. Callers at the
/// stats boundary log and absorb these failures.
pub trait KeyValueStore {
    /// Read the value under `key`, `None` if absent.
    fn load(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Write `value` under `key`, replacing any previous value.
    fn save(&mut self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Delete the value under `key`, if any.
    fn remove(&mut self, key: &str) -> Result<(), StoreError>;
}

/// In-memory store: ephemeral, always succeeds.
///
/// The default backend for tests and for running without durable
/// storage attached.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: FxHashMap<String, String>,
}

impl MemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn load(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.get(key).cloned())
    }

    fn save(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        self.entries.remove(key);
        Ok(())
    }
}
