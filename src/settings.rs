//! The settings blob: language and volume levels.
//!
//! The engine only consumes `language`; the volume fields are presentation
//! payload it round-trips for the audio layer. Stored as one JSON blob
//! under a stable key, next to the score table.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::roles::Language;
use crate::stats::{KeyValueStore, SETTINGS_KEY};

/// Persisted user settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    pub language: Language,
    /// 0.0 to 1.0.
    pub master_volume: f32,
    /// 0.0 to 1.0.
    pub sfx_volume: f32,
    /// 0.0 to 1.0.
    pub music_volume: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            language: Language::Hindi,
            master_volume: 0.5,
            sfx_volume: 1.0,
            music_volume: 0.5,
        }
    }
}

impl Settings {
    /// Load settings from the store; absent or corrupt data yields
    /// defaults.
    #[must_use]
    pub fn load(store: &impl KeyValueStore) -> Self {
        match store.load(SETTINGS_KEY) {
            Ok(Some(raw)) => serde_json::from_str(&raw).unwrap_or_else(|err| {
                warn!(%err, "corrupt settings blob, using defaults");
                Self::default()
            }),
            Ok(None) => Self::default(),
            Err(err) => {
                warn!(%err, "settings unreadable, using defaults");
                Self::default()
            }
        }
    }

    /// Best-effort save; failure is logged and ignored.
    pub fn save(&self, store: &mut impl KeyValueStore) {
        let raw = match serde_json::to_string(self) {
            Ok(raw) => raw,
            Err(err) => {
                warn!(%err, "settings failed to serialize");
                return;
            }
        };
        if let Err(err) = store.save(SETTINGS_KEY, &raw) {
            warn!(%err, "settings write failed");
        }
    }
}
