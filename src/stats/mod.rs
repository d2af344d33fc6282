//! Cross-session statistics: the durable all-time leaderboard and the
//! in-memory session view.
//!
//! Persistence is an abstract key-value capability ([`KeyValueStore`]);
//! the aggregator never assumes anything about the backing medium beyond
//! best-effort synchronous string reads and writes. Storage failures are
//! logged and absorbed here; they never block round progression.

pub mod aggregator;
pub mod record;
pub mod store;

pub use aggregator::{SessionStats, StatsAggregator};
pub use record::ScoreRecord;
pub use store::{KeyValueStore, MemoryStore, SCORES_KEY, SETTINGS_KEY};
