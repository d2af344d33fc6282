//! Merging resolved rounds into the durable leaderboard.
//!
//! After each round the aggregator diffs every player's session-cumulative
//! counters against the snapshot taken at the *previous* commit, applies
//! the difference to the durable per-name record, then replaces the
//! snapshot with the current cumulatives. The durable `totalScore` is
//! therefore built from successive diffs rather than recomputed from an
//! independent source of truth.
//!
//! Known property of name-keyed identity, preserved deliberately: two
//! different people reusing a display name across sessions on the same
//! device have their histories merged into one record.

use chrono::{DateTime, Utc};
use rustc_hash::FxHashMap;
use tracing::{debug, error, warn};

use super::record::ScoreRecord;
use super::store::{KeyValueStore, SCORES_KEY};
use crate::core::Player;

/// One name's entry in the in-memory session view.
///
/// Holds the session-cumulative counters as of the last commit; this is
/// both the session leaderboard and the prior snapshot the next commit
/// diffs against.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionStats {
    pub name: String,
    pub rounds_played: u32,
    pub total_score: u32,
    pub wins: u32,
    pub last_played: DateTime<Utc>,
}

/// Stateful bridge between resolved rounds and durable storage.
pub struct StatsAggregator<S: KeyValueStore> {
    store: S,
    session: FxHashMap<String, SessionStats>,
}

impl<S: KeyValueStore> StatsAggregator<S> {
    /// Create an aggregator over the given store with an empty session.
    #[must_use]
    pub fn new(store: S) -> Self {
        Self {
            store,
            session: FxHashMap::default(),
        }
    }

    /// Access the underlying store (settings share the same backend).
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Mutable access to the underlying store.
    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    /// Merge a just-resolved round into the durable table.
    ///
    /// For each player: rounds +1; score incremented by the diff between
    /// the player's cumulative session score and the prior snapshot entry
    /// (the whole cumulative score if the name has no snapshot entry);
    /// wins +1 iff the session win count grew. Names absent from the
    /// durable table are seeded directly from the session cumulatives
    /// with one round played.
    ///
    /// The whole table is written back in one overwrite. Storage failure
    /// is logged and absorbed; the session view is refreshed either way.
    pub fn commit(&mut self, players: &[Player]) {
        let now = Utc::now();
        let mut table = self.load_table();

        for player in players {
            let prior = self.session.get(&player.name);
            let prior_score = prior.map_or(0, |s| s.total_score);
            let prior_wins = prior.map_or(0, |s| s.wins);

            match table.iter_mut().find(|r| r.name == player.name) {
                Some(record) => {
                    record.rounds_played += 1;
                    record.total_score += player.score.saturating_sub(prior_score);
                    if player.wins > prior_wins {
                        record.wins += 1;
                    }
                    record.last_played = now;
                }
                None => {
                    table.push(ScoreRecord {
                        name: player.name.clone(),
                        rounds_played: 1,
                        total_score: player.score,
                        wins: player.wins,
                        last_played: now,
                    });
                }
            }
        }

        self.save_table(&table);

        // The snapshot the next commit will diff against.
        self.session = players
            .iter()
            .map(|p| {
                (
                    p.name.clone(),
                    SessionStats {
                        name: p.name.clone(),
                        rounds_played: p.rounds_played,
                        total_score: p.score,
                        wins: p.wins,
                        last_played: now,
                    },
                )
            })
            .collect();
        debug!(players = players.len(), "round committed to leaderboard");
    }

    /// The all-time leaderboard, highest total score first.
    #[must_use]
    pub fn all_time(&self) -> Vec<ScoreRecord> {
        let mut table = self.load_table();
        table.sort_by(|a, b| b.total_score.cmp(&a.total_score));
        table
    }

    /// The session view as of the last commit, highest total score first.
    #[must_use]
    pub fn session_view(&self) -> Vec<SessionStats> {
        let mut view: Vec<_> = self.session.values().cloned().collect();
        view.sort_by(|a, b| b.total_score.cmp(&a.total_score));
        view
    }

    /// Forget the session snapshot without touching durable state.
    ///
    /// Called when a new session starts: the next commit must diff
    /// against the new session's counters, not a previous table's.
    pub fn begin_session(&mut self) {
        self.session.clear();
    }

    /// Full reset: the durable table and the session snapshot disappear
    /// together.
    pub fn reset(&mut self) {
        if let Err(err) = self.store.remove(SCORES_KEY) {
            error!(%err, "failed to clear durable score table");
        }
        self.session.clear();
    }

    /// Load the durable table. Absent or corrupt data is an empty table,
    /// never a fatal condition.
    fn load_table(&self) -> Vec<ScoreRecord> {
        match self.store.load(SCORES_KEY) {
            Ok(Some(raw)) => match serde_json::from_str(&raw) {
                Ok(table) => table,
                Err(err) => {
                    warn!(%err, "corrupt score table, treating as empty");
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(err) => {
                warn!(%err, "score table unreadable, treating as empty");
                Vec::new()
            }
        }
    }

    /// Best-effort whole-table overwrite.
    fn save_table(&mut self, table: &[ScoreRecord]) {
        let raw = match serde_json::to_string(table) {
            Ok(raw) => raw,
            Err(err) => {
                error!(%err, "score table failed to serialize");
                return;
            }
        };
        if let Err(err) = self.store.save(SCORES_KEY, &raw) {
            error!(%err, "score table write failed, durable state unchanged");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{PlayerId, StoreError};
    use crate::stats::MemoryStore;

    fn player(name: &str, score: u32, rounds: u32, wins: u32) -> Player {
        Player {
            id: PlayerId::new(0),
            name: name.to_string(),
            color: String::new(),
            icon: String::new(),
            role: None,
            score,
            rounds_played: rounds,
            wins,
            self_revealed: false,
            publicly_revealed: false,
        }
    }

    #[test]
    fn test_first_commit_seeds_records() {
        let mut agg = StatsAggregator::new(MemoryStore::new());
        agg.commit(&[player("Asha", 800, 1, 1), player("Ravi", 0, 1, 0)]);

        let table = agg.all_time();
        assert_eq!(table.len(), 2);
        assert_eq!(table[0].name, "Asha");
        assert_eq!(table[0].total_score, 800);
        assert_eq!(table[0].rounds_played, 1);
        assert_eq!(table[0].wins, 1);
        assert_eq!(table[1].total_score, 0);
    }

    #[test]
    fn test_successive_commits_apply_diffs() {
        let mut agg = StatsAggregator::new(MemoryStore::new());

        // Round 1: 0 -> 800. Round 2: 800 -> 1600.
        agg.commit(&[player("Asha", 800, 1, 1)]);
        agg.commit(&[player("Asha", 1600, 2, 2)]);

        let table = agg.all_time();
        assert_eq!(table.len(), 1);
        assert_eq!(table[0].total_score, 1600, "diffs of 800 + 800, not 800 + 1600");
        assert_eq!(table[0].rounds_played, 2);
        assert_eq!(table[0].wins, 2);
    }

    #[test]
    fn test_win_counts_only_when_session_wins_grow() {
        let mut agg = StatsAggregator::new(MemoryStore::new());

        agg.commit(&[player("Asha", 800, 1, 1)]);
        // Lost round: score and wins unchanged, rounds advanced.
        agg.commit(&[player("Asha", 800, 2, 1)]);

        let table = agg.all_time();
        assert_eq!(table[0].wins, 1);
        assert_eq!(table[0].rounds_played, 2);
        assert_eq!(table[0].total_score, 800);
    }

    #[test]
    fn test_existing_record_from_prior_session_gets_diffed_increments() {
        let mut store = MemoryStore::new();
        let prior = vec![ScoreRecord {
            name: "Asha".to_string(),
            rounds_played: 10,
            total_score: 5000,
            wins: 4,
            last_played: Utc::now(),
        }];
        store
            .save(SCORES_KEY, &serde_json::to_string(&prior).unwrap())
            .unwrap();

        let mut agg = StatsAggregator::new(store);
        // New session, first round: no snapshot entry, so the whole
        // session score (800) is added to the prior 5000.
        agg.commit(&[player("Asha", 800, 1, 1)]);

        let table = agg.all_time();
        assert_eq!(table[0].total_score, 5800);
        assert_eq!(table[0].rounds_played, 11);
        assert_eq!(table[0].wins, 5);
    }

    #[test]
    fn test_corrupt_table_treated_as_empty() {
        let mut store = MemoryStore::new();
        store.save(SCORES_KEY, "not valid json {").unwrap();

        let mut agg = StatsAggregator::new(store);
        assert!(agg.all_time().is_empty());

        agg.commit(&[player("Asha", 800, 1, 1)]);
        let table = agg.all_time();
        assert_eq!(table.len(), 1);
        assert_eq!(table[0].total_score, 800);
    }

    #[test]
    fn test_session_view_reflects_last_commit() {
        let mut agg = StatsAggregator::new(MemoryStore::new());
        agg.commit(&[player("Asha", 800, 1, 1), player("Ravi", 2000, 1, 1)]);

        let view = agg.session_view();
        assert_eq!(view.len(), 2);
        assert_eq!(view[0].name, "Ravi", "sorted by score descending");
        assert_eq!(view[0].total_score, 2000);
        assert_eq!(view[1].total_score, 800);
    }

    #[test]
    fn test_reset_clears_both_views() {
        let mut agg = StatsAggregator::new(MemoryStore::new());
        agg.commit(&[player("Asha", 800, 1, 1)]);
        assert!(!agg.all_time().is_empty());
        assert!(!agg.session_view().is_empty());

        agg.reset();
        assert!(agg.all_time().is_empty());
        assert!(agg.session_view().is_empty());
    }

    #[test]
    fn test_commit_after_reset_creates_fresh_record() {
        let mut agg = StatsAggregator::new(MemoryStore::new());
        agg.commit(&[player("Asha", 800, 1, 1)]);
        agg.reset();

        // Previously-seen name starts over rather than resuming old totals.
        agg.commit(&[player("Asha", 400, 2, 1)]);
        let table = agg.all_time();
        assert_eq!(table.len(), 1);
        assert_eq!(table[0].total_score, 400);
        assert_eq!(table[0].rounds_played, 1);
    }

    #[test]
    fn test_begin_session_resets_diff_baseline() {
        let mut agg = StatsAggregator::new(MemoryStore::new());
        agg.commit(&[player("Asha", 800, 1, 1)]);

        // New session: same name, counters restart from zero.
        agg.begin_session();
        agg.commit(&[player("Asha", 2000, 1, 1)]);

        let table = agg.all_time();
        assert_eq!(table[0].total_score, 2800);
        assert_eq!(table[0].rounds_played, 2);
        assert_eq!(table[0].wins, 2);
    }

    /// Store that fails every operation.
    struct BrokenStore;

    impl KeyValueStore for BrokenStore {
        fn load(&self, _key: &str) -> Result<Option<String>, StoreError> {
            Err(StoreError("disk on fire".to_string()))
        }
        fn save(&mut self, _key: &str, _value: &str) -> Result<(), StoreError> {
            Err(StoreError("disk on fire".to_string()))
        }
        fn remove(&mut self, _key: &str) -> Result<(), StoreError> {
            Err(StoreError("disk on fire".to_string()))
        }
    }

    #[test]
    fn test_storage_failure_never_blocks_commit() {
        let mut agg = StatsAggregator::new(BrokenStore);

        agg.commit(&[player("Asha", 800, 1, 1)]);

        // Durable reads fall back to empty; the session view still advanced.
        assert!(agg.all_time().is_empty());
        let view = agg.session_view();
        assert_eq!(view.len(), 1);
        assert_eq!(view[0].total_score, 800);

        agg.reset();
        assert!(agg.session_view().is_empty());
    }
}
