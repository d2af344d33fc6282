//! The engine façade the UI layer drives.
//!
//! Owns the one live round, the stats aggregator, the settings blob, the
//! role catalog and the entropy source. Single-threaded and synchronous:
//! each user action is dispatched, completes, and only then is the next
//! accepted. Nothing outside this type mutates players or score records.

use tracing::info;

use crate::core::{Action, ActionError, ActionKind, GameRng, Player, PlayerId, SetupError};
use crate::roles::{Language, RoleCatalog};
use crate::round::GameRound;
use crate::settings::Settings;
use crate::setup::{validate_roster, PlayerSetup};
use crate::stats::{KeyValueStore, ScoreRecord, SessionStats, StatsAggregator};

/// The game engine: one live session on one shared device.
///
/// ## Example
///
/// ```
/// use royal_court::engine::GameEngine;
/// use royal_court::core::{Action, PlayerId};
/// use royal_court::setup::PlayerSetup;
/// use royal_court::stats::MemoryStore;
///
/// let roster: Vec<PlayerSetup> = ["Asha", "Ravi", "Meera", "Dev"]
///     .iter()
///     .map(|name| PlayerSetup {
///         name: name.to_string(),
///         color: "#dc2626".to_string(),
///         icon: "Crown".to_string(),
///     })
///     .collect();
///
/// let mut engine = GameEngine::with_seed(MemoryStore::new(), 42);
/// engine.start_game(&roster).unwrap();
///
/// // Everyone views their role, then the round opens.
/// for id in PlayerId::all(4) {
///     engine.dispatch(Action::ViewOwnRole(id)).unwrap();
/// }
/// engine.dispatch(Action::FinishDistribution).unwrap();
/// ```
pub struct GameEngine<S: KeyValueStore> {
    catalog: RoleCatalog,
    rng: GameRng,
    round: GameRound,
    stats: StatsAggregator<S>,
    settings: Settings,
}

impl<S: KeyValueStore> GameEngine<S> {
    /// Create an engine over the given store, seeded from OS entropy.
    #[must_use]
    pub fn new(store: S) -> Self {
        Self::with_rng(store, GameRng::from_entropy())
    }

    /// Create an engine with a fixed seed (deterministic deals).
    #[must_use]
    pub fn with_seed(store: S, seed: u64) -> Self {
        Self::with_rng(store, GameRng::seeded(seed))
    }

    fn with_rng(store: S, rng: GameRng) -> Self {
        let settings = Settings::load(&store);
        Self {
            catalog: RoleCatalog::standard(),
            rng,
            round: GameRound::empty(),
            stats: StatsAggregator::new(store),
            settings,
        }
    }

    /// Start a session from a roster.
    ///
    /// Validates the roster, seats the players, deals round 1 and enters
    /// distribution. Replaces any previous session's round wholesale and
    /// resets the session leaderboard baseline.
    pub fn start_game(&mut self, roster: &[PlayerSetup]) -> Result<(), SetupError> {
        validate_roster(roster)?;

        let players: Vec<Player> = roster
            .iter()
            .enumerate()
            .map(|(i, seat)| Player::from_setup(PlayerId::new(i as u8), seat))
            .collect();

        self.round = GameRound::start(players, &self.catalog, &mut self.rng, self.settings.language)
            // validate_roster bounds the count, so the catalog cannot reject it
            .map_err(|err| SetupError::PlayerCount(err.0))?;
        self.stats.begin_session();
        info!(players = roster.len(), "game started");
        Ok(())
    }

    /// Dispatch one user action against the live round.
    ///
    /// When the action resolves the round, the result is committed to the
    /// leaderboard before this returns. Rejected actions change nothing.
    pub fn dispatch(&mut self, action: Action) -> Result<(), ActionError> {
        let outcome = self.round.dispatch(
            action,
            &self.catalog,
            &mut self.rng,
            self.settings.language,
        )?;

        if outcome.is_some() {
            self.stats.commit(self.round.players());
        }
        Ok(())
    }

    /// Read-only snapshot of the live round.
    #[must_use]
    pub fn round(&self) -> &GameRound {
        &self.round
    }

    /// The action kinds legal in the current phase.
    #[must_use]
    pub fn legal_actions(&self) -> Vec<ActionKind> {
        self.round.legal_actions()
    }

    /// The role catalog in use.
    #[must_use]
    pub fn catalog(&self) -> &RoleCatalog {
        &self.catalog
    }

    /// The all-time leaderboard, highest score first.
    #[must_use]
    pub fn all_time(&self) -> Vec<ScoreRecord> {
        self.stats.all_time()
    }

    /// The session leaderboard as of the last resolved round.
    #[must_use]
    pub fn session_leaderboard(&self) -> Vec<SessionStats> {
        self.stats.session_view()
    }

    /// Clear the durable leaderboard and the session view together.
    pub fn reset_stats(&mut self) {
        self.stats.reset();
    }

    /// Current settings.
    #[must_use]
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Update settings and persist them (best-effort).
    pub fn update_settings(&mut self, settings: Settings) {
        self.settings = settings;
        self.settings.save(self.stats.store_mut());
    }

    /// Switch the display language and persist the change.
    pub fn set_language(&mut self, language: Language) {
        let mut settings = self.settings.clone();
        settings.language = language;
        self.update_settings(settings);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::MemoryStore;

    fn roster(count: usize) -> Vec<PlayerSetup> {
        (0..count)
            .map(|i| PlayerSetup {
                name: format!("Player{}", i),
                color: "#dc2626".to_string(),
                icon: "Crown".to_string(),
            })
            .collect()
    }

    #[test]
    fn test_invalid_roster_rejected_before_engine_state_changes() {
        let mut engine = GameEngine::with_seed(MemoryStore::new(), 1);
        let err = engine.start_game(&roster(3)).unwrap_err();
        assert_eq!(err, SetupError::PlayerCount(3));
        assert!(engine.round().players().is_empty());
        assert!(engine.legal_actions().is_empty());
    }

    #[test]
    fn test_start_game_replaces_round_wholesale() {
        let mut engine = GameEngine::with_seed(MemoryStore::new(), 1);
        engine.start_game(&roster(4)).unwrap();
        assert_eq!(engine.round().players().len(), 4);

        engine.start_game(&roster(6)).unwrap();
        assert_eq!(engine.round().players().len(), 6);
        assert_eq!(engine.round().round_number(), 1);
        assert!(engine.round().players().iter().all(|p| p.score == 0));
    }

    #[test]
    fn test_settings_persist_through_store() {
        let mut engine = GameEngine::with_seed(MemoryStore::new(), 1);
        assert_eq!(engine.settings().language, Language::Hindi);

        engine.set_language(Language::English);
        assert_eq!(engine.settings().language, Language::English);

        let raw = engine
            .stats
            .store()
            .load(crate::stats::SETTINGS_KEY)
            .unwrap()
            .unwrap();
        assert!(raw.contains("ENGLISH"));
    }

    #[test]
    fn test_rejected_action_is_noop() {
        let mut engine = GameEngine::with_seed(MemoryStore::new(), 1);
        engine.start_game(&roster(4)).unwrap();

        let err = engine.dispatch(Action::ConfirmAccusation).unwrap_err();
        assert!(matches!(err, ActionError::WrongPhase { .. }));
        assert_eq!(engine.round().round_number(), 1);
    }
}
