//! # royal-court
//!
//! Engine for a local, pass-the-device social deduction party game for
//! 4-8 players: secret role assignment, staged public reveals, an
//! accusation, scoring, and a cross-session leaderboard.
//!
//! ## Design Principles
//!
//! 1. **One entry point**: Every user interaction is a command dispatched
//!    through the engine; phase legality is checked in exactly one place.
//!
//! 2. **Injected state**: The role catalog, entropy source and persistence
//!    backend are constructor arguments, never ambient globals. Seed the
//!    RNG for deterministic deals in tests.
//!
//! 3. **Trust the device**: The engine trusts whichever process holds the
//!    single device. Stale UI taps are rejected as no-ops, storage
//!    failures are logged and absorbed, and nothing can terminate a round
//!    in progress.
//!
//! ## Modules
//!
//! - `core`: Player identity, actions, errors, RNG
//! - `roles`: Role catalog and randomized assignment
//! - `round`: Round phases and the action dispatch machine
//! - `scoring`: Accusation resolution
//! - `stats`: All-time leaderboard and session view over a key-value port
//! - `setup`: Roster validation boundary
//! - `settings`: Language and volume blob
//! - `engine`: The façade the UI layer drives

pub mod core;
pub mod engine;
pub mod roles;
pub mod round;
pub mod scoring;
pub mod settings;
pub mod setup;
pub mod stats;

// Re-export commonly used types
pub use crate::core::{
    Action, ActionError, ActionKind, CatalogError, GameRng, Player, PlayerId, SetupError,
    StoreError,
};

pub use crate::engine::GameEngine;

pub use crate::roles::{assign_roles, Language, RoleCatalog, RoleDefinition, RoleHolders, RoleId};

pub use crate::round::{GameRound, Phase};

pub use crate::scoring::{resolve, PlayerDelta, RoundOutcome, THIEF_BONUS};

pub use crate::settings::Settings;

pub use crate::setup::{
    validate_name, validate_roster, PlayerSetup, MAX_PLAYERS, MIN_PLAYERS, PLAYER_COLORS,
    PLAYER_ICONS,
};

pub use crate::stats::{
    KeyValueStore, MemoryStore, ScoreRecord, SessionStats, StatsAggregator, SCORES_KEY,
    SETTINGS_KEY,
};
