//! The live round context.
//!
//! Exactly one `GameRound` is live per session. It is replaced wholesale
//! when a session starts; within a round only the phase, reveal flags,
//! tentative suspect and status message change. All mutation goes through
//! the dispatch machine; outside the engine the round is read-only.

use serde::{Deserialize, Serialize};

use crate::core::{Player, PlayerId};
use crate::round::Phase;

/// Snapshot of one round in progress.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRound {
    pub(crate) phase: Phase,
    pub(crate) players: Vec<Player>,
    pub(crate) round_number: u32,
    pub(crate) ruler_id: Option<PlayerId>,
    pub(crate) police_id: Option<PlayerId>,
    pub(crate) thief_id: Option<PlayerId>,
    pub(crate) message: String,
    pub(crate) selected_suspect: Option<PlayerId>,
}

impl GameRound {
    /// The empty pre-session round (phase `Setup`, no players).
    #[must_use]
    pub fn empty() -> Self {
        Self {
            round_number: 1,
            ..Self::default()
        }
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Players in seat order.
    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Look up a player by identity.
    #[must_use]
    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| p.id == id)
    }

    /// Round number, starting at 1.
    #[must_use]
    pub fn round_number(&self) -> u32 {
        self.round_number
    }

    /// The Ruler-holder this round.
    #[must_use]
    pub fn ruler_id(&self) -> Option<PlayerId> {
        self.ruler_id
    }

    /// The Police-holder this round.
    #[must_use]
    pub fn police_id(&self) -> Option<PlayerId> {
        self.police_id
    }

    /// The Thief-holder this round.
    #[must_use]
    pub fn thief_id(&self) -> Option<PlayerId> {
        self.thief_id
    }

    /// Human-readable status message for the current phase.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The tentative suspect, if one is selected (guessing phase only).
    #[must_use]
    pub fn selected_suspect(&self) -> Option<PlayerId> {
        self.selected_suspect
    }

    /// Have all players privately viewed their role?
    #[must_use]
    pub fn all_self_revealed(&self) -> bool {
        self.players.iter().all(|p| p.self_revealed)
    }

    pub(crate) fn player_mut(&mut self, id: PlayerId) -> Option<&mut Player> {
        self.players.iter_mut().find(|p| p.id == id)
    }
}
