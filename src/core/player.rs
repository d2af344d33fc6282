//! Player identity and per-session player state.
//!
//! ## PlayerId
//!
//! Type-safe player identifier, stable for the lifetime of a session.
//! Indices are 0-based and assigned in roster order at setup.
//!
//! ## Player
//!
//! The per-session record for one seat at the table: validated name,
//! cosmetic attributes, the currently assigned role, cumulative score
//! counters, and the two per-round reveal flags.

use serde::{Deserialize, Serialize};

use crate::roles::RoleId;
use crate::setup::PlayerSetup;

/// Player identifier for a 4-8 player table.
///
/// Identity carries across rounds within a session; roles are redrawn
/// each round but `PlayerId` never changes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw seat index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterate over all player IDs for a table of `player_count` seats.
    ///
    /// ```
    /// use royal_court::core::PlayerId;
    ///
    /// let players: Vec<_> = PlayerId::all(4).collect();
    /// assert_eq!(players.len(), 4);
    /// assert_eq!(players[0], PlayerId::new(0));
    /// ```
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (0..player_count as u8).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// One seat at the table.
///
/// Created once at session start from validated setup input. Only `role`
/// and the two reveal flags reset when roles are redrawn; `score`,
/// `rounds_played` and `wins` are monotonically non-decreasing for the
/// session's lifetime.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    /// Stable identity within the session.
    pub id: PlayerId,

    /// Display name, validated at the setup boundary (never re-checked here).
    pub name: String,

    /// Cosmetic card color chosen at setup.
    pub color: String,

    /// Cosmetic icon chosen at setup.
    pub icon: String,

    /// Role for the current round. `None` only before the first assignment.
    pub role: Option<RoleId>,

    /// Session-cumulative score.
    pub score: u32,

    /// Session-cumulative rounds played.
    pub rounds_played: u32,

    /// Session-cumulative round wins.
    pub wins: u32,

    /// Has this player privately viewed their role this round?
    pub self_revealed: bool,

    /// Has the role been shown to the whole table this round?
    pub publicly_revealed: bool,
}

impl Player {
    /// Create a fresh player from validated setup input.
    #[must_use]
    pub fn from_setup(id: PlayerId, setup: &PlayerSetup) -> Self {
        Self {
            id,
            name: setup.name.clone(),
            color: setup.color.clone(),
            icon: setup.icon.clone(),
            role: None,
            score: 0,
            rounds_played: 0,
            wins: 0,
            self_revealed: false,
            publicly_revealed: false,
        }
    }

    /// Clear the per-round state ahead of a role redraw.
    ///
    /// Cumulative counters are untouched.
    pub fn clear_round_state(&mut self) {
        self.role = None;
        self.self_revealed = false;
        self.publicly_revealed = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup(name: &str) -> PlayerSetup {
        PlayerSetup {
            name: name.to_string(),
            color: "#dc2626".to_string(),
            icon: "Crown".to_string(),
        }
    }

    #[test]
    fn test_player_id_basics() {
        let p0 = PlayerId::new(0);
        let p1 = PlayerId::new(1);

        assert_eq!(p0.index(), 0);
        assert_eq!(p1.index(), 1);
        assert_eq!(format!("{}", p0), "Player 0");
    }

    #[test]
    fn test_player_id_all() {
        let players: Vec<_> = PlayerId::all(5).collect();
        assert_eq!(players.len(), 5);
        assert_eq!(players[0], PlayerId::new(0));
        assert_eq!(players[4], PlayerId::new(4));
    }

    #[test]
    fn test_from_setup_starts_clean() {
        let player = Player::from_setup(PlayerId::new(2), &setup("Asha"));

        assert_eq!(player.name, "Asha");
        assert_eq!(player.score, 0);
        assert_eq!(player.rounds_played, 0);
        assert_eq!(player.wins, 0);
        assert!(player.role.is_none());
        assert!(!player.self_revealed);
        assert!(!player.publicly_revealed);
    }

    #[test]
    fn test_clear_round_state_keeps_counters() {
        let mut player = Player::from_setup(PlayerId::new(0), &setup("Ravi"));
        player.role = Some(RoleId::Thief);
        player.score = 800;
        player.rounds_played = 2;
        player.wins = 1;
        player.self_revealed = true;
        player.publicly_revealed = true;

        player.clear_round_state();

        assert!(player.role.is_none());
        assert!(!player.self_revealed);
        assert!(!player.publicly_revealed);
        assert_eq!(player.score, 800);
        assert_eq!(player.rounds_played, 2);
        assert_eq!(player.wins, 1);
    }

    #[test]
    fn test_player_serialization() {
        let player = Player::from_setup(PlayerId::new(1), &setup("Meera"));
        let json = serde_json::to_string(&player).unwrap();
        let deserialized: Player = serde_json::from_str(&json).unwrap();
        assert_eq!(player, deserialized);
    }
}
