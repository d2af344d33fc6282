//! Error taxonomy.
//!
//! Three families, each absorbed at a different boundary:
//!
//! - [`SetupError`]: invalid roster input, surfaced to the user as a
//!   retryable validation message before the engine starts.
//! - [`ActionError`]: an action illegal for the current phase. Callers
//!   treat the rejection as a no-op; the round state is never modified.
//! - [`StoreError`]: persistence backend failure, absorbed inside the
//!   stats aggregator (logged, never blocks gameplay).
//!
//! [`CatalogError`] exists to keep the role-escalation contract total;
//! validated setup input never triggers it.

use thiserror::Error;

use super::action::ActionKind;
use super::player::PlayerId;
use crate::round::Phase;

/// Roster validation failure. Retryable, raised before the engine starts.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SetupError {
    #[error("supported table size is 4-8 players, got {0}")]
    PlayerCount(usize),
    #[error("player name must be 1-20 characters: {0:?}")]
    NameLength(String),
    #[error("player name may only use letters, digits, space, hyphen, underscore: {0:?}")]
    NameCharset(String),
    #[error("duplicate player name: {0:?}")]
    DuplicateName(String),
}

/// An action rejected by the round machine.
///
/// Rejections leave round state untouched. The UI treats them as
/// ineffective taps, not errors.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ActionError {
    #[error("{action:?} is not legal during {phase:?}")]
    WrongPhase { action: ActionKind, phase: Phase },
    #[error("not every player has viewed their role yet")]
    RevealPending,
    #[error("no player with id {0}")]
    UnknownPlayer(PlayerId),
    #[error("suspect {0} is already publicly revealed")]
    SuspectRevealed(PlayerId),
    #[error("the police-holder cannot accuse themself")]
    SelfAccusation,
    #[error("no suspect selected")]
    NoSuspectSelected,
}

/// No role set defined for the requested table size.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("no role set defined for {0} players (supported: 4-8)")]
pub struct CatalogError(pub usize);

/// Persistence backend failure.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("storage backend failure: {0}")]
pub struct StoreError(pub String);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_setup_error_messages() {
        let err = SetupError::PlayerCount(3);
        assert_eq!(
            err.to_string(),
            "supported table size is 4-8 players, got 3"
        );

        let err = SetupError::DuplicateName("Asha".to_string());
        assert!(err.to_string().contains("Asha"));
    }

    #[test]
    fn test_action_error_names_phase() {
        let err = ActionError::WrongPhase {
            action: ActionKind::ConfirmAccusation,
            phase: Phase::Distribution,
        };
        let msg = err.to_string();
        assert!(msg.contains("ConfirmAccusation"));
        assert!(msg.contains("Distribution"));
    }

    #[test]
    fn test_catalog_error_message() {
        assert_eq!(
            CatalogError(9).to_string(),
            "no role set defined for 9 players (supported: 4-8)"
        );
    }
}
