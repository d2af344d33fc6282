//! Action representation: the command enum the UI dispatches.
//!
//! Every user interaction that mutates round state travels through exactly
//! one entry point, `GameRound::dispatch`, as one of these commands. The
//! round machine performs the phase check; UI code never needs to guard
//! phases itself.
//!
//! `ActionKind` is the payload-free discriminant, used to describe which
//! actions are legal in the current phase.

use serde::{Deserialize, Serialize};

use super::player::PlayerId;

/// A user command against the current round.
///
/// ## Example
///
/// ```
/// use royal_court::core::{Action, ActionKind, PlayerId};
///
/// let view = Action::ViewOwnRole(PlayerId::new(2));
/// assert_eq!(view.kind(), ActionKind::ViewOwnRole);
///
/// let confirm = Action::ConfirmAccusation;
/// assert_eq!(confirm.kind(), ActionKind::ConfirmAccusation);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// A player privately views their own role (distribution phase).
    ViewOwnRole(PlayerId),
    /// Close distribution once every player has viewed their role.
    FinishDistribution,
    /// The Ruler-holder reveals themself to the table.
    RevealRuler,
    /// The Police-holder reveals themself to the table.
    RevealPolice,
    /// Tentatively mark a suspect (guessing phase, replaceable).
    SelectSuspect(PlayerId),
    /// Commit the tentative suspect and resolve the round.
    ConfirmAccusation,
    /// Redraw roles and start the next round.
    NextRound,
}

impl Action {
    /// The payload-free discriminant of this action.
    #[must_use]
    pub fn kind(&self) -> ActionKind {
        match self {
            Action::ViewOwnRole(_) => ActionKind::ViewOwnRole,
            Action::FinishDistribution => ActionKind::FinishDistribution,
            Action::RevealRuler => ActionKind::RevealRuler,
            Action::RevealPolice => ActionKind::RevealPolice,
            Action::SelectSuspect(_) => ActionKind::SelectSuspect,
            Action::ConfirmAccusation => ActionKind::ConfirmAccusation,
            Action::NextRound => ActionKind::NextRound,
        }
    }
}

/// The kind of an [`Action`] without its payload.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActionKind {
    ViewOwnRole,
    FinishDistribution,
    RevealRuler,
    RevealPolice,
    SelectSuspect,
    ConfirmAccusation,
    NextRound,
}
