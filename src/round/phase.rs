//! Round phases.
//!
//! Phases advance strictly forward; the only backward edge is the
//! explicit round reset from `RoundEnd` to `Distribution`.

use serde::{Deserialize, Serialize};

/// The authoritative per-round phase.
///
/// `Setup → Distribution → RevealRuler → RevealPolice → Guessing →
/// RoundEnd`, then `RoundEnd → Distribution` for the next round.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Phase {
    /// Before the first roster has been accepted.
    #[default]
    Setup,
    /// Pass-the-device: each player privately views their role.
    Distribution,
    /// Waiting for the Ruler-holder's public reveal.
    RevealRuler,
    /// Waiting for the Police-holder's public reveal.
    RevealPolice,
    /// The Police-holder selects and confirms a suspect.
    Guessing,
    /// Scores applied; waiting for the next-round action.
    RoundEnd,
}

impl Phase {
    /// Display label, e.g. for a round header.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Phase::Setup => "SETUP",
            Phase::Distribution => "DISTRIBUTION",
            Phase::RevealRuler => "REVEAL RULER",
            Phase::RevealPolice => "REVEAL POLICE",
            Phase::Guessing => "GUESSING",
            Phase::RoundEnd => "ROUND END",
        }
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
