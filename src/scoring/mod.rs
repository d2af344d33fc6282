//! Accusation resolution.
//!
//! A pure function from the round's role assignment and the confirmed
//! accusation to per-player deltas. Called exactly once per round, at the
//! transition to round end; the round machine owns that invariant.
//!
//! ## Rule table
//!
//! | Role this round | accusation correct      | accusation incorrect    |
//! |-----------------|-------------------------|-------------------------|
//! | Thief           | +0, no win              | +800 (bonus), win       |
//! | Police          | +800, win               | +0, no win              |
//! | any other       | +catalog points, win iff points > 0 (either way)  |

use crate::core::{Player, PlayerId};
use crate::roles::RoleCatalog;

/// Points the Thief steals when the accusation misses, and the Police's
/// reward when it lands.
pub const THIEF_BONUS: u32 = 800;

/// One player's share of a resolved round.
///
/// The per-round counter always advances by one; that increment is
/// implicit rather than carried per delta.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlayerDelta {
    pub player: PlayerId,
    /// Points gained this round (never negative).
    pub score: u32,
    /// Whether this round counts as a win for the player.
    pub win: bool,
}

/// The resolved outcome of an accusation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoundOutcome {
    /// Did the accusation land on the Thief?
    pub is_correct: bool,
    /// The confirmed suspect.
    pub accused: PlayerId,
    /// Per-player deltas, in player order.
    pub deltas: Vec<PlayerDelta>,
}

impl RoundOutcome {
    /// Delta for a specific player, if present.
    #[must_use]
    pub fn delta_for(&self, player: PlayerId) -> Option<&PlayerDelta> {
        self.deltas.iter().find(|d| d.player == player)
    }
}

/// Resolve a confirmed accusation into per-player deltas.
///
/// Pure: identical inputs yield identical outputs. Correctness is solely
/// `accused == thief`; bystander deltas are unaffected by it.
#[must_use]
pub fn resolve(
    players: &[Player],
    thief: PlayerId,
    police: PlayerId,
    accused: PlayerId,
    catalog: &RoleCatalog,
) -> RoundOutcome {
    let is_correct = accused == thief;

    let deltas = players
        .iter()
        .map(|p| {
            let (score, win) = if p.id == thief {
                if is_correct {
                    (0, false)
                } else {
                    (THIEF_BONUS, true)
                }
            } else if p.id == police {
                if is_correct {
                    (THIEF_BONUS, true)
                } else {
                    (0, false)
                }
            } else {
                // Bystanders keep their catalog value regardless of the
                // outcome. Unassigned seats cannot occur once the round is
                // past distribution; they score nothing.
                let points = p.role.map_or(0, |role| catalog.points(role));
                (points, points > 0)
            };
            PlayerDelta {
                player: p.id,
                score,
                win,
            }
        })
        .collect();

    RoundOutcome {
        is_correct,
        accused,
        deltas,
    }
}
