//! Randomized role assignment.
//!
//! Assignment is a Fisher-Yates shuffle of the active role set, zipped
//! positionally with the players. Every role in the set is used exactly
//! once, so each of the n! pairings is equally likely given a uniform
//! entropy source. Runs once at session start and once at the top of
//! every subsequent round.

use tracing::debug;

use super::catalog::RoleCatalog;
use super::definition::RoleId;
use crate::core::{CatalogError, GameRng, Player, PlayerId};

/// The three distinguished role-holders for a round.
///
/// Recorded as player identities rather than role labels, because the
/// identities stay meaningful after roles are redrawn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RoleHolders {
    pub ruler: PlayerId,
    pub police: PlayerId,
    pub thief: PlayerId,
}

impl RoleHolders {
    /// Locate the distinguished holders in an assigned player list.
    ///
    /// Returns `None` if any of the three roles is unassigned, which
    /// cannot happen after [`assign_roles`] since the base set always
    /// contains all three.
    #[must_use]
    pub fn locate(players: &[Player]) -> Option<Self> {
        let find = |role: RoleId| {
            players
                .iter()
                .find(|p| p.role == Some(role))
                .map(|p| p.id)
        };
        Some(Self {
            ruler: find(RoleId::Ruler)?,
            police: find(RoleId::Police)?,
            thief: find(RoleId::Thief)?,
        })
    }
}

/// Deal a fresh set of roles to the players.
///
/// Clears each player's per-round state (role and both reveal flags),
/// then pairs a shuffled role set positionally with the players.
/// Cumulative score counters are untouched.
pub fn assign_roles(
    players: &mut [Player],
    catalog: &RoleCatalog,
    rng: &mut GameRng,
) -> Result<RoleHolders, CatalogError> {
    let mut roles = catalog.roles_for_count(players.len())?;
    rng.shuffle(&mut roles);

    for (player, role) in players.iter_mut().zip(roles.iter()) {
        player.clear_round_state();
        player.role = Some(*role);
    }

    // The base set guarantees all three distinguished roles are present.
    let holders = RoleHolders::locate(players).ok_or(CatalogError(players.len()))?;
    debug!(
        ruler = %holders.ruler,
        police = %holders.police,
        thief = %holders.thief,
        "roles dealt"
    );
    Ok(holders)
}
