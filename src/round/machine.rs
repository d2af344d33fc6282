//! The round state machine: legal transitions and their guards.
//!
//! Every user command goes through [`GameRound::dispatch`]. An action that
//! is illegal for the current phase is rejected with an [`ActionError`]
//! and the round is left exactly as it was; on a single shared device the
//! UI may occasionally race ahead, and a stale tap must never corrupt or
//! crash the round.
//!
//! Transition map:
//!
//! ```text
//! Setup -> Distribution            (session start, roles dealt)
//! Distribution -> RevealRuler      (guard: every player self-revealed)
//! RevealRuler -> RevealPolice      (Ruler-holder's public reveal)
//! RevealPolice -> Guessing         (Police-holder's public reveal)
//! Guessing -> RoundEnd             (confirmed accusation, scored once)
//! RoundEnd -> Distribution         (next round: redraw, reset flags)
//! ```

use tracing::debug;

use crate::core::{Action, ActionError, ActionKind, CatalogError, GameRng, Player, PlayerId};
use crate::roles::{assign_roles, Language, RoleCatalog, RoleId};
use crate::round::{GameRound, Phase};
use crate::scoring::{self, RoundOutcome};

impl GameRound {
    /// Start a session: deal roles to a freshly seated table.
    ///
    /// Fires the one-time `Setup -> Distribution` transition. The roster
    /// has already been validated at the setup boundary; the only failure
    /// mode left is an unsupported player count.
    pub(crate) fn start(
        mut players: Vec<Player>,
        catalog: &RoleCatalog,
        rng: &mut GameRng,
        language: Language,
    ) -> Result<Self, CatalogError> {
        let holders = assign_roles(&mut players, catalog, rng)?;

        let round = Self {
            phase: Phase::Distribution,
            players,
            round_number: 1,
            ruler_id: Some(holders.ruler),
            police_id: Some(holders.police),
            thief_id: Some(holders.thief),
            message: "Pass the device. Tap to secretly view your role.".to_string(),
            selected_suspect: None,
        };
        debug!(round = round.round_number, "session started");
        Ok(round)
    }

    /// Apply one user command.
    ///
    /// Returns `Ok(Some(outcome))` when the command resolved the round
    /// (so the caller can commit stats), `Ok(None)` for every other
    /// accepted command, and `Err` for a rejected one. Rejections leave
    /// the round untouched.
    pub fn dispatch(
        &mut self,
        action: Action,
        catalog: &RoleCatalog,
        rng: &mut GameRng,
        language: Language,
    ) -> Result<Option<RoundOutcome>, ActionError> {
        match action {
            Action::ViewOwnRole(player) => {
                self.expect_phase(ActionKind::ViewOwnRole, Phase::Distribution)?;
                self.player_mut(player)
                    .ok_or(ActionError::UnknownPlayer(player))?
                    .self_revealed = true; // idempotent, player-scoped
                Ok(None)
            }
            Action::FinishDistribution => {
                self.expect_phase(ActionKind::FinishDistribution, Phase::Distribution)?;
                if !self.all_self_revealed() {
                    return Err(ActionError::RevealPending);
                }
                self.phase = Phase::RevealRuler;
                self.message = format!(
                    "The Court is in session. {}, reveal yourself!",
                    catalog.get(RoleId::Ruler).name(language)
                );
                debug!(round = self.round_number, "distribution complete");
                Ok(None)
            }
            Action::RevealRuler => {
                self.expect_phase(ActionKind::RevealRuler, Phase::RevealRuler)?;
                self.publicly_reveal(self.ruler_id);
                self.phase = Phase::RevealPolice;
                self.message = format!(
                    "{} Revealed! Now, {}, show your badge!",
                    catalog.get(RoleId::Ruler).name(language),
                    catalog.get(RoleId::Police).name(language)
                );
                Ok(None)
            }
            Action::RevealPolice => {
                self.expect_phase(ActionKind::RevealPolice, Phase::RevealPolice)?;
                self.publicly_reveal(self.police_id);
                self.phase = Phase::Guessing;
                self.message = format!(
                    "{}, identify the {}! Select a suspect.",
                    catalog.get(RoleId::Police).name(language),
                    catalog.get(RoleId::Thief).name(language)
                );
                Ok(None)
            }
            Action::SelectSuspect(suspect) => {
                self.expect_phase(ActionKind::SelectSuspect, Phase::Guessing)?;
                let player = self
                    .player(suspect)
                    .ok_or(ActionError::UnknownPlayer(suspect))?;
                if Some(suspect) == self.police_id {
                    return Err(ActionError::SelfAccusation);
                }
                if player.publicly_revealed {
                    return Err(ActionError::SuspectRevealed(suspect));
                }
                // Re-selection replaces the prior tentative choice.
                self.selected_suspect = Some(suspect);
                Ok(None)
            }
            Action::ConfirmAccusation => {
                self.expect_phase(ActionKind::ConfirmAccusation, Phase::Guessing)?;
                let accused = self
                    .selected_suspect
                    .ok_or(ActionError::NoSuspectSelected)?;
                Ok(Some(self.resolve_accusation(accused, catalog, language)))
            }
            Action::NextRound => {
                self.expect_phase(ActionKind::NextRound, Phase::RoundEnd)?;
                self.redraw(catalog, rng);
                Ok(None)
            }
        }
    }

    /// The action kinds that are legal in the current phase.
    ///
    /// `ConfirmAccusation` is listed only once a tentative suspect exists.
    #[must_use]
    pub fn legal_actions(&self) -> Vec<ActionKind> {
        match self.phase {
            Phase::Setup => Vec::new(),
            Phase::Distribution => {
                let mut actions = vec![ActionKind::ViewOwnRole];
                if self.all_self_revealed() && !self.players.is_empty() {
                    actions.push(ActionKind::FinishDistribution);
                }
                actions
            }
            Phase::RevealRuler => vec![ActionKind::RevealRuler],
            Phase::RevealPolice => vec![ActionKind::RevealPolice],
            Phase::Guessing => {
                let mut actions = vec![ActionKind::SelectSuspect];
                if self.selected_suspect.is_some() {
                    actions.push(ActionKind::ConfirmAccusation);
                }
                actions
            }
            Phase::RoundEnd => vec![ActionKind::NextRound],
        }
    }

    fn expect_phase(&self, action: ActionKind, expected: Phase) -> Result<(), ActionError> {
        if self.phase == expected {
            Ok(())
        } else {
            Err(ActionError::WrongPhase {
                action,
                phase: self.phase,
            })
        }
    }

    fn publicly_reveal(&mut self, holder: Option<PlayerId>) {
        if let Some(id) = holder {
            if let Some(player) = self.player_mut(id) {
                player.publicly_revealed = true;
            }
        }
    }

    /// Score the confirmed accusation and close the round.
    ///
    /// Scoring runs exactly once per round: the phase moves to `RoundEnd`
    /// in the same step, and `ConfirmAccusation` is rejected there.
    fn resolve_accusation(
        &mut self,
        accused: PlayerId,
        catalog: &RoleCatalog,
        language: Language,
    ) -> RoundOutcome {
        // Holders are always set once the round is past distribution.
        let thief = self.thief_id.expect("thief holder set at deal");
        let police = self.police_id.expect("police holder set at deal");

        let outcome = scoring::resolve(&self.players, thief, police, accused, catalog);

        for delta in &outcome.deltas {
            if let Some(player) = self.player_mut(delta.player) {
                player.score += delta.score;
                player.rounds_played += 1;
                player.wins += u32::from(delta.win);
                player.publicly_revealed = true;
            }
        }

        let thief_label = catalog.get(RoleId::Thief).name(language);
        let thief_name = self
            .player(thief)
            .map(|p| p.name.clone())
            .unwrap_or_default();
        self.message = if outcome.is_correct {
            format!("Justice Served! The {} was {}.", thief_label, thief_name)
        } else {
            format!("The {} Escapes! It was {}.", thief_label, thief_name)
        };

        self.phase = Phase::RoundEnd;
        self.selected_suspect = None;
        debug!(
            round = self.round_number,
            correct = outcome.is_correct,
            "accusation resolved"
        );
        outcome
    }

    /// `RoundEnd -> Distribution`: redraw roles for the next round.
    fn redraw(&mut self, catalog: &RoleCatalog, rng: &mut GameRng) {
        // The table size was validated when the session started and
        // players are never added or removed mid-session.
        let holders = assign_roles(&mut self.players, catalog, rng)
            .expect("player count validated at session start");

        self.round_number += 1;
        self.ruler_id = Some(holders.ruler);
        self.police_id = Some(holders.police);
        self.thief_id = Some(holders.thief);
        self.selected_suspect = None;
        self.phase = Phase::Distribution;
        self.message = "New Round! Tap to view your new role.".to_string();
        debug!(round = self.round_number, "next round dealt");
    }
}
