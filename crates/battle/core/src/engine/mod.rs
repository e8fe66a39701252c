//! Turn-phase state machine for a one-vs-one encounter.
//!
//! [`Encounter`] never sleeps. Every pacing pause is returned to the host as
//! [`Progress::Suspended`]; the host waits the reported delay and calls
//! [`Encounter::advance`] to continue with the next sub-step. One side's
//! action always finishes (damage applied, log written, terminal check done)
//! before the suspension that precedes the other side's action.

mod builder;
mod errors;
mod phase;

pub use builder::EncounterBuilder;
pub use errors::{SetupError, TurnError};
pub use phase::{Intent, Outcome, Phase, Progress, Resume, Suspension};

use core::time::Duration;

use crate::combat::AttackResult;
use crate::config::EncounterConfig;
use crate::env::RngStream;
use crate::state::{Actor, ActorId, CombatState, ResourceHint};

/// Shown whenever control returns to the player.
pub const PLAYER_PROMPT: &str = "Player turn – choose 1: Attack, 2: Defend, 3: Pass";

/// A running encounter: state, phase, random stream and pending continuation.
pub struct Encounter {
    state: CombatState,
    phase: Phase,
    player: ActorId,
    enemy: ActorId,
    rng: Box<dyn RngStream>,
    config: EncounterConfig,
    pending: Option<Suspension>,
}

impl Encounter {
    pub fn builder() -> EncounterBuilder {
        EncounterBuilder::new()
    }

    pub(crate) fn assemble(
        state: CombatState,
        player: ActorId,
        enemy: ActorId,
        rng: Box<dyn RngStream>,
        config: EncounterConfig,
    ) -> Self {
        Self {
            state,
            phase: Phase::Starting,
            player,
            enemy,
            rng,
            config,
            pending: None,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn state(&self) -> &CombatState {
        &self.state
    }

    pub fn config(&self) -> &EncounterConfig {
        &self.config
    }

    /// Continuation waiting for [`advance`](Self::advance), if any.
    pub fn pending(&self) -> Option<Suspension> {
        self.pending
    }

    pub fn player(&self) -> Option<&Actor> {
        self.state.actor(&self.player)
    }

    pub fn enemy(&self) -> Option<&Actor> {
        self.state.actor(&self.enemy)
    }

    pub fn outcome(&self) -> Option<Outcome> {
        match self.phase {
            Phase::Victory => Some(Outcome::Victory),
            Phase::Defeat => Some(Outcome::Defeat),
            _ => None,
        }
    }

    pub fn is_over(&self) -> bool {
        self.state.over
    }

    pub fn hp_hints(&self) -> Vec<ResourceHint> {
        self.state.hp_hints()
    }

    /// Gives up the encounter at any phase and hands back its state.
    pub fn abandon(self) -> CombatState {
        tracing::debug!(phase = %self.phase, "encounter abandoned");
        self.state
    }

    /// Refills both actors' hp, announces the enemy and opens the first
    /// player turn.
    pub fn start(&mut self) -> Result<Progress, TurnError> {
        if self.phase != Phase::Starting {
            return Err(TurnError::IllegalTransition {
                from: self.phase,
                to: Phase::PlayerTurn,
            });
        }

        for id in [&self.player, &self.enemy] {
            self.state
                .actor_mut(id)
                .ok_or_else(|| TurnError::MissingActor { id: id.clone() })?
                .refill_hp();
        }

        let enemy = self.name_of(&self.enemy)?;
        self.state.log.append(format!("A wild {enemy} appears!"));
        self.transition(Phase::PlayerTurn)?;
        self.state.log.append(PLAYER_PROMPT);
        Ok(Progress::AwaitingInput)
    }

    /// Applies one player intent.
    ///
    /// Outside [`Phase::PlayerTurn`] the intent is dropped and
    /// [`Progress::Ignored`] is returned.
    pub fn submit(&mut self, intent: Intent) -> Result<Progress, TurnError> {
        if self.phase != Phase::PlayerTurn {
            tracing::debug!(%intent, phase = %self.phase, "intent ignored");
            return Ok(Progress::Ignored);
        }

        // Lookups and the attack roll happen before leaving PlayerTurn so a
        // failed submit keeps the phase.
        let player_id = self.player.clone();
        let enemy_id = self.enemy.clone();
        let player = self.name_of(&player_id)?;
        self.actor(&enemy_id)?;
        let attack = match intent {
            Intent::Attack => Some(self.strike(&player_id, &enemy_id)?),
            Intent::Defend | Intent::Pass => None,
        };

        self.transition(Phase::Busy)?;

        match intent {
            Intent::Attack => {
                self.state.log.append(format!("{player} attacks!"));

                if let Some(result) = attack {
                    self.land(&enemy_id, &result)?;
                }

                if !self.actor(&enemy_id)?.is_alive() {
                    return self.finish(Outcome::Victory);
                }
            }
            Intent::Defend => {
                self.actor_mut(&player_id)?.defending = true;
                self.state.log.append(format!(
                    "{player} raises their shield and takes a defensive stance."
                ));
            }
            Intent::Pass => {
                self.state
                    .log
                    .append(format!("{player} waits, watching the enemy closely…"));
            }
        }

        Ok(self.suspend(self.config.pacing.step_delay, Resume::EnterEnemyTurn))
    }

    /// Runs the pending continuation.
    ///
    /// # Errors
    ///
    /// [`TurnError::NothingToResume`] when no suspension is pending.
    pub fn advance(&mut self) -> Result<Progress, TurnError> {
        let Some(suspension) = self.pending.take() else {
            return Err(TurnError::NothingToResume { phase: self.phase });
        };

        match suspension.resume {
            Resume::EnterEnemyTurn => {
                self.transition(Phase::EnemyTurn)?;
                let enemy = self.name_of(&self.enemy)?;
                self.state.log.append(format!("{enemy}'s turn…"));
                Ok(self.suspend(self.config.pacing.enemy_turn_delay, Resume::EnemyStrike))
            }
            Resume::EnemyStrike => self.enemy_strike(),
            Resume::EnterPlayerTurn => {
                self.transition(Phase::PlayerTurn)?;
                self.state.turn += 1;
                self.state.log.append(PLAYER_PROMPT);
                Ok(Progress::AwaitingInput)
            }
        }
    }

    fn enemy_strike(&mut self) -> Result<Progress, TurnError> {
        let enemy = self.name_of(&self.enemy)?;
        self.state.log.append(format!("{enemy} lashes out!"));

        let player_id = self.player.clone();
        let mut result = self.strike(&self.enemy.clone(), &player_id)?;

        let defender = self.actor_mut(&player_id)?;
        if defender.defending {
            defender.defending = false;
            let player = defender.name.clone();

            if result.is_hit() {
                let reduced = halve_up(result.damage);
                self.state.log.append(format!(
                    "Defense halves the blow from {} → {reduced}.",
                    result.damage
                ));
                result = result.with_damage(reduced);
            } else {
                self.state
                    .log
                    .append(format!("{player} lowers their guard."));
            }
        }

        self.land(&player_id, &result)?;

        if !self.actor(&player_id)?.is_alive() {
            return self.finish(Outcome::Defeat);
        }

        Ok(self.suspend(self.config.pacing.step_delay, Resume::EnterPlayerTurn))
    }

    /// Resolves one attack with the configured strategy.
    fn strike(
        &mut self,
        attacker: &ActorId,
        defender: &ActorId,
    ) -> Result<AttackResult, TurnError> {
        let attacker = self
            .state
            .actor(attacker)
            .ok_or_else(|| TurnError::MissingActor { id: attacker.clone() })?;
        let defender = self
            .state
            .actor(defender)
            .ok_or_else(|| TurnError::MissingActor { id: defender.clone() })?;

        Ok(self.config.strategy.resolve(
            attacker,
            defender,
            self.rng.as_mut(),
            &self.config.params,
        ))
    }

    /// Applies the result's damage and logs its line with the target's hp.
    fn land(&mut self, target: &ActorId, result: &AttackResult) -> Result<(), TurnError> {
        let actor = self.actor_mut(target)?;
        actor.apply_damage(result.damage)?;
        let hp = actor.hp();

        self.state.log.append(format!(
            "{} ({}/{} HP)",
            result.log_line,
            hp.current(),
            hp.max()
        ));
        Ok(())
    }

    fn finish(&mut self, outcome: Outcome) -> Result<Progress, TurnError> {
        let line = match outcome {
            Outcome::Victory => {
                self.transition(Phase::Victory)?;
                format!("Victory! {} is defeated.", self.name_of(&self.enemy)?)
            }
            Outcome::Defeat => {
                self.transition(Phase::Defeat)?;
                format!("Defeat… {} falls.", self.name_of(&self.player)?)
            }
        };

        self.state.over = true;
        self.state.log.append(line);
        tracing::info!(%outcome, turn = self.state.turn, "encounter finished");
        Ok(Progress::Finished(outcome))
    }

    fn suspend(&mut self, delay: Duration, resume: Resume) -> Progress {
        let suspension = Suspension { delay, resume };
        self.pending = Some(suspension);
        Progress::Suspended(suspension)
    }

    fn transition(&mut self, next: Phase) -> Result<(), TurnError> {
        if !self.phase.can_transition_to(next) {
            return Err(TurnError::IllegalTransition {
                from: self.phase,
                to: next,
            });
        }

        tracing::debug!(from = %self.phase, to = %next, "phase transition");
        self.phase = next;
        Ok(())
    }

    fn actor(&self, id: &ActorId) -> Result<&Actor, TurnError> {
        self.state
            .actor(id)
            .ok_or_else(|| TurnError::MissingActor { id: id.clone() })
    }

    fn actor_mut(&mut self, id: &ActorId) -> Result<&mut Actor, TurnError> {
        self.state
            .actor_mut(id)
            .ok_or_else(|| TurnError::MissingActor { id: id.clone() })
    }

    fn name_of(&self, id: &ActorId) -> Result<String, TurnError> {
        self.actor(id).map(|actor| actor.name.clone())
    }
}

impl core::fmt::Debug for Encounter {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Encounter")
            .field("phase", &self.phase)
            .field("player", &self.player)
            .field("enemy", &self.enemy)
            .field("pending", &self.pending)
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

/// `ceil(damage * 0.5)` for non-negative damage.
const fn halve_up(damage: i32) -> i32 {
    (damage + 1) / 2
}
