//! Encounter setup.

use crate::config::EncounterConfig;
use crate::env::{PcgStream, RngStream};
use crate::state::{Actor, CombatState, EventLog};

use super::errors::SetupError;
use super::Encounter;

/// Collects the two combatants, the random stream and the configuration.
///
/// Actors must arrive with their resource maxima set; current hp is refilled
/// when the encounter starts.
#[derive(Default)]
pub struct EncounterBuilder {
    player: Option<Actor>,
    enemy: Option<Actor>,
    rng: Option<Box<dyn RngStream>>,
    config: EncounterConfig,
}

impl EncounterBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn player(mut self, actor: Actor) -> Self {
        self.player = Some(actor);
        self
    }

    pub fn enemy(mut self, actor: Actor) -> Self {
        self.enemy = Some(actor);
        self
    }

    pub fn rng(mut self, rng: impl RngStream + 'static) -> Self {
        self.rng = Some(Box::new(rng));
        self
    }

    /// Shorthand for `rng(PcgStream::new(seed))`.
    pub fn seed(self, seed: u64) -> Self {
        self.rng(PcgStream::new(seed))
    }

    pub fn config(mut self, config: EncounterConfig) -> Self {
        self.config = config;
        self
    }

    /// Validates the roster and registers player first, enemy second.
    pub fn build(self) -> Result<Encounter, SetupError> {
        let player = self.player.ok_or(SetupError::MissingPlayer)?;
        let enemy = self.enemy.ok_or(SetupError::MissingEnemy)?;
        let rng = self.rng.ok_or(SetupError::MissingRng)?;

        check_actor(&player, true)?;
        check_actor(&enemy, false)?;

        let log = match self.config.log_capacity {
            Some(capacity) => EventLog::bounded(capacity),
            None => EventLog::new(),
        };
        let mut state = CombatState::new(log);

        let player_id = player.id.clone();
        let enemy_id = enemy.id.clone();
        state.insert_actor(player)?;
        state.insert_actor(enemy)?;

        Ok(Encounter::assemble(
            state,
            player_id,
            enemy_id,
            rng,
            self.config,
        ))
    }
}

fn check_actor(actor: &Actor, expected: bool) -> Result<(), SetupError> {
    if actor.is_player != expected {
        return Err(SetupError::PlayerFlagMismatch {
            id: actor.id.clone(),
            expected,
            actual: actor.is_player,
        });
    }

    let max = actor.hp().max();
    if max <= 0 {
        return Err(SetupError::NoHitPoints {
            id: actor.id.clone(),
            max,
        });
    }

    Ok(())
}
