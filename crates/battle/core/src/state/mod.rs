//! Encounter state.
//!
//! [`CombatState`] is the snapshot of an ongoing encounter. It is created at
//! encounter start, mutated only by the turn engine and discarded when the
//! encounter ends.

mod error;
pub mod log;
pub mod types;

use std::collections::BTreeMap;

use sha2::{Digest, Sha256};

pub use error::StateError;
pub use log::{EventLog, LogEvent};
pub use types::*;

/// Current/max pair of an actor's primary resource, for UI bars.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResourceHint {
    pub actor: ActorId,
    pub current: i32,
    pub max: i32,
}

/// Snapshot of an ongoing encounter.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CombatState {
    /// Completed player+enemy cycles.
    pub turn: u32,

    /// Acting order by id.
    order: Vec<ActorId>,

    /// Actor registry. Keys are unique.
    actors: BTreeMap<ActorId, Actor>,

    /// Narration, oldest first.
    pub log: EventLog,

    /// Set once the encounter reached a terminal phase.
    pub over: bool,
}

impl CombatState {
    pub fn new(log: EventLog) -> Self {
        Self {
            log,
            ..Self::default()
        }
    }

    /// Registers an actor at the end of the turn order.
    pub fn insert_actor(&mut self, actor: Actor) -> Result<(), StateError> {
        if self.actors.contains_key(&actor.id) {
            return Err(StateError::DuplicateActor {
                id: actor.id.clone(),
            });
        }

        self.order.push(actor.id.clone());
        self.actors.insert(actor.id.clone(), actor);
        Ok(())
    }

    pub fn actor(&self, id: &ActorId) -> Option<&Actor> {
        self.actors.get(id)
    }

    pub fn actor_mut(&mut self, id: &ActorId) -> Option<&mut Actor> {
        self.actors.get_mut(id)
    }

    pub fn actors(&self) -> impl Iterator<Item = &Actor> {
        self.order.iter().filter_map(|id| self.actors.get(id))
    }

    pub fn order(&self) -> &[ActorId] {
        &self.order
    }

    /// Status list of a registered actor. Reads [`Actor::effects`].
    pub fn statuses(&self, id: &ActorId) -> Option<&StatusEffects> {
        self.actors.get(id).map(|actor| &actor.effects)
    }

    /// Attaches a status effect to a registered actor's [`Actor::effects`].
    ///
    /// Returns `Ok(false)` when the actor's status list is full.
    pub fn add_status(&mut self, id: &ActorId, effect: StatusEffect) -> Result<bool, StateError> {
        self.actors
            .get_mut(id)
            .map(|actor| actor.effects.add(effect))
            .ok_or_else(|| StateError::UnknownActor { id: id.clone() })
    }

    pub fn remove_status(&mut self, id: &ActorId, code: StatusCode) -> Result<(), StateError> {
        self.actors
            .get_mut(id)
            .map(|actor| actor.effects.remove(code))
            .ok_or_else(|| StateError::UnknownActor { id: id.clone() })
    }

    /// Hp bar hint for one actor.
    pub fn hp_hint(&self, id: &ActorId) -> Option<ResourceHint> {
        self.actors.get(id).map(|actor| ResourceHint {
            actor: id.clone(),
            current: actor.hp().current(),
            max: actor.hp().max(),
        })
    }

    /// Hp bar hints for every actor, in turn order.
    pub fn hp_hints(&self) -> Vec<ResourceHint> {
        self.order.iter().filter_map(|id| self.hp_hint(id)).collect()
    }

    /// SHA-256 over every retained log line, in order.
    ///
    /// Two encounters replayed from the same seed and intents produce the
    /// same digest.
    pub fn log_digest(&self) -> [u8; 32] {
        let mut hasher = Sha256::new();
        for event in self.log.iter() {
            hasher.update(event.seq.to_le_bytes());
            hasher.update(event.text.as_bytes());
            hasher.update([b'\n']);
        }
        hasher.finalize().into()
    }
}
