//! Status effects attached to actors.
//!
//! The turn engine only consumes the transient defending flag on
//! [`Actor`](super::Actor). These lists are the forward-compatible surface:
//! they can be populated, ticked and queried, but no combat formula reads
//! them.

use arrayvec::ArrayVec;

use crate::config::EncounterConfig;

/// Status codes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumIter)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum StatusCode {
    Stun,
    Parry,
    Defend,
    Paralyzed,
    ArmorDown,
}

/// A single status effect with a fixed number of remaining turns.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatusEffect {
    pub code: StatusCode,
    pub turns_remaining: u32,
    /// Effect strength; 0.0 when unused.
    pub potency: f32,
}

impl StatusEffect {
    pub fn new(code: StatusCode, turns_remaining: u32) -> Self {
        Self {
            code,
            turns_remaining,
            potency: 0.0,
        }
    }

    pub fn with_potency(mut self, potency: f32) -> Self {
        self.potency = potency;
        self
    }
}

/// Active status effects on an actor.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatusEffects {
    effects: ArrayVec<StatusEffect, { EncounterConfig::MAX_STATUS_EFFECTS }>,
}

impl StatusEffects {
    /// Creates an empty status effect set.
    pub fn empty() -> Self {
        Self {
            effects: ArrayVec::new(),
        }
    }

    /// Checks if a specific status effect is active.
    pub fn has(&self, code: StatusCode) -> bool {
        self.effects
            .iter()
            .any(|e| e.code == code && e.turns_remaining > 0)
    }

    pub fn get(&self, code: StatusCode) -> Option<&StatusEffect> {
        self.effects.iter().find(|e| e.code == code)
    }

    /// Adds a status effect.
    ///
    /// If the code is already present, keeps the longer duration and the
    /// stronger potency. Returns `false` when the set is full.
    pub fn add(&mut self, effect: StatusEffect) -> bool {
        if let Some(existing) = self.effects.iter_mut().find(|e| e.code == effect.code) {
            existing.turns_remaining = existing.turns_remaining.max(effect.turns_remaining);
            existing.potency = existing.potency.max(effect.potency);
            return true;
        }

        self.effects.try_push(effect).is_ok()
    }

    /// Removes a status effect immediately.
    pub fn remove(&mut self, code: StatusCode) {
        self.effects.retain(|e| e.code != code);
    }

    /// Decrements every duration by one and drops the expired ones.
    pub fn tick(&mut self) {
        for effect in self.effects.iter_mut() {
            effect.turns_remaining = effect.turns_remaining.saturating_sub(1);
        }
        self.effects.retain(|e| e.turns_remaining > 0);
    }

    pub fn iter(&self) -> impl Iterator<Item = &StatusEffect> {
        self.effects.iter()
    }

    pub fn len(&self) -> usize {
        self.effects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.effects.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_merges_same_code() {
        let mut effects = StatusEffects::empty();
        effects.add(StatusEffect::new(StatusCode::Stun, 1));
        effects.add(StatusEffect::new(StatusCode::Stun, 3).with_potency(0.5));

        assert_eq!(effects.len(), 1);
        let stun = effects.get(StatusCode::Stun).unwrap();
        assert_eq!(stun.turns_remaining, 3);
        assert_eq!(stun.potency, 0.5);
    }

    #[test]
    fn tick_expires_effects() {
        let mut effects = StatusEffects::empty();
        effects.add(StatusEffect::new(StatusCode::Parry, 1));
        effects.add(StatusEffect::new(StatusCode::ArmorDown, 2));

        effects.tick();
        assert!(!effects.has(StatusCode::Parry));
        assert!(effects.has(StatusCode::ArmorDown));

        effects.tick();
        assert!(effects.is_empty());
    }

    #[test]
    fn every_code_fits_at_once() {
        use strum::IntoEnumIterator;

        let mut effects = StatusEffects::empty();
        for code in StatusCode::iter() {
            assert!(effects.add(StatusEffect::new(code, 2)));
        }
        assert_eq!(effects.len(), 5);
        assert!(StatusCode::iter().all(|code| effects.has(code)));
    }
}
