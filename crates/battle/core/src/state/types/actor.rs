//! Actor record and its resource mutators.

use super::attributes::{Attributes, Tags};
use super::common::{ActorId, Progression};
use super::equipment::{Equipment, Weapon};
use super::resource::{Resource, ResourceError, ResourceKind};
use super::status::StatusEffects;

/// A combatant.
///
/// # Invariants
///
/// - Every resource satisfies `0 <= current <= max`; resources are only
///   written through [`Resource`]'s clamping mutators
/// - All resources start at `{0, 0}` until the host sets maxima and the
///   encounter refills hp at start
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Actor {
    pub id: ActorId,
    pub name: String,
    pub is_player: bool,

    pub progression: Progression,
    pub tags: Tags,
    pub attributes: Attributes,
    pub equipment: Equipment,

    /// Base attack rating read by the simplified damage formula.
    pub attack: i32,

    hp: Resource,
    mp: Resource,
    sp: Resource,

    /// Active status effects.
    pub effects: StatusEffects,

    /// Transient defend stance; halves the next incoming enemy strike.
    #[cfg_attr(feature = "serde", serde(default))]
    pub defending: bool,
}

impl Actor {
    pub fn new(id: impl Into<ActorId>, name: impl Into<String>, is_player: bool) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            is_player,
            progression: Progression::default(),
            tags: Tags::default(),
            attributes: Attributes::default(),
            equipment: Equipment::empty(),
            attack: 0,
            hp: Resource::EMPTY,
            mp: Resource::EMPTY,
            sp: Resource::EMPTY,
            effects: StatusEffects::empty(),
            defending: false,
        }
    }

    // ========================================================================
    // Builders
    // ========================================================================

    pub fn with_level(mut self, level: i32) -> Self {
        self.progression.level = level;
        self
    }

    pub fn with_progression(mut self, progression: Progression) -> Self {
        self.progression = progression;
        self
    }

    pub fn with_tags(mut self, tags: Tags) -> Self {
        self.tags = tags;
        self
    }

    pub fn with_attributes(mut self, attributes: Attributes) -> Self {
        self.attributes = attributes;
        self
    }

    pub fn with_weapon(mut self, weapon: Weapon) -> Self {
        self.equipment.equip_weapon(weapon);
        self
    }

    pub fn with_attack(mut self, attack: i32) -> Self {
        self.attack = attack;
        self
    }

    /// Sets the hp maximum. Current hp is filled when the encounter starts.
    pub fn with_hp_max(mut self, max: i32) -> Self {
        self.hp.set_max(max);
        self
    }

    pub fn with_mp(mut self, mp: Resource) -> Self {
        self.mp = mp;
        self
    }

    pub fn with_sp(mut self, sp: Resource) -> Self {
        self.sp = sp;
        self
    }

    // ========================================================================
    // Resources
    // ========================================================================

    #[inline]
    pub fn hp(&self) -> Resource {
        self.hp
    }

    #[inline]
    pub fn mp(&self) -> Resource {
        self.mp
    }

    #[inline]
    pub fn sp(&self) -> Resource {
        self.sp
    }

    pub fn resource(&self, kind: ResourceKind) -> Resource {
        match kind {
            ResourceKind::Hp => self.hp,
            ResourceKind::Mp => self.mp,
            ResourceKind::Sp => self.sp,
        }
    }

    fn resource_mut(&mut self, kind: ResourceKind) -> &mut Resource {
        match kind {
            ResourceKind::Hp => &mut self.hp,
            ResourceKind::Mp => &mut self.mp,
            ResourceKind::Sp => &mut self.sp,
        }
    }

    /// Quick check if actor is alive.
    #[inline]
    pub fn is_alive(&self) -> bool {
        !self.hp.is_depleted()
    }

    /// `hp.current = clamp(hp.current - amount, 0, hp.max)`.
    ///
    /// # Errors
    ///
    /// [`ResourceError::InvalidArgument`] if `amount` is negative.
    pub fn apply_damage(&mut self, amount: i32) -> Result<(), ResourceError> {
        self.hp.drain(ResourceKind::Hp, amount)
    }

    /// `hp.current = clamp(hp.current + amount, 0, hp.max)`.
    ///
    /// # Errors
    ///
    /// [`ResourceError::InvalidArgument`] if `amount` is negative.
    pub fn apply_heal(&mut self, amount: i32) -> Result<(), ResourceError> {
        self.hp.restore(ResourceKind::Hp, amount)
    }

    /// Spends `amount` from a non-hp pool.
    pub fn spend(&mut self, kind: ResourceKind, amount: i32) -> Result<(), ResourceError> {
        self.resource_mut(kind).drain(kind, amount)
    }

    /// Restores `amount` to any pool.
    pub fn restore(&mut self, kind: ResourceKind, amount: i32) -> Result<(), ResourceError> {
        self.resource_mut(kind).restore(kind, amount)
    }

    /// Sets `hp.current = hp.max`.
    pub fn refill_hp(&mut self) {
        self.hp.refill();
    }
}
