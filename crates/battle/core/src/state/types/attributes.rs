//! Raw actor attributes and category tags.

use bitflags::bitflags;

/// Fixed named integer stats. Raw inputs to the combat formulas; nothing here
/// is derived.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Attributes {
    pub strength: i32,
    pub dexterity: i32,
    pub intellect: i32,
    pub wisdom: i32,
    pub vitality: i32,
    pub constitution: i32,
    pub speed: i32,
    pub armor: i32,
    pub resist: i32,
    pub luck: i32,
}

bitflags! {
    /// Boolean category flags on an actor.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    #[cfg_attr(feature = "serde", serde(transparent))]
    pub struct TagFlags: u16 {
        const SPELLCASTER = 1 << 0;
        const UNDEAD      = 1 << 1;
        const BEAST       = 1 << 2;
        const HUMANOID    = 1 << 3;
        const FLYING      = 1 << 4;
        const DEMON       = 1 << 5;
        const GOBLINOID   = 1 << 6;
        const SLIME       = 1 << 7;
    }
}

/// Category tags describing an actor.
///
/// No combat formula reads these yet. They are part of the actor record so
/// that rule extensions can key off them.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tags {
    pub flags: TagFlags,
    /// Boss tier; 0 means not a boss.
    pub boss: u8,
    /// Miniboss tier; 0 means not a miniboss.
    pub miniboss: u8,
}

impl Tags {
    pub const fn new(flags: TagFlags) -> Self {
        Self {
            flags,
            boss: 0,
            miniboss: 0,
        }
    }

    pub const fn with_boss(mut self, tier: u8) -> Self {
        self.boss = tier;
        self
    }

    pub const fn with_miniboss(mut self, tier: u8) -> Self {
        self.miniboss = tier;
        self
    }

    #[inline]
    pub fn has(&self, flag: TagFlags) -> bool {
        self.flags.contains(flag)
    }

    #[inline]
    pub const fn is_boss(&self) -> bool {
        self.boss > 0
    }
}
