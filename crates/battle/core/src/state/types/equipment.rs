//! Weapon and equipment records.
//!
//! An actor owns at most one equipped weapon. Combat code never reads the
//! `Option` directly; it goes through [`Equipment::weapon_or_unarmed`] so that
//! an empty slot always resolves to [`Weapon::UNARMED_NAME`] stats.

/// A weapon and its combat modifiers.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Weapon {
    pub name: String,
    /// Flat damage contribution.
    pub damage: i32,
    /// Added to hit chance (percentage points).
    pub accuracy: i32,
    /// Added to crit chance (percentage points).
    pub crit_bonus: i32,
}

impl Weapon {
    /// Display name used when nothing is equipped.
    pub const UNARMED_NAME: &'static str = "Fists";
    pub const UNARMED_DAMAGE: i32 = 2;

    pub fn new(name: impl Into<String>, damage: i32) -> Self {
        Self {
            name: name.into(),
            damage,
            accuracy: 0,
            crit_bonus: 0,
        }
    }

    pub fn with_accuracy(mut self, accuracy: i32) -> Self {
        self.accuracy = accuracy;
        self
    }

    pub fn with_crit_bonus(mut self, crit_bonus: i32) -> Self {
        self.crit_bonus = crit_bonus;
        self
    }
}

/// Resolved weapon view used by the combat formulas.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WeaponProfile<'a> {
    pub name: &'a str,
    pub damage: i32,
    pub accuracy: i32,
    pub crit_bonus: i32,
    pub unarmed: bool,
}

impl WeaponProfile<'static> {
    pub const UNARMED: Self = Self {
        name: Weapon::UNARMED_NAME,
        damage: Weapon::UNARMED_DAMAGE,
        accuracy: 0,
        crit_bonus: 0,
        unarmed: true,
    };
}

/// Equipment state for an actor.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Equipment {
    /// Currently equipped weapon. `None` fights unarmed.
    pub weapon: Option<Weapon>,
}

impl Equipment {
    /// Creates empty equipment.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn with_weapon(weapon: Weapon) -> Self {
        Self {
            weapon: Some(weapon),
        }
    }

    /// Equips a weapon, returning the previously equipped one if any.
    pub fn equip_weapon(&mut self, weapon: Weapon) -> Option<Weapon> {
        self.weapon.replace(weapon)
    }

    /// Unequips the current weapon.
    pub fn unequip_weapon(&mut self) -> Option<Weapon> {
        self.weapon.take()
    }

    /// Returns the equipped weapon, or unarmed defaults.
    ///
    /// A weapon with an empty name keeps its modifiers but is shown as
    /// [`Weapon::UNARMED_NAME`].
    pub fn weapon_or_unarmed(&self) -> WeaponProfile<'_> {
        match &self.weapon {
            Some(weapon) => WeaponProfile {
                name: if weapon.name.is_empty() {
                    Weapon::UNARMED_NAME
                } else {
                    weapon.name.as_str()
                },
                damage: weapon.damage,
                accuracy: weapon.accuracy,
                crit_bonus: weapon.crit_bonus,
                unarmed: false,
            },
            None => WeaponProfile::UNARMED,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_slot_resolves_to_fists() {
        let equipment = Equipment::empty();
        let profile = equipment.weapon_or_unarmed();
        assert_eq!(profile, WeaponProfile::UNARMED);
        assert_eq!(profile.damage, 2);
        assert_eq!(profile.name, "Fists");
    }

    #[test]
    fn unnamed_weapon_keeps_modifiers() {
        let equipment = Equipment::with_weapon(Weapon::new("", 6).with_accuracy(3));
        let profile = equipment.weapon_or_unarmed();
        assert_eq!(profile.name, "Fists");
        assert_eq!(profile.damage, 6);
        assert_eq!(profile.accuracy, 3);
        assert!(!profile.unarmed);
    }

    #[test]
    fn equip_replaces_previous() {
        let mut equipment = Equipment::with_weapon(Weapon::new("Club", 3));
        let old = equipment.equip_weapon(Weapon::new("Rapier", 5));
        assert_eq!(old.map(|w| w.name), Some("Club".to_string()));
        assert_eq!(equipment.weapon_or_unarmed().name, "Rapier");
    }
}
