//! Hit and crit chance calculations.

use crate::config::{CritParams, HitParams};
use crate::state::Actor;

use super::damage::floor_x100;

/// Calculate hit chance (percent) of `attacker` against `defender`.
///
/// # Formula
///
/// ```text
/// hit = base
///     + (atk.dex - def.dex) * dex_diff
///     + (atk.luck - def.luck) * luck
///     + (atk.level - def.level) * level
///     + weapon.accuracy
/// clamped to [min, max] after flooring
/// ```
pub fn calculate_hit_chance(attacker: &Actor, defender: &Actor, params: &HitParams) -> i32 {
    let delta = |a: i32, b: i32| i64::from(a) - i64::from(b);
    let dex_delta = delta(attacker.attributes.dexterity, defender.attributes.dexterity);
    let luck_delta = delta(attacker.attributes.luck, defender.attributes.luck);
    let level_delta = delta(attacker.progression.level, defender.progression.level);
    let accuracy = i64::from(attacker.equipment.weapon_or_unarmed().accuracy);

    let chance_x100 = (i64::from(params.base) * 100)
        .saturating_add(dex_delta.saturating_mul(i64::from(params.dex_diff) * 100))
        .saturating_add(luck_delta.saturating_mul(i64::from(params.luck_x100)))
        .saturating_add(level_delta.saturating_mul(i64::from(params.level_x100)))
        .saturating_add(accuracy * 100);

    floor_x100(chance_x100).clamp(params.min, params.max)
}

/// Calculate crit chance (percent) of `attacker`.
///
/// # Formula
///
/// ```text
/// crit = base + atk.luck * luck + weapon.crit_bonus
/// clamped to [0, max] after flooring
/// ```
pub fn calculate_crit_chance(attacker: &Actor, params: &CritParams) -> i32 {
    let crit_bonus = i64::from(attacker.equipment.weapon_or_unarmed().crit_bonus);

    let chance_x100 = (i64::from(params.base) * 100)
        .saturating_add(i64::from(attacker.attributes.luck) * i64::from(params.luck_x100))
        .saturating_add(crit_bonus * 100);

    floor_x100(chance_x100).clamp(0, params.max)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{Attributes, Weapon};

    fn actor(dex: i32, luck: i32, level: i32) -> Actor {
        Actor::new("a", "A", false)
            .with_level(level)
            .with_attributes(Attributes {
                dexterity: dex,
                luck,
                ..Attributes::default()
            })
    }

    #[test]
    fn even_match_uses_base_hit() {
        let a = actor(10, 5, 3);
        let b = actor(10, 5, 3);
        assert_eq!(calculate_hit_chance(&a, &b, &HitParams::default()), 88);
    }

    #[test]
    fn fractional_terms_floor() {
        // 88 + 0 + 1*0.5 + 1*1.5 = 90.0
        let a = actor(10, 6, 4);
        let b = actor(10, 5, 3);
        assert_eq!(calculate_hit_chance(&a, &b, &HitParams::default()), 90);

        // 88 - 0.5 = 87.5 -> 87
        let a = actor(10, 4, 3);
        let b = actor(10, 5, 3);
        assert_eq!(calculate_hit_chance(&a, &b, &HitParams::default()), 87);

        // 88 - 2 - 1 - 1.5 + 2 = 85.5 -> 85
        let a = actor(9, 3, 2).with_weapon(Weapon::new("Spear", 4).with_accuracy(2));
        let b = actor(10, 5, 3);
        assert_eq!(calculate_hit_chance(&a, &b, &HitParams::default()), 85);
    }

    #[test]
    fn hit_chance_is_clamped() {
        let params = HitParams::default();
        let ace = actor(40, 20, 30);
        let dud = actor(0, 0, 1);
        assert_eq!(calculate_hit_chance(&ace, &dud, &params), 98);
        assert_eq!(calculate_hit_chance(&dud, &ace, &params), 60);
    }

    #[test]
    fn hit_chance_bounds_hold_over_grid() {
        let params = HitParams::default();
        for dex in [-20, 0, 7, 30] {
            for luck in [-15, 0, 9, 40] {
                for level in [1, 5, 60] {
                    let a = actor(dex, luck, level)
                        .with_weapon(Weapon::new("Bow", 3).with_accuracy(luck / 2));
                    let b = actor(luck, dex, 61 - level);
                    let chance = calculate_hit_chance(&a, &b, &params);
                    assert!((60..=98).contains(&chance), "chance {chance}");
                }
            }
        }
    }

    #[test]
    fn hit_chance_bounds_hold_for_extreme_attributes() {
        let params = HitParams::default();
        let extremes = [i32::MIN, -20_000_000, 0, 20_000_000, i32::MAX];
        for dex in extremes {
            for luck in extremes {
                for level in extremes {
                    let a = actor(dex, luck, level)
                        .with_weapon(Weapon::new("Bow", 3).with_accuracy(luck));
                    let b = actor(luck, level, dex);
                    let chance = calculate_hit_chance(&a, &b, &params);
                    assert!((60..=98).contains(&chance), "chance {chance}");
                }
            }
        }

        let fast = actor(20_000_000, 0, 1);
        let slow = actor(0, 0, 1);
        assert_eq!(calculate_hit_chance(&fast, &slow, &params), 98);
        assert_eq!(calculate_hit_chance(&slow, &fast, &params), 60);
    }

    #[test]
    fn crit_chance_adds_luck_and_weapon() {
        let params = CritParams::default();
        assert_eq!(calculate_crit_chance(&actor(0, 0, 1), &params), 5);
        assert_eq!(calculate_crit_chance(&actor(0, 7, 1), &params), 12);

        let rogue = actor(0, 7, 1).with_weapon(Weapon::new("Dagger", 3).with_crit_bonus(10));
        assert_eq!(calculate_crit_chance(&rogue, &params), 22);
    }

    #[test]
    fn crit_chance_is_clamped() {
        let params = CritParams::default();
        assert_eq!(calculate_crit_chance(&actor(0, 90, 1), &params), 50);
        assert_eq!(calculate_crit_chance(&actor(0, -30, 1), &params), 0);
        assert_eq!(calculate_crit_chance(&actor(0, i32::MAX, 1), &params), 50);

        let cursed =
            actor(0, i32::MIN, 1).with_weapon(Weapon::new("Dagger", 3).with_crit_bonus(i32::MIN));
        assert_eq!(calculate_crit_chance(&cursed, &params), 0);
    }
}
