//! Damage composition and armor mitigation.
//!
//! Mitigation is a linear placeholder: `armor%` capped at
//! [`DamageParams::max_mitigation_pct`]. Only the clamp bounds and the
//! floor/min-1 behavior are contractual; the curve itself is expected to be
//! replaced by a richer armor model.

use crate::config::DamageParams;
use crate::state::Actor;

/// Floors a hundredths value and saturates it into `i32`.
pub(crate) fn floor_x100(value_x100: i64) -> i32 {
    let floored = value_x100.div_euclid(100);
    i32::try_from(floored).unwrap_or(if floored < 0 { i32::MIN } else { i32::MAX })
}

/// Raw physical damage before mitigation.
///
/// ```text
/// raw = floor(weapon_damage + strength * strength_scale)
/// ```
///
/// `weapon_damage` is 2 when nothing is equipped.
pub fn raw_physical_damage(attacker: &Actor, params: &DamageParams) -> i32 {
    let weapon_damage = i64::from(attacker.equipment.weapon_or_unarmed().damage);
    let raw_x100 = (weapon_damage * 100).saturating_add(
        i64::from(attacker.attributes.strength) * i64::from(params.strength_x100),
    );
    floor_x100(raw_x100)
}

/// Armor mitigation in percent, clamped to `[0, max_mitigation_pct]`.
///
/// Monotonic non-decreasing in `armor`.
pub fn mitigation_pct(armor: i32, params: &DamageParams) -> i32 {
    armor.clamp(0, params.max_mitigation_pct)
}

/// Applies the defender's armor to `raw`.
///
/// ```text
/// mitigated = max(1, floor(raw * (1 - mitigation)))
/// ```
pub fn apply_mitigation(raw: i32, defender: &Actor, params: &DamageParams) -> i32 {
    let pct = mitigation_pct(defender.attributes.armor, params);
    floor_x100(i64::from(raw) * i64::from(100 - pct)).max(1)
}

/// Mitigated physical damage without variance, crit or graze.
pub fn deal_physical_damage(attacker: &Actor, defender: &Actor, params: &DamageParams) -> i32 {
    let raw = raw_physical_damage(attacker, params);
    let armor = defender.attributes.armor;
    let pct = mitigation_pct(armor, params);
    let after = apply_mitigation(raw, defender, params);

    tracing::debug!(
        "[dmg/armor] atk={} def={} raw={} armor={} mit%={} after={}",
        attacker.name,
        defender.name,
        raw,
        armor,
        pct,
        after
    );

    after
}

/// Damage of the simplified turn-loop formula.
///
/// ```text
/// damage = max(1, attack + variance - armor)
/// ```
pub fn simple_damage(attacker: &Actor, defender: &Actor, variance: i32) -> i32 {
    attacker
        .attack
        .saturating_add(variance)
        .saturating_sub(defender.attributes.armor)
        .max(1)
}
