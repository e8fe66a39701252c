//! Attack resolution and result rendering.

use crate::config::CombatParams;
use crate::env::RngStream;
use crate::state::{Actor, Weapon, WeaponProfile};

use super::damage::{apply_mitigation, floor_x100, raw_physical_damage};
use super::hit::{calculate_crit_chance, calculate_hit_chance};

/// Outcome class of an attack attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum AttackOutcome {
    /// Roll above `hit + graze_window`.
    Miss,
    /// Roll inside the graze window; half damage.
    Graze,
    /// Roll at or below hit chance.
    Hit,
    /// Hit that also passed the independent crit roll.
    Critical,
}

/// How a hit line names the weapon.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LineForm {
    /// `{attacker} {verb} {defender} with {weapon} for {n} damage.`
    #[default]
    WithWeapon,
    /// `{attacker} {verb} {defender} for {n} damage.`
    Plain,
}

/// Result of one resolved attack.
///
/// Immutable once produced; the caller applies `damage` and appends
/// `log_line`.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AttackResult {
    pub outcome: AttackOutcome,
    /// Damage to apply (0 on a miss).
    pub damage: i32,
    /// Flavor verb ("slashes", "grazes", "misses", ...).
    pub verb: String,
    pub weapon_name: String,
    pub attacker_name: String,
    pub defender_name: String,
    pub form: LineForm,
    /// Fully rendered narration line.
    pub log_line: String,
}

impl AttackResult {
    pub(crate) fn new(
        outcome: AttackOutcome,
        damage: i32,
        verb: &str,
        weapon_name: &str,
        attacker: &Actor,
        defender: &Actor,
        form: LineForm,
    ) -> Self {
        let mut result = Self {
            outcome,
            damage,
            verb: verb.to_string(),
            weapon_name: weapon_name.to_string(),
            attacker_name: attacker.name.clone(),
            defender_name: defender.name.clone(),
            form,
            log_line: String::new(),
        };
        result.log_line = result.render();
        result
    }

    /// Graze, hit and crit all count as connecting.
    pub fn is_hit(&self) -> bool {
        !matches!(self.outcome, AttackOutcome::Miss)
    }

    pub fn is_crit(&self) -> bool {
        matches!(self.outcome, AttackOutcome::Critical)
    }

    /// Same result with a different damage amount, re-rendered.
    pub fn with_damage(mut self, damage: i32) -> Self {
        self.damage = damage;
        self.log_line = self.render();
        self
    }

    fn render(&self) -> String {
        let (attacker, defender, weapon) = (
            &self.attacker_name,
            &self.defender_name,
            &self.weapon_name,
        );
        match self.outcome {
            AttackOutcome::Miss => format!("{attacker} misses {defender} with {weapon}."),
            AttackOutcome::Graze => format!(
                "{attacker} grazes {defender} with {weapon} for {} damage.",
                self.damage
            ),
            AttackOutcome::Hit => match self.form {
                LineForm::WithWeapon => format!(
                    "{attacker} {} {defender} with {weapon} for {} damage.",
                    self.verb, self.damage
                ),
                LineForm::Plain => format!(
                    "{attacker} {} {defender} for {} damage.",
                    self.verb, self.damage
                ),
            },
            AttackOutcome::Critical => format!(
                "Critical Hit! {attacker} lands a powerful blow on {defender} with {weapon}, dealing {} damage!",
                self.damage
            ),
        }
    }
}

/// Flavor verb for a weapon.
///
/// Case-insensitive substring match; first category wins:
/// unarmed → punches, dagger/rapier → stabs, spear/lance/arrow → pierces,
/// mace/hammer/staff/club → smashes, otherwise slashes.
pub fn verb_for_weapon(weapon: &WeaponProfile<'_>) -> &'static str {
    const CATEGORIES: [(&[&str], &str); 3] = [
        (&["dagger", "rapier"], "stabs"),
        (&["spear", "lance", "arrow"], "pierces"),
        (&["mace", "hammer", "staff", "club"], "smashes"),
    ];

    if weapon.unarmed || weapon.name == Weapon::UNARMED_NAME {
        return "punches";
    }

    let lower = weapon.name.to_lowercase();
    CATEGORIES
        .iter()
        .find(|(needles, _)| needles.iter().any(|needle| lower.contains(needle)))
        .map_or("slashes", |(_, verb)| *verb)
}

/// Resolve one attack with the full rules formula set.
///
/// Draws from `rng` in a fixed order: hit roll, damage variance (unless
/// missed), crit roll (only on a full hit), crit variance (only on a crit).
///
/// # Outcome selection
///
/// ```text
/// r > hit + graze_window      -> miss
/// hit < r <= hit + window     -> graze: max(1, floor(non_crit * graze_mult))
/// r <= hit                    -> hit, then roll crit:
///     non_crit = max(1, mitigated(raw) + variance)
///     crit     = max(crit_floor, mitigated(floor(raw * crit_mult)) + crit_variance)
///     damage   = max(crit, non_crit + 1)
/// ```
pub fn resolve_attack(
    attacker: &Actor,
    defender: &Actor,
    rng: &mut dyn RngStream,
    params: &CombatParams,
) -> AttackResult {
    let weapon = attacker.equipment.weapon_or_unarmed();
    let hit_chance = calculate_hit_chance(attacker, defender, &params.hit);
    let roll = rng.roll_d100();

    if roll > hit_chance.saturating_add(params.hit.graze_window) {
        tracing::trace!(roll, hit_chance, "attack missed");
        return AttackResult::new(
            AttackOutcome::Miss,
            0,
            "misses",
            weapon.name,
            attacker,
            defender,
            LineForm::WithWeapon,
        );
    }

    let damage = &params.damage;
    let raw = raw_physical_damage(attacker, damage);
    let base = apply_mitigation(raw, defender, damage);
    let (low, high) = damage.variance;
    let non_crit = base.saturating_add(rng.range(low, high)).max(1);

    if roll > hit_chance {
        let grazed = floor_x100(i64::from(non_crit) * i64::from(damage.graze_mult_x100)).max(1);
        tracing::trace!(roll, hit_chance, non_crit, grazed, "attack grazed");
        return AttackResult::new(
            AttackOutcome::Graze,
            grazed,
            "grazes",
            weapon.name,
            attacker,
            defender,
            LineForm::WithWeapon,
        );
    }

    let crit_chance = calculate_crit_chance(attacker, &params.crit);
    let is_crit = rng.roll_pct(crit_chance);
    let verb = verb_for_weapon(&weapon);

    if is_crit {
        let crit_raw = floor_x100(i64::from(raw) * i64::from(damage.crit_mult_x100));
        let crit_base = apply_mitigation(crit_raw, defender, damage);
        let (low, high) = damage.crit_variance;
        let crit_final = crit_base
            .saturating_add(rng.range(low, high))
            .max(damage.crit_floor);
        let dealt = crit_final.max(non_crit.saturating_add(1));

        tracing::trace!(roll, hit_chance, crit_chance, non_crit, dealt, "critical hit");
        return AttackResult::new(
            AttackOutcome::Critical,
            dealt,
            verb,
            weapon.name,
            attacker,
            defender,
            LineForm::WithWeapon,
        );
    }

    tracing::trace!(roll, hit_chance, crit_chance, non_crit, "attack hit");
    AttackResult::new(
        AttackOutcome::Hit,
        non_crit,
        verb,
        weapon.name,
        attacker,
        defender,
        LineForm::WithWeapon,
    )
}
