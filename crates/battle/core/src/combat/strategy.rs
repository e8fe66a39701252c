//! Named damage strategies behind one resolution entry point.
//!
//! The simplified formula and the full rules formula give different numbers
//! for the same actors. They are kept side by side and the host picks which
//! one drives the live turn loop.

use crate::config::CombatParams;
use crate::env::RngStream;
use crate::state::Actor;

use super::damage::simple_damage;
use super::result::{AttackOutcome, AttackResult, LineForm, resolve_attack};

/// Damage resolution strategy.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum DamageStrategy {
    /// `max(1, attack + uniform(-1, 1) - armor)`. Always connects.
    #[default]
    Simple,
    /// Hit/graze/crit rolls with armor mitigation; see [`resolve_attack`].
    Rules,
}

impl DamageStrategy {
    /// Resolve one attack of `attacker` against `defender`.
    pub fn resolve(
        &self,
        attacker: &Actor,
        defender: &Actor,
        rng: &mut dyn RngStream,
        params: &CombatParams,
    ) -> AttackResult {
        match self {
            Self::Simple => {
                let (low, high) = params.damage.simple_variance;
                let variance = rng.range(low, high);
                let damage = simple_damage(attacker, defender, variance);
                let weapon = attacker.equipment.weapon_or_unarmed();

                AttackResult::new(
                    AttackOutcome::Hit,
                    damage,
                    "hits",
                    weapon.name,
                    attacker,
                    defender,
                    LineForm::Plain,
                )
            }
            Self::Rules => resolve_attack(attacker, defender, rng, params),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::ScriptedRng;
    use crate::state::Attributes;

    fn pair() -> (Actor, Actor) {
        let player = Actor::new("player", "Knight", true).with_attack(5);
        let enemy = Actor::new("slime", "Slime", false).with_attributes(Attributes {
            armor: 1,
            ..Attributes::default()
        });
        (player, enemy)
    }

    #[test]
    fn parses_from_config_strings() {
        assert_eq!("simple".parse::<DamageStrategy>().unwrap(), DamageStrategy::Simple);
        assert_eq!("RULES".parse::<DamageStrategy>().unwrap(), DamageStrategy::Rules);
        assert!("fancy".parse::<DamageStrategy>().is_err());
        assert_eq!(DamageStrategy::Rules.to_string(), "rules");
    }

    #[test]
    fn simple_strategy_consumes_one_draw() {
        let (player, enemy) = pair();
        let mut rng = ScriptedRng::new([1, 50]);

        let result =
            DamageStrategy::Simple.resolve(&player, &enemy, &mut rng, &CombatParams::default());

        assert_eq!(result.damage, 5);
        assert_eq!(result.log_line, "Knight hits Slime for 5 damage.");
        assert_eq!(rng.remaining(), 1);

        let halved = result.with_damage(3);
        assert_eq!(halved.log_line, "Knight hits Slime for 3 damage.");
    }

    #[test]
    fn strategies_disagree_on_the_same_draws() {
        let (player, enemy) = pair();
        let params = CombatParams::default();

        let simple =
            DamageStrategy::Simple.resolve(&player, &enemy, &mut ScriptedRng::new([0]), &params);
        let rules = DamageStrategy::Rules.resolve(
            &player,
            &enemy,
            &mut ScriptedRng::new([1, 0, 100]),
            &params,
        );

        // simple: 5 - 1 armor; rules: unarmed 2 raw, 1% mitigation floors to 1
        assert_eq!(simple.damage, 4);
        assert_eq!(rules.damage, 1);
        assert_eq!(rules.log_line, "Knight punches Slime with Fists for 1 damage.");
    }
}
