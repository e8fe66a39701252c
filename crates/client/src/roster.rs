//! Demo combatants.

use battle_core::{Actor, Attributes, TagFlags, Tags, Weapon};

pub fn knight() -> Actor {
    Actor::new("player", "Knight", true)
        .with_tags(Tags::new(TagFlags::HUMANOID))
        .with_attributes(Attributes {
            strength: 6,
            dexterity: 4,
            vitality: 5,
            speed: 10,
            luck: 2,
            ..Attributes::default()
        })
        .with_weapon(Weapon::new("Longsword", 4).with_accuracy(2))
        .with_attack(5)
        .with_hp_max(20)
}

pub fn slime() -> Actor {
    Actor::new("slime", "Slime", false)
        .with_tags(Tags::new(TagFlags::SLIME))
        .with_attributes(Attributes {
            strength: 4,
            dexterity: 2,
            speed: 6,
            armor: 1,
            ..Attributes::default()
        })
        .with_attack(4)
        .with_hp_max(18)
}
