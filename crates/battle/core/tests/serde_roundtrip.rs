#![cfg(feature = "serde")]

use battle_core::{
    Actor, Attributes, Progression, Resource, StatusCode, StatusEffect, TagFlags, Tags, Weapon,
};

#[test]
fn actor_record_round_trips_through_json() {
    let mut actor = Actor::new("lich", "Lich", false)
        .with_progression(Progression {
            level: 7,
            xp: 120,
            xp_to_next: 400,
        })
        .with_tags(Tags::new(TagFlags::SPELLCASTER | TagFlags::UNDEAD).with_boss(2))
        .with_attributes(Attributes {
            intellect: 14,
            armor: 12,
            luck: 3,
            ..Attributes::default()
        })
        .with_weapon(Weapon::new("Bone Staff", 5).with_crit_bonus(4))
        .with_hp_max(40)
        .with_mp(Resource::full(30));
    actor.refill_hp();
    actor
        .effects
        .add(StatusEffect::new(StatusCode::ArmorDown, 2).with_potency(0.25));

    let json = serde_json::to_string(&actor).unwrap();
    let back: Actor = serde_json::from_str(&json).unwrap();

    assert_eq!(back, actor);
    assert!(back.tags.has(TagFlags::UNDEAD));
    assert!(back.tags.is_boss());
}

#[test]
fn deserialized_resources_are_clamped() {
    let over: Resource = serde_json::from_str(r#"{"current":50,"max":10}"#).unwrap();
    assert_eq!((over.current(), over.max()), (10, 10));

    let under: Resource = serde_json::from_str(r#"{"current":-4,"max":10}"#).unwrap();
    assert_eq!((under.current(), under.max()), (0, 10));

    let negative: Resource = serde_json::from_str(r#"{"current":3,"max":-1}"#).unwrap();
    assert_eq!((negative.current(), negative.max()), (0, 0));
}

#[test]
fn actor_record_with_overfull_hp_is_clamped() {
    let json = serde_json::to_string(&Actor::new("slime", "Slime", false).with_hp_max(10))
        .unwrap()
        .replace(r#""hp":{"current":0,"max":10}"#, r#""hp":{"current":99,"max":10}"#);
    assert!(json.contains(r#""current":99"#));

    let actor: Actor = serde_json::from_str(&json).unwrap();
    assert_eq!(actor.hp().current(), 10);
    assert_eq!(actor.hp().max(), 10);
}
