use battle_core::{
    Actor, Attributes, DamageStrategy, Encounter, EncounterConfig, Intent, Outcome,
    PLAYER_PROMPT, PacingConfig, Phase, Progress, RngStream, ScriptedRng, TurnError,
};

fn knight(attack: i32) -> Actor {
    Actor::new("knight", "Knight", true)
        .with_hp_max(20)
        .with_attack(attack)
}

fn slime(hp: i32, attack: i32) -> Actor {
    Actor::new("slime", "Slime", false)
        .with_hp_max(hp)
        .with_attack(attack)
}

fn encounter(
    player: Actor,
    enemy: Actor,
    rng: impl RngStream + 'static,
    strategy: DamageStrategy,
) -> Encounter {
    let config = EncounterConfig::new()
        .with_strategy(strategy)
        .with_pacing(PacingConfig::instant());
    let mut encounter = Encounter::builder()
        .player(player)
        .enemy(enemy)
        .rng(rng)
        .config(config)
        .build()
        .unwrap();
    assert_eq!(encounter.start().unwrap(), Progress::AwaitingInput);
    encounter
}

/// Submits `intent` and advances until the next input or the end.
fn play(encounter: &mut Encounter, intent: Intent) -> Progress {
    let mut progress = encounter.submit(intent).unwrap();
    while let Progress::Suspended(_) = progress {
        progress = encounter.advance().unwrap();
    }
    progress
}

#[test]
fn simple_attack_with_zero_variance_deals_attack_minus_armor() {
    let mut encounter = encounter(knight(5), slime(10, 3), ScriptedRng::new([0]), DamageStrategy::Simple);

    let progress = encounter.submit(Intent::Attack).unwrap();
    assert!(matches!(progress, Progress::Suspended(_)));
    assert_eq!(encounter.enemy().unwrap().hp().current(), 5);
    assert_ne!(encounter.phase(), Phase::Victory);

    encounter.advance().unwrap();
    assert_eq!(encounter.phase(), Phase::EnemyTurn);

    let lines: Vec<_> = encounter.state().log.lines().collect();
    assert_eq!(
        lines,
        [
            "A wild Slime appears!",
            PLAYER_PROMPT,
            "Knight attacks!",
            "Knight hits Slime for 5 damage. (5/10 HP)",
            "Slime's turn…",
        ]
    );
}

#[test]
fn defending_halves_enemy_strike_and_clears() {
    let mut encounter = encounter(knight(5), slime(10, 6), ScriptedRng::new([0]), DamageStrategy::Simple);

    encounter.submit(Intent::Defend).unwrap();
    assert!(encounter.player().unwrap().defending);

    assert_eq!(play_rest(&mut encounter), Progress::AwaitingInput);
    let player = encounter.player().unwrap();
    assert!(!player.defending);
    assert_eq!(player.hp().current(), 17);

    let tail: Vec<_> = encounter.state().log.lines().skip(2).collect();
    assert_eq!(
        tail,
        [
            "Knight raises their shield and takes a defensive stance.",
            "Slime's turn…",
            "Slime lashes out!",
            "Defense halves the blow from 6 → 3.",
            "Slime hits Knight for 3 damage. (17/20 HP)",
            PLAYER_PROMPT,
        ]
    );
    assert_eq!(encounter.state().turn, 1);
}

fn play_rest(encounter: &mut Encounter) -> Progress {
    loop {
        match encounter.advance().unwrap() {
            Progress::Suspended(_) => continue,
            other => return other,
        }
    }
}

#[test]
fn exact_lethal_attack_wins_and_locks_input() {
    let mut encounter = encounter(knight(5), slime(5, 3), ScriptedRng::new([0]), DamageStrategy::Simple);

    let progress = encounter.submit(Intent::Attack).unwrap();
    assert_eq!(progress, Progress::Finished(Outcome::Victory));
    assert_eq!(encounter.phase(), Phase::Victory);
    assert_eq!(encounter.outcome(), Some(Outcome::Victory));
    assert!(encounter.is_over());
    assert_eq!(encounter.enemy().unwrap().hp().current(), 0);
    assert_eq!(
        encounter.state().log.last().unwrap().text,
        "Victory! Slime is defeated."
    );

    let before = encounter.state().log.total();
    for intent in [Intent::Attack, Intent::Defend, Intent::Pass] {
        assert_eq!(encounter.submit(intent).unwrap(), Progress::Ignored);
    }
    assert!(matches!(
        encounter.advance(),
        Err(TurnError::NothingToResume { phase: Phase::Victory })
    ));
    assert_eq!(encounter.state().log.total(), before);
}

#[test]
fn roll_inside_graze_window_grazes() {
    // dex +1 over the defender: hit chance 90, graze window 91..=98
    let player = knight(0).with_attributes(Attributes {
        dexterity: 1,
        ..Attributes::default()
    });
    let mut encounter = encounter(
        player,
        slime(10, 3),
        ScriptedRng::new([95, 0]),
        DamageStrategy::Rules,
    );

    encounter.submit(Intent::Attack).unwrap();
    // unarmed raw 2, no armor, variance 0: non-crit 2, grazed 1
    assert_eq!(encounter.enemy().unwrap().hp().current(), 9);
    assert!(encounter
        .state()
        .log
        .lines()
        .any(|line| line == "Knight grazes Slime with Fists for 1 damage. (9/10 HP)"));
}

#[test]
fn enemy_kill_ends_in_defeat() {
    let player = Actor::new("knight", "Knight", true).with_hp_max(4);
    let mut encounter = encounter(player, slime(10, 4), ScriptedRng::new([0]), DamageStrategy::Simple);

    assert_eq!(play(&mut encounter, Intent::Pass), Progress::Finished(Outcome::Defeat));
    assert_eq!(encounter.phase(), Phase::Defeat);
    assert_eq!(
        encounter.state().log.last().unwrap().text,
        "Defeat… Knight falls."
    );
    assert_eq!(encounter.submit(Intent::Attack).unwrap(), Progress::Ignored);
}

#[test]
fn busy_always_sits_between_player_turn_and_terminal() {
    let mut encounter = encounter(knight(5), slime(5, 3), ScriptedRng::new([0]), DamageStrategy::Simple);
    assert!(!Phase::PlayerTurn.can_transition_to(Phase::Victory));
    assert!(!Phase::PlayerTurn.can_transition_to(Phase::Defeat));
    assert!(Phase::Busy.can_transition_to(Phase::Victory));

    assert_eq!(
        encounter.submit(Intent::Attack).unwrap(),
        Progress::Finished(Outcome::Victory)
    );
}

fn seeded_run(seed: u64, strategy: DamageStrategy) -> [u8; 32] {
    let player = knight(4).with_attributes(Attributes {
        strength: 6,
        dexterity: 3,
        luck: 2,
        armor: 1,
        ..Attributes::default()
    });
    let enemy = Actor::new("slime", "Slime", false)
        .with_hp_max(30)
        .with_attack(3);

    let mut encounter = Encounter::builder()
        .player(player)
        .enemy(enemy)
        .seed(seed)
        .config(
            EncounterConfig::new()
                .with_strategy(strategy)
                .with_pacing(PacingConfig::instant()),
        )
        .build()
        .unwrap();
    encounter.start().unwrap();

    let intents = [Intent::Attack, Intent::Defend, Intent::Attack, Intent::Pass];
    for intent in intents.iter().cycle().take(64) {
        if let Progress::Finished(_) = play(&mut encounter, *intent) {
            break;
        }
    }
    encounter.state().log_digest()
}

#[test]
fn same_seed_replays_identically() {
    for strategy in [DamageStrategy::Simple, DamageStrategy::Rules] {
        assert_eq!(seeded_run(7, strategy), seeded_run(7, strategy));
    }
}
