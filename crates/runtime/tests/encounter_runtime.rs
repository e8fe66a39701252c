use battle_core::{
    Actor, DamageStrategy, EncounterConfig, Intent, Outcome, PacingConfig, Phase, Progress,
    Resume, ScriptedRng, SetupError,
};
use battle_runtime::{
    BattleRuntime, Event, PassIntentProvider, PhaseEvent, Prompt, RuntimeConfig, RuntimeError,
    ScriptedIntents, Topic,
};

fn knight() -> Actor {
    Actor::new("knight", "Knight", true)
        .with_hp_max(20)
        .with_attack(5)
}

fn slime() -> Actor {
    Actor::new("slime", "Slime", false)
        .with_hp_max(10)
        .with_attack(1)
}

fn config(pacing: PacingConfig) -> RuntimeConfig {
    RuntimeConfig {
        encounter: EncounterConfig::new()
            .with_strategy(DamageStrategy::Simple)
            .with_pacing(pacing),
        ..RuntimeConfig::default()
    }
}

#[tokio::test(start_paused = true)]
async fn scripted_attacks_win_with_default_pacing() {
    let mut runtime = BattleRuntime::builder()
        .config(config(PacingConfig::default()))
        .player(knight())
        .enemy(slime())
        .rng(ScriptedRng::new([0; 8]))
        .provider(ScriptedIntents::new([Intent::Attack, Intent::Attack]))
        .build()
        .unwrap();

    let handle = runtime.handle();
    let mut log_rx = handle.subscribe(Topic::Log);
    let mut phase_rx = handle.subscribe(Topic::Phase);

    let outcome = runtime.run().await.unwrap();
    assert_eq!(outcome, Outcome::Victory);

    let mut lines = Vec::new();
    while let Ok(Event::Log(event)) = log_rx.try_recv() {
        lines.push(event.text);
    }
    assert_eq!(lines.first().map(String::as_str), Some("A wild Slime appears!"));
    assert_eq!(lines.last().map(String::as_str), Some("Victory! Slime is defeated."));
    assert!(lines.contains(&"Slime hits Knight for 1 damage. (19/20 HP)".to_string()));

    let snapshot = handle.query_state().await.unwrap();
    assert_eq!(snapshot.phase, Phase::Victory);
    assert_eq!(snapshot.state.turn, 1);
    assert!(snapshot.state.over);

    let mut finished = None;
    while let Ok(Event::Phase(event)) = phase_rx.try_recv() {
        if let PhaseEvent::Finished { outcome, digest, .. } = event {
            finished = Some((outcome, digest));
        }
    }
    let (outcome, digest) = finished.unwrap();
    assert_eq!(outcome, Outcome::Victory);
    assert_eq!(digest, hex::encode(snapshot.state.log_digest()));

    runtime.shutdown().await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn pacing_keeps_phase_busy_until_the_delay_elapses() {
    let runtime = BattleRuntime::builder()
        .config(config(PacingConfig::default()))
        .player(knight())
        .enemy(slime())
        .rng(ScriptedRng::new([0; 4]))
        .build()
        .unwrap();
    let handle = runtime.handle();

    assert_eq!(handle.start().await.unwrap(), Progress::AwaitingInput);
    assert!(matches!(
        handle.submit(Intent::Defend).await.unwrap(),
        Progress::Suspended(_)
    ));

    let snapshot = handle.query_state().await.unwrap();
    assert_eq!(snapshot.phase, Phase::Busy);
    assert_eq!(snapshot.pending.map(|s| s.resume), Some(Resume::EnterEnemyTurn));
    assert_eq!(handle.submit(Intent::Attack).await.unwrap(), Progress::Ignored);

    tokio::time::advance(PacingConfig::DEFAULT_STEP_DELAY).await;
    let snapshot = handle.query_state().await.unwrap();
    assert_eq!(snapshot.phase, Phase::EnemyTurn);
    assert_eq!(snapshot.pending.map(|s| s.resume), Some(Resume::EnemyStrike));

    tokio::time::advance(PacingConfig::DEFAULT_ENEMY_TURN_DELAY).await;
    let snapshot = handle.query_state().await.unwrap();
    let player = snapshot.state.actor(&"knight".into()).unwrap();
    assert!(!player.defending);
    // 1 damage halves up to 1
    assert_eq!(player.hp().current(), 19);

    match handle.next_prompt().await.unwrap() {
        Prompt::Input { turn, .. } => assert_eq!(turn, 1),
        other => panic!("expected input prompt, got {other:?}"),
    }
}

#[tokio::test(start_paused = true)]
async fn hud_hints_follow_hp_changes() {
    let runtime = BattleRuntime::builder()
        .config(config(PacingConfig::default()))
        .player(knight())
        .enemy(slime())
        .rng(ScriptedRng::new([0; 4]))
        .build()
        .unwrap();
    let handle = runtime.handle();
    let mut hud_rx = handle.subscribe(Topic::Hud);

    handle.start().await.unwrap();
    handle.submit(Intent::Attack).await.unwrap();

    let mut hints = Vec::new();
    while let Ok(Event::Hud(hint)) = hud_rx.try_recv() {
        hints.push((hint.actor.to_string(), hint.current, hint.max));
    }
    assert_eq!(
        hints,
        [
            ("knight".to_string(), 20, 20),
            ("slime".to_string(), 10, 10),
            ("slime".to_string(), 5, 10),
        ]
    );
}

#[tokio::test(start_paused = true)]
async fn passive_player_is_defeated() {
    let mut runtime = BattleRuntime::builder()
        .config(RuntimeConfig {
            seed: Some(3),
            ..config(PacingConfig::instant())
        })
        .player(Actor::new("knight", "Knight", true).with_hp_max(3))
        .enemy(slime().with_attack(4))
        .provider(PassIntentProvider)
        .build()
        .unwrap();

    assert_eq!(runtime.run().await.unwrap(), Outcome::Defeat);
    assert_eq!(
        runtime.handle().next_prompt().await.unwrap(),
        Prompt::Finished(Outcome::Defeat)
    );
}

#[tokio::test(start_paused = true)]
async fn abandon_stops_the_worker() {
    let runtime = BattleRuntime::builder()
        .config(config(PacingConfig::default()))
        .player(knight())
        .enemy(slime())
        .rng(ScriptedRng::new([]))
        .build()
        .unwrap();
    let handle = runtime.handle();
    let mut phase_rx = handle.subscribe(Topic::Phase);

    handle.start().await.unwrap();
    handle.submit(Intent::Pass).await.unwrap();

    let state = handle.abandon().await.unwrap();
    assert!(!state.over);
    assert_eq!(state.log.last().unwrap().text, "Knight waits, watching the enemy closely…");

    let mut abandoned = false;
    while let Ok(event) = phase_rx.try_recv() {
        abandoned |= event == Event::Phase(PhaseEvent::Abandoned { phase: Phase::Busy });
    }
    assert!(abandoned);

    assert!(handle.query_state().await.is_err());
    runtime.shutdown().await.unwrap();
}

#[tokio::test]
async fn missing_rng_is_a_setup_error() {
    let result = BattleRuntime::builder()
        .player(knight())
        .enemy(slime())
        .build();
    assert!(matches!(
        result,
        Err(RuntimeError::Setup(SetupError::MissingRng))
    ));
}

#[tokio::test]
async fn run_requires_a_provider() {
    let mut runtime = BattleRuntime::builder()
        .player(knight())
        .enemy(slime())
        .rng(ScriptedRng::new([]))
        .build()
        .unwrap();
    assert!(matches!(runtime.run().await, Err(RuntimeError::ProviderNotSet)));
}

#[tokio::test(start_paused = true)]
async fn exhausted_script_surfaces_an_error() {
    let mut runtime = BattleRuntime::builder()
        .config(config(PacingConfig::instant()))
        .player(knight())
        .enemy(Actor::new("slime", "Slime", false).with_hp_max(50).with_attack(1))
        .rng(ScriptedRng::new([]))
        .provider(ScriptedIntents::new([Intent::Attack]))
        .build()
        .unwrap();

    assert!(matches!(runtime.run().await, Err(RuntimeError::IntentsExhausted)));
}
