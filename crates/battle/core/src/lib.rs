//! Deterministic combat rules for a one-vs-one encounter.
//!
//! `battle-core` holds the actor records, the attack resolver with its two
//! damage strategies, the event log and the turn-phase state machine. It never
//! sleeps and never owns a global random generator: pacing is reported to the
//! host as explicit suspensions and every roll comes from the injected
//! [`env::RngStream`]. All state mutation flows through [`engine::Encounter`].
pub mod combat;
pub mod config;
pub mod engine;
pub mod env;
pub mod error;
pub mod state;
pub use combat::{
    AttackOutcome, AttackResult, DamageStrategy, LineForm, calculate_crit_chance,
    calculate_hit_chance, deal_physical_damage, resolve_attack, verb_for_weapon,
};
pub use config::{CombatParams, CritParams, DamageParams, EncounterConfig, HitParams, PacingConfig};
pub use engine::{
    Encounter, EncounterBuilder, Intent, Outcome, PLAYER_PROMPT, Phase, Progress, Resume,
    SetupError, Suspension, TurnError,
};
pub use env::{PcgStream, RngStream, ScriptedRng};
pub use error::{BattleError, ErrorSeverity};
pub use state::{
    Actor, ActorId, Attributes, CombatState, Equipment, EventLog, LogEvent, Progression, Resource,
    ResourceError, ResourceHint, ResourceKind, StateError, StatusCode, StatusEffect,
    StatusEffects, TagFlags, Tags, Weapon, WeaponProfile,
};
