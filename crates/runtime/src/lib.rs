//! Runtime orchestration for a paced one-vs-one encounter.
//!
//! This crate wires together the intent provider abstraction, the encounter
//! worker, and the event bus into a cohesive runtime API. Consumers embed
//! [`BattleRuntime`] to play an encounter, subscribe to events, and interact
//! with it through [`BattleHandle`].
//!
//! Modules are organized by responsibility:
//! - [`runtime`] hosts the orchestrator, builder and configuration
//! - [`api`] exposes the types downstream clients interact with
//! - [`events`] provides topic-based event bus for flexible event routing
//! - `workers` keeps the encounter task internal to the crate
pub mod api;
pub mod events;
pub mod runtime;

mod workers;

pub use api::{
    BattleHandle, ChannelIntentProvider, IntentProvider, PassIntentProvider, Prompt, Result,
    RuntimeError, ScriptedIntents, Snapshot,
};
pub use events::{Event, EventBus, PhaseEvent, Topic};
pub use runtime::{BattleRuntime, BattleRuntimeBuilder, RuntimeConfig};
