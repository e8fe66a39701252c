//! High-level runtime orchestrator.
//!
//! The runtime owns the encounter worker, wires up command/event channels,
//! and exposes a builder-based API for clients to drive an encounter.

use std::str::FromStr;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use battle_core::{Actor, DamageStrategy, Encounter, EncounterConfig, Outcome, PcgStream, RngStream};

use crate::api::{BattleHandle, IntentProvider, Prompt, Result, RuntimeError};
use crate::events::EventBus;
use crate::workers::{Command, EncounterWorker};

/// Runtime configuration shared across the orchestrator and workers.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub encounter: EncounterConfig,
    /// Seed for the encounter's [`PcgStream`] when no stream is injected.
    pub seed: Option<u64>,
    pub event_buffer_size: usize,
    pub command_buffer_size: usize,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            encounter: EncounterConfig::default(),
            seed: None,
            event_buffer_size: 100,
            command_buffer_size: 32,
        }
    }
}

impl RuntimeConfig {
    pub const SEED_ENV: &'static str = "BATTLE_SEED";
    pub const STEP_DELAY_ENV: &'static str = "BATTLE_STEP_DELAY_MS";
    pub const ENEMY_DELAY_ENV: &'static str = "BATTLE_ENEMY_DELAY_MS";
    pub const STRATEGY_ENV: &'static str = "BATTLE_DAMAGE_STRATEGY";
    pub const LOG_CAPACITY_ENV: &'static str = "BATTLE_LOG_CAPACITY";

    /// Reads overrides from the process environment. Unset variables keep
    /// their defaults; unparsable ones are rejected.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) over an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(seed) = read_env::<u64>(&lookup, Self::SEED_ENV)? {
            config.seed = Some(seed);
        }
        if let Some(ms) = read_env::<u64>(&lookup, Self::STEP_DELAY_ENV)? {
            config.encounter.pacing.step_delay = Duration::from_millis(ms);
        }
        if let Some(ms) = read_env::<u64>(&lookup, Self::ENEMY_DELAY_ENV)? {
            config.encounter.pacing.enemy_turn_delay = Duration::from_millis(ms);
        }
        if let Some(strategy) = read_env::<DamageStrategy>(&lookup, Self::STRATEGY_ENV)? {
            config.encounter.strategy = strategy;
        }
        if let Some(capacity) = read_env::<usize>(&lookup, Self::LOG_CAPACITY_ENV)? {
            config.encounter.log_capacity = Some(capacity);
        }

        Ok(config)
    }
}

fn read_env<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
) -> Result<Option<T>> {
    let Some(raw) = lookup(key) else {
        return Ok(None);
    };
    let value = raw.trim();
    if value.is_empty() {
        return Ok(None);
    }

    value
        .parse()
        .map(Some)
        .map_err(|_| RuntimeError::InvalidConfig {
            key,
            value: raw.clone(),
        })
}

/// Main runtime that orchestrates one encounter
///
/// Design: the runtime owns the worker and the intent provider.
/// [`BattleHandle`] provides a cloneable façade for clients.
pub struct BattleRuntime {
    handle: BattleHandle,
    provider: Option<Box<dyn IntentProvider>>,
    worker_handle: JoinHandle<()>,
}

impl BattleRuntime {
    /// Create a new runtime builder
    pub fn builder() -> BattleRuntimeBuilder {
        BattleRuntimeBuilder::new()
    }

    /// Get a cloneable handle to this runtime
    pub fn handle(&self) -> BattleHandle {
        self.handle.clone()
    }

    /// Set the player intent provider
    pub fn set_provider(&mut self, provider: impl IntentProvider + 'static) {
        self.provider = Some(Box::new(provider));
    }

    /// Play one player turn: wait for it to open, ask the provider, submit.
    ///
    /// Returns the outcome once the encounter has ended.
    pub async fn step(&mut self) -> Result<Option<Outcome>> {
        let provider = self.provider.as_ref().ok_or(RuntimeError::ProviderNotSet)?;

        match self.handle.next_prompt().await? {
            Prompt::Finished(outcome) => Ok(Some(outcome)),
            Prompt::Input { state, .. } => {
                let intent = provider.provide_intent(&state).await?;
                self.handle.submit(intent).await?;
                Ok(None)
            }
        }
    }

    /// Start the encounter and play it to the end
    pub async fn run(&mut self) -> Result<Outcome> {
        if self.provider.is_none() {
            return Err(RuntimeError::ProviderNotSet);
        }

        self.handle.start().await?;
        loop {
            if let Some(outcome) = self.step().await? {
                return Ok(outcome);
            }
        }
    }

    /// Shutdown the runtime gracefully
    pub async fn shutdown(self) -> Result<()> {
        drop(self.handle);
        self.worker_handle.await.map_err(RuntimeError::WorkerJoin)
    }
}

/// Builder for [`BattleRuntime`] with flexible configuration.
pub struct BattleRuntimeBuilder {
    config: RuntimeConfig,
    player: Option<Actor>,
    enemy: Option<Actor>,
    rng: Option<Box<dyn RngStream>>,
    provider: Option<Box<dyn IntentProvider>>,
    event_bus: Option<EventBus>,
}

impl BattleRuntimeBuilder {
    fn new() -> Self {
        Self {
            config: RuntimeConfig::default(),
            player: None,
            enemy: None,
            rng: None,
            provider: None,
            event_bus: None,
        }
    }

    /// Override runtime configuration
    pub fn config(mut self, config: RuntimeConfig) -> Self {
        self.config = config;
        self
    }

    pub fn player(mut self, actor: Actor) -> Self {
        self.player = Some(actor);
        self
    }

    pub fn enemy(mut self, actor: Actor) -> Self {
        self.enemy = Some(actor);
        self
    }

    /// Inject a random stream. Takes precedence over `RuntimeConfig::seed`.
    pub fn rng(mut self, rng: impl RngStream + 'static) -> Self {
        self.rng = Some(Box::new(rng));
        self
    }

    /// Set player intent provider (optional)
    pub fn provider(mut self, provider: impl IntentProvider + 'static) -> Self {
        self.provider = Some(Box::new(provider));
        self
    }

    /// Share an existing event bus, e.g. one subscribed to before building.
    pub fn event_bus(mut self, event_bus: EventBus) -> Self {
        self.event_bus = Some(event_bus);
        self
    }

    /// Build the runtime and spawn its worker.
    ///
    /// Must be called from within a tokio runtime.
    pub fn build(self) -> Result<BattleRuntime> {
        let mut builder = Encounter::builder().config(self.config.encounter);
        if let Some(player) = self.player {
            builder = builder.player(player);
        }
        if let Some(enemy) = self.enemy {
            builder = builder.enemy(enemy);
        }
        match (self.rng, self.config.seed) {
            (Some(rng), _) => builder = builder.rng(rng),
            (None, Some(seed)) => builder = builder.rng(PcgStream::new(seed)),
            (None, None) => {}
        }
        let encounter = builder.build()?;

        let (command_tx, command_rx) = mpsc::channel::<Command>(self.config.command_buffer_size);
        let event_bus = self
            .event_bus
            .unwrap_or_else(|| EventBus::with_capacity(self.config.event_buffer_size));

        let handle = BattleHandle::new(command_tx, event_bus.clone());
        let worker = EncounterWorker::new(encounter, command_rx, event_bus);

        let worker_handle = tokio::spawn(async move {
            worker.run().await;
        });

        Ok(BattleRuntime {
            handle,
            provider: self.provider,
            worker_handle,
        })
    }
}
