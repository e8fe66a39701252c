//! Cloneable façade for issuing commands to the runtime.
//!
//! [`BattleHandle`] hides channel plumbing and offers async helpers for
//! submitting intents or streaming events from specific topics.
use std::collections::HashMap;

use tokio::sync::{broadcast, mpsc, oneshot};

use battle_core::{CombatState, Intent, Progress};

use super::errors::{Result, RuntimeError};
use super::types::{Prompt, Snapshot};
use crate::events::{Event, EventBus, Topic};
use crate::workers::Command;

/// Client-facing handle to interact with the runtime
#[derive(Clone)]
pub struct BattleHandle {
    command_tx: mpsc::Sender<Command>,
    event_bus: EventBus,
}

impl BattleHandle {
    pub(crate) fn new(command_tx: mpsc::Sender<Command>, event_bus: EventBus) -> Self {
        Self {
            command_tx,
            event_bus,
        }
    }

    async fn request<T>(&self, make: impl FnOnce(oneshot::Sender<T>) -> Command) -> Result<T> {
        let (reply_tx, reply_rx) = oneshot::channel();

        self.command_tx
            .send(make(reply_tx))
            .await
            .map_err(|_| RuntimeError::CommandChannelClosed)?;

        reply_rx.await.map_err(RuntimeError::ReplyChannelClosed)
    }

    /// Start the encounter: refill hp, log the intro and open the first turn.
    pub async fn start(&self) -> Result<Progress> {
        self.request(|reply| Command::Start { reply }).await?
    }

    /// Submit a player intent.
    ///
    /// Returns [`Progress::Ignored`] when no player turn is open.
    pub async fn submit(&self, intent: Intent) -> Result<Progress> {
        self.request(|reply| Command::Submit { intent, reply })
            .await?
    }

    /// Wait until the player may act or the encounter has ended.
    pub async fn next_prompt(&self) -> Result<Prompt> {
        self.request(|reply| Command::NextPrompt { reply }).await
    }

    /// Query phase, pending continuation and state (read-only snapshot)
    pub async fn query_state(&self) -> Result<Snapshot> {
        self.request(|reply| Command::QueryState { reply }).await
    }

    /// Abandon the encounter at any phase. The worker stops afterwards.
    pub async fn abandon(&self) -> Result<CombatState> {
        self.request(|reply| Command::Abandon { reply }).await
    }

    /// Subscribe to events from a specific topic
    ///
    /// # Topics
    ///
    /// - `Topic::Log` - Battle log lines
    /// - `Topic::Hud` - Hp bar hints
    /// - `Topic::Phase` - Phase changes, termination and abandonment
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use battle_runtime::Topic;
    ///
    /// let mut log_rx = handle.subscribe(Topic::Log);
    /// while let Ok(event) = log_rx.recv().await {
    ///     // Print log lines
    /// }
    /// ```
    pub fn subscribe(&self, topic: Topic) -> broadcast::Receiver<Event> {
        self.event_bus.subscribe(topic)
    }

    /// Subscribe to multiple topics at once
    pub fn subscribe_multiple(&self, topics: &[Topic]) -> HashMap<Topic, broadcast::Receiver<Event>> {
        self.event_bus.subscribe_multiple(topics)
    }

    /// Get a reference to the event bus for advanced usage
    pub fn event_bus(&self) -> &EventBus {
        &self.event_bus
    }
}
