//! Asynchronous abstraction for sourcing player intents.
//!
//! Runtime users plug in [`IntentProvider`] implementations so an encounter
//! can run with console input, scripted fixtures, or a fixed policy.
use std::collections::VecDeque;

use async_trait::async_trait;
use tokio::sync::{Mutex, mpsc};

use battle_core::{CombatState, Intent};

use super::errors::{Result, RuntimeError};

/// Supplies the player's intent whenever a player turn opens.
#[async_trait]
pub trait IntentProvider: Send + Sync {
    /// Choose an intent for the current player turn.
    ///
    /// `state` is a read-only snapshot taken when the turn opened.
    async fn provide_intent(&self, state: &CombatState) -> Result<Intent>;
}

/// Always passes. Useful as a fallback or to watch the enemy win.
pub struct PassIntentProvider;

#[async_trait]
impl IntentProvider for PassIntentProvider {
    async fn provide_intent(&self, _state: &CombatState) -> Result<Intent> {
        Ok(Intent::Pass)
    }
}

/// Replays a fixed list of intents, then fails with
/// [`RuntimeError::IntentsExhausted`].
pub struct ScriptedIntents {
    script: Mutex<VecDeque<Intent>>,
}

impl ScriptedIntents {
    pub fn new(intents: impl IntoIterator<Item = Intent>) -> Self {
        Self {
            script: Mutex::new(intents.into_iter().collect()),
        }
    }
}

#[async_trait]
impl IntentProvider for ScriptedIntents {
    async fn provide_intent(&self, _state: &CombatState) -> Result<Intent> {
        self.script
            .lock()
            .await
            .pop_front()
            .ok_or(RuntimeError::IntentsExhausted)
    }
}

/// Waits for intents pushed through an mpsc channel (console or UI input).
pub struct ChannelIntentProvider {
    rx_intent: Mutex<mpsc::Receiver<Intent>>,
}

impl ChannelIntentProvider {
    pub fn new(rx_intent: mpsc::Receiver<Intent>) -> Self {
        Self {
            rx_intent: Mutex::new(rx_intent),
        }
    }

    /// Creates a provider together with the sender feeding it.
    pub fn channel(buffer: usize) -> (mpsc::Sender<Intent>, Self) {
        let (tx, rx) = mpsc::channel(buffer);
        (tx, Self::new(rx))
    }
}

#[async_trait]
impl IntentProvider for ChannelIntentProvider {
    async fn provide_intent(&self, state: &CombatState) -> Result<Intent> {
        let mut rx = self.rx_intent.lock().await;

        match rx.recv().await {
            Some(intent) => {
                tracing::trace!(%intent, turn = state.turn, "intent received");
                Ok(intent)
            }
            None => Err(RuntimeError::IntentProviderChannelClosed),
        }
    }
}
