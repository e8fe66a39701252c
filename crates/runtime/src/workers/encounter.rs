//! Encounter worker that owns the authoritative [`battle_core::Encounter`].
//!
//! Receives commands from [`BattleHandle`](crate::BattleHandle), drives the
//! engine, turns its suspensions into timers and publishes events to the
//! EventBus. Pacing never blocks the command loop: while a suspension is
//! pending, commands keep being served and intents are dropped by the engine.

use std::ops::ControlFlow;

use tokio::sync::{mpsc, oneshot};
use tokio::time::{Instant, sleep_until};
use tracing::{debug, warn};

use battle_core::{
    CombatState, Encounter, Intent, Phase, Progress, ResourceHint, Suspension,
};

use crate::api::{Prompt, Result, Snapshot};
use crate::events::{Event, EventBus, PhaseEvent};

/// Commands that can be sent to the encounter worker
pub enum Command {
    /// Refill hp, announce the enemy and open the first player turn.
    Start {
        reply: oneshot::Sender<Result<Progress>>,
    },
    /// Apply a player intent. Replies with the immediate engine progress.
    Submit {
        intent: Intent,
        reply: oneshot::Sender<Result<Progress>>,
    },
    /// Resolves once the player may act or the encounter has ended.
    NextPrompt { reply: oneshot::Sender<Prompt> },
    /// Read-only snapshot of phase and state.
    QueryState { reply: oneshot::Sender<Snapshot> },
    /// Drop the encounter and stop the worker.
    Abandon { reply: oneshot::Sender<CombatState> },
}

/// Background task that processes encounter commands.
pub struct EncounterWorker {
    encounter: Encounter,
    command_rx: mpsc::Receiver<Command>,
    event_bus: EventBus,
    /// When the pending suspension elapses.
    wake_at: Option<Instant>,
    /// Callers parked until the next prompt.
    waiters: Vec<oneshot::Sender<Prompt>>,
    /// Next log sequence number to publish.
    cursor: u64,
    phase: Phase,
    hints: Vec<ResourceHint>,
}

impl EncounterWorker {
    pub fn new(
        encounter: Encounter,
        command_rx: mpsc::Receiver<Command>,
        event_bus: EventBus,
    ) -> Self {
        tracing::info!(
            "EncounterWorker initialized with order: {:?}, strategy: {}",
            encounter.state().order(),
            encounter.config().strategy
        );

        let phase = encounter.phase();
        Self {
            encounter,
            command_rx,
            event_bus,
            wake_at: None,
            waiters: Vec::new(),
            cursor: 0,
            phase,
            hints: Vec::new(),
        }
    }

    /// Main worker loop.
    pub async fn run(mut self) {
        loop {
            let wake_at = self.wake_at.unwrap_or_else(Instant::now);

            tokio::select! {
                // an elapsed suspension resumes before queued commands are served
                biased;

                _ = sleep_until(wake_at), if self.wake_at.is_some() => {
                    self.wake_at = None;
                    self.resume();
                }
                cmd = self.command_rx.recv() => match cmd {
                    Some(cmd) => {
                        if let ControlFlow::Break(reply) = self.handle_command(cmd) {
                            let phase = self.encounter.phase();
                            self.event_bus.publish(Event::Phase(PhaseEvent::Abandoned { phase }));
                            if reply.send(self.encounter.abandon()).is_err() {
                                debug!("Abandon reply channel closed (caller dropped)");
                            }
                            break;
                        }
                    }
                    None => {
                        debug!("command channel closed; encounter worker stopping");
                        break;
                    }
                },
            }
        }
    }

    /// Serves one command. Breaks with the reply channel on [`Command::Abandon`].
    fn handle_command(&mut self, cmd: Command) -> ControlFlow<oneshot::Sender<CombatState>> {
        match cmd {
            Command::Start { reply } => {
                let result = self.encounter.start().map_err(Into::into);
                self.after_step(&result);
                if reply.send(result).is_err() {
                    debug!("Start reply channel closed (caller dropped)");
                }
            }
            Command::Submit { intent, reply } => {
                let result = self.encounter.submit(intent).map_err(Into::into);
                self.after_step(&result);
                if reply.send(result).is_err() {
                    debug!("Submit reply channel closed (caller dropped)");
                }
            }
            Command::NextPrompt { reply } => match self.prompt() {
                Some(prompt) => {
                    if reply.send(prompt).is_err() {
                        debug!("NextPrompt reply channel closed (caller dropped)");
                    }
                }
                None => self.waiters.push(reply),
            },
            Command::QueryState { reply } => {
                let snapshot = Snapshot {
                    phase: self.encounter.phase(),
                    pending: self.encounter.pending(),
                    state: self.encounter.state().clone(),
                };
                if reply.send(snapshot).is_err() {
                    debug!("QueryState reply channel closed (caller dropped)");
                }
            }
            Command::Abandon { reply } => return ControlFlow::Break(reply),
        }

        ControlFlow::Continue(())
    }

    /// Continues the engine after a pacing delay elapsed.
    fn resume(&mut self) {
        let result = self.encounter.advance().map_err(Into::into);
        if let Err(err) = &result {
            warn!("encounter failed to resume: {err}");
        }
        self.after_step(&result);
    }

    /// Publishes what changed, arms the next timer and wakes prompt waiters.
    fn after_step(&mut self, result: &Result<Progress>) {
        self.publish_changes();

        if let Ok(Progress::Suspended(Suspension { delay, resume })) = result {
            debug!(?delay, %resume, "encounter suspended");
            self.wake_at = Some(Instant::now() + *delay);
        }

        if let Some(prompt) = self.prompt() {
            for waiter in self.waiters.drain(..) {
                if waiter.send(prompt.clone()).is_err() {
                    debug!("NextPrompt reply channel closed (caller dropped)");
                }
            }
        }
    }

    fn publish_changes(&mut self) {
        let state = self.encounter.state();

        for event in state.log.since(self.cursor) {
            self.event_bus.publish(Event::Log(event.clone()));
        }
        self.cursor = state.log.cursor();

        let hints = state.hp_hints();
        for hint in &hints {
            if !self.hints.contains(hint) {
                self.event_bus.publish(Event::Hud(hint.clone()));
            }
        }
        self.hints = hints;

        let phase = self.encounter.phase();
        if phase != self.phase {
            self.event_bus.publish(Event::Phase(PhaseEvent::Changed {
                from: self.phase,
                to: phase,
            }));
            self.phase = phase;

            if let Some(outcome) = self.encounter.outcome() {
                let state = self.encounter.state();
                self.event_bus.publish(Event::Phase(PhaseEvent::Finished {
                    outcome,
                    turn: state.turn,
                    digest: hex::encode(state.log_digest()),
                }));
            }
        }
    }

    fn prompt(&self) -> Option<Prompt> {
        if let Some(outcome) = self.encounter.outcome() {
            return Some(Prompt::Finished(outcome));
        }

        (self.encounter.phase() == Phase::PlayerTurn).then(|| Prompt::Input {
            turn: self.encounter.state().turn,
            state: self.encounter.state().clone(),
        })
    }
}
