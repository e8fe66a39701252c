//! Console loop: prints events, forwards input.

use anyhow::Result;
use tokio::sync::{broadcast, mpsc};

use battle_core::{Outcome, Progress, ResourceHint};
use battle_runtime::{BattleHandle, Event, PhaseEvent, Topic};

use crate::config::ClientConfig;
use crate::input::InputLine;

const HP_BAR_WIDTH: usize = 20;

pub struct ConsoleApp {
    handle: BattleHandle,
    config: ClientConfig,
    log_rx: broadcast::Receiver<Event>,
    hud_rx: broadcast::Receiver<Event>,
    phase_rx: broadcast::Receiver<Event>,
    input_rx: mpsc::Receiver<InputLine>,
}

impl ConsoleApp {
    /// Subscribes before anything is started so no line is missed.
    pub fn new(handle: BattleHandle, config: ClientConfig, input_rx: mpsc::Receiver<InputLine>) -> Self {
        Self {
            log_rx: handle.subscribe(Topic::Log),
            hud_rx: handle.subscribe(Topic::Hud),
            phase_rx: handle.subscribe(Topic::Phase),
            handle,
            config,
            input_rx,
        }
    }

    /// Runs until the encounter ends. `None` means the player quit.
    pub async fn run(mut self) -> Result<Option<Outcome>> {
        self.handle.start().await?;
        let mut input_open = true;

        loop {
            tokio::select! {
                event = self.log_rx.recv() => self.on_event(event),
                event = self.hud_rx.recv() => self.on_event(event),
                event = self.phase_rx.recv() => {
                    if let Some(done) = self.on_phase(event) {
                        self.drain_log();
                        return Ok(done);
                    }
                }
                line = self.input_rx.recv(), if input_open => match line {
                    Some(line) => self.on_input(line).await?,
                    None => {
                        input_open = false;
                        tracing::info!("input closed; abandoning encounter");
                        self.handle.abandon().await?;
                    }
                },
            }
        }
    }

    async fn on_input(&mut self, line: InputLine) -> Result<()> {
        match line {
            InputLine::Intent(intent) => {
                if self.handle.submit(intent).await? == Progress::Ignored {
                    println!("  (wait for your turn)");
                }
            }
            InputLine::Quit => {
                self.handle.abandon().await?;
            }
            InputLine::Unknown(text) => {
                println!("  unknown command {text:?}; use 1/attack, 2/defend, 3/pass or q");
            }
        }
        Ok(())
    }

    fn on_event(&self, event: Result<Event, broadcast::error::RecvError>) {
        match event {
            Ok(Event::Log(line)) => println!("{}", line.text),
            Ok(Event::Hud(hint)) if self.config.show_hud => println!("{}", hp_bar(&hint)),
            Ok(_) => {}
            Err(broadcast::error::RecvError::Lagged(skipped)) => {
                tracing::warn!(skipped, "console fell behind the event stream");
            }
            Err(broadcast::error::RecvError::Closed) => {}
        }
    }

    /// Returns `Some` once the encounter is over.
    fn on_phase(&self, event: Result<Event, broadcast::error::RecvError>) -> Option<Option<Outcome>> {
        match event {
            Ok(Event::Phase(PhaseEvent::Finished { outcome, turn, digest })) => {
                tracing::info!(%outcome, turn, %digest, "encounter finished");
                Some(Some(outcome))
            }
            Ok(Event::Phase(PhaseEvent::Abandoned { phase })) => {
                tracing::info!(%phase, "encounter abandoned");
                Some(None)
            }
            Ok(Event::Phase(PhaseEvent::Changed { from, to })) => {
                tracing::debug!(%from, %to, "phase changed");
                None
            }
            Ok(_) => None,
            Err(broadcast::error::RecvError::Lagged(skipped)) => {
                tracing::warn!(skipped, "phase stream lagged");
                None
            }
            Err(broadcast::error::RecvError::Closed) => Some(None),
        }
    }

    /// Log lines are published before the terminal phase event; print the
    /// ones not yet consumed.
    fn drain_log(&mut self) {
        while let Ok(event) = self.log_rx.try_recv() {
            self.on_event(Ok(event));
        }
    }
}

fn hp_bar(hint: &ResourceHint) -> String {
    let filled = if hint.max > 0 {
        (hint.current.max(0) as usize * HP_BAR_WIDTH) / hint.max as usize
    } else {
        0
    };
    format!(
        "  {:<8} [{}{}] {}/{}",
        hint.actor.as_str(),
        "#".repeat(filled),
        "-".repeat(HP_BAR_WIDTH - filled),
        hint.current,
        hint.max
    )
}
