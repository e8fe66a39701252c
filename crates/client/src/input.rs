//! Stdin reader.
//!
//! Reading runs on a plain thread so a pending read never keeps the async
//! runtime from shutting down once the encounter is over.

use std::io::BufRead;
use std::thread;

use battle_core::Intent;
use tokio::sync::mpsc;

/// One parsed line of player input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputLine {
    Intent(Intent),
    Quit,
    Unknown(String),
}

impl InputLine {
    pub fn parse(line: &str) -> Option<Self> {
        let line = line.trim();
        if line.is_empty() {
            return None;
        }

        Some(match line.to_ascii_lowercase().as_str() {
            "q" | "quit" | "flee" => Self::Quit,
            other => other
                .parse::<Intent>()
                .map(Self::Intent)
                .unwrap_or_else(|_| Self::Unknown(line.to_string())),
        })
    }
}

/// Spawns the reader thread. The receiver closes on end of input.
pub fn spawn_reader(buffer: usize) -> mpsc::Receiver<InputLine> {
    let (tx, rx) = mpsc::channel(buffer);

    thread::spawn(move || {
        let stdin = std::io::stdin();
        for line in stdin.lock().lines() {
            let Ok(line) = line else {
                break;
            };
            let Some(input) = InputLine::parse(&line) else {
                continue;
            };
            if tx.blocking_send(input).is_err() {
                break;
            }
        }
    });

    rx
}
