//! Typed payloads carried on each topic.

use serde::{Deserialize, Serialize};

use battle_core::{Outcome, Phase};

/// Phase-machine notifications.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PhaseEvent {
    Changed {
        from: Phase,
        to: Phase,
    },
    /// Terminal notification; the host decides what follows.
    Finished {
        outcome: Outcome,
        turn: u32,
        /// Hex SHA-256 of the encounter log, for replay comparison.
        digest: String,
    },
    /// The host gave up the encounter before a terminal phase.
    Abandoned {
        phase: Phase,
    },
}
