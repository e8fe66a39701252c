//! Values returned by the handle.

use battle_core::{CombatState, Outcome, Phase, Suspension};

/// What the player side should do next.
#[derive(Debug, Clone, PartialEq)]
pub enum Prompt {
    /// A player turn is open. `state` is a snapshot taken when it opened.
    Input { turn: u32, state: CombatState },
    /// The encounter ended.
    Finished(Outcome),
}

/// Read-only view of the worker's encounter.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub phase: Phase,
    /// Continuation currently being waited on, if any.
    pub pending: Option<Suspension>,
    pub state: CombatState,
}
