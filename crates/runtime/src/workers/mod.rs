//! Worker tasks that back the runtime orchestration.
//!
//! The encounter worker owns the engine and its pacing timers.

mod encounter;

pub use encounter::{Command, EncounterWorker};
