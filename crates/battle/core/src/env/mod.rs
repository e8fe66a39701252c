//! Environment collaborators injected into an encounter.

pub mod rng;

pub use rng::{PcgStream, RngStream, ScriptedRng};
