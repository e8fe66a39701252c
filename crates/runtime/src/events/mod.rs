//! Topic-based event bus for runtime events.
//!
//! Events are published to specific topics, and consumers subscribe only to
//! the topics they need: a console sink reads [`Topic::Log`], a UI reads
//! [`Topic::Hud`], and the host's termination handling reads [`Topic::Phase`].

mod bus;
mod types;

pub use bus::{Event, EventBus, Topic};
pub use types::PhaseEvent;
