//! Topic-based event bus implementation.

use std::collections::HashMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

use battle_core::{LogEvent, ResourceHint};

use super::types::PhaseEvent;

/// Topics for event routing
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub enum Topic {
    /// Battle log lines, in order
    Log,
    /// Hp bar hints
    Hud,
    /// Phase changes and the termination callback
    Phase,
}

impl Topic {
    pub const ALL: [Topic; 3] = [Topic::Log, Topic::Hud, Topic::Phase];
}

/// Event wrapper that carries the topic and typed event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Event {
    Log(LogEvent),
    Hud(ResourceHint),
    Phase(PhaseEvent),
}

impl Event {
    pub fn topic(&self) -> Topic {
        match self {
            Event::Log(_) => Topic::Log,
            Event::Hud(_) => Topic::Hud,
            Event::Phase(_) => Topic::Phase,
        }
    }
}

#[derive(Debug)]
struct Channels {
    log: broadcast::Sender<Event>,
    hud: broadcast::Sender<Event>,
    phase: broadcast::Sender<Event>,
}

impl Channels {
    fn sender(&self, topic: Topic) -> &broadcast::Sender<Event> {
        match topic {
            Topic::Log => &self.log,
            Topic::Hud => &self.hud,
            Topic::Phase => &self.phase,
        }
    }
}

/// Topic-based event bus
///
/// Allows consumers to subscribe to specific topics and only receive
/// events they care about. Publishing is best-effort: events sent while a
/// topic has no subscribers are dropped.
#[derive(Debug, Clone)]
pub struct EventBus {
    channels: Arc<Channels>,
}

impl EventBus {
    /// Creates a new event bus with default capacity for each topic
    pub fn new() -> Self {
        Self::with_capacity(100)
    }

    /// Creates a new event bus with specified capacity per topic
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            channels: Arc::new(Channels {
                log: broadcast::channel(capacity).0,
                hud: broadcast::channel(capacity).0,
                phase: broadcast::channel(capacity).0,
            }),
        }
    }

    /// Publish an event to its corresponding topic
    pub fn publish(&self, event: Event) {
        let topic = event.topic();
        if self.channels.sender(topic).send(event).is_err() {
            // No subscribers for this topic - this is normal, not an error
            tracing::trace!("No subscribers for topic {:?}", topic);
        }
    }

    /// Subscribe to a specific topic
    ///
    /// Returns a receiver that will only receive events for that topic.
    pub fn subscribe(&self, topic: Topic) -> broadcast::Receiver<Event> {
        self.channels.sender(topic).subscribe()
    }

    /// Subscribe to multiple topics
    pub fn subscribe_multiple(
        &self,
        topics: &[Topic],
    ) -> HashMap<Topic, broadcast::Receiver<Event>> {
        topics
            .iter()
            .map(|&topic| (topic, self.subscribe(topic)))
            .collect()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use battle_core::ActorId;

    #[tokio::test]
    async fn events_reach_only_their_topic() {
        let bus = EventBus::with_capacity(8);
        let mut log_rx = bus.subscribe(Topic::Log);
        let mut hud_rx = bus.subscribe(Topic::Hud);

        bus.publish(Event::Hud(ResourceHint {
            actor: ActorId::from("slime"),
            current: 4,
            max: 10,
        }));

        assert!(matches!(hud_rx.recv().await.unwrap(), Event::Hud(hint) if hint.current == 4));
        assert!(log_rx.try_recv().is_err());
    }

    #[test]
    fn publish_without_subscribers_is_silent() {
        let bus = EventBus::new();
        bus.publish(Event::Phase(PhaseEvent::Abandoned {
            phase: battle_core::Phase::Busy,
        }));
    }
}
