//! Append-only ordered event log.
//!
//! Lines carry an absolute sequence number. When a capacity is configured the
//! oldest lines are dropped, but sequence numbers keep counting, so a reader
//! holding a cursor never sees a line twice.

use std::collections::VecDeque;

/// One rendered line of combat narration.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LogEvent {
    /// Absolute position in the log, starting at 0.
    pub seq: u64,
    pub text: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EventLog {
    events: VecDeque<LogEvent>,
    next_seq: u64,
    capacity: Option<usize>,
}

impl EventLog {
    /// Creates an unbounded log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a log that keeps at most `capacity` lines (minimum 1).
    pub fn bounded(capacity: usize) -> Self {
        Self {
            capacity: Some(capacity.max(1)),
            ..Self::default()
        }
    }

    /// Appends a line and returns its sequence number.
    pub fn append(&mut self, text: impl Into<String>) -> u64 {
        let seq = self.next_seq;
        self.next_seq += 1;

        if let Some(capacity) = self.capacity
            && self.events.len() >= capacity
        {
            self.events.pop_front();
        }

        self.events.push_back(LogEvent {
            seq,
            text: text.into(),
        });
        seq
    }

    /// Sequence number the next appended line will receive.
    pub fn cursor(&self) -> u64 {
        self.next_seq
    }

    /// Lines with `seq >= cursor` that are still retained, oldest first.
    pub fn since(&self, cursor: u64) -> impl Iterator<Item = &LogEvent> {
        self.events.iter().filter(move |event| event.seq >= cursor)
    }

    pub fn iter(&self) -> impl Iterator<Item = &LogEvent> {
        self.events.iter()
    }

    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.events.iter().map(|event| event.text.as_str())
    }

    pub fn last(&self) -> Option<&LogEvent> {
        self.events.back()
    }

    /// Number of retained lines.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Total number of lines ever appended.
    pub fn total(&self) -> u64 {
        self.next_seq
    }
}
