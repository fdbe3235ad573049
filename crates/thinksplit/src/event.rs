//! Recorded listener notifications.
//!
//! [`SplitEvent`] mirrors the four [`SplitterListener`] callbacks as data, and
//! [`EventCollector`] is a listener that records them so a caller can drain
//! them after each fed chunk instead of reacting inside the callbacks.
//!
//! # Examples
//!
//! ```
//! use thinksplit::{EventCollector, SplitEvent, SplitterOptions, StreamTagSplitter};
//!
//! let mut splitter =
//!     StreamTagSplitter::with_listener(SplitterOptions::default(), EventCollector::new());
//! splitter.process_chunk("<think>a</think>b");
//! let events: Vec<_> = splitter.listener_mut().drain().collect();
//! assert_eq!(
//!     events,
//!     vec![
//!         SplitEvent::ThinkIncrement { delta: "a".to_string() },
//!         SplitEvent::ThinkComplete { think: "a".to_string() },
//!         SplitEvent::ReplyIncrement { delta: "b".to_string() },
//!         SplitEvent::ReplyUpdate { reply: "b".to_string() },
//!     ]
//! );
//! ```
use alloc::{
    string::{String, ToString},
    vec::{Drain, Vec},
};

use crate::SplitterListener;

/// One notification produced while classifying the stream.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    any(test, feature = "serde"),
    derive(serde::Serialize, serde::Deserialize)
)]
#[cfg_attr(any(test, feature = "serde"), serde(tag = "kind"))]
pub enum SplitEvent {
    /// New text was appended to the think buffer.
    ThinkIncrement {
        /// Exactly the appended text.
        delta: String,
    },
    /// The top-level think region closed.
    ThinkComplete {
        /// The full, untrimmed think buffer.
        think: String,
    },
    /// New text was appended to the reply buffer.
    ReplyIncrement {
        /// Exactly the appended text.
        delta: String,
    },
    /// The reply buffer after the preceding increment.
    ReplyUpdate {
        /// The whole reply buffer so far.
        reply: String,
    },
}

impl SplitEvent {
    /// Returns `true` for events that describe the think region.
    #[must_use]
    pub fn is_think(&self) -> bool {
        matches!(self, Self::ThinkIncrement { .. } | Self::ThinkComplete { .. })
    }
}

/// A [`SplitterListener`] that records every notification as a
/// [`SplitEvent`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventCollector {
    events: Vec<SplitEvent>,
}

impl EventCollector {
    /// Creates an empty collector.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Events recorded and not yet drained.
    #[must_use]
    pub fn events(&self) -> &[SplitEvent] {
        &self.events
    }

    /// Removes and yields all recorded events in order.
    pub fn drain(&mut self) -> Drain<'_, SplitEvent> {
        self.events.drain(..)
    }

    /// Consumes the collector, returning everything it recorded.
    #[must_use]
    pub fn into_events(self) -> Vec<SplitEvent> {
        self.events
    }
}

impl SplitterListener for EventCollector {
    fn on_think_increment(&mut self, delta: &str) {
        self.events.push(SplitEvent::ThinkIncrement {
            delta: delta.to_string(),
        });
    }

    fn on_think_complete(&mut self, think: &str) {
        self.events.push(SplitEvent::ThinkComplete {
            think: think.to_string(),
        });
    }

    fn on_reply_increment(&mut self, delta: &str) {
        self.events.push(SplitEvent::ReplyIncrement {
            delta: delta.to_string(),
        });
    }

    fn on_reply_update(&mut self, reply: &str) {
        self.events.push(SplitEvent::ReplyUpdate {
            reply: reply.to_string(),
        });
    }
}
