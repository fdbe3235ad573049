use alloc::{
    string::{String, ToString},
    vec::Vec,
};

use crate::{EventCollector, SplitEvent, SplitterOptions, StreamTagSplitter};

/// Everything observable about a finished stream.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Outcome {
    pub(crate) think: String,
    pub(crate) reply: String,
    pub(crate) has_think: bool,
    pub(crate) think_complete: bool,
    pub(crate) pending: String,
    pub(crate) events: Vec<SplitEvent>,
}

impl Outcome {
    pub(crate) fn of(splitter: &StreamTagSplitter<EventCollector>) -> Self {
        Self {
            think: splitter.think_content().to_string(),
            reply: splitter.reply_content().to_string(),
            has_think: splitter.has_think_content(),
            think_complete: splitter.is_think_complete(),
            pending: splitter.pending_tag().to_string(),
            events: splitter.listener().events().to_vec(),
        }
    }
}

pub(crate) fn collecting_splitter() -> StreamTagSplitter<EventCollector> {
    StreamTagSplitter::with_listener(SplitterOptions::default(), EventCollector::new())
}

pub(crate) fn run_chunks<'a>(chunks: impl IntoIterator<Item = &'a str>) -> Outcome {
    let mut splitter = collecting_splitter();
    for chunk in chunks {
        splitter.process_chunk(chunk);
        splitter.assert_invariants();
    }
    Outcome::of(&splitter)
}

/// Concatenation of all think (or reply) increments in `events`.
pub(crate) fn concat_increments(events: &[SplitEvent], think: bool) -> String {
    events
        .iter()
        .filter(|event| event.is_think() == think)
        .filter_map(|event| match event {
            SplitEvent::ThinkIncrement { delta } | SplitEvent::ReplyIncrement { delta } => {
                Some(delta.as_str())
            }
            _ => None,
        })
        .collect()
}

pub(crate) fn quickcheck_tests() -> u64 {
    #[cfg(not(miri))]
    let tests = if cfg!(feature = "test-fast") {
        100
    } else if is_ci::cached() {
        10_000
    } else {
        1_000
    };
    #[cfg(miri)]
    let tests = 10;
    tests
}
