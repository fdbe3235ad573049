use alloc::string::String;

use crate::SplitterOptions;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MatchState {
    Normal,
    MatchingOpen,
    MatchingClose,
}

/// What happened after feeding one more character into the tag matcher?
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Step {
    /// The character cannot start a tag; classify it as content.
    Text(char),
    /// Character buffered, the tag is not finished yet.
    NeedMore,
    /// The open tag literal was completed.
    Open,
    /// The close tag literal was completed.
    Close,
    /// The buffered characters stopped matching either literal. They must be
    /// taken with [`TagMatcher::take_scratch`] and classified as content.
    Reject,
}

/// Incremental prefix matcher for the open and close tag literals.
///
/// Characters that could still belong to a tag are held in `scratch` until
/// the literal completes or the prefix breaks.
#[derive(Debug, Clone)]
pub(crate) struct TagMatcher {
    state: MatchState,
    scratch: String,
}

impl TagMatcher {
    pub(crate) fn new() -> Self {
        Self {
            state: MatchState::Normal,
            scratch: String::new(),
        }
    }

    /// Characters tentatively consumed by an unresolved tag attempt.
    pub(crate) fn pending(&self) -> &str {
        &self.scratch
    }

    /// Give the matcher the next input character and learn what to do next.
    pub(crate) fn step(&mut self, c: char, tags: &SplitterOptions) -> Step {
        match self.state {
            MatchState::Normal => {
                if tags.open_tag().starts_with(c) {
                    self.scratch.push(c);
                    self.resolve_open(tags)
                } else if tags.close_tag().starts_with(c) {
                    self.scratch.push(c);
                    self.resolve_close(tags)
                } else {
                    Step::Text(c)
                }
            }
            MatchState::MatchingOpen => {
                self.scratch.push(c);
                self.resolve_open(tags)
            }
            MatchState::MatchingClose => {
                self.scratch.push(c);
                self.resolve_close(tags)
            }
        }
    }

    /// Hand back the rejected characters, leaving the matcher idle.
    pub(crate) fn take_scratch(&mut self) -> String {
        self.state = MatchState::Normal;
        core::mem::take(&mut self.scratch)
    }

    pub(crate) fn clear(&mut self) {
        self.state = MatchState::Normal;
        self.scratch.clear();
    }

    fn resolve_open(&mut self, tags: &SplitterOptions) -> Step {
        let open = tags.open_tag();
        if self.scratch == open {
            self.clear();
            Step::Open
        } else if open.starts_with(self.scratch.as_str()) {
            self.state = MatchState::MatchingOpen;
            Step::NeedMore
        } else {
            // The shared leading characters diverged; the attempt may still
            // be a close tag.
            self.resolve_close(tags)
        }
    }

    fn resolve_close(&mut self, tags: &SplitterOptions) -> Step {
        let close = tags.close_tag();
        if self.scratch == close {
            self.clear();
            Step::Close
        } else if close.starts_with(self.scratch.as_str()) {
            self.state = MatchState::MatchingClose;
            Step::NeedMore
        } else {
            self.state = MatchState::Normal;
            Step::Reject
        }
    }
}
