//! The streaming think/reply splitter.
//!
//! Every input character is routed exactly once, in arrival order, through a
//! small state machine:
//!
//! - While no tag attempt is in flight, a character that starts one of the
//!   tag literals is held back in the [`TagMatcher`]; anything else is
//!   classified as content.
//! - A completed open tag starts the think region the first time and is kept
//!   verbatim as think content when nested.
//! - A completed close tag before any open tag is ordinary reply text. Inside
//!   the think region it either closes a nested level (kept verbatim) or, at
//!   depth zero, closes the region for good.
//! - A broken prefix is flushed back through classification character by
//!   character.
//!
//! After the top-level close every character is reply text; tags are no longer
//! interpreted. A stream that ends in the middle of a tag attempt leaves those
//! characters in [`StreamTagSplitter::pending_tag`]; they are never flushed
//! implicitly.

use tracing::{debug, trace};

use crate::{
    SplitterListener, SplitterOptions,
    channel::Channel,
    tag_matcher::{Step, TagMatcher},
};

/// Splits a streamed model response into its think and reply regions.
///
/// The splitter owns all of its state; use one instance per stream and
/// [`reset`](Self::reset) it to reuse it for another.
///
/// # Examples
///
/// ```rust
/// use thinksplit::{SplitterOptions, StreamTagSplitter};
///
/// let mut splitter = StreamTagSplitter::new(SplitterOptions::default());
/// splitter.process_chunk("<think>outer<think>inner</think>stillThink</think>after");
///
/// assert_eq!(splitter.think_content(), "outer<think>inner</think>stillThink");
/// assert_eq!(splitter.reply_content(), "after");
/// ```
#[derive(Debug, Clone)]
pub struct StreamTagSplitter<L = ()> {
    options: SplitterOptions,
    think: Channel,
    reply: Channel,
    found_open: bool,
    think_closed: bool,
    depth: usize,
    matcher: TagMatcher,
    listener: L,
}

impl Default for StreamTagSplitter {
    fn default() -> Self {
        Self::new(SplitterOptions::default())
    }
}

impl StreamTagSplitter {
    /// Creates a splitter without a listener; results are read through the
    /// accessors.
    #[must_use]
    pub fn new(options: SplitterOptions) -> Self {
        Self::with_listener(options, ())
    }
}

impl<L: SplitterListener> StreamTagSplitter<L> {
    /// Creates a splitter that notifies `listener` as content is classified.
    pub fn with_listener(options: SplitterOptions, listener: L) -> Self {
        Self {
            options,
            think: Channel::new(),
            reply: Channel::new(),
            found_open: false,
            think_closed: false,
            depth: 0,
            matcher: TagMatcher::new(),
            listener,
        }
    }

    /// Feeds the next fragment of the stream.
    ///
    /// Fragments may have any length, including zero, and tags may be split
    /// across them. Listener callbacks run before this returns.
    pub fn process_chunk(&mut self, chunk: &str) {
        for c in chunk.chars() {
            self.process_char(c);
        }
    }

    /// Feeds a single character.
    pub fn process_char(&mut self, c: char) {
        if self.think_closed {
            self.push_reply(c);
            return;
        }

        match self.matcher.step(c, &self.options) {
            Step::Text(c) => self.classify(c),
            Step::NeedMore => {}
            Step::Open => self.handle_open(),
            Step::Close => self.handle_close(),
            Step::Reject => {
                let rejected = self.matcher.take_scratch();
                for c in rejected.chars() {
                    self.classify(c);
                }
            }
        }
    }

    /// The accumulated think content with surrounding whitespace removed.
    #[must_use]
    pub fn think_content(&self) -> &str {
        self.think.trimmed()
    }

    /// Think content appended since the previous call to this method.
    ///
    /// Independent of listener notifications. Returns `""` when nothing new
    /// arrived or when the new text is only whitespace.
    pub fn think_content_increment(&mut self) -> &str {
        self.think.take_read()
    }

    /// The accumulated reply content with surrounding whitespace removed.
    #[must_use]
    pub fn reply_content(&self) -> &str {
        self.reply.trimmed()
    }

    /// Reply content appended since the previous call to this method, with
    /// the same contract as [`think_content_increment`](Self::think_content_increment).
    pub fn reply_content_increment(&mut self) -> &str {
        self.reply.take_read()
    }

    /// Whether the open tag has been seen.
    #[must_use]
    pub fn has_think_content(&self) -> bool {
        self.found_open
    }

    /// Whether the top-level think region has been closed.
    #[must_use]
    pub fn is_think_complete(&self) -> bool {
        self.think_closed
    }

    /// Characters held back by an unresolved tag attempt.
    ///
    /// Non-empty only while the stream is in the middle of something that
    /// still looks like a tag. If the stream ends here, these characters are
    /// in neither buffer.
    #[must_use]
    pub fn pending_tag(&self) -> &str {
        self.matcher.pending()
    }

    /// Number of currently open think tags, counting the top-level one.
    #[must_use]
    pub fn think_nest_depth(&self) -> usize {
        self.depth
    }

    /// The tag pair this splitter recognizes.
    #[must_use]
    pub fn options(&self) -> &SplitterOptions {
        &self.options
    }

    /// Shared access to the listener.
    pub fn listener(&self) -> &L {
        &self.listener
    }

    /// Exclusive access to the listener, e.g. to drain collected events.
    pub fn listener_mut(&mut self) -> &mut L {
        &mut self.listener
    }

    /// Consumes the splitter and returns its listener.
    pub fn into_listener(self) -> L {
        self.listener
    }

    /// Clears all state so the instance can process a new stream. The
    /// options and the listener are kept.
    pub fn reset(&mut self) {
        trace!("resetting stream splitter");
        self.think.clear();
        self.reply.clear();
        self.found_open = false;
        self.think_closed = false;
        self.depth = 0;
        self.matcher.clear();
    }

    /// Checks the internal invariants, panicking on violation.
    #[cfg(any(test, feature = "fuzzing"))]
    #[doc(hidden)]
    pub fn assert_invariants(&self) {
        assert!(self.think.marks_in_bounds(), "think marks out of bounds");
        assert!(self.reply.marks_in_bounds(), "reply marks out of bounds");
        assert_eq!(
            self.depth == 0,
            !self.found_open || self.think_closed,
            "depth {} with found_open={} think_closed={}",
            self.depth,
            self.found_open,
            self.think_closed
        );
        if self.think_closed {
            assert!(self.found_open, "closed without opening");
            assert!(self.pending_tag().is_empty(), "pending tag after close");
        }
        if !self.found_open {
            assert!(self.think.as_str().is_empty(), "think text before open tag");
        }
    }

    fn classify(&mut self, c: char) {
        if self.found_open && !self.think_closed {
            self.think.push(c);
            Self::fire_think(&mut self.think, &mut self.listener);
        } else {
            self.push_reply(c);
        }
    }

    fn push_reply(&mut self, c: char) {
        self.reply.push(c);
        Self::fire_reply(&mut self.reply, &mut self.listener);
    }

    fn handle_open(&mut self) {
        if self.found_open {
            self.depth += 1;
            self.think.push_str(self.options.open_tag());
            Self::fire_think(&mut self.think, &mut self.listener);
        } else {
            debug!(open_tag = self.options.open_tag(), "think region opened");
            self.found_open = true;
            self.depth = 1;
        }
    }

    fn handle_close(&mut self) {
        if !self.found_open {
            trace!(
                close_tag = self.options.close_tag(),
                "close tag before any open tag, treating as reply text"
            );
            for c in self.options.close_tag().chars() {
                self.reply.push(c);
                Self::fire_reply(&mut self.reply, &mut self.listener);
            }
            return;
        }

        self.depth -= 1;
        if self.depth == 0 {
            self.think_closed = true;
            debug!(think_len = self.think.as_str().len(), "think region closed");
            self.listener.on_think_complete(self.think.as_str());
        } else {
            self.think.push_str(self.options.close_tag());
            Self::fire_think(&mut self.think, &mut self.listener);
        }
    }

    fn fire_think(think: &mut Channel, listener: &mut L) {
        if let Some(delta) = think.take_emitted() {
            listener.on_think_increment(delta);
        }
    }

    fn fire_reply(reply: &mut Channel, listener: &mut L) {
        if let Some(delta) = reply.take_emitted() {
            listener.on_reply_increment(delta);
            listener.on_reply_update(reply.as_str());
        }
    }
}
