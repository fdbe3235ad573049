use alloc::boxed::Box;

/// Receives notifications from a [`StreamTagSplitter`](crate::StreamTagSplitter)
/// as characters are classified.
///
/// Every method defaults to doing nothing, so implementors override only what
/// they need. Calls happen synchronously inside
/// [`process_chunk`](crate::StreamTagSplitter::process_chunk), in
/// character-arrival order.
///
/// # Examples
///
/// ```rust
/// use thinksplit::{SplitterListener, SplitterOptions, StreamTagSplitter};
///
/// #[derive(Default)]
/// struct Printer {
///     reply: String,
/// }
///
/// impl SplitterListener for Printer {
///     fn on_reply_increment(&mut self, delta: &str) {
///         self.reply.push_str(delta);
///     }
/// }
///
/// let mut splitter = StreamTagSplitter::with_listener(SplitterOptions::default(), Printer::default());
/// splitter.process_chunk("<think>hmm</think>Hi!");
/// assert_eq!(splitter.listener().reply, "Hi!");
/// ```
pub trait SplitterListener {
    /// The think buffer grew by exactly `delta`.
    fn on_think_increment(&mut self, delta: &str) {
        let _ = delta;
    }

    /// The top-level think region closed. Called at most once per stream with
    /// the full, untrimmed think buffer.
    fn on_think_complete(&mut self, think: &str) {
        let _ = think;
    }

    /// The reply buffer grew by exactly `delta`.
    fn on_reply_increment(&mut self, delta: &str) {
        let _ = delta;
    }

    /// The whole reply buffer after a growth; always follows
    /// [`on_reply_increment`](Self::on_reply_increment) for the same growth.
    fn on_reply_update(&mut self, reply: &str) {
        let _ = reply;
    }
}

/// The no-op listener.
impl SplitterListener for () {}

impl<L: SplitterListener + ?Sized> SplitterListener for &mut L {
    fn on_think_increment(&mut self, delta: &str) {
        (**self).on_think_increment(delta);
    }

    fn on_think_complete(&mut self, think: &str) {
        (**self).on_think_complete(think);
    }

    fn on_reply_increment(&mut self, delta: &str) {
        (**self).on_reply_increment(delta);
    }

    fn on_reply_update(&mut self, reply: &str) {
        (**self).on_reply_update(reply);
    }
}

impl<L: SplitterListener + ?Sized> SplitterListener for Box<L> {
    fn on_think_increment(&mut self, delta: &str) {
        (**self).on_think_increment(delta);
    }

    fn on_think_complete(&mut self, think: &str) {
        (**self).on_think_complete(think);
    }

    fn on_reply_increment(&mut self, delta: &str) {
        (**self).on_reply_increment(delta);
    }

    fn on_reply_update(&mut self, reply: &str) {
        (**self).on_reply_update(reply);
    }
}
