use alloc::string::{String, ToString};

use crate::{SplitterOptions, StreamTagSplitter};

/// Result of splitting a complete, non-streamed response.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Split {
    /// Trimmed think content.
    pub think: String,
    /// Trimmed reply content.
    pub reply: String,
    /// Whether the top-level think region was closed.
    pub think_complete: bool,
}

/// Splits a whole response in one call.
///
/// Equivalent to feeding `text` to a fresh [`StreamTagSplitter`] and reading
/// its trimmed contents, so an unterminated trailing tag fragment is dropped
/// just as it would be at the end of a stream.
///
/// ```rust
/// use thinksplit::{SplitterOptions, split};
///
/// let result = split("Hello<think>reasoning</think>World", &SplitterOptions::default());
/// assert_eq!(result.think, "reasoning");
/// assert_eq!(result.reply, "HelloWorld");
/// assert!(result.think_complete);
/// ```
#[must_use]
pub fn split(text: &str, options: &SplitterOptions) -> Split {
    let mut splitter = StreamTagSplitter::new(options.clone());
    splitter.process_chunk(text);
    Split {
        think: splitter.think_content().to_string(),
        reply: splitter.reply_content().to_string(),
        think_complete: splitter.is_think_complete(),
    }
}
