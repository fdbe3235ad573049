//! An incremental splitter for LLM token streams that separates the
//! "reasoning" region delimited by `<think>` / `</think>` from the reply text.
//!
//! Feed fragments in arrival order with
//! [`StreamTagSplitter::process_chunk`]; tags may span any number of
//! fragments. Read results either by polling the accessors or by passing a
//! [`SplitterListener`] that is notified as each character is classified.
//!
//! ```rust
//! use thinksplit::{SplitterOptions, StreamTagSplitter};
//!
//! let mut splitter = StreamTagSplitter::new(SplitterOptions::default());
//! for chunk in ["Hel", "lo<th", "ink>reas", "oning</thi", "nk>Wor", "ld"] {
//!     splitter.process_chunk(chunk);
//! }
//! assert_eq!(splitter.think_content(), "reasoning");
//! assert_eq!(splitter.reply_content(), "HelloWorld");
//! assert!(splitter.is_think_complete());
//! ```

#![cfg_attr(not(test), no_std)]
extern crate alloc;

mod channel;
mod error;
mod event;
mod listener;
mod options;
mod split;
mod splitter;
mod tag_matcher;

#[doc(hidden)]
pub mod chunk_utils;

#[cfg(test)]
mod tests;

pub use error::OptionsError;
pub use event::{EventCollector, SplitEvent};
pub use listener::SplitterListener;
pub use options::SplitterOptions;
pub use split::{Split, split};
pub use splitter::StreamTagSplitter;

#[doc(hidden)]
pub use chunk_utils::produce_chunks;
