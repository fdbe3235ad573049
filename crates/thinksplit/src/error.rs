use thiserror::Error;

/// Rejected tag configuration.
///
/// Returned by [`SplitterOptions::new`](crate::SplitterOptions::new). Once a
/// splitter is constructed, no operation on it can fail.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum OptionsError {
    /// The open tag literal is the empty string.
    #[error("open tag must not be empty")]
    EmptyOpenTag,
    /// The close tag literal is the empty string.
    #[error("close tag must not be empty")]
    EmptyCloseTag,
    /// Both literals are the same string.
    #[error("open and close tags must differ, both are {0:?}")]
    IdenticalTags(alloc::string::String),
    /// One literal is a prefix of the other, so a partial match could never
    /// be resolved.
    #[error("tag {prefix:?} is a prefix of tag {tag:?}")]
    AmbiguousTags {
        /// The shorter literal.
        prefix: alloc::string::String,
        /// The literal that starts with `prefix`.
        tag: alloc::string::String,
    },
}
