use alloc::string::{String, ToString};

use crate::OptionsError;

/// Tag literals recognized by a [`StreamTagSplitter`](crate::StreamTagSplitter).
///
/// The pair is validated when constructed, so a splitter built from it never
/// has to report a configuration problem while streaming.
///
/// # Examples
///
/// ```rust
/// use thinksplit::{OptionsError, SplitterOptions};
///
/// let options = SplitterOptions::new("<reasoning>", "</reasoning>").unwrap();
/// assert_eq!(options.open_tag(), "<reasoning>");
///
/// assert_eq!(
///     SplitterOptions::new("<think>", "<think>"),
///     Err(OptionsError::IdenticalTags("<think>".into()))
/// );
/// ```
///
/// # Default
///
/// `<think>` and `</think>`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    any(test, feature = "serde"),
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "RawSplitterOptions")
)]
pub struct SplitterOptions {
    /// Literal that opens the think region.
    ///
    /// Must be non-empty and must not be a prefix of `close_tag`.
    open_tag: String,

    /// Literal that closes the think region.
    ///
    /// Must be non-empty, distinct from `open_tag` and must not be a prefix
    /// of it.
    close_tag: String,
}

impl Default for SplitterOptions {
    fn default() -> Self {
        Self {
            open_tag: Self::DEFAULT_OPEN_TAG.to_string(),
            close_tag: Self::DEFAULT_CLOSE_TAG.to_string(),
        }
    }
}

impl SplitterOptions {
    /// Open tag used by [`SplitterOptions::default`].
    pub const DEFAULT_OPEN_TAG: &'static str = "<think>";
    /// Close tag used by [`SplitterOptions::default`].
    pub const DEFAULT_CLOSE_TAG: &'static str = "</think>";

    /// Validates and builds a tag pair.
    ///
    /// # Errors
    ///
    /// Returns an [`OptionsError`] if either literal is empty, if they are
    /// equal, or if one is a prefix of the other.
    pub fn new(
        open_tag: impl Into<String>,
        close_tag: impl Into<String>,
    ) -> Result<Self, OptionsError> {
        let open_tag = open_tag.into();
        let close_tag = close_tag.into();

        if open_tag.is_empty() {
            return Err(OptionsError::EmptyOpenTag);
        }
        if close_tag.is_empty() {
            return Err(OptionsError::EmptyCloseTag);
        }
        if open_tag == close_tag {
            return Err(OptionsError::IdenticalTags(open_tag));
        }
        if close_tag.starts_with(open_tag.as_str()) {
            return Err(OptionsError::AmbiguousTags {
                prefix: open_tag,
                tag: close_tag,
            });
        }
        if open_tag.starts_with(close_tag.as_str()) {
            return Err(OptionsError::AmbiguousTags {
                prefix: close_tag,
                tag: open_tag,
            });
        }

        Ok(Self {
            open_tag,
            close_tag,
        })
    }

    /// The literal that opens the think region.
    #[must_use]
    pub fn open_tag(&self) -> &str {
        &self.open_tag
    }

    /// The literal that closes the think region.
    #[must_use]
    pub fn close_tag(&self) -> &str {
        &self.close_tag
    }
}

// Unvalidated mirror used as the serde representation; deserialization goes
// through `SplitterOptions::new`.
#[cfg(any(test, feature = "serde"))]
#[derive(serde::Deserialize)]
struct RawSplitterOptions {
    open_tag: String,
    close_tag: String,
}

#[cfg(any(test, feature = "serde"))]
impl TryFrom<RawSplitterOptions> for SplitterOptions {
    type Error = OptionsError;

    fn try_from(raw: RawSplitterOptions) -> Result<Self, Self::Error> {
        Self::new(raw.open_tag, raw.close_tag)
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[test]
    fn default_is_think_pair() {
        let options = SplitterOptions::default();
        assert_eq!(options.open_tag(), "<think>");
        assert_eq!(options.close_tag(), "</think>");
        assert_eq!(SplitterOptions::new("<think>", "</think>"), Ok(options));
    }

    #[rstest]
    #[case("", "</think>", OptionsError::EmptyOpenTag)]
    #[case("<think>", "", OptionsError::EmptyCloseTag)]
    #[case("<t>", "<t>", OptionsError::IdenticalTags("<t>".into()))]
    #[case("<", "</", OptionsError::AmbiguousTags { prefix: "<".into(), tag: "</".into() })]
    #[case("[[", "[", OptionsError::AmbiguousTags { prefix: "[".into(), tag: "[[".into() })]
    fn rejects_invalid_pairs(
        #[case] open: &str,
        #[case] close: &str,
        #[case] expected: OptionsError,
    ) {
        assert_eq!(SplitterOptions::new(open, close), Err(expected));
    }

    #[test]
    fn accepts_tags_with_different_first_characters() {
        let options = SplitterOptions::new("[[", "]]").unwrap();
        assert_eq!(options.open_tag(), "[[");
        assert_eq!(options.close_tag(), "]]");
    }

    #[test]
    fn deserializes_with_validation() {
        let options: SplitterOptions =
            serde_yaml::from_str("open_tag: <reason>\nclose_tag: </reason>\n").unwrap();
        assert_eq!(options.open_tag(), "<reason>");
        assert_eq!(options.close_tag(), "</reason>");

        let err = serde_yaml::from_str::<SplitterOptions>("open_tag: ''\nclose_tag: </reason>\n")
            .unwrap_err();
        assert!(
            err.to_string().contains("open tag must not be empty"),
            "unexpected error: {err}"
        );
    }
}
