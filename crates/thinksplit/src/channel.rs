use alloc::string::String;

/// One append-only region of the stream (think or reply).
///
/// Two independent high-water marks track what has been handed out: `read`
/// for the polling accessors and `emitted` for listener notifications. Both
/// are byte offsets on `char` boundaries and never exceed `buf.len()`.
#[derive(Debug, Clone, Default)]
pub(crate) struct Channel {
    buf: String,
    read: usize,
    emitted: usize,
}

impl Channel {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, c: char) {
        self.buf.push(c);
    }

    pub(crate) fn push_str(&mut self, s: &str) {
        self.buf.push_str(s);
    }

    /// Everything accumulated so far, untrimmed.
    pub(crate) fn as_str(&self) -> &str {
        &self.buf
    }

    /// Everything accumulated so far with surrounding whitespace removed.
    pub(crate) fn trimmed(&self) -> &str {
        self.buf.trim()
    }

    /// Text appended since the previous call, advancing the read mark.
    ///
    /// A whitespace-only delta is reported as empty, though the mark still
    /// moves past it.
    pub(crate) fn take_read(&mut self) -> &str {
        let start = core::mem::replace(&mut self.read, self.buf.len());
        let delta = &self.buf[start..];
        if delta.trim().is_empty() { "" } else { delta }
    }

    /// Text appended since the last notification, advancing the emitted mark.
    /// Returns `None` when nothing new is available.
    pub(crate) fn take_emitted(&mut self) -> Option<&str> {
        let len = self.buf.len();
        if len > self.emitted {
            let start = core::mem::replace(&mut self.emitted, len);
            Some(&self.buf[start..])
        } else {
            None
        }
    }

    pub(crate) fn clear(&mut self) {
        self.buf.clear();
        self.read = 0;
        self.emitted = 0;
    }

    #[cfg(any(test, feature = "fuzzing"))]
    pub(crate) fn marks_in_bounds(&self) -> bool {
        self.read <= self.buf.len()
            && self.emitted <= self.buf.len()
            && self.buf.is_char_boundary(self.read)
            && self.buf.is_char_boundary(self.emitted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_and_emitted_marks_are_independent() {
        let mut channel = Channel::new();
        channel.push_str("ab");

        assert_eq!(channel.take_emitted(), Some("ab"));
        assert_eq!(channel.take_emitted(), None);

        channel.push('c');
        assert_eq!(channel.take_read(), "abc");
        assert_eq!(channel.take_read(), "");
        assert_eq!(channel.take_emitted(), Some("c"));
        assert!(channel.marks_in_bounds());
    }

    #[test]
    fn blank_read_delta_is_empty_but_consumed() {
        let mut channel = Channel::new();
        channel.push_str("x");
        assert_eq!(channel.take_read(), "x");

        channel.push_str(" \n");
        assert_eq!(channel.take_read(), "");

        channel.push_str(" y ");
        assert_eq!(channel.take_read(), " y ");
        assert_eq!(channel.trimmed(), "x \n y");
    }

    #[test]
    fn marks_stay_on_char_boundaries() {
        let mut channel = Channel::new();
        channel.push('é');
        channel.push('😊');
        assert_eq!(channel.take_emitted(), Some("é😊"));
        assert_eq!(channel.take_read(), "é😊");
        assert!(channel.marks_in_bounds());

        channel.clear();
        assert_eq!(channel.as_str(), "");
        assert_eq!(channel.take_read(), "");
        assert_eq!(channel.take_emitted(), None);
    }
}
