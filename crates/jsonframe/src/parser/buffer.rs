use alloc::{string::String, vec::Vec};
use core::ops::RangeFrom;

/// Append-only record of every accepted character of the value in progress.
#[derive(Debug, Default)]
pub(crate) struct Buffer {
    data: Vec<char>,
}

impl Buffer {
    pub(crate) fn new() -> Self {
        Self { data: Vec::new() }
    }

    #[inline]
    pub(crate) fn push(&mut self, c: char) {
        self.data.push(c);
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub(crate) fn get(&self, index: usize) -> Option<char> {
        self.data.get(index).copied()
    }

    #[inline]
    pub(crate) fn last(&self) -> Option<char> {
        self.data.last().copied()
    }

    /// Characters from `range.start` to the end, or nothing if the start is
    /// past the end.
    pub(crate) fn tail(&self, range: RangeFrom<usize>) -> &[char] {
        self.data.get(range).unwrap_or_default()
    }

    pub(crate) fn clear(&mut self) {
        self.data.clear();
    }

    /// An owned copy of the whole buffer.
    pub(crate) fn to_text(&self) -> String {
        self.data.iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tail_past_end_is_empty() {
        let mut buffer = Buffer::new();
        buffer.push('[');
        buffer.push('1');
        assert_eq!(buffer.tail(1..), &['1']);
        assert!(buffer.tail(5..).is_empty());
    }

    #[test]
    fn text_copy_is_independent() {
        let mut buffer = Buffer::new();
        buffer.push('[');
        buffer.push(']');
        let text = buffer.to_text();
        buffer.clear();
        assert_eq!(text, "[]");
        assert_eq!(buffer.len(), 0);
        assert_eq!(buffer.last(), None);
    }
}
