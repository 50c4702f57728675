//! Character ranges within a target string.
//!
//! Ranges count **characters**, not bytes, so that multi-byte text never ends
//! up split in the middle of a code point. The regex engine reports byte
//! offsets; conversions go through `ropey::str_utils`.

use std::ops::Range;

use ropey::str_utils::{byte_to_char_idx, char_to_byte_idx};

/// A half-open `[start, end)` interval of character positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct TextRange {
    pub start: usize,
    pub end: usize,
}

impl TextRange {
    /// Create a new range. `end` is clamped so it never precedes `start`.
    pub fn new(start: usize, end: usize) -> Self {
        Self {
            start,
            end: end.max(start),
        }
    }

    /// The range covering all of `text`.
    pub fn whole(text: &str) -> Self {
        Self::new(0, text.chars().count())
    }

    /// Convert a byte range reported by the engine into a character range.
    pub fn from_bytes(text: &str, bytes: Range<usize>) -> Self {
        let start = byte_to_char_idx(text, bytes.start);
        let end = start + byte_to_char_idx(&text[bytes.start..], bytes.end - bytes.start);
        Self::new(start, end)
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Shift the range right by `offset` characters.
    pub fn offset_by(&self, offset: usize) -> Self {
        Self::new(self.start + offset, self.end + offset)
    }

    /// Test whether two ranges share at least one position.
    ///
    /// Empty ranges never overlap anything, including each other.
    pub fn overlaps(&self, other: &TextRange) -> bool {
        !(self.is_empty()
            || other.is_empty()
            || other.end <= self.start
            || self.end <= other.start)
    }

    /// The byte range in `text` covered by this character range.
    pub fn to_bytes(&self, text: &str) -> Range<usize> {
        let start = char_to_byte_idx(text, self.start);
        let end = start + char_to_byte_idx(&text[start..], self.len());
        start..end
    }

    /// Slice `text` by this range.
    pub fn slice<'a>(&self, text: &'a str) -> &'a str {
        &text[self.to_bytes(text)]
    }
}

/// Incremental byte→char translator for one target string.
///
/// Match events arrive in ascending order, so each conversion only counts the
/// characters between the previous anchor and the new offset.
pub(crate) struct CharOffsets<'t> {
    text: &'t str,
    byte: usize,
    char: usize,
}

impl<'t> CharOffsets<'t> {
    pub fn new(text: &'t str) -> Self {
        Self {
            text,
            byte: 0,
            char: 0,
        }
    }

    /// Character index of the byte offset `byte`.
    pub fn char_at(&mut self, byte: usize) -> usize {
        if byte < self.byte {
            // Look-behind captures can start before the last anchor.
            return byte_to_char_idx(self.text, byte);
        }
        self.char += byte_to_char_idx(&self.text[self.byte..], byte - self.byte);
        self.byte = byte;
        self.char
    }

    pub fn range(&mut self, bytes: Range<usize>) -> TextRange {
        let start = self.char_at(bytes.start);
        let end = if bytes.end < self.byte {
            byte_to_char_idx(self.text, bytes.end)
        } else {
            let anchor = (self.byte, self.char);
            let end = self.char_at(bytes.end);
            // Keep the anchor at the group start so later groups nested in
            // this one still convert incrementally.
            (self.byte, self.char) = anchor;
            end
        };
        TextRange::new(start, end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whole_counts_chars() {
        assert_eq!(TextRange::whole("héllo"), TextRange::new(0, 5));
        assert_eq!(TextRange::whole(""), TextRange::new(0, 0));
    }

    #[test]
    fn from_bytes_multibyte() {
        let text = "héllo wörld";
        let byte_start = text.find("wörld").unwrap();
        let r = TextRange::from_bytes(text, byte_start..text.len());
        assert_eq!(r, TextRange::new(6, 11));
        assert_eq!(r.slice(text), "wörld");
    }

    #[test]
    fn overlap_rules() {
        let a = TextRange::new(0, 3);
        assert!(a.overlaps(&TextRange::new(2, 5)));
        assert!(!a.overlaps(&TextRange::new(3, 5)));
        assert!(!a.overlaps(&TextRange::new(1, 1)));
        assert!(!TextRange::new(1, 1).overlaps(&TextRange::new(1, 1)));
    }

    #[test]
    fn ordering_is_by_start() {
        let mut ranges = vec![TextRange::new(4, 5), TextRange::new(0, 9), TextRange::new(2, 3)];
        ranges.sort();
        assert_eq!(ranges[0].start, 0);
        assert_eq!(ranges[2].start, 4);
    }

    #[test]
    fn incremental_offsets_handle_nested_groups() {
        let text = "ää-abbc";
        let mut offsets = CharOffsets::new(text);
        let whole = offsets.range(5..9);
        let group = offsets.range(6..8);
        assert_eq!(whole, TextRange::new(3, 7));
        assert_eq!(group, TextRange::new(4, 6));
        assert_eq!(group.slice(text), "bb");
    }
}
