//! Byte-level and rune-level views of UTF-8 strings.
//!
//! Byte indexing is O(1) and may land in the middle of a multi-byte code
//! point; rune iteration decodes.

use crate::error::{SliceError, SliceResult};
use crate::view::SliceView;

pub fn byte_at(s: &str, index: usize) -> SliceResult<u8> {
    s.as_bytes()
        .get(index)
        .copied()
        .ok_or_else(|| SliceError::out_of_range("byte_at", index, s.len()))
}

/// `s[lo:hi]` on raw bytes. The result need not be valid UTF-8.
pub fn byte_range(s: &str, lo: usize, hi: usize) -> SliceResult<Vec<u8>> {
    if hi > s.len() {
        return Err(SliceError::out_of_range("byte_range", hi, s.len()));
    }
    if lo > hi {
        return Err(SliceError::out_of_range("byte_range", lo, hi));
    }
    Ok(s.as_bytes()[lo..hi].to_vec())
}

/// Renders bytes as text, replacing broken sequences with U+FFFD.
pub fn lossy(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}

pub fn rune_count(s: &str) -> usize {
    s.chars().count()
}

pub fn bytes(s: &str) -> SliceView<u8> {
    SliceView::from_literal(s.bytes())
}

/// Code points as integers, so they print as numbers the way runes do.
pub fn runes(s: &str) -> SliceView<u32> {
    SliceView::from_literal(s.chars().map(u32::from))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascii_indexing() {
        let s = "Hello there!";
        assert_eq!(byte_at(s, 6).unwrap(), b't');
        assert_eq!(lossy(&byte_range(s, 4, 7).unwrap()), "o t");
        assert_eq!(lossy(&byte_range(s, 0, 5).unwrap()), "Hello");
        assert_eq!(lossy(&byte_range(s, 6, s.len()).unwrap()), "there!");
    }

    #[test]
    fn test_multibyte_length_and_indexing() {
        let s = "Hello 😊!";
        assert_eq!(s.len(), 11);
        assert_eq!(rune_count(s), 8);
        assert_eq!(byte_at(s, 6).unwrap(), 0xF0);

        let split = byte_range(s, 4, 7).unwrap();
        assert_eq!(split, vec![b'o', b' ', 0xF0]);
        assert!(String::from_utf8(split).is_err());
    }

    #[test]
    fn test_out_of_range() {
        assert!(byte_at("abc", 3).unwrap_err().is_out_of_range());
        assert!(byte_range("abc", 0, 4).unwrap_err().is_out_of_range());
        assert!(byte_range("abc", 2, 1).unwrap_err().is_out_of_range());
    }

    #[test]
    fn test_bytes_and_runes() {
        let s = "hé";
        assert_eq!(bytes(s).to_string(), "[104 195 169]");
        assert_eq!(runes(s).to_string(), "[104 233]");
    }
}
