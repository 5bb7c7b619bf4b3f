// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! UTF-8 handling for multi-byte character input.
//!
//! A unit of 2, 3 or 4 bytes that isn't an escape sequence must be exactly one UTF-8
//! encoded character. The whole unit has to be consumed: `"ab"` is two characters and
//! therefore not a valid 2-byte unit, even though each byte is valid UTF-8 on its own.
//!
//! ```text
//! Byte Pattern   Meaning              Detection Mask
//! ──────────────────────────────────────────────────
//! 0xxxxxxx       ASCII (1-byte)       byte & 0x80 == 0x00
//! 110xxxxx       2-byte start         byte & 0xE0 == 0xC0
//! 1110xxxx       3-byte start         byte & 0xF0 == 0xE0
//! 11110xxx       4-byte start         byte & 0xF8 == 0xF0
//! 10xxxxxx       Continuation         byte & 0xC0 == 0x80
//! ```

/// Decode `bytes` as exactly one UTF-8 character.
///
/// Returns `None` if `bytes` is empty, isn't valid UTF-8, or holds more than one
/// character.
#[must_use]
pub fn decode_single_char(bytes: &[u8]) -> Option<char> {
    let text = std::str::from_utf8(bytes).ok()?;
    let mut chars = text.chars();
    let ch = chars.next()?;
    match chars.next() {
        None => Some(ch),
        Some(_) => None,
    }
}

/// Number of bytes announced by a UTF-8 start byte, or `None` for continuation bytes
/// and bytes that can never start a sequence.
#[must_use]
pub fn utf8_sequence_len(first_byte: u8) -> Option<usize> {
    match first_byte {
        0x00..=0x7F => Some(1),
        _ if first_byte & 0xE0 == 0xC0 => Some(2),
        _ if first_byte & 0xF0 == 0xE0 => Some(3),
        _ if first_byte & 0xF8 == 0xF0 => Some(4),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    #[test_case("ö", 'ö' ; "two bytes")]
    #[test_case("世", '世' ; "three bytes")]
    #[test_case("𐍈", '𐍈' ; "four bytes")]
    #[test_case("\u{FFFD}", '\u{FFFD}' ; "replacement char is a real char")]
    fn test_decode_single_char(input: &str, expected: char) {
        assert_eq!(decode_single_char(input.as_bytes()), Some(expected));
        assert_eq!(utf8_sequence_len(input.as_bytes()[0]), Some(input.len()));
    }

    #[test_case(b"" ; "empty")]
    #[test_case(b"ab" ; "two ascii chars")]
    #[test_case(b"abc" ; "three ascii chars")]
    #[test_case(&[0xC3] ; "truncated")]
    #[test_case(&[0xC3, 0x41] ; "bad continuation")]
    #[test_case(&[0xE4, 0xB8, 0x96, 0x41] ; "trailing byte")]
    #[test_case(&[0xED, 0xA0, 0x80] ; "surrogate")]
    fn test_decode_single_char_rejects(input: &[u8]) {
        assert_eq!(decode_single_char(input), None);
    }

    #[test]
    fn test_utf8_sequence_len_rejects_continuation() {
        assert_eq!(utf8_sequence_len(0x80), None);
        assert_eq!(utf8_sequence_len(0xBF), None);
        assert_eq!(utf8_sequence_len(0xF8), None);
    }
}
