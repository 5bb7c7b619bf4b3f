// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Keyboard decoding for units of 1, 3 and 4 bytes.
//!
//! Key sequences share their byte lengths with UTF-8 characters, so every rule first
//! checks for the ESC prefix and only then falls back to [`decode_unicode_char`]:
//!
//! ```text
//! 1 byte   control byte or single byte character
//! 3 bytes  ESC [ final   (CSI, "normal mode")
//!          ESC O final   (SS3, "application mode")
//!          otherwise a 3-byte UTF-8 character
//! 4 bytes  ESC [ n ~     (Delete, PageUp, PageDown)
//!          otherwise a 4-byte UTF-8 character
//! ```
//!
//! Only F1..F4 are recognized (`SS3 P` .. `SS3 S`). The `CSI n ~` encodings of F5 and
//! above are 5 bytes long and end up in the mouse path, where they are rejected.

use super::{DecodeError, Event, SpecialKey, utf8};
use crate::{ANSI_CSI_BRACKET, ANSI_ESC, ANSI_FUNCTION_KEY_TERMINATOR, ANSI_SS3_O,
            ARROW_DOWN_FINAL, ARROW_LEFT_FINAL, ARROW_RIGHT_FINAL, ARROW_UP_FINAL,
            CONTROL_CTRL_A, CONTROL_CTRL_Z, CONTROL_DEL, CONTROL_NUL, CONTROL_RETURN,
            CONTROL_TAB, SPECIAL_DELETE_CODE, SPECIAL_END_FINAL, SPECIAL_HOME_FINAL,
            SPECIAL_PAGE_DOWN_CODE, SPECIAL_PAGE_UP_CODE, SS3_F1_FINAL, SS3_F4_FINAL,
            SS3_FUNCTION_KEY_BASE};

/// Decode a unit consisting of a single byte.
///
/// ```text
/// 0x00        Ctrl+Space
/// 0x09        Tab
/// 0x0D        Return
/// 0x1B        Escape
/// 0x7F        Backspace
/// 0x01..0x1A  Ctrl+a .. Ctrl+z
/// other       the byte as a character
/// ```
#[must_use]
pub fn decode_single_byte(byte: u8) -> Event {
    match byte {
        CONTROL_NUL => Event::Ctrl(' '),
        CONTROL_TAB => SpecialKey::Tab.into(),
        CONTROL_RETURN => SpecialKey::Return.into(),
        ANSI_ESC => SpecialKey::Escape.into(),
        CONTROL_DEL => SpecialKey::Backspace.into(),
        CONTROL_CTRL_A..=CONTROL_CTRL_Z => Event::Ctrl(char::from(b'a' + byte - CONTROL_CTRL_A)),
        _ => Event::Char(char::from(byte)),
    }
}

/// Decode a 3 byte unit: a `CSI`/`SS3` key sequence or a 3-byte UTF-8 character.
///
/// # Errors
///
/// Returns [`DecodeError::InvalidSequence`] for an ESC prefixed unit with an unknown
/// second or final byte, or for bytes that aren't one UTF-8 character.
pub fn decode_three_bytes(bytes: &[u8; 3]) -> Result<Event, DecodeError> {
    let [first, second, final_byte] = *bytes;

    if first != ANSI_ESC {
        return decode_unicode_char(bytes);
    }

    match second {
        // Normal mode.
        // https://invisible-island.net/xterm/ctlseqs/ctlseqs.html#h2-Special-Keyboard-Keys
        ANSI_CSI_BRACKET => decode_cursor_key(final_byte)
            .map(Event::from)
            .ok_or_else(|| DecodeError::invalid_sequence(bytes, "unknown CSI key")),
        // Application mode.
        ANSI_SS3_O => match final_byte {
            SS3_F1_FINAL..=SS3_F4_FINAL => Ok(Event::FunctionKey(final_byte - SS3_FUNCTION_KEY_BASE)),
            _ => decode_cursor_key(final_byte)
                .map(Event::from)
                .ok_or_else(|| DecodeError::invalid_sequence(bytes, "unknown SS3 key")),
        },
        _ => Err(DecodeError::invalid_sequence(bytes, "unknown escape sequence")),
    }
}

/// Decode a 4 byte unit: `CSI 3 ~`, `CSI 5 ~`, `CSI 6 ~`, or a 4-byte UTF-8 character.
///
/// Any other `CSI` prefixed unit falls through to the UTF-8 attempt, which then fails
/// because ESC can't start a multi-byte character.
///
/// # Errors
///
/// Returns [`DecodeError::InvalidSequence`] if neither interpretation applies.
pub fn decode_four_bytes(bytes: &[u8; 4]) -> Result<Event, DecodeError> {
    if let [ANSI_ESC, ANSI_CSI_BRACKET, code, ANSI_FUNCTION_KEY_TERMINATOR] = *bytes {
        let key = match code {
            SPECIAL_DELETE_CODE => Some(SpecialKey::Delete),
            SPECIAL_PAGE_UP_CODE => Some(SpecialKey::PageUp),
            SPECIAL_PAGE_DOWN_CODE => Some(SpecialKey::PageDown),
            _ => None,
        };
        if let Some(key) = key {
            return Ok(key.into());
        }
    }

    decode_unicode_char(bytes)
}

/// Decode `bytes` as exactly one UTF-8 character.
///
/// # Errors
///
/// Returns [`DecodeError::InvalidSequence`] when the unit isn't a single, complete
/// UTF-8 character.
pub fn decode_unicode_char(bytes: &[u8]) -> Result<Event, DecodeError> {
    let Some(first_byte) = bytes.first() else {
        return Err(DecodeError::invalid_sequence(bytes, "empty input"));
    };

    if utf8::utf8_sequence_len(*first_byte) != Some(bytes.len()) {
        return Err(DecodeError::invalid_sequence(
            bytes,
            "not a single UTF-8 character of this length",
        ));
    }

    utf8::decode_single_char(bytes)
        .map(Event::Char)
        .ok_or_else(|| DecodeError::invalid_sequence(bytes, "invalid UTF-8 character"))
}

/// Final bytes shared by the `CSI` and `SS3` cursor key encodings.
fn decode_cursor_key(final_byte: u8) -> Option<SpecialKey> {
    match final_byte {
        ARROW_UP_FINAL => Some(SpecialKey::CursorUp),
        ARROW_DOWN_FINAL => Some(SpecialKey::CursorDown),
        ARROW_RIGHT_FINAL => Some(SpecialKey::CursorRight),
        ARROW_LEFT_FINAL => Some(SpecialKey::CursorLeft),
        SPECIAL_END_FINAL => Some(SpecialKey::End),
        SPECIAL_HOME_FINAL => Some(SpecialKey::Home),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    #[test]
    fn test_ctrl_letters() {
        for byte in 1..=26_u8 {
            let expected = Event::Ctrl(char::from(b'a' + byte - 1));
            assert_eq!(decode_single_byte(byte), expected, "byte {byte:#04x}");
        }
    }

    #[test_case(0x00, Event::Ctrl(' '))]
    #[test_case(0x08, Event::Ctrl('h') ; "backspace as ctrl h")]
    #[test_case(0x09, SpecialKey::Tab.into())]
    #[test_case(0x0D, SpecialKey::Return.into())]
    #[test_case(0x1B, SpecialKey::Escape.into())]
    #[test_case(0x7F, SpecialKey::Backspace.into())]
    #[test_case(0x1C, Event::Char('\u{1C}') ; "file separator is a char")]
    #[test_case(b'a', Event::Char('a'))]
    #[test_case(b' ', Event::Char(' '))]
    #[test_case(0xE9, Event::Char('é') ; "high byte as latin 1")]
    fn test_single_byte(byte: u8, expected: Event) {
        assert_eq!(decode_single_byte(byte), expected);
    }

    #[test_case(ANSI_CSI_BRACKET ; "csi")]
    #[test_case(ANSI_SS3_O ; "ss3")]
    fn test_cursor_keys_in_both_modes(second: u8) {
        let cases = [
            (b'A', SpecialKey::CursorUp),
            (b'B', SpecialKey::CursorDown),
            (b'C', SpecialKey::CursorRight),
            (b'D', SpecialKey::CursorLeft),
            (b'F', SpecialKey::End),
            (b'H', SpecialKey::Home),
        ];
        for (final_byte, key) in cases {
            assert_eq!(decode_three_bytes(&[ANSI_ESC, second, final_byte]), Ok(key.into()));
        }
    }

    #[test]
    fn test_ss3_function_keys() {
        for (n, final_byte) in (1..=4_u8).zip(b'P'..=b'S') {
            assert_eq!(
                decode_three_bytes(&[ANSI_ESC, ANSI_SS3_O, final_byte]),
                Ok(Event::FunctionKey(n))
            );
        }
    }

    #[test]
    fn test_function_keys_not_recognized_in_csi_mode() {
        assert!(decode_three_bytes(&[ANSI_ESC, ANSI_CSI_BRACKET, b'P']).is_err());
    }

    #[test_case([0x1b, 0x5b, 0x99] ; "unknown csi final")]
    #[test_case([0x1b, 0x4f, 0x5a] ; "unknown ss3 final")]
    #[test_case([0x1b, b'x', b'y'] ; "unknown introducer")]
    #[test_case(*b"abc" ; "three ascii chars")]
    fn test_three_bytes_rejects(bytes: [u8; 3]) {
        let Err(DecodeError::InvalidSequence { bytes: got, .. }) = decode_three_bytes(&bytes)
        else {
            panic!("expected InvalidSequence");
        };
        assert_eq!(got.as_slice(), &bytes);
    }

    #[test]
    fn test_three_byte_utf8() {
        let bytes: [u8; 3] = "世".as_bytes().try_into().unwrap();
        assert_eq!(decode_three_bytes(&bytes), Ok(Event::Char('世')));
    }

    #[test_case(b'3', SpecialKey::Delete)]
    #[test_case(b'5', SpecialKey::PageUp)]
    #[test_case(b'6', SpecialKey::PageDown)]
    fn test_extended_keys(code: u8, key: SpecialKey) {
        assert_eq!(decode_four_bytes(&[0x1b, b'[', code, b'~']), Ok(key.into()));
    }

    #[test]
    fn test_four_bytes_fall_through_to_utf8() {
        let bytes: [u8; 4] = "𐍈".as_bytes().try_into().unwrap();
        assert_eq!(decode_four_bytes(&bytes), Ok(Event::Char('𐍈')));
        assert!(decode_four_bytes(&[0x1b, b'[', b'2', b'~']).is_err());
        assert!(decode_four_bytes(&[0x1b, b'[', b'3', b'x']).is_err());
    }
}
