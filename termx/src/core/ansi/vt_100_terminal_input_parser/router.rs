// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! This module exports [`decode_input_event`], the entry point that turns one logical
//! input unit into an [`Event`].

use super::{DecodeError, Event, keyboard, mouse};

/// Decode one complete logical input unit.
///
/// The unit is what the [input reader] hands over after splitting a read at ESC
/// boundaries: either a single escape sequence, or the bytes of one keystroke. The
/// decoder never sees partial data and never buffers, so it is a pure function of its
/// input. Routing is by length:
///
/// ```text
/// ┌────────┬──────────────────────────────────────────────────────────┐
/// │ length │ interpretation                                           │
/// ├────────┼──────────────────────────────────────────────────────────┤
/// │ 0      │ error                                                    │
/// │ 1      │ control byte or single byte character                    │
/// │ 2      │ one 2-byte UTF-8 character                               │
/// │ 3      │ CSI / SS3 key, or one 3-byte UTF-8 character             │
/// │ 4      │ CSI 3~ / 5~ / 6~, or one 4-byte UTF-8 character          │
/// │ 5+     │ X10 mouse (exactly 6 bytes, ESC [ M) or SGR mouse        │
/// └────────┴──────────────────────────────────────────────────────────┘
/// ```
///
/// See [`keyboard`] and [`mouse`] for the individual rules.
///
/// # Errors
///
/// Returns [`DecodeError::InvalidSequence`] carrying the whole unit when no rule
/// accepts it. This includes pasted text that arrives as one unit of several
/// characters.
///
/// [input reader]: crate::InputReader
pub fn decode_input_event(bytes: &[u8]) -> Result<Event, DecodeError> {
    match bytes {
        [] => Err(DecodeError::invalid_sequence(bytes, "empty input")),
        [byte] => Ok(keyboard::decode_single_byte(*byte)),
        [_, _] => keyboard::decode_unicode_char(bytes),
        [a, b, c] => keyboard::decode_three_bytes(&[*a, *b, *c]),
        [a, b, c, d] => keyboard::decode_four_bytes(&[*a, *b, *c, *d]),
        _ => mouse::decode_mouse(bytes),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{MouseButton, MouseEvent, SpecialKey};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_empty_input_is_an_error() {
        let err = decode_input_event(&[]).unwrap_err();
        assert!(err.bytes().is_empty());
    }

    #[test]
    fn test_routes_by_length() {
        assert_eq!(decode_input_event(b"q"), Ok(Event::Char('q')));
        assert_eq!(decode_input_event("ö".as_bytes()), Ok(Event::Char('ö')));
        assert_eq!(decode_input_event(b"\x1b[A"), Ok(SpecialKey::CursorUp.into()));
        assert_eq!(decode_input_event(b"\x1b[6~"), Ok(SpecialKey::PageDown.into()));
        assert_eq!(
            decode_input_event(b"\x1b[<0;1;1M"),
            Ok(Event::Mouse(MouseEvent {
                button: MouseButton::Left,
                x: 1,
                y: 1,
                release: false
            }))
        );
    }

    #[test]
    fn test_two_ascii_chars_are_rejected() {
        let err = decode_input_event(b"ab").unwrap_err();
        assert_eq!(err.bytes(), b"ab");
    }
}
