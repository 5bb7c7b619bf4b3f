// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Mouse report decoding for units of 5 or more bytes.
//!
//! Two encodings are understood:
//!
//! ```text
//! X10  ESC [ M Cb Cx Cy        exactly 6 bytes, each of Cb Cx Cy offset by 32
//! SGR  ESC [ < b ; x ; y M     press
//!      ESC [ < b ; x ; y m     release
//! ```
//!
//! Any unit of 5+ bytes that isn't a 6 byte X10 report is treated as SGR, so a stray
//! long escape sequence fails with an SGR specific reason.
//!
//! Coordinates are passed through unchanged: they are 1-based terminal cells as sent by
//! the terminal. X10 bytes below the offset produce negative values, and SGR fields
//! accept any signed 64-bit integer, which is why the coordinates are `i64`.

use super::{DecodeError, Event, MouseButton, MouseEvent};
use crate::{ANSI_CSI_BRACKET, ANSI_ESC, ANSI_PARAM_SEPARATOR, MOUSE_BUTTON_BITS_MASK,
            MOUSE_SGR_MARKER, MOUSE_SGR_PRESS, MOUSE_SGR_RELEASE, MOUSE_X10_BYTE_OFFSET,
            MOUSE_X10_MARKER, MOUSE_X10_RELEASE_BITS, MOUSE_X10_SEQUENCE_LEN};

const X10_PREFIX: [u8; 3] = [ANSI_ESC, ANSI_CSI_BRACKET, MOUSE_X10_MARKER];
const SGR_PREFIX: [u8; 3] = [ANSI_ESC, ANSI_CSI_BRACKET, MOUSE_SGR_MARKER];

/// Decode a unit of 5 or more bytes as a mouse report.
///
/// # Errors
///
/// Returns [`DecodeError::InvalidSequence`] if the unit is neither a valid X10 nor a
/// valid SGR report.
pub fn decode_mouse(bytes: &[u8]) -> Result<Event, DecodeError> {
    let mouse_event = if bytes.len() == MOUSE_X10_SEQUENCE_LEN && bytes.starts_with(&X10_PREFIX) {
        decode_x10_mouse(bytes)?
    } else {
        decode_sgr_mouse(bytes)?
    };
    Ok(Event::Mouse(mouse_event))
}

/// Map the low two bits of the button flags to a button. `1` is middle, `2` is right,
/// everything else (including the X10 release value `3`) is left.
///
/// Higher bits (modifiers, motion, wheel) are ignored, so wheel reports collapse onto
/// the three buttons.
#[must_use]
pub fn determine_button(flags: i64) -> MouseButton {
    match flags & MOUSE_BUTTON_BITS_MASK {
        1 => MouseButton::Middle,
        2 => MouseButton::Right,
        _ => MouseButton::Left,
    }
}

fn decode_x10_mouse(bytes: &[u8]) -> Result<MouseEvent, DecodeError> {
    let [_, _, _, cb, cx, cy] = bytes else {
        return Err(DecodeError::invalid_sequence(bytes, "X10 mouse report must be 6 bytes"));
    };

    let flags = i64::from(*cb) - MOUSE_X10_BYTE_OFFSET;
    if flags < 0 {
        return Err(DecodeError::invalid_sequence(bytes, "X10 mouse button byte below 32"));
    }

    Ok(MouseEvent {
        button: determine_button(flags),
        x: i64::from(*cx) - MOUSE_X10_BYTE_OFFSET,
        y: i64::from(*cy) - MOUSE_X10_BYTE_OFFSET,
        release: flags & MOUSE_BUTTON_BITS_MASK == MOUSE_X10_RELEASE_BITS,
    })
}

fn decode_sgr_mouse(bytes: &[u8]) -> Result<MouseEvent, DecodeError> {
    let Some(rest) = bytes.strip_prefix(&SGR_PREFIX) else {
        return Err(DecodeError::invalid_sequence(bytes, "unrecognized mouse sequence prefix"));
    };

    let (release, params) = match rest.split_last() {
        Some((&MOUSE_SGR_PRESS, params)) => (false, params),
        Some((&MOUSE_SGR_RELEASE, params)) => (true, params),
        _ => {
            return Err(DecodeError::invalid_sequence(
                bytes,
                "SGR mouse report must end in 'M' or 'm'",
            ));
        }
    };

    let mut fields = params.split(|byte| *byte == ANSI_PARAM_SEPARATOR);
    let (Some(b), Some(x), Some(y), None) =
        (fields.next(), fields.next(), fields.next(), fields.next())
    else {
        return Err(DecodeError::invalid_sequence(
            bytes,
            "SGR mouse report must have exactly 3 fields",
        ));
    };

    let parse_field = |field: &[u8]| -> Result<i64, DecodeError> {
        std::str::from_utf8(field)
            .ok()
            .and_then(|text| text.parse::<i64>().ok())
            .ok_or_else(|| DecodeError::invalid_sequence(bytes, "SGR mouse field is not an integer"))
    };

    let flags = parse_field(b)?;
    Ok(MouseEvent {
        button: determine_button(flags),
        x: parse_field(x)?,
        y: parse_field(y)?,
        release,
    })
}
