// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use smallvec::SmallVec;
use std::fmt::Write;

/// Inline capacity for a single logical input unit. Key sequences are at most 4 bytes
/// and mouse reports rarely exceed 16, so typical units never touch the heap.
pub const INPUT_BYTES_INLINE_CAPACITY: usize = 16;

/// The raw bytes of one logical input unit.
pub type InputBytes = SmallVec<[u8; INPUT_BYTES_INLINE_CAPACITY]>;

/// The decoder's only error kind. It is always recoverable: the caller decides whether
/// to drop, log or surface the unit. The offending bytes are kept for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, miette::Diagnostic)]
pub enum DecodeError {
    #[error("invalid input byte sequence ({reason}): [{}]", fmt_hex(.bytes))]
    #[diagnostic(
        code(termx::input::invalid_sequence),
        help(
            "The bytes don't match any recognized key or mouse encoding. \
             This is usually a terminal reply (e.g. a cursor position report) \
             or noise, and can be ignored."
        )
    )]
    InvalidSequence {
        /// The complete unit that failed to decode.
        bytes: InputBytes,
        /// Which rule rejected the unit.
        reason: &'static str,
    },
}

impl DecodeError {
    pub(crate) fn invalid_sequence(bytes: &[u8], reason: &'static str) -> Self {
        DecodeError::InvalidSequence { bytes: InputBytes::from_slice(bytes), reason }
    }

    /// The raw bytes that could not be decoded.
    #[must_use]
    pub fn bytes(&self) -> &[u8] {
        match self {
            DecodeError::InvalidSequence { bytes, .. } => bytes,
        }
    }
}

/// Renders bytes as space separated lowercase hex, e.g. `1b 5b 41`.
#[must_use]
pub fn fmt_hex(bytes: &[u8]) -> String {
    let mut acc = String::with_capacity(bytes.len() * 3);
    for (index, byte) in bytes.iter().enumerate() {
        if index > 0 {
            acc.push(' ');
        }
        // Writing to a String never fails.
        let _unused = write!(acc, "{byte:02x}");
    }
    acc
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_fmt_hex() {
        assert_eq!(fmt_hex(&[]), "");
        assert_eq!(fmt_hex(&[0x1b, 0x5b, 0x99]), "1b 5b 99");
    }

    #[test]
    fn test_error_message_carries_bytes() {
        let error = DecodeError::invalid_sequence(&[0x1b, 0x5b, 0x99], "unknown CSI key");
        assert_eq!(error.bytes(), &[0x1b, 0x5b, 0x99]);
        assert_eq!(
            error.to_string(),
            "invalid input byte sequence (unknown CSI key): [1b 5b 99]"
        );
    }
}
