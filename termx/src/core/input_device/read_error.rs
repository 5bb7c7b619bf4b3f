// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::DecodeError;

/// Errors from [`InputReader::read_input_event`].
///
/// Only [`ReadInputEventError::Decode`] leaves bytes behind for diagnostics. The reader
/// stays usable after every variant; whether to keep reading after an I/O error or the
/// end of the stream is up to the caller.
///
/// [`InputReader::read_input_event`]: crate::InputReader::read_input_event
#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum ReadInputEventError {
    #[error("input stream ended before any bytes were read")]
    #[diagnostic(code(termx::input::end_of_stream))]
    EndOfStream,

    #[error("failed to read from the input source")]
    #[diagnostic(
        code(termx::input::io),
        help("The terminal may have been closed, or the read was interrupted.")
    )]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Decode(#[from] DecodeError),
}

impl ReadInputEventError {
    /// A decode error only affects the unit it was raised for. The next read proceeds
    /// normally.
    #[must_use]
    pub fn is_recoverable(&self) -> bool { matches!(self, ReadInputEventError::Decode(_)) }

    /// The raw unit that failed to decode, or an empty slice for stream errors.
    #[must_use]
    pub fn raw_bytes(&self) -> &[u8] {
        match self {
            ReadInputEventError::Decode(decode_error) => decode_error.bytes(),
            ReadInputEventError::EndOfStream | ReadInputEventError::Io(_) => &[],
        }
    }
}
