// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use super::{CarryOverBuffer, DEBUG_TERMX_SHOW_INPUT_READER, ReadInputEventError,
            STDIN_READ_BUFFER_SIZE};
use crate::{Event, InputBytes, decode_input_event, fmt_hex};
use smallvec::SmallVec;
use std::io::{ErrorKind, Read};

/// A decoded [`Event`] together with the raw bytes it was decoded from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawInputEvent {
    pub event: Event,
    pub raw: InputBytes,
}

/// Turns a blocking byte source into a sequence of [`Event`]s.
///
/// One physical read can deliver several logical units at once (key repeat, a mouse
/// report right after a key press). The reader splits each batch at ESC boundaries and
/// keeps the rest as carry-over for the next call.
///
/// ```text
///        ┌──────────────┐  carry-over empty   ┌──────────────┐
///   ┌───►│     Idle     ├────────────────────►│  read batch  │
///   │    └──────────────┘                     └──────┬───────┘
///   │           ▲                                    │ refill
///   │           │ last unit taken             ┌──────▼───────┐
///   │           └─────────────────────────────┤   Buffered   │◄──┐
///   │                                         └──────┬───────┘   │ more units
///   │                                                └───────────┘
/// ```
///
/// The reader is not thread safe and isn't meant to be: one reader per input stream,
/// owned by the event loop. There are no retries; an [`ErrorKind::Interrupted`] read is
/// returned as [`ReadInputEventError::Io`] like any other failure.
#[derive(Debug)]
pub struct InputReader<R> {
    source: R,
    carry_over: CarryOverBuffer,
}

impl<R: Read> InputReader<R> {
    pub fn new(source: R) -> Self {
        Self {
            source,
            carry_over: CarryOverBuffer::new(),
        }
    }

    /// Bytes read but not yet decoded. Either empty or starting with ESC.
    #[must_use]
    pub fn carry_over(&self) -> &[u8] { self.carry_over.pending() }

    pub fn get_ref(&self) -> &R { &self.source }

    pub fn get_mut(&mut self) -> &mut R { &mut self.source }

    pub fn into_inner(self) -> R { self.source }

    /// Return the next event, blocking on the source only if there is no carry-over.
    ///
    /// # Errors
    ///
    /// - [`ReadInputEventError::EndOfStream`] if the source is exhausted and nothing
    ///   was read. Running into the end of the stream after some bytes were read just
    ///   ends the batch.
    /// - [`ReadInputEventError::Io`] for any other read failure. Bytes read earlier in
    ///   the same batch are dropped and the carry-over is left untouched.
    /// - [`ReadInputEventError::Decode`] if the next unit isn't a recognized key or
    ///   mouse report. The unit is consumed and the reader stays usable.
    pub fn read_input_event(&mut self) -> Result<RawInputEvent, ReadInputEventError> {
        if self.carry_over.is_empty() {
            let batch = self.read_batch()?;
            self.carry_over.refill(&batch);
        }

        let raw = self.carry_over.take_unit();

        DEBUG_TERMX_SHOW_INPUT_READER.then(|| {
            tracing::trace!(
                message = "input-reader: unit",
                raw = %fmt_hex(&raw),
                carry_over_len = self.carry_over.pending().len()
            );
        });

        match decode_input_event(&raw) {
            Ok(event) => Ok(RawInputEvent { event, raw }),
            Err(decode_error) => {
                DEBUG_TERMX_SHOW_INPUT_READER.then(|| {
                    tracing::debug!(message = "input-reader: decode failed", error = %decode_error);
                });
                Err(decode_error.into())
            }
        }
    }

    /// Read until a chunk comes back shorter than the probe buffer.
    fn read_batch(&mut self) -> Result<SmallVec<[u8; STDIN_READ_BUFFER_SIZE]>, ReadInputEventError> {
        let mut probe = [0_u8; STDIN_READ_BUFFER_SIZE];
        let mut batch: SmallVec<[u8; STDIN_READ_BUFFER_SIZE]> = SmallVec::new();

        loop {
            match self.source.read(&mut probe) {
                Ok(0) => break,
                Ok(bytes_read) => {
                    batch.extend_from_slice(&probe[..bytes_read]);
                    if bytes_read < probe.len() {
                        break;
                    }
                }
                Err(error) if error.kind() == ErrorKind::UnexpectedEof => break,
                Err(error) => {
                    DEBUG_TERMX_SHOW_INPUT_READER.then(|| {
                        tracing::debug!(
                            message = "input-reader: read failed",
                            error = ?error,
                            discarded = batch.len()
                        );
                    });
                    return Err(error.into());
                }
            }
        }

        if batch.is_empty() {
            DEBUG_TERMX_SHOW_INPUT_READER.then(|| {
                tracing::debug!(message = "input-reader: EOF (0 bytes)");
            });
            return Err(ReadInputEventError::EndOfStream);
        }

        DEBUG_TERMX_SHOW_INPUT_READER.then(|| {
            tracing::trace!(message = "input-reader: read batch", bytes_read = batch.len());
        });

        Ok(batch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{MouseButton, MouseEvent, SpecialKey};
    use pretty_assertions::assert_eq;
    use std::{collections::VecDeque, io::Cursor};

    /// Byte source replaying scripted read results, one per `read()` call.
    struct ScriptedSource {
        script: VecDeque<std::io::Result<Vec<u8>>>,
    }

    impl ScriptedSource {
        fn new(script: impl IntoIterator<Item = std::io::Result<Vec<u8>>>) -> Self {
            Self { script: script.into_iter().collect() }
        }
    }

    impl Read for ScriptedSource {
        fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
            match self.script.pop_front() {
                None => Ok(0),
                Some(Err(error)) => Err(error),
                Some(Ok(chunk)) => {
                    assert!(chunk.len() <= buf.len(), "scripted chunk larger than probe");
                    buf[..chunk.len()].copy_from_slice(&chunk);
                    Ok(chunk.len())
                }
            }
        }
    }

    fn event_of(reader: &mut InputReader<impl Read>) -> Event {
        reader.read_input_event().unwrap().event
    }

    #[test]
    fn test_single_char() {
        let mut reader = InputReader::new(Cursor::new(b"a".to_vec()));
        let RawInputEvent { event, raw } = reader.read_input_event().unwrap();
        assert_eq!(event, Event::Char('a'));
        assert_eq!(raw.as_slice(), b"a");
        assert!(reader.carry_over().is_empty());
    }

    #[test]
    fn test_single_sequence() {
        let mut reader = InputReader::new(Cursor::new(b"\x1bOH".to_vec()));
        assert_eq!(event_of(&mut reader), SpecialKey::Home.into());
        assert!(reader.carry_over().is_empty());
    }

    #[test]
    fn test_two_sequences_in_one_read() {
        let mut reader = InputReader::new(Cursor::new(b"\x1bOH\x1bOH".to_vec()));

        assert_eq!(event_of(&mut reader), SpecialKey::Home.into());
        assert_eq!(reader.carry_over(), b"\x1bOH");

        assert_eq!(event_of(&mut reader), SpecialKey::Home.into());
        assert!(reader.carry_over().is_empty());
    }

    #[test]
    fn test_carry_over_is_served_without_reading() {
        let source = ScriptedSource::new([
            Ok(b"\x1b[A\x1b[<0;3;4M".to_vec()),
            Err(std::io::Error::other("must not be read")),
        ]);
        let mut reader = InputReader::new(source);

        assert_eq!(event_of(&mut reader), SpecialKey::CursorUp.into());
        assert_eq!(
            event_of(&mut reader),
            Event::Mouse(MouseEvent {
                button: MouseButton::Left,
                x: 3,
                y: 4,
                release: false
            })
        );
        assert_eq!(reader.get_ref().script.len(), 1);
    }

    #[test]
    fn test_decode_error_then_valid_unit() {
        let mut reader = InputReader::new(Cursor::new(b"\x1b[\x99\x1b[B".to_vec()));

        let err = reader.read_input_event().unwrap_err();
        assert!(err.is_recoverable());
        assert_eq!(err.raw_bytes(), b"\x1b[\x99");
        assert_eq!(reader.carry_over(), b"\x1b[B");

        assert_eq!(event_of(&mut reader), SpecialKey::CursorDown.into());
    }

    #[test]
    fn test_full_chunks_are_accumulated() {
        // Two full probes followed by the end of the stream form a single batch.
        let mut first = vec![b'x'; STDIN_READ_BUFFER_SIZE - 3];
        first.extend_from_slice(b"\x1b[C");
        let second = vec![b'y'; STDIN_READ_BUFFER_SIZE];
        let source = ScriptedSource::new([Ok(first), Ok(second)]);
        let mut reader = InputReader::new(source);

        let err = reader.read_input_event().unwrap_err();
        assert_eq!(err.raw_bytes().len(), STDIN_READ_BUFFER_SIZE - 3);

        // The rest of the batch stays in carry-over, so the trailing text is part of
        // the ESC unit and fails to decode.
        assert_eq!(reader.carry_over().len(), 3 + STDIN_READ_BUFFER_SIZE);
        let err = reader.read_input_event().unwrap_err();
        assert_eq!(err.raw_bytes().len(), 3 + STDIN_READ_BUFFER_SIZE);
        assert!(reader.carry_over().is_empty());
    }

    #[test]
    fn test_short_chunk_ends_batch() {
        let source = ScriptedSource::new([Ok(b"q".to_vec()), Ok(b"w".to_vec())]);
        let mut reader = InputReader::new(source);

        assert_eq!(event_of(&mut reader), Event::Char('q'));
        assert_eq!(event_of(&mut reader), Event::Char('w'));
    }

    #[test]
    fn test_unexpected_eof_after_bytes_ends_batch() {
        let full = vec![b'z'; STDIN_READ_BUFFER_SIZE];
        let source = ScriptedSource::new([
            Ok(full),
            Err(std::io::Error::from(ErrorKind::UnexpectedEof)),
        ]);
        let mut reader = InputReader::new(source);

        let err = reader.read_input_event().unwrap_err();
        assert_eq!(err.raw_bytes().len(), STDIN_READ_BUFFER_SIZE);
    }

    #[test]
    fn test_end_of_stream() {
        let mut reader = InputReader::new(Cursor::new(Vec::new()));
        assert!(matches!(
            reader.read_input_event(),
            Err(ReadInputEventError::EndOfStream)
        ));

        let source = ScriptedSource::new([Err(std::io::Error::from(ErrorKind::UnexpectedEof))]);
        let mut reader = InputReader::new(source);
        assert!(matches!(
            reader.read_input_event(),
            Err(ReadInputEventError::EndOfStream)
        ));
    }

    #[test]
    fn test_io_error_is_propagated_and_reader_survives() {
        let source = ScriptedSource::new([
            Err(std::io::Error::from(ErrorKind::Interrupted)),
            Ok(b"\x0d".to_vec()),
        ]);
        let mut reader = InputReader::new(source);

        match reader.read_input_event() {
            Err(ReadInputEventError::Io(error)) => {
                assert_eq!(error.kind(), ErrorKind::Interrupted);
            }
            other => panic!("expected Io error, got {other:?}"),
        }
        assert!(reader.carry_over().is_empty());

        assert_eq!(event_of(&mut reader), SpecialKey::Return.into());
    }

    #[test]
    fn test_io_error_mid_batch_drops_partial_bytes() {
        let full = vec![b'k'; STDIN_READ_BUFFER_SIZE];
        let source = ScriptedSource::new([
            Ok(full),
            Err(std::io::Error::from(ErrorKind::BrokenPipe)),
            Ok(b"k".to_vec()),
        ]);
        let mut reader = InputReader::new(source);

        assert!(matches!(
            reader.read_input_event(),
            Err(ReadInputEventError::Io(_))
        ));
        assert!(reader.carry_over().is_empty());
        assert_eq!(event_of(&mut reader), Event::Char('k'));
    }
}
