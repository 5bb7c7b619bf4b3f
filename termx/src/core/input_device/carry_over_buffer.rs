// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Carry-over buffer for bytes that were read but not yet decoded.
//!
//! The [`CarryOverBuffer`] type owns the bytes of one physical read batch and hands them
//! out one logical unit at a time, splitting at ESC boundaries.

use crate::{ANSI_ESC, InputBytes};
use smallvec::SmallVec;

/// Probe buffer size for a single `read()` from the byte source.
///
/// A read that fills the whole probe means more bytes are likely waiting, so the reader
/// keeps reading. A short read means the source is drained for now.
pub const STDIN_READ_BUFFER_SIZE: usize = 256;

/// Buffer holding bytes already read from the source but not yet decoded.
///
/// # Design
///
/// ```text
/// ┌─────────────────────────────────────────────────────────────┐
/// │ data: [handed out units...][ESC pending bytes...]           │
/// │                            ^                                │
/// │                            position                         │
/// └─────────────────────────────────────────────────────────────┘
/// ```
///
/// - Bytes before `position` have been handed out and are dropped on the next refill.
/// - Bytes from `position` onward are the carry-over. They are either empty or start
///   with ESC, because a unit always ends right before the next ESC.
#[derive(Debug, Default)]
pub struct CarryOverBuffer {
    data: SmallVec<[u8; STDIN_READ_BUFFER_SIZE]>,
    position: usize,
}

impl CarryOverBuffer {
    #[must_use]
    pub fn new() -> Self { Self::default() }

    /// Bytes not yet handed out.
    #[must_use]
    pub fn pending(&self) -> &[u8] { &self.data[self.position..] }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.pending().is_empty() }

    /// Replace the (empty) carry-over with a freshly read batch.
    pub fn refill(&mut self, batch: &[u8]) {
        debug_assert!(self.is_empty(), "refill with pending carry-over bytes");
        self.data.clear();
        self.data.extend_from_slice(batch);
        self.position = 0;
    }

    /// Split off the next logical unit.
    ///
    /// The unit runs from the start of the pending bytes up to (not including) the next
    /// ESC found at offset 1 or later. Without such an ESC the unit is everything that
    /// is pending and the buffer becomes empty. Returns an empty unit if nothing is
    /// pending.
    pub fn take_unit(&mut self) -> InputBytes {
        let pending = self.pending();
        let unit_len = pending
            .iter()
            .skip(1)
            .position(|byte| *byte == ANSI_ESC)
            .map_or(pending.len(), |offset| offset + 1);

        let unit = InputBytes::from_slice(&pending[..unit_len]);
        self.position += unit_len;

        if self.is_empty() {
            self.data.clear();
            self.position = 0;
        }

        debug_assert!(
            self.pending().first().is_none_or(|byte| *byte == ANSI_ESC),
            "carry-over must be empty or start with ESC"
        );

        unit
    }
}
