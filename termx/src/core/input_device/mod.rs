// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Blocking input device. See [`InputReader`] for splitting a byte stream into units
//! and handing them to the [decoder].
//!
//! [decoder]: crate::decode_input_event

/// Emit `tracing` events for every read batch and decoded unit.
pub const DEBUG_TERMX_SHOW_INPUT_READER: bool = true;

// Attach.
mod carry_over_buffer;
mod input_reader;
mod read_error;

// Re-export.
pub use carry_over_buffer::*;
pub use input_reader::*;
pub use read_error::*;
