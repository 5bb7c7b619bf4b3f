// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! VT-100 terminal input decoding.
//!
//! This module converts one logical input unit (raw bytes from a terminal in raw mode)
//! into an [`Event`]. It is pure: no I/O, no buffering, no logging. Splitting a stream
//! of bytes into units is the job of the [input device] layer.
//!
//! ```text
//! Raw terminal input (stdin)
//!    │
//! ┌──▼──────────────────────────────────────┐
//! │  InputReader                            │  ← core/input_device/
//! │  • Read until a chunk doesn't fill 256B │
//! │  • Split at the next ESC                │
//! │  • Keep the rest as carry-over          │
//! └─────────────────────────────────────────┘
//!    │ (one unit at a time)
//! ┌──▼──────────────────────────────────────┐
//! │  decode_input_event() (pure)            │  ← core/ansi/
//! │  • keyboard.rs                          │     vt_100_terminal_input_parser/
//! │  • mouse.rs                             │
//! │  • utf8.rs                              │
//! └─────────────────────────────────────────┘
//!    │
//!    ▼
//! Event (key press or mouse report)
//! ```
//!
//! ## Module responsibilities
//!
//! - `keyboard.rs`: control bytes, `CSI`/`SS3` cursor keys, F1-F4, Delete, PageUp and
//!   PageDown.
//! - `mouse.rs`: X10 (`CSI M Cb Cx Cy`) and SGR (`CSI < b ; x ; y M/m`) reports.
//! - `utf8.rs`: a unit that is exactly one multi-byte character.
//! - `router.rs`: length based dispatch to the above.
//!
//! Mouse coordinates are 1-based with (1, 1) at the top-left corner and are passed
//! through as reported.
//!
//! [input device]: crate::InputReader

// Skip rustfmt for rest of file.
// https://stackoverflow.com/a/75910283/2085356
#![cfg_attr(rustfmt, rustfmt_skip)]

// Attach.
pub mod keyboard;
pub mod mouse;
pub mod utf8;
mod decode_error;
mod event_types;
mod router;

// Re-export.
pub use decode_error::*;
pub use event_types::*;
pub use mouse::determine_button;
pub use router::*;

#[cfg(test)]
mod validation_tests;
