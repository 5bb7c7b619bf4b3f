// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Skip rustfmt for rest of file.
// https://stackoverflow.com/a/75910283/2085356
#![cfg_attr(rustfmt, rustfmt_skip)]

//! # termx
//!
//! Turn the raw bytes a terminal sends in raw mode into typed key and mouse events.
//!
//! ```text
//! stdin ──► InputReader ──► split at ESC ──► decode_input_event ──► Event
//!               ▲                │
//!               └── carry-over ◄─┘
//! ```
//!
//! - [`decode_input_event`] is a pure function from one logical input unit to an
//!   [`Event`]: control bytes, UTF-8 characters, `CSI`/`SS3` cursor and function
//!   keys, and X10/SGR mouse reports.
//! - [`InputReader`] wraps any blocking [`std::io::Read`], splits batches that contain
//!   several events, and keeps the remainder for the next call.
//!
//! Around that core, the crate carries what an interactive program needs to drive the
//! terminal:
//!
//! - Raw mode and window size on unix and Windows: [`RawModeGuard`],
//!   [`enter_raw_mode`], [`restore_mode`], [`query_size`], [`is_terminal`].
//! - Output sequences: mode switches like [`USE_ALTERNATE_SCREEN_BUFFER`] and
//!   [`ENABLE_MOUSE_SGR_ENCODING`], and builders like [`set_cursor_position`].
//! - Colors and text attributes: [`Sgr`], [`SgrWriter`], [`remove_sgr`] and
//!   [`is_truecolor_supported`].
//! - Single-shot queries: [`query_cursor_position`] and [`query_background_color`].
//! - Logging setup with `tracing`: [`try_initialize_logging_global`].
//!
//! ## Example
//!
//! ```
//! use std::io::Cursor;
//! use termx::{Event, InputReader, SpecialKey};
//!
//! // Two key presses that arrived in a single read.
//! let mut reader = InputReader::new(Cursor::new(b"\x1bOH\x1b[A".to_vec()));
//!
//! let first = reader.read_input_event().unwrap();
//! assert_eq!(first.event, Event::Special(SpecialKey::Home));
//! assert_eq!(reader.carry_over(), b"\x1b[A");
//!
//! let second = reader.read_input_event().unwrap();
//! assert_eq!(second.event.to_string(), "<Up>");
//! ```

// Enforce strict error handling in production library code only. Tests are allowed to
// use .unwrap() (workspace `Cargo.toml` config allows it).
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

// Attach modules (re-exported below to provide a flat public API).
pub mod core;

// Re-export.
pub use core::*;
