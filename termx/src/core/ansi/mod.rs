// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! ANSI protocol layer: input decoding, output sequences and styling, terminal
//! queries and raw mode.

// Skip rustfmt for rest of file.
// https://stackoverflow.com/a/75910283/2085356
#![cfg_attr(rustfmt, rustfmt_skip)]

// Attach.
pub mod constants;
pub mod detect_color_support;
pub mod generator;
pub mod terminal_queries;
pub mod terminal_raw_mode;
pub mod vt_100_terminal_input_parser;

// Re-export flat public API.
pub use constants::*;
pub use detect_color_support::*;
pub use generator::*;
pub use terminal_queries::*;
pub use terminal_raw_mode::*;
pub use vt_100_terminal_input_parser::*;
