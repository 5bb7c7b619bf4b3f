// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Single-shot request/response exchanges with the terminal. The reply is read with a
//! single `read()` and parsed on the spot; it never goes through the
//! [`InputReader`](crate::InputReader).

// Attach.
mod background_color;
mod cursor_position;
mod exec_query;
mod query_error;

// Re-export.
pub use background_color::*;
pub use cursor_position::*;
pub use query_error::*;
