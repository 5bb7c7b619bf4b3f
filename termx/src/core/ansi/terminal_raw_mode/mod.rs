// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Raw mode and window size for unix terminals and the Windows console.
//!
//! In raw mode the terminal delivers every key press immediately, without line
//! buffering, echo, or signal generation for `C-c`/`C-z`. That is what the
//! [`InputReader`](crate::InputReader) expects to read from.
//!
//! ```text
//! ┌──────────────┐  enter_raw_mode(fd)   ┌──────────────┐
//! │  Cooked mode ├──────────────────────►│   Raw mode   │
//! │  (canonical) │◄──────────────────────┤              │
//! └──────────────┘  restore_mode(token)  └──────────────┘
//! ```
//!
//! On unix the switch goes through rustix termios. On Windows it goes through Crossterm
//! and additionally enables virtual terminal input on the console, so the same escape
//! sequences arrive on stdin.
//!
//! Prefer [`RawModeGuard`], which restores on drop.

// Attach.
#[cfg(unix)]
mod raw_mode_unix;
#[cfg(windows)]
mod raw_mode_windows;
#[cfg(any(unix, windows))]
mod raw_mode_guard;
#[cfg(any(unix, windows))]
mod terminal_size;

// Re-export.
#[cfg(unix)]
pub use raw_mode_unix::*;
#[cfg(windows)]
pub use raw_mode_windows::*;
#[cfg(any(unix, windows))]
pub use raw_mode_guard::*;
#[cfg(any(unix, windows))]
pub use terminal_size::*;
