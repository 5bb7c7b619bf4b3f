// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! # termx-cmdr
//!
//! Interactive programs built on [`termx`].
//!
//! ## keypress
//!
//! Switches the terminal to raw mode and prints every unit of input as it is decoded:
//!
//! ```text
//! <Up> [1b 5b 41]
//! C-x [18]
//! <press 1 at (12,3)> [1b 5b 3c 30 3b 31 32 3b 33 4d]
//! ? [1b 5b 31 35 7e] invalid input byte sequence (...): [1b 5b 31 35 7e]
//! ```
//!
//! ```sh
//! cargo run --bin keypress -- --alt-buffer --app-mode --mouse -l
//! ```
//!
//! | Key   | Action                          |
//! |-------|---------------------------------|
//! | `C-x` | query the background color      |
//! | `C-v` | query the cursor position       |
//! | `C-c` | quit (`q` works too)            |

// Enforce strict error handling in production library code only.
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

// Attach.
pub mod keypress;
