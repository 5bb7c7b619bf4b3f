// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::fmt::Display;

pub const WINDOW_TITLE: &str = "termx keypress";

pub const HEADER: &str = "termx keypress: raw terminal input decoder";

pub const INSTRUCTIONS: &str = "Press any key to see its decoded form; C-x shows the background color; C-v shows the cursor position; C-c or q quits";

pub const NOT_A_TERMINAL: &str = "stdin is not a terminal, run keypress in an interactive terminal";

#[must_use]
pub fn modes_msg(
    app_mode: impl Display,
    alt_buffer: impl Display,
    mouse: impl Display,
) -> String {
    format!("Application mode: {app_mode}; Alternate buffer: {alt_buffer}; Mouse tracking: {mouse}")
}
