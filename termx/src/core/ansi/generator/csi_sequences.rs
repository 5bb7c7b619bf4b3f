// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Parameterized output sequences.
//!
//! Fixed sequences live in [`constants`]. The builders here take parameters and return
//! an owned [`String`] that can be written to the terminal as is.
//!
//! All coordinates are 1-based, so `(1, 1)` is the top-left cell.
//!
//! [`constants`]: crate::core::ansi::constants

use crate::{CSI, OSC, STRING_TERMINATOR};
use std::fmt;

/// `CSI n A`
#[must_use]
pub fn move_cursor_up(n: u16) -> String { format!("{CSI}{n}A") }

/// `CSI n B`
#[must_use]
pub fn move_cursor_down(n: u16) -> String { format!("{CSI}{n}B") }

/// `CSI n C`
#[must_use]
pub fn move_cursor_forward(n: u16) -> String { format!("{CSI}{n}C") }

/// `CSI n D`
#[must_use]
pub fn move_cursor_backward(n: u16) -> String { format!("{CSI}{n}D") }

/// Move the cursor to column `x`, row `y`. Note the order on the wire is row first:
/// `CSI y ; x H`.
#[must_use]
pub fn set_cursor_position(x: u16, y: u16) -> String { format!("{CSI}{y};{x}H") }

/// `OSC 2 ; title ST`
#[must_use]
pub fn set_window_title(title: &str) -> String {
    format!("{OSC}2;{title}{STRING_TERMINATOR}")
}

/// Cursor shapes selectable with DECSCUSR (`CSI n SP q`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum_macros::EnumIter)]
pub enum CursorStyle {
    BlinkingBlock,
    SteadyBlock,
    BlinkingUnderline,
    SteadyUnderline,
    BlinkingBar,
    SteadyBar,
}

impl CursorStyle {
    #[must_use]
    pub fn code(self) -> u8 {
        match self {
            CursorStyle::BlinkingBlock => 1,
            CursorStyle::SteadyBlock => 2,
            CursorStyle::BlinkingUnderline => 3,
            CursorStyle::SteadyUnderline => 4,
            CursorStyle::BlinkingBar => 5,
            CursorStyle::SteadyBar => 6,
        }
    }
}

impl fmt::Display for CursorStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{CSI}{} q", self.code())
    }
}
