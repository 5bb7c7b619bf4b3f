// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Input event types produced by the decoder.
//!
//! [`Event`] is a closed sum type: every byte pattern the decoder understands maps to
//! exactly one variant, and callers are expected to `match` exhaustively. Events are
//! plain values with structural equality; each decode builds a fresh one.
//!
//! The [`Display`] output of every event is stable and safe to compare against, e.g.
//! `C-c`, `<Up>`, `<press 1 at (3,4)>`.
//!
//! [`Display`]: std::fmt::Display

use std::fmt;
use strum_macros::EnumIter;

/// A single decoded terminal input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Event {
    /// A printable Unicode code point.
    Char(char),
    /// A letter or space combined with the control modifier.
    Ctrl(char),
    /// A letter combined with the alt/meta modifier.
    ///
    /// The byte decoder never emits this variant (no recognized byte pattern maps to
    /// it). It exists so that callers can build key bindings that mention it.
    Alt(char),
    /// Function key `F<n>`.
    ///
    /// The type admits any `n`, but the decoder only recognizes the four `SS3`
    /// encodings `ESC O P` .. `ESC O S`, so only `1..=4` are ever produced.
    FunctionKey(u8),
    /// A named non-printing key.
    Special(SpecialKey),
    /// A mouse button press or release.
    Mouse(MouseEvent),
}

impl Event {
    /// `true` for every variant except [`Event::Mouse`].
    #[must_use]
    pub fn is_key_press(&self) -> bool { !matches!(self, Event::Mouse(_)) }
}

impl From<SpecialKey> for Event {
    fn from(key: SpecialKey) -> Self { Event::Special(key) }
}

impl From<MouseEvent> for Event {
    fn from(mouse_event: MouseEvent) -> Self { Event::Mouse(mouse_event) }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Event::Char(' ') => write!(f, "<Space>"),
            Event::Char(ch) => write!(f, "{ch}"),
            Event::Ctrl(' ') => write!(f, "C-<Space>"),
            Event::Ctrl(ch) => write!(f, "C-{ch}"),
            Event::Alt(ch) => write!(f, "M-{ch}"),
            Event::FunctionKey(n) => write!(f, "<F{n}>"),
            Event::Special(key) => write!(f, "{key}"),
            Event::Mouse(mouse_event) => write!(f, "{mouse_event}"),
        }
    }
}

/// Named keys that don't produce a printable character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum_macros::Display, EnumIter)]
pub enum SpecialKey {
    #[strum(to_string = "<Ret>")]
    Return,
    #[strum(to_string = "<Backspace>")]
    Backspace,
    #[strum(to_string = "<Tab>")]
    Tab,
    #[strum(to_string = "<Del>")]
    Delete,
    #[strum(to_string = "<Up>")]
    CursorUp,
    #[strum(to_string = "<Down>")]
    CursorDown,
    #[strum(to_string = "<Left>")]
    CursorLeft,
    #[strum(to_string = "<Right>")]
    CursorRight,
    #[strum(to_string = "<Esc>")]
    Escape,
    #[strum(to_string = "<Home>")]
    Home,
    #[strum(to_string = "<End>")]
    End,
    #[strum(to_string = "<PgUp>")]
    PageUp,
    #[strum(to_string = "<PgDn>")]
    PageDown,
}

/// Mouse buttons, numbered 1..=3 the way xterm reports them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum MouseButton {
    Left,
    Middle,
    Right,
}

impl MouseButton {
    /// The 1-based button number: 1 (left), 2 (middle), 3 (right).
    #[must_use]
    pub fn number(self) -> u8 {
        match self {
            MouseButton::Left => 1,
            MouseButton::Middle => 2,
            MouseButton::Right => 3,
        }
    }
}

/// A mouse button press or release at a terminal cell.
///
/// `x` and `y` are 1-based cell coordinates as reported by the terminal, with `(1, 1)`
/// at the top-left corner. They are signed because the X10 encoding can underflow
/// for malformed reports and the value is passed through unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MouseEvent {
    pub button: MouseButton,
    pub x: i64,
    pub y: i64,
    pub release: bool,
}

impl fmt::Display for MouseEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let action = if self.release { "release" } else { "press" };
        write!(
            f,
            "<{action} {button} at ({x},{y})>",
            button = self.button.number(),
            x = self.x,
            y = self.y
        )
    }
}
