// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Output-side escape sequence constants: introducers, DEC private modes, and the
//! fixed sequences an interactive session writes to switch those modes on and off.
//!
//! Everything here is assembled at compile time with [`const_format::concatcp`], so
//! each constant is a plain `&'static str` ready to be written to the terminal.

use const_format::concatcp;

// ==================== Introducers ====================

/// The escape character.
pub const ESC: &str = "\x1b";

/// Control Sequence Introducer (`ESC [`).
pub const CSI: &str = concatcp!(ESC, "[");

/// Operating System Command (`ESC ]`).
pub const OSC: &str = concatcp!(ESC, "]");

/// String terminator (`ESC \`), ends OSC sequences.
pub const STRING_TERMINATOR: &str = concatcp!(ESC, "\\");

/// BEL, accepted by most terminals as an alternative OSC terminator.
pub const BEL: &str = "\x07";

/// Reset all terminal attributes to their defaults.
pub const RESET_TERMINAL: &str = concatcp!(ESC, "c");

// ==================== SGR ====================

/// Final byte of Select Graphic Rendition sequences (`CSI params m`).
pub const SGR_TERMINATOR: u8 = b'm';

/// Resets all text attributes (color, bold, italic, etc.) to default.
pub const SGR_RESET: &str = concatcp!(CSI, "0m");

// ==================== DEC private modes ====================

/// Cursor Keys Mode (DECCKM). When set, cursor keys send `SS3` sequences
/// (application mode) instead of `CSI` sequences (normal mode).
pub const DECCKM_CURSOR_KEYS: u16 = 1;

/// Text cursor visibility (DECTCEM).
pub const DECTCEM_SHOW_CURSOR: u16 = 25;

/// Report button presses and releases (X10 compatible mouse tracking).
pub const MOUSE_TRACKING_MODE: u16 = 1000;

/// Report motion while a button is held.
pub const MOUSE_BUTTON_EVENT_MODE: u16 = 1002;

/// Encode mouse reports in SGR notation (`CSI < b ; x ; y M/m`).
pub const SGR_MOUSE_MODE: u16 = 1006;

/// Alternate screen buffer with saved cursor.
pub const ALTERNATE_SCREEN_BUFFER: u16 = 1049;

// ==================== Mode switches ====================

/// Switch to a fresh alternate screen buffer. No scrollback exists there, so scroll
/// keys (PgUp, PgDn, Home, End) reach the application.
pub const USE_ALTERNATE_SCREEN_BUFFER: &str = concatcp!(CSI, "?", ALTERNATE_SCREEN_BUFFER, "h");

/// Return to the main screen buffer.
pub const USE_MAIN_SCREEN_BUFFER: &str = concatcp!(CSI, "?", ALTERNATE_SCREEN_BUFFER, "l");

/// Cursor keys send `SS3` sequences.
pub const ENABLE_APPLICATION_MODE: &str = concatcp!(CSI, "?", DECCKM_CURSOR_KEYS, "h");

/// Cursor keys send `CSI` sequences.
pub const DISABLE_APPLICATION_MODE: &str = concatcp!(CSI, "?", DECCKM_CURSOR_KEYS, "l");

pub const ENABLE_MOUSE_TRACKING: &str = concatcp!(CSI, "?", MOUSE_TRACKING_MODE, "h");
pub const DISABLE_MOUSE_TRACKING: &str = concatcp!(CSI, "?", MOUSE_TRACKING_MODE, "l");

pub const ENABLE_MOUSE_BUTTON_EVENT: &str = concatcp!(CSI, "?", MOUSE_BUTTON_EVENT_MODE, "h");
pub const DISABLE_MOUSE_BUTTON_EVENT: &str = concatcp!(CSI, "?", MOUSE_BUTTON_EVENT_MODE, "l");

pub const ENABLE_MOUSE_SGR_ENCODING: &str = concatcp!(CSI, "?", SGR_MOUSE_MODE, "h");
pub const DISABLE_MOUSE_SGR_ENCODING: &str = concatcp!(CSI, "?", SGR_MOUSE_MODE, "l");

// ==================== Cursor & screen ====================

pub const CURSOR_HIDE: &str = concatcp!(CSI, "?", DECTCEM_SHOW_CURSOR, "l");
pub const CURSOR_SHOW: &str = concatcp!(CSI, "?", DECTCEM_SHOW_CURSOR, "h");
pub const CURSOR_SAVE: &str = concatcp!(CSI, "s");
pub const CURSOR_RESTORE: &str = concatcp!(CSI, "u");

/// Clear the whole screen.
pub const CLEAR_SCREEN: &str = concatcp!(CSI, "2J");

/// Clear the current line.
pub const CLEAR_LINE: &str = concatcp!(CSI, "2K");

/// Clear from the cursor to the end of the screen.
pub const CLEAR_AFTER_CURSOR: &str = concatcp!(CSI, "J");

/// Clear from the start of the screen to the cursor.
pub const CLEAR_BEFORE_CURSOR: &str = concatcp!(CSI, "1J");

/// Clear from the cursor to the end of the line.
pub const CLEAR_UNTIL_NEWLINE: &str = concatcp!(CSI, "K");
