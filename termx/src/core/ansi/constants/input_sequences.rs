// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Byte values that make up the keyboard and mouse input sequences recognized by
//! the [decoder].
//!
//! # Recognized wire grammar (hex)
//!
//! | Kind                 | Bytes                                     |
//! |:---------------------|:------------------------------------------|
//! | Control bytes        | `00`, `09`, `0D`, `1B`, `7F`, `01`..`1A`  |
//! | CSI cursor keys      | `1B 5B {41,42,43,44,46,48}`               |
//! | SS3 cursor/F keys    | `1B 4F {41,42,43,44,46,48,50,51,52,53}`   |
//! | Extended keys        | `1B 5B {33,35,36} 7E`                     |
//! | X10 mouse            | `1B 5B 4D <flags+32> <x+32> <y+32>`       |
//! | SGR mouse            | `1B 5B 3C <flags>;<x>;<y>{4D,6D}`         |
//!
//! [decoder]: crate::decode_input_event

// ==================== ANSI Sequence Components ====================

/// ESC byte (27 in decimal, 0x1B in hex).
pub const ANSI_ESC: u8 = 0x1B;

/// CSI bracket byte: `[` (0x5B). Second byte of `CSI` sequences (normal mode).
pub const ANSI_CSI_BRACKET: u8 = 0x5B;

/// SS3 'O' byte (0x4F). Second byte of `SS3` sequences (application mode).
pub const ANSI_SS3_O: u8 = b'O';

/// Parameter separator byte: `;` (0x3B).
pub const ANSI_PARAM_SEPARATOR: u8 = b';';

/// Extended key terminator: `~` (0x7E).
pub const ANSI_FUNCTION_KEY_TERMINATOR: u8 = b'~';

// ==================== Single byte keys ====================

/// NUL, sent for Ctrl+Space.
pub const CONTROL_NUL: u8 = 0x00;

/// Horizontal tab.
pub const CONTROL_TAB: u8 = 0x09;

/// Carriage return, sent for the Return key in raw mode.
pub const CONTROL_RETURN: u8 = 0x0D;

/// DEL, sent by most terminals for the Backspace key.
pub const CONTROL_DEL: u8 = 0x7F;

/// Ctrl+A. Bytes `0x01..=0x1A` map to Ctrl+a .. Ctrl+z.
pub const CONTROL_CTRL_A: u8 = 0x01;

/// Ctrl+Z.
pub const CONTROL_CTRL_Z: u8 = 0x1A;

// ==================== Cursor Keys (CSI / SS3 final byte) ====================

/// Up arrow final byte.
pub const ARROW_UP_FINAL: u8 = b'A';

/// Down arrow final byte.
pub const ARROW_DOWN_FINAL: u8 = b'B';

/// Right arrow final byte.
pub const ARROW_RIGHT_FINAL: u8 = b'C';

/// Left arrow final byte.
pub const ARROW_LEFT_FINAL: u8 = b'D';

/// Home final byte.
pub const SPECIAL_HOME_FINAL: u8 = b'H';

/// End final byte.
pub const SPECIAL_END_FINAL: u8 = b'F';

// ==================== Function Keys (SS3 final byte) ====================

/// `SS3 P`: F1. `Q`, `R`, `S` follow for F2..F4.
pub const SS3_F1_FINAL: u8 = b'P';

/// `SS3 S`: F4.
pub const SS3_F4_FINAL: u8 = b'S';

/// Subtracting this from an `SS3` function key final byte yields the key number.
pub const SS3_FUNCTION_KEY_BASE: u8 = SS3_F1_FINAL - 1;

// ==================== Extended Keys (CSI n ~) ====================

/// `CSI 3 ~`: Delete.
pub const SPECIAL_DELETE_CODE: u8 = b'3';

/// `CSI 5 ~`: Page Up.
pub const SPECIAL_PAGE_UP_CODE: u8 = b'5';

/// `CSI 6 ~`: Page Down.
pub const SPECIAL_PAGE_DOWN_CODE: u8 = b'6';

// ==================== Mouse ====================

/// `CSI M`: third byte of an X10 mouse report.
pub const MOUSE_X10_MARKER: u8 = b'M';

/// Total length of an X10 mouse report.
pub const MOUSE_X10_SEQUENCE_LEN: usize = 6;

/// Each X10 payload byte carries its value plus this offset.
pub const MOUSE_X10_BYTE_OFFSET: i64 = 32;

/// `CSI <`: third byte of an SGR mouse report.
pub const MOUSE_SGR_MARKER: u8 = b'<';

/// SGR terminator for a button press.
pub const MOUSE_SGR_PRESS: u8 = b'M';

/// SGR terminator for a button release.
pub const MOUSE_SGR_RELEASE: u8 = b'm';

/// Mask selecting the button bits from the mouse flags.
pub const MOUSE_BUTTON_BITS_MASK: i64 = 0b0000_0011;

/// Button bits value that X10 uses to signal "released".
pub const MOUSE_X10_RELEASE_BITS: i64 = 0b0000_0011;
