// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Windows raw mode using Crossterm, plus virtual terminal input.
//!
//! [`crossterm::terminal::enable_raw_mode()`] clears `ENABLE_LINE_INPUT`,
//! `ENABLE_ECHO_INPUT` and `ENABLE_PROCESSED_INPUT` on the console. It does not turn on
//! `ENABLE_VIRTUAL_TERMINAL_INPUT`, without which the console never delivers the escape
//! sequences the decoder expects, so that flag is set here on the given handle.
//!
//! The console mode of the handle is saved in the [`RawModeRestoreToken`] and written
//! back verbatim on restore.

use miette::{IntoDiagnostic as _, WrapErr as _};
use std::{io::IsTerminal as _,
          os::windows::io::{AsHandle, AsRawHandle as _, BorrowedHandle}};
use windows_sys::Win32::System::Console::{CONSOLE_MODE, ENABLE_VIRTUAL_TERMINAL_INPUT,
                                          GetConsoleMode, SetConsoleMode};

/// Console mode captured before switching to raw mode.
#[derive(Debug, Clone)]
pub struct RawModeRestoreToken {
    original: CONSOLE_MODE,
}

/// Switch the console behind `handle` to raw mode with virtual terminal input.
///
/// # Errors
///
/// Returns a miette diagnostic if `handle` isn't a console, or the console mode can't
/// be changed.
pub fn enter_raw_mode(handle: impl AsHandle) -> miette::Result<RawModeRestoreToken> {
    let handle = handle.as_handle();

    let original = get_console_mode(handle).wrap_err("failed to retrieve console mode")?;

    crossterm::terminal::enable_raw_mode()
        .into_diagnostic()
        .wrap_err("failed to enable raw mode")?;

    let raw = get_console_mode(handle).wrap_err("failed to retrieve console mode")?;
    set_console_mode(handle, raw | ENABLE_VIRTUAL_TERMINAL_INPUT)
        .wrap_err("failed to enable virtual terminal input")?;

    tracing::debug!(message = "raw mode entered", original_mode = original);

    Ok(RawModeRestoreToken { original })
}

/// Restore the console mode captured by [`enter_raw_mode`].
///
/// # Errors
///
/// Returns a miette diagnostic if the console mode can't be set.
pub fn restore_mode(handle: impl AsHandle, token: &RawModeRestoreToken) -> miette::Result<()> {
    crossterm::terminal::disable_raw_mode()
        .into_diagnostic()
        .wrap_err("failed to disable raw mode")?;

    set_console_mode(handle.as_handle(), token.original)
        .wrap_err("failed to restore console mode")?;

    tracing::debug!(message = "terminal mode restored");

    Ok(())
}

/// Whether `handle` refers to a console.
pub fn is_terminal(handle: impl AsHandle) -> bool { handle.as_handle().is_terminal() }

fn get_console_mode(handle: BorrowedHandle<'_>) -> miette::Result<CONSOLE_MODE> {
    let mut mode: CONSOLE_MODE = 0;
    // SAFETY: `handle` is borrowed for the duration of the call and `mode` is a valid
    // out pointer.
    let ok = unsafe { GetConsoleMode(handle.as_raw_handle(), &mut mode) };
    if ok == 0 {
        return Err(std::io::Error::last_os_error()).into_diagnostic();
    }
    Ok(mode)
}

fn set_console_mode(handle: BorrowedHandle<'_>, mode: CONSOLE_MODE) -> miette::Result<()> {
    // SAFETY: `handle` is borrowed for the duration of the call.
    let ok = unsafe { SetConsoleMode(handle.as_raw_handle(), mode) };
    if ok == 0 {
        return Err(std::io::Error::last_os_error()).into_diagnostic();
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;

    fn scratch_file(name: &str) -> File {
        File::create(std::env::temp_dir().join(name)).unwrap()
    }

    #[test]
    fn test_regular_file_is_not_a_terminal() {
        let file = scratch_file("termx_raw_mode_is_terminal.tmp");
        assert!(!is_terminal(&file));
    }

    #[test]
    fn test_enter_raw_mode_fails_on_non_console() {
        let file = scratch_file("termx_raw_mode_enter.tmp");
        let report = enter_raw_mode(&file).unwrap_err();
        assert_eq!(report.to_string(), "failed to retrieve console mode");
    }
}
