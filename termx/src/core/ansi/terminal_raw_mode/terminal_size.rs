// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use super::AsTerminalHandle;
use miette::{IntoDiagnostic as _, WrapErr as _};
use std::fmt;

/// Terminal size in cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct TerminalSize {
    /// Columns.
    pub width: u16,
    /// Rows.
    pub height: u16,
}

impl fmt::Display for TerminalSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Query the window size of the terminal behind `handle`.
///
/// On Windows the size always comes from the process console, via
/// [`crossterm::terminal::size()`], and `handle` is only checked to be a console.
///
/// # Errors
///
/// Returns a miette diagnostic if `handle` isn't a terminal or the size is reported
/// as zero (e.g. a pty that was never sized).
pub fn query_size(handle: impl AsTerminalHandle) -> miette::Result<TerminalSize> {
    let (width, height) = window_size(handle).wrap_err("failed to query terminal size")?;

    match (width, height) {
        (0, _) | (_, 0) => miette::bail!("terminal reported an empty window size"),
        (width, height) => Ok(TerminalSize { width, height }),
    }
}

#[cfg(unix)]
fn window_size(fd: impl AsTerminalHandle) -> miette::Result<(u16, u16)> {
    let winsize = rustix::termios::tcgetwinsize(fd).into_diagnostic()?;
    Ok((winsize.ws_col, winsize.ws_row))
}

#[cfg(windows)]
fn window_size(handle: impl AsTerminalHandle) -> miette::Result<(u16, u16)> {
    if !super::is_terminal(handle) {
        miette::bail!("handle is not a console");
    }
    crossterm::terminal::size().into_diagnostic()
}
