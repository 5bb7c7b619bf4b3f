// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Unix/Linux/macOS raw mode using rustix's safe termios API.
//!
//! Unlike a process global "saved settings" slot, the settings to restore are handed
//! back to the caller as a [`RawModeRestoreToken`]. Several descriptors can therefore be
//! switched independently, and restoring is explicit.

use miette::{IntoDiagnostic as _, WrapErr as _};
use rustix::{fd::AsFd,
             termios::{self, OptionalActions, Termios}};

/// Terminal settings captured before switching to raw mode.
#[derive(Debug, Clone)]
pub struct RawModeRestoreToken {
    original: Termios,
}

/// Switch `fd` to raw mode and return the settings needed to undo it.
///
/// Uses [`Termios::make_raw`], which mirrors `cfmakeraw`:
/// - Disables canonical mode (ICANON), echo and signal generation (ISIG)
/// - Sets VMIN=1, VTIME=0 for byte-by-byte reads
///
/// # Errors
///
/// Returns a miette diagnostic if the terminal attributes can't be read or written,
/// most commonly because `fd` isn't a terminal.
pub fn enter_raw_mode(fd: impl AsFd) -> miette::Result<RawModeRestoreToken> {
    let original = termios::tcgetattr(&fd)
        .into_diagnostic()
        .wrap_err("failed to retrieve terminal attributes")?;

    let mut raw = original.clone();
    raw.make_raw();

    termios::tcsetattr(&fd, OptionalActions::Now, &raw)
        .into_diagnostic()
        .wrap_err("failed to set terminal attributes")?;

    tracing::debug!(message = "raw mode entered");

    Ok(RawModeRestoreToken { original })
}

/// Restore the settings captured by [`enter_raw_mode`].
///
/// # Errors
///
/// Returns a miette diagnostic if the terminal attributes can't be set.
pub fn restore_mode(fd: impl AsFd, token: &RawModeRestoreToken) -> miette::Result<()> {
    termios::tcsetattr(&fd, OptionalActions::Now, &token.original)
        .into_diagnostic()
        .wrap_err("failed to restore terminal attributes")?;

    tracing::debug!(message = "terminal mode restored");

    Ok(())
}

/// Whether `fd` refers to a terminal.
pub fn is_terminal(fd: impl AsFd) -> bool { termios::isatty(fd) }

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;

    #[test]
    fn test_dev_null_is_not_a_terminal() {
        let dev_null = File::open("/dev/null").unwrap();
        assert!(!is_terminal(&dev_null));
    }

    #[test]
    fn test_enter_raw_mode_fails_on_non_terminal() {
        let dev_null = File::open("/dev/null").unwrap();
        let report = enter_raw_mode(&dev_null).unwrap_err();
        assert_eq!(report.to_string(), "failed to retrieve terminal attributes");
        assert!(report.chain().count() > 1, "the errno is kept as the cause");
    }
}
