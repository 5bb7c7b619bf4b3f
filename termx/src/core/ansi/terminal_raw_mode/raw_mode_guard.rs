// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use super::{RawModeRestoreToken, enter_raw_mode, restore_mode};

/// The handle type raw mode is switched on: a file descriptor on unix, a console
/// handle on Windows.
#[cfg(unix)]
pub use rustix::fd::AsFd as AsTerminalHandle;
#[cfg(windows)]
pub use std::os::windows::io::AsHandle as AsTerminalHandle;

/// Keeps a terminal in raw mode for as long as the guard lives.
///
/// ```no_run
/// # fn main() -> miette::Result<()> {
/// let stdin = std::io::stdin();
/// let guard = termx::RawModeGuard::new(&stdin)?;
/// // ... read input ...
/// guard.restore()?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct RawModeGuard<F: AsTerminalHandle> {
    handle: F,
    token: Option<RawModeRestoreToken>,
}

impl<F: AsTerminalHandle> RawModeGuard<F> {
    /// Switch `handle` to raw mode.
    ///
    /// # Errors
    ///
    /// See [`enter_raw_mode`].
    pub fn new(handle: F) -> miette::Result<Self> {
        let token = enter_raw_mode(&handle)?;
        Ok(Self { handle, token: Some(token) })
    }

    #[must_use]
    pub fn handle(&self) -> &F { &self.handle }

    /// Restore now and report failures, instead of logging them on drop. Calling it
    /// again is a no-op.
    ///
    /// # Errors
    ///
    /// See [`restore_mode`].
    pub fn restore(mut self) -> miette::Result<()> { self.restore_in_place() }

    fn restore_in_place(&mut self) -> miette::Result<()> {
        match self.token.take() {
            Some(token) => restore_mode(&self.handle, &token),
            None => Ok(()),
        }
    }
}

impl<F: AsTerminalHandle> Drop for RawModeGuard<F> {
    fn drop(&mut self) {
        if let Err(report) = self.restore_in_place() {
            tracing::warn!(message = "failed to restore terminal mode on drop", error = %report);
        }
    }
}
