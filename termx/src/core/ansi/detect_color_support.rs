// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::env;

/// Environment variable through which terminals advertise their color depth.
pub const COLORTERM_ENV_VAR: &str = "COLORTERM";

/// Whether the environment advertises 24 bit color, i.e. `COLORTERM=truecolor`.
///
/// Only the environment is examined, the terminal itself isn't queried. Use it to
/// choose between [`Sgr::fg_truecolor`] and [`Sgr::fg_ansi256`].
///
/// [`Sgr::fg_truecolor`]: crate::Sgr::fg_truecolor
/// [`Sgr::fg_ansi256`]: crate::Sgr::fg_ansi256
#[must_use]
pub fn is_truecolor_supported() -> bool {
    env::var(COLORTERM_ENV_VAR).is_ok_and(|v| v == "truecolor")
}
