// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use tracing_core::LevelFilter;

/// Configure the tracing logging to suit your needs. You can display the logs to a:
/// 1. file,
/// 2. stdout or stderr,
/// 3. both.
///
/// Use [`crate::try_initialize_logging_global`] or
/// [`crate::try_initialize_logging_thread_local`] to install it. Both take anything
/// that converts into a [`TracingConfig`], see [`mod@crate::tracing_config_options`].
#[derive(Debug, Clone, PartialEq)]
pub struct TracingConfig {
    pub level_filter: LevelFilter,
    pub writer_config: WriterConfig,
}

/// Where log output goes. The `String` is the path of the log file, e.g.
/// `/tmp/keypress.log` or `keypress.log`.
#[derive(Debug, Clone, PartialEq)]
pub enum WriterConfig {
    None,
    Display(DisplayPreference),
    File(String),
    DisplayAndFile(DisplayPreference, String),
}

/// Which stream to use for display output. While the terminal is in raw mode, prefer
/// [`WriterConfig::File`] since display output interleaves with the application's.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayPreference {
    Stdout,
    Stderr,
}

impl TracingConfig {
    #[must_use]
    pub fn get_level_filter(&self) -> LevelFilter { self.level_filter }

    #[must_use]
    pub fn get_writer_config(&self) -> WriterConfig { self.writer_config.clone() }
}
