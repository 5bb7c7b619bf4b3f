// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use clap::{Parser, ValueEnum};
use termx::{TracingConfig, WriterConfig, tracing_config_options::DEFAULT_LOG_FILE_NAME};
use tracing_core::LevelFilter;

#[derive(Debug, Parser)]
#[command(bin_name = "keypress")]
#[command(about = "⌨️ Print the decoded form of every key press and mouse event")]
#[command(version)]
#[command(next_line_help = true)]
/// More info:
/// - <https://docs.rs/clap/latest/clap/_derive/#overview>
pub struct CLIArg {
    #[arg(long, help = "Switch to the alternate screen buffer while running")]
    pub alt_buffer: bool,

    #[arg(
        long,
        help = "Enable application cursor keys, so that arrows, Home and End send SS3 sequences"
    )]
    pub app_mode: bool,

    #[arg(long, help = "Enable mouse tracking with SGR encoding")]
    pub mouse: bool,

    #[arg(long, short = 'l', help = "Log app output to a file for debugging")]
    pub enable_logging: bool,

    #[arg(long, default_value = DEFAULT_LOG_FILE_NAME, help = "Path of the log file")]
    pub log_file: String,

    #[arg(long, value_enum, default_value_t = LogLevel::Debug, help = "Most verbose level to log")]
    pub log_level: LogLevel,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(log_level: LogLevel) -> Self {
        match log_level {
            LogLevel::Error => LevelFilter::ERROR,
            LogLevel::Warn => LevelFilter::WARN,
            LogLevel::Info => LevelFilter::INFO,
            LogLevel::Debug => LevelFilter::DEBUG,
            LogLevel::Trace => LevelFilter::TRACE,
        }
    }
}

impl CLIArg {
    /// Logging is off unless `--enable-logging` is passed. It only ever goes to a file,
    /// since the terminal is busy showing events.
    #[must_use]
    pub fn tracing_config(&self) -> TracingConfig {
        if !self.enable_logging {
            return LevelFilter::OFF.into();
        }

        TracingConfig {
            level_filter: self.log_level.into(),
            writer_config: WriterConfig::File(self.log_file.clone()),
        }
    }
}
