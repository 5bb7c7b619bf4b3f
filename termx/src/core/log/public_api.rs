// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use super::{DisplayPreference, TracingConfig, WriterConfig};
use tracing::dispatcher;

/// Instead of taking several arguments, [`try_initialize_logging_global`] and
/// [`try_initialize_logging_thread_local`] take anything that implements
/// [`Into<TracingConfig>`]. Configs compose with `+`:
///
/// ```no_run
/// use termx::{DisplayPreference, TracingConfig, WriterConfig,
///             try_initialize_logging_global};
///
/// let level_filter = tracing_core::LevelFilter::DEBUG;
/// let config_1: TracingConfig = level_filter.into();
///
/// let writer_config = WriterConfig::File("keypress.log".to_string());
/// let config_2: TracingConfig = writer_config.into();
///
/// let config_3: TracingConfig = DisplayPreference::Stderr.into();
///
/// try_initialize_logging_global(config_1 + config_2 + config_3).ok();
/// ```
pub mod tracing_config_options {
    use super::{DisplayPreference, TracingConfig, WriterConfig};
    use std::ops::Add;

    pub const DEFAULT_LOG_FILE_NAME: &str = "keypress.log";

    impl From<tracing::Level> for TracingConfig {
        fn from(level: tracing::Level) -> Self {
            Self {
                level_filter: level.into(),
                writer_config: WriterConfig::File(DEFAULT_LOG_FILE_NAME.to_string()),
            }
        }
    }

    impl From<tracing_core::LevelFilter> for TracingConfig {
        fn from(level_filter: tracing_core::LevelFilter) -> Self {
            Self {
                level_filter,
                writer_config: WriterConfig::File(DEFAULT_LOG_FILE_NAME.to_string()),
            }
        }
    }

    impl From<DisplayPreference> for TracingConfig {
        fn from(preferred_display: DisplayPreference) -> Self {
            Self {
                level_filter: tracing_core::LevelFilter::DEBUG,
                writer_config: WriterConfig::Display(preferred_display),
            }
        }
    }

    impl From<WriterConfig> for TracingConfig {
        fn from(writer_config: WriterConfig) -> Self {
            Self {
                level_filter: tracing_core::LevelFilter::DEBUG,
                writer_config,
            }
        }
    }

    /// The more verbose level wins; writer configs merge as below.
    impl Add<TracingConfig> for TracingConfig {
        type Output = Self;

        fn add(self, rhs: Self) -> Self::Output {
            Self {
                level_filter: self.level_filter.max(rhs.level_filter),
                writer_config: self.writer_config + rhs.writer_config,
            }
        }
    }

    /// Merge two [`WriterConfig`]s. On a collision the `rhs` wins, since it is the more
    /// specific value:
    /// - `Display(a) + File(f) = DisplayAndFile(a, f)`.
    /// - `File(f) + File(g) = File(g)`.
    /// - `x + None = x`.
    impl Add<WriterConfig> for WriterConfig {
        type Output = Self;

        fn add(self, rhs: WriterConfig) -> Self::Output {
            use WriterConfig::{Display, DisplayAndFile, File, None};

            match (self, rhs) {
                (None, rhs) => rhs,
                (lhs, None) => lhs,
                (Display(dp), File(f)) | (File(f), Display(dp)) => DisplayAndFile(dp, f),
                (Display(_), Display(dp)) => Display(dp),
                (File(_), File(f)) => File(f),
                (Display(_) | File(_), DisplayAndFile(dp, f))
                | (DisplayAndFile(_, _), DisplayAndFile(dp, f)) => DisplayAndFile(dp, f),
                (DisplayAndFile(_, f), Display(dp)) => DisplayAndFile(dp, f),
                (DisplayAndFile(dp, _), File(f)) => DisplayAndFile(dp, f),
            }
        }
    }

    #[cfg(test)]
    mod tests_add_configs {
        use super::*;
        use pretty_assertions::assert_eq;
        use tracing_core::LevelFilter;

        #[test]
        fn test_add_writer_configs() {
            let stdout = DisplayPreference::Stdout;
            let stderr = DisplayPreference::Stderr;
            let file = || WriterConfig::File("a.log".to_string());
            let other_file = || WriterConfig::File("b.log".to_string());

            assert_eq!(WriterConfig::None + WriterConfig::None, WriterConfig::None);
            assert_eq!(WriterConfig::None + file(), file());
            assert_eq!(file() + WriterConfig::None, file());
            assert_eq!(file() + other_file(), other_file());
            assert_eq!(
                WriterConfig::Display(stdout) + WriterConfig::Display(stderr),
                WriterConfig::Display(stderr)
            );
            assert_eq!(
                WriterConfig::Display(stdout) + file(),
                WriterConfig::DisplayAndFile(stdout, "a.log".to_string())
            );
            assert_eq!(
                file() + WriterConfig::Display(stderr),
                WriterConfig::DisplayAndFile(stderr, "a.log".to_string())
            );
            assert_eq!(
                WriterConfig::DisplayAndFile(stdout, "a.log".to_string()) + other_file(),
                WriterConfig::DisplayAndFile(stdout, "b.log".to_string())
            );
            assert_eq!(
                WriterConfig::DisplayAndFile(stdout, "a.log".to_string())
                    + WriterConfig::Display(stderr),
                WriterConfig::DisplayAndFile(stderr, "a.log".to_string())
            );
        }

        #[test]
        fn test_add_tracing_configs_keeps_most_verbose_level() {
            let config: TracingConfig = LevelFilter::WARN.into();
            let config = config + TracingConfig::from(tracing::Level::TRACE);
            assert_eq!(config.level_filter, LevelFilter::TRACE);
            assert_eq!(
                config.writer_config,
                WriterConfig::File(DEFAULT_LOG_FILE_NAME.to_string())
            );
        }
    }
}

/// Global default subscriber, used by all threads.
///
/// Logging is **DISABLED** by **default**. Unless the level filter is something other
/// than [`tracing_core::LevelFilter::OFF`], this does nothing and the `tracing` macros
/// used throughout the crate produce no output.
///
/// # Errors
///
/// Returns a miette diagnostic if the log file can't be created or a global subscriber
/// is already set.
pub fn try_initialize_logging_global(options: impl Into<TracingConfig>) -> miette::Result<()> {
    let it: TracingConfig = options.into();

    if it.get_level_filter() == tracing_core::LevelFilter::OFF {
        return Ok(());
    }

    it.install_global()
}

/// Thread local subscriber, active until the returned guard is dropped. This is great
/// for tests.
///
/// Returns `Ok(None)` if the level filter is [`tracing_core::LevelFilter::OFF`].
///
/// # Errors
///
/// Returns a miette diagnostic if the log file can't be created.
pub fn try_initialize_logging_thread_local(
    options: impl Into<TracingConfig>,
) -> miette::Result<Option<dispatcher::DefaultGuard>> {
    let it: TracingConfig = options.into();

    if it.get_level_filter() == tracing_core::LevelFilter::OFF {
        return Ok(None);
    }

    it.install_thread_local().map(Some)
}
