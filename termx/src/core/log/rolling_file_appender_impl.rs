// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::path::Path;

/// Create a file appender that never rolls over.
///
/// Note that wrapping this in a non blocking writer loses output when the process
/// exits without flushing, so it is used as is:
///
/// ```ignore
/// tracing_appender::non_blocking(try_create("keypress.log")?);
/// ```
///
/// # Errors
///
/// Returns a miette diagnostic if `path_str` has no file name component, or if the
/// file can't be created.
pub fn try_create(path_str: &str) -> miette::Result<tracing_appender::rolling::RollingFileAppender> {
    let path = Path::new(path_str);

    let parent = path.parent().ok_or_else(|| {
        miette::miette!(
            "Can't access current folder {}. It might not exist, or don't have required permissions.",
            path.display()
        )
    })?;

    let file_name = path.file_name().ok_or_else(|| {
        miette::miette!(
            "Can't access file name {}. It might not exist, or don't have required permissions.",
            path.display()
        )
    })?;

    tracing_appender::rolling::RollingFileAppender::builder()
        .rotation(tracing_appender::rolling::Rotation::NEVER)
        .filename_prefix(file_name.to_string_lossy())
        .build(parent)
        .map_err(|e| miette::miette!("failed to create log file {}: {e}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_path_without_file_name() {
        assert!(try_create("/").is_err());
        assert!(try_create("logs/..").is_err());
    }
}
