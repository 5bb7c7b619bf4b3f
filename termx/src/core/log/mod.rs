// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Logging setup on top of `tracing-subscriber`. The crate itself only emits `tracing`
//! events; nothing is printed until a subscriber is installed with
//! [`try_initialize_logging_global`] or [`try_initialize_logging_thread_local`].

// Attach.
mod public_api;
mod rolling_file_appender_impl;
mod tracing_config;
mod tracing_init;

// Re-export.
pub use public_api::*;
pub use tracing_config::*;
pub use tracing_init::*;
