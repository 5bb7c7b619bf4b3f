// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach.
pub mod app;
pub mod cli_arg;
pub mod ui_str;

// Re-export.
pub use app::*;
pub use cli_arg::*;
