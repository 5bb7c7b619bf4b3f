// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Connect to source file.
pub mod ansi;
pub mod input_device;
pub mod log;

// Re-export.
pub use ansi::*;
pub use input_device::*;
pub use log::*;
