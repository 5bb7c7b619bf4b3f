// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Byte and string constants shared by the input decoder and the output generators.

// Attach.
pub mod generic;
pub mod input_sequences;

// Re-export.
pub use generic::*;
pub use input_sequences::*;
