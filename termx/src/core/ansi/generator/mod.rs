// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Write-side sequence builders and SGR styling. Nothing in the input path depends on these.

// Attach.
mod csi_sequences;
mod sgr_sequences;

// Re-export.
pub use csi_sequences::*;
pub use sgr_sequences::*;
