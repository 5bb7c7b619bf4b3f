// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Protocol conformance tests using hardcoded byte sequences.
//!
//! Every sequence here is a literal as emitted by real terminals (xterm, Alacritty,
//! GNOME Terminal) rather than built with the [`generator`] helpers, so a bug in the
//! generator can't hide a matching bug in the decoder.
//!
//! [`generator`]: crate::core::ansi::generator
