// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{InputBytes, fmt_hex};

/// Errors from a single request/response exchange with the terminal.
#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum QueryError {
    #[error("failed to exchange the query with the terminal")]
    #[diagnostic(code(termx::query::io))]
    Io(#[from] std::io::Error),

    #[error("invalid terminal response ({reason}): [{}]", fmt_hex(.bytes))]
    #[diagnostic(
        code(termx::query::invalid_response),
        help(
            "The terminal may not support this query, or a key press arrived before \
             the reply. Make sure the terminal is in raw mode."
        )
    )]
    InvalidResponse {
        bytes: InputBytes,
        reason: &'static str,
    },
}

impl QueryError {
    pub(crate) fn invalid_response(bytes: &[u8], reason: &'static str) -> Self {
        QueryError::InvalidResponse { bytes: InputBytes::from_slice(bytes), reason }
    }
}
