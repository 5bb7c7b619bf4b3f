// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use super::QueryError;
use std::io::{Read, Write};

/// Write `query` to `output`, read a single reply chunk of at most `response_limit`
/// bytes from `input`, and hand exactly the bytes read to `parse_reply`.
///
/// Only one `read()` is issued, so a reply split across two reads is rejected by the
/// parser rather than waited for.
pub(crate) fn exec_query<T>(
    input: &mut impl Read,
    output: &mut impl Write,
    query: &str,
    response_limit: usize,
    parse_reply: impl FnOnce(&[u8]) -> Result<T, QueryError>,
) -> Result<T, QueryError> {
    output.write_all(query.as_bytes())?;
    output.flush()?;

    let mut reply = vec![0_u8; response_limit];
    let bytes_read = input.read(&mut reply)?;
    let reply = &reply[..bytes_read];

    tracing::trace!(message = "terminal query reply", query = ?query, bytes_read);

    parse_reply(reply)
}
