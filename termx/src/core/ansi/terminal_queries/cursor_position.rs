// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Cursor position report (CPR). The query `CSI 6 n` is answered with
//! `CSI row ; col R`, where both coordinates are 1-based.

use super::{QueryError, exec_query::exec_query};
use crate::CSI;
use const_format::concatcp;
use std::io::{Read, Write};

/// Device Status Report asking for the cursor position.
pub const QUERY_CURSOR_POSITION: &str = concatcp!(CSI, "6n");

const CURSOR_POSITION_REPLY_LIMIT: usize = 64;

/// 1-based cursor position, `(1, 1)` being the top-left cell.
///
/// Coordinates are taken from the reply as signed 64-bit integers without range
/// checks, so a misbehaving terminal's values are passed through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CursorPosition {
    /// Column.
    pub x: i64,
    /// Row.
    pub y: i64,
}

/// Ask the terminal where the cursor is.
///
/// The terminal must be in raw mode, otherwise the reply is held back by the line
/// discipline until the user presses Return.
///
/// # Errors
///
/// [`QueryError::Io`] if writing the query or reading the reply fails, and
/// [`QueryError::InvalidResponse`] if the reply isn't a cursor position report.
pub fn query_cursor_position(
    input: &mut impl Read,
    output: &mut impl Write,
) -> Result<CursorPosition, QueryError> {
    exec_query(
        input,
        output,
        QUERY_CURSOR_POSITION,
        CURSOR_POSITION_REPLY_LIMIT,
        parse_cursor_position_reply,
    )
}

/// Parse `CSI row ; col R`. Some terminals use `:` as the separator.
///
/// # Errors
///
/// [`QueryError::InvalidResponse`] for anything that isn't a complete report.
pub fn parse_cursor_position_reply(reply: &[u8]) -> Result<CursorPosition, QueryError> {
    let body = reply
        .strip_prefix(CSI.as_bytes())
        .and_then(|rest| rest.strip_suffix(b"R"))
        .filter(|_| reply.len() >= 6)
        .ok_or_else(|| QueryError::invalid_response(reply, "expected CSI row ; col R"))?;

    let split = body
        .iter()
        .position(|byte| *byte == b';' || *byte == b':')
        .filter(|index| *index > 0)
        .ok_or_else(|| QueryError::invalid_response(reply, "missing row/column separator"))?;

    let parse_coordinate = |digits: &[u8]| -> Result<i64, QueryError> {
        std::str::from_utf8(digits)
            .ok()
            .and_then(|text| text.parse::<i64>().ok())
            .ok_or_else(|| QueryError::invalid_response(reply, "coordinate is not a number"))
    };

    Ok(CursorPosition {
        y: parse_coordinate(&body[..split])?,
        x: parse_coordinate(&body[split + 1..])?,
    })
}
