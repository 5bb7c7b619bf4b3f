// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Background color query (`OSC 11`). The reply has the form
//! `OSC 11 ; rgb:RRRR/GGGG/BBBB ST`, with `BEL` accepted in place of `ST`.

use super::{QueryError, exec_query::exec_query};
use crate::{BEL, OSC, STRING_TERMINATOR};
use const_format::concatcp;
use std::{fmt,
          io::{Read, Write}};

/// Ask for the current background color.
pub const QUERY_BACKGROUND_COLOR: &str = concatcp!(OSC, "11;?", STRING_TERMINATOR);

const BACKGROUND_COLOR_REPLY_LIMIT: usize = 128;
const RGB_PREFIX: &str = "rgb:";

/// A color with 16 bits per component, as reported by xterm compatible terminals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb16 {
    pub red: u16,
    pub green: u16,
    pub blue: u16,
}

impl fmt::Display for Rgb16 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb:{:04x}/{:04x}/{:04x}", self.red, self.green, self.blue)
    }
}

/// Ask the terminal for its background color.
///
/// # Errors
///
/// [`QueryError::Io`] if writing the query or reading the reply fails, and
/// [`QueryError::InvalidResponse`] if the reply isn't a color report.
pub fn query_background_color(
    input: &mut impl Read,
    output: &mut impl Write,
) -> Result<Rgb16, QueryError> {
    exec_query(
        input,
        output,
        QUERY_BACKGROUND_COLOR,
        BACKGROUND_COLOR_REPLY_LIMIT,
        parse_background_color_reply,
    )
}

/// Parse `OSC 11 ; rgb:RRRR/GGGG/BBBB` terminated by `ST` or `BEL`.
///
/// # Errors
///
/// [`QueryError::InvalidResponse`] for anything that isn't a complete color report.
pub fn parse_background_color_reply(reply: &[u8]) -> Result<Rgb16, QueryError> {
    let invalid = |reason| QueryError::invalid_response(reply, reason);

    let terminated = reply
        .strip_suffix(STRING_TERMINATOR.as_bytes())
        .or_else(|| reply.strip_suffix(BEL.as_bytes()))
        .ok_or_else(|| invalid("missing ST or BEL terminator"))?;
    let body = terminated
        .strip_prefix(OSC.as_bytes())
        .ok_or_else(|| invalid("expected OSC"))?;
    let body = std::str::from_utf8(body).map_err(|_| invalid("reply is not UTF-8"))?;

    let Some(("11", color)) = body.split_once(';') else {
        return Err(invalid("expected OSC 11"));
    };
    let components = color
        .strip_prefix(RGB_PREFIX)
        .ok_or_else(|| invalid("expected rgb: color"))?;

    let mut parts = components.split('/');
    let (Some(red), Some(green), Some(blue), None) =
        (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return Err(invalid("expected 3 color components"));
    };

    let parse_component = |hex: &str| {
        u16::from_str_radix(hex, 16).map_err(|_| invalid("color component is not 16 bit hex"))
    };

    Ok(Rgb16 {
        red: parse_component(red)?,
        green: parse_component(green)?,
        blue: parse_component(blue)?,
    })
}
