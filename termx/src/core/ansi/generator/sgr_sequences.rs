// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Select Graphic Rendition (SGR): colors and text attributes.
//!
//! An [`Sgr`] holds the parameter list of one or more rendition instructions, e.g.
//! `1` for bold or `38;5;196` for a 256 color foreground. [`Sgr::escape`] wraps it as
//! `CSI params m`, and [`Sgr::apply`] surrounds a piece of text with the sequence and a
//! reset.
//!
//! ```
//! use termx::Sgr;
//!
//! let warning = Sgr::BOLD.join(&[Sgr::FG_YELLOW]);
//! assert_eq!(warning.apply("careful"), "\x1b[1;33mcareful\x1b[0m");
//! ```
//!
//! Output that may end up somewhere other than a terminal can go through an
//! [`SgrWriter`] created with [`SgrWriter::suppressed`], which drops the sequences and
//! keeps the text.

use crate::{ANSI_PARAM_SEPARATOR, CSI, SGR_TERMINATOR};
use std::{borrow::Cow,
          fmt,
          io::{self, Write}};

/// Largest component value of the 6x6x6 color cube in the 256 color palette.
pub const ANSI256_CUBE_MAX: u8 = 5;

/// Index of the first color cube entry in the 256 color palette.
const ANSI256_CUBE_START: u8 = 16;

/// Parameters of one or more SGR instructions, joined with `;`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Sgr(Cow<'static, str>);

/// Attributes.
impl Sgr {
    pub const RESET_ALL: Sgr = Sgr::from_static("0");
    pub const BOLD: Sgr = Sgr::from_static("1");
    pub const FAINT: Sgr = Sgr::from_static("2");
    pub const ITALIC: Sgr = Sgr::from_static("3");
    pub const UNDERLINED: Sgr = Sgr::from_static("4");
    pub const BLINK: Sgr = Sgr::from_static("5");
    pub const INVERT: Sgr = Sgr::from_static("7");
}

/// The 16 standard colors.
impl Sgr {
    pub const FG_BLACK: Sgr = Sgr::from_static("30");
    pub const FG_RED: Sgr = Sgr::from_static("31");
    pub const FG_GREEN: Sgr = Sgr::from_static("32");
    pub const FG_YELLOW: Sgr = Sgr::from_static("33");
    pub const FG_BLUE: Sgr = Sgr::from_static("34");
    pub const FG_MAGENTA: Sgr = Sgr::from_static("35");
    pub const FG_CYAN: Sgr = Sgr::from_static("36");
    pub const FG_WHITE: Sgr = Sgr::from_static("37");

    pub const BG_BLACK: Sgr = Sgr::from_static("40");
    pub const BG_RED: Sgr = Sgr::from_static("41");
    pub const BG_GREEN: Sgr = Sgr::from_static("42");
    pub const BG_YELLOW: Sgr = Sgr::from_static("43");
    pub const BG_BLUE: Sgr = Sgr::from_static("44");
    pub const BG_MAGENTA: Sgr = Sgr::from_static("45");
    pub const BG_CYAN: Sgr = Sgr::from_static("46");
    pub const BG_WHITE: Sgr = Sgr::from_static("47");

    pub const FG_LIGHT_BLACK: Sgr = Sgr::from_static("90");
    pub const FG_LIGHT_RED: Sgr = Sgr::from_static("91");
    pub const FG_LIGHT_GREEN: Sgr = Sgr::from_static("92");
    pub const FG_LIGHT_YELLOW: Sgr = Sgr::from_static("93");
    pub const FG_LIGHT_BLUE: Sgr = Sgr::from_static("94");
    pub const FG_LIGHT_MAGENTA: Sgr = Sgr::from_static("95");
    pub const FG_LIGHT_CYAN: Sgr = Sgr::from_static("96");
    pub const FG_LIGHT_WHITE: Sgr = Sgr::from_static("97");

    pub const BG_LIGHT_BLACK: Sgr = Sgr::from_static("100");
    pub const BG_LIGHT_RED: Sgr = Sgr::from_static("101");
    pub const BG_LIGHT_GREEN: Sgr = Sgr::from_static("102");
    pub const BG_LIGHT_YELLOW: Sgr = Sgr::from_static("103");
    pub const BG_LIGHT_BLUE: Sgr = Sgr::from_static("104");
    pub const BG_LIGHT_MAGENTA: Sgr = Sgr::from_static("105");
    pub const BG_LIGHT_CYAN: Sgr = Sgr::from_static("106");
    pub const BG_LIGHT_WHITE: Sgr = Sgr::from_static("107");
}

impl Sgr {
    #[must_use]
    pub const fn from_static(params: &'static str) -> Self { Sgr(Cow::Borrowed(params)) }

    #[must_use]
    pub fn params(&self) -> &str { &self.0 }

    /// `CSI params m`
    #[must_use]
    pub fn escape(&self) -> String { self.to_string() }

    /// Combine `self` with `others` into a single instruction list.
    #[must_use]
    pub fn join(&self, others: &[Sgr]) -> Sgr {
        let mut params = String::from(self.params());
        for other in others {
            params.push(char::from(ANSI_PARAM_SEPARATOR));
            params.push_str(other.params());
        }
        Sgr(Cow::Owned(params))
    }

    /// Wrap `text` in this rendition followed by a reset. Pass [`format_args!`] to style
    /// formatted text without an intermediate `String`.
    #[must_use]
    pub fn apply(&self, text: impl fmt::Display) -> String {
        format!("{}{text}{}", self.escape(), Sgr::RESET_ALL.escape())
    }

    /// Foreground from the 6x6x6 color cube of the 256 color palette.
    ///
    /// # Errors
    ///
    /// [`SgrError::Ansi256OutOfRange`] if a component is above [`ANSI256_CUBE_MAX`].
    pub fn fg_ansi256(red: u8, green: u8, blue: u8) -> Result<Sgr, SgrError> {
        let index = ansi256_cube_index(red, green, blue)?;
        Ok(Sgr(Cow::Owned(format!("38;5;{index}"))))
    }

    /// Background from the 6x6x6 color cube of the 256 color palette.
    ///
    /// # Errors
    ///
    /// [`SgrError::Ansi256OutOfRange`] if a component is above [`ANSI256_CUBE_MAX`].
    pub fn bg_ansi256(red: u8, green: u8, blue: u8) -> Result<Sgr, SgrError> {
        let index = ansi256_cube_index(red, green, blue)?;
        Ok(Sgr(Cow::Owned(format!("48;5;{index}"))))
    }

    /// 24 bit foreground. Check [`is_truecolor_supported`](crate::is_truecolor_supported)
    /// first, terminals without support render something arbitrary.
    #[must_use]
    pub fn fg_truecolor(red: u8, green: u8, blue: u8) -> Sgr {
        Sgr(Cow::Owned(format!("38;2;{red};{green};{blue}")))
    }

    /// 24 bit background.
    #[must_use]
    pub fn bg_truecolor(red: u8, green: u8, blue: u8) -> Sgr {
        Sgr(Cow::Owned(format!("48;2;{red};{green};{blue}")))
    }
}

impl fmt::Display for Sgr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{CSI}{}{}", self.0, char::from(SGR_TERMINATOR))
    }
}

fn ansi256_cube_index(red: u8, green: u8, blue: u8) -> Result<u8, SgrError> {
    if red > ANSI256_CUBE_MAX || green > ANSI256_CUBE_MAX || blue > ANSI256_CUBE_MAX {
        return Err(SgrError::Ansi256OutOfRange { red, green, blue });
    }
    Ok(ANSI256_CUBE_START + 36 * red + 6 * green + blue)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error, miette::Diagnostic)]
pub enum SgrError {
    #[error("invalid 256 color cube component: {red};{green};{blue}")]
    #[diagnostic(
        code(termx::sgr::ansi256_out_of_range),
        help("Each component of the 256 color cube must be in 0..=5.")
    )]
    Ansi256OutOfRange { red: u8, green: u8, blue: u8 },
}

/// Strip SGR sequences from `bytes`.
///
/// Everything from a `CSI` up to and including the next `m` is dropped. Input without
/// any `CSI` is returned borrowed.
#[must_use]
pub fn remove_sgr(bytes: &[u8]) -> Cow<'_, [u8]> {
    let csi = CSI.as_bytes();
    if !bytes.windows(csi.len()).any(|window| window == csi) {
        return Cow::Borrowed(bytes);
    }

    let mut acc = Vec::with_capacity(bytes.len());
    let mut in_sgr = false;
    for (index, byte) in bytes.iter().enumerate() {
        if in_sgr {
            in_sgr = *byte != SGR_TERMINATOR;
            continue;
        }
        if bytes[index..].starts_with(csi) {
            in_sgr = true;
            continue;
        }
        acc.push(*byte);
    }
    Cow::Owned(acc)
}

/// Writer that styles text with [`Sgr`], or writes it plain when suppressed.
///
/// Plain [`Write`] calls pass through untouched either way.
#[derive(Debug)]
pub struct SgrWriter<W> {
    inner: W,
    suppress_sgr: bool,
}

impl<W: Write> SgrWriter<W> {
    pub fn new(inner: W) -> Self { Self { inner, suppress_sgr: false } }

    /// Writes text without any SGR sequences, e.g. when stdout isn't a terminal.
    pub fn suppressed(inner: W) -> Self { Self { inner, suppress_sgr: true } }

    #[must_use]
    pub fn suppress_sgr(&self) -> bool { self.suppress_sgr }

    pub fn get_mut(&mut self) -> &mut W { &mut self.inner }

    pub fn into_inner(self) -> W { self.inner }

    /// Write `text` styled with `sgr`.
    ///
    /// # Errors
    ///
    /// Returns the error of the underlying writer.
    pub fn print(&mut self, sgr: &Sgr, text: impl fmt::Display) -> io::Result<()> {
        if self.suppress_sgr {
            write!(self.inner, "{text}")
        } else {
            write!(self.inner, "{}", sgr.apply(text))
        }
    }

    /// Like [`Self::print`] with a trailing newline inside the styled span.
    ///
    /// # Errors
    ///
    /// Returns the error of the underlying writer.
    pub fn println(&mut self, sgr: &Sgr, text: impl fmt::Display) -> io::Result<()> {
        self.print(sgr, format_args!("{text}\n"))
    }
}

impl<W: Write> Write for SgrWriter<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> { self.inner.write(buf) }

    fn flush(&mut self) -> io::Result<()> { self.inner.flush() }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    #[test_case(&Sgr::RESET_ALL, "\x1b[0m")]
    #[test_case(&Sgr::BOLD, "\x1b[1m")]
    #[test_case(&Sgr::FAINT, "\x1b[2m")]
    #[test_case(&Sgr::INVERT, "\x1b[7m")]
    #[test_case(&Sgr::FG_RED, "\x1b[31m")]
    #[test_case(&Sgr::BG_WHITE, "\x1b[47m")]
    #[test_case(&Sgr::FG_LIGHT_CYAN, "\x1b[96m")]
    #[test_case(&Sgr::BG_LIGHT_BLACK, "\x1b[100m")]
    fn test_escape(sgr: &Sgr, expected: &str) {
        assert_eq!(sgr.escape(), expected);
        assert_eq!(sgr.to_string(), expected);
    }

    #[test]
    fn test_join() {
        assert_eq!(Sgr::BOLD.join(&[]).params(), "1");
        assert_eq!(
            Sgr::BOLD.join(&[Sgr::UNDERLINED, Sgr::BG_BLUE]).escape(),
            "\x1b[1;4;44m"
        );
    }

    #[test]
    fn test_apply() {
        assert_eq!(Sgr::ITALIC.apply("text"), "\x1b[3mtext\x1b[0m");
        assert_eq!(Sgr::BLINK.apply(format_args!("{}-{}", 1, 2)), "\x1b[5m1-2\x1b[0m");
    }

    #[test_case(0, 0, 0, "38;5;16")]
    #[test_case(5, 0, 0, "38;5;196")]
    #[test_case(0, 5, 0, "38;5;46")]
    #[test_case(0, 0, 5, "38;5;21")]
    #[test_case(5, 5, 5, "38;5;231")]
    #[test_case(1, 2, 3, "38;5;67")]
    fn test_fg_ansi256(red: u8, green: u8, blue: u8, expected: &str) {
        assert_eq!(Sgr::fg_ansi256(red, green, blue).unwrap().params(), expected);
    }

    #[test]
    fn test_bg_ansi256() {
        assert_eq!(Sgr::bg_ansi256(2, 4, 1).unwrap().params(), "48;5;113");
    }

    #[test_case(6, 0, 0)]
    #[test_case(0, 6, 0)]
    #[test_case(0, 0, 255)]
    fn test_ansi256_rejects_out_of_range(red: u8, green: u8, blue: u8) {
        let expected = Err(SgrError::Ansi256OutOfRange { red, green, blue });
        assert_eq!(Sgr::fg_ansi256(red, green, blue), expected);
        assert_eq!(Sgr::bg_ansi256(red, green, blue), expected);
    }

    #[test]
    fn test_truecolor() {
        assert_eq!(Sgr::fg_truecolor(255, 128, 0).escape(), "\x1b[38;2;255;128;0m");
        assert_eq!(Sgr::bg_truecolor(1, 2, 3).escape(), "\x1b[48;2;1;2;3m");
    }

    #[test_case(b"plain", b"plain" ; "no sequences")]
    #[test_case(b"\x1b[1mbold\x1b[0m", b"bold" ; "single attribute")]
    #[test_case(b"a\x1b[1;31;44mb\x1b[0mc", b"abc" ; "joined attributes")]
    #[test_case(b"\x1b[38;5;196m", b"" ; "only a sequence")]
    #[test_case(b"x\x1b[1", b"x" ; "unterminated sequence")]
    fn test_remove_sgr(input: &[u8], expected: &[u8]) {
        assert_eq!(remove_sgr(input).as_ref(), expected);
    }

    #[test]
    fn test_remove_sgr_borrows_plain_input() {
        assert!(matches!(remove_sgr(b"plain"), Cow::Borrowed(_)));
    }

    #[test]
    fn test_remove_sgr_undoes_apply() {
        let styled = Sgr::BOLD.join(&[Sgr::fg_truecolor(9, 9, 9)]).apply("hi");
        assert_eq!(remove_sgr(styled.as_bytes()).as_ref(), b"hi");
    }

    #[test]
    fn test_writer_styles_text() {
        let mut writer = SgrWriter::new(Vec::new());
        writer.print(&Sgr::BOLD, "a").unwrap();
        writer.println(&Sgr::FAINT, 42).unwrap();
        writer.write_all(b"raw").unwrap();
        assert!(!writer.suppress_sgr());
        assert_eq!(writer.into_inner(), b"\x1b[1ma\x1b[0m\x1b[2m42\n\x1b[0mraw");
    }

    #[test]
    fn test_suppressed_writer_writes_plain_text() {
        let mut writer = SgrWriter::suppressed(Vec::new());
        writer.print(&Sgr::BOLD, "a").unwrap();
        writer.println(&Sgr::FAINT, format_args!("{}", 42)).unwrap();
        assert!(writer.suppress_sgr());
        assert_eq!(writer.into_inner(), b"a42\n");
    }
}
