// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use super::{CLIArg, ui_str};
use std::io::{Read, Write};
use termx::{CLEAR_LINE, CLEAR_SCREEN, Event, InputReader, RawInputEvent,
            ReadInputEventError, Sgr, SgrWriter, fmt_hex, move_cursor_backward,
            move_cursor_down, move_cursor_up, query_background_color, query_cursor_position,
            set_cursor_position, try_initialize_logging_global};

/// Wide enough to return to column 1 from anywhere on the line.
const RETURN_TO_LINE_START: u16 = 200;

/// What the event loop does after printing an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeypressAction {
    Continue,
    Quit,
    ShowBackgroundColor,
    ShowCursorPosition,
}

impl From<&Event> for KeypressAction {
    fn from(event: &Event) -> Self {
        match event {
            Event::Ctrl('c') | Event::Char('q') => KeypressAction::Quit,
            Event::Ctrl('x') => KeypressAction::ShowBackgroundColor,
            Event::Ctrl('v') => KeypressAction::ShowCursorPosition,
            _ => KeypressAction::Continue,
        }
    }
}

/// Initialize logging, then run the interactive session until the user quits.
///
/// # Errors
///
/// Returns an error if logging can't be set up, stdin isn't a terminal, the terminal
/// mode can't be changed, or reading or writing the terminal fails.
pub fn run_app(cli_arg: CLIArg) -> miette::Result<()> {
    try_initialize_logging_global(cli_arg.tracing_config())?;

    tracing::debug!(message = "keypress: start", cli_arg = ?cli_arg);

    let result = session::run(&cli_arg);

    tracing::debug!(message = "keypress: exit", result = ?result);

    result
}

/// One line per unit: the decoded event (or `?`), the raw bytes, and the error if any.
#[must_use]
pub fn render_event_line(result: &Result<RawInputEvent, ReadInputEventError>) -> String {
    match result {
        Ok(RawInputEvent { event, raw }) => format!("{event} [{}]", fmt_hex(raw)),
        Err(error) => format!("? [{}] {error}", fmt_hex(error.raw_bytes())),
    }
}

/// Clear the screen and print the title, the active modes and the key help, each on
/// its own line starting at the top-left cell.
///
/// # Errors
///
/// Returns the error of the underlying writer.
pub fn write_header<W: Write>(
    cli_arg: &CLIArg,
    output: &mut SgrWriter<W>,
) -> std::io::Result<()> {
    let next_line =
        format!("{}{}", move_cursor_backward(RETURN_TO_LINE_START), move_cursor_down(1));
    let emphasize = |value: bool| {
        if output.suppress_sgr() { value.to_string() } else { Sgr::BOLD.apply(value) }
    };
    let modes = ui_str::modes_msg(
        emphasize(cli_arg.app_mode),
        emphasize(cli_arg.alt_buffer),
        emphasize(cli_arg.mouse),
    );

    write!(output, "{CLEAR_SCREEN}{}", set_cursor_position(1, 1))?;
    output.print(&Sgr::BOLD, ui_str::HEADER)?;
    write!(output, "{next_line}{modes}{next_line}")?;
    output.print(&Sgr::FAINT, ui_str::INSTRUCTIONS)?;
    write!(output, "{next_line}")?;
    output.flush()
}

/// Read and print events until the user quits or the input ends.
///
/// Queries triggered by `C-x` and `C-v` read their reply directly from the reader's
/// source, and print the result (or the error) on the line below the event.
///
/// # Errors
///
/// Returns an error if reading the input fails for a reason other than an
/// undecodable unit, or if writing to `output` fails.
pub fn event_loop<R: Read, W: Write>(
    reader: &mut InputReader<R>,
    output: &mut W,
) -> miette::Result<()> {
    let write_err = |e: std::io::Error| miette::miette!("failed to write to terminal: {e}");

    loop {
        let result = reader.read_input_event();

        write!(output, "{}{CLEAR_LINE}", move_cursor_backward(RETURN_TO_LINE_START))
            .map_err(write_err)?;
        write!(output, "{}", render_event_line(&result)).map_err(write_err)?;
        output.flush().map_err(write_err)?;

        let event = match result {
            Ok(RawInputEvent { event, .. }) => event,
            Err(ReadInputEventError::EndOfStream) => return Ok(()),
            Err(error) if error.is_recoverable() => continue,
            Err(error) => return Err(error.into()),
        };

        let answer = match KeypressAction::from(&event) {
            KeypressAction::Continue => continue,
            KeypressAction::Quit => break,
            KeypressAction::ShowBackgroundColor => {
                match query_background_color(reader.get_mut(), output) {
                    Ok(color) => format!("background color {color}"),
                    Err(error) => format!("background color query failed: {error}"),
                }
            }
            KeypressAction::ShowCursorPosition => {
                match query_cursor_position(reader.get_mut(), output) {
                    Ok(position) => format!("cursor at ({},{})", position.x, position.y),
                    Err(error) => format!("cursor position query failed: {error}"),
                }
            }
        };

        write!(
            output,
            "{}{}{CLEAR_LINE}{answer}{}",
            move_cursor_backward(RETURN_TO_LINE_START),
            move_cursor_down(1),
            move_cursor_up(1),
        )
        .map_err(write_err)?;
        output.flush().map_err(write_err)?;
    }

    write!(
        output,
        "{}{}",
        move_cursor_up(1),
        move_cursor_backward(RETURN_TO_LINE_START)
    )
    .map_err(write_err)?;
    output.flush().map_err(write_err)
}

#[cfg(any(unix, windows))]
mod session {
    use super::{CLIArg, event_loop, write_header};
    use crate::keypress::ui_str;
    use std::io::{self, Write};
    use termx::{CURSOR_HIDE, CURSOR_SHOW, DISABLE_APPLICATION_MODE, DISABLE_MOUSE_BUTTON_EVENT,
                DISABLE_MOUSE_SGR_ENCODING, DISABLE_MOUSE_TRACKING, ENABLE_APPLICATION_MODE,
                ENABLE_MOUSE_BUTTON_EVENT, ENABLE_MOUSE_SGR_ENCODING, ENABLE_MOUSE_TRACKING,
                InputReader, RawModeGuard, SgrWriter, USE_ALTERNATE_SCREEN_BUFFER,
                USE_MAIN_SCREEN_BUFFER, is_terminal, set_window_title};

    /// Mode switches written to the terminal, undone in reverse order on drop.
    struct ModeSwitches {
        output: io::Stdout,
        undo: Vec<&'static str>,
    }

    impl ModeSwitches {
        fn new() -> Self { Self { output: io::stdout(), undo: vec![] } }

        fn enable(&mut self, on: &[&str], off: &[&'static str]) -> io::Result<()> {
            for sequence in on {
                self.output.write_all(sequence.as_bytes())?;
            }
            self.output.flush()?;
            self.undo.extend(off.iter().rev());
            Ok(())
        }
    }

    impl Drop for ModeSwitches {
        fn drop(&mut self) {
            let undo = self.undo.iter().rev().try_for_each(|sequence| {
                self.output.write_all(sequence.as_bytes())
            });
            if let Err(error) = undo.and_then(|()| self.output.flush()) {
                tracing::warn!(message = "failed to restore terminal modes", error = ?error);
            }
        }
    }

    pub fn run(cli_arg: &CLIArg) -> miette::Result<()> {
        let write_err = |e: io::Error| miette::miette!("failed to write to terminal: {e}");

        if !is_terminal(io::stdin()) {
            miette::bail!(ui_str::NOT_A_TERMINAL);
        }

        // Switched before raw mode and undone after it.
        let mut outer_modes = ModeSwitches::new();
        if cli_arg.alt_buffer {
            outer_modes
                .enable(&[USE_ALTERNATE_SCREEN_BUFFER], &[USE_MAIN_SCREEN_BUFFER])
                .map_err(write_err)?;
        }
        if cli_arg.app_mode {
            outer_modes
                .enable(&[ENABLE_APPLICATION_MODE], &[DISABLE_APPLICATION_MODE])
                .map_err(write_err)?;
        }

        let raw_mode = RawModeGuard::new(io::stdin())?;

        let mut inner_modes = ModeSwitches::new();
        if cli_arg.mouse {
            inner_modes
                .enable(
                    &[ENABLE_MOUSE_TRACKING, ENABLE_MOUSE_SGR_ENCODING, ENABLE_MOUSE_BUTTON_EVENT],
                    &[DISABLE_MOUSE_TRACKING, DISABLE_MOUSE_SGR_ENCODING, DISABLE_MOUSE_BUTTON_EVENT],
                )
                .map_err(write_err)?;
        }
        inner_modes
            .enable(&[set_window_title(ui_str::WINDOW_TITLE).as_str(), CURSOR_HIDE], &[CURSOR_SHOW])
            .map_err(write_err)?;

        let mut output = if is_terminal(io::stdout()) {
            SgrWriter::new(io::stdout())
        } else {
            SgrWriter::suppressed(io::stdout())
        };
        write_header(cli_arg, &mut output).map_err(write_err)?;

        let result = event_loop(&mut InputReader::new(io::stdin()), &mut output);

        drop(inner_modes);
        raw_mode.restore()?;
        drop(outer_modes);

        result
    }
}

#[cfg(not(any(unix, windows)))]
mod session {
    use super::CLIArg;

    pub fn run(_cli_arg: &CLIArg) -> miette::Result<()> {
        miette::bail!("keypress needs a unix terminal or the Windows console")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use clap::Parser as _;
    use std::{collections::VecDeque, io::Cursor};
    use termx::{DecodeError, SpecialKey};
    use test_case::test_case;

    /// Replays one chunk per `read()` call, like a terminal in raw mode.
    struct ChunkedInput(VecDeque<&'static [u8]>);

    impl Read for ChunkedInput {
        fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
            let Some(chunk) = self.0.pop_front() else { return Ok(0) };
            buf[..chunk.len()].copy_from_slice(chunk);
            Ok(chunk.len())
        }
    }

    fn run(chunks: &[&'static [u8]]) -> String {
        let mut reader = InputReader::new(ChunkedInput(chunks.iter().copied().collect()));
        let mut output = Vec::new();
        event_loop(&mut reader, &mut output).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test_case(Event::Ctrl('c'), KeypressAction::Quit)]
    #[test_case(Event::Char('q'), KeypressAction::Quit)]
    #[test_case(Event::Ctrl('x'), KeypressAction::ShowBackgroundColor)]
    #[test_case(Event::Ctrl('v'), KeypressAction::ShowCursorPosition)]
    #[test_case(Event::Char('Q'), KeypressAction::Continue)]
    #[test_case(Event::Special(SpecialKey::Escape), KeypressAction::Continue)]
    fn test_keypress_action(event: Event, expected: KeypressAction) {
        assert_eq!(KeypressAction::from(&event), expected);
    }

    #[test]
    fn test_header_is_styled() {
        let cli_arg = CLIArg::try_parse_from(["keypress", "--mouse"]).unwrap();
        let mut output = SgrWriter::new(Vec::new());
        write_header(&cli_arg, &mut output).unwrap();
        let output = String::from_utf8(output.into_inner()).unwrap();

        assert!(output.starts_with("\x1b[2J\x1b[1;1H"));
        assert!(output.contains(&format!("\x1b[1m{}\x1b[0m", ui_str::HEADER)));
        assert!(output.contains(&format!("\x1b[2m{}\x1b[0m", ui_str::INSTRUCTIONS)));
        assert!(output.contains("Mouse tracking: \x1b[1mtrue\x1b[0m"));
        assert!(output.contains("Application mode: \x1b[1mfalse\x1b[0m"));
    }

    #[test]
    fn test_suppressed_header_is_plain() {
        let cli_arg = CLIArg::try_parse_from(["keypress", "--alt-buffer"]).unwrap();
        let mut output = SgrWriter::suppressed(Vec::new());
        write_header(&cli_arg, &mut output).unwrap();
        let output = String::from_utf8(output.into_inner()).unwrap();

        assert!(output.contains(ui_str::HEADER));
        assert!(output.contains(&ui_str::modes_msg(false, true, false)));
        assert!(!output.contains("\x1b[0m"));
    }

    #[test]
    fn test_render_event_line() {
        let ok = Ok(RawInputEvent {
            event: SpecialKey::CursorUp.into(),
            raw: b"\x1b[A".as_slice().into(),
        });
        assert_eq!(render_event_line(&ok), "<Up> [1b 5b 41]");

        let err = Err(ReadInputEventError::Decode(DecodeError::InvalidSequence {
            bytes: b"ab".as_slice().into(),
            reason: "not a single UTF-8 character of this length",
        }));
        assert_eq!(
            render_event_line(&err),
            "? [61 62] invalid input byte sequence (not a single UTF-8 character of this length): [61 62]"
        );
    }

    #[test]
    fn test_loop_prints_events_until_quit() {
        let output = run(&[b"a", b"\x1b[A\x1b[\x99", b"q", b"never read"]);

        assert!(output.contains("a [61]"));
        assert!(output.contains("<Up> [1b 5b 41]"));
        assert!(output.contains("? [1b 5b 99]"));
        assert!(output.contains("q [71]"));
        assert!(!output.contains("never"));
    }

    #[test]
    fn test_loop_ends_at_end_of_input() {
        let output = run(&[b"\x1bOP"]);
        assert!(output.contains("<F1> [1b 4f 50]"));
    }

    #[test]
    fn test_background_color_query() {
        let output = run(&[b"\x18", b"\x1b]11;rgb:0000/2b2b/3636\x1b\\", b"\x03"]);

        assert!(output.contains("\x1b]11;?\x1b\\"));
        assert!(output.contains("background color rgb:0000/2b2b/3636"));
        assert!(output.contains("C-c [03]"));
    }

    #[test]
    fn test_cursor_position_query_failure_is_printed() {
        let output = run(&[b"\x16", b"garbage", b"q"]);

        assert!(output.contains("\x1b[6n"));
        assert!(output.contains("cursor position query failed: invalid terminal response"));
    }

    #[test]
    fn test_io_error_is_returned() {
        struct Broken;
        impl Read for Broken {
            fn read(&mut self, _buf: &mut [u8]) -> std::io::Result<usize> {
                Err(std::io::Error::from(std::io::ErrorKind::BrokenPipe))
            }
        }

        let mut reader = InputReader::new(Broken);
        let mut output = Cursor::new(Vec::new());
        assert!(event_loop(&mut reader, &mut output).is_err());
    }
}
