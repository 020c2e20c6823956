//! @ai:module:intent Collect integers and menu selections from line-based input
//! @ai:module:layer application
//! @ai:module:public_api LineReader, parse_integer, read_integer, collect_number_set, MenuChoice, NextStep
//! @ai:module:depends_on display, stats, error

use crate::display::Presenter;
use crate::error::{Error, Result};
use crate::stats::{NumberSet, SET_SIZE};
use std::io::BufRead;

/// @ai:intent Line reader that reports end of input as an error
pub struct LineReader<R: BufRead> {
    inner: R,
    buf: Vec<u8>,
}

impl<R: BufRead> LineReader<R> {
    /// @ai:intent Wrap a buffered reader
    /// @ai:effects pure
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            buf: Vec::new(),
        }
    }

    /// @ai:intent Read one line without its terminator
    /// @ai:post Err(InputClosed) at end of input; invalid UTF-8 is replaced, not an error
    /// @ai:effects io
    pub fn read_line(&mut self) -> Result<String> {
        self.buf.clear();

        if self.inner.read_until(b'\n', &mut self.buf)? == 0 {
            return Err(Error::InputClosed);
        }

        let line = String::from_utf8_lossy(&self.buf);
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }
}

/// @ai:intent Parse user text as a signed integer
/// @ai:pre none
/// @ai:post Err(InvalidIntegerInput) for anything that is not an optionally signed run of digits
/// @ai:effects pure
pub fn parse_integer(text: &str) -> Result<i64> {
    let invalid = || Error::InvalidIntegerInput {
        input: text.to_string(),
    };

    let digits = strip_digit_separators(text.trim()).ok_or_else(invalid)?;
    digits.parse::<i64>().map_err(|_| invalid())
}

/// Drop `_` separators, allowed only singly between two digits (`1_000`).
fn strip_digit_separators(text: &str) -> Option<String> {
    if !text.contains('_') {
        return Some(text.to_string());
    }

    let body = text.trim_start_matches(['+', '-']);
    if body.starts_with('_') || body.ends_with('_') || body.contains("__") {
        return None;
    }

    Some(text.replace('_', ""))
}

/// @ai:intent Prompt until the user enters a valid integer
/// @ai:effects io
pub fn read_integer<R: BufRead, P: Presenter>(
    reader: &mut LineReader<R>,
    presenter: &mut P,
    prompt: &str,
) -> Result<i64> {
    loop {
        presenter.prompt(prompt)?;
        let line = reader.read_line()?;

        match parse_integer(&line) {
            Ok(n) => return Ok(n),
            Err(Error::InvalidIntegerInput { input }) => {
                tracing::debug!(input = %input, "rejected non-integer input");
                presenter.input_error("Please enter a valid integer.")?;
            }
            Err(e) => return Err(e),
        }
    }
}

/// @ai:intent Collect exactly SET_SIZE integers, re-prompting each slot on invalid input
/// @ai:effects io
pub fn collect_number_set<R: BufRead, P: Presenter>(
    reader: &mut LineReader<R>,
    presenter: &mut P,
) -> Result<NumberSet> {
    let mut numbers = [0i64; SET_SIZE];

    for (slot, value) in numbers.iter_mut().enumerate() {
        let prompt = format!("  ➡ Enter Number {}: ", slot + 1);
        *value = read_integer(reader, presenter, &prompt)?;
    }

    Ok(NumberSet::new(numbers))
}

/// @ai:intent Main menu options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Analyze,
    History,
    Exit,
}

impl MenuChoice {
    /// @ai:effects pure
    pub fn parse(text: &str) -> Option<Self> {
        match text.trim() {
            "1" => Some(MenuChoice::Analyze),
            "2" => Some(MenuChoice::History),
            "3" => Some(MenuChoice::Exit),
            _ => None,
        }
    }
}

/// @ai:intent What to do after an analysis completes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NextStep {
    Repeat,
    Return,
}

impl NextStep {
    /// @ai:effects pure
    pub fn parse(text: &str) -> Option<Self> {
        match text.trim() {
            "1" => Some(NextStep::Repeat),
            "2" => Some(NextStep::Return),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{DisplayConfig, OutputFormat, PacingConfig};
    use crate::display::TerminalPresenter;
    use std::io::Cursor;

    fn presenter() -> TerminalPresenter<Vec<u8>> {
        TerminalPresenter::new(
            Vec::new(),
            DisplayConfig {
                color: false,
                clear_screen: false,
                format: OutputFormat::Text,
                pacing: PacingConfig::disabled(),
            },
        )
    }

    #[test]
    fn test_parse_integer_accepts_signs_and_whitespace() {
        assert_eq!(parse_integer("42").unwrap(), 42);
        assert_eq!(parse_integer("  -7 ").unwrap(), -7);
        assert_eq!(parse_integer("+3").unwrap(), 3);
    }

    #[test]
    fn test_parse_integer_rejects_non_integers() {
        for text in ["", "abc", "1.5", "4 2", "99999999999999999999"] {
            match parse_integer(text) {
                Err(Error::InvalidIntegerInput { input }) => assert_eq!(input, text),
                other => panic!("expected InvalidIntegerInput for {:?}, got {:?}", text, other),
            }
        }
    }

    #[test]
    fn test_parse_integer_digit_separators() {
        assert_eq!(parse_integer("1_000").unwrap(), 1000);
        assert_eq!(parse_integer("-2_500_0").unwrap(), -25000);

        for text in ["_1", "1_", "1__0", "-_5", "+_5", "_"] {
            assert!(matches!(
                parse_integer(text),
                Err(Error::InvalidIntegerInput { .. })
            ));
        }
    }

    #[test]
    fn test_read_line_replaces_invalid_utf8() {
        let mut reader = LineReader::new(Cursor::new(&b"\xff\xfe\n7\n"[..]));

        let line = reader.read_line().unwrap();
        assert_eq!(line, "\u{FFFD}\u{FFFD}");
        assert!(matches!(
            parse_integer(&line),
            Err(Error::InvalidIntegerInput { .. })
        ));
        assert_eq!(reader.read_line().unwrap(), "7");
    }

    #[test]
    fn test_collect_reprompts_after_invalid_utf8() {
        let mut reader = LineReader::new(Cursor::new(&b"1\n\xff\xfe\n2\n3\n4\n5\n"[..]));
        let mut presenter = presenter();

        let set = collect_number_set(&mut reader, &mut presenter).unwrap();
        assert_eq!(set, NumberSet::new([1, 2, 3, 4, 5]));

        let output = String::from_utf8(presenter.into_inner()).unwrap();
        assert_eq!(output.matches("Enter Number 2:").count(), 2);
        assert!(output.contains("     [❌ ERROR] Please enter a valid integer."));
    }

    #[test]
    fn test_read_line_strips_terminators() {
        let mut reader = LineReader::new(Cursor::new("first\r\nsecond\n"));
        assert_eq!(reader.read_line().unwrap(), "first");
        assert_eq!(reader.read_line().unwrap(), "second");
        assert!(matches!(reader.read_line(), Err(Error::InputClosed)));
    }

    #[test]
    fn test_collect_reprompts_same_slot() {
        let mut reader = LineReader::new(Cursor::new("1\nx\n2\n3\n\n4\n-4\n"));
        let mut presenter = presenter();

        let set = collect_number_set(&mut reader, &mut presenter).unwrap();
        assert_eq!(set, NumberSet::new([1, 2, 3, 4, -4]));

        let output = String::from_utf8(presenter.into_inner()).unwrap();
        assert_eq!(output.matches("Please enter a valid integer.").count(), 2);
        assert_eq!(output.matches("Enter Number 2:").count(), 2);
        assert_eq!(output.matches("Enter Number 4:").count(), 2);
    }

    #[test]
    fn test_collect_stops_on_closed_input() {
        let mut reader = LineReader::new(Cursor::new("1\n2\n"));
        let mut presenter = presenter();

        let result = collect_number_set(&mut reader, &mut presenter);
        assert!(matches!(result, Err(Error::InputClosed)));
    }

    #[test]
    fn test_menu_choice_parse() {
        assert_eq!(MenuChoice::parse(" 1 "), Some(MenuChoice::Analyze));
        assert_eq!(MenuChoice::parse("2"), Some(MenuChoice::History));
        assert_eq!(MenuChoice::parse("3"), Some(MenuChoice::Exit));
        assert_eq!(MenuChoice::parse("4"), None);
        assert_eq!(MenuChoice::parse(""), None);
    }

    #[test]
    fn test_next_step_parse() {
        assert_eq!(NextStep::parse("1"), Some(NextStep::Repeat));
        assert_eq!(NextStep::parse("2\t"), Some(NextStep::Return));
        assert_eq!(NextStep::parse("yes"), None);
    }
}
