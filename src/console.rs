//! Console input module
//!
//! Reads the series name from whatever line-oriented reader the caller owns,
//! usually a locked stdin.

use std::io::{self, BufRead};
use thiserror::Error;

/// Errors that can occur while reading console input
#[derive(Debug, Error)]
pub enum ConsoleError {
    /// The input ended before a line was read
    #[error("No series name was entered")]
    MissingInput,

    /// Reading from the input failed
    #[error("Failed to read input: {0}")]
    Io(#[from] io::Error),
}

/// Reads one line and returns it without its line terminator.
///
/// Surrounding whitespace is preserved and an empty line is a valid (empty)
/// name; only end of input is an error.
pub fn read_series_name<R: BufRead>(reader: &mut R) -> Result<String, ConsoleError> {
    let mut line = String::new();
    if reader.read_line(&mut line)? == 0 {
        return Err(ConsoleError::MissingInput);
    }

    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }

    Ok(line)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_reads_first_line_only() {
        let mut input = Cursor::new("Breaking Bad\nDark\n");
        assert_eq!(read_series_name(&mut input).unwrap(), "Breaking Bad");
        assert_eq!(read_series_name(&mut input).unwrap(), "Dark");
    }

    #[test]
    fn test_strips_crlf() {
        let mut input = Cursor::new("The Wire\r\n");
        assert_eq!(read_series_name(&mut input).unwrap(), "The Wire");
    }

    #[test]
    fn test_last_line_without_newline() {
        let mut input = Cursor::new("Lost");
        assert_eq!(read_series_name(&mut input).unwrap(), "Lost");
    }

    #[test]
    fn test_empty_line_is_empty_name() {
        let mut input = Cursor::new("\n");
        assert_eq!(read_series_name(&mut input).unwrap(), "");
    }

    #[test]
    fn test_end_of_input() {
        let mut input = Cursor::new("");
        assert!(matches!(
            read_series_name(&mut input),
            Err(ConsoleError::MissingInput)
        ));
    }
}
