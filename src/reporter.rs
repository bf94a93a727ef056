//! Reporters decide which [`ParserError`] to raise when a parser that must match does not.

use crate::{ParserError, TextCursor};
use core::fmt;

/// Builds the error raised by [`crate::ParserExt::or_report`] and
/// [`crate::ParserExt::or_fail_if_cursor_not_empty`]. The cursor is positioned where the
/// problem was found, and `parser` is what was expected there.
pub trait ParserReporter: Send + Sync {
    /// Create the error to raise.
    fn report(&self, cursor: &TextCursor<'_>, parser: &dyn fmt::Display) -> ParserError;
}

/// Reports [`ParserError::EndOfText`] if the cursor is empty, and otherwise
/// [`ParserError::InvalidCharacter`] naming the character at the cursor and the label of
/// the parser that was expected.
///
/// # Example
///
/// ```
/// use cursor_parser::{ Parser, ParserExt, IntoTextCursor, parsers, BasicParserReporter };
///
/// let parser = parsers::symbol("=").or_report(BasicParserReporter);
///
/// let mut cursor = "?".into_cursor();
/// let err = parser.parse(&mut cursor, &()).unwrap_err();
/// assert_eq!(err.to_string(), "Invalid character '?' at (1,1) expected \"=\"");
///
/// let mut cursor = "".into_cursor();
/// let err = parser.parse(&mut cursor, &()).unwrap_err();
/// assert_eq!(err.to_string(), "End of text at (1,1)");
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct BasicParserReporter;

impl ParserReporter for BasicParserReporter {
    fn report(&self, cursor: &TextCursor<'_>, parser: &dyn fmt::Display) -> ParserError {
        let line_info = cursor.line_info();
        let error = match cursor.at() {
            None => ParserError::end_of_text(line_info),
            Some(c) => ParserError::invalid_character(c, line_info, parser.to_string()),
        };
        log::debug!("reporting {error}");
        error
    }
}

impl<R: ParserReporter + ?Sized> ParserReporter for &R {
    fn report(&self, cursor: &TextCursor<'_>, parser: &dyn fmt::Display) -> ParserError {
        (**self).report(cursor, parser)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::IntoTextCursor;

    #[test]
    fn reports_end_of_text_on_later_rows() {
        let mut cursor = "a\nbc".into_cursor();
        cursor.end();
        assert_eq!(
            BasicParserReporter.report(&cursor, &"x"),
            ParserError::EndOfText { column: 3, row: 2 }
        );
    }

    #[test]
    fn reports_character_at_cursor() {
        let mut cursor = "ab".into_cursor();
        cursor.next();
        assert_eq!(
            BasicParserReporter.report(&cursor, &"digit"),
            ParserError::InvalidCharacter {
                character: 'b',
                column: 2,
                row: 1,
                expected: "digit".to_string()
            }
        );
    }
}
