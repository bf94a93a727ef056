//! Adapters that turn a text formatting engine into a [`Parser`].
//!
//! A [`TextFormatter`] knows how to read a value from the start of some text, handing
//! back the value and whatever text it did not use. [`FormatterParser`] runs one against
//! the remaining text of a cursor and advances the cursor past exactly the text the
//! formatter used.
mod datetime;
mod decimal;

use crate::{InvalidTokenError, ParseResult, Parser, ParserToken, TextCursor};
use core::fmt;

pub use datetime::{DateTimeFormatter, FromParsed};
pub use decimal::DecimalFormatter;

/// Reads a value from the start of some text.
pub trait TextFormatter<C> {
    /// The value produced.
    type Value;

    /// Read a value from the start of `text`, returning it along with the unused rest of
    /// `text`, or `None` if there is no value there. The rest must be a suffix of `text`.
    fn parse_prefix<'t>(&self, text: &'t str, context: &C) -> Option<(Self::Value, &'t str)>;
}

/// Creates the token for a value read by a [`TextFormatter`], given the text it was read from.
pub type TokenFactory<V> = fn(V, String) -> Result<ParserToken, InvalidTokenError>;

/// A [`Parser`] that hands the remaining text to a [`TextFormatter`].
///
/// # Example
///
/// ```
/// use cursor_parser::{ Parser, IntoTextCursor, ParserToken };
/// use cursor_parser::format::{ FormatterParser, TextFormatter };
///
/// // Reads a run of `x`s, counting them.
/// struct Xs;
///
/// impl std::fmt::Display for Xs {
///     fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
///         f.write_str("xs")
///     }
/// }
///
/// impl<C> TextFormatter<C> for Xs {
///     type Value = i64;
///     fn parse_prefix<'t>(&self, text: &'t str, _context: &C) -> Option<(i64, &'t str)> {
///         let rest = text.trim_start_matches('x');
///         Some(((text.len() - rest.len()) as i64, rest))
///     }
/// }
///
/// let parser = FormatterParser::new(Xs, |value, text| ParserToken::long(value, text));
///
/// let mut cursor = "xxxy".into_cursor();
/// let token = parser.parse(&mut cursor, &()).unwrap().unwrap();
/// assert_eq!(token, ParserToken::long(3, "xxx").unwrap());
/// assert_eq!(cursor.remaining(), "y");
///
/// // Consuming nothing is not a match:
/// let mut cursor = "y".into_cursor();
/// assert_eq!(parser.parse(&mut cursor, &()).unwrap(), None);
/// ```
pub struct FormatterParser<F, V> {
    formatter: F,
    factory: TokenFactory<V>,
}

impl<F, V> FormatterParser<F, V> {
    /// Adapt `formatter`, building tokens with `factory`.
    pub fn new(formatter: F, factory: TokenFactory<V>) -> Self {
        Self { formatter, factory }
    }

    /// The wrapped formatter.
    pub fn formatter(&self) -> &F {
        &self.formatter
    }
}

impl<C, F, V> Parser<C> for FormatterParser<F, V>
where
    F: TextFormatter<C, Value = V> + fmt::Display + Send + Sync,
{
    fn parse(&self, cursor: &mut TextCursor<'_>, context: &C) -> ParseResult {
        let text = cursor.remaining();
        let Some((value, rest)) = self.formatter.parse_prefix(text, context) else {
            log::trace!("{} rejected text at offset {}", self, cursor.offset());
            return Ok(None);
        };

        let used = text.len().saturating_sub(rest.len());
        let save = cursor.save();
        if used == 0 || !text.ends_with(rest) || !cursor.advance(used) {
            return Ok(None);
        }

        let token = (self.factory)(value, save.text_between(cursor).to_string())?;
        Ok(Some(token))
    }
}

impl<F: fmt::Display, V> fmt::Display for FormatterParser<F, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.formatter.fmt(f)
    }
}
