//! Functions that create the building block parsers: those that match some text
//! and produce a single leaf token, plus [`sequence`] and [`alternatives`] for
//! putting them together.
//!
//! # Example
//!
//! ```
//! use cursor_parser::{ Parser, ParserExt, IntoTextCursor, parsers };
//! use cursor_parser::chars::CharPredicate;
//!
//! // A comma separated list of names.
//! let name = parsers::string_char_predicate(CharPredicate::letter(), 1, usize::MAX);
//! let parser = parsers::sequence()
//!     .required(name)
//!     .optional(
//!         parsers::sequence()
//!             .required(parsers::symbol(","))
//!             .optional(parsers::whitespace())
//!             .required(parsers::string_char_predicate(CharPredicate::letter(), 1, usize::MAX))
//!             .build()
//!             .repeated(),
//!     )
//!     .build();
//!
//! let mut cursor = "alice, bob,carol;".into_cursor();
//! let token = parser.parse(&mut cursor, &()).unwrap().unwrap();
//!
//! assert_eq!(token.text(), "alice, bob,carol");
//! assert_eq!(cursor.remaining(), ";");
//! ```
mod character;
mod number;
mod quoted;
mod string;

use crate::chars::CharPredicate;
use crate::format::{DateTimeFormatter, DecimalFormatter, FormatterParser};
use crate::parser::{AlternativesParser, SequenceParserBuilder};
use crate::{OffsetTime, Parser, ParserToken};
use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime};
use rust_decimal::Decimal;

pub use character::{CharacterParser, StringCharPredicateParser, WhitespaceParser};
pub use number::{LongParser, SignParser};
pub use quoted::QuotedParser;
pub use string::{CaseSensitivity, CommentParser, StringParser};

/// Match one character passing the predicate, producing a
/// [`crate::LeafValue::Character`].
pub fn character(predicate: CharPredicate) -> CharacterParser {
    CharacterParser::new(predicate)
}

/// Match `literal`, producing a [`crate::LeafValue::String`] holding the text matched.
///
/// # Example
///
/// ```
/// use cursor_parser::{ Parser, IntoTextCursor, parsers, parsers::CaseSensitivity };
///
/// let parser = parsers::string("select", CaseSensitivity::Insensitive);
///
/// let mut cursor = "SELECT *".into_cursor();
/// let token = parser.parse(&mut cursor, &()).unwrap().unwrap();
/// assert_eq!(token.text(), "SELECT");
/// assert_eq!(parser.to_string(), "\"select\"");
/// ```
pub fn string(literal: impl Into<String>, case_sensitivity: CaseSensitivity) -> StringParser {
    StringParser::string(literal.into(), case_sensitivity)
}

/// Match between `min` and `max` characters passing the predicate, producing a
/// [`crate::LeafValue::String`]. At least one character is always required.
pub fn string_char_predicate(predicate: CharPredicate, min: usize, max: usize) -> StringCharPredicateParser {
    StringCharPredicateParser::new(predicate, min, max)
}

/// Match `literal` exactly, producing a [`crate::LeafValue::Symbol`].
pub fn symbol(literal: impl Into<String>) -> StringParser {
    StringParser::symbol(literal.into())
}

/// Match one or more whitespace characters, producing a [`crate::LeafValue::Whitespace`].
pub fn whitespace() -> WhitespaceParser {
    WhitespaceParser::new()
}

/// Match `start`, anything, then `end`, producing a [`crate::LeafValue::Comment`]
/// holding the text between the markers.
pub fn comment(start: impl Into<String>, end: impl Into<String>) -> CommentParser {
    CommentParser::new(start.into(), end.into())
}

/// Match text in single quotes, producing a [`crate::LeafValue::SingleQuoted`] holding
/// the unescaped content. See [`QuotedParser`] for the escapes understood.
pub fn single_quoted() -> QuotedParser {
    QuotedParser::single()
}

/// Match text in double quotes, producing a [`crate::LeafValue::DoubleQuoted`] holding
/// the unescaped content. See [`QuotedParser`] for the escapes understood.
pub fn double_quoted() -> QuotedParser {
    QuotedParser::double()
}

/// Match an optionally signed integer in the given radix, producing a
/// [`crate::LeafValue::Long`]. The signs come from the [`crate::DecimalNumberContext`].
/// A number too big for an `i64` does not match.
///
/// # Panics
///
/// Panics if `radix` is not between 2 and 36.
pub fn long(radix: u32) -> LongParser {
    LongParser::new(radix)
}

/// Match the context's positive or negative sign, producing a [`crate::LeafValue::Sign`].
pub fn sign() -> SignParser {
    SignParser
}

/// Match a decimal number written according to the [`crate::DecimalNumberContext`],
/// producing a [`crate::LeafValue::Decimal`].
///
/// # Example
///
/// ```
/// use cursor_parser::{ Parser, IntoTextCursor, parsers, DecimalNumberContexts, LeafValue };
/// use rust_decimal::Decimal;
///
/// let parser = parsers::decimal();
///
/// let mut cursor = "1,5E2 m".into_cursor();
/// let token = parser.parse(&mut cursor, &DecimalNumberContexts::german()).unwrap().unwrap();
///
/// assert_eq!(token.leaf().unwrap().value(), &LeafValue::Decimal(Decimal::from(150)));
/// assert_eq!(token.text(), "1,5E2");
/// ```
pub fn decimal() -> FormatterParser<DecimalFormatter, Decimal> {
    FormatterParser::new(DecimalFormatter, |value, text| ParserToken::decimal(value, text))
}

/// Match a date, producing a [`crate::LeafValue::LocalDate`].
pub fn local_date(formatter: DateTimeFormatter<NaiveDate>) -> FormatterParser<DateTimeFormatter<NaiveDate>, NaiveDate> {
    FormatterParser::new(formatter, |value, text| ParserToken::local_date(value, text))
}

/// Match a time, producing a [`crate::LeafValue::LocalTime`].
pub fn local_time(formatter: DateTimeFormatter<NaiveTime>) -> FormatterParser<DateTimeFormatter<NaiveTime>, NaiveTime> {
    FormatterParser::new(formatter, |value, text| ParserToken::local_time(value, text))
}

/// Match a date and time, producing a [`crate::LeafValue::LocalDateTime`].
pub fn local_date_time(
    formatter: DateTimeFormatter<NaiveDateTime>,
) -> FormatterParser<DateTimeFormatter<NaiveDateTime>, NaiveDateTime> {
    FormatterParser::new(formatter, |value, text| ParserToken::local_date_time(value, text))
}

/// Match a time with an offset, producing a [`crate::LeafValue::OffsetTime`].
///
/// # Example
///
/// ```
/// use cursor_parser::{ Parser, IntoTextCursor, parsers, DateTimeContexts };
/// use cursor_parser::format::DateTimeFormatter;
///
/// let parser = parsers::offset_time(DateTimeFormatter::pattern("%H:%M:%S%:z"));
///
/// let mut cursor = "12:58:59+10:00".into_cursor();
/// let token = parser.parse(&mut cursor, &DateTimeContexts::english(2000)).unwrap().unwrap();
/// assert_eq!(token.text(), "12:58:59+10:00");
/// assert!(cursor.is_empty());
/// ```
pub fn offset_time(formatter: DateTimeFormatter<OffsetTime>) -> FormatterParser<DateTimeFormatter<OffsetTime>, OffsetTime> {
    FormatterParser::new(formatter, |value, text| ParserToken::offset_time(value, text))
}

/// Match a date and time with an offset, producing a [`crate::LeafValue::OffsetDateTime`].
pub fn offset_date_time(
    formatter: DateTimeFormatter<DateTime<FixedOffset>>,
) -> FormatterParser<DateTimeFormatter<DateTime<FixedOffset>>, DateTime<FixedOffset>> {
    FormatterParser::new(formatter, |value, text| ParserToken::offset_date_time(value, text))
}

/// Start building a [`crate::combinators::SequenceParser`].
pub fn sequence<C>() -> SequenceParserBuilder<C> {
    SequenceParserBuilder::new()
}

/// Try each parser in turn, handing back the first match.
pub fn alternatives<C>(parsers: Vec<Box<dyn Parser<C>>>) -> AlternativesParser<C> {
    AlternativesParser::new(parsers)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::testing::*;
    use crate::ParserExt;

    #[test]
    fn alternatives_from_vec() {
        let parser = alternatives(vec![symbol("<").boxed(), symbol(">").boxed()]);
        parse_and_check(&parser, &(), "><", &ParserToken::symbol(">").unwrap(), "<");
        parse_fail_and_check(&parser, &(), "=");
    }

    #[test]
    fn empty_alternatives_never_match() {
        let parser = alternatives::<()>(vec![]);
        parse_fail_and_check(&parser, &(), "x");
        assert_eq!(parser.to_string(), "()");
    }
}
