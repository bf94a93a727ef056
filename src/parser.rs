//! This module contains the core [`Parser`] trait. A parser consumes characters from a
//! [`TextCursor`] and hands back a [`ParserToken`] describing what it matched.
//!
//! The combinators live on [`ParserExt`] (like [`ParserExt::optional`] and
//! [`ParserExt::repeated`]), each wrapping one parser in another. Each returns a named
//! type from this module.
mod alternatives;
mod empty;
mod label;
mod map;
mod optional;
mod repeated;
mod report;
mod sequence;
mod transform;

use crate::{ParserError, ParserReporter, ParserToken, TextCursor};
use core::fmt;
use std::sync::Arc;

// Re-export the structs handed back from the combinator fns:
pub use alternatives::AlternativesParser;
pub use empty::EmptyTextCursorParser;
pub use label::LabelledParser;
pub use map::MapParser;
pub use optional::OptionalParser;
pub use repeated::RepeatedParser;
pub use report::{CursorNotEmptyParser, ReportingParser};
pub use sequence::{SequenceParser, SequenceParserBuilder, SequenceParserComponent};
pub use transform::TransformParser;

/// What [`Parser::parse`] hands back:
///
/// - `Ok(Some(token))` when something matched. The cursor has been advanced past exactly
///   the text of the token.
/// - `Ok(None)` when nothing matched. The cursor is where it was before the call.
/// - `Err(error)` when the input cannot be valid. This is never turned back into `Ok(None)`
///   by any combinator.
pub type ParseResult = Result<Option<ParserToken>, ParserError>;

/// Parse some text from a [`TextCursor`], given some context `C`.
///
/// A parser holds no state between calls, so one parser may be shared by many threads,
/// each using its own cursor and context. Its [`fmt::Display`] output is a short grammar
/// like description of what it matches, which is used in error messages.
///
/// Parsers that need nothing from the context implement `Parser<C>` for every `C`.
///
/// # Example
///
/// ```
/// use cursor_parser::{ Parser, ParserExt, IntoTextCursor, parsers };
///
/// let parser = parsers::string("ab", parsers::CaseSensitivity::Sensitive).repeated();
///
/// let mut cursor = "ababa".into_cursor();
/// let token = parser.parse(&mut cursor, &()).unwrap().unwrap();
///
/// assert_eq!(token.text(), "abab");
/// assert_eq!(cursor.remaining(), "a");
/// assert_eq!(parser.to_string(), "{\"ab\"}");
/// ```
pub trait Parser<C>: fmt::Display + Send + Sync {
    /// Attempt to parse something from the cursor. See [`ParseResult`] for what is returned.
    fn parse(&self, cursor: &mut TextCursor<'_>, context: &C) -> ParseResult;
}

impl<C, P> Parser<C> for Box<P>
where
    P: Parser<C> + ?Sized,
{
    fn parse(&self, cursor: &mut TextCursor<'_>, context: &C) -> ParseResult {
        (**self).parse(cursor, context)
    }
}

impl<C, P> Parser<C> for Arc<P>
where
    P: Parser<C> + ?Sized,
{
    fn parse(&self, cursor: &mut TextCursor<'_>, context: &C) -> ParseResult {
        (**self).parse(cursor, context)
    }
}

impl<C, P> Parser<C> for &P
where
    P: Parser<C> + ?Sized,
{
    fn parse(&self, cursor: &mut TextCursor<'_>, context: &C) -> ParseResult {
        (**self).parse(cursor, context)
    }
}

/// Combinators for building bigger parsers out of smaller ones. This is implemented for
/// every parser; the context type is worked out from how the result is used.
pub trait ParserExt: fmt::Display + Send + Sync + Sized {
    /// Replace the token produced on a match. The consumed text is unaffected, so the
    /// function should keep the token text the same.
    fn map<F>(self, f: F) -> MapParser<Self, F>
    where
        F: Fn(ParserToken) -> ParserToken + Send + Sync,
    {
        MapParser::new(self, f)
    }

    /// Like [`ParserExt::map`], except that the function also receives the context and
    /// may fail with a [`ParserError`].
    fn transform<C, F>(self, f: F) -> TransformParser<Self, F>
    where
        F: Fn(ParserToken, &C) -> Result<ParserToken, ParserError> + Send + Sync,
    {
        TransformParser::new(self, f)
    }

    /// Always match. The token is an [`crate::ParentKind::Optional`] holding whatever this
    /// parser matched, or nothing.
    ///
    /// # Example
    ///
    /// ```
    /// use cursor_parser::{ Parser, ParserExt, IntoTextCursor, parsers };
    ///
    /// let parser = parsers::symbol("-").optional();
    ///
    /// let mut cursor = "123".into_cursor();
    /// let token = parser.parse(&mut cursor, &()).unwrap().unwrap();
    ///
    /// assert_eq!(token.text(), "");
    /// assert!(token.parent().unwrap().value().is_empty());
    /// assert_eq!(cursor.remaining(), "123");
    /// ```
    fn optional(self) -> OptionalParser<Self> {
        OptionalParser::new(self)
    }

    /// Match this parser as many times as possible, producing a
    /// [`crate::ParentKind::Repeated`] token. Zero matches is still a match, unless a
    /// minimum is given via [`RepeatedParser::at_least`].
    fn repeated(self) -> RepeatedParser<Self> {
        RepeatedParser::new(self)
    }

    /// Try this parser, and if it does not match, try `other`.
    ///
    /// # Example
    ///
    /// ```
    /// use cursor_parser::{ Parser, ParserExt, IntoTextCursor, parsers };
    ///
    /// let parser = parsers::symbol("+").or(parsers::symbol("-"));
    ///
    /// let mut cursor = "-1".into_cursor();
    /// let token = parser.parse(&mut cursor, &()).unwrap().unwrap();
    ///
    /// assert_eq!(token.text(), "-");
    /// assert_eq!(parser.to_string(), "(\"+\" | \"-\")");
    /// ```
    fn or<C, P>(self, other: P) -> AlternativesParser<C>
    where
        Self: Parser<C> + 'static,
        P: Parser<C> + 'static,
    {
        AlternativesParser::new(vec![Box::new(self), Box::new(other)])
    }

    /// Replace the description returned by [`fmt::Display`].
    fn with_label(self, label: impl Into<String>) -> LabelledParser<Self> {
        LabelledParser::new(self, label.into())
    }

    /// Turn a failure to match into a [`ParserError`] created by the reporter.
    fn or_report<R: ParserReporter>(self, reporter: R) -> ReportingParser<Self, R> {
        ReportingParser::new(self, reporter)
    }

    /// Report an error via the reporter if, after a match, any text remains.
    fn or_fail_if_cursor_not_empty<R: ParserReporter>(self, reporter: R) -> CursorNotEmptyParser<Self, R> {
        CursorNotEmptyParser::new(self, reporter)
    }

    /// Only match if this parser consumes all of the remaining text.
    fn and_empty_text_cursor(self) -> EmptyTextCursorParser<Self> {
        EmptyTextCursorParser::new(self)
    }

    /// Box this parser, erasing its type.
    fn boxed<C>(self) -> Box<dyn Parser<C>>
    where
        Self: Parser<C> + 'static,
    {
        Box::new(self)
    }
}

impl<P: fmt::Display + Send + Sync> ParserExt for P {}
