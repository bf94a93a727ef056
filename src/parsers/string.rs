use crate::{ParseResult, Parser, ParserToken, TextCursor};
use core::fmt;

/// Whether letters must match in case.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CaseSensitivity {
    /// `a` only matches `a`.
    Sensitive,
    /// `a` matches `a` or `A`.
    Insensitive,
}

impl CaseSensitivity {
    fn matches(self, expected: char, actual: char) -> bool {
        match self {
            CaseSensitivity::Sensitive => expected == actual,
            CaseSensitivity::Insensitive => expected == actual || expected.to_lowercase().eq(actual.to_lowercase()),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Output {
    String,
    Symbol,
}

/// Produced by running [`crate::parsers::string`] or [`crate::parsers::symbol`].
/// An empty literal never matches.
#[derive(Clone, Debug)]
pub struct StringParser {
    literal: String,
    case_sensitivity: CaseSensitivity,
    output: Output,
}

impl StringParser {
    pub(crate) fn string(literal: String, case_sensitivity: CaseSensitivity) -> Self {
        Self {
            literal,
            case_sensitivity,
            output: Output::String,
        }
    }

    pub(crate) fn symbol(literal: String) -> Self {
        Self {
            literal,
            case_sensitivity: CaseSensitivity::Sensitive,
            output: Output::Symbol,
        }
    }
}

impl<C> Parser<C> for StringParser {
    fn parse(&self, cursor: &mut TextCursor<'_>, _context: &C) -> ParseResult {
        if self.literal.is_empty() {
            return Ok(None);
        }

        let save = cursor.save();
        for expected in self.literal.chars() {
            match cursor.next() {
                Some(actual) if self.case_sensitivity.matches(expected, actual) => {}
                _ => {
                    save.restore(cursor);
                    return Ok(None);
                }
            }
        }

        let text = save.text_between(cursor);
        let token = match self.output {
            Output::String => ParserToken::string(text, text)?,
            Output::Symbol => ParserToken::symbol(text)?,
        };
        Ok(Some(token))
    }
}

impl fmt::Display for StringParser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.literal)
    }
}

/// Produced by running [`crate::parsers::comment`].
#[derive(Clone, Debug)]
pub struct CommentParser {
    start: String,
    end: String,
}

impl CommentParser {
    pub(crate) fn new(start: String, end: String) -> Self {
        Self { start, end }
    }
}

impl<C> Parser<C> for CommentParser {
    fn parse(&self, cursor: &mut TextCursor<'_>, _context: &C) -> ParseResult {
        if self.start.is_empty() || self.end.is_empty() {
            return Ok(None);
        }
        let Some(after_start) = cursor.remaining().strip_prefix(self.start.as_str()) else {
            return Ok(None);
        };
        let Some(body_len) = after_start.find(self.end.as_str()) else {
            return Ok(None);
        };

        let save = cursor.save();
        if !cursor.advance(self.start.len() + body_len + self.end.len()) {
            return Ok(None);
        }
        let body = &after_start[..body_len];
        Ok(Some(ParserToken::comment(body, save.text_between(cursor))?))
    }
}

impl fmt::Display for CommentParser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}..{:?}", self.start, self.end)
    }
}
