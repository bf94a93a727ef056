use crate::{ParseResult, Parser, ParserToken, TextCursor};
use core::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Quote {
    Single,
    Double,
}

impl Quote {
    fn char(self) -> char {
        match self {
            Quote::Single => '\'',
            Quote::Double => '"',
        }
    }
}

/// Produced by running [`crate::parsers::single_quoted`] or
/// [`crate::parsers::double_quoted`].
///
/// Within the quotes a backslash escapes the next character. `\b`, `\f`, `\n`, `\r`,
/// `\t` and `\0` are the usual control characters, `\uXXXX` is a unicode code point
/// given as four hex digits, and any other escaped character stands for itself.
/// Text with no closing quote, or with a broken `\u` escape, does not match.
#[derive(Clone, Debug)]
pub struct QuotedParser {
    quote: Quote,
}

impl QuotedParser {
    pub(crate) fn single() -> Self {
        Self { quote: Quote::Single }
    }

    pub(crate) fn double() -> Self {
        Self { quote: Quote::Double }
    }
}

impl<C> Parser<C> for QuotedParser {
    fn parse(&self, cursor: &mut TextCursor<'_>, _context: &C) -> ParseResult {
        let save = cursor.save();
        let Some(value) = unquote(cursor, self.quote.char()) else {
            save.restore(cursor);
            return Ok(None);
        };

        let text = save.text_between(cursor);
        let token = match self.quote {
            Quote::Single => ParserToken::single_quoted(value, text)?,
            Quote::Double => ParserToken::double_quoted(value, text)?,
        };
        Ok(Some(token))
    }
}

impl fmt::Display for QuotedParser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.quote {
            Quote::Single => f.write_str("single quoted"),
            Quote::Double => f.write_str("double quoted"),
        }
    }
}

fn unquote(cursor: &mut TextCursor<'_>, quote: char) -> Option<String> {
    if cursor.next()? != quote {
        return None;
    }

    let mut value = String::new();
    loop {
        match cursor.next()? {
            c if c == quote => return Some(value),
            '\\' => value.push(unescape(cursor)?),
            c => value.push(c),
        }
    }
}

fn unescape(cursor: &mut TextCursor<'_>) -> Option<char> {
    let c = match cursor.next()? {
        'b' => '\u{8}',
        'f' => '\u{c}',
        'n' => '\n',
        'r' => '\r',
        't' => '\t',
        '0' => '\0',
        'u' => {
            let mut code = 0;
            for _ in 0..4 {
                code = code * 16 + cursor.next()?.to_digit(16)?;
            }
            char::from_u32(code)?
        }
        c => c,
    };
    Some(c)
}
