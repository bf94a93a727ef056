use crate::{ParseResult, Parser, TextCursor};
use core::fmt;

/// Produced by running [`crate::ParserExt::and_empty_text_cursor`].
pub struct EmptyTextCursorParser<P> {
    parser: P,
}

impl<P> EmptyTextCursorParser<P> {
    pub(crate) fn new(parser: P) -> Self {
        Self { parser }
    }
}

impl<C, P: Parser<C>> Parser<C> for EmptyTextCursorParser<P> {
    fn parse(&self, cursor: &mut TextCursor<'_>, context: &C) -> ParseResult {
        let save = cursor.save();
        match self.parser.parse(cursor, context)? {
            Some(token) if cursor.is_empty() => Ok(Some(token)),
            _ => {
                save.restore(cursor);
                Ok(None)
            }
        }
    }
}

impl<P: fmt::Display> fmt::Display for EmptyTextCursorParser<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.parser.fmt(f)
    }
}

#[cfg(test)]
mod test {
    use crate::parsers::{self, CaseSensitivity};
    use crate::testing::*;
    use crate::{ParserExt, ParserToken};

    #[test]
    fn matches_only_when_everything_is_consumed() {
        let parser = parsers::string("ab", CaseSensitivity::Sensitive).and_empty_text_cursor();

        parse_and_check(&parser, &(), "ab", &ParserToken::string("ab", "ab").unwrap(), "");
        parse_fail_and_check(&parser, &(), "abc");
        parse_fail_and_check(&parser, &(), "x");
    }
}
