use crate::{ParseResult, Parser, ParserReporter, TextCursor};
use core::fmt;

/// Produced by running [`crate::ParserExt::or_report`].
pub struct ReportingParser<P, R> {
    parser: P,
    reporter: R,
}

impl<P, R> ReportingParser<P, R> {
    pub(crate) fn new(parser: P, reporter: R) -> Self {
        Self { parser, reporter }
    }
}

impl<C, P: Parser<C>, R: ParserReporter> Parser<C> for ReportingParser<P, R> {
    fn parse(&self, cursor: &mut TextCursor<'_>, context: &C) -> ParseResult {
        match self.parser.parse(cursor, context)? {
            Some(token) => Ok(Some(token)),
            None => Err(self.reporter.report(cursor, &self.parser)),
        }
    }
}

impl<P: fmt::Display, R> fmt::Display for ReportingParser<P, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.parser.fmt(f)
    }
}

/// Produced by running [`crate::ParserExt::or_fail_if_cursor_not_empty`].
pub struct CursorNotEmptyParser<P, R> {
    parser: P,
    reporter: R,
}

impl<P, R> CursorNotEmptyParser<P, R> {
    pub(crate) fn new(parser: P, reporter: R) -> Self {
        Self { parser, reporter }
    }
}

impl<C, P: Parser<C>, R: ParserReporter> Parser<C> for CursorNotEmptyParser<P, R> {
    fn parse(&self, cursor: &mut TextCursor<'_>, context: &C) -> ParseResult {
        let token = self.parser.parse(cursor, context)?;
        if token.is_some() && !cursor.is_empty() {
            return Err(self.reporter.report(cursor, &self.parser));
        }
        Ok(token)
    }
}

impl<P: fmt::Display, R> fmt::Display for CursorNotEmptyParser<P, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.parser.fmt(f)
    }
}

#[cfg(test)]
mod test {
    use crate::parsers::{self, CaseSensitivity};
    use crate::reporter::BasicParserReporter;
    use crate::testing::*;
    use crate::{ParserExt, ParserToken};

    #[test]
    fn report_turns_non_match_into_error() {
        let parser = parsers::string("abc", CaseSensitivity::Sensitive).or_report(BasicParserReporter);

        parse_and_check(&parser, &(), "abc", &ParserToken::string("abc", "abc").unwrap(), "");
        parse_throws(&parser, &(), "abx", "Invalid character 'a' at (1,1) expected \"abc\"");
        parse_throws_end_of_text(&parser, &(), "ab", 3, 1);
    }

    #[test]
    fn trailing_text_is_reported() {
        let parser = parsers::string("ab", CaseSensitivity::Sensitive)
            .or_fail_if_cursor_not_empty(BasicParserReporter);

        parse_and_check(&parser, &(), "ab", &ParserToken::string("ab", "ab").unwrap(), "");
        parse_throws(&parser, &(), "ab\nc", "Invalid character '\\n' at (3,1)");
    }

    #[test]
    fn non_match_is_not_reported_for_trailing_text() {
        let parser = parsers::string("ab", CaseSensitivity::Sensitive)
            .or_fail_if_cursor_not_empty(BasicParserReporter);

        parse_fail_and_check(&parser, &(), "xy");
    }
}
