use crate::{ParseResult, Parser, ParserToken, TextCursor};
use core::fmt;

/// Produced by running [`crate::ParserExt::repeated`].
pub struct RepeatedParser<P> {
    parser: P,
    min: usize,
}

impl<P> RepeatedParser<P> {
    pub(crate) fn new(parser: P) -> Self {
        Self { parser, min: 0 }
    }

    /// Require at least `min` matches. Fewer is an ordinary non-match.
    ///
    /// # Example
    ///
    /// ```
    /// use cursor_parser::{ Parser, ParserExt, IntoTextCursor, parsers, chars::CharPredicate };
    ///
    /// let digits = parsers::character(CharPredicate::digit()).repeated().at_least(1);
    ///
    /// let mut cursor = "x".into_cursor();
    /// assert_eq!(digits.parse(&mut cursor, &()).unwrap(), None);
    ///
    /// let mut cursor = "12x".into_cursor();
    /// assert_eq!(digits.parse(&mut cursor, &()).unwrap().unwrap().text(), "12");
    /// ```
    pub fn at_least(mut self, min: usize) -> Self {
        self.min = min;
        self
    }
}

impl<C, P: Parser<C>> Parser<C> for RepeatedParser<P> {
    fn parse(&self, cursor: &mut TextCursor<'_>, context: &C) -> ParseResult {
        let start = cursor.save();
        let mut tokens = Vec::new();

        loop {
            let before = cursor.save();
            match self.parser.parse(cursor, context)? {
                Some(token) => {
                    tokens.push(token);
                    // A match that consumed nothing would match forever.
                    if cursor.is_at(before) {
                        break;
                    }
                }
                None => {
                    before.restore(cursor);
                    break;
                }
            }
        }

        if tokens.len() < self.min {
            log::trace!(
                "{} matched {} times, needed at least {}",
                self,
                tokens.len(),
                self.min
            );
            start.restore(cursor);
            return Ok(None);
        }

        Ok(Some(ParserToken::repeated(tokens, start.text_between(cursor))?))
    }
}

impl<P: fmt::Display> fmt::Display for RepeatedParser<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{}}}", self.parser)
    }
}

#[cfg(test)]
mod test {
    use crate::chars::CharPredicate;
    use crate::parsers::{self, CaseSensitivity};
    use crate::testing::*;
    use crate::{ParserExt, ParserToken};

    fn a() -> ParserToken {
        ParserToken::character('a', "a").unwrap()
    }

    #[test]
    fn repeated_collects_each_match() {
        let parser = parsers::character(CharPredicate::is('a')).repeated();
        parse_and_check(
            &parser,
            &(),
            "aaab",
            &ParserToken::repeated(vec![a(), a(), a()], "aaa").unwrap(),
            "b",
        );
    }

    #[test]
    fn repeated_matches_zero_times() {
        let parser = parsers::character(CharPredicate::is('a')).repeated();
        parse_and_check(&parser, &(), "b", &ParserToken::repeated(vec![], "").unwrap(), "b");
    }

    #[test]
    fn at_least_fails_without_consuming() {
        let parser = parsers::character(CharPredicate::is('a')).repeated().at_least(3);
        parse_fail_and_check(&parser, &(), "aab");
        parse_and_check(
            &parser,
            &(),
            "aaa",
            &ParserToken::repeated(vec![a(), a(), a()], "aaa").unwrap(),
            "",
        );
    }

    #[test]
    fn zero_width_match_stops_repetition() {
        // The inner parser always matches, consuming nothing on "b".
        let parser = parsers::string("a", CaseSensitivity::Sensitive).optional().repeated();
        parse_and_check(
            &parser,
            &(),
            "b",
            &ParserToken::repeated(vec![ParserToken::optional(vec![], "").unwrap()], "").unwrap(),
            "b",
        );
    }

    #[test]
    fn zero_width_match_after_real_matches() {
        let parser = parsers::string("a", CaseSensitivity::Sensitive).optional().repeated();
        let one = ParserToken::optional(vec![ParserToken::string("a", "a").unwrap()], "a").unwrap();
        let none = ParserToken::optional(vec![], "").unwrap();
        parse_and_check(
            &parser,
            &(),
            "aab",
            &ParserToken::repeated(vec![one.clone(), one, none], "aa").unwrap(),
            "b",
        );
    }

    #[test]
    fn repeated_display() {
        let parser = parsers::character(CharPredicate::is('a')).repeated();
        assert_eq!(parser.to_string(), "{'a'}");
    }
}
