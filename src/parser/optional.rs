use crate::{ParseResult, Parser, ParserToken, TextCursor};
use core::fmt;

/// Produced by running [`crate::ParserExt::optional`].
pub struct OptionalParser<P> {
    parser: P,
}

impl<P> OptionalParser<P> {
    pub(crate) fn new(parser: P) -> Self {
        Self { parser }
    }
}

impl<C, P: Parser<C>> Parser<C> for OptionalParser<P> {
    fn parse(&self, cursor: &mut TextCursor<'_>, context: &C) -> ParseResult {
        let save = cursor.save();
        let token = match self.parser.parse(cursor, context)? {
            Some(token) => ParserToken::optional(vec![token], save.text_between(cursor))?,
            None => {
                save.restore(cursor);
                ParserToken::optional(Vec::new(), "")?
            }
        };
        Ok(Some(token))
    }
}

impl<P: fmt::Display> fmt::Display for OptionalParser<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.parser)
    }
}

#[cfg(test)]
mod test {
    use crate::parsers::{self, CaseSensitivity};
    use crate::testing::*;
    use crate::{ParserExt, ParserToken};

    fn a() -> ParserToken {
        ParserToken::string("a", "a").unwrap()
    }

    #[test]
    fn optional_wraps_a_match() {
        let parser = parsers::string("a", CaseSensitivity::Sensitive).optional();
        parse_and_check(
            &parser,
            &(),
            "ab",
            &ParserToken::optional(vec![a()], "a").unwrap(),
            "b",
        );
    }

    #[test]
    fn optional_matches_nothing() {
        let parser = parsers::string("a", CaseSensitivity::Sensitive).optional();
        parse_and_check(&parser, &(), "b", &ParserToken::optional(vec![], "").unwrap(), "b");
        parse_and_check(&parser, &(), "", &ParserToken::optional(vec![], "").unwrap(), "");
    }

    #[test]
    fn optional_display() {
        let parser = parsers::string("a", CaseSensitivity::Sensitive).optional();
        assert_eq!(parser.to_string(), "[\"a\"]");
    }
}
