use crate::{ParseResult, Parser, ParserToken, TextCursor};
use core::fmt;

/// Produced by running [`crate::ParserExt::map`].
pub struct MapParser<P, F> {
    parser: P,
    f: F,
}

impl<P, F> MapParser<P, F> {
    pub(crate) fn new(parser: P, f: F) -> Self {
        Self { parser, f }
    }
}

impl<C, P, F> Parser<C> for MapParser<P, F>
where
    P: Parser<C>,
    F: Fn(ParserToken) -> ParserToken + Send + Sync,
{
    fn parse(&self, cursor: &mut TextCursor<'_>, context: &C) -> ParseResult {
        Ok(self.parser.parse(cursor, context)?.map(&self.f))
    }
}

impl<P: fmt::Display, F> fmt::Display for MapParser<P, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.parser.fmt(f)
    }
}
