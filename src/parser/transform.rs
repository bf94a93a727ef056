use crate::{ParseResult, Parser, ParserError, ParserToken, TextCursor};
use core::fmt;

/// Produced by running [`crate::ParserExt::transform`].
pub struct TransformParser<P, F> {
    parser: P,
    f: F,
}

impl<P, F> TransformParser<P, F> {
    pub(crate) fn new(parser: P, f: F) -> Self {
        Self { parser, f }
    }
}

impl<C, P, F> Parser<C> for TransformParser<P, F>
where
    P: Parser<C>,
    F: Fn(ParserToken, &C) -> Result<ParserToken, ParserError> + Send + Sync,
{
    fn parse(&self, cursor: &mut TextCursor<'_>, context: &C) -> ParseResult {
        match self.parser.parse(cursor, context)? {
            Some(token) => Ok(Some((self.f)(token, context)?)),
            None => Ok(None),
        }
    }
}

impl<P: fmt::Display, F> fmt::Display for TransformParser<P, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.parser.fmt(f)
    }
}
