use crate::{ParseResult, Parser, TextCursor};
use core::fmt;

/// Tries each parser in turn, handing back the first match. Produced by running
/// [`crate::ParserExt::or`] or [`crate::parsers::alternatives`].
pub struct AlternativesParser<C> {
    parsers: Vec<Box<dyn Parser<C>>>,
}

impl<C> AlternativesParser<C> {
    pub(crate) fn new(parsers: Vec<Box<dyn Parser<C>>>) -> Self {
        Self { parsers }
    }

    /// Add another alternative, tried after those already present.
    pub fn or<P: Parser<C> + 'static>(mut self, parser: P) -> Self {
        self.parsers.push(Box::new(parser));
        self
    }
}

impl<C> Parser<C> for AlternativesParser<C> {
    fn parse(&self, cursor: &mut TextCursor<'_>, context: &C) -> ParseResult {
        let save = cursor.save();
        for parser in &self.parsers {
            if let Some(token) = parser.parse(cursor, context)? {
                return Ok(Some(token));
            }
            save.restore(cursor);
        }
        Ok(None)
    }
}

impl<C> fmt::Display for AlternativesParser<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("(")?;
        for (i, parser) in self.parsers.iter().enumerate() {
            if i > 0 {
                f.write_str(" | ")?;
            }
            fmt::Display::fmt(parser, f)?;
        }
        f.write_str(")")
    }
}
