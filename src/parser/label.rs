use crate::{ParseResult, Parser, TextCursor};
use core::fmt;

/// Produced by running [`crate::ParserExt::with_label`].
pub struct LabelledParser<P> {
    parser: P,
    label: String,
}

impl<P> LabelledParser<P> {
    pub(crate) fn new(parser: P, label: String) -> Self {
        Self { parser, label }
    }
}

impl<C, P: Parser<C>> Parser<C> for LabelledParser<P> {
    fn parse(&self, cursor: &mut TextCursor<'_>, context: &C) -> ParseResult {
        self.parser.parse(cursor, context)
    }
}

impl<P> fmt::Display for LabelledParser<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}
