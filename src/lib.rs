/*!
This crate helps you to build parsers for small, locale sensitive grammars (dates, times, numbers
and the like) out of little composable pieces, and hands back a faithful tree of exactly what was
matched.

The aim of this crate is to make backtracking boring. Every parser follows the same contract: given
a [`TextCursor`] and a context, it either matches and hands back a [`ParserToken`] (having advanced
the cursor past exactly the text of that token), or it does not match and leaves the cursor where
it found it. Only a parser that has been told it *must* match (see [`ParserExt::or_report`]) ever
returns an error.

**Some specific features/goals:**
- Backtracking by default. If a parser fails to match, it won't consume any input trying.
- Tokens are a faithful record of the input. A parent token's text is always the concatenation of
  its children's text, so the input can be rebuilt from the tree.
- Locale rules are passed in explicitly as a context value, never read from globals. Parsers say
  which rules they need via trait bounds (see [`DateTimeContext`] and [`DecimalNumberContext`]).
- Parsers are immutable once built, and can be shared between threads.
- Location information is always available, so that you can tell users where something went wrong.
  See [`TextCursor::line_info`].

Have a look at the [`Parser`] and [`ParserExt`] traits for combining parsers, the [`parsers`] module
for the building blocks, and [`ParserTokenVisitor`] for walking the resulting tree.

# Example

```rust
use cursor_parser::{
    // The core trait; `parse` is defined on it:
    Parser,
    // The combinators (`optional`, `repeated`, `or`...) live here:
    ParserExt,
    // Allows you to use `.into_cursor()` on strings:
    IntoTextCursor,
    parsers,
    BasicParserContext,
    BasicParserReporter,
    LeafParserToken,
    ParserTokenVisitor,
};
use cursor_parser::chars::CharPredicate;
use cursor_parser::format::DateTimeFormatter;
use rust_decimal::Decimal;

// Step 1: build a parser
// ======================

// A date, then a comma separated list of amounts, eg "31/12/1999: 1.5, -2".
let amount = parsers::decimal();
let separator = parsers::sequence()
    .required(parsers::symbol(","))
    .optional(parsers::whitespace())
    .build();

let parser = parsers::sequence()
    .required(parsers::local_date(DateTimeFormatter::short_date()))
    .required(parsers::symbol(":"))
    .optional(parsers::whitespace())
    .required(amount)
    .optional(
        parsers::sequence()
            .required(separator)
            .required(parsers::decimal().or_report(BasicParserReporter))
            .build()
            .repeated(),
    )
    .build()
    .or_fail_if_cursor_not_empty(BasicParserReporter);

// Step 2: parse some text
// =======================

let context = BasicParserContext::english(2000);

let mut cursor = "31/12/1999: 1.5, -2".into_cursor();
let token = parser.parse(&mut cursor, &context).unwrap().unwrap();

assert_eq!(token.text(), "31/12/1999: 1.5, -2");

// Step 3: walk the result
// =======================

#[derive(Default)]
struct Total(Decimal);

impl ParserTokenVisitor for Total {
    fn visit_decimal(&mut self, value: Decimal, _token: &LeafParserToken) {
        self.0 += value;
    }
}

let mut total = Total::default();
token.accept(&mut total);
assert_eq!(total.0, Decimal::new(-5, 1));

// Errors point at where things went wrong:
let mut cursor = "31/12/1999: 1.5, x".into_cursor();
let err = parser.parse(&mut cursor, &context).unwrap_err();
assert_eq!(err.to_string(), "Invalid character 'x' at (18,1) expected decimal");
```
*/
#![warn(missing_docs)]

mod context;
mod cursor;
mod error;
mod parser;
mod reporter;
mod token;

pub mod chars;
pub mod format;
pub mod functions;
pub mod parsers;
#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use context::{
    BasicParserContext, DateTimeContext, DateTimeContexts, DecimalNumberContext, DecimalNumberContexts,
    LocaleDateTimeContext, LocaleDecimalNumberContext, ParserContext,
};
pub use cursor::{IntoTextCursor, LineInfo, SavePoint, TextCursor};
pub use error::{InvalidTokenError, ParserError};
pub use parser::{ParseResult, Parser, ParserExt};
pub use reporter::{BasicParserReporter, ParserReporter};
pub use token::{
    LeafParserToken, LeafValue, OffsetTime, ParentKind, ParentParserToken, ParserToken, ParserTokenVisitor, Sign,
    Visiting,
};

/// The types handed back by the combinators on [`ParserExt`].
pub mod combinators {
    pub use crate::parser::{
        AlternativesParser, CursorNotEmptyParser, EmptyTextCursorParser, LabelledParser, MapParser, OptionalParser,
        RepeatedParser, ReportingParser, SequenceParser, SequenceParserBuilder, SequenceParserComponent,
        TransformParser,
    };
}
