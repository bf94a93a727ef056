//! Assertions for testing parsers. Available in this crate's own tests, and to other
//! crates with the `testing` feature enabled.
//!
//! Each `parse_*` function runs a parser over some text with a fresh cursor and panics
//! with a description of what went wrong if the outcome is not the one expected.
//!
//! # Example
//!
//! ```
//! use cursor_parser::{ parsers, ParserToken };
//! use cursor_parser::testing::{ parse_and_check, parse_fail_and_check };
//!
//! let parser = parsers::symbol("->");
//!
//! parse_and_check(&parser, &(), "->x", &ParserToken::symbol("->").unwrap(), "x");
//! parse_fail_and_check(&parser, &(), "-x");
//! ```

use crate::{
    IntoTextCursor, LeafParserToken, ParentParserToken, Parser, ParserError, ParserToken, ParserTokenVisitor, TextCursor,
    Visiting,
};

/// Parse `text`, which must match. The token must equal `expected` (compared via
/// [`dump`]), the cursor must have consumed exactly the token text, and `text_after`
/// must be what remains. The token is also checked with [`check_token`].
pub fn parse_and_check<C, P>(parser: &P, context: &C, text: &str, expected: &ParserToken, text_after: &str) -> ParserToken
where
    P: Parser<C> + ?Sized,
{
    let mut cursor = text.into_cursor();
    let token = match parser.parse(&mut cursor, context) {
        Ok(Some(token)) => token,
        Ok(None) => panic!("{parser} did not match {text:?}"),
        Err(e) => panic!("{parser} failed on {text:?}: {e}"),
    };

    check_equals(&token, expected);
    assert_eq!(cursor.consumed(), token.text(), "{parser} consumed text differing from its token");
    assert_eq!(cursor.remaining(), text_after, "{parser} left the wrong text");
    check_token(&token);
    token
}

/// Parse `text`, which must not match, leaving the cursor where it started.
pub fn parse_fail_and_check<C, P>(parser: &P, context: &C, text: &str)
where
    P: Parser<C> + ?Sized,
{
    let mut cursor = text.into_cursor();
    match parser.parse(&mut cursor, context) {
        Ok(None) => {}
        Ok(Some(token)) => panic!("{parser} matched {:?} in {text:?}", token.text()),
        Err(e) => panic!("{parser} failed on {text:?}: {e}"),
    }
    assert_eq!(cursor.offset(), 0, "{parser} moved the cursor without matching {text:?}");
}

/// Parse `text`, which must fail with an error whose message contains `message_part`.
pub fn parse_throws<C, P>(parser: &P, context: &C, text: &str, message_part: &str) -> ParserError
where
    P: Parser<C> + ?Sized,
{
    let mut cursor = text.into_cursor();
    parse_throws_cursor(parser, context, &mut cursor, message_part)
}

/// Move to the end of `text`, then parse, which must fail with an end of text error
/// at the given column and row.
pub fn parse_throws_end_of_text<C, P>(parser: &P, context: &C, text: &str, column: usize, row: usize) -> ParserError
where
    P: Parser<C> + ?Sized,
{
    let mut cursor = text.into_cursor();
    cursor.end();
    parse_throws_cursor(parser, context, &mut cursor, &end_of_text(column, row))
}

fn parse_throws_cursor<C, P>(parser: &P, context: &C, cursor: &mut TextCursor<'_>, message_part: &str) -> ParserError
where
    P: Parser<C> + ?Sized,
{
    match parser.parse(cursor, context) {
        Err(e) => {
            let message = e.to_string();
            assert!(
                message.contains(message_part),
                "{parser} failed with {message:?}, expected it to contain {message_part:?}"
            );
            e
        }
        Ok(Some(token)) => panic!("{parser} matched {:?} but should have failed", token.text()),
        Ok(None) => panic!("{parser} did not match but should have failed"),
    }
}

/// The message of an end of text error at the given position.
pub fn end_of_text(column: usize, row: usize) -> String {
    ParserError::EndOfText { column, row }.to_string()
}

/// Assert that two tokens are equal, showing both as a [`dump`] if not.
pub fn check_equals(actual: &ParserToken, expected: &ParserToken) {
    let actual = dump(actual);
    let expected = dump(expected);
    assert!(actual == expected, "tokens differ\nactual:\n{actual}\nexpected:\n{expected}");
}

/// Print a token tree, one token per line with children indented.
///
/// ```
/// use cursor_parser::ParserToken;
/// use cursor_parser::testing::dump;
///
/// let token = ParserToken::sequence(
///     vec![ParserToken::long(1, "1").unwrap(), ParserToken::symbol("+").unwrap()],
///     "1+",
/// ).unwrap();
///
/// assert_eq!(dump(&token), "Sequence \"1+\"\n  Long(1) \"1\"\n  Symbol(\"+\") \"+\"\n");
/// ```
pub fn dump(token: &ParserToken) -> String {
    let mut dumper = Dumper::default();
    token.accept(&mut dumper);
    dumper.out
}

#[derive(Default)]
struct Dumper {
    out: String,
    depth: usize,
}

impl Dumper {
    fn line(&mut self, line: core::fmt::Arguments<'_>) {
        for _ in 0..self.depth {
            self.out.push_str("  ");
        }
        self.out.push_str(&line.to_string());
        self.out.push('\n');
    }
}

impl ParserTokenVisitor for Dumper {
    fn start_visit(&mut self, token: &ParserToken) -> Visiting {
        match token {
            ParserToken::Leaf(leaf) => self.line(format_args!("{:?} {:?}", leaf.value(), leaf.text())),
            ParserToken::Parent(parent) => {
                self.line(format_args!("{} {:?}", parent.kind().kind_name(), parent.text()));
                self.depth += 1;
            }
        }
        Visiting::Continue
    }

    fn end_visit(&mut self, token: &ParserToken) {
        if token.is_parent() {
            self.depth -= 1;
        }
    }
}

/// Assert the rules every token follows:
///
/// - it is exactly one of leaf or parent;
/// - a leaf has some text, and a parent's text is the concatenation of its children;
/// - whitespace is also a symbol, and both are noise;
/// - its `Display` output is its text;
/// - a visitor skipping the token sees only its start and end.
///
/// Children are checked too.
pub fn check_token(token: &ParserToken) {
    assert_ne!(token.is_leaf(), token.is_parent(), "{} is both or neither leaf and parent", token.kind_name());
    assert_eq!(token.to_string(), token.text());

    if token.is_whitespace() {
        assert!(token.is_symbol(), "whitespace must be a symbol");
    }
    if token.is_symbol() {
        assert!(token.is_noise(), "symbols must be noise");
    }

    match token {
        ParserToken::Leaf(leaf) => check_leaf(leaf),
        ParserToken::Parent(parent) => check_parent(parent),
    }

    let mut skipping = SkipCounter::default();
    token.accept(&mut skipping);
    assert_eq!((skipping.starts, skipping.ends, skipping.others), (1, 1, 0), "skipping {} visited more", token.kind_name());
}

fn check_leaf(leaf: &LeafParserToken) {
    assert!(!leaf.text().is_empty(), "{} has no text", leaf.value().kind_name());
}

fn check_parent(parent: &ParentParserToken) {
    let children: String = parent.value().iter().map(ParserToken::text).collect();
    assert_eq!(parent.text(), children, "{} text is not its children's", parent.kind().kind_name());
    for child in parent.value() {
        check_token(child);
    }
}

#[derive(Default)]
struct SkipCounter {
    starts: usize,
    ends: usize,
    others: usize,
}

impl ParserTokenVisitor for SkipCounter {
    fn start_visit(&mut self, _token: &ParserToken) -> Visiting {
        self.starts += 1;
        Visiting::Skip
    }

    fn end_visit(&mut self, _token: &ParserToken) {
        self.ends += 1;
    }

    fn start_visit_sequence(&mut self, _token: &ParentParserToken) -> Visiting {
        self.others += 1;
        Visiting::Continue
    }

    fn start_visit_repeated(&mut self, _token: &ParentParserToken) -> Visiting {
        self.others += 1;
        Visiting::Continue
    }

    fn start_visit_optional(&mut self, _token: &ParentParserToken) -> Visiting {
        self.others += 1;
        Visiting::Continue
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::parsers;

    #[test]
    fn dump_indents_children() {
        let token = ParserToken::repeated(
            vec![ParserToken::optional(vec![ParserToken::character('a', "a").unwrap()], "a").unwrap()],
            "a",
        )
        .unwrap();
        assert_eq!(dump(&token), "Repeated \"a\"\n  Optional \"a\"\n    Character('a') \"a\"\n");
    }

    #[test]
    fn end_of_text_message() {
        assert_eq!(end_of_text(4, 2), "End of text at (4,2)");
    }

    #[test]
    #[should_panic(expected = "did not match")]
    fn parse_and_check_panics_on_no_match() {
        parse_and_check(&parsers::symbol("a"), &(), "b", &ParserToken::symbol("a").unwrap(), "");
    }

    #[test]
    #[should_panic(expected = "tokens differ")]
    fn check_equals_panics_on_difference() {
        check_equals(&ParserToken::long(1, "1").unwrap(), &ParserToken::big_integer(1, "1").unwrap());
    }
}
