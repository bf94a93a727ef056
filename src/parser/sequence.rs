use crate::{ParseResult, Parser, ParserToken, TextCursor};
use core::fmt;

/// One step of a [`SequenceParser`].
pub enum SequenceParserComponent<C> {
    /// The whole sequence fails to match if this does not match.
    Required(Box<dyn Parser<C>>),
    /// Skipped, without consuming anything, if this does not match.
    Optional(Box<dyn Parser<C>>),
}

impl<C> SequenceParserComponent<C> {
    /// Does a failure to match this component abort the sequence?
    pub fn abort_if_missing(&self) -> bool {
        matches!(self, SequenceParserComponent::Required(_))
    }

    /// The wrapped parser.
    pub fn parser(&self) -> &dyn Parser<C> {
        match self {
            SequenceParserComponent::Required(parser) | SequenceParserComponent::Optional(parser) => &**parser,
        }
    }

    fn parse(&self, cursor: &mut TextCursor<'_>, context: &C) -> ParseResult {
        let save = cursor.save();
        let token = self.parser().parse(cursor, context)?;
        if token.is_none() {
            save.restore(cursor);
        }
        Ok(token)
    }
}

impl<C> fmt::Display for SequenceParserComponent<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SequenceParserComponent::Required(parser) => fmt::Display::fmt(parser, f),
            SequenceParserComponent::Optional(parser) => write!(f, "[{parser}]"),
        }
    }
}

/// Assembles a [`SequenceParser`] one component at a time. Created by
/// [`crate::parsers::sequence`].
pub struct SequenceParserBuilder<C> {
    components: Vec<SequenceParserComponent<C>>,
}

impl<C> SequenceParserBuilder<C> {
    pub(crate) fn new() -> Self {
        Self {
            components: Vec::new(),
        }
    }

    /// Append a component that must match.
    pub fn required<P: Parser<C> + 'static>(mut self, parser: P) -> Self {
        self.components
            .push(SequenceParserComponent::Required(Box::new(parser)));
        self
    }

    /// Append a component that may be absent.
    pub fn optional<P: Parser<C> + 'static>(mut self, parser: P) -> Self {
        self.components
            .push(SequenceParserComponent::Optional(Box::new(parser)));
        self
    }

    /// Append an already built component.
    pub fn component(mut self, component: SequenceParserComponent<C>) -> Self {
        self.components.push(component);
        self
    }

    /// Finish building.
    pub fn build(self) -> SequenceParser<C> {
        SequenceParser {
            components: self.components,
        }
    }
}

/// Matches each of its components in order, producing a [`crate::ParentKind::Sequence`]
/// token holding the tokens of every component that matched.
///
/// If a required component does not match, the cursor is put back to where the sequence
/// started and nothing is matched. An optional component that does not match is left out
/// of the result. A sequence whose components are all optional and all missing still
/// matches, with no children and empty text.
///
/// # Example
///
/// ```
/// use cursor_parser::{ Parser, IntoTextCursor, parsers, chars::CharPredicate };
///
/// let parser = parsers::sequence()
///     .optional(parsers::symbol("-"))
///     .required(parsers::character(CharPredicate::digit()))
///     .build();
///
/// let mut cursor = "-1".into_cursor();
/// let token = parser.parse(&mut cursor, &()).unwrap().unwrap();
/// assert_eq!(token.parent().unwrap().value().len(), 2);
///
/// let mut cursor = "1".into_cursor();
/// let token = parser.parse(&mut cursor, &()).unwrap().unwrap();
/// assert_eq!(token.parent().unwrap().value().len(), 1);
///
/// let mut cursor = "-x".into_cursor();
/// assert_eq!(parser.parse(&mut cursor, &()).unwrap(), None);
/// assert_eq!(cursor.remaining(), "-x");
///
/// assert_eq!(parser.to_string(), "([\"-\"], digit)");
/// ```
pub struct SequenceParser<C> {
    components: Vec<SequenceParserComponent<C>>,
}

impl<C> SequenceParser<C> {
    /// The components, in the order they are matched.
    pub fn components(&self) -> &[SequenceParserComponent<C>] {
        &self.components
    }
}

impl<C> Parser<C> for SequenceParser<C> {
    fn parse(&self, cursor: &mut TextCursor<'_>, context: &C) -> ParseResult {
        let start = cursor.save();
        let mut tokens = Vec::with_capacity(self.components.len());

        for component in &self.components {
            match component.parse(cursor, context)? {
                Some(token) => tokens.push(token),
                None if component.abort_if_missing() => {
                    log::trace!(
                        "{} missing required {} at offset {}",
                        self,
                        component,
                        cursor.offset()
                    );
                    start.restore(cursor);
                    return Ok(None);
                }
                None => {}
            }
        }

        Ok(Some(ParserToken::sequence(tokens, start.text_between(cursor))?))
    }
}

impl<C> fmt::Display for SequenceParser<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("(")?;
        for (i, component) in self.components.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            fmt::Display::fmt(component, f)?;
        }
        f.write_str(")")
    }
}

#[cfg(test)]
mod test {
    use crate::chars::CharPredicate;
    use crate::parsers::{self, CaseSensitivity};
    use crate::reporter::BasicParserReporter;
    use crate::testing::*;
    use crate::{ParserExt, ParserToken};

    fn string(s: &'static str) -> crate::parsers::StringParser {
        parsers::string(s, CaseSensitivity::Sensitive)
    }

    fn token(s: &str) -> ParserToken {
        ParserToken::string(s, s).unwrap()
    }

    #[test]
    fn all_required_components_match() {
        let parser = parsers::sequence()
            .required(string("a"))
            .required(string("b"))
            .build();

        parse_and_check(
            &parser,
            &(),
            "abc",
            &ParserToken::sequence(vec![token("a"), token("b")], "ab").unwrap(),
            "c",
        );
    }

    #[test]
    fn missing_optional_is_left_out() {
        let parser = parsers::sequence()
            .optional(string("a"))
            .required(string("b"))
            .build();

        parse_and_check(
            &parser,
            &(),
            "bc",
            &ParserToken::sequence(vec![token("b")], "b").unwrap(),
            "c",
        );
    }

    #[test]
    fn missing_required_restores_cursor() {
        let parser = parsers::sequence()
            .required(string("a"))
            .optional(string("b"))
            .required(string("c"))
            .build();

        parse_fail_and_check(&parser, &(), "abx");
        parse_fail_and_check(&parser, &(), "ax");
        parse_fail_and_check(&parser, &(), "");
    }

    #[test]
    fn all_optional_all_missing_is_empty() {
        let parser = parsers::sequence()
            .optional(string("a"))
            .optional(string("b"))
            .build();

        parse_and_check(&parser, &(), "x", &ParserToken::sequence(vec![], "").unwrap(), "x");
    }

    #[test]
    fn partially_matched_optional_is_rewound() {
        let inner = parsers::sequence()
            .required(string("a"))
            .required(string("b"))
            .build();
        let parser = parsers::sequence()
            .optional(inner)
            .required(string("a"))
            .build();

        parse_and_check(
            &parser,
            &(),
            "ax",
            &ParserToken::sequence(vec![token("a")], "a").unwrap(),
            "x",
        );
    }

    #[test]
    fn required_reporting_component_at_end_of_text() {
        let parser = parsers::sequence()
            .required(string("a").or_report(BasicParserReporter))
            .build();

        parse_throws_end_of_text(&parser, &(), "", 1, 1);
        parse_throws_end_of_text(&parser, &(), "xy", 3, 1);
    }

    #[test]
    fn fatal_error_in_later_component_propagates() {
        let parser = parsers::sequence()
            .required(string("a"))
            .required(parsers::character(CharPredicate::digit()).or_report(BasicParserReporter))
            .build();

        parse_throws(&parser, &(), "ax", "Invalid character 'x' at (2,1) expected digit");
    }

    #[test]
    fn display_marks_optional_components() {
        let parser = parsers::sequence::<()>()
            .required(string("a"))
            .optional(string("b"))
            .required(string("c"))
            .build();

        assert_eq!(parser.to_string(), "(\"a\", [\"b\"], \"c\")");
    }
}
