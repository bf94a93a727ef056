use super::{LeafParserToken, LeafValue, OffsetTime, ParentKind, ParentParserToken, ParserToken, Sign};
use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime};
use rust_decimal::Decimal;

/// Returned from the `start_visit` methods of a [`ParserTokenVisitor`] to control
/// whether the children of a token are visited.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Visiting {
    /// Descend into the token.
    Continue,
    /// Do not descend into the token. Its `end_visit` methods are still called.
    Skip,
}

/// Walks a [`ParserToken`] tree via [`ParserToken::accept`]. Every method has a default
/// that does nothing (or returns [`Visiting::Continue`]), so implementations only
/// override what they care about.
///
/// For every token, [`ParserTokenVisitor::start_visit`] is called first and
/// [`ParserTokenVisitor::end_visit`] last. In between:
///
/// - for a leaf, the matching `visit_*` method is called once;
/// - for a parent, the matching `start_visit_*` method is called, then each child is
///   visited in order, then the matching `end_visit_*` method.
///
/// Returning [`Visiting::Skip`] from a `start_visit*` method skips everything nested
/// within it, but the paired `end_visit*` method still runs.
///
/// # Example
///
/// ```
/// use cursor_parser::{ ParserToken, ParserTokenVisitor, LeafParserToken };
///
/// #[derive(Default)]
/// struct SumLongs(i64);
///
/// impl ParserTokenVisitor for SumLongs {
///     fn visit_long(&mut self, value: i64, _token: &LeafParserToken) {
///         self.0 += value;
///     }
/// }
///
/// let token = ParserToken::sequence(
///     vec![
///         ParserToken::long(1, "1").unwrap(),
///         ParserToken::symbol("+").unwrap(),
///         ParserToken::long(2, "2").unwrap(),
///     ],
///     "1+2",
/// ).unwrap();
///
/// let mut sum = SumLongs::default();
/// token.accept(&mut sum);
/// assert_eq!(sum.0, 3);
/// ```
#[allow(unused_variables)]
pub trait ParserTokenVisitor {
    /// Called before anything else for every token.
    fn start_visit(&mut self, token: &ParserToken) -> Visiting {
        Visiting::Continue
    }

    /// Called after everything else for every token.
    fn end_visit(&mut self, token: &ParserToken) {}

    /// Called before the children of a [`ParentKind::Optional`] parent.
    fn start_visit_optional(&mut self, token: &ParentParserToken) -> Visiting {
        Visiting::Continue
    }

    /// Called after the children of a [`ParentKind::Optional`] parent.
    fn end_visit_optional(&mut self, token: &ParentParserToken) {}

    /// Called before the children of a [`ParentKind::Repeated`] parent.
    fn start_visit_repeated(&mut self, token: &ParentParserToken) -> Visiting {
        Visiting::Continue
    }

    /// Called after the children of a [`ParentKind::Repeated`] parent.
    fn end_visit_repeated(&mut self, token: &ParentParserToken) {}

    /// Called before the children of a [`ParentKind::Sequence`] parent.
    fn start_visit_sequence(&mut self, token: &ParentParserToken) -> Visiting {
        Visiting::Continue
    }

    /// Called after the children of a [`ParentKind::Sequence`] parent.
    fn end_visit_sequence(&mut self, token: &ParentParserToken) {}

    /// Called for a [`LeafValue::BigInteger`] leaf.
    fn visit_big_integer(&mut self, value: i128, token: &LeafParserToken) {}

    /// Called for a [`LeafValue::Character`] leaf.
    fn visit_character(&mut self, value: char, token: &LeafParserToken) {}

    /// Called for a [`LeafValue::Comment`] leaf.
    fn visit_comment(&mut self, value: &str, token: &LeafParserToken) {}

    /// Called for a [`LeafValue::Decimal`] leaf.
    fn visit_decimal(&mut self, value: Decimal, token: &LeafParserToken) {}

    /// Called for a [`LeafValue::DoubleQuoted`] leaf.
    fn visit_double_quoted(&mut self, value: &str, token: &LeafParserToken) {}

    /// Called for a [`LeafValue::LocalDate`] leaf.
    fn visit_local_date(&mut self, value: NaiveDate, token: &LeafParserToken) {}

    /// Called for a [`LeafValue::LocalDateTime`] leaf.
    fn visit_local_date_time(&mut self, value: NaiveDateTime, token: &LeafParserToken) {}

    /// Called for a [`LeafValue::LocalTime`] leaf.
    fn visit_local_time(&mut self, value: NaiveTime, token: &LeafParserToken) {}

    /// Called for a [`LeafValue::Long`] leaf.
    fn visit_long(&mut self, value: i64, token: &LeafParserToken) {}

    /// Called for a [`LeafValue::OffsetDateTime`] leaf.
    fn visit_offset_date_time(&mut self, value: DateTime<FixedOffset>, token: &LeafParserToken) {}

    /// Called for a [`LeafValue::OffsetTime`] leaf.
    fn visit_offset_time(&mut self, value: OffsetTime, token: &LeafParserToken) {}

    /// Called for a [`LeafValue::Sign`] leaf.
    fn visit_sign(&mut self, value: Sign, token: &LeafParserToken) {}

    /// Called for a [`LeafValue::SingleQuoted`] leaf.
    fn visit_single_quoted(&mut self, value: &str, token: &LeafParserToken) {}

    /// Called for a [`LeafValue::String`] leaf.
    fn visit_string(&mut self, value: &str, token: &LeafParserToken) {}

    /// Called for a [`LeafValue::Symbol`] leaf.
    fn visit_symbol(&mut self, value: &str, token: &LeafParserToken) {}

    /// Called for a [`LeafValue::Whitespace`] leaf.
    fn visit_whitespace(&mut self, value: &str, token: &LeafParserToken) {}
}

pub(super) fn accept<V: ParserTokenVisitor + ?Sized>(token: &ParserToken, visitor: &mut V) {
    if visitor.start_visit(token) == Visiting::Continue {
        match token {
            ParserToken::Leaf(leaf) => accept_leaf(leaf, visitor),
            ParserToken::Parent(parent) => accept_parent(parent, visitor),
        }
    }
    visitor.end_visit(token);
}

fn accept_leaf<V: ParserTokenVisitor + ?Sized>(token: &LeafParserToken, visitor: &mut V) {
    match &token.value {
        LeafValue::BigInteger(v) => visitor.visit_big_integer(*v, token),
        LeafValue::Character(v) => visitor.visit_character(*v, token),
        LeafValue::Comment(v) => visitor.visit_comment(v, token),
        LeafValue::Decimal(v) => visitor.visit_decimal(*v, token),
        LeafValue::DoubleQuoted(v) => visitor.visit_double_quoted(v, token),
        LeafValue::LocalDate(v) => visitor.visit_local_date(*v, token),
        LeafValue::LocalDateTime(v) => visitor.visit_local_date_time(*v, token),
        LeafValue::LocalTime(v) => visitor.visit_local_time(*v, token),
        LeafValue::Long(v) => visitor.visit_long(*v, token),
        LeafValue::OffsetDateTime(v) => visitor.visit_offset_date_time(*v, token),
        LeafValue::OffsetTime(v) => visitor.visit_offset_time(*v, token),
        LeafValue::Sign(v) => visitor.visit_sign(*v, token),
        LeafValue::SingleQuoted(v) => visitor.visit_single_quoted(v, token),
        LeafValue::String(v) => visitor.visit_string(v, token),
        LeafValue::Symbol(v) => visitor.visit_symbol(v, token),
        LeafValue::Whitespace(v) => visitor.visit_whitespace(v, token),
    }
}

fn accept_parent<V: ParserTokenVisitor + ?Sized>(token: &ParentParserToken, visitor: &mut V) {
    let visiting = match token.kind {
        ParentKind::Optional => visitor.start_visit_optional(token),
        ParentKind::Repeated => visitor.start_visit_repeated(token),
        ParentKind::Sequence => visitor.start_visit_sequence(token),
    };
    if visiting == Visiting::Continue {
        for child in &token.children {
            accept(child, visitor);
        }
    }
    match token.kind {
        ParentKind::Optional => visitor.end_visit_optional(token),
        ParentKind::Repeated => visitor.end_visit_repeated(token),
        ParentKind::Sequence => visitor.end_visit_sequence(token),
    }
}
