//! The immutable tree of matched syntax handed back by parsers.
//!
//! Every [`ParserToken`] is exactly one of two shapes:
//!
//! - a [`LeafParserToken`], holding a single scalar [`LeafValue`] plus the text it was parsed from, or
//! - a [`ParentParserToken`], holding an ordered list of child tokens whose texts concatenate to its own.
//!
//! Tokens are only created through the factory functions on [`ParserToken`] (one per kind),
//! and are never mutated afterwards.
mod visitor;

use crate::error::InvalidTokenError;
use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime};
use core::fmt;
use rust_decimal::Decimal;

pub use visitor::{ParserTokenVisitor, Visiting};

/// A node in the parse result tree.
#[derive(Clone, Debug, PartialEq)]
pub enum ParserToken {
    /// A scalar value and the text it came from.
    Leaf(LeafParserToken),
    /// An ordered list of child tokens.
    Parent(ParentParserToken),
}

/// A token carrying one scalar value.
#[derive(Clone, Debug, PartialEq)]
pub struct LeafParserToken {
    value: LeafValue,
    text: String,
}

/// A token carrying an ordered list of children.
#[derive(Clone, Debug, PartialEq)]
pub struct ParentParserToken {
    kind: ParentKind,
    children: Vec<ParserToken>,
    text: String,
}

/// The value held by a [`LeafParserToken`]. The variant is also the kind of the token.
#[derive(Clone, Debug, PartialEq)]
pub enum LeafValue {
    /// An integer too wide for [`LeafValue::Long`], or one written with a radix prefix.
    BigInteger(i128),
    /// A single character.
    Character(char),
    /// The body of a comment.
    Comment(String),
    /// A decimal number.
    Decimal(Decimal),
    /// The unescaped content of a `"double quoted"` string.
    DoubleQuoted(String),
    /// A date without a time or offset.
    LocalDate(NaiveDate),
    /// A date and time without an offset.
    LocalDateTime(NaiveDateTime),
    /// A time without an offset.
    LocalTime(NaiveTime),
    /// A 64 bit integer.
    Long(i64),
    /// A date and time with a fixed offset.
    OffsetDateTime(DateTime<FixedOffset>),
    /// A time with a fixed offset.
    OffsetTime(OffsetTime),
    /// A plus or minus sign.
    Sign(Sign),
    /// The unescaped content of a `'single quoted'` string.
    SingleQuoted(String),
    /// Some matched string.
    String(String),
    /// A syntactic marker such as a separator or bracket.
    Symbol(String),
    /// One or more whitespace characters.
    Whitespace(String),
}

/// The kinds of [`ParentParserToken`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ParentKind {
    /// Zero or one child, produced by [`crate::ParserExt::optional`].
    Optional,
    /// Zero or more children, produced by [`crate::ParserExt::repeated`].
    Repeated,
    /// The matched components of a [`crate::parsers::sequence`].
    Sequence,
}

/// The value of a sign token.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Sign {
    /// `+`
    Positive,
    /// `-`
    Negative,
}

/// A time of day paired with a fixed offset from UTC, eg `12:58:59+10:00`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct OffsetTime {
    /// The local time.
    pub time: NaiveTime,
    /// The offset from UTC.
    pub offset: FixedOffset,
}

impl fmt::Display for OffsetTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.time, self.offset)
    }
}

impl LeafValue {
    /// The name of this kind of leaf.
    pub fn kind_name(&self) -> &'static str {
        match self {
            LeafValue::BigInteger(_) => "BigInteger",
            LeafValue::Character(_) => "Character",
            LeafValue::Comment(_) => "Comment",
            LeafValue::Decimal(_) => "Decimal",
            LeafValue::DoubleQuoted(_) => "DoubleQuoted",
            LeafValue::LocalDate(_) => "LocalDate",
            LeafValue::LocalDateTime(_) => "LocalDateTime",
            LeafValue::LocalTime(_) => "LocalTime",
            LeafValue::Long(_) => "Long",
            LeafValue::OffsetDateTime(_) => "OffsetDateTime",
            LeafValue::OffsetTime(_) => "OffsetTime",
            LeafValue::Sign(_) => "Sign",
            LeafValue::SingleQuoted(_) => "SingleQuoted",
            LeafValue::String(_) => "String",
            LeafValue::Symbol(_) => "Symbol",
            LeafValue::Whitespace(_) => "Whitespace",
        }
    }
}

impl ParentKind {
    /// The name of this kind of parent.
    pub fn kind_name(&self) -> &'static str {
        match self {
            ParentKind::Optional => "Optional",
            ParentKind::Repeated => "Repeated",
            ParentKind::Sequence => "Sequence",
        }
    }
}

// Factories. There is exactly one per kind of token, and each validates its text.
impl ParserToken {
    /// Create a [`LeafValue::BigInteger`] token.
    pub fn big_integer(value: i128, text: impl Into<String>) -> Result<Self, InvalidTokenError> {
        Self::new_leaf(LeafValue::BigInteger(value), text)
    }

    /// Create a [`LeafValue::Character`] token.
    pub fn character(value: char, text: impl Into<String>) -> Result<Self, InvalidTokenError> {
        Self::new_leaf(LeafValue::Character(value), text)
    }

    /// Create a [`LeafValue::Comment`] token.
    pub fn comment(value: impl Into<String>, text: impl Into<String>) -> Result<Self, InvalidTokenError> {
        Self::new_leaf(LeafValue::Comment(value.into()), text)
    }

    /// Create a [`LeafValue::Decimal`] token.
    pub fn decimal(value: Decimal, text: impl Into<String>) -> Result<Self, InvalidTokenError> {
        Self::new_leaf(LeafValue::Decimal(value), text)
    }

    /// Create a [`LeafValue::DoubleQuoted`] token.
    pub fn double_quoted(value: impl Into<String>, text: impl Into<String>) -> Result<Self, InvalidTokenError> {
        Self::new_leaf(LeafValue::DoubleQuoted(value.into()), text)
    }

    /// Create a [`LeafValue::LocalDate`] token.
    pub fn local_date(value: NaiveDate, text: impl Into<String>) -> Result<Self, InvalidTokenError> {
        Self::new_leaf(LeafValue::LocalDate(value), text)
    }

    /// Create a [`LeafValue::LocalDateTime`] token.
    pub fn local_date_time(value: NaiveDateTime, text: impl Into<String>) -> Result<Self, InvalidTokenError> {
        Self::new_leaf(LeafValue::LocalDateTime(value), text)
    }

    /// Create a [`LeafValue::LocalTime`] token.
    pub fn local_time(value: NaiveTime, text: impl Into<String>) -> Result<Self, InvalidTokenError> {
        Self::new_leaf(LeafValue::LocalTime(value), text)
    }

    /// Create a [`LeafValue::Long`] token.
    ///
    /// # Example
    ///
    /// ```
    /// use cursor_parser::{ ParserToken, LeafValue };
    ///
    /// let token = ParserToken::long(123, "123").unwrap();
    /// assert_eq!(token.text(), "123");
    /// assert_eq!(token.leaf().unwrap().value(), &LeafValue::Long(123));
    ///
    /// // Every leaf must carry the text it matched:
    /// assert!(ParserToken::long(123, "").is_err());
    /// ```
    pub fn long(value: i64, text: impl Into<String>) -> Result<Self, InvalidTokenError> {
        Self::new_leaf(LeafValue::Long(value), text)
    }

    /// Create a [`LeafValue::OffsetDateTime`] token.
    pub fn offset_date_time(value: DateTime<FixedOffset>, text: impl Into<String>) -> Result<Self, InvalidTokenError> {
        Self::new_leaf(LeafValue::OffsetDateTime(value), text)
    }

    /// Create a [`LeafValue::OffsetTime`] token.
    pub fn offset_time(value: OffsetTime, text: impl Into<String>) -> Result<Self, InvalidTokenError> {
        Self::new_leaf(LeafValue::OffsetTime(value), text)
    }

    /// Create a [`LeafValue::Sign`] token.
    pub fn sign(value: Sign, text: impl Into<String>) -> Result<Self, InvalidTokenError> {
        Self::new_leaf(LeafValue::Sign(value), text)
    }

    /// Create a [`LeafValue::SingleQuoted`] token.
    pub fn single_quoted(value: impl Into<String>, text: impl Into<String>) -> Result<Self, InvalidTokenError> {
        Self::new_leaf(LeafValue::SingleQuoted(value.into()), text)
    }

    /// Create a [`LeafValue::String`] token.
    pub fn string(value: impl Into<String>, text: impl Into<String>) -> Result<Self, InvalidTokenError> {
        Self::new_leaf(LeafValue::String(value.into()), text)
    }

    /// Create a [`LeafValue::Symbol`] token; its value is its text.
    pub fn symbol(text: impl Into<String>) -> Result<Self, InvalidTokenError> {
        let text = text.into();
        Self::new_leaf(LeafValue::Symbol(text.clone()), text)
    }

    /// Create a [`LeafValue::Whitespace`] token; its value is its text.
    pub fn whitespace(text: impl Into<String>) -> Result<Self, InvalidTokenError> {
        let text = text.into();
        Self::new_leaf(LeafValue::Whitespace(text.clone()), text)
    }

    /// Create a [`ParentKind::Optional`] token.
    pub fn optional(children: Vec<ParserToken>, text: impl Into<String>) -> Result<Self, InvalidTokenError> {
        Self::new_parent(ParentKind::Optional, children, text)
    }

    /// Create a [`ParentKind::Repeated`] token.
    pub fn repeated(children: Vec<ParserToken>, text: impl Into<String>) -> Result<Self, InvalidTokenError> {
        Self::new_parent(ParentKind::Repeated, children, text)
    }

    /// Create a [`ParentKind::Sequence`] token. The text must be the concatenation of the
    /// text of each child.
    ///
    /// # Example
    ///
    /// ```
    /// use cursor_parser::ParserToken;
    ///
    /// let a = ParserToken::character('a', "a").unwrap();
    /// let b = ParserToken::character('b', "b").unwrap();
    ///
    /// let ab = ParserToken::sequence(vec![a.clone(), b.clone()], "ab").unwrap();
    /// assert_eq!(ab.text(), "ab");
    ///
    /// assert!(ParserToken::sequence(vec![a, b], "ba").is_err());
    /// ```
    pub fn sequence(children: Vec<ParserToken>, text: impl Into<String>) -> Result<Self, InvalidTokenError> {
        Self::new_parent(ParentKind::Sequence, children, text)
    }

    fn new_leaf(value: LeafValue, text: impl Into<String>) -> Result<Self, InvalidTokenError> {
        let text = text.into();
        if text.is_empty() {
            return Err(InvalidTokenError::EmptyText {
                kind: value.kind_name(),
            });
        }
        Ok(ParserToken::Leaf(LeafParserToken { value, text }))
    }

    fn new_parent(kind: ParentKind, children: Vec<ParserToken>, text: impl Into<String>) -> Result<Self, InvalidTokenError> {
        let text = text.into();
        let expected: String = children.iter().map(ParserToken::text).collect();
        if text != expected {
            return Err(InvalidTokenError::TextMismatch {
                kind: kind.kind_name(),
                text,
                expected,
            });
        }
        Ok(ParserToken::Parent(ParentParserToken {
            kind,
            children,
            text,
        }))
    }
}

impl ParserToken {
    /// The text this token was parsed from.
    pub fn text(&self) -> &str {
        match self {
            ParserToken::Leaf(leaf) => leaf.text(),
            ParserToken::Parent(parent) => parent.text(),
        }
    }

    /// The name of this kind of token, eg `Long` or `Sequence`.
    pub fn kind_name(&self) -> &'static str {
        match self {
            ParserToken::Leaf(leaf) => leaf.value.kind_name(),
            ParserToken::Parent(parent) => parent.kind.kind_name(),
        }
    }

    /// Is this a leaf token?
    pub fn is_leaf(&self) -> bool {
        matches!(self, ParserToken::Leaf(_))
    }

    /// Is this a parent token?
    pub fn is_parent(&self) -> bool {
        matches!(self, ParserToken::Parent(_))
    }

    /// Return the leaf, if this is one.
    pub fn leaf(&self) -> Option<&LeafParserToken> {
        match self {
            ParserToken::Leaf(leaf) => Some(leaf),
            ParserToken::Parent(_) => None,
        }
    }

    /// Return the parent, if this is one.
    pub fn parent(&self) -> Option<&ParentParserToken> {
        match self {
            ParserToken::Leaf(_) => None,
            ParserToken::Parent(parent) => Some(parent),
        }
    }

    /// Syntactic markers. Whitespace is always a symbol.
    pub fn is_symbol(&self) -> bool {
        matches!(
            self.leaf().map(LeafParserToken::value),
            Some(LeafValue::Symbol(_) | LeafValue::Whitespace(_))
        )
    }

    /// True only for whitespace tokens.
    pub fn is_whitespace(&self) -> bool {
        matches!(self.leaf().map(LeafParserToken::value), Some(LeafValue::Whitespace(_)))
    }

    /// Tokens that a consumer may discard without losing anything meaningful: whitespace,
    /// symbols and comments.
    pub fn is_noise(&self) -> bool {
        self.is_symbol() || matches!(self.leaf().map(LeafParserToken::value), Some(LeafValue::Comment(_)))
    }

    /// Walk this token and any children with the given visitor. See [`ParserTokenVisitor`].
    pub fn accept<V: ParserTokenVisitor + ?Sized>(&self, visitor: &mut V) {
        visitor::accept(self, visitor)
    }
}

impl LeafParserToken {
    /// The scalar value.
    pub fn value(&self) -> &LeafValue {
        &self.value
    }

    /// The text this token was parsed from.
    pub fn text(&self) -> &str {
        &self.text
    }
}

impl ParentParserToken {
    /// The kind of parent.
    pub fn kind(&self) -> ParentKind {
        self.kind
    }

    /// The children, in the order they were matched.
    pub fn value(&self) -> &[ParserToken] {
        &self.children
    }

    /// Take ownership of the children.
    pub fn into_value(self) -> Vec<ParserToken> {
        self.children
    }

    /// The concatenated text of the children.
    pub fn text(&self) -> &str {
        &self.text
    }
}

impl From<LeafParserToken> for ParserToken {
    fn from(leaf: LeafParserToken) -> Self {
        ParserToken::Leaf(leaf)
    }
}

impl From<ParentParserToken> for ParserToken {
    fn from(parent: ParentParserToken) -> Self {
        ParserToken::Parent(parent)
    }
}

impl fmt::Display for ParserToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text())
    }
}
