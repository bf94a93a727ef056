//! Predicates over single characters, used by [`crate::parsers::character`] and
//! [`crate::parsers::string_char_predicate`].

use core::fmt;

/// A test on a single character, paired with a label describing it.
///
/// # Example
///
/// ```
/// use cursor_parser::chars::CharPredicate;
///
/// let hex = CharPredicate::digit()
///     .or(CharPredicate::range('a', 'f'))
///     .or(CharPredicate::range('A', 'F'));
///
/// assert!(hex.test('7'));
/// assert!(hex.test('c'));
/// assert!(!hex.test('g'));
/// assert_eq!(hex.to_string(), "digit | 'a'..'f' | 'A'..'F'");
/// ```
pub struct CharPredicate {
    label: String,
    test: Box<dyn Fn(char) -> bool + Send + Sync>,
}

impl CharPredicate {
    /// A predicate from any function.
    pub fn new<F>(label: impl Into<String>, test: F) -> Self
    where
        F: Fn(char) -> bool + Send + Sync + 'static,
    {
        CharPredicate {
            label: label.into(),
            test: Box::new(test),
        }
    }

    /// Matches exactly `c`.
    pub fn is(c: char) -> Self {
        Self::new(format!("{c:?}"), move |other| other == c)
    }

    /// Matches any of the characters given.
    pub fn any_of(chars: &str) -> Self {
        let chars: Vec<char> = chars.chars().collect();
        let label = format!("{:?}", chars.iter().collect::<String>());
        Self::new(label, move |c| chars.contains(&c))
    }

    /// Matches characters from `from` to `to`, inclusive.
    pub fn range(from: char, to: char) -> Self {
        Self::new(format!("{from:?}..{to:?}"), move |c| (from..=to).contains(&c))
    }

    /// Matches an ASCII digit.
    pub fn digit() -> Self {
        Self::new("digit", |c| c.is_ascii_digit())
    }

    /// Matches an alphabetic character.
    pub fn letter() -> Self {
        Self::new("letter", char::is_alphabetic)
    }

    /// Matches a whitespace character.
    pub fn whitespace() -> Self {
        Self::new("whitespace", char::is_whitespace)
    }

    /// Matches if either predicate does.
    pub fn or(self, other: CharPredicate) -> Self {
        let label = format!("{} | {}", self.label, other.label);
        Self::new(label, move |c| self.test(c) || other.test(c))
    }

    /// Replace the label.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Does the character pass?
    pub fn test(&self, c: char) -> bool {
        (self.test)(c)
    }
}

impl fmt::Display for CharPredicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}

impl fmt::Debug for CharPredicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("CharPredicate").field(&self.label).finish()
    }
}
