//! The two error channels: [`ParserError`] for unrecoverable failures while parsing,
//! and [`InvalidTokenError`] for tokens that break a construction rule.
//!
//! An ordinary failure to match is neither of these; parsers report that by
//! returning `Ok(None)`.

use crate::cursor::LineInfo;

/// A fatal parse failure. Once raised this propagates through every enclosing
/// parser unchanged.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ParserError {
    /// The text ended where more input was required.
    #[error("End of text at ({column},{row})")]
    EndOfText {
        /// 1-based column.
        column: usize,
        /// 1-based row.
        row: usize,
    },
    /// A character was found that the named parser did not accept.
    #[error("Invalid character {character:?} at ({column},{row}) expected {expected}")]
    InvalidCharacter {
        /// The offending character.
        character: char,
        /// 1-based column.
        column: usize,
        /// 1-based row.
        row: usize,
        /// Label of the parser that was expected to match.
        expected: String,
    },
    /// A token transformer was handed a token it cannot handle.
    #[error("Unable to transform {text:?}: {reason}")]
    Transform {
        /// Text of the token given to the transformer.
        text: String,
        /// What was wrong with it.
        reason: String,
    },
    /// A parser tried to build a token that breaks a construction rule.
    #[error(transparent)]
    InvalidToken(#[from] InvalidTokenError),
}

impl ParserError {
    /// End of text at the given position.
    pub fn end_of_text(line_info: LineInfo) -> Self {
        ParserError::EndOfText {
            column: line_info.column,
            row: line_info.row,
        }
    }

    /// An unexpected character at the given position.
    pub fn invalid_character(character: char, line_info: LineInfo, expected: impl Into<String>) -> Self {
        ParserError::InvalidCharacter {
            character,
            column: line_info.column,
            row: line_info.row,
            expected: expected.into(),
        }
    }
}

/// Raised by the [`crate::ParserToken`] factories when their arguments break a
/// construction rule.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidTokenError {
    /// Every leaf token must carry the text it matched.
    #[error("{kind} text must not be empty")]
    EmptyText {
        /// Name of the token kind.
        kind: &'static str,
    },
    /// A parent token's text must be the concatenation of its children's text.
    #[error("{kind} text {text:?} is not the concatenation of its children {expected:?}")]
    TextMismatch {
        /// Name of the token kind.
        kind: &'static str,
        /// The text that was given.
        text: String,
        /// The concatenated text of the children.
        expected: String,
    },
}
