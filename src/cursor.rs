//! This module contains [`TextCursor`], the position tracking view over some input
//! text that every parser consumes characters from, and [`SavePoint`], which is used
//! to rewind a cursor after a parser fails to match.
//!
//! The [`IntoTextCursor`] trait is implemented for things that can be turned into a
//! cursor (for example `&str`).

/// A cursor over some input `&str`. Characters are consumed one at a time via
/// [`Iterator::next`], and the cursor can be rewound to any earlier position by
/// handing a [`SavePoint`] back to [`TextCursor::restore`].
///
/// # Example
///
/// ```
/// use cursor_parser::{ TextCursor, IntoTextCursor };
///
/// let mut cursor = "abc".into_cursor();
/// let save = cursor.save();
///
/// assert_eq!(cursor.next(), Some('a'));
/// assert_eq!(cursor.next(), Some('b'));
/// assert_eq!(save.text_between(&cursor), "ab");
///
/// save.restore(&mut cursor);
/// assert_eq!(cursor.remaining(), "abc");
/// ```
#[derive(Clone, Debug)]
pub struct TextCursor<'a> {
    text: &'a str,
    offset: usize,
}

/// Captures the position of a [`TextCursor`] at the time [`TextCursor::save`] was
/// called. The offset is a byte index into the text and not the nth character
/// (a character may be represented by several bytes).
#[derive(Clone, Copy, Eq, PartialEq, Hash, Ord, PartialOrd, Debug)]
pub struct SavePoint {
    offset: usize,
}

/// A human readable position in the text: both values are 1-based, and the column
/// counts characters rather than bytes.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug)]
pub struct LineInfo {
    /// Column number (1-indexed).
    pub column: usize,
    /// Row (line) number (1-indexed).
    pub row: usize,
}

impl<'a> TextCursor<'a> {
    /// Create a cursor positioned at the start of the given text.
    pub fn new(text: &'a str) -> Self {
        TextCursor { text, offset: 0 }
    }

    /// The character at the current position, without consuming it.
    ///
    /// # Example
    ///
    /// ```
    /// use cursor_parser::IntoTextCursor;
    ///
    /// let mut cursor = "ab".into_cursor();
    /// assert_eq!(cursor.at(), Some('a'));
    /// assert_eq!(cursor.at(), Some('a'));
    /// cursor.end();
    /// assert_eq!(cursor.at(), None);
    /// ```
    pub fn at(&self) -> Option<char> {
        self.remaining().chars().next()
    }

    /// Returns true if no characters remain.
    pub fn is_empty(&self) -> bool {
        self.offset == self.text.len()
    }

    /// The byte offset of the current position.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// The whole text this cursor was created over.
    pub fn text(&self) -> &'a str {
        self.text
    }

    /// Return the consumed portion of the text.
    pub fn consumed(&self) -> &'a str {
        &self.text[..self.offset]
    }

    /// Return the unconsumed remainder of the text.
    pub fn remaining(&self) -> &'a str {
        &self.text[self.offset..]
    }

    /// Move to the end of the text, leaving nothing remaining.
    pub fn end(&mut self) {
        self.offset = self.text.len();
    }

    /// Capture the current position so that it can later be restored.
    pub fn save(&self) -> SavePoint {
        SavePoint {
            offset: self.offset,
        }
    }

    /// Rewind (or fast forward) to a previously saved position.
    pub fn restore(&mut self, save: SavePoint) {
        debug_assert!(save.offset <= self.text.len());
        self.offset = save.offset;
    }

    /// Returns true if the cursor is currently at the position captured by `save`.
    pub fn is_at(&self, save: SavePoint) -> bool {
        self.offset == save.offset
    }

    /// Advance by `bytes`, which must land on a character boundary. Returns false and
    /// leaves the cursor untouched otherwise.
    pub(crate) fn advance(&mut self, bytes: usize) -> bool {
        let target = self.offset + bytes;
        if target > self.text.len() || !self.text.is_char_boundary(target) {
            return false;
        }
        self.offset = target;
        true
    }

    /// Return the column and row of the current position.
    ///
    /// # Example
    ///
    /// ```
    /// use cursor_parser::{ IntoTextCursor, LineInfo };
    ///
    /// let mut cursor = "ab\ncd".into_cursor();
    /// assert_eq!(cursor.line_info(), LineInfo { column: 1, row: 1 });
    ///
    /// cursor.end();
    /// assert_eq!(cursor.line_info(), LineInfo { column: 3, row: 2 });
    /// ```
    pub fn line_info(&self) -> LineInfo {
        let consumed = self.consumed();
        let row = consumed.matches('\n').count() + 1;
        let line_start = consumed.rfind('\n').map(|i| i + 1).unwrap_or(0);
        let column = consumed[line_start..].chars().count() + 1;
        LineInfo { column, row }
    }
}

impl<'a> Iterator for TextCursor<'a> {
    type Item = char;

    fn next(&mut self) -> Option<Self::Item> {
        let c = self.at()?;
        self.offset += c.len_utf8();
        Some(c)
    }
}

impl SavePoint {
    /// The byte offset this save point was taken at.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Rewind the cursor to this save point.
    pub fn restore(self, cursor: &mut TextCursor<'_>) {
        cursor.restore(self)
    }

    /// The text between this save point and the cursor's current position.
    /// If the cursor has been rewound to before this save point, the text between
    /// the two positions is still returned.
    pub fn text_between<'a>(&self, cursor: &TextCursor<'a>) -> &'a str {
        let from = usize::min(self.offset, cursor.offset);
        let to = usize::max(self.offset, cursor.offset);
        &cursor.text[from..to]
    }
}

/// A trait that is implemented by anything which can be converted into a [`TextCursor`].
pub trait IntoTextCursor<'a> {
    /// Convert into a cursor positioned at the start of the text.
    fn into_cursor(self) -> TextCursor<'a>;
}

impl<'a> IntoTextCursor<'a> for &'a str {
    fn into_cursor(self) -> TextCursor<'a> {
        TextCursor::new(self)
    }
}

impl<'a> IntoTextCursor<'a> for &'a String {
    fn into_cursor(self) -> TextCursor<'a> {
        TextCursor::new(self.as_str())
    }
}
