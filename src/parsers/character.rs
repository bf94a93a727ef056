use crate::chars::CharPredicate;
use crate::{ParseResult, Parser, ParserToken, TextCursor};
use core::fmt;

/// Produced by running [`crate::parsers::character`].
#[derive(Debug)]
pub struct CharacterParser {
    predicate: CharPredicate,
}

impl CharacterParser {
    pub(crate) fn new(predicate: CharPredicate) -> Self {
        Self { predicate }
    }
}

impl<C> Parser<C> for CharacterParser {
    fn parse(&self, cursor: &mut TextCursor<'_>, _context: &C) -> ParseResult {
        let save = cursor.save();
        match cursor.next() {
            Some(c) if self.predicate.test(c) => Ok(Some(ParserToken::character(c, save.text_between(cursor))?)),
            _ => {
                save.restore(cursor);
                Ok(None)
            }
        }
    }
}

impl fmt::Display for CharacterParser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.predicate, f)
    }
}

/// Produced by running [`crate::parsers::string_char_predicate`].
#[derive(Debug)]
pub struct StringCharPredicateParser {
    predicate: CharPredicate,
    min: usize,
    max: usize,
}

impl StringCharPredicateParser {
    pub(crate) fn new(predicate: CharPredicate, min: usize, max: usize) -> Self {
        Self {
            predicate,
            min: min.max(1),
            max,
        }
    }
}

impl<C> Parser<C> for StringCharPredicateParser {
    fn parse(&self, cursor: &mut TextCursor<'_>, _context: &C) -> ParseResult {
        let save = cursor.save();
        let count = take_while(cursor, &self.predicate, self.max);
        if count < self.min {
            save.restore(cursor);
            return Ok(None);
        }
        let text = save.text_between(cursor);
        Ok(Some(ParserToken::string(text, text)?))
    }
}

impl fmt::Display for StringCharPredicateParser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.max == usize::MAX {
            write!(f, "{}{{{},}}", self.predicate, self.min)
        } else {
            write!(f, "{}{{{},{}}}", self.predicate, self.min, self.max)
        }
    }
}

/// Produced by running [`crate::parsers::whitespace`].
#[derive(Debug)]
pub struct WhitespaceParser {
    predicate: CharPredicate,
}

impl WhitespaceParser {
    pub(crate) fn new() -> Self {
        Self {
            predicate: CharPredicate::whitespace(),
        }
    }
}

impl<C> Parser<C> for WhitespaceParser {
    fn parse(&self, cursor: &mut TextCursor<'_>, _context: &C) -> ParseResult {
        let save = cursor.save();
        if take_while(cursor, &self.predicate, usize::MAX) == 0 {
            return Ok(None);
        }
        Ok(Some(ParserToken::whitespace(save.text_between(cursor))?))
    }
}

impl fmt::Display for WhitespaceParser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.predicate, f)
    }
}

// Consume up to `max` characters passing the predicate, returning how many were consumed.
fn take_while(cursor: &mut TextCursor<'_>, predicate: &CharPredicate, max: usize) -> usize {
    let mut count = 0;
    while count < max {
        match cursor.at() {
            Some(c) if predicate.test(c) => {
                cursor.next();
                count += 1;
            }
            _ => break,
        }
    }
    count
}

#[cfg(test)]
mod test {
    use crate::chars::CharPredicate;
    use crate::parsers;
    use crate::testing::*;
    use crate::ParserToken;

    #[test]
    fn character_matches_one() {
        let parser = parsers::character(CharPredicate::digit());
        parse_and_check(&parser, &(), "12", &ParserToken::character('1', "1").unwrap(), "2");
        parse_fail_and_check(&parser, &(), "a");
        parse_fail_and_check(&parser, &(), "");
    }

    #[test]
    fn character_handles_multibyte() {
        let parser = parsers::character(CharPredicate::is('🌏'));
        parse_and_check(&parser, &(), "🌏!", &ParserToken::character('🌏', "🌏").unwrap(), "!");
    }

    #[test]
    fn string_char_predicate_bounds() {
        let parser = parsers::string_char_predicate(CharPredicate::digit(), 2, 3);

        parse_and_check(&parser, &(), "12345", &ParserToken::string("123", "123").unwrap(), "45");
        parse_and_check(&parser, &(), "12a", &ParserToken::string("12", "12").unwrap(), "a");
        parse_fail_and_check(&parser, &(), "1a");
        assert_eq!(parser.to_string(), "digit{2,3}");
    }

    #[test]
    fn string_char_predicate_never_matches_nothing() {
        let parser = parsers::string_char_predicate(CharPredicate::digit(), 0, usize::MAX);
        parse_fail_and_check(&parser, &(), "a");
        assert_eq!(parser.to_string(), "digit{1,}");
    }

    #[test]
    fn whitespace_is_greedy() {
        let parser = parsers::whitespace();
        parse_and_check(&parser, &(), " \t\nx", &ParserToken::whitespace(" \t\n").unwrap(), "x");
        parse_fail_and_check(&parser, &(), "x ");
    }
}
