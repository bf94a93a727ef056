use crate::{DecimalNumberContext, ParseResult, Parser, ParserToken, Sign, TextCursor};
use core::fmt;

/// Produced by running [`crate::parsers::long`].
#[derive(Clone, Debug)]
pub struct LongParser {
    radix: u32,
}

impl LongParser {
    pub(crate) fn new(radix: u32) -> Self {
        assert!((2..=36).contains(&radix), "radix must be between 2 and 36, got {radix}");
        Self { radix }
    }
}

impl<C: DecimalNumberContext> Parser<C> for LongParser {
    fn parse(&self, cursor: &mut TextCursor<'_>, context: &C) -> ParseResult {
        let save = cursor.save();

        let negative = match cursor.at() {
            Some(c) if c == context.negative_sign() => {
                cursor.next();
                true
            }
            Some(c) if c == context.positive_sign() => {
                cursor.next();
                false
            }
            _ => false,
        };

        let radix = i64::from(self.radix);
        let mut value: i64 = 0;
        let mut digits = 0;
        while let Some(digit) = cursor.at().and_then(|c| c.to_digit(self.radix)) {
            let digit = i64::from(digit);
            let next = value.checked_mul(radix).and_then(|v| {
                if negative {
                    v.checked_sub(digit)
                } else {
                    v.checked_add(digit)
                }
            });
            let Some(next) = next else {
                log::trace!("{} overflowed at offset {}", self, cursor.offset());
                save.restore(cursor);
                return Ok(None);
            };
            value = next;
            digits += 1;
            cursor.next();
        }

        if digits == 0 {
            save.restore(cursor);
            return Ok(None);
        }
        Ok(Some(ParserToken::long(value, save.text_between(cursor))?))
    }
}

impl fmt::Display for LongParser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.radix == 10 {
            f.write_str("long")
        } else {
            write!(f, "long radix {}", self.radix)
        }
    }
}

/// Produced by running [`crate::parsers::sign`].
#[derive(Clone, Copy, Debug, Default)]
pub struct SignParser;

impl<C: DecimalNumberContext> Parser<C> for SignParser {
    fn parse(&self, cursor: &mut TextCursor<'_>, context: &C) -> ParseResult {
        let sign = match cursor.at() {
            Some(c) if c == context.negative_sign() => Sign::Negative,
            Some(c) if c == context.positive_sign() => Sign::Positive,
            _ => return Ok(None),
        };
        let save = cursor.save();
        cursor.next();
        Ok(Some(ParserToken::sign(sign, save.text_between(cursor))?))
    }
}

impl fmt::Display for SignParser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("sign")
    }
}
