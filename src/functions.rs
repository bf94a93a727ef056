//! Token transformers, for use with [`crate::ParserExt::transform`].

use crate::{ParserError, ParserToken};

/// Turn a sequence of a radix prefix and some digits into a
/// [`crate::LeafValue::BigInteger`]. The last character of the prefix picks the radix:
/// `x` for 16, `o` for 8 and `b` for 2 (in either case). Any other prefix means 10.
///
/// # Example
///
/// ```
/// use cursor_parser::{ Parser, ParserExt, IntoTextCursor, parsers, functions, LeafValue };
/// use cursor_parser::chars::CharPredicate;
/// use cursor_parser::parsers::CaseSensitivity;
///
/// let parser = parsers::sequence()
///     .required(parsers::string("0x", CaseSensitivity::Insensitive))
///     .required(parsers::string_char_predicate(
///         CharPredicate::digit().or(CharPredicate::range('a', 'f')),
///         1,
///         usize::MAX,
///     ))
///     .build()
///     .transform(functions::prefixed_number);
///
/// let mut cursor = "0xff".into_cursor();
/// let token = parser.parse(&mut cursor, &()).unwrap().unwrap();
///
/// assert_eq!(token.leaf().unwrap().value(), &LeafValue::BigInteger(255));
/// assert_eq!(token.text(), "0xff");
/// ```
pub fn prefixed_number<C>(token: ParserToken, _context: &C) -> Result<ParserToken, ParserError> {
    let error = |reason: &str| ParserError::Transform {
        text: token.text().to_string(),
        reason: reason.to_string(),
    };

    let [prefix, digits] = token
        .parent()
        .map(|parent| parent.value())
        .unwrap_or_default()
    else {
        return Err(error("expected a prefix followed by digits"));
    };

    let radix = match prefix.text().chars().last().map(|c| c.to_ascii_lowercase()) {
        Some('x') => 16,
        Some('o') => 8,
        Some('b') => 2,
        _ => 10,
    };
    let value = i128::from_str_radix(digits.text(), radix).map_err(|e| error(&e.to_string()))?;

    Ok(ParserToken::big_integer(value, token.text())?)
}

#[cfg(test)]
mod test {
    use super::*;

    fn number(prefix: &str, digits: &str) -> ParserToken {
        ParserToken::sequence(
            vec![
                ParserToken::string(prefix, prefix).unwrap(),
                ParserToken::string(digits, digits).unwrap(),
            ],
            format!("{prefix}{digits}"),
        )
        .unwrap()
    }

    #[test]
    fn radix_from_prefix() {
        let cases = [("0x", "1F", 31), ("0X", "10", 16), ("0o", "17", 15), ("0b", "101", 5), ("#", "99", 99)];
        for (prefix, digits, expected) in cases {
            let token = prefixed_number(number(prefix, digits), &()).unwrap();
            assert_eq!(token, ParserToken::big_integer(expected, format!("{prefix}{digits}")).unwrap());
        }
    }

    #[test]
    fn wider_than_long() {
        let token = prefixed_number(number("0x", "ffffffffffffffffff"), &()).unwrap();
        assert_eq!(token, ParserToken::big_integer(0xff_ffff_ffff_ffff_ffff, "0xffffffffffffffffff").unwrap());
    }

    #[test]
    fn bad_shapes_fail() {
        let leaf = ParserToken::long(1, "1").unwrap();
        assert!(matches!(prefixed_number(leaf, &()), Err(ParserError::Transform { .. })));

        let bad_digits = number("0b", "12");
        assert!(matches!(prefixed_number(bad_digits, &()), Err(ParserError::Transform { .. })));
    }
}
