use super::TextFormatter;
use crate::DecimalNumberContext;
use core::fmt;
use core::str::FromStr;
use rust_decimal::Decimal;

/// Reads a decimal number using the separator, exponent symbol and signs of a
/// [`DecimalNumberContext`]: an optional sign, digits, an optional separator followed by
/// more digits, and an optional exponent. The exponent symbol is matched ignoring case.
///
/// A separator or exponent that is not followed by digits is left unread, as is an
/// exponent that would take the value out of the range of a [`Decimal`].
#[derive(Clone, Copy, Debug, Default)]
pub struct DecimalFormatter;

impl<C: DecimalNumberContext> TextFormatter<C> for DecimalFormatter {
    type Value = Decimal;

    fn parse_prefix<'t>(&self, text: &'t str, context: &C) -> Option<(Decimal, &'t str)> {
        let mut normalized = String::new();
        let mut rest = text;

        if let Some(r) = rest.strip_prefix(context.negative_sign()) {
            normalized.push('-');
            rest = r;
        } else if let Some(r) = rest.strip_prefix(context.positive_sign()) {
            rest = r;
        }

        let (integer, r) = split_digits(rest);
        normalized.push_str(integer);
        rest = r;

        let mut fraction = "";
        if let Some(r) = rest.strip_prefix(context.decimal_separator()) {
            let (digits, r) = split_digits(r);
            if !digits.is_empty() {
                fraction = digits;
                normalized.push('.');
                normalized.push_str(digits);
                rest = r;
            }
        }

        if integer.is_empty() && fraction.is_empty() {
            return None;
        }

        let mut value = Decimal::from_str(&normalized).ok()?;
        if let Some((exponent, r)) = exponent(rest, context.exponent_symbol()) {
            if let Ok(scaled) = Decimal::from_scientific(&format!("{normalized}e{exponent}")) {
                value = scaled;
                rest = r;
            }
        }
        Some((value, rest))
    }
}

impl fmt::Display for DecimalFormatter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("decimal")
    }
}

fn split_digits(text: &str) -> (&str, &str) {
    let end = text.find(|c: char| !c.is_ascii_digit()).unwrap_or(text.len());
    text.split_at(end)
}

// The exponent (sign and digits) following `symbol`, and the text after it.
fn exponent<'t>(text: &'t str, symbol: &str) -> Option<(String, &'t str)> {
    let head = text.get(..symbol.len())?;
    if symbol.is_empty() || !head.eq_ignore_ascii_case(symbol) {
        return None;
    }
    let mut rest = &text[symbol.len()..];
    let mut exponent = String::new();
    if let Some(r) = rest.strip_prefix('-') {
        exponent.push('-');
        rest = r;
    } else if let Some(r) = rest.strip_prefix('+') {
        rest = r;
    }
    let (digits, rest) = split_digits(rest);
    if digits.is_empty() {
        return None;
    }
    exponent.push_str(digits);
    Some((exponent, rest))
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{parsers, DecimalNumberContexts, LocaleDecimalNumberContext, ParserToken};
    use crate::testing::*;

    fn american() -> LocaleDecimalNumberContext {
        DecimalNumberContexts::american()
    }

    fn decimal(text: &str) -> Decimal {
        Decimal::from_str(text).unwrap()
    }

    #[test]
    fn reads_prefix() {
        let f = DecimalFormatter;
        assert_eq!(f.parse_prefix("123abc", &american()), Some((decimal("123"), "abc")));
        assert_eq!(f.parse_prefix("-1.50;", &american()), Some((decimal("-1.50"), ";")));
        assert_eq!(f.parse_prefix(".5", &american()), Some((decimal("0.5"), "")));
        assert_eq!(f.parse_prefix("1.", &american()), Some((decimal("1"), ".")));
        assert_eq!(f.parse_prefix("-", &american()), None);
        assert_eq!(f.parse_prefix("x1", &american()), None);
    }

    #[test]
    fn reads_exponent_ignoring_case() {
        let f = DecimalFormatter;
        assert_eq!(f.parse_prefix("1.5E3", &american()), Some((decimal("1500"), "")));
        assert_eq!(f.parse_prefix("25e-1x", &american()), Some((decimal("2.5"), "x")));
        assert_eq!(f.parse_prefix("2Ex", &american()), Some((decimal("2"), "Ex")));
    }

    #[test]
    fn out_of_range_exponent_is_left_unread() {
        let f = DecimalFormatter;
        assert_eq!(f.parse_prefix("1E30", &american()), Some((decimal("1"), "E30")));
        assert_eq!(f.parse_prefix("1.5e99999999999;", &american()), Some((decimal("1.5"), "e99999999999;")));

        parse_and_check(
            &parsers::decimal(),
            &american(),
            "7E40",
            &ParserToken::decimal(decimal("7"), "7").unwrap(),
            "E40",
        );
    }

    #[test]
    fn german_separator() {
        let f = DecimalFormatter;
        let german = DecimalNumberContexts::german();
        assert_eq!(f.parse_prefix("1,25", &german), Some((decimal("1.25"), "")));
        assert_eq!(f.parse_prefix("1.25", &german), Some((decimal("1"), ".25")));
    }

    #[test]
    fn decimal_parser() {
        let parser = parsers::decimal();
        parse_and_check(
            &parser,
            &american(),
            "123",
            &ParserToken::decimal(decimal("123"), "123").unwrap(),
            "",
        );
        parse_and_check(
            &parser,
            &american(),
            "-0.25 ",
            &ParserToken::decimal(decimal("-0.25"), "-0.25").unwrap(),
            " ",
        );
        parse_fail_and_check(&parser, &american(), "abc");
        assert_eq!(parser.to_string(), "decimal");
    }
}
