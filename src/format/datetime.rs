use super::TextFormatter;
use crate::{DateTimeContext, OffsetTime};
use chrono::format::{parse_and_remainder, Parsed, StrftimeItems};
use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime};
use core::fmt;
use core::marker::PhantomData;
use std::borrow::Cow;

/// Values that can be built from the fields chrono read from some text.
pub trait FromParsed: Sized {
    /// Build the value, or `None` if the fields are missing or inconsistent.
    fn from_parsed(parsed: &Parsed) -> Option<Self>;
}

impl FromParsed for NaiveDate {
    fn from_parsed(parsed: &Parsed) -> Option<Self> {
        parsed.to_naive_date().ok()
    }
}

impl FromParsed for NaiveTime {
    fn from_parsed(parsed: &Parsed) -> Option<Self> {
        parsed.to_naive_time().ok()
    }
}

impl FromParsed for NaiveDateTime {
    fn from_parsed(parsed: &Parsed) -> Option<Self> {
        parsed.to_naive_datetime_with_offset(0).ok()
    }
}

impl FromParsed for OffsetTime {
    fn from_parsed(parsed: &Parsed) -> Option<Self> {
        Some(OffsetTime {
            time: parsed.to_naive_time().ok()?,
            offset: parsed.to_fixed_offset().ok()?,
        })
    }
}

impl FromParsed for DateTime<FixedOffset> {
    fn from_parsed(parsed: &Parsed) -> Option<Self> {
        parsed.to_datetime().ok()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
enum Pattern {
    Fixed(String),
    ShortDate,
    Time,
    ShortDateTime,
}

impl Pattern {
    fn resolve<'a, C: DateTimeContext>(&'a self, context: &'a C) -> Cow<'a, str> {
        match self {
            Pattern::Fixed(pattern) => Cow::Borrowed(pattern.as_str()),
            Pattern::ShortDate => Cow::Borrowed(context.short_date_pattern()),
            Pattern::Time => Cow::Borrowed(context.time_pattern()),
            Pattern::ShortDateTime => Cow::Owned(format!(
                "{} {}",
                context.short_date_pattern(),
                context.time_pattern()
            )),
        }
    }
}

/// Reads a date, time or both using a strftime style pattern (see
/// [`chrono::format::strftime`]). The pattern is either fixed when the formatter is
/// created, or looked up in the [`DateTimeContext`] on every parse.
///
/// If the pattern does not include a year, the context's default year is used.
///
/// # Example
///
/// ```
/// use cursor_parser::format::{ DateTimeFormatter, TextFormatter };
/// use cursor_parser::DateTimeContexts;
/// use chrono::NaiveDate;
///
/// let english = DateTimeContexts::english(2000);
///
/// let formatter = DateTimeFormatter::<NaiveDate>::short_date();
/// assert_eq!(
///     formatter.parse_prefix("31/12/1999 and more", &english),
///     Some((NaiveDate::from_ymd_opt(1999, 12, 31).unwrap(), " and more"))
/// );
///
/// let formatter = DateTimeFormatter::<NaiveDate>::pattern("%d %b");
/// assert_eq!(
///     formatter.parse_prefix("25 Dec", &english),
///     Some((NaiveDate::from_ymd_opt(2000, 12, 25).unwrap(), ""))
/// );
/// ```
pub struct DateTimeFormatter<T> {
    pattern: Pattern,
    value: PhantomData<fn() -> T>,
}

impl<T> DateTimeFormatter<T> {
    fn new(pattern: Pattern) -> Self {
        Self {
            pattern,
            value: PhantomData,
        }
    }

    /// Use a fixed pattern, eg `%H:%M:%S%:z`.
    pub fn pattern(pattern: impl Into<String>) -> Self {
        Self::new(Pattern::Fixed(pattern.into()))
    }

    /// Use [`DateTimeContext::short_date_pattern`].
    pub fn short_date() -> Self {
        Self::new(Pattern::ShortDate)
    }

    /// Use [`DateTimeContext::time_pattern`].
    pub fn time() -> Self {
        Self::new(Pattern::Time)
    }

    /// Use the short date pattern, a space, then the time pattern.
    pub fn short_date_time() -> Self {
        Self::new(Pattern::ShortDateTime)
    }
}

impl<C: DateTimeContext, T: FromParsed> TextFormatter<C> for DateTimeFormatter<T> {
    type Value = T;

    fn parse_prefix<'t>(&self, text: &'t str, context: &C) -> Option<(T, &'t str)> {
        let pattern = self.pattern.resolve(context);
        // chrono skips whitespace ahead of numeric fields; leading whitespace is
        // only read when the pattern asks for it.
        let starts_blank = |s: &str| s.starts_with(char::is_whitespace);
        if starts_blank(text) && !starts_blank(&*pattern) {
            return None;
        }

        let mut parsed = Parsed::new();
        let rest = parse_and_remainder(&mut parsed, text, StrftimeItems::new(&pattern)).ok()?;

        let value = T::from_parsed(&parsed).or_else(|| {
            let mut parsed = parsed.clone();
            parsed.set_year(i64::from(context.default_year())).ok()?;
            T::from_parsed(&parsed)
        })?;
        Some((value, rest))
    }
}

impl<T> Clone for DateTimeFormatter<T> {
    fn clone(&self) -> Self {
        Self::new(self.pattern.clone())
    }
}

impl<T> fmt::Debug for DateTimeFormatter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("DateTimeFormatter").field(&self.pattern).finish()
    }
}

impl<T> fmt::Display for DateTimeFormatter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.pattern {
            Pattern::Fixed(pattern) => f.write_str(pattern),
            Pattern::ShortDate => f.write_str("short date"),
            Pattern::Time => f.write_str("time"),
            Pattern::ShortDateTime => f.write_str("short date time"),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::testing::*;
    use crate::{parsers, DateTimeContexts, LocaleDateTimeContext, ParserToken};

    fn english() -> LocaleDateTimeContext {
        DateTimeContexts::english(2000)
    }

    fn time(h: u32, m: u32, s: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, s).unwrap()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn offset(hours: i32) -> FixedOffset {
        FixedOffset::east_opt(hours * 3600).unwrap()
    }

    #[test]
    fn local_date_from_context() {
        let parser = parsers::local_date(DateTimeFormatter::short_date());
        parse_and_check(
            &parser,
            &english(),
            "31/12/1999!",
            &ParserToken::local_date(date(1999, 12, 31), "31/12/1999").unwrap(),
            "!",
        );
        parse_fail_and_check(&parser, &english(), "31/13/1999");
        parse_fail_and_check(&parser, &DateTimeContexts::american(2000), "31/12/1999");
        assert_eq!(parser.to_string(), "short date");
    }

    #[test]
    fn local_date_uses_default_year() {
        let parser = parsers::local_date(DateTimeFormatter::pattern("%d/%m"));
        parse_and_check(
            &parser,
            &english(),
            "29/02",
            &ParserToken::local_date(date(2000, 2, 29), "29/02").unwrap(),
            "",
        );
        parse_fail_and_check(&parser, &DateTimeContexts::english(2001), "29/02");
    }

    #[test]
    fn local_time_and_date_time() {
        let parser = parsers::local_time(DateTimeFormatter::time());
        parse_and_check(
            &parser,
            &english(),
            "12:58:59 ",
            &ParserToken::local_time(time(12, 58, 59), "12:58:59").unwrap(),
            " ",
        );

        let parser = parsers::local_date_time(DateTimeFormatter::short_date_time());
        parse_and_check(
            &parser,
            &english(),
            "31/12/1999 23:59:00",
            &ParserToken::local_date_time(date(1999, 12, 31).and_time(time(23, 59, 0)), "31/12/1999 23:59:00")
                .unwrap(),
            "",
        );
    }

    #[test]
    fn offset_time() {
        let parser = parsers::offset_time(DateTimeFormatter::pattern("%H:%M:%S%:z"));
        let value = OffsetTime {
            time: time(12, 58, 59),
            offset: offset(10),
        };
        parse_and_check(
            &parser,
            &english(),
            "12:58:59+10:00",
            &ParserToken::offset_time(value, "12:58:59+10:00").unwrap(),
            "",
        );
        parse_fail_and_check(&parser, &english(), "12:58:59");
        assert_eq!(parser.to_string(), "%H:%M:%S%:z");
    }

    #[test]
    fn offset_date_time() {
        let parser = parsers::offset_date_time(DateTimeFormatter::pattern("%Y-%m-%dT%H:%M:%S%:z"));
        let value = date(2000, 1, 2)
            .and_time(time(3, 4, 5))
            .and_local_timezone(offset(-5))
            .unwrap();
        parse_and_check(
            &parser,
            &english(),
            "2000-01-02T03:04:05-05:00]",
            &ParserToken::offset_date_time(value, "2000-01-02T03:04:05-05:00").unwrap(),
            "]",
        );
    }

    #[test]
    fn leading_whitespace_is_left_unread() {
        let parser = parsers::local_time(DateTimeFormatter::time());
        parse_fail_and_check(&parser, &english(), " 12:58:59");
        parse_fail_and_check(&parser, &english(), "\t12:58:59");

        let formatter = DateTimeFormatter::<NaiveTime>::pattern(" %H:%M");
        assert_eq!(formatter.parse_prefix(" 09:30", &english()), Some((time(9, 30, 0), "")));
    }

    #[test]
    fn nothing_read_is_not_a_match() {
        let parser = parsers::local_time(DateTimeFormatter::pattern(""));
        parse_fail_and_check(&parser, &english(), "12:00:00");
    }
}
