//! Contexts supply the locale sensitive rules that some parsers need. They are passed
//! explicitly to every [`crate::Parser::parse`] call; parsers only ever query them.
//!
//! A parser states which capabilities it needs through trait bounds on the context
//! type, for example `impl<C: DecimalNumberContext> Parser<C> for ...`. Parsers that
//! need nothing from the context work with any context type at all, including `()`.

/// Rules for parsing dates and times.
pub trait DateTimeContext {
    /// The locale these rules come from, eg `en`.
    fn locale(&self) -> &str;
    /// The year used when a date pattern does not include one.
    fn default_year(&self) -> i32;
    /// strftime style pattern for a short date, eg `%d/%m/%Y`.
    fn short_date_pattern(&self) -> &str;
    /// strftime style pattern for a time of day, eg `%H:%M:%S`.
    fn time_pattern(&self) -> &str;
}

/// Rules for parsing numbers.
pub trait DecimalNumberContext {
    /// The character between the integer and fractional parts.
    fn decimal_separator(&self) -> char;
    /// The symbol introducing an exponent, matched ignoring case.
    fn exponent_symbol(&self) -> &str;
    /// The character marking a negative number.
    fn negative_sign(&self) -> char;
    /// The character marking a positive number.
    fn positive_sign(&self) -> char;
}

/// Both sets of rules together.
pub trait ParserContext: DateTimeContext + DecimalNumberContext {}

impl<C: DateTimeContext + DecimalNumberContext> ParserContext for C {}

/// A [`DateTimeContext`] holding its rules as plain values.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LocaleDateTimeContext {
    /// See [`DateTimeContext::locale`].
    pub locale: String,
    /// See [`DateTimeContext::default_year`].
    pub default_year: i32,
    /// See [`DateTimeContext::short_date_pattern`].
    pub short_date_pattern: String,
    /// See [`DateTimeContext::time_pattern`].
    pub time_pattern: String,
}

impl DateTimeContext for LocaleDateTimeContext {
    fn locale(&self) -> &str {
        &self.locale
    }
    fn default_year(&self) -> i32 {
        self.default_year
    }
    fn short_date_pattern(&self) -> &str {
        &self.short_date_pattern
    }
    fn time_pattern(&self) -> &str {
        &self.time_pattern
    }
}

/// A [`DecimalNumberContext`] holding its rules as plain values.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LocaleDecimalNumberContext {
    /// See [`DecimalNumberContext::decimal_separator`].
    pub decimal_separator: char,
    /// See [`DecimalNumberContext::exponent_symbol`].
    pub exponent_symbol: String,
    /// See [`DecimalNumberContext::negative_sign`].
    pub negative_sign: char,
    /// See [`DecimalNumberContext::positive_sign`].
    pub positive_sign: char,
}

impl DecimalNumberContext for LocaleDecimalNumberContext {
    fn decimal_separator(&self) -> char {
        self.decimal_separator
    }
    fn exponent_symbol(&self) -> &str {
        &self.exponent_symbol
    }
    fn negative_sign(&self) -> char {
        self.negative_sign
    }
    fn positive_sign(&self) -> char {
        self.positive_sign
    }
}

/// Ready made [`DateTimeContext`]s.
pub struct DateTimeContexts;

impl DateTimeContexts {
    /// English rules: day/month/year dates and 24 hour times.
    pub fn english(default_year: i32) -> LocaleDateTimeContext {
        LocaleDateTimeContext {
            locale: "en".to_string(),
            default_year,
            short_date_pattern: "%d/%m/%Y".to_string(),
            time_pattern: "%H:%M:%S".to_string(),
        }
    }

    /// American rules: month/day/year dates and 12 hour times.
    pub fn american(default_year: i32) -> LocaleDateTimeContext {
        LocaleDateTimeContext {
            locale: "en-US".to_string(),
            default_year,
            short_date_pattern: "%m/%d/%Y".to_string(),
            time_pattern: "%I:%M:%S %p".to_string(),
        }
    }
}

/// Ready made [`DecimalNumberContext`]s.
pub struct DecimalNumberContexts;

impl DecimalNumberContexts {
    /// `.` decimal separator, `E` exponent, `+` and `-` signs.
    pub fn american() -> LocaleDecimalNumberContext {
        LocaleDecimalNumberContext {
            decimal_separator: '.',
            exponent_symbol: "E".to_string(),
            negative_sign: '-',
            positive_sign: '+',
        }
    }

    /// `,` decimal separator, `E` exponent, `+` and `-` signs.
    pub fn german() -> LocaleDecimalNumberContext {
        LocaleDecimalNumberContext {
            decimal_separator: ',',
            ..Self::american()
        }
    }
}

/// A [`ParserContext`] made from a date-time context and a decimal number context.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BasicParserContext<D = LocaleDateTimeContext, N = LocaleDecimalNumberContext> {
    date_time: D,
    decimal_number: N,
}

impl<D, N> BasicParserContext<D, N> {
    /// Combine the two contexts.
    pub fn new(date_time: D, decimal_number: N) -> Self {
        BasicParserContext {
            date_time,
            decimal_number,
        }
    }
}

impl BasicParserContext {
    /// English date-times with American numbers.
    pub fn english(default_year: i32) -> Self {
        BasicParserContext::new(DateTimeContexts::english(default_year), DecimalNumberContexts::american())
    }
}

impl<D: DateTimeContext, N> DateTimeContext for BasicParserContext<D, N> {
    fn locale(&self) -> &str {
        self.date_time.locale()
    }
    fn default_year(&self) -> i32 {
        self.date_time.default_year()
    }
    fn short_date_pattern(&self) -> &str {
        self.date_time.short_date_pattern()
    }
    fn time_pattern(&self) -> &str {
        self.date_time.time_pattern()
    }
}

impl<D, N: DecimalNumberContext> DecimalNumberContext for BasicParserContext<D, N> {
    fn decimal_separator(&self) -> char {
        self.decimal_number.decimal_separator()
    }
    fn exponent_symbol(&self) -> &str {
        self.decimal_number.exponent_symbol()
    }
    fn negative_sign(&self) -> char {
        self.decimal_number.negative_sign()
    }
    fn positive_sign(&self) -> char {
        self.decimal_number.positive_sign()
    }
}
