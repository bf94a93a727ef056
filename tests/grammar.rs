use cursor_parser::chars::CharPredicate;
use cursor_parser::format::DateTimeFormatter;
use cursor_parser::functions;
use cursor_parser::parsers::{self, CaseSensitivity};
use cursor_parser::testing::*;
use cursor_parser::{
    BasicParserContext, BasicParserReporter, DecimalNumberContexts, IntoTextCursor, LeafParserToken, LeafValue,
    ParentParserToken, Parser, ParserExt, ParserToken, ParserTokenVisitor, Visiting,
};
use rust_decimal::Decimal;

fn context() -> BasicParserContext {
    BasicParserContext::english(2000)
}

// An assignment like `limit = 0x1F; // comment`, or `when = 31/12/1999`.
fn assignment() -> impl Parser<BasicParserContext> {
    let name = parsers::string_char_predicate(CharPredicate::letter(), 1, usize::MAX);
    let hex = parsers::sequence::<BasicParserContext>()
        .required(parsers::string("0x", CaseSensitivity::Insensitive))
        .required(parsers::string_char_predicate(
            CharPredicate::digit().or(CharPredicate::range('a', 'f')).or(CharPredicate::range('A', 'F')),
            1,
            usize::MAX,
        ))
        .build()
        .transform(functions::prefixed_number);
    let value = parsers::local_date(DateTimeFormatter::short_date())
        .or(hex)
        .or(parsers::decimal())
        .or(parsers::double_quoted())
        .with_label("value");

    parsers::sequence::<BasicParserContext>()
        .required(name)
        .optional(parsers::whitespace())
        .required(parsers::symbol("="))
        .optional(parsers::whitespace())
        .required(value.or_report(BasicParserReporter))
        .optional(parsers::symbol(";"))
        .optional(parsers::whitespace())
        .optional(parsers::comment("//", "\n"))
        .build()
}

#[test]
fn decimal_consumes_everything() {
    parse_and_check(
        &parsers::decimal(),
        &DecimalNumberContexts::american(),
        "123",
        &ParserToken::decimal(Decimal::from(123), "123").unwrap(),
        "",
    );
}

#[test]
fn required_component_at_end_of_text() {
    let parser = parsers::sequence()
        .required(parsers::string("a", CaseSensitivity::Sensitive).or_report(BasicParserReporter))
        .build();
    parse_throws_end_of_text(&parser, &(), "", 1, 1);
}

#[test]
fn repeated_character() {
    let a = || ParserToken::character('a', "a").unwrap();
    parse_and_check(
        &parsers::character(CharPredicate::is('a')).repeated(),
        &(),
        "aaab",
        &ParserToken::repeated(vec![a(), a(), a()], "aaa").unwrap(),
        "b",
    );
}

#[test]
fn assignments() {
    let parser = assignment();

    let token = parse_and_check(
        &parser,
        &context(),
        "limit = 0x1F; // max\nnext",
        &ParserToken::sequence(
            vec![
                ParserToken::string("limit", "limit").unwrap(),
                ParserToken::whitespace(" ").unwrap(),
                ParserToken::symbol("=").unwrap(),
                ParserToken::whitespace(" ").unwrap(),
                ParserToken::big_integer(31, "0x1F").unwrap(),
                ParserToken::symbol(";").unwrap(),
                ParserToken::whitespace(" ").unwrap(),
                ParserToken::comment(" max", "// max\n").unwrap(),
            ],
            "limit = 0x1F; // max\n",
        )
        .unwrap(),
        "next",
    );
    assert_eq!(token.text(), "limit = 0x1F; // max\n");

    parse_and_check(
        &parser,
        &context(),
        "when=31/12/1999",
        &ParserToken::sequence(
            vec![
                ParserToken::string("when", "when").unwrap(),
                ParserToken::symbol("=").unwrap(),
                ParserToken::local_date(chrono::NaiveDate::from_ymd_opt(1999, 12, 31).unwrap(), "31/12/1999").unwrap(),
            ],
            "when=31/12/1999",
        )
        .unwrap(),
        "",
    );

    parse_throws(&parser, &context(), "x = ?", "Invalid character '?' at (5,1) expected value");
    parse_fail_and_check(&parser, &context(), "= 1");
}

#[test]
fn many_assignments_rebuild_the_input() {
    let parser = assignment().repeated().and_empty_text_cursor();
    let text = "a = 1.5\nb = \"two\"\nc = 0x3 // three\n";

    let mut cursor = text.into_cursor();
    let token = parser.parse(&mut cursor, &context()).unwrap().unwrap();

    assert_eq!(token.text(), text);
    assert_eq!(token.parent().unwrap().value().len(), 3);
    check_token(&token);

    // Walking the leaves in order gives back the original text.
    #[derive(Default)]
    struct Rebuild(String);
    impl ParserTokenVisitor for Rebuild {
        fn start_visit(&mut self, token: &ParserToken) -> Visiting {
            if let Some(leaf) = token.leaf() {
                self.0.push_str(leaf.text());
            }
            Visiting::Continue
        }
    }
    let mut rebuild = Rebuild::default();
    token.accept(&mut rebuild);
    assert_eq!(rebuild.0, text);
}

#[test]
fn backtracking_leaves_cursor_in_place() {
    let parser = assignment();
    let mut cursor = "abc def".into_cursor();
    cursor.next();
    let save = cursor.save();

    assert_eq!(parser.parse(&mut cursor, &context()).unwrap(), None);
    assert!(cursor.is_at(save));
}

#[test]
fn optional_missing_then_required_present() {
    let parser = parsers::sequence()
        .optional(parsers::sign())
        .required(parsers::long(10))
        .build();

    parse_and_check(
        &parser,
        &context(),
        "42",
        &ParserToken::sequence(vec![ParserToken::long(42, "42").unwrap()], "42").unwrap(),
        "",
    );
    parse_and_check(
        &parser,
        &context(),
        "--42",
        &ParserToken::sequence(
            vec![
                ParserToken::sign(cursor_parser::Sign::Negative, "-").unwrap(),
                ParserToken::long(-42, "-42").unwrap(),
            ],
            "--42",
        )
        .unwrap(),
        "",
    );
}

#[test]
fn visitor_collects_values_and_skips_noise() {
    #[derive(Default)]
    struct Values {
        values: Vec<LeafValue>,
        sequences: usize,
    }
    impl ParserTokenVisitor for Values {
        fn start_visit(&mut self, token: &ParserToken) -> Visiting {
            if token.is_noise() {
                Visiting::Skip
            } else {
                Visiting::Continue
            }
        }
        fn start_visit_sequence(&mut self, _token: &ParentParserToken) -> Visiting {
            self.sequences += 1;
            Visiting::Continue
        }
        fn visit_string(&mut self, value: &str, token: &LeafParserToken) {
            self.values.push(LeafValue::String(value.to_string()));
            assert_eq!(token.text(), value);
        }
        fn visit_decimal(&mut self, value: Decimal, _token: &LeafParserToken) {
            self.values.push(LeafValue::Decimal(value));
        }
        fn visit_symbol(&mut self, _value: &str, _token: &LeafParserToken) {
            panic!("symbols are skipped");
        }
    }

    let mut cursor = "pi = 3.14;".into_cursor();
    let token = assignment().parse(&mut cursor, &context()).unwrap().unwrap();

    let mut values = Values::default();
    token.accept(&mut values);
    assert_eq!(values.sequences, 1);
    assert_eq!(
        values.values,
        vec![LeafValue::String("pi".to_string()), LeafValue::Decimal(Decimal::new(314, 2))]
    );
}
