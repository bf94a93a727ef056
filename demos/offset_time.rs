use cursor_parser::chars::CharPredicate;
use cursor_parser::format::DateTimeFormatter;
use cursor_parser::{
    parsers, BasicParserContext, BasicParserReporter, IntoTextCursor, LeafParserToken, OffsetTime, Parser, ParserError,
    ParserExt, ParserTokenVisitor,
};

/// Parses a list of meetings, one per line, like:
///
/// ```text
/// standup 09:30:00+10:00
/// retro 16:00:00-05:00
/// ```
///
/// and hands back each name along with its time. Anything that isn't a meeting is
/// reported as an error pointing at where things went wrong.
fn main() {
    assert_eq!(
        parse("standup 09:30:00+10:00\nretro 16:00:00-05:00"),
        Ok(vec![
            ("standup".to_string(), "09:30:00+10:00".to_string()),
            ("retro".to_string(), "16:00:00-05:00".to_string()),
        ])
    );

    assert_eq!(parse(""), Ok(vec![]));

    assert_eq!(
        parse("standup 09:30:00+10:00\nretro 16:00"),
        Err("Invalid character '1' at (7,2) expected %H:%M:%S%:z".to_string())
    );

    assert_eq!(parse("standup"), Err("End of text at (8,1)".to_string()));
}

fn parse(text: &str) -> Result<Vec<(String, String)>, String> {
    let name = parsers::string_char_predicate(CharPredicate::letter(), 1, usize::MAX);
    let meeting = parsers::sequence()
        .required(name)
        .required(parsers::whitespace().or_report(BasicParserReporter))
        .required(parsers::offset_time(DateTimeFormatter::pattern("%H:%M:%S%:z")).or_report(BasicParserReporter))
        .build();
    let meetings = parsers::sequence()
        .required(meeting)
        .optional(parsers::symbol("\n"))
        .build()
        .repeated()
        .or_fail_if_cursor_not_empty(BasicParserReporter);

    let context = BasicParserContext::english(2000);
    let mut cursor = text.into_cursor();
    let token = meetings
        .parse(&mut cursor, &context)
        .map_err(|e: ParserError| e.to_string())?
        .ok_or_else(|| "no meetings".to_string())?;

    let mut collector = Meetings::default();
    token.accept(&mut collector);
    Ok(collector.meetings)
}

#[derive(Default)]
struct Meetings {
    name: Option<String>,
    meetings: Vec<(String, String)>,
}

impl ParserTokenVisitor for Meetings {
    fn visit_string(&mut self, value: &str, _token: &LeafParserToken) {
        self.name = Some(value.to_string());
    }

    fn visit_offset_time(&mut self, value: OffsetTime, _token: &LeafParserToken) {
        if let Some(name) = self.name.take() {
            self.meetings.push((name, value.to_string()));
        }
    }
}
