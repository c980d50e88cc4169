#![no_main]

use arbitrary::{Arbitrary, Unstructured};
use jsonframe::{ParserOptions, StreamingReassembler};
use libfuzzer_sys::fuzz_target;
use serde_json::{Map, Value};

/// A stream of well-formed values, each preceded by one JSON whitespace
/// character, followed by arbitrary trailing text.
#[derive(Debug, Arbitrary)]
struct Input {
    max_buffer_len: Option<u16>,
    max_depth: Option<u8>,
    values: Vec<(Whitespace, ArbitraryValue)>,
    tail: String,
}

#[derive(Debug, Clone, Copy, Arbitrary)]
enum Whitespace {
    Space,
    Tab,
    LineFeed,
    CarriageReturn,
}

impl Whitespace {
    fn as_char(self) -> char {
        match self {
            Whitespace::Space => ' ',
            Whitespace::Tab => '\t',
            Whitespace::LineFeed => '\n',
            Whitespace::CarriageReturn => '\r',
        }
    }
}

#[derive(Debug)]
struct ArbitraryValue(Value);

impl<'a> Arbitrary<'a> for ArbitraryValue {
    fn arbitrary(u: &mut Unstructured<'a>) -> arbitrary::Result<Self> {
        let value = match u.choose_index(16)? {
            0 => Value::Null,
            1 => Value::Bool(u.arbitrary()?),
            2 | 3 => {
                let n: f64 = u.arbitrary()?;
                serde_json::Number::from_f64(n).map_or(Value::Null, Value::Number)
            }
            4..=8 => Value::String(u.arbitrary()?),
            9..=12 => {
                let elems: Vec<ArbitraryValue> = u.arbitrary()?;
                Value::Array(elems.into_iter().map(|v| v.0).collect())
            }
            _ => {
                let m: Vec<(String, ArbitraryValue)> = u.arbitrary()?;
                Value::Object(Map::from_iter(m.into_iter().map(|(k, v)| (k, v.0))))
            }
        };
        Ok(ArbitraryValue(value))
    }
}

/// A string ending in `\` renders as `\\"`, whose closing quote reads as
/// escaped to a one-character lookback.
fn has_trailing_backslash(value: &Value) -> bool {
    match value {
        Value::String(s) => s.ends_with('\\'),
        Value::Array(items) => items.iter().any(has_trailing_backslash),
        Value::Object(map) => map
            .iter()
            .any(|(k, v)| k.ends_with('\\') || has_trailing_backslash(v)),
        _ => false,
    }
}

fn reassemble(input: Input) {
    let mut text = String::new();
    let mut expected = Vec::new();
    for (ws, value) in &input.values {
        text.push(ws.as_char());
        let compact = serde_json::to_string(&value.0).expect("serializable");
        text.push_str(&compact);
        expected.push(compact);
    }
    text.push_str(&input.tail);

    let unbounded = input.max_buffer_len.is_none() && input.max_depth.is_none();
    let exact = unbounded
        && input.tail.is_empty()
        && !input.values.iter().any(|(_, v)| has_trailing_backslash(&v.0));

    let mut reassembler = StreamingReassembler::new(ParserOptions {
        max_buffer_len: input.max_buffer_len.map(usize::from),
        max_depth: input.max_depth.map(usize::from),
        panic_on_error: exact,
    });

    let mut found = Vec::new();
    for result in reassembler.values(text.chars()) {
        match result {
            Ok(value) => {
                // Completed text is compact: fed again it must come back as is.
                let mut again = StreamingReassembler::default();
                let mut framed = value.clone();
                framed.push(' ');
                assert_eq!(again.feed_str(&framed), Ok(Some(value.clone())));
                found.push(value);
            }
            Err(err) => assert!(!err.is_internal(), "{err}"),
        }
    }

    if exact {
        assert_eq!(found, expected);
    }
}

fuzz_target!(|input: Input| reassemble(input));
