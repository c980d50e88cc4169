use alloc::{string::String, vec::Vec};

use rstest::rstest;

use crate::{ParserOptions, StreamingReassembler};

fn reassembler() -> StreamingReassembler {
    StreamingReassembler::new(ParserOptions {
        panic_on_error: true,
        ..Default::default()
    })
}

#[rstest]
#[case::empty_array("[]")]
#[case::empty_object("{}")]
#[case::empty_string("\"\"")]
#[case::true_literal("true")]
#[case::false_literal("false")]
#[case::null_literal("null")]
#[case::string_with_spaces("\"a b\\tc \"")]
#[case::escaped_quote("\"say \\\"hi\\\"\"")]
#[case::unicode_escape("\"\\u00e9\"")]
#[case::raw_unicode("\"日本語 ω\"")]
#[case::nested_arrays("[[],[[]],[1,[2,[3]]]]")]
#[case::mixed_array("[\"hello\",{\"\":\"world\"},0,1,1.2,true,false,null]")]
#[case::literal_keys("{\"true\":true,\"null\":null,\"false\":false}")]
#[case::nested_objects("{\"a\":{\"b\":{\"c\":{}}}}")]
#[case::deep_mixed("{\"test\":[{\"true\":true,\"array\":[{\"string\":false}]}]}")]
#[case::number_members("{\"a\":1,\"b\":-2.5,\"c\":3e10}")]
#[case::structural_chars_in_strings("[\"]\",\"}\",\",\",\":\",\"{\"]")]
fn compact_values_round_trip(#[case] input: &str) {
    let mut parser = reassembler();
    assert_eq!(parser.feed_str(input).unwrap().as_deref(), Some(input));
}

#[rstest]
#[case::zero("0")]
#[case::negative_zero("-0")]
#[case::half("0.5")]
#[case::negative_half("-0.5")]
#[case::ten("10")]
#[case::exponent("1e5")]
#[case::upper_exponent_plus("1E+5")]
#[case::negative_exponent("1e-5")]
#[case::zero_exponent("0e0")]
#[case::exponent_leading_zero("1e05")]
#[case::everything("-1.25e10")]
#[case::fraction_zeroes("0.000")]
#[case::repeated_exponent("1e5e1")]
#[case::mixed_repeated_exponent("2.5E1e-3")]
fn bare_numbers_complete_on_terminator(
    #[case] number: &str,
    #[values(' ', '\t', '\r', '\n')] terminator: char,
) {
    let mut parser = reassembler();
    assert_eq!(parser.feed_str(number).unwrap(), None);
    assert_eq!(parser.feed(terminator).unwrap().as_deref(), Some(number));
}

#[rstest]
#[case::number_in_array("[1]")]
#[case::number_before_comma("[1,2]")]
#[case::number_in_object("{\"n\":0}")]
#[case::number_before_member("{\"n\":0.5,\"m\":-0}")]
fn numbers_close_on_container_terminators(#[case] input: &str) {
    let mut parser = reassembler();
    assert_eq!(parser.feed_str(input).unwrap().as_deref(), Some(input));
}

#[rstest]
#[case::array_newline("[1\n]", "[1]")]
#[case::leading_whitespace(" \t\r\n[]", "[]")]
#[case::array_spacing("[ 1 , 2 ]", "[1,2]")]
#[case::object_spacing("{ \"a\" : 1 , \"b\" : [ true ] }", "{\"a\":1,\"b\":[true]}")]
#[case::empty_array_spacing("[\n]", "[]")]
#[case::pretty(
    "{\n  \"k\": [\n    1,\n    {\n      \"x\": \"y z\"\n    }\n  ]\n}",
    "{\"k\":[1,{\"x\":\"y z\"}]}"
)]
fn insignificant_whitespace_is_dropped(#[case] input: &str, #[case] expected: &str) {
    let mut parser = reassembler();
    assert_eq!(parser.feed_str(input).unwrap().as_deref(), Some(expected));
}

#[test]
fn completion_lands_on_closing_character() {
    let input = "{\"a\":[1,{\"b\":null}],\"c\":\"}\"}";
    let mut parser = reassembler();
    let completions: Vec<(usize, String)> = input
        .chars()
        .enumerate()
        .filter_map(|(i, c)| parser.feed(c).unwrap().map(|text| (i, text)))
        .collect();
    assert_eq!(completions, [(input.chars().count() - 1, String::from(input))]);
}

#[test]
fn feed_all_returns_only_first_value() {
    let mut parser = reassembler();
    assert_eq!(parser.feed_str("[1][2]").unwrap().as_deref(), Some("[1]"));
    // `[2]` was never fed.
    assert!(parser.is_idle());
    assert_eq!(parser.buffered_len(), 3);
}

#[test]
fn feed_all_without_completion_returns_none() {
    let mut parser = reassembler();
    assert_eq!(parser.feed_str("{\"a\":[1,2").unwrap(), None);
    assert_eq!(parser.feed_str(",3]}").unwrap().as_deref(), Some("{\"a\":[1,2,3]}"));
}

#[test]
fn reset_isolates_values() {
    let mut parser = reassembler();
    let first = parser.feed_str("[]").unwrap();
    parser.reset();
    let second = parser.feed_str("[]").unwrap();
    parser.reset();
    assert_eq!(first.as_deref(), Some("[]"));
    assert_eq!(second.as_deref(), Some("[]"));
}

#[test]
fn reset_mid_value_discards_partial_input() {
    let mut parser = reassembler();
    parser.feed_str("{\"partial\":[1,").unwrap();
    parser.reset();
    assert_eq!(parser.feed_str("{\"x\":2}").unwrap().as_deref(), Some("{\"x\":2}"));
}

#[test]
fn unterminated_string_stays_pending() {
    let mut parser = reassembler();
    assert_eq!(parser.feed_str("\"never closed ] } , 1").unwrap(), None);
    assert_eq!(parser.depth(), 1);
    assert_eq!(parser.finish().unwrap(), None);
}

#[test]
fn escaped_backslash_before_quote_keeps_string_open() {
    // `"a\\"` is a complete string, but only one character is looked back
    // at, so the final quote reads as escaped.
    let mut parser = reassembler();
    assert_eq!(parser.feed_str(r#""a\\""#).unwrap(), None);
    assert_eq!(parser.feed('"').unwrap().as_deref(), Some(r#""a\\"""#));
}
