use std::io::Cursor;

use layergen_cli::intake::{parse_count, prompt_count};

#[test]
fn parse_count_accepts_non_negative_integers() {
    assert_eq!(parse_count("0").unwrap(), 0);
    assert_eq!(parse_count(" 12 \n").unwrap(), 12);
}

#[test]
fn parse_count_rejects_negative_values() {
    let err = parse_count("-3").unwrap_err();
    assert_eq!(err.info().code, "negative-value");
}

#[test]
fn parse_count_rejects_garbage() {
    for input in ["", "abc", "1.5", "2x"] {
        let err = parse_count(input).unwrap_err();
        assert_eq!(err.info().code, "not-an-integer", "input: {input:?}");
    }
}

#[test]
fn prompt_count_reprompts_until_valid() {
    let mut input = Cursor::new("oops\n-1\n4\n");
    let mut output = Vec::new();

    let value = prompt_count("depth", &mut input, &mut output).unwrap();
    assert_eq!(value, 4);

    let transcript = String::from_utf8(output).unwrap();
    assert!(transcript.contains("Enter depth:"));
    assert!(transcript.contains("not-an-integer"));
    assert!(transcript.contains("negative-value"));
}

#[test]
fn prompt_count_fails_when_input_ends() {
    let mut input = Cursor::new("nope\n");
    let mut output = Vec::new();

    let err = prompt_count("depth", &mut input, &mut output).unwrap_err();
    assert_eq!(err.kind(), std::io::ErrorKind::UnexpectedEof);
}
