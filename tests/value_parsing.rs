//! Text-record value decoding, one case per payload shape in MC-NBFX's own
//! structure examples. Each case wraps the record in a minimal
//! `ShortElement "x"` so the value has somewhere to attach, then checks both
//! the decoded [`Value`](nbfx::Value) and the "with-end-element" bit's effect
//! on whether a trailing `EndElement` byte is still required.

use nbfx::reader::Parser;
use nbfx::value::Value;

fn parse_value_record(record_bytes: &[u8], needs_trailing_end: bool) -> Value {
    let mut bytes = vec![0x40, 0x01, b'x'];
    bytes.extend_from_slice(record_bytes);
    if needs_trailing_end {
        bytes.push(0x01);
    }
    Parser::default().parse(bytes).unwrap().value
}

#[test]
fn zero_text() {
    assert_eq!(parse_value_record(&[0x80], true), Value::Int64(0));
}

#[test]
fn zero_text_with_end_needs_no_trailing_byte() {
    assert_eq!(parse_value_record(&[0x81], false), Value::Int64(0));
}

#[test]
fn one_text() {
    assert_eq!(parse_value_record(&[0x82], true), Value::Int64(1));
}

#[test]
fn false_and_true_text() {
    assert_eq!(parse_value_record(&[0x84], true), Value::Boolean(false));
    assert_eq!(parse_value_record(&[0x86], true), Value::Boolean(true));
}

#[test]
fn int8_text_is_sign_extended() {
    assert_eq!(parse_value_record(&[0x88, 0xDE], true), Value::Int64(-34));
}

#[test]
fn int8_text_with_end() {
    assert_eq!(parse_value_record(&[0x89, 0x7F], false), Value::Int64(127));
}

#[test]
fn int16_text_is_sign_extended() {
    assert_eq!(
        parse_value_record(&[0x8A, 0x00, 0x80], true),
        Value::Int64(-32768)
    );
}

#[test]
fn int16_text_with_end() {
    assert_eq!(
        parse_value_record(&[0x8B, 0xFF, 0x7F], false),
        Value::Int64(32767)
    );
}

#[test]
fn int32_text() {
    assert_eq!(
        parse_value_record(&[0x8C, 0x15, 0xCD, 0x5B, 0x07], true),
        Value::Int64(123_456_789)
    );
}

#[test]
fn int32_text_with_end() {
    assert_eq!(
        parse_value_record(&[0x8D, 0xFF, 0xFF, 0xFF, 0x7F], false),
        Value::Int64(2_147_483_647)
    );
}

#[test]
fn int64_text() {
    assert_eq!(
        parse_value_record(&[0x8E, 0x00, 0x00, 0x00, 0x80, 0x00, 0x00, 0x00, 0x00], true),
        Value::Int64(2_147_483_648)
    );
}

#[test]
fn int64_text_with_end() {
    assert_eq!(
        parse_value_record(&[0x8F, 0x00, 0x00, 0x00, 0x00, 0x00, 0x01, 0x00, 0x00], false),
        Value::Int64(1_099_511_627_776)
    );
}

#[test]
fn float_text() {
    match parse_value_record(&[0x90, 0xCD, 0xCC, 0x8C, 0x3F], true) {
        Value::Float32(v) => assert!((v - 1.1).abs() < 1e-6),
        other => panic!("expected Float32, got {:?}", other),
    }
}

#[test]
fn float_text_with_end() {
    match parse_value_record(&[0x91, 0xCD, 0xCC, 0x01, 0x42], false) {
        Value::Float32(v) => assert!((v - 32.45).abs() < 1e-4),
        other => panic!("expected Float32, got {:?}", other),
    }
}

#[test]
fn double_text_is_distinct_from_float_text() {
    let bits = 1.1f64.to_bits().to_le_bytes();
    let mut record = vec![0x92];
    record.extend_from_slice(&bits);
    match parse_value_record(&record, true) {
        Value::Float64(v) => assert_eq!(v, 1.1),
        other => panic!("expected Float64, got {:?}", other),
    }
}

#[test]
fn uint64_text() {
    let mut record = vec![0xB2];
    record.extend_from_slice(&42u64.to_le_bytes());
    assert_eq!(parse_value_record(&record, true), Value::UInt64(42));
}

#[test]
fn chars8_text() {
    let mut record = vec![0x98, 5];
    record.extend_from_slice(b"hello");
    assert_eq!(
        parse_value_record(&record, true),
        Value::String("hello".to_owned())
    );
}

#[test]
fn empty_text_is_null() {
    assert_eq!(parse_value_record(&[0xA8], true), Value::Null);
}

#[test]
fn dictionary_text_renders_as_literal_token() {
    assert_eq!(
        parse_value_record(&[0xAA, 9], true),
        Value::String("D:9".to_owned())
    );
}

#[test]
fn unsupported_record_kind_fails_cleanly() {
    // DecimalText (0x94) is recognized but not implemented.
    let err = Parser::default()
        .parse([0x40, 0x01, b'x', 0x94])
        .unwrap_err();
    assert!(matches!(err, nbfx::Error::Unsupported(0x94)));
}
