use super::*;
use assert_matches::assert_matches;

#[test]
fn test_display() {
    let err = Error::OutOfRange {
        value: 4000,
        min: 0,
        max: 3999,
    };
    assert_eq!(err.to_string(), "value 4000 is out of range 0..=3999");

    let err = Error::UnknownVariant {
        value: "purple".into(),
        known: vec!["red".into(), "green".into()],
    };
    assert_eq!(err.to_string(), r#"unknown value "purple", use any of ["red", "green"]"#);

    let err = Error::UnrecognizedTime("yesterday-ish".into());
    assert_eq!(err.to_string(), r#"cannot recognize time "yesterday-ish""#);
}

#[test]
fn test_from_pattern_error() {
    let err: Error = wildcard::Pattern::new("[oops").unwrap_err().into();
    assert_matches!(&err, Error::Pattern(e) if e.pattern() == "[oops");
    assert_eq!(err.to_string(), "invalid pattern: [oops");
}

#[test]
fn test_from_io_error() {
    let err: Error = io::Error::other("broken pipe").into();
    assert_matches!(err, Error::Io(_));
    assert_eq!(err.to_string(), "broken pipe");
}
