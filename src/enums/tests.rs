use assert_matches::assert_matches;
use strum::{AsRefStr, EnumIter, EnumMessage};

use super::*;

#[derive(Debug, Clone, Copy, PartialEq, AsRefStr, EnumIter, EnumMessage)]
enum State {
    California,
    #[strum(message = "New Mexico")]
    NewMexico,
    Washington,
}

#[derive(Debug, PartialEq, AsRefStr, EnumIter)]
#[strum(serialize_all = "kebab-case")]
enum Mode {
    FastForward,
    Rewind,
}

#[test]
fn test_description() {
    assert_eq!(State::California.description(), "California");
    assert_eq!(State::NewMexico.description(), "New Mexico");
    assert_eq!(State::Washington.description(), "Washington");
}

#[test]
fn test_parse_enum() {
    assert_eq!(parse_enum::<State>("NewMexico", false).unwrap(), State::NewMexico);
    assert_eq!(parse_enum::<State>("  washington\t", true).unwrap(), State::Washington);
    assert_eq!(parse_enum::<Mode>("fast-forward", false).unwrap(), Mode::FastForward);
}

#[test]
fn test_parse_enum_errors() {
    assert_matches!(parse_enum::<State>("   ", false), Err(Error::EmptyInput));
    assert_matches!(parse_enum::<State>("washington", false), Err(Error::UnknownVariant { .. }));

    match parse_enum::<Mode>("pause", true) {
        Err(Error::UnknownVariant { value, known }) => {
            assert_eq!(value, "pause");
            assert_eq!(known, vec!["fast-forward", "rewind"]);
        }
        other => panic!("unexpected result: {:?}", other),
    }
}
