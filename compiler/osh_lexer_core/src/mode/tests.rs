use super::*;

#[test]
fn all_is_indexed_by_discriminant() {
    for (i, mode) in LexMode::ALL.iter().enumerate() {
        assert_eq!(mode.index(), i, "{mode} is out of place in ALL");
    }
    assert_eq!(LexMode::COUNT, 15);
}

#[test]
fn try_from_known_tags() {
    assert_eq!(LexMode::try_from(0), Ok(LexMode::ShCommand));
    assert_eq!(LexMode::try_from(5), Ok(LexMode::DQ));
    assert_eq!(LexMode::try_from(14), Ok(LexMode::HereDoc));
}

#[test]
fn try_from_unknown_tag_is_invalid_mode() {
    assert_eq!(LexMode::try_from(15), Err(MatchError::InvalidMode(15)));
    assert_eq!(LexMode::try_from(255), Err(MatchError::InvalidMode(255)));
}

#[test]
fn from_str_ignores_case() {
    assert_eq!("dq".parse::<LexMode>(), Ok(LexMode::DQ));
    assert_eq!("ShCommand".parse::<LexMode>(), Ok(LexMode::ShCommand));
    assert_eq!("vsub2".parse::<LexMode>(), Ok(LexMode::VSub2));
}

#[test]
fn from_str_unknown_name() {
    assert_eq!(
        "outer".parse::<LexMode>(),
        Err(MatchError::UnknownModeName("outer".to_owned()))
    );
}

#[test]
fn display_round_trips_through_from_str() {
    for mode in LexMode::ALL {
        assert_eq!(mode.to_string().parse::<LexMode>(), Ok(mode));
    }
}
