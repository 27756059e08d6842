use crate::channels;

#[test]
fn given_known_channel_names_when_checked_then_recognized() {
    for name in channels::ALL {
        assert!(channels::is_known(name));
    }
}

#[test]
fn given_unknown_channel_name_when_checked_then_rejected() {
    assert!(!channels::is_known("alerts"));
    assert!(!channels::is_known(""));
}
