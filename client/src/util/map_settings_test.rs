use super::*;

#[test]
fn encode_then_decode_keeps_feature_flags() {
    let settings = MapSettings { api_key: "key".to_owned(), live_tracking: false, ..MapSettings::default() };
    assert_eq!(decode(&encode(&settings)), settings);
}

#[test]
fn decode_garbage_falls_back_to_defaults() {
    assert_eq!(decode("not json"), MapSettings::default());
    assert_eq!(decode("{}"), MapSettings::default());
}

#[test]
fn current_without_context_is_default() {
    assert_eq!(current(), MapSettings::default());
}

#[test]
fn current_reads_provided_context() {
    let owner = Owner::new();
    let settings = MapSettings { zoom: 14, local_filter: false, ..MapSettings::default() };
    let expected = settings.clone();
    let seen = owner.with(move || {
        provide_context(settings);
        current()
    });
    assert_eq!(seen, expected);
}
