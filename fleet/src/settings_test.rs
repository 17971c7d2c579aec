use super::*;

#[test]
fn defaults_center_on_moscow() {
    let settings = MapSettings::default();
    assert_eq!(settings.center, [55.751_244, 37.618_423]);
    assert_eq!(settings.zoom, 11);
    assert_eq!(settings.lang, "ru_RU");
    assert!(settings.live_tracking);
    assert!(settings.local_filter);
    assert!(!settings.has_credential());
}

#[test]
fn script_url_carries_key_and_lang() {
    let settings = MapSettings { api_key: " abc-123 ".to_owned(), ..MapSettings::default() };
    assert!(settings.has_credential());
    assert_eq!(settings.script_url(), "https://api-maps.yandex.ru/2.1/?apikey=abc-123&lang=ru_RU");
}

#[test]
fn json_round_trip_preserves_settings() {
    let settings = MapSettings { api_key: "k".to_owned(), zoom: 9, live_tracking: false, ..MapSettings::default() };
    let raw = settings.to_json().expect("serialize");
    assert_eq!(MapSettings::from_json(&raw).expect("parse"), settings);
}

#[test]
fn from_json_fills_missing_keys_with_defaults() {
    let settings = MapSettings::from_json(r#"{"api_key":"k"}"#).expect("parse");
    assert_eq!(settings.api_key, "k");
    assert_eq!(settings.zoom, DEFAULT_ZOOM);
    assert!(settings.local_filter);
}

#[test]
fn from_json_rejects_garbage() {
    assert!(MapSettings::from_json("not json").is_err());
}
