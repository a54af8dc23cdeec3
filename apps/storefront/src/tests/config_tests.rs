use super::*;

use std::collections::HashMap;

fn env_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let vars: HashMap<String, String> = pairs
        .iter()
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .collect();
    move |key| vars.get(key).cloned()
}

#[test]
fn defaults_match_local_backend() {
    let settings = settings_from_sources(None, env_from(&[])).expect("settings");
    assert_eq!(settings, Settings::default());
    assert_eq!(settings.backend_url, "http://localhost:8000");
    assert_eq!(settings.user_id, 123);
    assert_eq!(settings.request_timeout(), None);
    assert_eq!(settings.log_dir, PathBuf::from("logs"));
}

#[test]
fn file_values_override_defaults() {
    let raw = r#"
backend_url = "http://catalog:9000"
user_id = 7
request_timeout_secs = 15
log_dir = "/var/log/storefront"
"#;
    let settings = settings_from_sources(Some(raw), env_from(&[])).expect("settings");
    assert_eq!(settings.backend_url, "http://catalog:9000");
    assert_eq!(settings.user_id, 7);
    assert_eq!(settings.request_timeout(), Some(Duration::from_secs(15)));
    assert_eq!(settings.log_dir, PathBuf::from("/var/log/storefront"));
}

#[test]
fn environment_overrides_file() {
    let raw = r#"backend_url = "http://from-file:9000""#;
    let settings = settings_from_sources(
        Some(raw),
        env_from(&[("BACKEND_URL", "http://from-env:8000"), ("APP__USER_ID", "42")]),
    )
    .expect("settings");
    assert_eq!(settings.backend_url, "http://from-env:8000");
    assert_eq!(settings.user_id, 42);
}

#[test]
fn prefixed_backend_url_wins_over_plain() {
    let settings = settings_from_sources(
        None,
        env_from(&[
            ("BACKEND_URL", "http://plain:8000"),
            ("APP__BACKEND_URL", "http://prefixed:8000"),
        ]),
    )
    .expect("settings");
    assert_eq!(settings.backend_url, "http://prefixed:8000");
}

#[test]
fn unparseable_numbers_keep_previous_value() {
    let settings = settings_from_sources(
        None,
        env_from(&[
            ("APP__USER_ID", "alice"),
            ("APP__REQUEST_TIMEOUT_SECS", "soon"),
        ]),
    )
    .expect("settings");
    assert_eq!(settings.user_id, 123);
    assert_eq!(settings.request_timeout_secs, None);
}

#[test]
fn zero_timeout_means_unbounded() {
    let settings = settings_from_sources(None, env_from(&[("APP__REQUEST_TIMEOUT_SECS", "0")]))
        .expect("settings");
    assert_eq!(settings.request_timeout_secs, Some(0));
    assert_eq!(settings.request_timeout(), None);
}

#[test]
fn malformed_or_unknown_file_keys_are_errors() {
    assert!(settings_from_sources(Some("backend_url = "), env_from(&[])).is_err());
    assert!(settings_from_sources(Some("backend = \"http://x\""), env_from(&[])).is_err());
}

#[test]
fn session_requires_positive_user_id() {
    let settings = Settings {
        user_id: 0,
        ..Settings::default()
    };
    assert!(settings.session().is_err());

    let session = Settings::default().session().expect("session");
    assert_eq!(session.user_id, UserId(123));
}
