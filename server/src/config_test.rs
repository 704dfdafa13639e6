use std::collections::HashMap;

use super::*;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
        .collect();
    move |key| map.get(key).cloned()
}

#[test]
fn from_lookup_requires_database_url() {
    let err = ServerConfig::from_lookup(lookup_from(&[])).unwrap_err();
    assert_eq!(err, ConfigError::Missing("DATABASE_URL"));
}

#[test]
fn from_lookup_rejects_blank_database_url() {
    let err = ServerConfig::from_lookup(lookup_from(&[("DATABASE_URL", "   ")])).unwrap_err();
    assert_eq!(err, ConfigError::Missing("DATABASE_URL"));
}

#[test]
fn from_lookup_applies_defaults() {
    let config = ServerConfig::from_lookup(lookup_from(&[("DATABASE_URL", "postgres://localhost/app")])).unwrap();
    assert_eq!(config.database_url, "postgres://localhost/app");
    assert_eq!(config.port, DEFAULT_PORT);
    assert_eq!(config.db_max_connections, DEFAULT_DB_MAX_CONNECTIONS);
    assert_eq!(config.session, SessionSettings::default());
}

#[test]
fn from_lookup_reads_overrides() {
    let config = ServerConfig::from_lookup(lookup_from(&[
        ("DATABASE_URL", "postgres://db/app"),
        ("PORT", "8080"),
        ("DB_MAX_CONNECTIONS", "12"),
        ("SESSION_TTL_DAYS", "7"),
        ("COOKIE_SECURE", "Yes"),
    ]))
    .unwrap();
    assert_eq!(config.port, 8080);
    assert_eq!(config.db_max_connections, 12);
    assert_eq!(config.session.ttl_days, 7);
    assert!(config.session.cookie_secure);
}

#[test]
fn from_lookup_rejects_bad_port() {
    let err = ServerConfig::from_lookup(lookup_from(&[("DATABASE_URL", "postgres://db/app"), ("PORT", "http")])).unwrap_err();
    assert_eq!(err, ConfigError::Invalid { var: "PORT", value: "http".to_owned() });
}

#[test]
fn from_lookup_rejects_non_positive_ttl() {
    let err =
        ServerConfig::from_lookup(lookup_from(&[("DATABASE_URL", "postgres://db/app"), ("SESSION_TTL_DAYS", "0")]))
            .unwrap_err();
    assert!(matches!(err, ConfigError::Invalid { var: "SESSION_TTL_DAYS", .. }));
}

#[test]
fn from_lookup_rejects_unknown_cookie_flag() {
    let err =
        ServerConfig::from_lookup(lookup_from(&[("DATABASE_URL", "postgres://db/app"), ("COOKIE_SECURE", "maybe")]))
            .unwrap_err();
    assert_eq!(err, ConfigError::Invalid { var: "COOKIE_SECURE", value: "maybe".to_owned() });
}

#[test]
fn parse_bool_variants() {
    for raw in ["1", "true", "YES", " on "] {
        assert_eq!(parse_bool(raw), Some(true), "expected true for {raw:?}");
    }
    for raw in ["0", "False", "no", "OFF"] {
        assert_eq!(parse_bool(raw), Some(false), "expected false for {raw:?}");
    }
    assert_eq!(parse_bool(""), None);
}

#[test]
fn from_lookup_caps_ttl_at_ten_years() {
    let ok = ServerConfig::from_lookup(lookup_from(&[("DATABASE_URL", "postgres://db/app"), ("SESSION_TTL_DAYS", "3650")]))
        .unwrap();
    assert_eq!(ok.session.ttl_days, MAX_SESSION_TTL_DAYS);

    let err =
        ServerConfig::from_lookup(lookup_from(&[("DATABASE_URL", "postgres://db/app"), ("SESSION_TTL_DAYS", "2000000000")]))
            .unwrap_err();
    assert_eq!(err, ConfigError::Invalid { var: "SESSION_TTL_DAYS", value: "2000000000".to_owned() });
}
