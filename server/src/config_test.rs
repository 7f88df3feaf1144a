use super::*;
use std::collections::HashMap;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| map.get(key).cloned()
}

#[test]
fn defaults_when_unset() {
    let cfg = ServerConfig::from_lookup(lookup_from(&[])).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.data_dir, PathBuf::from("data"));
    assert_eq!(cfg.allowed_origin, "http://localhost:8888");
    assert!(cfg.auth_token.is_none());
}

#[test]
fn parses_overrides() {
    let cfg = ServerConfig::from_lookup(lookup_from(&[
        ("PORT", "9000"),
        ("DATA_DIR", "/var/lib/verse"),
        ("ALLOWED_ORIGIN", "https://verse.example/"),
        ("AUTH_TOKEN", "s3cret"),
    ]))
    .unwrap();
    assert_eq!(cfg.port, 9000);
    assert_eq!(cfg.data_dir, PathBuf::from("/var/lib/verse"));
    assert_eq!(cfg.allowed_origin, "https://verse.example");
    assert_eq!(cfg.auth_token.as_deref(), Some("s3cret"));
}

#[test]
fn invalid_port_errors() {
    let err = ServerConfig::from_lookup(lookup_from(&[("PORT", "eighty")])).unwrap_err();
    assert_eq!(err, ConfigError::InvalidPort("eighty".to_owned()));
}

#[test]
fn invalid_origin_errors() {
    let err = ServerConfig::from_lookup(lookup_from(&[("ALLOWED_ORIGIN", "http://bad\norigin")])).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidOrigin(_)));
}

#[test]
fn blank_auth_token_is_unset() {
    let cfg = ServerConfig::from_lookup(lookup_from(&[("AUTH_TOKEN", "  ")])).unwrap();
    assert!(cfg.auth_token.is_none());
}

#[test]
fn auth_token_is_trimmed() {
    let cfg = ServerConfig::from_lookup(lookup_from(&[("AUTH_TOKEN", " secret ")])).unwrap();
    assert_eq!(cfg.auth_token.as_deref(), Some("secret"));
}
