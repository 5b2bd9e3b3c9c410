use std::collections::HashMap;

use super::*;

fn config_from(pairs: &[(&str, &str)]) -> Result<ServerConfig, ConfigError> {
    let env: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    ServerConfig::from_lookup(|key| env.get(key).cloned())
}

#[test]
fn from_lookup_uses_defaults() {
    let cfg = config_from(&[]).unwrap();
    assert_eq!(
        cfg,
        ServerConfig {
            port: DEFAULT_PORT,
            api_url: DEFAULT_API_URL.to_owned(),
            proxy_timeout_secs: DEFAULT_PROXY_TIMEOUT_SECS,
        }
    );
}

#[test]
fn from_lookup_parses_overrides_and_trims_trailing_slash() {
    let cfg = config_from(&[
        ("PORT", "8081"),
        ("LOSTFOUND_API_URL", "https://api.example.test/"),
        ("LOSTFOUND_PROXY_TIMEOUT_SECS", "5"),
    ])
    .unwrap();
    assert_eq!(cfg.port, 8081);
    assert_eq!(cfg.api_url, "https://api.example.test");
    assert_eq!(cfg.proxy_timeout_secs, 5);
}

#[test]
fn from_lookup_rejects_bad_port() {
    let err = config_from(&[("PORT", "http")]).unwrap_err();
    assert_eq!(err, ConfigError::Invalid { var: "PORT", value: "http".to_owned() });
}

#[test]
fn from_lookup_rejects_non_http_api_url() {
    let err = config_from(&[("LOSTFOUND_API_URL", "ftp://files")]).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid { var: "LOSTFOUND_API_URL", .. }));
}

#[test]
fn from_lookup_rejects_zero_timeout() {
    let err = config_from(&[("LOSTFOUND_PROXY_TIMEOUT_SECS", "0")]).unwrap_err();
    assert_eq!(err.to_string(), "invalid LOSTFOUND_PROXY_TIMEOUT_SECS: \"0\"");
}
