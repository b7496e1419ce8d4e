//! Config file loading tests.

use oddsmith::config::Config;
use oddsmith::error::{ConfigError, Error};

const VALID: &str = r#"
[market]
market_id = "mkt-7"
odds_event_id = "evt-7"

[quoting]
spread_offset_micros = 50000
requote_band_micros = 30000
"#;

#[test]
fn load_applies_env_override_for_api_key() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, VALID).unwrap();

    std::env::set_var("ODDS_API_KEY", "from-env");
    let config = Config::load(&path).unwrap();
    assert_eq!(config.odds.api_key.as_deref(), Some("from-env"));
    assert_eq!(config.market.market_id, "mkt-7");
    // The sport key falls back to its default.
    assert_eq!(config.market.sport, "baseball_mlb");

    // Without the env var the same file no longer validates.
    std::env::remove_var("ODDS_API_KEY");
    let err = Config::load(&path).unwrap_err();
    assert!(matches!(
        err,
        Error::Config(ConfigError::MissingField {
            field: "ODDS_API_KEY"
        })
    ));
}

#[test]
fn missing_file_reports_read_error() {
    let err = Config::load("/nonexistent/oddsmith.toml").unwrap_err();
    assert!(matches!(err, Error::Config(ConfigError::ReadFile(_))));
}

#[test]
fn malformed_toml_reports_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[market\nmarket_id = ").unwrap();

    let err = Config::load(&path).unwrap_err();
    assert!(matches!(err, Error::Config(ConfigError::Parse(_))));
}
