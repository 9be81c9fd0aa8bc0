use std::io::Write;
use station_nowcast::config::Config;
use station_nowcast::error::AppError;

/// Test loading a full configuration file from disk
#[test]
fn test_load_config_file() {
    let mut file = tempfile::NamedTempFile::new().expect("Failed to create temp file");
    write!(
        file,
        r#"
source:
  base_url: https://api.bmkg.go.id/publik
  adm4: "33.05.05.2009"
  request_timeout_seconds: 15
  max_retries: 1
station:
  name: Purbalingga
  pressure_hpa: 1008.5
display:
  limit: 8
"#
    )
    .expect("Failed to write config");

    let config = Config::load(file.path()).expect("Config should load");
    assert_eq!(config.source.adm4, "33.05.05.2009");
    assert_eq!(config.source.request_timeout_seconds, 15);
    assert_eq!(config.source.max_retries, 1);
    assert_eq!(config.station.name, "Purbalingga");
    assert_eq!(config.station.pressure_hpa, 1008.5);
    assert_eq!(config.display.limit, 8);
}

/// Test a missing file is a configuration error
#[test]
fn test_missing_config_file() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let result = Config::load(dir.path().join("absent.yaml"));

    match result {
        Err(AppError::Config(msg)) => assert!(msg.contains("Failed to read config file")),
        other => panic!("Expected Config error, got: {:?}", other),
    }
}

/// Test a zero display limit is rejected
#[test]
fn test_zero_limit_rejected() {
    let yaml = r#"
source:
  base_url: https://api.bmkg.go.id/publik
  adm4: "33.05.05.2009"
display:
  limit: 0
"#;
    let err = Config::from_yaml(yaml).unwrap_err().to_string();
    assert!(err.contains("Display limit"));
}

/// Test the shipped config loads without any environment set up
#[test]
fn test_bundled_config_loads() {
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("config/config.yaml");
    let config = Config::load(path).expect("Bundled config should load");
    assert_eq!(config.station.name, "Purbalingga");
    assert_eq!(config.display.limit, 6);
}
