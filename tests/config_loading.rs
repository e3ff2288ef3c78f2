use std::path::PathBuf;

use retention_os::config::AppConfig;

fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir()
        .join(format!("retention-os-{}", std::process::id()))
        .join(name)
}

#[test]
fn defaults_match_documented_values() {
    let config = AppConfig::default();
    assert_eq!(config.server.host, "127.0.0.1");
    assert_eq!(config.server.port, 8787);
    assert_eq!(config.pacing.delay_ms, 1500);
    assert_eq!(config.logging.level, "info");
    assert_eq!(config.logging.format, "pretty");
}

#[test]
fn partial_file_keeps_defaults_for_missing_fields() {
    let path = temp_path("partial.toml");
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(&path, "[server]\nport = 9000\n\n[pacing]\ndelay_ms = 0\n").unwrap();

    let config = AppConfig::from_file(&path).unwrap();
    assert_eq!(config.server.port, 9000);
    assert_eq!(config.server.host, "127.0.0.1");
    assert_eq!(config.pacing.delay_ms, 0);
    assert_eq!(config.logging, AppConfig::default().logging);
}

#[test]
fn written_config_reads_back() {
    let path = temp_path("nested/written.toml");
    let mut config = AppConfig::default();
    config.logging.format = "json".to_string();
    config.write(&path).unwrap();

    let loaded = AppConfig::from_file(&path).unwrap();
    assert_eq!(loaded, config);
}

#[test]
fn malformed_file_reports_parse_error() {
    let path = temp_path("broken.toml");
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(&path, "[server\nport = ").unwrap();

    let err = AppConfig::from_file(&path).unwrap_err();
    assert!(err.starts_with("failed to parse config"));
}

#[test]
fn missing_file_falls_back_to_defaults() {
    let path = temp_path("does-not-exist.toml");
    let (config, resolved) = AppConfig::load(Some(path.clone())).unwrap();
    assert_eq!(resolved, Some(path));
    assert_eq!(config.logging.format, AppConfig::default().logging.format);
}
