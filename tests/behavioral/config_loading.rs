// ABOUTME: Behavioral tests for configuration files written by hand

use tempfile::TempDir;
use viecnong::config::AppConfig;

#[test]
fn test_partial_file_keeps_defaults_for_missing_keys() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[api]\nbase_url = \"https://viecnong.example/api/v1\"\n").unwrap();

    let config = AppConfig::load_from(&path).unwrap();
    assert_eq!(config.api.base_url, "https://viecnong.example/api/v1");
    assert_eq!(config.api.timeout_secs, 30);
    assert!(config.ui.show_progress());
}

#[test]
fn test_session_path_override() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    let session_file = dir.path().join("phiên.json");
    std::fs::write(
        &path,
        format!("[session]\npath = {:?}\n", session_file.display().to_string()),
    )
    .unwrap();

    let config = AppConfig::load_from(&path).unwrap();
    assert_eq!(config.session_path().unwrap(), session_file);
}
