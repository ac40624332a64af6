use std::fs;

use serial_test::serial;
use vibecoder_config::*;

#[test]
#[serial]
fn test_load_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(
        &path,
        "enable_time_trigger = false\nupdate_interval_minutes = 10\n",
    )
    .unwrap();

    let config = ConfigManager::with_path(path).load().unwrap();
    assert!(!config.enable_time_trigger);
    assert!(config.enable_language_trigger);
    assert_eq!(config.update_interval_minutes, 10);
}

#[test]
#[serial]
fn test_explicit_missing_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let manager = ConfigManager::with_path(dir.path().join("missing.toml"));
    assert!(matches!(manager.load(), Err(ConfigError::NotFound(_))));
}

#[test]
#[serial]
fn test_environment_overrides_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "log_level = \"info\"\n").unwrap();

    std::env::set_var("VIBECODERTEST_LOG_LEVEL", "debug");
    std::env::set_var("VIBECODERTEST_UPDATE_INTERVAL_MINUTES", "7");
    let config = ConfigManager::with_path(path)
        .with_env_prefix("VIBECODERTEST")
        .load();
    std::env::remove_var("VIBECODERTEST_LOG_LEVEL");
    std::env::remove_var("VIBECODERTEST_UPDATE_INTERVAL_MINUTES");

    let config = config.unwrap();
    assert_eq!(config.log_level, LogLevel::Debug);
    assert_eq!(config.update_interval_minutes, 7);
}

#[test]
#[serial]
fn test_save_then_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("config.toml");
    let manager = ConfigManager::with_path(path);

    let config = VibeConfig {
        enable_language_trigger: false,
        profile: Profile::Showcase,
        log_level: LogLevel::Off,
        ..Default::default()
    };
    manager.save(&config).unwrap();

    assert_eq!(manager.load().unwrap(), config);
}
