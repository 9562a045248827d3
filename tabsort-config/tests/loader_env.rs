use std::{fs, sync::Mutex};

use once_cell::sync::Lazy;
use tabsort_config::{
    ConfigLoadError, ConfigLoader, ConfigSource,
    loader::{CONFIG_JSON_VAR, CONFIG_PATH_VAR, ENABLED_VAR},
};
use tempfile::tempdir;

static ENV_LOCK: Lazy<Mutex<()>> = Lazy::new(|| Mutex::new(()));

fn env_guard() -> std::sync::MutexGuard<'static, ()> {
    let guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    for key in [CONFIG_PATH_VAR, CONFIG_JSON_VAR, ENABLED_VAR] {
        unsafe { std::env::remove_var(key) };
    }
    guard
}

#[test]
fn defaults_when_nothing_is_configured() {
    let _guard = env_guard();
    let dir = tempdir().unwrap();

    let load = ConfigLoader::new().with_base_dir(dir.path()).load().unwrap();
    assert_eq!(load.source, ConfigSource::Default);
    assert!(load.config.enabled);
    assert_eq!(load.config.query_sort_parameter, "query-sort");
}

#[test]
fn default_file_is_discovered_in_base_dir() {
    let _guard = env_guard();
    let dir = tempdir().unwrap();
    fs::create_dir_all(dir.path().join("config")).unwrap();
    let path = dir.path().join("config/tabsort.toml");
    fs::write(&path, "stopwatch_tag = \"custom\"\n").unwrap();

    let load = ConfigLoader::new().with_base_dir(dir.path()).load().unwrap();
    assert_eq!(load.source, ConfigSource::File(path));
    assert_eq!(load.config.stopwatch_tag, "custom");
}

#[test]
fn env_path_wins_over_inline_and_files() {
    let _guard = env_guard();
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("tabsort.toml"), "enabled = true\n").unwrap();
    let env_path = dir.path().join("override.json");
    fs::write(&env_path, r#"{"query_sort_parameter": "order"}"#).unwrap();

    unsafe {
        std::env::set_var(CONFIG_PATH_VAR, &env_path);
        std::env::set_var(CONFIG_JSON_VAR, r#"{"query_sort_parameter": "inline"}"#);
    }

    let load = ConfigLoader::new().with_base_dir(dir.path()).load().unwrap();
    assert_eq!(load.source, ConfigSource::EnvPath(env_path));
    assert_eq!(load.config.query_sort_parameter, "order");
}

#[test]
fn inline_json_wins_over_files() {
    let _guard = env_guard();
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("tabsort.json"), r#"{"enabled": true}"#).unwrap();
    unsafe { std::env::set_var(CONFIG_JSON_VAR, r#"{"enabled": false}"#) };

    let load = ConfigLoader::new().with_base_dir(dir.path()).load().unwrap();
    assert_eq!(load.source, ConfigSource::EnvInline);
    assert!(!load.config.enabled);
}

#[test]
fn enabled_override_applies_on_top() {
    let _guard = env_guard();
    let dir = tempdir().unwrap();
    let path = dir.path().join("explicit.toml");
    fs::write(&path, "enabled = true\n").unwrap();
    unsafe { std::env::set_var(ENABLED_VAR, "off") };

    let load = ConfigLoader::new().load_explicit(&path).unwrap();
    assert_eq!(load.source, ConfigSource::Explicit(path));
    assert!(!load.config.enabled);

    unsafe { std::env::set_var(ENABLED_VAR, "sometimes") };
    let err = ConfigLoader::new()
        .with_base_dir(dir.path())
        .load()
        .unwrap_err();
    assert!(matches!(err, ConfigLoadError::InvalidEnv { .. }));
}

#[test]
fn invalid_values_are_rejected() {
    let _guard = env_guard();
    unsafe { std::env::set_var(CONFIG_JSON_VAR, r#"{"indexed_column_prefix": ""}"#) };

    let err = ConfigLoader::new().load().unwrap_err();
    assert!(matches!(err, ConfigLoadError::Invalid(_)));

    unsafe { std::env::set_var(CONFIG_JSON_VAR, "{not json") };
    let err = ConfigLoader::new().load().unwrap_err();
    assert!(matches!(err, ConfigLoadError::Parse { .. }));
}

#[test]
fn missing_explicit_file_reports_path() {
    let _guard = env_guard();
    let dir = tempdir().unwrap();
    let missing = dir.path().join("nope.toml");

    let err = ConfigLoader::new().load_explicit(&missing).unwrap_err();
    assert!(matches!(err, ConfigLoadError::Read { .. }));
    assert!(err.to_string().contains("nope.toml"));
}
