use std::fs;

use kit::config::{ConfigStore, Environment, SettingKey, Settings, settings};
use kit::context::AppContext;
use kit::error::AppError;

fn read_settings(store: &ConfigStore) -> Settings {
    let raw = fs::read_to_string(store.path()).expect("config file should exist");
    serde_json::from_str(&raw).expect("config file should be valid json")
}

#[test]
fn save_then_load_round_trips() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    let original = Settings {
        log_level: "trace".to_string(),
        progress: "fancy".to_string(),
        config_dir: "/srv/kit \"quoted\"".to_string(),
    };

    settings::save(&path, &original).unwrap();
    assert_eq!(settings::load(&path).unwrap(), original);
}

#[test]
fn set_updates_one_field_and_keeps_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let env = Environment::new(Some(dir.path().to_path_buf()), None);
    let store = ConfigStore::open(&env, None);

    store.set("LogLevel", "debug").unwrap();

    assert_eq!(store.path(), dir.path().join("config.json"));
    let stored = read_settings(&store);
    assert_eq!(stored.log_level, "debug");
    assert_eq!(stored.progress, "plain");
    assert_eq!(stored.config_dir, "");
}

#[test]
fn set_preserves_other_stored_values() {
    let dir = tempfile::tempdir().unwrap();
    let store = ConfigStore::new(dir.path().join("config.json"));

    store.set("progress", "fancy").unwrap();
    store.set("configDir", "/srv/kit").unwrap();

    assert_eq!(store.get("Progress").unwrap(), "fancy");
    assert_eq!(store.get("config_dir").unwrap(), "/srv/kit");
}

#[test]
fn set_replaces_corrupt_file_with_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let store = ConfigStore::new(dir.path().join("config.json"));
    fs::write(store.path(), "{\"log_level\": \"debug\",").unwrap();

    store.set("Progress", "fancy").unwrap();

    assert_eq!(
        fs::read_to_string(store.path()).unwrap(),
        "{\"log_level\":\"info\",\"progress\":\"fancy\",\"config_dir\":\"\"}\n"
    );
}

#[test]
fn set_keeps_stored_fields_next_to_null_values() {
    let dir = tempfile::tempdir().unwrap();
    let store = ConfigStore::new(dir.path().join("config.json"));
    fs::write(
        store.path(),
        r#"{"log_level":null,"progress":"fancy","config_dir":"/srv/kit"}"#,
    )
    .unwrap();

    store.set("LogLevel", "debug").unwrap();

    let stored = read_settings(&store);
    assert_eq!(stored.log_level, "debug");
    assert_eq!(stored.progress, "fancy");
    assert_eq!(stored.config_dir, "/srv/kit");
}

#[test]
fn array_document_is_not_a_settings_record() {
    let dir = tempfile::tempdir().unwrap();
    let store = ConfigStore::new(dir.path().join("config.json"));
    fs::write(store.path(), r#"["debug","fancy","/x"]"#).unwrap();

    assert!(matches!(store.get("progress"), Err(AppError::Decode(_))));

    store.set("configDir", "/srv/kit").unwrap();
    assert_eq!(
        read_settings(&store),
        Settings {
            log_level: "info".to_string(),
            progress: "plain".to_string(),
            config_dir: "/srv/kit".to_string(),
        }
    );
}

#[test]
fn unknown_key_fails_for_get_and_set() {
    let dir = tempfile::tempdir().unwrap();
    let store = ConfigStore::new(dir.path().join("config.json"));
    store.reset().unwrap();
    let before = fs::read_to_string(store.path()).unwrap();

    assert!(matches!(store.get("theme"), Err(AppError::UnknownKey(_))));
    assert!(matches!(
        store.set("loglevel", "debug"),
        Err(AppError::UnknownKey(_))
    ));
    assert_eq!(fs::read_to_string(store.path()).unwrap(), before);
}

#[test]
fn reset_then_list_yields_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let store = ConfigStore::new(dir.path().join("config.json"));
    store.set("LogLevel", "debug").unwrap();

    store.reset().unwrap();

    assert_eq!(
        store.list().unwrap(),
        vec![
            (SettingKey::LogLevel, "info".to_string()),
            (SettingKey::Progress, "plain".to_string()),
            (SettingKey::ConfigDir, String::new()),
        ]
    );
}

#[test]
fn list_propagates_decode_errors() {
    let dir = tempfile::tempdir().unwrap();
    let store = ConfigStore::new(dir.path().join("config.json"));
    fs::write(store.path(), "not json").unwrap();

    assert!(matches!(store.list(), Err(AppError::Decode(_))));
}

#[test]
fn profiles_do_not_interfere_with_default_file() {
    let dir = tempfile::tempdir().unwrap();
    let env = Environment::new(Some(dir.path().to_path_buf()), None);
    let default_store = ConfigStore::open(&env, None);
    let work_store = ConfigStore::open(&env, Some("work"));

    assert_eq!(
        work_store.path(),
        dir.path().join("profiles").join("work").join("config.json")
    );

    // Profile directories are not created on demand.
    assert!(matches!(
        work_store.set("progress", "fancy"),
        Err(AppError::Io(_))
    ));

    fs::create_dir_all(dir.path().join("profiles").join("work")).unwrap();
    work_store.set("progress", "fancy").unwrap();
    default_store.set("progress", "quiet").unwrap();

    assert_eq!(work_store.get("progress").unwrap(), "fancy");
    assert_eq!(default_store.get("progress").unwrap(), "quiet");
}

#[test]
fn context_scopes_store_to_trimmed_profile() {
    let dir = tempfile::tempdir().unwrap();
    let env = Environment::new(Some(dir.path().to_path_buf()), None);

    let ctx = AppContext::with_environment(&env, Some(" work ".to_string()), false);
    assert_eq!(ctx.profile.as_deref(), Some("work"));
    assert_eq!(
        ctx.store.path(),
        dir.path().join("profiles").join("work").join("config.json")
    );

    let ctx = AppContext::with_environment(&env, Some(String::new()), false);
    assert_eq!(ctx.profile, None);
    assert_eq!(ctx.store.path(), dir.path().join("config.json"));
}
