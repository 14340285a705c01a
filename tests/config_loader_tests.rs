use rideshare::config::{ConfigError, ConfigLoader};
use std::{
    env, fs,
    path::PathBuf,
    sync::{Mutex, MutexGuard, OnceLock},
};
use tempfile::TempDir;

fn env_lock() -> &'static Mutex<()> {
    static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
    LOCK.get_or_init(|| Mutex::new(()))
}

fn env_guard() -> MutexGuard<'static, ()> {
    env_lock()
        .lock()
        .unwrap_or_else(|poison| poison.into_inner())
}

fn clear_env() {
    unsafe {
        env::remove_var("RIDESHARE_PROFILE");
        env::remove_var("RIDESHARE_DATABASE_URL");
        env::remove_var("RIDESHARE_LOG_LEVEL");
        env::remove_var("RIDESHARE_LOG_FORMAT");
        env::remove_var("RIDESHARE_DB_MAX_CONNECTIONS");
    }
}

fn write_env_file(dir: &TempDir, name: &str, contents: &str) {
    let path = dir.path().join(name);
    fs::write(path, contents).unwrap();
}

#[test]
fn loads_defaults_when_no_env_present() {
    let _guard = env_guard();
    clear_env();

    let temp_dir = TempDir::new().unwrap();
    let loader = ConfigLoader::with_base_dir(PathBuf::from(temp_dir.path()));
    let cfg = loader.load().expect("config loads with defaults");

    assert_eq!(cfg.profile, "local");
    assert_eq!(cfg.log_level, "info");
    assert_eq!(cfg.log_format, "pretty");
    assert_eq!(cfg.db_max_connections, 5);
    assert!(cfg.database_url.starts_with("postgres://"));
    clear_env();
}

#[test]
fn layered_env_files_apply_in_order() {
    let _guard = env_guard();
    clear_env();

    let temp_dir = TempDir::new().unwrap();
    write_env_file(
        &temp_dir,
        ".env",
        "RIDESHARE_DATABASE_URL=postgres://localhost/from_env\n",
    );
    write_env_file(
        &temp_dir,
        ".env.test",
        "RIDESHARE_DATABASE_URL=postgres://localhost/from_profile\n",
    );
    write_env_file(
        &temp_dir,
        ".env.test.local",
        "RIDESHARE_DATABASE_URL=postgres://localhost/from_profile_local\n",
    );

    // Select profile via .env.local before profile-specific files load.
    write_env_file(
        &temp_dir,
        ".env.local",
        "RIDESHARE_PROFILE=test\nRIDESHARE_DATABASE_URL=postgres://localhost/from_local\nRIDESHARE_LOG_LEVEL=debug\n",
    );

    let loader = ConfigLoader::with_base_dir(PathBuf::from(temp_dir.path()));
    let cfg = loader.load().expect("config loads with layered env files");

    assert_eq!(cfg.profile, "test");
    assert_eq!(cfg.database_url, "postgres://localhost/from_profile_local");
    assert_eq!(cfg.log_level, "debug");
    clear_env();
}

#[test]
fn os_environment_has_highest_precedence() {
    let _guard = env_guard();
    clear_env();

    let temp_dir = TempDir::new().unwrap();
    write_env_file(
        &temp_dir,
        ".env",
        "RIDESHARE_DATABASE_URL=postgres://localhost/from_file\nRIDESHARE_DB_MAX_CONNECTIONS=2\n",
    );

    unsafe {
        env::set_var("RIDESHARE_DATABASE_URL", "sqlite::memory:");
    }

    let loader = ConfigLoader::with_base_dir(PathBuf::from(temp_dir.path()));
    let cfg = loader.load().expect("config loads with env override");
    assert_eq!(cfg.database_url, "sqlite::memory:");
    assert_eq!(cfg.db_max_connections, 2);

    clear_env();
}

#[test]
fn keys_without_prefix_are_ignored() {
    let _guard = env_guard();
    clear_env();

    let temp_dir = TempDir::new().unwrap();
    write_env_file(
        &temp_dir,
        ".env",
        "DATABASE_URL=postgres://localhost/unprefixed\nLOG_LEVEL=trace\n",
    );

    let loader = ConfigLoader::with_base_dir(PathBuf::from(temp_dir.path()));
    let cfg = loader.load().expect("config loads");
    assert_ne!(cfg.database_url, "postgres://localhost/unprefixed");
    assert_eq!(cfg.log_level, "info");

    clear_env();
}

#[test]
fn invalid_log_format_returns_error() {
    let _guard = env_guard();
    clear_env();

    let temp_dir = TempDir::new().unwrap();
    unsafe {
        env::set_var("RIDESHARE_LOG_FORMAT", "xml");
    }
    let loader = ConfigLoader::with_base_dir(PathBuf::from(temp_dir.path()));
    let err = loader.load().expect_err("invalid log format should fail");
    assert!(format!("{}", err).contains("log format"));

    clear_env();
}

#[test]
fn unparseable_max_connections_returns_error() {
    let _guard = env_guard();
    clear_env();

    let temp_dir = TempDir::new().unwrap();
    write_env_file(&temp_dir, ".env", "RIDESHARE_DB_MAX_CONNECTIONS=abc\n");

    let loader = ConfigLoader::with_base_dir(PathBuf::from(temp_dir.path()));
    let err = loader
        .load()
        .expect_err("non-numeric max connections should fail");
    assert!(matches!(
        err,
        ConfigError::InvalidNumber { ref key, ref value }
            if key == "RIDESHARE_DB_MAX_CONNECTIONS" && value == "abc"
    ));

    clear_env();
}
