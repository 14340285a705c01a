//! End-to-end tests for the `sample-data` binary against a file-backed SQLite
//! database.

use std::path::Path;
use std::process::{Command, Output};

use tempfile::TempDir;

fn run_sample_data(env_dir: &Path, database_url: &str) -> Output {
    let bin_path = assert_cmd::cargo::cargo_bin!("sample-data");

    Command::new(bin_path)
        .arg("--migrate")
        .arg("--env-dir")
        .arg(env_dir)
        .env_remove("RIDESHARE_PROFILE")
        .env_remove("RUST_LOG")
        .env_remove("RIDESHARE_LOG_FORMAT")
        .env("RIDESHARE_DATABASE_URL", database_url)
        .env("RIDESHARE_DB_MAX_CONNECTIONS", "1")
        .env("RIDESHARE_LOG_LEVEL", "warn")
        .output()
        .expect("failed to run sample-data binary")
}

fn sqlite_url(dir: &TempDir) -> String {
    format!("sqlite://{}?mode=rwc", dir.path().join("seed.db").display())
}

#[test]
fn seeds_fresh_database_then_refuses_to_reseed() {
    let dir = TempDir::new().unwrap();
    let url = sqlite_url(&dir);

    let first = run_sample_data(dir.path(), &url);
    let stdout = String::from_utf8_lossy(&first.stdout);
    assert!(
        first.status.success(),
        "first run failed: stdout={stdout} stderr={}",
        String::from_utf8_lossy(&first.stderr)
    );
    assert!(stdout.contains("Creating sample data..."));
    assert!(stdout.contains("Finished creating sample data."));

    let second = run_sample_data(dir.path(), &url);
    let stdout = String::from_utf8_lossy(&second.stdout);
    assert!(!second.status.success());
    assert!(stdout.contains("I found an error. Aborting..."));
    assert!(!stdout.contains("Finished creating sample data."));
}

#[test]
fn invalid_configuration_exits_before_connecting() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join(".env"), "RIDESHARE_LOG_FORMAT=xml\n").unwrap();

    let output = run_sample_data(dir.path(), &sqlite_url(&dir));

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Invalid configuration"));
    assert!(!dir.path().join("seed.db").exists());
}
