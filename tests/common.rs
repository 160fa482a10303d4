#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn plg() -> Command {
    cargo_bin_cmd!("punchlog")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_punchlog.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Initialize the DB schema for a test database
pub fn init_db(db_path: &str) {
    plg()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}

/// Register the default test account and log in
pub fn register_and_login(db_path: &str) {
    plg()
        .args([
            "--db",
            db_path,
            "--test",
            "register",
            "--username",
            "alice",
            "--email",
            "alice@example.com",
            "--password",
            "secret1",
            "--confirm",
            "secret1",
        ])
        .assert()
        .success();

    plg()
        .args([
            "--db", db_path, "--test", "login", "--username", "alice", "--password", "secret1",
        ])
        .assert()
        .success();
}

/// Seed attendance rows directly via the library DB API
pub fn seed_day(db_path: &str, date: &str, seconds: i64) {
    let conn = rusqlite::Connection::open(db_path).expect("open db");
    punchlog::db::initialize::init_db(&conn).expect("init db");
    let d = chrono::NaiveDate::parse_from_str(date, "%Y-%m-%d").expect("valid date");
    punchlog::db::queries::add_seconds(&conn, &d, seconds).expect("seed day");
}
