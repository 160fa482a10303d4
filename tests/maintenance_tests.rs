use predicates::str::contains;
use std::fs;

mod common;
use common::{init_db, plg, register_and_login, seed_day, setup_test_db, temp_out};

#[test]
fn test_init_creates_database() {
    let db_path = setup_test_db("init_creates_db");

    plg()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("Database initialized at"));

    assert!(std::path::Path::new(&db_path).exists());
}

#[test]
fn test_db_info_reports_logged_days() {
    let db_path = setup_test_db("db_info");

    init_db(&db_path);
    seed_day(&db_path, "2025-06-10", 3600);
    seed_day(&db_path, "2025-06-11", 7200);

    plg()
        .args(["--db", &db_path, "--test", "db", "--info"])
        .assert()
        .success()
        .stdout(contains("Logged days"))
        .stdout(contains("2"))
        .stdout(contains("2025-06-10"))
        .stdout(contains("2025-06-11"));
}

#[test]
fn test_db_check_reports_ok() {
    let db_path = setup_test_db("db_check");

    init_db(&db_path);

    plg()
        .args(["--db", &db_path, "--test", "db", "--check"])
        .assert()
        .success()
        .stdout(contains("Database integrity: ok"));
}

#[test]
fn test_log_records_operations() {
    let db_path = setup_test_db("log_records");

    init_db(&db_path);
    register_and_login(&db_path);

    plg()
        .args(["--db", &db_path, "--test", "punch", "--in"])
        .assert()
        .success();

    plg()
        .args(["--db", &db_path, "--test", "punch", "--out"])
        .assert()
        .success();

    plg()
        .args(["--db", &db_path, "--test", "log", "--print"])
        .assert()
        .success()
        .stdout(contains("Internal log"))
        .stdout(contains("register"))
        .stdout(contains("login"))
        .stdout(contains("punch_in"))
        .stdout(contains("punch_out"));
}

#[test]
fn test_backup_copies_database() {
    let db_path = setup_test_db("backup_copy");
    let out = temp_out("backup_copy", "sqlite");

    init_db(&db_path);
    seed_day(&db_path, "2025-06-10", 3600);

    plg()
        .args(["--db", &db_path, "--test", "backup", "--file", &out, "--force"])
        .assert()
        .success()
        .stdout(contains("Backup created:"));

    let src_len = fs::metadata(&db_path).expect("src metadata").len();
    let dst_len = fs::metadata(&out).expect("dst metadata").len();
    assert_eq!(src_len, dst_len);
}

#[test]
fn test_backup_compress_produces_zip() {
    let db_path = setup_test_db("backup_zip");
    let out = temp_out("backup_zip", "sqlite");

    init_db(&db_path);
    seed_day(&db_path, "2025-06-10", 3600);

    plg()
        .args([
            "--db", &db_path, "--test", "backup", "--file", &out, "--compress", "--force",
        ])
        .assert()
        .success()
        .stdout(contains("Compressed:"));

    let zip_path = std::path::Path::new(&out).with_extension("zip");
    assert!(zip_path.exists());
    // plain copy replaced by the zip
    assert!(!std::path::Path::new(&out).exists());
    fs::remove_file(&zip_path).ok();
}
