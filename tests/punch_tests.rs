use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{init_db, plg, register_and_login, seed_day, setup_test_db};

fn today_key() -> String {
    chrono::Local::now().date_naive().format("%Y-%m-%d").to_string()
}

#[test]
fn test_punch_requires_login() {
    let db_path = setup_test_db("punch_requires_login");

    init_db(&db_path);

    plg()
        .args(["--db", &db_path, "--test", "punch", "--in"])
        .assert()
        .failure()
        .stderr(contains("Not logged in"));
}

#[test]
fn test_punch_in_then_out_records_day_total() {
    let db_path = setup_test_db("punch_in_out");

    init_db(&db_path);
    register_and_login(&db_path);

    plg()
        .args(["--db", &db_path, "--test", "punch", "--in"])
        .assert()
        .success()
        .stdout(contains("Punched in at"));

    plg()
        .args(["--db", &db_path, "--test", "punch", "--out"])
        .assert()
        .success()
        .stdout(contains("Punched out:"))
        .stdout(contains(&today_key()));

    // A row for today now exists in the timesheet
    plg()
        .args(["--db", &db_path, "--test", "timesheet"])
        .assert()
        .success()
        .stdout(contains(&today_key()));
}

#[test]
fn test_punch_out_below_threshold_raises_warning() {
    let db_path = setup_test_db("punch_short_day");

    init_db(&db_path);
    register_and_login(&db_path);

    // A near-instant session stays far below the 9-hour minimum
    plg()
        .args(["--db", &db_path, "--test", "punch", "--in"])
        .assert()
        .success();

    plg()
        .args(["--db", &db_path, "--test", "punch", "--out"])
        .assert()
        .success()
        .stdout(contains("9 hours not completed!"));
}

#[test]
fn test_punch_out_at_threshold_no_warning() {
    let db_path = setup_test_db("punch_full_day");

    init_db(&db_path);
    register_and_login(&db_path);

    // Pre-load today with a full 9 hours; the extra instant punch keeps
    // the total at or above the threshold.
    seed_day(&db_path, &today_key(), 9 * 60 * 60);

    plg()
        .args(["--db", &db_path, "--test", "punch", "--in"])
        .assert()
        .success();

    plg()
        .args(["--db", &db_path, "--test", "punch", "--out"])
        .assert()
        .success()
        .stdout(contains("9 hours not completed!").not());
}

#[test]
fn test_repeated_punches_accumulate() {
    let db_path = setup_test_db("punch_accumulate");

    init_db(&db_path);
    register_and_login(&db_path);

    // Two prior sessions already logged for today
    seed_day(&db_path, &today_key(), 3600);
    seed_day(&db_path, &today_key(), 1800);

    // The seeded totals add up instead of overwriting: 1:30:00
    plg()
        .args(["--db", &db_path, "--test", "timesheet"])
        .assert()
        .success()
        .stdout(contains("1:30:00"));

    // Another punch keeps accumulating on the same row
    plg()
        .args(["--db", &db_path, "--test", "punch", "--in"])
        .assert()
        .success();

    plg()
        .args(["--db", &db_path, "--test", "punch", "--out"])
        .assert()
        .success()
        .stdout(contains("day total 1:30:0"));
}

#[test]
fn test_double_punch_in_rejected() {
    let db_path = setup_test_db("punch_double_in");

    init_db(&db_path);
    register_and_login(&db_path);

    plg()
        .args(["--db", &db_path, "--test", "punch", "--in"])
        .assert()
        .success();

    plg()
        .args(["--db", &db_path, "--test", "punch", "--in"])
        .assert()
        .failure()
        .stderr(contains("Already punched in"));
}

#[test]
fn test_punch_out_while_idle_rejected() {
    let db_path = setup_test_db("punch_out_idle");

    init_db(&db_path);
    register_and_login(&db_path);

    plg()
        .args(["--db", &db_path, "--test", "punch", "--out"])
        .assert()
        .failure()
        .stderr(contains("No active punch session"));
}

#[test]
fn test_punch_in_for_other_date_rejected() {
    let db_path = setup_test_db("punch_other_date");

    init_db(&db_path);
    register_and_login(&db_path);

    plg()
        .args([
            "--db",
            &db_path,
            "--test",
            "punch",
            "--in",
            "--date",
            "2000-01-01",
        ])
        .assert()
        .failure()
        .stderr(contains("Punching is only allowed for the current date"));
}

#[test]
fn test_logout_drops_active_punch() {
    let db_path = setup_test_db("punch_logout_drops");

    init_db(&db_path);
    register_and_login(&db_path);

    plg()
        .args(["--db", &db_path, "--test", "punch", "--in"])
        .assert()
        .success();

    plg()
        .args(["--db", &db_path, "--test", "logout"])
        .assert()
        .success();

    plg()
        .args([
            "--db", &db_path, "--test", "login", "--username", "alice", "--password", "secret1",
        ])
        .assert()
        .success();

    // The punch did not survive the logout
    plg()
        .args(["--db", &db_path, "--test", "punch", "--out"])
        .assert()
        .failure()
        .stderr(contains("No active punch session"));
}

#[test]
fn test_status_shows_state_and_saved_total() {
    let db_path = setup_test_db("punch_status");

    init_db(&db_path);
    register_and_login(&db_path);

    seed_day(&db_path, &today_key(), 7200);

    plg()
        .args(["--db", &db_path, "--test", "status"])
        .assert()
        .success()
        .stdout(contains("State idle"))
        .stdout(contains("2:00:00"));

    plg()
        .args(["--db", &db_path, "--test", "punch", "--in"])
        .assert()
        .success();

    plg()
        .args(["--db", &db_path, "--test", "status"])
        .assert()
        .success()
        .stdout(contains("State active"))
        .stdout(contains("Elapsed"));
}
