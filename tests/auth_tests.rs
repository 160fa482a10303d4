use predicates::str::contains;

mod common;
use common::{init_db, plg, register_and_login, setup_test_db};

#[test]
fn test_register_then_login_succeeds() {
    let db_path = setup_test_db("register_then_login");

    init_db(&db_path);

    plg()
        .args([
            "--db",
            &db_path,
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
        .success()
        .stdout(contains("Registration successful! Please log in."));

    plg()
        .args([
            "--db", &db_path, "--test", "login", "--username", "alice", "--password", "secret1",
        ])
        .assert()
        .success()
        .stdout(contains("Welcome, alice!"));
}

#[test]
fn test_login_with_wrong_password_fails() {
    let db_path = setup_test_db("login_wrong_password");

    init_db(&db_path);
    register_and_login(&db_path);

    plg()
        .args([
            "--db", &db_path, "--test", "login", "--username", "alice", "--password", "wrong99",
        ])
        .assert()
        .failure()
        .stderr(contains("Invalid username or password"));
}

#[test]
fn test_login_with_wrong_username_fails() {
    let db_path = setup_test_db("login_wrong_username");

    init_db(&db_path);
    register_and_login(&db_path);

    plg()
        .args([
            "--db", &db_path, "--test", "login", "--username", "bob", "--password", "secret1",
        ])
        .assert()
        .failure()
        .stderr(contains("Invalid username or password"));
}

#[test]
fn test_login_without_account_fails() {
    let db_path = setup_test_db("login_no_account");

    init_db(&db_path);

    plg()
        .args([
            "--db", &db_path, "--test", "login", "--username", "alice", "--password", "secret1",
        ])
        .assert()
        .failure()
        .stderr(contains("No registered user found. Please register first."));
}

#[test]
fn test_register_rejects_invalid_email() {
    let db_path = setup_test_db("register_bad_email");

    init_db(&db_path);

    plg()
        .args([
            "--db",
            &db_path,
            "--test",
            "register",
            "--username",
            "alice",
            "--email",
            "not-an-email",
            "--password",
            "secret1",
            "--confirm",
            "secret1",
        ])
        .assert()
        .failure()
        .stderr(contains("Please enter a valid email address"));
}

#[test]
fn test_register_rejects_short_password() {
    let db_path = setup_test_db("register_short_pw");

    init_db(&db_path);

    plg()
        .args([
            "--db",
            &db_path,
            "--test",
            "register",
            "--username",
            "alice",
            "--email",
            "alice@example.com",
            "--password",
            "abc",
            "--confirm",
            "abc",
        ])
        .assert()
        .failure()
        .stderr(contains("Password must be at least 6 characters"));
}

#[test]
fn test_register_rejects_long_password() {
    let db_path = setup_test_db("register_long_pw");

    init_db(&db_path);

    plg()
        .args([
            "--db",
            &db_path,
            "--test",
            "register",
            "--username",
            "alice",
            "--email",
            "alice@example.com",
            "--password",
            "averyverylongpassword",
            "--confirm",
            "averyverylongpassword",
        ])
        .assert()
        .failure()
        .stderr(contains("Password cannot be more than 12 characters"));
}

#[test]
fn test_register_rejects_password_mismatch() {
    let db_path = setup_test_db("register_pw_mismatch");

    init_db(&db_path);

    plg()
        .args([
            "--db",
            &db_path,
            "--test",
            "register",
            "--username",
            "alice",
            "--email",
            "alice@example.com",
            "--password",
            "secret1",
            "--confirm",
            "secret2",
        ])
        .assert()
        .failure()
        .stderr(contains("Passwords do not match"));
}

#[test]
fn test_register_overwrites_previous_account() {
    let db_path = setup_test_db("register_overwrite");

    init_db(&db_path);
    register_and_login(&db_path);

    // Register a new account: the old record is replaced wholesale
    plg()
        .args([
            "--db",
            &db_path,
            "--test",
            "register",
            "--username",
            "bob",
            "--email",
            "bob@example.com",
            "--password",
            "hunter2x",
            "--confirm",
            "hunter2x",
        ])
        .assert()
        .success();

    // Old credentials no longer work
    plg()
        .args([
            "--db", &db_path, "--test", "login", "--username", "alice", "--password", "secret1",
        ])
        .assert()
        .failure()
        .stderr(contains("Invalid username or password"));

    // New credentials do
    plg()
        .args([
            "--db", &db_path, "--test", "login", "--username", "bob", "--password", "hunter2x",
        ])
        .assert()
        .success()
        .stdout(contains("Welcome, bob!"));
}

#[test]
fn test_logout_closes_session() {
    let db_path = setup_test_db("logout_closes");

    init_db(&db_path);
    register_and_login(&db_path);

    plg()
        .args(["--db", &db_path, "--test", "logout"])
        .assert()
        .success()
        .stdout(contains("Logged out."));

    // Dashboard commands are gated again
    plg()
        .args(["--db", &db_path, "--test", "timesheet"])
        .assert()
        .failure()
        .stderr(contains("Not logged in"));
}

#[test]
fn test_logout_without_session_warns() {
    let db_path = setup_test_db("logout_idle");

    init_db(&db_path);

    plg()
        .args(["--db", &db_path, "--test", "logout"])
        .assert()
        .success()
        .stdout(contains("No active login session."));
}
