use predicates::str::contains;

mod common;
use common::{init_db, plg, register_and_login, setup_test_db};

#[test]
fn test_forgot_password_full_flow_updates_password() {
    let db_path = setup_test_db("recovery_full_flow");

    init_db(&db_path);
    register_and_login(&db_path);

    // Username, email, pinned OTP, new password, confirmation
    plg()
        .args(["--db", &db_path, "--test", "forgot-password"])
        .write_stdin("alice\nalice@example.com\n000000\nnewpass1\nnewpass1\n")
        .assert()
        .success()
        .stdout(contains("OTP sent to your email: 000000"))
        .stdout(contains("Password updated successfully! Please log in."));

    // Old password is rejected
    plg()
        .args([
            "--db", &db_path, "--test", "login", "--username", "alice", "--password", "secret1",
        ])
        .assert()
        .failure()
        .stderr(contains("Invalid username or password"));

    // New password logs in
    plg()
        .args([
            "--db", &db_path, "--test", "login", "--username", "alice", "--password", "newpass1",
        ])
        .assert()
        .success()
        .stdout(contains("Welcome, alice!"));
}

#[test]
fn test_forgot_password_requires_registered_account() {
    let db_path = setup_test_db("recovery_no_account");

    init_db(&db_path);

    plg()
        .args(["--db", &db_path, "--test", "forgot-password"])
        .write_stdin("alice\n")
        .assert()
        .failure()
        .stderr(contains("No registered user found."));
}

#[test]
fn test_forgot_password_rejects_unknown_username() {
    let db_path = setup_test_db("recovery_bad_username");

    init_db(&db_path);
    register_and_login(&db_path);

    plg()
        .args(["--db", &db_path, "--test", "forgot-password"])
        .write_stdin("mallory\n")
        .assert()
        .failure()
        .stderr(contains(
            "Username not found. Please enter a registered username.",
        ));
}

#[test]
fn test_forgot_password_rejects_unknown_email() {
    let db_path = setup_test_db("recovery_bad_email");

    init_db(&db_path);
    register_and_login(&db_path);

    plg()
        .args(["--db", &db_path, "--test", "forgot-password"])
        .write_stdin("alice\nwrong@example.com\n")
        .assert()
        .failure()
        .stderr(contains("Email not found. Please enter a registered email."));
}

#[test]
fn test_forgot_password_rejects_wrong_otp() {
    let db_path = setup_test_db("recovery_wrong_otp");

    init_db(&db_path);
    register_and_login(&db_path);

    plg()
        .args(["--db", &db_path, "--test", "forgot-password"])
        .write_stdin("alice\nalice@example.com\n111111\n")
        .assert()
        .failure()
        .stderr(contains("Invalid OTP. Please try again."));

    // The stored password is untouched
    plg()
        .args([
            "--db", &db_path, "--test", "login", "--username", "alice", "--password", "secret1",
        ])
        .assert()
        .success();
}

#[test]
fn test_forgot_password_validates_new_password() {
    let db_path = setup_test_db("recovery_bad_new_pw");

    init_db(&db_path);
    register_and_login(&db_path);

    plg()
        .args(["--db", &db_path, "--test", "forgot-password"])
        .write_stdin("alice\nalice@example.com\n000000\nabc\nabc\n")
        .assert()
        .failure()
        .stderr(contains("Password must be at least 6 characters"));

    plg()
        .args(["--db", &db_path, "--test", "forgot-password"])
        .write_stdin("alice\nalice@example.com\n000000\nnewpass1\nnewpass2\n")
        .assert()
        .failure()
        .stderr(contains("Passwords do not match"));
}
