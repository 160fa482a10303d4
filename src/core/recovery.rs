//! Mocked OTP password-recovery flow.
//!
//! Linear interactive sequence: username check → email check → OTP issue
//! and verification → new password. The OTP lives only in this process for
//! the duration of the flow; it is displayed, never transmitted or stored.

use crate::core::auth::{hash_password, validate_password};
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success};
use rand::Rng;
use std::io::{self, Write};

/// Ephemeral 6-digit recovery code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OtpCode(String);

impl OtpCode {
    pub fn generate() -> Self {
        let n: u32 = rand::thread_rng().gen_range(100_000..1_000_000);
        OtpCode(n.to_string())
    }

    /// Fixed code used under the hidden --test flag so the interactive flow
    /// can be driven from integration tests.
    pub fn pinned() -> Self {
        OtpCode("000000".to_string())
    }

    pub fn matches(&self, input: &str) -> bool {
        self.0 == input.trim()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn prompt(label: &str) -> AppResult<String> {
    print!("{}", label);
    io::stdout().flush().ok();

    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

pub struct RecoveryLogic;

impl RecoveryLogic {
    pub fn run(pool: &mut DbPool, test_mode: bool) -> AppResult<()> {
        let account = queries::load_account(&pool.conn)?
            .ok_or_else(|| AppError::Auth("No registered user found.".into()))?;

        // 1) Username must match the stored record before proceeding.
        let username = prompt("Username: ")?;
        if username != account.username {
            return Err(AppError::Auth(
                "Username not found. Please enter a registered username.".into(),
            ));
        }

        // 2) Email must match before the OTP is issued.
        let email = prompt("Email: ")?;
        if email != account.email {
            return Err(AppError::Auth(
                "Email not found. Please enter a registered email.".into(),
            ));
        }

        // 3) "Send" the OTP (displayed, not transmitted).
        let otp = if test_mode {
            OtpCode::pinned()
        } else {
            OtpCode::generate()
        };
        info(format!("OTP sent to your email: {}", otp.as_str()));

        let entered = prompt("Enter OTP: ")?;
        if !otp.matches(&entered) {
            return Err(AppError::Auth("Invalid OTP. Please try again.".into()));
        }

        // 4) New password, same rules as registration.
        let password = prompt("New password: ")?;
        let confirm = prompt("Confirm new password: ")?;
        validate_password(&password, &confirm)?;

        let hash = hash_password(&password)?;
        queries::update_account_password(&pool.conn, &hash)?;

        if let Err(e) = ttlog(
            &pool.conn,
            "reset_password",
            &account.username,
            "Password overwritten via OTP recovery",
        ) {
            eprintln!("⚠️ Failed to write internal log: {}", e);
        }

        success("Password updated successfully! Please log in.");
        Ok(())
    }
}
