//! Registration, login, and logout against the single local account record.

use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::{AppError, AppResult};
use crate::models::user::UserRecord;
use crate::ui::messages::{success, warning};
use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};

pub const PASSWORD_MIN_LEN: usize = 6;
pub const PASSWORD_MAX_LEN: usize = 12;

/// Accepts anything of the form `local@domain.tld` without whitespace.
const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";

pub fn validate_username(username: &str) -> AppResult<()> {
    if username.trim().is_empty() {
        return Err(AppError::Validation("Username is required".into()));
    }
    Ok(())
}

pub fn validate_email(email: &str) -> AppResult<()> {
    let re = regex::Regex::new(EMAIL_PATTERN).expect("valid email pattern");
    if !re.is_match(email) {
        return Err(AppError::Validation(
            "Please enter a valid email address".into(),
        ));
    }
    Ok(())
}

/// Length 6–12 plus confirmation equality, in that order.
pub fn validate_password(password: &str, confirm: &str) -> AppResult<()> {
    if password.len() < PASSWORD_MIN_LEN {
        return Err(AppError::Validation(
            "Password must be at least 6 characters".into(),
        ));
    }
    if password.len() > PASSWORD_MAX_LEN {
        return Err(AppError::Validation(
            "Password cannot be more than 12 characters".into(),
        ));
    }
    if password != confirm {
        return Err(AppError::Validation("Passwords do not match".into()));
    }
    Ok(())
}

/// Hash a password with Argon2 and a fresh random salt.
pub fn hash_password(password: &str) -> AppResult<String> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| AppError::Auth(format!("Failed to hash password: {}", e)))?;
    Ok(hash.to_string())
}

pub fn verify_password(password: &str, stored_hash: &str) -> bool {
    match PasswordHash::new(stored_hash) {
        Ok(parsed) => Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok(),
        Err(_) => false,
    }
}

pub struct AuthLogic;

impl AuthLogic {
    /// Register the local account, overwriting any existing record.
    pub fn register(
        pool: &mut DbPool,
        username: &str,
        email: &str,
        password: &str,
        confirm: &str,
    ) -> AppResult<()> {
        validate_username(username)?;
        validate_email(email)?;
        validate_password(password, confirm)?;

        let hash = hash_password(password)?;
        let user = UserRecord::new(username.to_string(), email.to_string(), hash);
        queries::save_account(&pool.conn, &user)?;

        if let Err(e) = ttlog(
            &pool.conn,
            "register",
            username,
            "Account record registered",
        ) {
            eprintln!("⚠️ Failed to write internal log: {}", e);
        }

        success("Registration successful! Please log in.");
        Ok(())
    }

    /// Exact username match plus password verification against the stored
    /// hash. Opens the login session on success.
    pub fn login(pool: &mut DbPool, username: &str, password: &str) -> AppResult<()> {
        validate_username(username)?;

        let account = queries::load_account(&pool.conn)?.ok_or_else(|| {
            AppError::Auth("No registered user found. Please register first.".into())
        })?;

        if username != account.username || !verify_password(password, &account.password_hash) {
            return Err(AppError::Auth("Invalid username or password".into()));
        }

        queries::open_session(&pool.conn, username)?;

        if let Err(e) = ttlog(&pool.conn, "login", username, "Login session opened") {
            eprintln!("⚠️ Failed to write internal log: {}", e);
        }

        success(format!("Welcome, {}!", username));
        Ok(())
    }

    /// Close the login session; any active punch is dropped with it.
    pub fn logout(pool: &mut DbPool) -> AppResult<()> {
        let removed = queries::close_session(&pool.conn)?;

        if removed == 0 {
            warning("No active login session.");
            return Ok(());
        }

        if let Err(e) = ttlog(&pool.conn, "logout", "", "Login session closed") {
            eprintln!("⚠️ Failed to write internal log: {}", e);
        }

        success("Logged out.");
        Ok(())
    }
}
