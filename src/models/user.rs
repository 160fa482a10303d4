use serde::Serialize;

/// The single local account record.
/// Overwritten wholesale on registration or password reset; at most one
/// record exists at a time (enforced by the `account` table schema).
#[derive(Debug, Clone, Serialize)]
pub struct UserRecord {
    pub username: String,       // ⇔ account.username
    pub email: String,          // ⇔ account.email
    pub password_hash: String,  // ⇔ account.password_hash (Argon2 PHC string)
    pub created_at: String,     // ⇔ account.created_at (TEXT, ISO8601)
}

impl UserRecord {
    pub fn new(username: String, email: String, password_hash: String) -> Self {
        Self {
            username,
            email,
            password_hash,
            created_at: chrono::Local::now().to_rfc3339(),
        }
    }
}
