use crate::ui::messages::success;
use rusqlite::{Connection, Error, OptionalExtension, Result};

/// Ensure that the `log` table exists with the modern schema.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

/// Check if a table exists.
fn table_exists(conn: &Connection, name: &str) -> Result<bool> {
    let mut stmt =
        conn.prepare("SELECT name FROM sqlite_master WHERE type='table' AND name=?1")?;
    let exists: Option<String> = stmt.query_row([name], |row| row.get(0)).optional()?;
    Ok(exists.is_some())
}

/// Check if a table has a given column.
fn table_has_column(conn: &Connection, table: &str, column: &str) -> Result<bool> {
    let mut stmt = conn.prepare(&format!("PRAGMA table_info('{}')", table))?;
    let cols = stmt.query_map([], |row| row.get::<_, String>(1))?;

    for c in cols {
        if c? == column {
            return Ok(true);
        }
    }
    Ok(false)
}

/// Create the `account` table (single-row: the one local user record).
fn create_account_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS account (
            id            INTEGER PRIMARY KEY CHECK (id = 1),
            username      TEXT NOT NULL,
            email         TEXT NOT NULL,
            password_hash TEXT NOT NULL,
            created_at    TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

/// Create the `attendance` table (one row per calendar date).
fn create_attendance_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS attendance (
            date       TEXT PRIMARY KEY,
            seconds    INTEGER NOT NULL DEFAULT 0 CHECK (seconds >= 0),
            updated_at TEXT NOT NULL DEFAULT ''
        );
        "#,
    )?;
    Ok(())
}

/// Create the `session` table (single-row: login state + active punch).
fn create_session_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS session (
            id               INTEGER PRIMARY KEY CHECK (id = 1),
            username         TEXT NOT NULL,
            logged_in_at     TEXT NOT NULL,
            punch_date       TEXT,
            punch_started_at TEXT
        );
        "#,
    )?;
    Ok(())
}

/// Add `updated_at` to attendance tables created before 0.3.0.
fn migrate_add_attendance_updated_at(conn: &Connection) -> Result<(), Error> {
    let version = "20250430_0004_add_attendance_updated_at";

    // 1) Skip when already applied
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    if chk.query_row([version], |_| Ok(())).optional()?.is_some() {
        return Ok(());
    }

    if table_has_column(conn, "attendance", "updated_at")? {
        return Ok(());
    }

    // 2) Apply
    conn.execute(
        "ALTER TABLE attendance ADD COLUMN updated_at TEXT NOT NULL DEFAULT '';",
        [],
    )?;

    // 3) Mark as applied
    conn.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (datetime('now'), 'migration_applied', ?1, 'Added updated_at to attendance')",
        [version],
    )?;

    success(format!(
        "Migration applied: {} → added 'updated_at' to attendance table",
        version
    ));

    Ok(())
}

/// Public entry point: run all pending migrations.
///
/// Invoked by db::init_db() and before any command that touches the DB.
pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    // 1) Ensure log table
    ensure_log_table(conn)?;

    // 2) Create missing tables
    let attendance_exists = table_exists(conn, "attendance")?;

    create_account_table(conn)?;
    create_attendance_table(conn)?;
    create_session_table(conn)?;

    // 3) Upgrade legacy attendance schema
    if attendance_exists {
        migrate_add_attendance_updated_at(conn)?;
    }

    Ok(())
}
