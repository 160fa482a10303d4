use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::day_entry::DayEntry;
use crate::models::session::LoginSession;
use crate::models::user::UserRecord;
use chrono::{DateTime, Local, NaiveDate};
use rusqlite::{Connection, OptionalExtension, Row, params};

// ---------------------------------------------------------------------------
// account
// ---------------------------------------------------------------------------

/// Overwrite the single account record wholesale.
pub fn save_account(conn: &Connection, user: &UserRecord) -> AppResult<()> {
    conn.execute(
        "INSERT OR REPLACE INTO account (id, username, email, password_hash, created_at)
         VALUES (1, ?1, ?2, ?3, ?4)",
        params![user.username, user.email, user.password_hash, user.created_at],
    )?;
    Ok(())
}

pub fn load_account(conn: &Connection) -> AppResult<Option<UserRecord>> {
    let rec = conn
        .query_row(
            "SELECT username, email, password_hash, created_at FROM account WHERE id = 1",
            [],
            |row| {
                Ok(UserRecord {
                    username: row.get(0)?,
                    email: row.get(1)?,
                    password_hash: row.get(2)?,
                    created_at: row.get(3)?,
                })
            },
        )
        .optional()?;
    Ok(rec)
}

/// Replace only the stored password hash (password reset).
pub fn update_account_password(conn: &Connection, password_hash: &str) -> AppResult<()> {
    conn.execute(
        "UPDATE account SET password_hash = ?1 WHERE id = 1",
        [password_hash],
    )?;
    Ok(())
}

// ---------------------------------------------------------------------------
// session
// ---------------------------------------------------------------------------

/// Open the login session, replacing any previous one.
pub fn open_session(conn: &Connection, username: &str) -> AppResult<()> {
    conn.execute(
        "INSERT OR REPLACE INTO session (id, username, logged_in_at, punch_date, punch_started_at)
         VALUES (1, ?1, ?2, NULL, NULL)",
        params![username, Local::now().to_rfc3339()],
    )?;
    Ok(())
}

/// Drop the login session (and with it any active punch).
pub fn close_session(conn: &Connection) -> AppResult<usize> {
    let n = conn.execute("DELETE FROM session WHERE id = 1", [])?;
    Ok(n)
}

pub fn load_session(conn: &Connection) -> AppResult<Option<LoginSession>> {
    let rec = conn
        .query_row(
            "SELECT username, logged_in_at, punch_date, punch_started_at
             FROM session WHERE id = 1",
            [],
            map_session_row,
        )
        .optional()?;
    Ok(rec)
}

/// Load the session or fail: dashboard commands require a login.
pub fn require_session(conn: &Connection) -> AppResult<LoginSession> {
    load_session(conn)?.ok_or(AppError::NotLoggedIn)
}

fn map_session_row(row: &Row) -> rusqlite::Result<LoginSession> {
    let punch_date: Option<String> = row.get(2)?;
    let punch_started_at: Option<String> = row.get(3)?;

    // A malformed punch row degrades to idle rather than aborting.
    let punch_date = punch_date.and_then(|d| NaiveDate::parse_from_str(&d, "%Y-%m-%d").ok());
    let punch_started_at = punch_started_at
        .and_then(|t| DateTime::parse_from_rfc3339(&t).ok())
        .map(|t| t.with_timezone(&Local));

    Ok(LoginSession {
        username: row.get(0)?,
        logged_in_at: row.get(1)?,
        punch_date,
        punch_started_at,
    })
}

/// Record an active punch on the session row.
pub fn set_punch(conn: &Connection, date: &NaiveDate, started_at: &DateTime<Local>) -> AppResult<()> {
    conn.execute(
        "UPDATE session SET punch_date = ?1, punch_started_at = ?2 WHERE id = 1",
        params![date.format("%Y-%m-%d").to_string(), started_at.to_rfc3339()],
    )?;
    Ok(())
}

/// Clear the active punch, keeping the login session.
pub fn clear_punch(conn: &Connection) -> AppResult<()> {
    conn.execute(
        "UPDATE session SET punch_date = NULL, punch_started_at = NULL WHERE id = 1",
        [],
    )?;
    Ok(())
}

// ---------------------------------------------------------------------------
// attendance
// ---------------------------------------------------------------------------

/// Add worked seconds to a date's total, creating the row if absent.
/// Totals only grow; there is no code path that replaces a value.
pub fn add_seconds(conn: &Connection, date: &NaiveDate, seconds: i64) -> AppResult<i64> {
    let key = date.format("%Y-%m-%d").to_string();
    conn.execute(
        "INSERT INTO attendance (date, seconds, updated_at)
         VALUES (?1, ?2, ?3)
         ON CONFLICT(date) DO UPDATE SET
             seconds    = seconds + excluded.seconds,
             updated_at = excluded.updated_at",
        params![key, seconds.max(0), Local::now().to_rfc3339()],
    )?;

    let total: i64 = conn.query_row(
        "SELECT seconds FROM attendance WHERE date = ?1",
        [key],
        |row| row.get(0),
    )?;
    Ok(total)
}

pub fn load_day(conn: &Connection, date: &NaiveDate) -> AppResult<Option<DayEntry>> {
    let key = date.format("%Y-%m-%d").to_string();
    let rec = conn
        .query_row(
            "SELECT date, seconds, updated_at FROM attendance WHERE date = ?1",
            [key],
            |row| {
                Ok((
                    row.get::<_, String>(0)?,
                    row.get::<_, i64>(1)?,
                    row.get::<_, String>(2)?,
                ))
            },
        )
        .optional()?;

    Ok(rec.and_then(|(d, seconds, updated_at)| {
        NaiveDate::parse_from_str(&d, "%Y-%m-%d")
            .ok()
            .map(|date| DayEntry {
                date,
                seconds,
                updated_at,
            })
    }))
}

/// Load every attendance row ordered by date. Rows whose date key does not
/// parse are skipped, falling back to whatever remains readable.
pub fn load_all_days(pool: &mut DbPool) -> AppResult<Vec<DayEntry>> {
    let mut stmt = pool.conn.prepare(
        "SELECT date, seconds, updated_at FROM attendance ORDER BY date ASC",
    )?;

    let rows = stmt.query_map([], |row| {
        Ok((
            row.get::<_, String>(0)?,
            row.get::<_, i64>(1)?,
            row.get::<_, String>(2)?,
        ))
    })?;

    let mut out = Vec::new();
    for r in rows {
        let (d, seconds, updated_at) = r?;
        if let Ok(date) = NaiveDate::parse_from_str(&d, "%Y-%m-%d") {
            out.push(DayEntry {
                date,
                seconds,
                updated_at,
            });
        }
    }
    Ok(out)
}

/// Load attendance rows inside an inclusive date range.
pub fn load_days_between(
    pool: &mut DbPool,
    start: &NaiveDate,
    end: &NaiveDate,
) -> AppResult<Vec<DayEntry>> {
    let start_str = start.format("%Y-%m-%d").to_string();
    let end_str = end.format("%Y-%m-%d").to_string();

    let mut stmt = pool.conn.prepare(
        "SELECT date, seconds, updated_at FROM attendance
         WHERE date BETWEEN ?1 AND ?2
         ORDER BY date ASC",
    )?;

    let rows = stmt.query_map(params![start_str, end_str], |row| {
        Ok((
            row.get::<_, String>(0)?,
            row.get::<_, i64>(1)?,
            row.get::<_, String>(2)?,
        ))
    })?;

    let mut out = Vec::new();
    for r in rows {
        let (d, seconds, updated_at) = r?;
        if let Ok(date) = NaiveDate::parse_from_str(&d, "%Y-%m-%d") {
            out.push(DayEntry {
                date,
                seconds,
                updated_at,
            });
        }
    }
    Ok(out)
}

/// Totals for a whole month, keyed by day-of-month. Used by the calendar.
pub fn load_month_totals(
    pool: &mut DbPool,
    year: i32,
    month: u32,
) -> AppResult<std::collections::HashMap<u32, i64>> {
    use chrono::Datelike;

    let days = crate::utils::date::all_days_of_month(year, month);
    let first = days.first().copied().ok_or_else(|| {
        AppError::InvalidMonth(format!("{:04}-{:02}", year, month))
    })?;
    let last = *days.last().unwrap();

    let entries = load_days_between(pool, &first, &last)?;

    let mut map = std::collections::HashMap::new();
    for e in entries {
        map.insert(e.date.day(), e.seconds);
    }
    Ok(map)
}

/// Wipe the whole session log. Returns the number of deleted rows.
pub fn clear_attendance(conn: &Connection) -> AppResult<usize> {
    let n = conn.execute("DELETE FROM attendance", [])?;
    Ok(n)
}
