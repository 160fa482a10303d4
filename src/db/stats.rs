use crate::db::pool::DbPool;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use chrono::NaiveDate;
use rusqlite::OptionalExtension;
use std::fs;

pub fn print_db_info(pool: &mut DbPool, db_path: &str) -> rusqlite::Result<()> {
    println!();

    //
    // 1) FILE SIZE
    //
    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_mb = (file_size as f64) / (1024.0 * 1024.0);

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.2} MB", CYAN, RESET, file_mb);

    //
    // 2) TOTAL LOGGED DAYS
    //
    let count: i64 = pool
        .conn
        .query_row("SELECT COUNT(*) FROM attendance", [], |row| row.get(0))?;
    println!(
        "{}• Logged days:{} {}{}{}",
        CYAN, RESET, GREEN, count, RESET
    );

    //
    // 3) TOTAL LOGGED TIME
    //
    let total: i64 = pool
        .conn
        .query_row(
            "SELECT COALESCE(SUM(seconds), 0) FROM attendance",
            [],
            |row| row.get(0),
        )?;
    println!(
        "{}• Logged time:{} {}",
        CYAN,
        RESET,
        crate::utils::time::format_hms(total)
    );

    //
    // 4) DATE RANGE
    //
    let first_date: Option<String> = pool
        .conn
        .query_row(
            "SELECT date FROM attendance ORDER BY date ASC LIMIT 1",
            [],
            |row| row.get(0),
        )
        .optional()?;

    let last_date: Option<String> = pool
        .conn
        .query_row(
            "SELECT date FROM attendance ORDER BY date DESC LIMIT 1",
            [],
            |row| row.get(0),
        )
        .optional()?;

    let fmt_first = first_date
        .clone()
        .unwrap_or_else(|| format!("{GREY}--{RESET}"));
    let fmt_last = last_date
        .clone()
        .unwrap_or_else(|| format!("{GREY}--{RESET}"));

    println!("{}• Date range:{}", CYAN, RESET);
    println!("    from: {}", fmt_first);
    println!("    to:   {}", fmt_last);

    //
    // 5) AVERAGE SECONDS/DAY
    //
    if let (Some(f), Some(l)) = (first_date, last_date) {
        let d1 = parse_date(&f)?;
        let d2 = parse_date(&l)?;
        let days = (d2 - d1).num_days().max(1);

        let avg = total as f64 / days as f64;
        println!(
            "{}• Average per day:{} {}",
            CYAN,
            RESET,
            crate::utils::time::format_hms(avg as i64)
        );
    }

    println!();
    Ok(())
}

/// Run PRAGMA integrity_check and report the result.
pub fn check_integrity(pool: &mut DbPool) -> rusqlite::Result<bool> {
    let verdict: String = pool
        .conn
        .query_row("PRAGMA integrity_check", [], |row| row.get(0))?;
    Ok(verdict == "ok")
}

pub fn vacuum(pool: &mut DbPool) -> rusqlite::Result<()> {
    pool.conn.execute_batch("VACUUM;")?;
    Ok(())
}

fn parse_date(date_str: &str) -> rusqlite::Result<NaiveDate> {
    NaiveDate::parse_from_str(date_str, "%Y-%m-%d").map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(0, rusqlite::types::Type::Text, Box::new(e))
    })
}
