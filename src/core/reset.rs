//! Wipe the accumulated session log (the account record is kept).

use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use std::io::{self, Write, stdin};

pub struct ResetLogic;

impl ResetLogic {
    pub fn reset(pool: &mut DbPool, assume_yes: bool) -> AppResult<()> {
        queries::require_session(&pool.conn)?;

        if !assume_yes {
            print!("Are you sure to delete all attendance records (N/y) ? ");
            let _ = io::stdout().flush();
            let mut input = String::new();
            stdin().read_line(&mut input).unwrap_or(0);
            let choice = input.trim().to_lowercase();
            if choice != "y" {
                println!("Aborted. No rows deleted.");
                return Ok(());
            }
        }

        let removed = queries::clear_attendance(&pool.conn)?;
        queries::clear_punch(&pool.conn)?;

        if removed == 0 {
            info("No attendance records to delete.");
        } else {
            success(format!("🗑️ Deleted {} attendance record(s)", removed));
        }

        if let Err(e) = ttlog(
            &pool.conn,
            "reset",
            "",
            &format!("Cleared attendance log ({} rows)", removed),
        ) {
            eprintln!("⚠️ Failed to write internal log: {}", e);
        }

        Ok(())
    }
}
