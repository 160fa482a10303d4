use crate::cli::commands::open_pool;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::calendar::CalendarLogic;
use crate::db::queries;
use crate::errors::{AppError, AppResult};
use crate::utils::date;
use chrono::Datelike;

/// Render the monthly attendance calendar.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Calendar { month } = cmd {
        let (year, month) = match month {
            Some(s) => {
                date::parse_month(s).ok_or_else(|| AppError::InvalidMonth(s.to_string()))?
            }
            None => {
                let today = date::today();
                (today.year(), today.month())
            }
        };

        let mut pool = open_pool(cfg)?;
        queries::require_session(&pool.conn)?;
        CalendarLogic::render(&mut pool, cfg, year, month)?;
    }
    Ok(())
}
