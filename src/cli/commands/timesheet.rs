use crate::cli::commands::open_pool;
use crate::config::Config;
use crate::core::timesheet::TimesheetLogic;
use crate::db::queries;
use crate::errors::AppResult;

/// List logged days, most recent first.
pub fn handle(cfg: &Config) -> AppResult<()> {
    let mut pool = open_pool(cfg)?;
    queries::require_session(&pool.conn)?;
    TimesheetLogic::print(&mut pool, cfg)
}
