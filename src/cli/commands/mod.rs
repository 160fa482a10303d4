pub mod backup;
pub mod calendar;
pub mod config;
pub mod db;
pub mod export;
pub mod forgot;
pub mod init;
pub mod log;
pub mod login;
pub mod logout;
pub mod punch;
pub mod register;
pub mod reset;
pub mod status;
pub mod timesheet;

use crate::db::initialize::init_db;
use crate::db::pool::DbPool;
use crate::errors::AppResult;

/// Open the configured database and bring its schema up to date.
/// Every command goes through here so a fresh or stale DB never aborts.
pub(crate) fn open_pool(cfg: &crate::config::Config) -> AppResult<DbPool> {
    let pool = DbPool::new(&cfg.database)?;
    init_db(&pool.conn)?;
    Ok(pool)
}
