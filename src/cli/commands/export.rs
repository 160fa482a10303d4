use crate::cli::commands::open_pool;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::queries;
use crate::errors::AppResult;
use crate::export::ExportLogic;

/// Export timesheet data.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        range,
        force,
    } = cmd
    {
        let mut pool = open_pool(cfg)?;
        queries::require_session(&pool.conn)?;
        ExportLogic::export(&mut pool, cfg, format.clone(), file, range, *force)?;
    }
    Ok(())
}
