use crate::cli::commands::open_pool;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::reset::ResetLogic;
use crate::errors::AppResult;

/// Delete all attendance records after confirmation.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Reset { yes } = cmd {
        let mut pool = open_pool(cfg)?;
        ResetLogic::reset(&mut pool, *yes)?;
    }
    Ok(())
}
