use crate::cli::commands::open_pool;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::auth::AuthLogic;
use crate::errors::AppResult;

/// Register the local account record.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Register {
        username,
        email,
        password,
        confirm,
    } = cmd
    {
        let mut pool = open_pool(cfg)?;
        AuthLogic::register(&mut pool, username, email, password, confirm)?;
    }
    Ok(())
}
