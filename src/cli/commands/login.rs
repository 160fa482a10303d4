use crate::cli::commands::open_pool;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::auth::AuthLogic;
use crate::errors::AppResult;

/// Authenticate against the stored account and open the session.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Login { username, password } = cmd {
        let mut pool = open_pool(cfg)?;
        AuthLogic::login(&mut pool, username, password)?;
    }
    Ok(())
}
