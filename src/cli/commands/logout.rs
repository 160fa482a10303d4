use crate::cli::commands::open_pool;
use crate::config::Config;
use crate::core::auth::AuthLogic;
use crate::errors::AppResult;

/// Close the login session.
pub fn handle(cfg: &Config) -> AppResult<()> {
    let mut pool = open_pool(cfg)?;
    AuthLogic::logout(&mut pool)
}
