use crate::cli::commands::open_pool;
use crate::cli::parser::Cli;
use crate::config::Config;
use crate::core::recovery::RecoveryLogic;
use crate::errors::AppResult;

/// Run the interactive OTP password-recovery flow.
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    let mut pool = open_pool(cfg)?;
    RecoveryLogic::run(&mut pool, cli.test)
}
