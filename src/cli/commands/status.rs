use crate::cli::commands::open_pool;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::status::StatusLogic;
use crate::errors::{AppError, AppResult};
use crate::utils::date;

/// Show punch state and logged time.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Status { date, watch } = cmd {
        let selected = match date {
            Some(s) => {
                Some(date::parse_date(s).ok_or_else(|| AppError::InvalidDate(s.to_string()))?)
            }
            None => None,
        };

        let mut pool = open_pool(cfg)?;
        StatusLogic::show(&mut pool, cfg, selected, *watch)?;
    }
    Ok(())
}
