use crate::cli::commands::open_pool;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::punch::PunchLogic;
use crate::errors::{AppError, AppResult};
use crate::utils::date;

/// Punch in or out.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Punch {
        clock_in,
        clock_out,
        date,
    } = cmd
    {
        let selected = match date {
            Some(s) => {
                Some(date::parse_date(s).ok_or_else(|| AppError::InvalidDate(s.to_string()))?)
            }
            None => None,
        };

        let mut pool = open_pool(cfg)?;

        if *clock_in {
            PunchLogic::punch_in(&mut pool, selected)?;
        } else if *clock_out {
            PunchLogic::punch_out(&mut pool, cfg)?;
        } else {
            return Err(AppError::Punch("Use --in or --out".into()));
        }
    }
    Ok(())
}
