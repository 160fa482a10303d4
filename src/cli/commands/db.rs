use crate::cli::commands::open_pool;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::stats;
use crate::errors::AppResult;
use crate::ui::messages::{success, warning};

/// Database maintenance: integrity check, vacuum, info.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Db {
        check,
        vacuum,
        info,
    } = cmd
    {
        let mut pool = open_pool(cfg)?;

        if *check {
            if stats::check_integrity(&mut pool)? {
                success("Database integrity: ok");
            } else {
                warning("Database integrity check FAILED");
            }
        }

        if *vacuum {
            stats::vacuum(&mut pool)?;
            success("Database optimized (VACUUM)");
        }

        if *info {
            stats::print_db_info(&mut pool, &cfg.database)?;
        }

        if !*check && !*vacuum && !*info {
            warning("Nothing to do: use --check, --vacuum, or --info");
        }
    }
    Ok(())
}
