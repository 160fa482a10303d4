//! Punch clock: the Idle/Active state machine persisted on the session row.

use crate::config::Config;
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::{AppError, AppResult};
use crate::models::session::PunchState;
use crate::ui::messages::{success, warning};
use crate::utils::date;
use crate::utils::time::format_hms;
use chrono::{Local, NaiveDate};

pub struct PunchLogic;

impl PunchLogic {
    /// Idle → Active: record the punch date and start timestamp.
    ///
    /// Punching is only permitted for the current date; an explicit
    /// `--date` other than today is refused.
    pub fn punch_in(pool: &mut DbPool, selected: Option<NaiveDate>) -> AppResult<()> {
        let session = queries::require_session(&pool.conn)?;

        let today = date::today();
        let selected = selected.unwrap_or(today);
        if selected != today {
            return Err(AppError::Punch(
                "Punching is only allowed for the current date".into(),
            ));
        }

        if session.punch_state() == PunchState::Active {
            return Err(AppError::Punch(format!(
                "Already punched in since {}",
                session
                    .punch_started_at
                    .map(|t| t.format("%H:%M:%S").to_string())
                    .unwrap_or_default()
            )));
        }

        let now = Local::now();
        queries::set_punch(&pool.conn, &today, &now)?;

        if let Err(e) = ttlog(
            &pool.conn,
            "punch_in",
            &date::date_key(&today),
            &format!("Punched in at {}", now.format("%H:%M:%S")),
        ) {
            eprintln!("⚠️ Failed to write internal log: {}", e);
        }

        success(format!("Punched in at {}", now.format("%H:%M:%S")));
        Ok(())
    }

    /// Active → Idle: floor the elapsed seconds, add them to the punch
    /// date's total, and warn when the day is still short of the minimum.
    pub fn punch_out(pool: &mut DbPool, cfg: &Config) -> AppResult<()> {
        let session = queries::require_session(&pool.conn)?;

        let start = session
            .punch_started_at
            .ok_or_else(|| AppError::Punch("No active punch session".into()))?;

        let now = Local::now();
        let elapsed = (now - start).num_seconds().max(0);
        let day = session.punch_date.unwrap_or_else(date::today);

        let total = queries::add_seconds(&pool.conn, &day, elapsed)?;
        queries::clear_punch(&pool.conn)?;

        if let Err(e) = ttlog(
            &pool.conn,
            "punch_out",
            &date::date_key(&day),
            &format!("Punched out, +{}s (day total {}s)", elapsed, total),
        ) {
            eprintln!("⚠️ Failed to write internal log: {}", e);
        }

        success(format!(
            "Punched out: +{} worked on {} (day total {})",
            format_hms(elapsed),
            date::date_key(&day),
            format_hms(total)
        ));

        let threshold = cfg.min_work_seconds();
        if total < threshold {
            warning(format!("{} hours not completed!", threshold / 3600));
        }

        Ok(())
    }
}
