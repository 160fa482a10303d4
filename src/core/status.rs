//! Punch status display, with an optional 1 Hz live refresh.

use crate::config::Config;
use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::AppResult;
use crate::models::day_status::DayStatus;
use crate::models::session::{LoginSession, PunchState};
use crate::ui::messages::info;
use crate::utils::colors::{CYAN, GREY, RESET};
use crate::utils::date;
use crate::utils::formatting::describe_status;
use crate::utils::time::format_hms;
use chrono::{Local, NaiveDate};
use std::io::{self, Write};
use std::thread;
use std::time::Duration;

pub struct StatusLogic;

impl StatusLogic {
    /// Print the tracker state for the selected date (default today).
    ///
    /// With `watch`, redraw once per second while the punch session is
    /// active; the loop re-reads the session row each tick and stops as
    /// soon as the session ends (punch-out or logout from elsewhere).
    pub fn show(
        pool: &mut DbPool,
        cfg: &Config,
        selected: Option<NaiveDate>,
        watch: bool,
    ) -> AppResult<()> {
        let session = queries::require_session(&pool.conn)?;
        let selected = selected.unwrap_or_else(date::today);

        let live = watch && session.punch_state() == PunchState::Active;

        print_header(&session, &selected);
        print_line(pool, cfg, &session, &selected, live)?;

        if !live {
            return Ok(());
        }

        loop {
            thread::sleep(Duration::from_secs(1));

            let current = match queries::load_session(&pool.conn)? {
                Some(s) => s,
                None => {
                    println!();
                    info("Session ended.");
                    return Ok(());
                }
            };

            if current.punch_state() != PunchState::Active {
                println!();
                info("Punch session ended.");
                return Ok(());
            }

            print_line(pool, cfg, &current, &selected, true)?;
        }
    }
}

fn print_header(session: &LoginSession, selected: &NaiveDate) {
    println!(
        "⏱  Time tracker for {} (selected date {})",
        session.username,
        date::date_key(selected)
    );
}

fn print_line(
    pool: &mut DbPool,
    cfg: &Config,
    session: &LoginSession,
    selected: &NaiveDate,
    redraw: bool,
) -> AppResult<()> {
    let now = Local::now();
    let saved = queries::load_day(&pool.conn, selected)?;
    let saved_secs = saved.as_ref().map(|e| e.seconds);

    let status = DayStatus::classify(
        *selected,
        saved_secs,
        date::today(),
        cfg.min_work_seconds(),
    );
    let (status_label, status_color) = describe_status(status);

    // Elapsed is live only for the date the active punch belongs to.
    let elapsed_label = match (session.punch_state(), session.punch_date.as_ref()) {
        (PunchState::Active, Some(d)) if d == selected => format!(
            "{}Elapsed {}{}",
            CYAN,
            format_hms(session.elapsed_seconds(now).unwrap_or(0)),
            RESET
        ),
        _ => format!("{}Duration {}{}", GREY, format_hms(saved_secs.unwrap_or(0)), RESET),
    };

    let saved_label = match saved_secs {
        Some(s) => format_hms(s),
        None => "—".to_string(),
    };

    let line = format!(
        "State {} | {} | Saved {} {}{}{}",
        session.punch_state().as_str(),
        elapsed_label,
        saved_label,
        status_color,
        status_label,
        RESET
    );

    if redraw {
        print!("\r{}", line);
        io::stdout().flush().ok();
    } else {
        println!("{}", line);
    }

    Ok(())
}
