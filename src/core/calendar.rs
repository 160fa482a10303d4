//! Monthly calendar: matrix construction and ANSI grid rendering.

use crate::config::Config;
use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::AppResult;
use crate::models::day_status::DayStatus;
use crate::utils::colors::{BOLD, GREEN, GREY, INVERSE, RED, RESET, YELLOW};
use crate::utils::date;
use chrono::{Datelike, NaiveDate};

/// One calendar week: 7 slots, empty outside the month.
pub type Week = [Option<u32>; 7];

/// Index of the month's first weekday, 0 = Sunday.
pub fn first_weekday_index(year: i32, month: u32) -> u32 {
    NaiveDate::from_ymd_opt(year, month, 1)
        .map(|d| d.weekday().num_days_from_sunday())
        .unwrap_or(0)
}

/// Build the month matrix: leading empty slots up to the first weekday
/// index, day numbers 1..N, trailing empty slots padding the final week.
/// The result length is always a multiple of 7.
pub fn month_matrix(year: i32, month: u32) -> Vec<Week> {
    let leading = first_weekday_index(year, month) as usize;
    let days = date::days_in_month(year, month);

    let mut cells: Vec<Option<u32>> = Vec::with_capacity(42);
    cells.resize(leading, None);
    for d in 1..=days {
        cells.push(Some(d));
    }
    while cells.len() % 7 != 0 {
        cells.push(None);
    }

    cells
        .chunks(7)
        .map(|week| {
            let mut w: Week = [None; 7];
            w.copy_from_slice(week);
            w
        })
        .collect()
}

pub struct CalendarLogic;

impl CalendarLogic {
    /// Render the month grid with per-day classification colouring.
    pub fn render(pool: &mut DbPool, cfg: &Config, year: i32, month: u32) -> AppResult<()> {
        let totals = queries::load_month_totals(pool, year, month)?;
        let matrix = month_matrix(year, month);

        let today = date::today();
        let threshold = cfg.min_work_seconds();

        println!(
            "📅 {}{} {}{}",
            BOLD,
            date::month_name(month),
            year,
            RESET
        );
        println!(" Su  Mo  Tu  We  Th  Fr  Sa");

        for week in &matrix {
            let mut line = String::new();
            for slot in week {
                match slot {
                    None => line.push_str("    "),
                    Some(day) => {
                        let cell_date = NaiveDate::from_ymd_opt(year, month, *day).unwrap();
                        let status = DayStatus::classify(
                            cell_date,
                            totals.get(day).copied(),
                            today,
                            threshold,
                        );

                        let color = match status {
                            DayStatus::Complete => GREEN,
                            DayStatus::Incomplete => YELLOW,
                            DayStatus::Absent => RED,
                            DayStatus::Unmarked => RESET,
                        };

                        if cell_date == today {
                            line.push_str(&format!("{}{}{:>3}{} ", INVERSE, color, day, RESET));
                        } else {
                            line.push_str(&format!("{}{:>3}{} ", color, day, RESET));
                        }
                    }
                }
            }
            println!("{}", line);
        }

        if cfg.legend_enabled() {
            println!(
                "\n{}legend:{} {}complete{} {}incomplete{} {}absent{} {}today{}",
                GREY, RESET, GREEN, RESET, YELLOW, RESET, RED, RESET, INVERSE, RESET
            );
        }

        Ok(())
    }
}
