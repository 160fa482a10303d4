//! Timesheet list: logged days sorted descending by date.

use crate::config::Config;
use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::AppResult;
use crate::models::day_status::DayStatus;
use crate::utils::colors::RESET;
use crate::utils::date;
use crate::utils::formatting::{describe_status, separator};
use crate::utils::table::{Column, Table};
use crate::utils::time::format_hms;

pub struct TimesheetLogic;

impl TimesheetLogic {
    pub fn print(pool: &mut DbPool, cfg: &Config) -> AppResult<()> {
        let mut entries = queries::load_all_days(pool)?;

        println!("🧾 Timesheet:");

        if entries.is_empty() {
            println!("No records yet.");
            return Ok(());
        }

        // Most recent first.
        entries.sort_by(|a, b| b.date.cmp(&a.date));

        let today = date::today();
        let threshold = cfg.min_work_seconds();

        let mut table = Table::new(vec![
            Column::left("Date", 10),
            Column::right("Duration", 10),
            Column::left("Status", 22),
            Column::left("Last saved", 16),
        ]);

        let mut total = 0i64;
        for e in &entries {
            total += e.seconds;

            let status = DayStatus::classify(e.date, Some(e.seconds), today, threshold);
            let (label, color) = describe_status(status);

            // updated_at is RFC3339; older rows may carry an empty value
            let saved_at = chrono::DateTime::parse_from_rfc3339(&e.updated_at)
                .map(|t| t.format("%Y-%m-%d %H:%M").to_string())
                .unwrap_or_else(|_| "—".to_string());

            table.add_row(vec![
                e.date_key(),
                format_hms(e.seconds),
                format!("{}{}{}", color, label, RESET),
                saved_at,
            ]);
        }

        print!("{}", table.render());

        let sep_ch = cfg.separator_char.chars().next().unwrap_or('-');
        println!("{}", separator(sep_ch, 60));
        println!("Σ {} day(s), total {}", entries.len(), format_hms(total));

        Ok(())
    }
}
