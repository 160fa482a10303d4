use crate::config::Config;
use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::AppResult;
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::DayExport;
use crate::export::range::parse_range;
use crate::models::day_status::DayStatus;
use crate::ui::messages::warning;
use crate::utils::date;
use crate::utils::time::format_hms;
use chrono::NaiveDate;

/// High-level export logic for timesheet rows.
pub struct ExportLogic;

impl ExportLogic {
    /// Export the timesheet.
    ///
    /// - `format`: csv | json
    /// - `file`: output file path
    /// - `range`: `None`, `"all"`, or expressions like:
    ///   - `YYYY`
    ///   - `YYYY-MM`
    ///   - `YYYY-MM-DD`
    ///   - `start:end` pairs of the same shapes
    pub fn export(
        pool: &mut DbPool,
        cfg: &Config,
        format: ExportFormat,
        file: &str,
        range: &Option<String>,
        force: bool,
    ) -> AppResult<()> {
        let path = crate::utils::path::expand_tilde(file);

        ensure_writable(&path, force)?;

        let date_bounds: Option<(NaiveDate, NaiveDate)> = match range {
            None => None,
            Some(r) if r.eq_ignore_ascii_case("all") => None,
            Some(r) => Some(parse_range(r)?),
        };

        let rows = load_rows(pool, cfg, date_bounds)?;

        if rows.is_empty() {
            warning("No attendance records found for selected range.");
            return Ok(());
        }

        match format {
            ExportFormat::Csv => export_csv(&rows, &path)?,
            ExportFormat::Json => export_json(&rows, &path)?,
        }

        Ok(())
    }
}

/// Load and classify timesheet rows according to the bounds.
fn load_rows(
    pool: &mut DbPool,
    cfg: &Config,
    bounds: Option<(NaiveDate, NaiveDate)>,
) -> AppResult<Vec<DayExport>> {
    let entries = match bounds {
        None => queries::load_all_days(pool)?,
        Some((start, end)) => queries::load_days_between(pool, &start, &end)?,
    };

    let today = date::today();
    let threshold = cfg.min_work_seconds();

    Ok(entries
        .into_iter()
        .map(|e| {
            let status = DayStatus::classify(e.date, Some(e.seconds), today, threshold);
            DayExport {
                date: e.date_key(),
                seconds: e.seconds,
                duration: format_hms(e.seconds),
                status: status.as_str().to_string(),
            }
        })
        .collect())
}
