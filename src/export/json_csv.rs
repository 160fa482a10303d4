use crate::errors::{AppError, AppResult};
use crate::export::model::DayExport;
use crate::export::notify_export_success;
use csv::Writer;
use std::fs;
use std::path::Path;

pub(crate) fn export_csv(rows: &[DayExport], path: &Path) -> AppResult<()> {
    let mut wtr = Writer::from_path(path)?;

    wtr.write_record(["date", "seconds", "duration", "status"])?;

    for r in rows {
        wtr.write_record(&[
            r.date.clone(),
            r.seconds.to_string(),
            r.duration.clone(),
            r.status.clone(),
        ])?;
    }

    wtr.flush()?;
    notify_export_success("CSV", path);
    Ok(())
}

pub(crate) fn export_json(rows: &[DayExport], path: &Path) -> AppResult<()> {
    let json = serde_json::to_string_pretty(rows)
        .map_err(|e| AppError::Export(format!("JSON serialization failed: {}", e)))?;

    fs::write(path, json)?;
    notify_export_success("JSON", path);
    Ok(())
}
