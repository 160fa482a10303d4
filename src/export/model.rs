use serde::Serialize;

/// One exported timesheet row.
#[derive(Debug, Clone, Serialize)]
pub struct DayExport {
    pub date: String,
    pub seconds: i64,
    pub duration: String,
    pub status: String,
}
