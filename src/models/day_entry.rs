use chrono::NaiveDate;
use serde::Serialize;

/// One accumulated attendance row: a calendar date and its total worked
/// seconds. Totals only grow; punch-out adds to the stored value.
#[derive(Debug, Clone, Serialize)]
pub struct DayEntry {
    pub date: NaiveDate,        // ⇔ attendance.date (TEXT "YYYY-MM-DD")
    pub seconds: i64,           // ⇔ attendance.seconds (INT, >= 0)
    pub updated_at: String,     // ⇔ attendance.updated_at (TEXT, ISO8601)
}

impl DayEntry {
    pub fn date_key(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }
}
