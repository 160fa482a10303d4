use chrono::NaiveDate;
use serde::Serialize;

/// Classification of a calendar day against the attendance log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DayStatus {
    /// Logged total meets the daily threshold.
    Complete,
    /// A logged value exists but is below the daily threshold.
    Incomplete,
    /// The date is strictly before today and has no logged value.
    Absent,
    /// Today or a future date with no logged value.
    Unmarked,
}

impl DayStatus {
    /// Classify a date given its logged total (if any), the current date,
    /// and the daily threshold in seconds. Incomplete and Absent are
    /// mutually exclusive: a logged value rules out Absent.
    pub fn classify(
        date: NaiveDate,
        logged: Option<i64>,
        today: NaiveDate,
        threshold: i64,
    ) -> Self {
        match logged {
            Some(s) if s < threshold => DayStatus::Incomplete,
            Some(_) => DayStatus::Complete,
            None if date < today => DayStatus::Absent,
            None => DayStatus::Unmarked,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DayStatus::Complete => "complete",
            DayStatus::Incomplete => "incomplete",
            DayStatus::Absent => "absent",
            DayStatus::Unmarked => "unmarked",
        }
    }
}
