use chrono::{DateTime, Local, NaiveDate};

/// Punch clock state, derived from the `session` row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PunchState {
    Idle,
    Active,
}

impl PunchState {
    pub fn as_str(&self) -> &'static str {
        match self {
            PunchState::Idle => "idle",
            PunchState::Active => "active",
        }
    }
}

/// The single login session row. Exists only while a user is logged in;
/// carries the active punch (date + start timestamp) when one is running.
#[derive(Debug, Clone)]
pub struct LoginSession {
    pub username: String,             // ⇔ session.username
    pub logged_in_at: String,         // ⇔ session.logged_in_at (TEXT, ISO8601)
    pub punch_date: Option<NaiveDate>, // ⇔ session.punch_date (TEXT, nullable)
    pub punch_started_at: Option<DateTime<Local>>, // ⇔ session.punch_started_at
}

impl LoginSession {
    pub fn punch_state(&self) -> PunchState {
        if self.punch_started_at.is_some() {
            PunchState::Active
        } else {
            PunchState::Idle
        }
    }

    /// Seconds elapsed since punch-in, floored and clamped at zero.
    /// None while idle.
    pub fn elapsed_seconds(&self, now: DateTime<Local>) -> Option<i64> {
        self.punch_started_at
            .map(|start| (now - start).num_seconds().max(0))
    }
}
