use chrono::{Datelike, NaiveDate};

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

/// Serialize a date as the canonical `YYYY-MM-DD` key.
pub fn date_key(d: &NaiveDate) -> String {
    d.format("%Y-%m-%d").to_string()
}

/// Parse a `YYYY-MM` month string into (year, month).
pub fn parse_month(s: &str) -> Option<(i32, u32)> {
    let d = NaiveDate::parse_from_str(&(s.to_string() + "-01"), "%Y-%m-%d").ok()?;
    Some((d.year(), d.month()))
}

pub fn days_in_month(year: i32, month: u32) -> u32 {
    let first = NaiveDate::from_ymd_opt(year, month, 1).unwrap();
    let next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1).unwrap()
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1).unwrap()
    };
    (next - first).num_days() as u32
}

pub fn all_days_of_month(year: i32, month: u32) -> Vec<NaiveDate> {
    let mut out = Vec::new();
    let mut d = NaiveDate::from_ymd_opt(year, month, 1).unwrap();

    while d.month() == month {
        out.push(d);
        d = d.succ_opt().unwrap();
    }

    out
}

pub fn all_days_of_year(year: i32) -> Vec<NaiveDate> {
    let mut v = Vec::new();

    let mut d = NaiveDate::from_ymd_opt(year, 1, 1).unwrap();
    while d.year() == year {
        v.push(d);
        d = d.succ_opt().unwrap();
    }

    v
}

/// Expand a period expression into its list of dates.
/// Accepts YYYY, YYYY-MM, and YYYY-MM-DD.
pub fn generate_from_period(p: &str) -> Result<Vec<NaiveDate>, String> {
    // YYYY-MM-DD
    if let Ok(d) = NaiveDate::parse_from_str(p, "%Y-%m-%d") {
        return Ok(vec![d]);
    }

    // YYYY-MM
    if p.len() == 7 {
        if let Ok(dm) = NaiveDate::parse_from_str(&(p.to_string() + "-01"), "%Y-%m-%d") {
            return Ok(all_days_of_month(dm.year(), dm.month()));
        }
    }

    // YYYY
    if p.len() == 4 {
        if let Ok(year) = p.parse::<i32>() {
            return Ok(all_days_of_year(year));
        }
    }

    Err(format!("Invalid period: {}", p))
}

pub fn month_name(month: u32) -> &'static str {
    match month {
        1 => "January",
        2 => "February",
        3 => "March",
        4 => "April",
        5 => "May",
        6 => "June",
        7 => "July",
        8 => "August",
        9 => "September",
        10 => "October",
        11 => "November",
        _ => "December",
    }
}
