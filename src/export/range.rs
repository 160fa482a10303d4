use crate::errors::{AppError, AppResult};
use crate::utils::date::generate_from_period;
use chrono::NaiveDate;

/// Parse a range expression into inclusive date bounds.
///
/// Accepts single periods (`YYYY`, `YYYY-MM`, `YYYY-MM-DD`) and
/// `start:end` pairs of the same shapes.
pub fn parse_range(expr: &str) -> AppResult<(NaiveDate, NaiveDate)> {
    if let Some((start, end)) = expr.split_once(':') {
        let s = generate_from_period(start).map_err(AppError::InvalidDate)?;
        let e = generate_from_period(end).map_err(AppError::InvalidDate)?;

        let start_date = *s.first().ok_or_else(|| AppError::InvalidDate(expr.into()))?;
        let end_date = *e.last().ok_or_else(|| AppError::InvalidDate(expr.into()))?;

        if end_date < start_date {
            return Err(AppError::InvalidDate(format!(
                "Range end before start: {}",
                expr
            )));
        }

        return Ok((start_date, end_date));
    }

    let days = generate_from_period(expr).map_err(AppError::InvalidDate)?;
    let start = *days.first().ok_or_else(|| AppError::InvalidDate(expr.into()))?;
    let end = *days.last().unwrap();
    Ok((start, end))
}
