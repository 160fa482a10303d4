//! Formatting utilities used for CLI and export outputs.

use crate::models::day_status::DayStatus;
use crate::utils::colors::{GREEN, GREY, RED, RESET, YELLOW};

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

pub fn pad_right(s: &str, width: usize) -> String {
    format!("{:<width$}", s, width = width)
}

pub fn pad_left(s: &str, width: usize) -> String {
    format!("{:>width$}", s, width = width)
}

/// Returns a textual label and an ANSI color for a day classification.
pub fn describe_status(status: DayStatus) -> (&'static str, &'static str) {
    match status {
        DayStatus::Complete => ("complete", GREEN),
        DayStatus::Incomplete => ("incomplete", YELLOW),
        DayStatus::Absent => ("absent", RED),
        DayStatus::Unmarked => ("", GREY),
    }
}

/// Separator line, used after month boundaries in list output.
pub fn separator(ch: char, len: usize) -> String {
    let mut s = String::with_capacity(len);
    for _ in 0..len {
        s.push(ch);
    }
    format!("{}{}{}", GREY, s, RESET)
}
