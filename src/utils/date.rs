//! Publication date formatting.

use chrono::{Local, NaiveDate};
use std::fmt::{self, Write};

/// Today's local date in the given strftime pattern.
pub fn today(format: &str) -> Result<String, fmt::Error> {
    format_date(Local::now().date_naive(), format)
}

/// Format a date with a strftime pattern (`%B %d, %Y` → `May 01, 2024`).
///
/// Fails on malformed patterns and on specifiers a plain date cannot
/// fill (`%H`, `%z`).
pub fn format_date(date: NaiveDate, format: &str) -> Result<String, fmt::Error> {
    let mut out = String::new();
    write!(out, "{}", date.format(format))?;
    Ok(out)
}

/// Whether `format` renders a date without error.
pub fn is_date_format(format: &str) -> bool {
    !format.is_empty() && format_date(NaiveDate::MIN, format).is_ok()
}

/// Use the date given on the command line, or today's date.
pub fn resolve(date: Option<&str>, format: &str) -> Result<String, fmt::Error> {
    match date {
        Some(date) => Ok(date.to_owned()),
        None => today(format),
    }
}
