use chrono::{Datelike, Utc};

use crate::passes::error::PassError;

/// Turn a `"<day> <month>"` cell such as `"05 may"` into `YYYY-MM-DD`.
///
/// `months` is the ordered list of month abbreviations the page renders,
/// matched without regard to case. The day is only formatted, not checked
/// against the month.
pub fn normalize_date(text: &str, months: &[String], year: i32) -> Result<String, PassError> {
    let invalid = || PassError::InvalidDate(text.to_string());

    let mut tokens = text.split_whitespace();
    let (day, month) = match (tokens.next(), tokens.next(), tokens.next()) {
        (Some(day), Some(month), None) => (day, month),
        _ => return Err(invalid()),
    };

    let day: u32 = day.parse().map_err(|_| invalid())?;
    let month = month.to_lowercase();
    let month = months
        .iter()
        .position(|m| m.to_lowercase() == month)
        .map(|i| i + 1)
        .ok_or_else(invalid)?;

    Ok(format!("{:04}-{:02}-{:02}", year, month, day))
}

/// Year stamped on every scraped date: the current UTC year.
///
/// The year is never rolled forward: a January pass scraped in December
/// is dated in the current year.
pub fn current_year() -> i32 {
    Utc::now().year()
}
