//! Display Formatting
//!
//! Stored values stay verbatim; these helpers only run while rendering.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

const DATE: &str = "%d/%m/%Y";
const DATE_TIME: &str = "%d/%m/%Y %H:%M";

/// `2024-05-01T10:30` → `01/05/2024 10:30`. Unparseable input is shown as-is.
pub fn format_datetime(raw: &str) -> String {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return dt.format(DATE_TIME).to_string();
    }
    for pattern in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, pattern) {
            return dt.format(DATE_TIME).to_string();
        }
    }
    format_date(raw)
}

/// Date part only: `2024-05-01T10:30:00Z` → `01/05/2024`
pub fn format_date(raw: &str) -> String {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return dt.format(DATE).to_string();
    }
    let date_part = raw.split('T').next().unwrap_or(raw);
    match NaiveDate::parse_from_str(date_part, "%Y-%m-%d") {
        Ok(date) => date.format(DATE).to_string(),
        Err(_) => raw.to_string(),
    }
}
