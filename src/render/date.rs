use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

pub const DATE_NOT_AVAILABLE: &str = "Date Not Available";
pub const INVALID_DATE: &str = "Invalid Date";

/// en-US long form, e.g. "October 30, 2023 at 12:00:00 PM"
const REVIEW_DATE_FORMAT: &str = "%B %-d, %Y at %-I:%M:%S %p";
/// en-US default form, e.g. "10/30/2023, 12:00:00 PM"
const COMMENT_DATE_FORMAT: &str = "%-m/%-d/%Y, %-I:%M:%S %p";

/// Offsets written without a colon, e.g. `+0000`
const OFFSET_DATE_TIME_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f%z", "%Y-%m-%d %H:%M:%S%.f%z"];

const NAIVE_DATE_TIME_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// Parse the date shapes the content API emits. Values without an offset are UTC.
pub fn parse_date(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }

    for format in OFFSET_DATE_TIME_FORMATS {
        if let Ok(dt) = DateTime::parse_from_str(raw, format) {
            return Some(dt.with_timezone(&Utc));
        }
    }

    for format in NAIVE_DATE_TIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(dt.and_utc());
        }
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc())
}

/// Format a review date in long form, with a fallback for missing dates.
pub fn format_review_date(raw: Option<&str>) -> String {
    match raw.filter(|r| !r.trim().is_empty()) {
        None => DATE_NOT_AVAILABLE.to_string(),
        Some(raw) => format_or_invalid(raw, REVIEW_DATE_FORMAT),
    }
}

/// Format a comment date in the short default form.
///
/// Comments have no "not available" fallback; anything unparseable,
/// including a missing date, reads as an invalid date.
pub fn format_comment_date(raw: Option<&str>) -> String {
    format_or_invalid(raw.unwrap_or_default(), COMMENT_DATE_FORMAT)
}

fn format_or_invalid(raw: &str, format: &str) -> String {
    match parse_date(raw) {
        Some(dt) => dt.format(format).to_string(),
        None => {
            tracing::debug!("Unparseable date {:?}", raw);
            INVALID_DATE.to_string()
        }
    }
}
