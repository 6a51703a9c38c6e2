use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

/// Layouts carrying a numeric offset, with or without seconds and colon.
const OFFSET_DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f%:z",
    "%Y-%m-%dT%H:%M:%S%.f%z",
    "%Y-%m-%dT%H:%M%:z",
    "%Y-%m-%dT%H:%M%z",
];

/// Offset-less layouts, read as UTC.
const NAIVE_DATETIME_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"];

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parses an ISO 8601 date-time into an absolute instant.
///
/// Accepts RFC 3339 strings, date-times with a numeric offset or `Z` (seconds
/// and offset colon optional), date-times without an offset (taken as UTC),
/// and plain calendar dates (midnight UTC).
pub fn parse_datetime(input: &str) -> Option<DateTime<Utc>> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }

    if let Ok(parsed) = DateTime::parse_from_rfc3339(input) {
        return Some(parsed.with_timezone(&Utc));
    }

    for format in OFFSET_DATETIME_FORMATS {
        if let Ok(parsed) = DateTime::parse_from_str(input, format) {
            return Some(parsed.with_timezone(&Utc));
        }
    }

    // A trailing `Z` is UTC; what precedes it must be a full date-time.
    if let Some(local) = input.strip_suffix(|c: char| c.eq_ignore_ascii_case(&'Z')) {
        return parse_naive_datetime(local);
    }

    parse_naive_datetime(input).or_else(|| {
        NaiveDate::parse_from_str(input, DATE_FORMAT)
            .ok()
            .and_then(|date| date.and_hms_opt(0, 0, 0))
            .map(|naive| naive.and_utc())
    })
}

fn parse_naive_datetime(input: &str) -> Option<DateTime<Utc>> {
    NAIVE_DATETIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(input, format).ok())
        .map(|naive| naive.and_utc())
}
