use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Parse the timestamp shapes the API emits: RFC 3339, naive ISO-8601
/// with or without fractional seconds, or a bare date.
fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.naive_utc());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(dt);
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}

/// `Mar 4, 2026`. Unparseable input is shown as-is.
pub fn format_date(raw: &str) -> String {
    parse_timestamp(raw)
        .map(|dt| dt.format("%b %-d, %Y").to_string())
        .unwrap_or_else(|| raw.to_string())
}

/// `Mar 4, 2026 3:07 PM`. Unparseable input is shown as-is.
pub fn format_date_time(raw: &str) -> String {
    parse_timestamp(raw)
        .map(|dt| dt.format("%b %-d, %Y %-I:%M %p").to_string())
        .unwrap_or_else(|| raw.to_string())
}

/// Optional timestamp, with a placeholder for missing values.
pub fn format_optional_date(raw: Option<&str>) -> String {
    match raw {
        Some(r) if !r.trim().is_empty() => format_date(r),
        _ => "-".to_string(),
    }
}
