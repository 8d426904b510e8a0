//! Display formatting for timestamps, ratings and file sizes.

use chrono::DateTime;

/// "2024-01-15T10:30:00Z" → "Jan 15, 2024, 10:30 AM".
/// Falls back to the raw string when the timestamp is malformed.
pub fn format_timestamp(rfc3339: &str) -> String {
    match DateTime::parse_from_rfc3339(rfc3339) {
        Ok(dt) => dt.format("%b %-d, %Y, %-I:%M %p").to_string(),
        Err(_) => rfc3339.to_string(),
    }
}

/// Date part only, e.g. "Jan 15, 2024".
pub fn format_date(rfc3339: &str) -> String {
    match DateTime::parse_from_rfc3339(rfc3339) {
        Ok(dt) => dt.format("%b %-d, %Y").to_string(),
        Err(_) => rfc3339.to_string(),
    }
}

/// Time part only, e.g. "10:30 AM".
pub fn format_time(rfc3339: &str) -> String {
    match DateTime::parse_from_rfc3339(rfc3339) {
        Ok(dt) => dt.format("%-I:%M %p").to_string(),
        Err(_) => String::new(),
    }
}

/// Ratings display with at most one decimal: 9 → "9", 8.5 → "8.5".
pub fn format_rating(rating: f64) -> String {
    if rating == rating.trunc() {
        format!("{:.0}", rating)
    } else {
        format!("{:.1}", rating)
    }
}

/// Bytes → "2.41 MB" for the selected-file caption.
pub fn format_file_size(bytes: f64) -> String {
    format!("{:.2} MB", bytes / 1024.0 / 1024.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_timestamp() {
        assert_eq!(
            format_timestamp("2024-01-15T10:30:00Z"),
            "Jan 15, 2024, 10:30 AM"
        );
        assert_eq!(
            format_timestamp("2024-01-05T21:15:00Z"),
            "Jan 5, 2024, 9:15 PM"
        );
    }

    #[test]
    fn test_format_timestamp_falls_back_on_garbage() {
        assert_eq!(format_timestamp("yesterday"), "yesterday");
    }

    #[test]
    fn test_format_date_and_time_parts() {
        assert_eq!(format_date("2024-01-15T10:30:00Z"), "Jan 15, 2024");
        assert_eq!(format_time("2024-01-15T10:30:00Z"), "10:30 AM");
        assert_eq!(format_time("nope"), "");
    }

    #[test]
    fn test_format_rating() {
        assert_eq!(format_rating(9.0), "9");
        assert_eq!(format_rating(8.5), "8.5");
        assert_eq!(format_rating(7.25), "7.2");
    }

    #[test]
    fn test_format_file_size() {
        assert_eq!(format_file_size(2.5 * 1024.0 * 1024.0), "2.50 MB");
        assert_eq!(format_file_size(0.0), "0.00 MB");
    }
}
