//! Utilities for date formatting
//!
//! API dates arrive either as `YYYY-MM-DD` or full ISO timestamps.
use mep_contracts::shared::listing::parse_date;

/// Format an API date as `15 Mar 2024`; unparseable text is returned as is
pub fn format_date(date_str: &str) -> String {
    match parse_date(date_str) {
        Some(date) => date.format("%-d %b %Y").to_string(),
        None => date_str.trim().to_string(),
    }
}

/// `15 Mar 2024 – 30 Jun 2025`, open-ended when one side is missing
pub fn format_date_range(start: &str, end: &str) -> String {
    let start = format_date(start);
    let end = format_date(end);
    match (start.is_empty(), end.is_empty()) {
        (true, true) => String::new(),
        (false, true) => format!("From {}", start),
        (true, false) => format!("Until {}", end),
        (false, false) => format!("{} – {}", start, end),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2024-03-15"), "15 Mar 2024");
        assert_eq!(format_date("2024-03-05T14:02:26.123Z"), "5 Mar 2024");
    }

    #[test]
    fn test_invalid_format() {
        assert_eq!(format_date("soon"), "soon");
        assert_eq!(format_date(""), "");
    }

    #[test]
    fn test_format_date_range() {
        assert_eq!(
            format_date_range("2024-01-01", "2024-12-31"),
            "1 Jan 2024 – 31 Dec 2024"
        );
        assert_eq!(format_date_range("2024-01-01", ""), "From 1 Jan 2024");
        assert_eq!(format_date_range("", ""), "");
    }
}
