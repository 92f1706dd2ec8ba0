//! Display formatting for numbers coming from the API

use mep_contracts::domain::common::lenient::format_number;

/// `LKR 1,250,000`; empty when the amount is missing
pub fn format_amount(amount: Option<f64>) -> String {
    let Some(value) = amount else {
        return String::new();
    };
    let whole = value.abs().round() as u64;
    let digits = whole.to_string();
    let mut grouped = String::new();
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    let sign = if value < 0.0 { "-" } else { "" };
    format!("LKR {}{}", sign, grouped)
}

/// `1 year`, `6 years`, `2.5 years`; empty when missing
pub fn format_years(years: Option<f64>) -> String {
    match years {
        None => String::new(),
        Some(y) if y == 1.0 => "1 year".to_string(),
        Some(y) => format!("{} years", format_number(y)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(Some(1_250_000.0)), "LKR 1,250,000");
        assert_eq!(format_amount(Some(999.0)), "LKR 999");
        assert_eq!(format_amount(Some(1000.4)), "LKR 1,000");
        assert_eq!(format_amount(None), "");
    }

    #[test]
    fn test_format_years() {
        assert_eq!(format_years(Some(1.0)), "1 year");
        assert_eq!(format_years(Some(6.0)), "6 years");
        assert_eq!(format_years(Some(2.5)), "2.5 years");
        assert_eq!(format_years(None), "");
    }
}
