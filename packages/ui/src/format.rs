//! Display formatting helpers.

use chrono::{DateTime, Utc};

/// Format a monetary amount with two decimals and thousands separators.
pub fn format_amount(amount: f64) -> String {
    let negative = amount < 0.0;
    let cents = (amount.abs() * 100.0).round() as u64;
    let whole = cents / 100;
    let frac = cents % 100;

    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    let sign = if negative { "-" } else { "" };
    format!("{sign}{grouped}.{frac:02}")
}

/// "June 1, 2025" or the raw string when it is not a timestamp.
pub fn format_date(raw: &str) -> String {
    match DateTime::parse_from_rfc3339(raw) {
        Ok(dt) => dt.with_timezone(&Utc).format("%B %-d, %Y").to_string(),
        Err(_) => raw.to_string(),
    }
}

/// "01 Jun 2025, 10:00" or the raw string when it is not a timestamp.
pub fn format_datetime(raw: &str) -> String {
    match DateTime::parse_from_rfc3339(raw) {
        Ok(dt) => dt.with_timezone(&Utc).format("%d %b %Y, %H:%M").to_string(),
        Err(_) => raw.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_thousands_and_pads_cents() {
        assert_eq!(format_amount(0.0), "0.00");
        assert_eq!(format_amount(42.5), "42.50");
        assert_eq!(format_amount(1000.0), "1,000.00");
        assert_eq!(format_amount(1234567.89), "1,234,567.89");
        assert_eq!(format_amount(-250.0), "-250.00");
    }

    #[test]
    fn formats_rfc3339_dates() {
        assert_eq!(format_date("2025-06-01T10:00:00Z"), "June 1, 2025");
        assert_eq!(format_datetime("2025-06-01T10:00:00Z"), "01 Jun 2025, 10:00");
    }

    #[test]
    fn passes_through_unparseable_dates() {
        assert_eq!(format_date("yesterday"), "yesterday");
    }
}
