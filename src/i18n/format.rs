//! Locale-aware number and date formatting for page copy.

use crate::i18n::Locale;
use chrono::{Datelike, NaiveDate};

const ENGLISH_MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

const PORTUGUESE_MONTHS: [&str; 12] = [
    "janeiro",
    "fevereiro",
    "março",
    "abril",
    "maio",
    "junho",
    "julho",
    "agosto",
    "setembro",
    "outubro",
    "novembro",
    "dezembro",
];

/// Format an integer with the locale's digit grouping.
///
/// English and Chinese group with commas. Portuguese groups with a no-break
/// space, and only from five digits up (`1234`, `12 345`).
pub fn format_number(value: i64, locale: Locale) -> String {
    let digits = value.unsigned_abs().to_string();
    let separator = match locale {
        Locale::En | Locale::Zh => Some(','),
        Locale::Pt if digits.len() > 4 => Some('\u{a0}'),
        Locale::Pt => None,
    };

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        grouped.push('-');
    }
    for (i, digit) in digits.chars().enumerate() {
        if let Some(separator) = separator {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push(separator);
            }
        }
        grouped.push(digit);
    }
    grouped
}

/// Format a calendar date in the locale's long form.
pub fn format_date(date: NaiveDate, locale: Locale) -> String {
    let month = date.month0() as usize;
    match locale {
        Locale::En => format!("{} {}, {}", ENGLISH_MONTHS[month], date.day(), date.year()),
        Locale::Zh => format!("{}年{}月{}日", date.year(), date.month(), date.day()),
        Locale::Pt => format!(
            "{} de {} de {}",
            date.day(),
            PORTUGUESE_MONTHS[month],
            date.year()
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
    }

    // ==================== format_number Tests ====================

    #[test]
    fn test_format_number_english() {
        assert_eq!(format_number(1_234_567, Locale::En), "1,234,567");
        assert_eq!(format_number(285, Locale::En), "285");
        assert_eq!(format_number(1000, Locale::En), "1,000");
        assert_eq!(format_number(0, Locale::En), "0");
    }

    #[test]
    fn test_format_number_chinese() {
        assert_eq!(format_number(42_000, Locale::Zh), "42,000");
    }

    #[test]
    fn test_format_number_portuguese() {
        assert_eq!(format_number(1234, Locale::Pt), "1234");
        assert_eq!(format_number(12_345, Locale::Pt), "12\u{a0}345");
        assert_eq!(format_number(1_234_567, Locale::Pt), "1\u{a0}234\u{a0}567");
    }

    #[test]
    fn test_format_number_negative() {
        assert_eq!(format_number(-1_500, Locale::En), "-1,500");
        assert_eq!(format_number(i64::MIN, Locale::En), "-9,223,372,036,854,775,808");
    }

    // ==================== format_date Tests ====================

    #[test]
    fn test_format_date_english() {
        assert_eq!(format_date(date(2025, 1, 5), Locale::En), "January 5, 2025");
    }

    #[test]
    fn test_format_date_chinese() {
        assert_eq!(format_date(date(2025, 1, 5), Locale::Zh), "2025年1月5日");
    }

    #[test]
    fn test_format_date_portuguese() {
        assert_eq!(format_date(date(2025, 3, 21), Locale::Pt), "21 de março de 2025");
    }
}
