//! Format - Formatting Utilities

use chrono::{DateTime, Datelike, Local};

use crate::i18n::Locale;

/// HH:MM:SS time portion
pub fn format_time(dt: &DateTime<Local>) -> String {
    dt.format("%H:%M:%S").to_string()
}

/// HH:MM time portion
pub fn format_hm(dt: &DateTime<Local>) -> String {
    dt.format("%H:%M").to_string()
}

const WEEKDAYS_ES: [&str; 7] = [
    "lunes", "martes", "miércoles", "jueves", "viernes", "sábado", "domingo",
];
const WEEKDAYS_EN: [&str; 7] = [
    "Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday", "Sunday",
];
const MONTHS_ES: [&str; 12] = [
    "enero", "febrero", "marzo", "abril", "mayo", "junio", "julio", "agosto", "septiembre",
    "octubre", "noviembre", "diciembre",
];
const MONTHS_EN: [&str; 12] = [
    "January", "February", "March", "April", "May", "June", "July", "August", "September",
    "October", "November", "December",
];

/// Long localized date, e.g. "martes, 26 de agosto de 2026"
pub fn format_long_date(locale: Locale, dt: &DateTime<Local>) -> String {
    let weekday = dt.weekday().num_days_from_monday() as usize;
    let month = dt.month0() as usize;
    match locale {
        Locale::EsEs => format!(
            "{}, {} de {} de {}",
            WEEKDAYS_ES[weekday],
            dt.day(),
            MONTHS_ES[month],
            dt.year()
        ),
        Locale::EnUs => format!(
            "{}, {} {}, {}",
            WEEKDAYS_EN[weekday],
            MONTHS_EN[month],
            dt.day(),
            dt.year()
        ),
    }
}

/// Truncate a string to max chars with ellipsis
pub fn truncate(s: &str, max_len: usize) -> String {
    let count = s.chars().count();
    if count <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        s.chars().take(max_len).collect()
    } else {
        let kept: String = s.chars().take(max_len - 3).collect();
        format!("{kept}...")
    }
}

/// Characters remaining against a limit; negative when over it
pub fn remaining_chars(s: &str, limit: usize) -> i64 {
    limit as i64 - s.chars().count() as i64
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_long_date_spanish() {
        let dt = Local.with_ymd_and_hms(2026, 8, 26, 10, 0, 0).single().expect("dt");
        assert_eq!(
            format_long_date(Locale::EsEs, &dt),
            "miércoles, 26 de agosto de 2026"
        );
    }

    #[test]
    fn test_long_date_english() {
        let dt = Local.with_ymd_and_hms(2026, 8, 26, 10, 0, 0).single().expect("dt");
        assert_eq!(
            format_long_date(Locale::EnUs, &dt),
            "Wednesday, August 26, 2026"
        );
    }

    #[test]
    fn test_truncate_counts_chars_not_bytes() {
        assert_eq!(truncate("vigía", 10), "vigía");
        assert_eq!(truncate("vigía del sistema", 8), "vigía...");
    }

    #[test]
    fn test_remaining_chars_goes_negative_over_limit() {
        assert_eq!(remaining_chars("", 15), 15);
        assert_eq!(remaining_chars("pasillo", 15), 8);
        assert_eq!(remaining_chars("una descripción demasiado larga", 15), -16);
    }
}
