//! Date helpers for UI labels. Weekday names are fixed English.

use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike};

const WEEKDAY_NAMES: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

pub fn weekday_name(date: NaiveDate) -> &'static str {
    WEEKDAY_NAMES[date.weekday().num_days_from_sunday() as usize]
}

/// Signed whole-day difference, positive when `to` is after `from`.
pub fn diff_days(from: NaiveDate, to: NaiveDate) -> i64 {
    (to - from).num_days()
}

pub fn add_days(date: NaiveDate, days: i64) -> Option<NaiveDate> {
    date.checked_add_signed(chrono::Duration::try_days(days)?)
}

/// Substitutes `YYYY`, `MM`, `DD`, `HH`, `mm` and `ss` tokens; anything else
/// passes through verbatim.
pub fn format_pattern(datetime: NaiveDateTime, pattern: &str) -> String {
    let mut out = String::with_capacity(pattern.len() + 8);
    let mut rest = pattern;

    while !rest.is_empty() {
        let (replacement, consumed) = if rest.starts_with("YYYY") {
            (format!("{:04}", datetime.year()), 4)
        } else if rest.starts_with("MM") {
            (format!("{:02}", datetime.month()), 2)
        } else if rest.starts_with("DD") {
            (format!("{:02}", datetime.day()), 2)
        } else if rest.starts_with("HH") {
            (format!("{:02}", datetime.hour()), 2)
        } else if rest.starts_with("mm") {
            (format!("{:02}", datetime.minute()), 2)
        } else if rest.starts_with("ss") {
            (format!("{:02}", datetime.second()), 2)
        } else {
            let ch = rest.chars().next().unwrap();
            (ch.to_string(), ch.len_utf8())
        };
        out.push_str(&replacement);
        rest = &rest[consumed..];
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_weekday_names_are_english() {
        assert_eq!(weekday_name(date(2024, 1, 1)), "Monday");
        assert_eq!(weekday_name(date(2024, 1, 7)), "Sunday");
        assert_eq!(weekday_name(date(2024, 2, 29)), "Thursday");
    }

    #[test]
    fn test_diff_days_is_signed() {
        assert_eq!(diff_days(date(2024, 1, 1), date(2024, 1, 31)), 30);
        assert_eq!(diff_days(date(2024, 1, 31), date(2024, 1, 1)), -30);
        assert_eq!(diff_days(date(2024, 1, 1), date(2024, 1, 1)), 0);
        // Leap day crosses February.
        assert_eq!(diff_days(date(2024, 2, 1), date(2024, 3, 1)), 29);
    }

    #[test]
    fn test_add_days_crosses_boundaries() {
        assert_eq!(add_days(date(2023, 12, 31), 1), Some(date(2024, 1, 1)));
        assert_eq!(add_days(date(2024, 3, 1), -1), Some(date(2024, 2, 29)));
        assert_eq!(add_days(date(2024, 1, 1), 0), Some(date(2024, 1, 1)));
        assert_eq!(add_days(date(2024, 1, 1), i64::MAX), None);
    }

    #[test]
    fn test_format_pattern_token_table() {
        let dt = date(2024, 3, 7).and_hms_opt(9, 5, 2).unwrap();
        assert_eq!(format_pattern(dt, "YYYY-MM-DD HH:mm:ss"), "2024-03-07 09:05:02");
        assert_eq!(format_pattern(dt, "DD/MM/YYYY"), "07/03/2024");
        assert_eq!(format_pattern(dt, "YYYYMMDD"), "20240307");
    }

    #[test]
    fn test_format_pattern_passes_other_text_through() {
        let dt = date(2024, 3, 7).and_hms_opt(9, 5, 2).unwrap();
        assert_eq!(format_pattern(dt, "at HH h"), "at 09 h");
        assert_eq!(format_pattern(dt, "no tokens"), "no tokens");
        assert_eq!(format_pattern(dt, "µ YYYY µ"), "µ 2024 µ");
        assert_eq!(format_pattern(dt, ""), "");
    }
}
