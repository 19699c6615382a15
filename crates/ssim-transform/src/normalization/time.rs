//! Clock time parsing for STA/STD cells.

use chrono::{NaiveDateTime, NaiveTime};

use ssim_model::ClockTime;

const TIME_FORMATS: [&str; 3] = ["%H:%M:%S", "%H:%M", "%H%M"];

const DATETIME_FORMATS: [&str; 4] = [
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%d/%m/%Y %H:%M",
];

/// Parses a local clock time.
///
/// Accepts `HH:MM:SS`, `HH:MM`, `HHMM`, the three-digit `HMM` shorthand,
/// full date-time strings, and spreadsheet day fractions (`0.5` is noon).
/// Seconds are dropped.
pub fn parse_clock_time(raw: &str) -> Option<ClockTime> {
    let value = raw.trim();
    if value.is_empty() {
        return None;
    }

    for fmt in TIME_FORMATS {
        if let Ok(time) = NaiveTime::parse_from_str(value, fmt) {
            return Some(ClockTime::from_time(time));
        }
    }

    if value.len() == 3 && value.bytes().all(|b| b.is_ascii_digit()) {
        let padded = format!("0{value}");
        if let Ok(time) = NaiveTime::parse_from_str(&padded, "%H%M") {
            return Some(ClockTime::from_time(time));
        }
    }

    for fmt in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(value, fmt) {
            return Some(ClockTime::from_time(dt.time()));
        }
    }

    parse_day_fraction(value)
}

fn parse_day_fraction(value: &str) -> Option<ClockTime> {
    if !value.contains('.') {
        return None;
    }
    let fraction: f64 = value.parse().ok()?;
    if !(0.0..1.0).contains(&fraction) {
        return None;
    }
    let minutes = (fraction * 1440.0).round() as u32 % 1440;
    ClockTime::from_hm(minutes / 60, minutes % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hhmm(raw: &str) -> Option<String> {
        parse_clock_time(raw).map(ClockTime::hhmm)
    }

    #[test]
    fn parses_common_shapes() {
        assert_eq!(hhmm("08:05").as_deref(), Some("0805"));
        assert_eq!(hhmm("08:05:59").as_deref(), Some("0805"));
        assert_eq!(hhmm("0805").as_deref(), Some("0805"));
        assert_eq!(hhmm("8:05").as_deref(), Some("0805"));
        assert_eq!(hhmm("805").as_deref(), Some("0805"));
    }

    #[test]
    fn parses_datetime_cells() {
        assert_eq!(hhmm("1899-12-30 14:20:00").as_deref(), Some("1420"));
        assert_eq!(hhmm("2025-10-26T23:55:00").as_deref(), Some("2355"));
    }

    #[test]
    fn parses_day_fractions() {
        assert_eq!(hhmm("0.5").as_deref(), Some("1200"));
        assert_eq!(hhmm("0.75").as_deref(), Some("1800"));
    }

    #[test]
    fn rejects_garbage() {
        assert_eq!(hhmm(""), None);
        assert_eq!(hhmm("late"), None);
        assert_eq!(hhmm("25:00"), None);
        assert_eq!(hhmm("1.5"), None);
        assert_eq!(hhmm("12"), None);
    }
}
