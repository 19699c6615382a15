//! Validity period parsing for FROM/TILL cells.

use chrono::{Days, NaiveDate, NaiveDateTime};
use tracing::warn;

use ssim_model::ValidityPeriod;

/// Days added to the start date when the end date is missing.
pub const DEFAULT_VALIDITY_DAYS: u64 = 365;

const DATE_FORMATS: [&str; 11] = [
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%d/%m/%Y",
    "%d-%m-%Y",
    "%d.%m.%Y",
    "%Y%m%d",
    "%d%b%y",
    "%d%b%Y",
    "%d-%b-%y",
    "%d-%b-%Y",
    "%d %b %Y",
];

const DATETIME_FORMATS: [&str; 3] = [
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%d/%m/%Y %H:%M:%S",
];

/// Parses a schedule date.
///
/// Numeric day/month shapes are read day first. Month abbreviations are
/// matched without regard to case, so `01DEC25` and `01-Dec-2025` both work.
pub fn parse_schedule_date(raw: &str) -> Option<NaiveDate> {
    let value = raw.trim();
    if value.is_empty() {
        return None;
    }
    for fmt in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(value, fmt) {
            return Some(date);
        }
    }
    for fmt in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(value, fmt) {
            return Some(dt.date());
        }
    }
    None
}

/// Resolves the validity period of a row.
///
/// A missing or unreadable start falls back to `issue_date`; a missing or
/// unreadable end falls back to one year after the start.
pub fn validity_period(
    valid_from: Option<&str>,
    valid_till: Option<&str>,
    issue_date: NaiveDate,
) -> ValidityPeriod {
    let start = match valid_from {
        Some(raw) => parse_schedule_date(raw).unwrap_or_else(|| {
            warn!(value = raw, "unreadable start date, using issue date");
            issue_date
        }),
        None => issue_date,
    };
    let default_end = start
        .checked_add_days(Days::new(DEFAULT_VALIDITY_DAYS))
        .unwrap_or(start);
    let end = match valid_till {
        Some(raw) => parse_schedule_date(raw).unwrap_or_else(|| {
            warn!(value = raw, "unreadable end date, using default validity");
            default_end
        }),
        None => default_end,
    };
    if end < start {
        warn!(start = %start, end = %end, "validity period ends before it starts");
    }
    ValidityPeriod::new(start, end)
}
