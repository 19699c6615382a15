//! Configuration options for a schedule conversion run.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::ModelError;
use crate::ids::{AirlineCode, Station};

/// Fixed offset from UTC, rendered as `+HHMM` / `-HHMM`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct UtcOffset {
    minutes: i32,
}

impl UtcOffset {
    pub const UTC: Self = Self { minutes: 0 };

    pub const fn from_minutes(minutes: i32) -> Self {
        Self { minutes }
    }

    pub const fn minutes(self) -> i32 {
        self.minutes
    }
}

impl fmt::Display for UtcOffset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.minutes < 0 { '-' } else { '+' };
        let abs = self.minutes.unsigned_abs();
        write!(f, "{sign}{:02}{:02}", abs / 60, abs % 60)
    }
}

impl FromStr for UtcOffset {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let invalid = || ModelError::InvalidUtcOffset(s.to_string());
        let (sign, digits) = match trimmed.chars().next() {
            Some('+') => (1, &trimmed[1..]),
            Some('-') => (-1, &trimmed[1..]),
            _ => return Err(invalid()),
        };
        let digits = digits.replace(':', "");
        if digits.len() != 4 || !digits.chars().all(|ch| ch.is_ascii_digit()) {
            return Err(invalid());
        }
        let hours: i32 = digits[..2].parse().map_err(|_| invalid())?;
        let minutes: i32 = digits[2..].parse().map_err(|_| invalid())?;
        if hours > 14 || minutes > 59 {
            return Err(invalid());
        }
        Ok(Self::from_minutes(sign * (hours * 60 + minutes)))
    }
}

/// The station the schedule is written from, with its fixed UTC offset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HubStation {
    pub code: Station,
    pub utc_offset: UtcOffset,
}

impl HubStation {
    pub fn new(code: Station, utc_offset: UtcOffset) -> Self {
        Self { code, utc_offset }
    }
}

impl Default for HubStation {
    fn default() -> Self {
        Self {
            code: Station::new("AMS").unwrap_or_else(|_| Station::unknown()),
            utc_offset: UtcOffset::from_minutes(60),
        }
    }
}

/// Which airlines a conversion should emit.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AirlineSelection {
    /// Every airline discovered in the input.
    #[default]
    All,
    Single(AirlineCode),
    List(Vec<AirlineCode>),
}

impl AirlineSelection {
    /// Builds a selection from raw codes: none means all, one means single.
    pub fn from_codes<I, S>(codes: I) -> Result<Self, ModelError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut parsed: Vec<AirlineCode> = Vec::new();
        for code in codes {
            let code = AirlineCode::new(code.as_ref())?;
            if !parsed.contains(&code) {
                parsed.push(code);
            }
        }
        Ok(match parsed.len() {
            0 => Self::All,
            1 => Self::Single(parsed.remove(0)),
            _ => Self::List(parsed),
        })
    }

    /// Explicitly requested codes, `None` for all.
    pub fn requested(&self) -> Option<Vec<AirlineCode>> {
        match self {
            Self::All => None,
            Self::Single(code) => Some(vec![code.clone()]),
            Self::List(codes) => Some(codes.clone()),
        }
    }
}

/// Default creator reference written on carrier lines.
pub const DEFAULT_CREATOR: &str = "Created by schedule converter";

/// Hours between hub time and the synthesized counterpart time.
pub const DEFAULT_TIME_SHIFT_HOURS: i64 = 2;

/// Options controlling a conversion run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversionOptions {
    pub hub: HubStation,
    pub selection: AirlineSelection,
    /// Issue date for boilerplate lines and default validity start
    /// (default: today).
    pub issue_date: Option<NaiveDate>,
    /// Free text on carrier-info lines.
    pub creator: String,
    pub time_shift_hours: i64,
}

impl Default for ConversionOptions {
    fn default() -> Self {
        Self {
            hub: HubStation::default(),
            selection: AirlineSelection::All,
            issue_date: None,
            creator: DEFAULT_CREATOR.to_string(),
            time_shift_hours: DEFAULT_TIME_SHIFT_HOURS,
        }
    }
}

impl ConversionOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_hub(mut self, hub: HubStation) -> Self {
        self.hub = hub;
        self
    }

    #[must_use]
    pub fn with_selection(mut self, selection: AirlineSelection) -> Self {
        self.selection = selection;
        self
    }

    #[must_use]
    pub fn with_issue_date(mut self, date: NaiveDate) -> Self {
        self.issue_date = Some(date);
        self
    }

    #[must_use]
    pub fn with_creator(mut self, creator: impl Into<String>) -> Self {
        self.creator = creator.into();
        self
    }

    #[must_use]
    pub fn with_time_shift_hours(mut self, hours: i64) -> Self {
        self.time_shift_hours = hours;
        self
    }

    /// Get the issue date (local today if not set).
    #[must_use]
    pub fn issue_date(&self) -> NaiveDate {
        self.issue_date
            .unwrap_or_else(|| chrono::Local::now().date_naive())
    }
}
