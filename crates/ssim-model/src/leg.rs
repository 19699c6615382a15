//! Directional flight legs derived from schedule rows.

use std::fmt;

use chrono::{NaiveDate, NaiveTime, TimeDelta, Timelike};
use serde::{Deserialize, Serialize};

use crate::ids::{Identifier, Station};

/// Local clock time with minute precision, rendered as `HHMM`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ClockTime(NaiveTime);

impl ClockTime {
    pub fn from_hm(hour: u32, minute: u32) -> Option<Self> {
        NaiveTime::from_hms_opt(hour, minute, 0).map(Self)
    }

    /// Drops seconds and sub-second precision.
    pub fn from_time(time: NaiveTime) -> Self {
        Self(NaiveTime::from_hms_opt(time.hour(), time.minute(), 0).unwrap_or(NaiveTime::MIN))
    }

    /// Shifts by whole hours, wrapping around midnight. Any shift is
    /// accepted; only its remainder modulo 24 matters.
    #[must_use]
    pub fn shifted_hours(self, hours: i64) -> Self {
        Self(self.0 + TimeDelta::hours(hours.rem_euclid(24)))
    }

    pub fn hour(self) -> u32 {
        self.0.hour()
    }

    pub fn minute(self) -> u32 {
        self.0.minute()
    }

    /// Four-digit `HHMM` rendering.
    pub fn hhmm(self) -> String {
        format!("{:02}{:02}", self.0.hour(), self.0.minute())
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.hhmm())
    }
}

/// Weekday operating pattern, Monday first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DayMask([bool; 7]);

impl DayMask {
    /// Every day operates.
    pub const DAILY: Self = Self([true; 7]);

    /// Builds a mask; a pattern with no operating day means daily.
    pub fn from_days(days: [bool; 7]) -> Self {
        if days.iter().any(|&day| day) {
            Self(days)
        } else {
            Self::DAILY
        }
    }

    pub fn operates(self, day: usize) -> bool {
        (1..=7).contains(&day) && self.0[day - 1]
    }

    /// Seven characters: digit `i` where day `i` operates, a space otherwise.
    pub fn render(self) -> String {
        self.0
            .iter()
            .enumerate()
            .map(|(idx, &on)| {
                if on {
                    char::from(b'1' + idx as u8)
                } else {
                    ' '
                }
            })
            .collect()
    }
}

impl Default for DayMask {
    fn default() -> Self {
        Self::DAILY
    }
}

impl fmt::Display for DayMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

/// Formats a date as `DDMmmYY` in uppercase, e.g. `01DEC25`.
pub fn format_schedule_date(date: NaiveDate) -> String {
    date.format("%d%b%y").to_string().to_uppercase()
}

/// First and last day a schedule entry is valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ValidityPeriod {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl ValidityPeriod {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    pub fn start_text(&self) -> String {
        format_schedule_date(self.start)
    }

    pub fn end_text(&self) -> String {
        format_schedule_date(self.end)
    }
}

/// Movement relative to the hub station.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Counterpart station to hub.
    Arrival,
    /// Hub to counterpart station.
    Departure,
}

impl Direction {
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Arrival => "arrival",
            Direction::Departure => "departure",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One directional flight leg ready for encoding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DerivedLeg {
    pub identifier: Identifier,
    pub direction: Direction,
    /// The non-hub end of the leg.
    pub counterpart: Station,
    /// Scheduled local time at the hub (arrival or departure).
    pub hub_time: ClockTime,
    /// Synthesized time at the counterpart station.
    pub counterpart_time: ClockTime,
    pub aircraft_type: String,
    pub service_type: char,
    pub period: ValidityPeriod,
    pub days: DayMask,
    /// Occurrence ordinal of this identifier within the run (1-based).
    pub variation: u32,
    /// Onward leg of the same rotation; only arrivals carry one.
    pub link: Option<Identifier>,
}

impl DerivedLeg {
    /// Identifier written into the next-flight fields: the link target, or
    /// the leg itself when there is no onward connection.
    pub fn next_flight(&self) -> &Identifier {
        self.link.as_ref().unwrap_or(&self.identifier)
    }

    /// `(departure station, departure time, arrival station, arrival time)`
    /// as seen on the wire, given the hub station.
    pub fn endpoints<'a>(
        &'a self,
        hub: &'a Station,
    ) -> (&'a Station, ClockTime, &'a Station, ClockTime) {
        match self.direction {
            Direction::Arrival => (
                &self.counterpart,
                self.counterpart_time,
                hub,
                self.hub_time,
            ),
            Direction::Departure => (
                hub,
                self.hub_time,
                &self.counterpart,
                self.counterpart_time,
            ),
        }
    }
}
