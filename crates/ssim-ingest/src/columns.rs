//! Recognition of schedule column headers.
//!
//! Both the logical column names (`ArrivalFlight`, `ValidFrom`, ...) and the
//! hub schedule export names (`A.FLT`, `FROM`, `OP.D.1`, ...) are accepted.
//! Matching ignores case and any non-alphanumeric characters, so
//! `Arrival Flight`, `arrival_flight` and `ARRIVALFLIGHT` all resolve to the
//! same column.

use std::fmt;

/// A schedule column the converter knows how to read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ScheduleColumn {
    ArrivalFlight,
    DepartureFlight,
    ArrivalTime,
    DepartureTime,
    OriginStation,
    DestinationStation,
    AircraftType,
    ServiceType,
    ValidFrom,
    ValidTill,
    /// Operate indicator for weekday 1 (Monday) through 7 (Sunday).
    Day(u8),
}

const ALIASES: &[(ScheduleColumn, &[&str])] = &[
    (ScheduleColumn::ArrivalFlight, &["ARRIVALFLIGHT", "AFLT"]),
    (ScheduleColumn::DepartureFlight, &["DEPARTUREFLIGHT", "DFLT"]),
    (ScheduleColumn::ArrivalTime, &["ARRIVALTIME", "STA"]),
    (ScheduleColumn::DepartureTime, &["DEPARTURETIME", "STD"]),
    (ScheduleColumn::OriginStation, &["ORIGINSTATION", "ORIG", "ORIGIN"]),
    (
        ScheduleColumn::DestinationStation,
        &["DESTINATIONSTATION", "DEST", "DESTINATION"],
    ),
    (ScheduleColumn::AircraftType, &["AIRCRAFTTYPE", "ATY"]),
    (ScheduleColumn::ServiceType, &["SERVICETYPE", "FLTTYPE"]),
    (ScheduleColumn::ValidFrom, &["VALIDFROM", "FROM"]),
    (ScheduleColumn::ValidTill, &["VALIDTILL", "TILL", "VALIDTO"]),
];

const DAY_NAMES: [&str; 7] = [
    "MONDAY",
    "TUESDAY",
    "WEDNESDAY",
    "THURSDAY",
    "FRIDAY",
    "SATURDAY",
    "SUNDAY",
];

/// Uppercase ASCII alphanumerics only.
pub fn compact_key(value: &str) -> String {
    value
        .chars()
        .filter(|ch| ch.is_ascii_alphanumeric())
        .map(|ch| ch.to_ascii_uppercase())
        .collect()
}

impl ScheduleColumn {
    /// Resolves a header cell to a known column.
    pub fn from_header(header: &str) -> Option<Self> {
        let key = compact_key(header);
        if key.is_empty() {
            return None;
        }
        if let Some((column, _)) = ALIASES
            .iter()
            .find(|(_, aliases)| aliases.contains(&key.as_str()))
        {
            return Some(*column);
        }
        day_from_key(&key).map(Self::Day)
    }

    /// Canonical (logical) column name.
    pub fn name(self) -> String {
        match self {
            Self::ArrivalFlight => "ArrivalFlight".to_string(),
            Self::DepartureFlight => "DepartureFlight".to_string(),
            Self::ArrivalTime => "ArrivalTime".to_string(),
            Self::DepartureTime => "DepartureTime".to_string(),
            Self::OriginStation => "OriginStation".to_string(),
            Self::DestinationStation => "DestinationStation".to_string(),
            Self::AircraftType => "AircraftType".to_string(),
            Self::ServiceType => "ServiceType".to_string(),
            Self::ValidFrom => "ValidFrom".to_string(),
            Self::ValidTill => "ValidTill".to_string(),
            Self::Day(day) => format!("Day{day}"),
        }
    }
}

impl fmt::Display for ScheduleColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name())
    }
}

/// `OPD1`..`OPD7`, `DAY1`..`DAY7`, `D1`..`D7` and English weekday names.
fn day_from_key(key: &str) -> Option<u8> {
    for prefix in ["OPD", "DAY", "D"] {
        if let Some(rest) = key.strip_prefix(prefix) {
            if let Ok(day) = rest.parse::<u8>() {
                if (1..=7).contains(&day) {
                    return Some(day);
                }
            }
        }
    }
    DAY_NAMES
        .iter()
        .position(|name| *name == key || &name[..3] == key)
        .map(|idx| idx as u8 + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognizes_export_names() {
        assert_eq!(
            ScheduleColumn::from_header("A.FLT"),
            Some(ScheduleColumn::ArrivalFlight)
        );
        assert_eq!(
            ScheduleColumn::from_header("D.FLT"),
            Some(ScheduleColumn::DepartureFlight)
        );
        assert_eq!(
            ScheduleColumn::from_header("FLT.TYPE"),
            Some(ScheduleColumn::ServiceType)
        );
        assert_eq!(
            ScheduleColumn::from_header("OP.D.1"),
            Some(ScheduleColumn::Day(1))
        );
        assert_eq!(
            ScheduleColumn::from_header("OP/D/7"),
            Some(ScheduleColumn::Day(7))
        );
    }

    #[test]
    fn recognizes_logical_names_loosely() {
        assert_eq!(
            ScheduleColumn::from_header("Arrival Flight"),
            Some(ScheduleColumn::ArrivalFlight)
        );
        assert_eq!(
            ScheduleColumn::from_header("valid_till"),
            Some(ScheduleColumn::ValidTill)
        );
        assert_eq!(
            ScheduleColumn::from_header("Wed"),
            Some(ScheduleColumn::Day(3))
        );
        assert_eq!(
            ScheduleColumn::from_header("Sunday"),
            Some(ScheduleColumn::Day(7))
        );
    }

    #[test]
    fn ignores_unknown_headers() {
        assert_eq!(ScheduleColumn::from_header("REMARKS"), None);
        assert_eq!(ScheduleColumn::from_header("OP.D.8"), None);
        assert_eq!(ScheduleColumn::from_header(""), None);
    }
}
