//! Input rows of a hub schedule table.

use serde::{Deserialize, Serialize};

/// Marker used in designator and station columns when the aircraft stays
/// overnight at the hub instead of arriving or leaving on this row.
pub const STAY_SENTINEL: &str = "N/S";

/// Returns true if the value is the overnight-stay marker.
pub fn is_stay_sentinel(value: &str) -> bool {
    value.trim().eq_ignore_ascii_case(STAY_SENTINEL)
}

/// One row of the hub schedule: an arrival and/or a departure of the same
/// aircraft rotation.
///
/// Every field is already trimmed; blank cells are `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlightLegRow {
    /// 1-based data row number in the source table (header excluded).
    pub row_number: usize,
    pub arrival_flight: Option<String>,
    pub departure_flight: Option<String>,
    pub arrival_time: Option<String>,
    pub departure_time: Option<String>,
    pub origin_station: Option<String>,
    pub destination_station: Option<String>,
    pub aircraft_type: Option<String>,
    pub service_type: Option<String>,
    pub valid_from: Option<String>,
    pub valid_till: Option<String>,
    /// Monday (1) through Sunday (7) operate indicators.
    pub days: [Option<String>; 7],
}

impl FlightLegRow {
    pub fn new(row_number: usize) -> Self {
        Self {
            row_number,
            ..Self::default()
        }
    }

    /// The origin column holds the stay marker.
    pub fn origin_is_stay(&self) -> bool {
        self.origin_station.as_deref().is_some_and(is_stay_sentinel)
    }

    /// The destination column holds the stay marker.
    pub fn destination_is_stay(&self) -> bool {
        self.destination_station
            .as_deref()
            .is_some_and(is_stay_sentinel)
    }
}

/// Turns a raw cell into `None` when it is empty or whitespace.
pub fn non_blank(value: &str) -> Option<String> {
    let trimmed = value.trim().trim_matches('\u{feff}');
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
