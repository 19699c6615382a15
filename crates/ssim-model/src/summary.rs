use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::ids::AirlineCode;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AirlineSummary {
    pub airline: AirlineCode,
    /// Rows carrying a designator of this airline in either direction.
    pub rows: usize,
    pub arrivals: usize,
    pub departures: usize,
    /// Legs left out because their flight number does not fit the record.
    #[serde(default)]
    pub skipped: usize,
}

impl AirlineSummary {
    pub fn new(airline: AirlineCode) -> Self {
        Self {
            airline,
            rows: 0,
            arrivals: 0,
            departures: 0,
            skipped: 0,
        }
    }

    pub fn legs(&self) -> usize {
        self.arrivals + self.departures
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionSummary {
    pub airlines: Vec<AirlineSummary>,
    /// Requested airlines that had no rows in the input.
    pub missing_airlines: Vec<AirlineCode>,
    /// Lines in the assembled dataset, boilerplate included.
    pub total_lines: usize,
    pub output: Option<PathBuf>,
}

impl ConversionSummary {
    pub fn total_legs(&self) -> usize {
        self.airlines.iter().map(AirlineSummary::legs).sum()
    }

    pub fn total_skipped(&self) -> usize {
        self.airlines.iter().map(|airline| airline.skipped).sum()
    }
}
