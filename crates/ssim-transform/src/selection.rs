//! Airline discovery and selection.

use std::collections::{BTreeMap, BTreeSet};

use tracing::warn;

use ssim_model::{AirlineCode, AirlineSelection, FlightLegRow};

use crate::normalization::extract_from_cell;

/// Airlines named by either designator of a row.
pub fn row_airlines(row: &FlightLegRow) -> BTreeSet<AirlineCode> {
    [row.arrival_flight.as_deref(), row.departure_flight.as_deref()]
        .into_iter()
        .filter_map(extract_from_cell)
        .map(|id| id.airline)
        .collect()
}

/// Number of rows per airline, in ascending airline order.
pub fn airline_row_counts(rows: &[FlightLegRow]) -> BTreeMap<AirlineCode, usize> {
    let mut counts = BTreeMap::new();
    for row in rows {
        for airline in row_airlines(row) {
            *counts.entry(airline).or_insert(0) += 1;
        }
    }
    counts
}

/// Every airline found in the table, sorted ascending.
pub fn discover_airlines(rows: &[FlightLegRow]) -> Vec<AirlineCode> {
    airline_row_counts(rows).into_keys().collect()
}

/// Rows that carry a designator of `airline`, in table order.
pub fn rows_for_airline<'a>(
    rows: &'a [FlightLegRow],
    airline: &'a AirlineCode,
) -> impl Iterator<Item = &'a FlightLegRow> + 'a {
    rows.iter()
        .filter(move |row| row_airlines(row).contains(airline))
}

/// Airlines to convert and requested airlines absent from the input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedSelection {
    /// Airlines to convert, ascending.
    pub airlines: Vec<AirlineCode>,
    pub missing: Vec<AirlineCode>,
}

impl ResolvedSelection {
    pub fn is_empty(&self) -> bool {
        self.airlines.is_empty()
    }
}

/// Resolves a selection against the airlines present in `rows`.
pub fn resolve_selection(selection: &AirlineSelection, rows: &[FlightLegRow]) -> ResolvedSelection {
    let available: BTreeSet<AirlineCode> = discover_airlines(rows).into_iter().collect();
    let Some(requested) = selection.requested() else {
        return ResolvedSelection {
            airlines: available.into_iter().collect(),
            missing: Vec::new(),
        };
    };

    let requested: BTreeSet<AirlineCode> = requested.into_iter().collect();
    let (airlines, missing): (Vec<_>, Vec<_>) = requested
        .into_iter()
        .partition(|airline| available.contains(airline));
    for airline in &missing {
        warn!(airline = %airline, "requested airline not found in schedule");
    }
    ResolvedSelection { airlines, missing }
}
