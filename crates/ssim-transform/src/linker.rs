//! Leg classification and linking.
//!
//! Each schedule row yields at most one arrival and one departure leg for
//! the airline being processed. Arrivals point forward to the departure on
//! the same row, whether it leaves the same day (turnaround) or the
//! aircraft stays at the hub overnight.

use std::collections::HashMap;

use chrono::NaiveDate;
use tracing::{debug, warn};

use ssim_model::{
    AirlineCode, ClockTime, ConversionOptions, DayMask, DerivedLeg, Direction, FlightLegRow,
    Identifier, ValidityPeriod,
};

use crate::normalization::{
    day_mask, extract_from_cell, normalize_aircraft_type, normalize_station, parse_clock_time,
    split_service_types, validity_period,
};

/// Counterpart departure time used for arrivals without a readable STA.
pub const ARRIVAL_COUNTERPART_FALLBACK_HOUR: u32 = 6;
/// Counterpart arrival time used for departures without a readable STD.
pub const DEPARTURE_COUNTERPART_FALLBACK_HOUR: u32 = 14;
/// Hub time used for arrivals without a readable STA.
pub const ARRIVAL_HUB_FALLBACK_HOUR: u32 = 8;
/// Hub time used for departures without a readable STD.
pub const DEPARTURE_HUB_FALLBACK_HOUR: u32 = 12;

/// Inputs the linker needs from the conversion options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinkSettings {
    /// Start date for rows without a readable validity start.
    pub issue_date: NaiveDate,
    /// Hours between the hub time and the synthesized counterpart time.
    pub time_shift_hours: i64,
}

impl LinkSettings {
    pub fn from_options(options: &ConversionOptions) -> Self {
        Self {
            issue_date: options.issue_date(),
            time_shift_hours: options.time_shift_hours,
        }
    }
}

/// How the arrival leg of a row connects onward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RowLink {
    /// Arrival and departure on the same row, same day.
    Turnaround,
    /// Aircraft stays at the hub; the departure identifier on the row
    /// leaves on a later date.
    OvernightStay,
    /// No onward identifier; the arrival points at itself.
    #[default]
    None,
}

/// Legs produced from one row for one airline, arrival first.
#[derive(Debug, Clone, Default)]
pub struct RowLegs {
    pub arrival: Option<DerivedLeg>,
    pub departure: Option<DerivedLeg>,
    pub link: RowLink,
    /// Legs left out because their flight number is wider than the record
    /// field.
    pub skipped: usize,
}

impl RowLegs {
    pub fn is_empty(&self) -> bool {
        self.arrival.is_none() && self.departure.is_none()
    }

    pub fn into_legs(self) -> impl Iterator<Item = DerivedLeg> {
        self.arrival.into_iter().chain(self.departure)
    }
}

/// Per-conversion state carried across rows.
#[derive(Debug, Clone, Default)]
pub struct RunState {
    variations: HashMap<Identifier, u32>,
}

/// Row values shared by both legs.
struct RowContext {
    row_number: usize,
    aircraft_type: String,
    period: ValidityPeriod,
    days: DayMask,
}

impl RunState {
    pub fn new() -> Self {
        Self::default()
    }

    /// How many legs with this identifier have been emitted so far.
    pub fn variation_count(&self, identifier: &Identifier) -> u32 {
        self.variations.get(identifier).copied().unwrap_or(0)
    }

    fn next_variation(&mut self, identifier: &Identifier) -> u32 {
        let count = self.variations.entry(identifier.clone()).or_insert(0);
        *count += 1;
        *count
    }

    /// Classifies a row and derives its legs for `airline`.
    ///
    /// Designators of other airlines are ignored, as is any direction whose
    /// station is the stay marker.
    pub fn derive_row(
        &mut self,
        row: &FlightLegRow,
        airline: &AirlineCode,
        settings: &LinkSettings,
    ) -> RowLegs {
        let of_airline = |cell: Option<&String>| {
            extract_from_cell(cell.map(String::as_str)).filter(|id| &id.airline == airline)
        };
        let mut skipped = 0;
        let arrival_id = fitting_identifier(
            of_airline(row.arrival_flight.as_ref()),
            !row.origin_is_stay(),
            row.row_number,
            Direction::Arrival,
            &mut skipped,
        );
        let departure_id = fitting_identifier(
            of_airline(row.departure_flight.as_ref()),
            !row.destination_is_stay(),
            row.row_number,
            Direction::Departure,
            &mut skipped,
        );
        if arrival_id.is_none() && departure_id.is_none() {
            return RowLegs {
                skipped,
                ..RowLegs::default()
            };
        }

        let context = RowContext {
            row_number: row.row_number,
            aircraft_type: normalize_aircraft_type(row.aircraft_type.as_deref()),
            period: validity_period(
                row.valid_from.as_deref(),
                row.valid_till.as_deref(),
                settings.issue_date,
            ),
            days: day_mask(&row.days),
        };
        let (arrival_service, departure_service) =
            split_service_types(row.service_type.as_deref());

        let departs = departure_id.is_some() && !row.destination_is_stay();
        let mut legs = RowLegs {
            skipped,
            ..RowLegs::default()
        };

        if let Some(id) = arrival_id.filter(|_| !row.origin_is_stay()) {
            legs.link = match (&departure_id, departs) {
                (Some(_), true) => RowLink::Turnaround,
                (Some(_), false) => RowLink::OvernightStay,
                (None, _) => RowLink::None,
            };
            let link = departure_id.clone().unwrap_or_else(|| id.clone());
            let (hub_time, counterpart_time) = leg_times(
                row.arrival_time.as_deref(),
                settings.time_shift_hours.saturating_neg(),
                ARRIVAL_HUB_FALLBACK_HOUR,
                ARRIVAL_COUNTERPART_FALLBACK_HOUR,
                &context,
                Direction::Arrival,
            );
            let variation = self.next_variation(&id);
            legs.arrival = Some(DerivedLeg {
                identifier: id,
                direction: Direction::Arrival,
                counterpart: normalize_station(row.origin_station.as_deref()),
                hub_time,
                counterpart_time,
                aircraft_type: context.aircraft_type.clone(),
                service_type: arrival_service,
                period: context.period,
                days: context.days,
                variation,
                link: Some(link),
            });
        }

        if let Some(id) = departure_id.filter(|_| departs) {
            let (hub_time, counterpart_time) = leg_times(
                row.departure_time.as_deref(),
                settings.time_shift_hours,
                DEPARTURE_HUB_FALLBACK_HOUR,
                DEPARTURE_COUNTERPART_FALLBACK_HOUR,
                &context,
                Direction::Departure,
            );
            let variation = self.next_variation(&id);
            legs.departure = Some(DerivedLeg {
                identifier: id,
                direction: Direction::Departure,
                counterpart: normalize_station(row.destination_station.as_deref()),
                hub_time,
                counterpart_time,
                aircraft_type: context.aircraft_type.clone(),
                service_type: departure_service,
                period: context.period,
                days: context.days,
                variation,
                link: None,
            });
        }

        debug!(
            row = row.row_number,
            airline = %airline,
            arrival = legs.arrival.is_some(),
            departure = legs.departure.is_some(),
            skipped = legs.skipped,
            link = ?legs.link,
            "row classified"
        );
        legs
    }
}

/// Drops an identifier whose number would be cut by the record field.
///
/// A cut number names a different flight, so neither a leg nor an onward
/// link is built from it. `emitted` says whether the leg would have been
/// written, so that only real legs are counted as skipped.
fn fitting_identifier(
    id: Option<Identifier>,
    emitted: bool,
    row_number: usize,
    direction: Direction,
    skipped: &mut usize,
) -> Option<Identifier> {
    let id = id?;
    if id.fits_record() {
        return Some(id);
    }
    warn!(
        row = row_number,
        direction = %direction,
        flight = %id,
        "flight number wider than four digits, leg skipped"
    );
    if emitted {
        *skipped += 1;
    }
    None
}

fn fixed_time(hour: u32) -> ClockTime {
    ClockTime::from_hm(hour, 0).unwrap_or_else(|| ClockTime::from_time(chrono::NaiveTime::MIN))
}

/// Hub time and synthesized counterpart time for one leg.
fn leg_times(
    raw: Option<&str>,
    shift_hours: i64,
    hub_fallback_hour: u32,
    counterpart_fallback_hour: u32,
    context: &RowContext,
    direction: Direction,
) -> (ClockTime, ClockTime) {
    if let Some(hub_time) = raw.and_then(parse_clock_time) {
        return (hub_time, hub_time.shifted_hours(shift_hours));
    }
    warn!(
        row = context.row_number,
        direction = %direction,
        value = raw.unwrap_or(""),
        "unreadable hub time, using fallback times"
    );
    (
        fixed_time(hub_fallback_hour),
        fixed_time(counterpart_fallback_hour),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings() -> LinkSettings {
        LinkSettings {
            issue_date: NaiveDate::from_ymd_opt(2025, 10, 1).unwrap(),
            time_shift_hours: 2,
        }
    }

    fn kl() -> AirlineCode {
        AirlineCode::new("KL").unwrap()
    }

    fn row(arrival: Option<&str>, departure: Option<&str>) -> FlightLegRow {
        let mut row = FlightLegRow::new(1);
        row.arrival_flight = arrival.map(str::to_string);
        row.departure_flight = departure.map(str::to_string);
        row.arrival_time = Some("08:05".to_string());
        row.departure_time = Some("09:40".to_string());
        row.origin_station = Some("LHR".to_string());
        row.destination_station = Some("CDG".to_string());
        row
    }

    #[test]
    fn turnaround_links_arrival_to_departure() {
        let mut state = RunState::new();
        let legs = state.derive_row(&row(Some("KL1234"), Some("KL1235")), &kl(), &settings());
        assert_eq!(legs.link, RowLink::Turnaround);
        let arrival = legs.arrival.unwrap();
        let departure = legs.departure.unwrap();
        assert_eq!(arrival.next_flight().to_string(), "KL1235");
        assert_eq!(departure.next_flight().to_string(), "KL1235");
        assert_eq!(arrival.counterpart_time.hhmm(), "0605");
        assert_eq!(departure.counterpart_time.hhmm(), "1140");
    }

    #[test]
    fn overnight_stay_links_without_departure_leg() {
        let mut state = RunState::new();
        let mut stay = row(Some("KL1234"), Some("KL1235"));
        stay.destination_station = Some("N/S".to_string());
        let legs = state.derive_row(&stay, &kl(), &settings());
        assert_eq!(legs.link, RowLink::OvernightStay);
        assert!(legs.departure.is_none());
        assert_eq!(legs.arrival.unwrap().next_flight().to_string(), "KL1235");
    }

    #[test]
    fn arrival_without_onward_flight_links_to_itself() {
        let mut state = RunState::new();
        let legs = state.derive_row(&row(Some("KL1234"), None), &kl(), &settings());
        assert_eq!(legs.link, RowLink::None);
        let arrival = legs.arrival.unwrap();
        assert_eq!(arrival.link.as_ref(), Some(&arrival.identifier));
    }

    #[test]
    fn other_airline_designators_are_ignored() {
        let mut state = RunState::new();
        let legs = state.derive_row(&row(Some("KL1234"), Some("AF1235")), &kl(), &settings());
        assert!(legs.departure.is_none());
        assert_eq!(legs.link, RowLink::None);
        assert_eq!(legs.arrival.unwrap().next_flight().to_string(), "KL1234");
    }

    #[test]
    fn stay_origin_suppresses_arrival() {
        let mut state = RunState::new();
        let mut parked = row(Some("KL1234"), Some("KL1235"));
        parked.origin_station = Some("n/s".to_string());
        let legs = state.derive_row(&parked, &kl(), &settings());
        assert!(legs.arrival.is_none());
        assert!(legs.departure.is_some());
    }

    #[test]
    fn unreadable_times_fall_back() {
        let mut state = RunState::new();
        let mut broken = row(Some("KL1234"), Some("KL1235"));
        broken.arrival_time = Some("late".to_string());
        broken.departure_time = None;
        let legs = state.derive_row(&broken, &kl(), &settings());
        let arrival = legs.arrival.unwrap();
        let departure = legs.departure.unwrap();
        assert_eq!(arrival.hub_time.hhmm(), "0800");
        assert_eq!(arrival.counterpart_time.hhmm(), "0600");
        assert_eq!(departure.hub_time.hhmm(), "1200");
        assert_eq!(departure.counterpart_time.hhmm(), "1400");
    }

    #[test]
    fn variations_count_per_identifier() {
        let mut state = RunState::new();
        let first = state.derive_row(&row(Some("KL1234"), Some("KL1235")), &kl(), &settings());
        let second = state.derive_row(&row(Some("KL1234"), None), &kl(), &settings());
        assert_eq!(first.arrival.unwrap().variation, 1);
        assert_eq!(first.departure.unwrap().variation, 1);
        assert_eq!(second.arrival.unwrap().variation, 2);
        assert_eq!(
            state.variation_count(&extract_from_cell(Some("KL1235")).unwrap()),
            1
        );
    }

    #[test]
    fn five_digit_departure_is_skipped_and_not_linked() {
        let mut state = RunState::new();
        let legs = state.derive_row(&row(Some("KL1234"), Some("KL12345")), &kl(), &settings());
        assert!(legs.departure.is_none());
        assert_eq!(legs.skipped, 1);
        assert_eq!(legs.link, RowLink::None);
        assert_eq!(legs.arrival.unwrap().next_flight().to_string(), "KL1234");
    }

    #[test]
    fn five_digit_arrival_is_skipped() {
        let mut state = RunState::new();
        let legs = state.derive_row(&row(Some("KL12345"), Some("KL1235")), &kl(), &settings());
        assert!(legs.arrival.is_none());
        assert_eq!(legs.skipped, 1);
        assert_eq!(legs.departure.unwrap().identifier.to_string(), "KL1235");
        assert_eq!(
            state.variation_count(&extract_from_cell(Some("KL12345")).unwrap()),
            0
        );
    }

    #[test]
    fn wide_numbers_on_stay_sides_are_not_counted() {
        let mut state = RunState::new();
        let mut stay = row(Some("KL1234"), Some("KL12345"));
        stay.destination_station = Some("N/S".to_string());
        let legs = state.derive_row(&stay, &kl(), &settings());
        assert_eq!(legs.skipped, 0);
        assert_eq!(legs.link, RowLink::None);
    }

    #[test]
    fn huge_time_shift_does_not_panic() {
        let mut state = RunState::new();
        let shifted = LinkSettings {
            time_shift_hours: i64::MAX / 1000,
            ..settings()
        };
        let legs = state.derive_row(&row(Some("KL1234"), Some("KL1235")), &kl(), &shifted);
        assert!(legs.arrival.is_some());
        assert!(legs.departure.is_some());
    }

    #[test]
    fn rows_without_identifiers_yield_nothing() {
        let mut state = RunState::new();
        let legs = state.derive_row(&row(Some("N/S"), Some("---")), &kl(), &settings());
        assert!(legs.is_empty());
        assert_eq!(legs.into_legs().count(), 0);
    }
}
