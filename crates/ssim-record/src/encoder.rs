//! Flight leg (type 3) record encoding.

use ssim_model::{DerivedLeg, Direction, HubStation, UtcOffset};

use crate::layout::{LegField, RecordBuffer};
use crate::record::EncodedRecord;

/// Record type marker of a flight leg record.
pub const LEG_RECORD_TYPE: &str = "3";

/// Leg sequence number; every leg is a single-leg itinerary.
pub const LEG_SEQUENCE: &str = "01";

/// Encodes derived legs for one hub.
///
/// The hub carries its configured UTC offset; every counterpart station is
/// written at `+0000`.
#[derive(Debug, Clone)]
pub struct LegEncoder {
    hub: HubStation,
}

impl LegEncoder {
    pub fn new(hub: HubStation) -> Self {
        Self { hub }
    }

    pub fn hub(&self) -> &HubStation {
        &self.hub
    }

    /// Encodes one leg. Never fails; over-wide values are cut to their field.
    ///
    /// Identifiers are expected to fit (see [`Identifier::fits_record`]);
    /// the linker drops legs whose flight number would be cut.
    ///
    /// [`Identifier::fits_record`]: ssim_model::Identifier::fits_record
    pub fn encode(&self, leg: &DerivedLeg, serial: u32) -> EncodedRecord {
        let (departure_station, departure_time, arrival_station, arrival_time) =
            leg.endpoints(&self.hub.code);
        let (departure_offset, arrival_offset) = match leg.direction {
            Direction::Arrival => (UtcOffset::UTC, self.hub.utc_offset),
            Direction::Departure => (self.hub.utc_offset, UtcOffset::UTC),
        };
        let next = leg.next_flight();
        let departure_time = departure_time.hhmm();
        let arrival_time = arrival_time.hhmm();

        let mut record = RecordBuffer::new();
        record
            .place(LegField::RecordType.spec(), LEG_RECORD_TYPE)
            .place(LegField::Airline.spec(), leg.identifier.airline.as_str())
            .place(LegField::FlightNumber.spec(), leg.identifier.number.as_str())
            .place(
                LegField::ItineraryVariation.spec(),
                &format!("{:02}", leg.variation),
            )
            .place(LegField::LegSequence.spec(), LEG_SEQUENCE)
            .place(
                LegField::ServiceType.spec(),
                leg.service_type.encode_utf8(&mut [0; 4]),
            )
            .place(LegField::PeriodStart.spec(), &leg.period.start_text())
            .place(LegField::PeriodEnd.spec(), &leg.period.end_text())
            .place(LegField::DaysOfOperation.spec(), &leg.days.render())
            .place(LegField::DepartureStation.spec(), departure_station.as_str())
            .place(LegField::DepartureTime.spec(), &departure_time)
            .place(LegField::DepartureBlockTime.spec(), &departure_time)
            .place(
                LegField::DepartureUtcOffset.spec(),
                &departure_offset.to_string(),
            )
            .place(LegField::ArrivalStation.spec(), arrival_station.as_str())
            .place(LegField::ArrivalTime.spec(), &arrival_time)
            .place(LegField::ArrivalBlockTime.spec(), &arrival_time)
            .place(LegField::ArrivalUtcOffset.spec(), &arrival_offset.to_string())
            .place(LegField::AircraftType.spec(), &leg.aircraft_type)
            .place(LegField::NextAirline.spec(), next.airline.as_str())
            .place(LegField::NextAirlineRepeat.spec(), next.airline.as_str())
            .place(LegField::NextFlightNumber.spec(), next.number.as_str())
            .place(LegField::Serial.spec(), &format!("{serial:08}"));
        EncodedRecord::new(record.into_line(), serial)
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use ssim_model::{
        AirlineCode, ClockTime, DayMask, FlightNumber, Identifier, Station, ValidityPeriod,
    };

    use super::*;
    use crate::layout::RECORD_LEN;

    fn identifier(airline: &str, number: &str) -> Identifier {
        Identifier::new(
            AirlineCode::new(airline).unwrap(),
            FlightNumber::new(number).unwrap(),
        )
    }

    fn departure() -> DerivedLeg {
        DerivedLeg {
            identifier: identifier("KL", "1235"),
            direction: Direction::Departure,
            counterpart: Station::new("CDG").unwrap(),
            hub_time: ClockTime::from_hm(9, 40).unwrap(),
            counterpart_time: ClockTime::from_hm(11, 40).unwrap(),
            aircraft_type: "73H".to_string(),
            service_type: 'C',
            period: ValidityPeriod::new(
                NaiveDate::from_ymd_opt(2025, 10, 26).unwrap(),
                NaiveDate::from_ymd_opt(2026, 3, 28).unwrap(),
            ),
            days: DayMask::DAILY,
            variation: 3,
            link: None,
        }
    }

    #[test]
    fn departure_leaves_from_the_hub() {
        let line = LegEncoder::new(HubStation::default()).encode(&departure(), 42);
        let line = line.line();
        assert_eq!(line.len(), RECORD_LEN);
        assert_eq!(&line[0..13], "3 KL 12350301");
        assert_eq!(&line[13..14], "C");
        assert_eq!(&line[36..52], "AMS09400940+0100");
        assert_eq!(&line[54..70], "CDG11401140+0000");
        assert_eq!(&line[128..145], "KL       KL  1235");
        assert_eq!(&line[192..], "00000042");
    }
}
