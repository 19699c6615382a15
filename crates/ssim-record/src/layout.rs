//! Record layouts and field placement.
//!
//! Every SSIM line is [`RECORD_LEN`] characters. A layout is a table of
//! fields with a fixed offset, width and alignment; values are placed into
//! a space-filled buffer one field at a time.
//!
//! # Flight leg record
//!
//! | Offset  | Width | Field                          |
//! |---------|-------|--------------------------------|
//! | 0-2     | 2     | record type (`3`)              |
//! | 2-5     | 3     | airline code                   |
//! | 5-9     | 4     | flight number                  |
//! | 9-11    | 2     | itinerary variation            |
//! | 11-13   | 2     | leg sequence (`01`)            |
//! | 13-14   | 1     | service type                   |
//! | 14-28   | 7+7   | period start and end           |
//! | 28-35   | 7     | days of operation              |
//! | 36-54   |       | departure station, times, UTC offset, terminal |
//! | 54-72   |       | arrival station, times, UTC offset, terminal   |
//! | 72-75   | 3     | aircraft type                  |
//! | 128-145 |       | next flight airline and number |
//! | 192-200 | 8     | serial number                  |

use std::fmt;

use tracing::warn;

/// Width of every SSIM line.
pub const RECORD_LEN: usize = 200;

/// Placeholder for characters that cannot appear in a record.
pub const UNPRINTABLE_PLACEHOLDER: u8 = b'?';

/// How a value shorter than its field is positioned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Right,
}

/// One field of a record layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec<F> {
    pub field: F,
    pub offset: usize,
    pub width: usize,
    pub align: Align,
}

impl<F> FieldSpec<F> {
    pub const fn new(field: F, offset: usize, width: usize, align: Align) -> Self {
        Self {
            field,
            offset,
            width,
            align,
        }
    }

    pub const fn end(&self) -> usize {
        self.offset + self.width
    }
}

/// Whether the fields tile the record from offset 0 to [`RECORD_LEN`]
/// without gaps or overlaps.
pub const fn tiles_record<F>(layout: &[FieldSpec<F>]) -> bool {
    let mut next = 0;
    let mut idx = 0;
    while idx < layout.len() {
        if layout[idx].offset != next || layout[idx].width == 0 {
            return false;
        }
        next += layout[idx].width;
        idx += 1;
    }
    next == RECORD_LEN
}

/// Fields of a flight leg (type 3) record, in layout order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LegField {
    RecordType,
    Airline,
    FlightNumber,
    ItineraryVariation,
    LegSequence,
    ServiceType,
    PeriodStart,
    PeriodEnd,
    DaysOfOperation,
    FrequencyRate,
    DepartureStation,
    DepartureTime,
    DepartureBlockTime,
    DepartureUtcOffset,
    DepartureTerminal,
    ArrivalStation,
    ArrivalTime,
    ArrivalBlockTime,
    ArrivalUtcOffset,
    ArrivalTerminal,
    AircraftType,
    OnwardReserved,
    NextAirline,
    NextAirlineGap,
    NextAirlineRepeat,
    NextNumberGap,
    NextFlightNumber,
    TrailingReserved,
    Serial,
}

impl fmt::Display for LegField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

const fn leg(field: LegField, offset: usize, width: usize) -> FieldSpec<LegField> {
    FieldSpec::new(field, offset, width, Align::Left)
}

/// Flight leg record layout, indexed by [`LegField`].
pub const LEG_LAYOUT: [FieldSpec<LegField>; 29] = [
    leg(LegField::RecordType, 0, 2),
    leg(LegField::Airline, 2, 3),
    leg(LegField::FlightNumber, 5, 4),
    leg(LegField::ItineraryVariation, 9, 2),
    leg(LegField::LegSequence, 11, 2),
    leg(LegField::ServiceType, 13, 1),
    leg(LegField::PeriodStart, 14, 7),
    leg(LegField::PeriodEnd, 21, 7),
    leg(LegField::DaysOfOperation, 28, 7),
    leg(LegField::FrequencyRate, 35, 1),
    leg(LegField::DepartureStation, 36, 3),
    leg(LegField::DepartureTime, 39, 4),
    leg(LegField::DepartureBlockTime, 43, 4),
    leg(LegField::DepartureUtcOffset, 47, 5),
    leg(LegField::DepartureTerminal, 52, 2),
    leg(LegField::ArrivalStation, 54, 3),
    leg(LegField::ArrivalTime, 57, 4),
    leg(LegField::ArrivalBlockTime, 61, 4),
    leg(LegField::ArrivalUtcOffset, 65, 5),
    leg(LegField::ArrivalTerminal, 70, 2),
    leg(LegField::AircraftType, 72, 3),
    leg(LegField::OnwardReserved, 75, 53),
    leg(LegField::NextAirline, 128, 2),
    leg(LegField::NextAirlineGap, 130, 7),
    leg(LegField::NextAirlineRepeat, 137, 2),
    leg(LegField::NextNumberGap, 139, 2),
    FieldSpec::new(LegField::NextFlightNumber, 141, 4, Align::Right),
    leg(LegField::TrailingReserved, 145, 47),
    FieldSpec::new(LegField::Serial, 192, 8, Align::Right),
];

const fn leg_layout_is_indexed() -> bool {
    let mut idx = 0;
    while idx < LEG_LAYOUT.len() {
        if LEG_LAYOUT[idx].field as usize != idx {
            return false;
        }
        idx += 1;
    }
    true
}

const _: () = assert!(tiles_record(&LEG_LAYOUT));
const _: () = assert!(leg_layout_is_indexed());

static LEG_FIELDS: [FieldSpec<LegField>; 29] = LEG_LAYOUT;

impl LegField {
    pub fn spec(self) -> &'static FieldSpec<LegField> {
        &LEG_FIELDS[self as usize]
    }
}

/// Writes `value` into its field, space-padded per the field alignment.
///
/// Values wider than the field are cut to the field width. Characters
/// outside printable ASCII are replaced so that byte and character offsets
/// always agree.
pub fn place_field<F: fmt::Debug>(buf: &mut [u8; RECORD_LEN], spec: &FieldSpec<F>, value: &str) {
    let bytes: Vec<u8> = value.chars().map(record_byte).collect();
    if bytes.len() > spec.width {
        warn!(
            field = ?spec.field,
            value,
            width = spec.width,
            "value wider than its field, truncated"
        );
    }
    let len = bytes.len().min(spec.width);
    let start = match spec.align {
        Align::Left => spec.offset,
        Align::Right => spec.end() - len,
    };
    buf[spec.offset..spec.end()].fill(b' ');
    buf[start..start + len].copy_from_slice(&bytes[..len]);
}

fn record_byte(ch: char) -> u8 {
    if ch.is_ascii() && !ch.is_ascii_control() {
        ch as u8
    } else {
        UNPRINTABLE_PLACEHOLDER
    }
}

/// A record under construction.
#[derive(Debug, Clone)]
pub struct RecordBuffer {
    buf: [u8; RECORD_LEN],
}

impl Default for RecordBuffer {
    fn default() -> Self {
        Self::filled(b' ')
    }
}

impl RecordBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn filled(byte: u8) -> Self {
        Self {
            buf: [byte; RECORD_LEN],
        }
    }

    pub fn place<F: fmt::Debug>(&mut self, spec: &FieldSpec<F>, value: &str) -> &mut Self {
        place_field(&mut self.buf, spec, value);
        self
    }

    pub fn into_line(self) -> String {
        self.buf.iter().map(|&byte| byte as char).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leg_layout_covers_the_record() {
        let total: usize = LEG_LAYOUT.iter().map(|spec| spec.width).sum();
        assert_eq!(total, RECORD_LEN);
        assert!(tiles_record(&LEG_LAYOUT));
        assert_eq!(LegField::Serial.spec().offset, 192);
        assert_eq!(LegField::NextFlightNumber.spec().end(), 145);
    }

    #[test]
    fn gaps_are_detected() {
        let layout = [
            FieldSpec::new("a", 0, 10, Align::Left),
            FieldSpec::new("b", 11, 189, Align::Left),
        ];
        assert!(!tiles_record(&layout));
    }

    #[test]
    fn places_with_alignment() {
        let mut record = RecordBuffer::new();
        record
            .place(&FieldSpec::new("left", 0, 4, Align::Left), "AB")
            .place(&FieldSpec::new("right", 4, 4, Align::Right), "12");
        let line = record.into_line();
        assert_eq!(&line[..8], "AB    12");
        assert_eq!(line.len(), RECORD_LEN);
    }

    #[test]
    fn truncates_wide_values() {
        let mut record = RecordBuffer::new();
        record.place(&FieldSpec::new("num", 5, 4, Align::Left), "12345");
        let line = record.into_line();
        assert_eq!(&line[5..9], "1234");
        assert_eq!(&line[9..10], " ");
    }

    #[test]
    fn replaces_non_ascii() {
        let mut record = RecordBuffer::new();
        record.place(&FieldSpec::new("station", 0, 3, Align::Left), "MÜN");
        assert_eq!(&record.into_line()[..3], "M?N");
    }
}
