//! Header, carrier, filler and trailer records.

use chrono::NaiveDate;

use ssim_model::{AirlineCode, format_schedule_date};

use crate::layout::{Align, FieldSpec, RECORD_LEN, RecordBuffer, tiles_record};
use crate::record::EncodedRecord;

/// Title of the dataset header record.
pub const HEADER_TITLE: &str = "1AIRLINE STANDARD SCHEDULE DATA SET";

/// Scope written on the trailer when more than one airline is present.
pub const MULTI_AIRLINE_SCOPE: &str = "MULTI";

/// Character of the zero filler records.
pub const FILLER_CHAR: char = '0';

const HEADER_LAYOUT: [FieldSpec<&str>; 2] = [
    FieldSpec::new("title", 0, 192, Align::Left),
    FieldSpec::new("serial", 192, 8, Align::Right),
];

const CARRIER_LAYOUT: [FieldSpec<&str>; 11] = [
    FieldSpec::new("record type", 0, 2, Align::Left),
    FieldSpec::new("airline", 2, 2, Align::Left),
    FieldSpec::new("blank", 4, 2, Align::Left),
    FieldSpec::new("season", 6, 4, Align::Left),
    FieldSpec::new("blank", 10, 4, Align::Left),
    FieldSpec::new("period start", 14, 7, Align::Left),
    FieldSpec::new("period end", 21, 7, Align::Left),
    FieldSpec::new("creation date", 28, 7, Align::Left),
    FieldSpec::new("creator", 35, 153, Align::Left),
    FieldSpec::new("format", 188, 4, Align::Left),
    FieldSpec::new("serial", 192, 8, Align::Right),
];

const TRAILER_LAYOUT: [FieldSpec<&str>; 4] = [
    FieldSpec::new("summary", 0, 187, Align::Left),
    FieldSpec::new("serial", 187, 6, Align::Right),
    FieldSpec::new("end code", 193, 1, Align::Left),
    FieldSpec::new("next serial", 194, 6, Align::Right),
];

const _: () = assert!(tiles_record(&HEADER_LAYOUT));
const _: () = assert!(tiles_record(&CARRIER_LAYOUT));
const _: () = assert!(tiles_record(&TRAILER_LAYOUT));

/// Dataset header (type 1) record.
pub fn header_record(serial: u32) -> EncodedRecord {
    let mut record = RecordBuffer::new();
    record
        .place(&HEADER_LAYOUT[0], HEADER_TITLE)
        .place(&HEADER_LAYOUT[1], &format!("{serial:08}"));
    EncodedRecord::new(record.into_line(), serial)
}

/// A record of zero characters; it carries no serial of its own.
pub fn filler_record(serial: u32) -> EncodedRecord {
    EncodedRecord::new(FILLER_CHAR.to_string().repeat(RECORD_LEN), serial)
}

/// Carrier (type 2) record opening an airline block.
///
/// The issue date fills the period and creation date fields.
pub fn carrier_record(
    airline: &AirlineCode,
    issue_date: NaiveDate,
    creator: &str,
    serial: u32,
) -> EncodedRecord {
    let issue = format_schedule_date(issue_date);
    let serial_text = format!("{serial:08}");
    let values: [&str; 11] = [
        "2U",
        airline.as_str(),
        "",
        "0008",
        "",
        &issue,
        &issue,
        &issue,
        creator,
        "EN08",
        &serial_text,
    ];
    let mut record = RecordBuffer::new();
    for (spec, value) in CARRIER_LAYOUT.iter().zip(values) {
        record.place(spec, value);
    }
    EncodedRecord::new(record.into_line(), serial)
}

/// Dataset trailer (type 5) record.
///
/// `scope` is the single airline code, or [`MULTI_AIRLINE_SCOPE`].
pub fn trailer_record(scope: &str, issue_date: NaiveDate, serial: u32) -> EncodedRecord {
    let summary = format!("5 {scope} {}", format_schedule_date(issue_date));
    let mut record = RecordBuffer::new();
    record
        .place(&TRAILER_LAYOUT[0], &summary)
        .place(&TRAILER_LAYOUT[1], &format!("{serial:06}"))
        .place(&TRAILER_LAYOUT[2], "E")
        .place(&TRAILER_LAYOUT[3], &format!("{:06}", serial.saturating_add(1)));
    EncodedRecord::new(record.into_line(), serial)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn issue() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 12, 1).unwrap()
    }

    #[test]
    fn header() {
        let record = header_record(1);
        let line = record.line();
        assert_eq!(line.len(), RECORD_LEN);
        assert!(line.starts_with(HEADER_TITLE));
        assert_eq!(line[HEADER_TITLE.len()..192].trim(), "");
        assert!(line.ends_with("00000001"));
    }

    #[test]
    fn filler() {
        assert_eq!(filler_record(2).line(), "0".repeat(RECORD_LEN));
    }

    #[test]
    fn carrier() {
        let airline = AirlineCode::new("KL").unwrap();
        let record = carrier_record(&airline, issue(), "Created by ops", 6);
        let line = record.line();
        assert_eq!(line.len(), RECORD_LEN);
        assert!(line.starts_with("2UKL  0008    01DEC2501DEC2501DEC25Created by ops "));
        assert_eq!(&line[188..], "EN0800000006");
    }

    #[test]
    fn trailer() {
        let record = trailer_record(MULTI_AIRLINE_SCOPE, issue(), 27);
        let line = record.line();
        assert_eq!(line.len(), RECORD_LEN);
        assert!(line.starts_with("5 MULTI 01DEC25 "));
        assert_eq!(&line[187..], "000027E000028");
    }
}
