//! Dataset assembly.
//!
//! A dataset is laid out as:
//!
//! 1. the header record and four filler records,
//! 2. per airline, ascending: a carrier record, four filler records and the
//!    airline's flight leg records,
//! 3. four filler records and the trailer record.
//!
//! Every line takes the next serial number, fillers included.

use std::io::Write;

use chrono::NaiveDate;
use tracing::{debug, info};

use ssim_model::{
    AirlineCode, AirlineSelection, AirlineSummary, ConversionOptions, ConversionSummary,
    Direction, FlightLegRow, Station,
};
use ssim_record::{
    EncodedRecord, LegEncoder, MULTI_AIRLINE_SCOPE, carrier_record, filler_record, header_record,
    trailer_record,
};
use ssim_transform::{LinkSettings, RunState, resolve_selection, rows_for_airline};

use crate::error::{OutputError, Result};
use crate::writer::SsimWriter;

/// Filler records after the header, after each carrier record and before
/// the trailer.
pub const FILLER_BLOCK_LEN: usize = 4;

/// An assembled SSIM dataset held in memory.
#[derive(Debug, Clone)]
pub struct SsimDataset {
    /// Single airline code, or `MULTI`.
    pub scope: String,
    pub issue_date: NaiveDate,
    pub hub: Station,
    pub summary: ConversionSummary,
    content: String,
}

impl SsimDataset {
    /// The dataset text, one `\n`-terminated record per line.
    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.content.lines()
    }

    /// `{SCOPE}_{YYYYMMDD}_{HUB}.ssim`
    pub fn default_file_name(&self) -> String {
        default_file_name(&self.scope, self.issue_date, &self.hub)
    }
}

/// File name for a dataset of `scope` issued on `issue_date`.
pub fn default_file_name(scope: &str, issue_date: NaiveDate, hub: &Station) -> String {
    format!("{scope}_{}_{hub}.ssim", issue_date.format("%Y%m%d"))
}

/// Trailer and file name scope of a set of airlines.
pub fn dataset_scope(airlines: &[AirlineCode]) -> String {
    match airlines {
        [single] => single.as_str().to_string(),
        _ => MULTI_AIRLINE_SCOPE.to_string(),
    }
}

fn describe_selection(selection: &AirlineSelection) -> String {
    match selection.requested() {
        None => "any airline".to_string(),
        Some(codes) => codes
            .iter()
            .map(AirlineCode::as_str)
            .collect::<Vec<_>>()
            .join(", "),
    }
}

/// What [`assemble`] produced besides the lines themselves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assembly {
    pub summary: ConversionSummary,
    /// Single airline code, or `MULTI`.
    pub scope: String,
    pub issue_date: NaiveDate,
}

/// Serial counter and output of one assembly run.
struct DatasetRun<'w, W: Write> {
    writer: &'w mut SsimWriter<W>,
    serial: u32,
}

impl<W: Write> DatasetRun<'_, W> {
    fn emit(&mut self, build: impl FnOnce(u32) -> EncodedRecord) -> Result<()> {
        self.serial += 1;
        self.writer.write_record(&build(self.serial))
    }

    fn emit_fillers(&mut self) -> Result<()> {
        for _ in 0..FILLER_BLOCK_LEN {
            self.emit(filler_record)?;
        }
        Ok(())
    }
}

/// Assembles the dataset for `rows` into `writer`.
///
/// Fails with [`OutputError::NoMatchingRecords`] before anything is written
/// when no selected airline appears in the rows.
pub fn assemble<W: Write>(
    rows: &[FlightLegRow],
    options: &ConversionOptions,
    writer: &mut SsimWriter<W>,
) -> Result<Assembly> {
    let resolved = resolve_selection(&options.selection, rows);
    if resolved.is_empty() {
        return Err(OutputError::NoMatchingRecords {
            selection: describe_selection(&options.selection),
        });
    }

    let issue_date = options.issue_date();
    let settings = LinkSettings {
        issue_date,
        time_shift_hours: options.time_shift_hours,
    };
    let encoder = LegEncoder::new(options.hub.clone());
    let scope = dataset_scope(&resolved.airlines);
    let mut state = RunState::new();
    let mut summary = ConversionSummary {
        missing_airlines: resolved.missing.clone(),
        ..ConversionSummary::default()
    };
    let mut run = DatasetRun { writer, serial: 0 };

    run.emit(header_record)?;
    run.emit_fillers()?;

    for airline in &resolved.airlines {
        run.emit(|serial| carrier_record(airline, issue_date, &options.creator, serial))?;
        run.emit_fillers()?;

        let mut airline_summary = AirlineSummary::new(airline.clone());
        for row in rows_for_airline(rows, airline) {
            airline_summary.rows += 1;
            let legs = state.derive_row(row, airline, &settings);
            airline_summary.skipped += legs.skipped;
            for leg in legs.into_legs() {
                match leg.direction {
                    Direction::Arrival => airline_summary.arrivals += 1,
                    Direction::Departure => airline_summary.departures += 1,
                }
                run.emit(|serial| encoder.encode(&leg, serial))?;
            }
        }
        debug!(
            airline = %airline,
            rows = airline_summary.rows,
            arrivals = airline_summary.arrivals,
            departures = airline_summary.departures,
            skipped = airline_summary.skipped,
            "airline block assembled"
        );
        summary.airlines.push(airline_summary);
    }

    run.emit_fillers()?;
    run.emit(|serial| trailer_record(&scope, issue_date, serial))?;

    summary.total_lines = run.writer.lines();
    info!(
        scope = %scope,
        airlines = summary.airlines.len(),
        legs = summary.total_legs(),
        skipped = summary.total_skipped(),
        lines = summary.total_lines,
        "SSIM dataset assembled"
    );
    Ok(Assembly {
        summary,
        scope,
        issue_date,
    })
}

/// Converts `rows` into an in-memory dataset.
pub fn convert(rows: &[FlightLegRow], options: &ConversionOptions) -> Result<SsimDataset> {
    let mut writer = SsimWriter::new(Vec::new());
    let assembly = assemble(rows, options, &mut writer)?;
    let bytes = writer.finish()?;
    Ok(SsimDataset {
        scope: assembly.scope,
        issue_date: assembly.issue_date,
        hub: options.hub.code.clone(),
        summary: assembly.summary,
        content: String::from_utf8_lossy(&bytes).into_owned(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scope_of_airlines() {
        let kl = AirlineCode::new("KL").unwrap();
        let af = AirlineCode::new("AF").unwrap();
        assert_eq!(dataset_scope(std::slice::from_ref(&kl)), "KL");
        assert_eq!(dataset_scope(&[af, kl]), "MULTI");
    }

    #[test]
    fn file_name_uses_scope_date_and_hub() {
        let date = NaiveDate::from_ymd_opt(2025, 12, 1).unwrap();
        let hub = Station::new("AMS").unwrap();
        assert_eq!(default_file_name("KL", date, &hub), "KL_20251201_AMS.ssim");
        assert_eq!(
            default_file_name(MULTI_AIRLINE_SCOPE, date, &hub),
            "MULTI_20251201_AMS.ssim"
        );
    }
}
