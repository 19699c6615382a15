use std::collections::BTreeMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ByteRecord, ReaderBuilder, StringRecord};
use tracing::{debug, warn};

use ssim_model::{FlightLegRow, non_blank};

use crate::columns::ScheduleColumn;
use crate::error::{IngestError, Result};

/// A schedule table with its recognized columns.
#[derive(Debug, Clone, Default)]
pub struct ScheduleTable {
    /// Normalized header cells in source order.
    pub headers: Vec<String>,
    /// Recognized columns and their source index.
    pub columns: BTreeMap<ScheduleColumn, usize>,
    /// Headers that did not match any known column.
    pub ignored_headers: Vec<String>,
    pub rows: Vec<FlightLegRow>,
}

impl ScheduleTable {
    pub fn has_column(&self, column: ScheduleColumn) -> bool {
        self.columns.contains_key(&column)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

fn normalize_header(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('\u{feff}');
    let mut parts = trimmed.split_whitespace();
    let mut normalized = String::new();
    if let Some(first) = parts.next() {
        normalized.push_str(first);
        for part in parts {
            normalized.push(' ');
            normalized.push_str(part);
        }
    }
    normalized
}

/// Reads a schedule table from a CSV file.
///
/// # Errors
///
/// Returns an error if the file cannot be opened or parsed, is empty, or
/// has neither an arrival nor a departure flight column.
pub fn read_schedule_csv(path: &Path) -> Result<ScheduleTable> {
    if !path.is_file() {
        return Err(IngestError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    let file = File::open(path).map_err(|source| IngestError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    read_schedule(file, &path.display().to_string())
}

/// Reads a schedule table from any CSV source.
///
/// The first row that is not entirely blank is the header row. Data rows
/// that are entirely blank are skipped; short rows are padded with blanks.
/// Cells that are not valid UTF-8 are decoded lossily, so one damaged row
/// never stops the rest of the table from loading.
pub fn read_schedule<R: Read>(reader: R, source_name: &str) -> Result<ScheduleTable> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);
    let csv_error = |source| IngestError::CsvParse {
        source_name: source_name.to_string(),
        source,
    };

    let mut table = ScheduleTable::default();
    let mut header_seen = false;
    let mut row_number = 0usize;
    for record in reader.byte_records() {
        let record = decode_record(&record.map_err(csv_error)?);
        if record.iter().all(|value| value.trim().is_empty()) {
            continue;
        }
        if !header_seen {
            header_seen = true;
            recognize_headers(&mut table, record.iter());
            if !table.has_column(ScheduleColumn::ArrivalFlight)
                && !table.has_column(ScheduleColumn::DepartureFlight)
            {
                return Err(IngestError::MissingFlightColumns {
                    source_name: source_name.to_string(),
                });
            }
            continue;
        }
        row_number += 1;
        table
            .rows
            .push(build_row(&table.columns, &record, row_number));
    }
    if !header_seen {
        return Err(IngestError::EmptySchedule {
            source_name: source_name.to_string(),
        });
    }
    debug!(
        source = source_name,
        rows = table.rows.len(),
        columns = table.columns.len(),
        ignored = table.ignored_headers.len(),
        "schedule table loaded"
    );
    Ok(table)
}

/// Decodes a raw CSV record, replacing invalid UTF-8 sequences.
fn decode_record(record: &ByteRecord) -> StringRecord {
    let cells: Vec<String> = record
        .iter()
        .map(|cell| String::from_utf8_lossy(cell).into_owned())
        .collect();
    if record.iter().any(|cell| std::str::from_utf8(cell).is_err()) {
        let line = record.position().map(csv::Position::line);
        warn!(line = ?line, "invalid UTF-8 in schedule row, replaced");
    }
    StringRecord::from(cells)
}

fn recognize_headers<'a>(table: &mut ScheduleTable, cells: impl Iterator<Item = &'a str>) {
    for (idx, raw) in cells.enumerate() {
        let header = normalize_header(raw);
        match ScheduleColumn::from_header(&header) {
            Some(column) => {
                if let Some(&first) = table.columns.get(&column) {
                    warn!(
                        column = %column,
                        header = %header,
                        first_index = first,
                        "duplicate schedule column ignored"
                    );
                } else {
                    table.columns.insert(column, idx);
                }
            }
            None if header.is_empty() => {}
            None => table.ignored_headers.push(header.clone()),
        }
        table.headers.push(header);
    }
}

fn build_row(
    columns: &BTreeMap<ScheduleColumn, usize>,
    record: &StringRecord,
    row_number: usize,
) -> FlightLegRow {
    let cell = |column: ScheduleColumn| -> Option<String> {
        columns
            .get(&column)
            .and_then(|&idx| record.get(idx))
            .and_then(non_blank)
    };
    let mut row = FlightLegRow::new(row_number);
    row.arrival_flight = cell(ScheduleColumn::ArrivalFlight);
    row.departure_flight = cell(ScheduleColumn::DepartureFlight);
    row.arrival_time = cell(ScheduleColumn::ArrivalTime);
    row.departure_time = cell(ScheduleColumn::DepartureTime);
    row.origin_station = cell(ScheduleColumn::OriginStation);
    row.destination_station = cell(ScheduleColumn::DestinationStation);
    row.aircraft_type = cell(ScheduleColumn::AircraftType);
    row.service_type = cell(ScheduleColumn::ServiceType);
    row.valid_from = cell(ScheduleColumn::ValidFrom);
    row.valid_till = cell(ScheduleColumn::ValidTill);
    for (idx, slot) in row.days.iter_mut().enumerate() {
        *slot = cell(ScheduleColumn::Day(idx as u8 + 1));
    }
    row
}
