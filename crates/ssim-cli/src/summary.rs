use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use serde_json::{Value, json};

use ssim_model::AirlineCode;

use crate::commands::{AirlineRows, ConvertOutcome};

pub fn print_summary(outcome: &ConvertOutcome) {
    println!("Input: {}", outcome.input.display());
    println!("Scope: {}", outcome.scope);
    println!("Issue date: {}", outcome.issue_date);
    match &outcome.summary.output {
        Some(path) => println!("Output: {}", path.display()),
        None if outcome.dry_run => println!("Output: (dry run, not written)"),
        None => {}
    }
    println!("{}", conversion_table(outcome));
    println!("Lines: {}", outcome.summary.total_lines);
    if !outcome.summary.missing_airlines.is_empty() {
        eprintln!(
            "Not found in input: {}",
            join_codes(&outcome.summary.missing_airlines)
        );
    }
}

pub fn conversion_table(outcome: &ConvertOutcome) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Airline"),
        header_cell("Rows"),
        header_cell("Arrivals"),
        header_cell("Departures"),
        header_cell("Legs"),
        header_cell("Skipped"),
    ]);
    apply_summary_table_style(&mut table);
    for index in 1..=5 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    let summary = &outcome.summary;
    let mut total_rows = 0usize;
    let mut total_arrivals = 0usize;
    let mut total_departures = 0usize;
    for airline in &summary.airlines {
        total_rows += airline.rows;
        total_arrivals += airline.arrivals;
        total_departures += airline.departures;
        table.add_row(vec![
            airline_cell(&airline.airline),
            Cell::new(airline.rows),
            count_cell(airline.arrivals),
            count_cell(airline.departures),
            Cell::new(airline.legs()).add_attribute(Attribute::Bold),
            skipped_cell(airline.skipped),
        ]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(total_rows).add_attribute(Attribute::Bold),
        count_cell(total_arrivals).add_attribute(Attribute::Bold),
        count_cell(total_departures).add_attribute(Attribute::Bold),
        Cell::new(summary.total_legs()).add_attribute(Attribute::Bold),
        skipped_cell(summary.total_skipped()).add_attribute(Attribute::Bold),
    ]);
    table
}

pub fn conversion_json(outcome: &ConvertOutcome) -> Value {
    json!({
        "input": outcome.input,
        "scope": outcome.scope,
        "issue_date": outcome.issue_date,
        "dry_run": outcome.dry_run,
        "total_legs": outcome.summary.total_legs(),
        "total_skipped": outcome.summary.total_skipped(),
        "summary": outcome.summary,
    })
}

pub fn print_airlines(airlines: &[AirlineRows]) {
    println!("{}", airlines_table(airlines));
}

pub fn airlines_table(airlines: &[AirlineRows]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Airline"), header_cell("Rows")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for entry in airlines {
        table.add_row(vec![airline_cell(&entry.airline), Cell::new(entry.rows)]);
    }
    table
}

pub fn airlines_json(airlines: &[AirlineRows]) -> Value {
    Value::Array(
        airlines
            .iter()
            .map(|entry| json!({ "airline": entry.airline, "rows": entry.rows }))
            .collect(),
    )
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn airline_cell(code: &AirlineCode) -> Cell {
    Cell::new(code)
        .fg(Color::Blue)
        .add_attribute(Attribute::Bold)
}

fn count_cell(count: usize) -> Cell {
    if count > 0 {
        Cell::new(count)
    } else {
        dim_cell(count)
    }
}

fn skipped_cell(count: usize) -> Cell {
    if count > 0 {
        Cell::new(count).fg(Color::Yellow)
    } else {
        dim_cell(count)
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}

fn join_codes(codes: &[AirlineCode]) -> String {
    codes
        .iter()
        .map(AirlineCode::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use chrono::NaiveDate;
    use ssim_model::{AirlineSummary, ConversionSummary};

    use super::*;

    fn code(value: &str) -> AirlineCode {
        AirlineCode::new(value).unwrap()
    }

    fn outcome() -> ConvertOutcome {
        let mut kl = AirlineSummary::new(code("KL"));
        kl.rows = 3;
        kl.arrivals = 2;
        kl.departures = 3;
        kl.skipped = 1;
        ConvertOutcome {
            input: PathBuf::from("schedule.csv"),
            scope: "KL".to_string(),
            issue_date: NaiveDate::from_ymd_opt(2025, 12, 1).unwrap(),
            summary: ConversionSummary {
                airlines: vec![kl],
                missing_airlines: vec![code("LH")],
                total_lines: 19,
                output: None,
            },
            dry_run: true,
        }
    }

    #[test]
    fn table_has_a_row_per_airline_and_a_total() {
        let table = conversion_table(&outcome());
        assert_eq!(table.row_iter().count(), 2);
        let rendered = table.to_string();
        assert!(rendered.contains("KL"));
        assert!(rendered.contains("TOTAL"));
    }

    #[test]
    fn json_carries_counts_and_missing_airlines() {
        let value = conversion_json(&outcome());
        assert_eq!(value["scope"], "KL");
        assert_eq!(value["issue_date"], "2025-12-01");
        assert_eq!(value["total_legs"], 5);
        assert_eq!(value["total_skipped"], 1);
        assert_eq!(value["dry_run"], true);
        assert_eq!(value["summary"]["missing_airlines"][0], "LH");
        assert_eq!(value["summary"]["airlines"][0]["arrivals"], 2);
        assert!(value["summary"]["output"].is_null());
    }

    #[test]
    fn airlines_json_lists_codes_with_counts() {
        let airlines = vec![
            AirlineRows {
                airline: code("EK"),
                rows: 1,
            },
            AirlineRows {
                airline: code("KL"),
                rows: 4,
            },
        ];
        let value = airlines_json(&airlines);
        assert_eq!(value[0]["airline"], "EK");
        assert_eq!(value[1]["rows"], 4);
        assert_eq!(airlines_table(&airlines).row_iter().count(), 2);
    }
}
