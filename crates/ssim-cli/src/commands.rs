use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use tracing::{debug, info, info_span};

use ssim_ingest::read_schedule_csv;
use ssim_model::{
    AirlineCode, AirlineSelection, ConversionOptions, ConversionSummary, HubStation, Station,
};
use ssim_output::{convert, write_dataset, write_dataset_to_dir};
use ssim_transform::airline_row_counts;

use crate::cli::{AirlinesArgs, ConvertArgs};

/// Result of a `convert` run.
#[derive(Debug, Clone)]
pub struct ConvertOutcome {
    pub input: PathBuf,
    /// Single airline code, or `MULTI`.
    pub scope: String,
    pub issue_date: NaiveDate,
    pub summary: ConversionSummary,
    pub dry_run: bool,
}

/// An airline found in a schedule table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AirlineRows {
    pub airline: AirlineCode,
    pub rows: usize,
}

/// Builds conversion options from the command line.
///
/// The issue date defaults to local today here and nowhere else.
pub fn conversion_options(args: &ConvertArgs) -> Result<ConversionOptions> {
    let hub_code = Station::new(args.hub.as_str()).context("parse --hub")?;
    let selection = if args.all {
        AirlineSelection::All
    } else {
        AirlineSelection::from_codes(&args.airlines).context("parse --airline")?
    };
    let issue_date = args
        .issue_date
        .unwrap_or_else(|| Local::now().date_naive());
    Ok(ConversionOptions::new()
        .with_hub(HubStation::new(hub_code, args.hub_offset))
        .with_selection(selection)
        .with_issue_date(issue_date)
        .with_creator(args.creator.as_str())
        .with_time_shift_hours(args.time_shift_hours))
}

pub fn run_convert(args: &ConvertArgs) -> Result<ConvertOutcome> {
    let span = info_span!("convert", input = %args.input.display());
    let _guard = span.enter();
    let start = Instant::now();

    let options = conversion_options(args)?;
    let table = read_schedule_csv(&args.input)
        .with_context(|| format!("read schedule {}", args.input.display()))?;
    info!(rows = table.len(), "schedule loaded");

    let dataset = convert(&table.rows, &options).context("convert schedule")?;
    let mut summary = dataset.summary.clone();

    if args.dry_run {
        info!(lines = summary.total_lines, "dry run, nothing written");
    } else {
        let path = match &args.output {
            Some(path) => {
                write_dataset(&dataset, path)
                    .with_context(|| format!("write {}", path.display()))?;
                path.clone()
            }
            None => {
                let dir = args.output_dir.as_deref().unwrap_or(Path::new("."));
                write_dataset_to_dir(&dataset, dir)
                    .with_context(|| format!("write dataset to {}", dir.display()))?
            }
        };
        summary.output = Some(path);
    }

    debug!(elapsed_ms = start.elapsed().as_millis(), "convert finished");
    Ok(ConvertOutcome {
        input: args.input.clone(),
        scope: dataset.scope,
        issue_date: dataset.issue_date,
        summary,
        dry_run: args.dry_run,
    })
}

pub fn run_airlines(args: &AirlinesArgs) -> Result<Vec<AirlineRows>> {
    let table = read_schedule_csv(&args.input)
        .with_context(|| format!("read schedule {}", args.input.display()))?;
    let airlines: Vec<AirlineRows> = airline_row_counts(&table.rows)
        .into_iter()
        .map(|(airline, rows)| AirlineRows { airline, rows })
        .collect();
    info!(
        rows = table.len(),
        airlines = airlines.len(),
        "airlines discovered"
    );
    Ok(airlines)
}
