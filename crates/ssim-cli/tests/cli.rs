//! Command-line parsing and command runs against a small schedule.

use std::fs;
use std::path::Path;

use chrono::NaiveDate;
use clap::Parser;
use tempfile::tempdir;

use ssim_cli::cli::{Cli, Command, ConvertArgs};
use ssim_cli::commands::{conversion_options, run_airlines, run_convert};
use ssim_model::{AirlineCode, AirlineSelection};

const SCHEDULE: &str = "\
A.FLT,STA,ORIG,D.FLT,STD,DEST,ATY,FLT.TYPE,FROM,TILL,OP.D.1,OP.D.2,OP.D.3,OP.D.4,OP.D.5,OP.D.6,OP/D/7
KL1001,07:00,LHR,KL1002,08:00,LHR,73H,J,2025-10-26,2026-03-28,1,,,,,,
EK0147,08:05,DXB,EK0148,N/S,N/S,388,J/C,2025-10-26,2026-03-28,,,,,,,
N/S,,N/S,EK0148,09:50,DXB,388,J,2025-10-27,2026-03-28,,,,,,,
KL1003,22:30,BCN,,,,E90,J,,,1,1,1,1,1,1,1
";

fn write_schedule(dir: &Path) -> String {
    let path = dir.join("schedule.csv");
    fs::write(&path, SCHEDULE).unwrap();
    path.display().to_string()
}

fn convert_args(argv: &[&str]) -> ConvertArgs {
    let cli = Cli::try_parse_from(argv.iter().copied()).unwrap();
    match cli.command {
        Command::Convert(args) => args,
        Command::Airlines(_) => panic!("expected convert"),
    }
}

#[test]
fn convert_defaults() {
    let args = convert_args(&["ssim", "convert", "schedule.csv"]);
    assert!(args.airlines.is_empty());
    assert!(!args.all);
    assert!(!args.dry_run);
    assert_eq!(args.hub, "AMS");
    assert_eq!(args.hub_offset.to_string(), "+0100");
    assert_eq!(args.time_shift_hours, 2);

    let options = conversion_options(&args).unwrap();
    assert_eq!(options.selection, AirlineSelection::All);
    assert!(options.issue_date.is_some());
}

#[test]
fn repeated_airline_flags_build_a_list() {
    let args = convert_args(&[
        "ssim",
        "convert",
        "schedule.csv",
        "--airline",
        "kl",
        "-a",
        "EK",
        "--hub",
        "FRA",
        "--hub-offset",
        "-0300",
        "--issue-date",
        "2025-12-01",
    ]);
    let options = conversion_options(&args).unwrap();
    assert_eq!(
        options.selection.requested().unwrap(),
        vec![
            AirlineCode::new("KL").unwrap(),
            AirlineCode::new("EK").unwrap()
        ]
    );
    assert_eq!(options.hub.code.as_str(), "FRA");
    assert_eq!(options.hub.utc_offset.to_string(), "-0300");
    assert_eq!(
        options.issue_date(),
        NaiveDate::from_ymd_opt(2025, 12, 1).unwrap()
    );
}

#[test]
fn conflicting_flags_are_rejected() {
    assert!(Cli::try_parse_from(["ssim", "convert", "in.csv", "--all", "--airline", "KL"]).is_err());
    assert!(
        Cli::try_parse_from([
            "ssim",
            "convert",
            "in.csv",
            "--output",
            "out.ssim",
            "--output-dir",
            "out"
        ])
        .is_err()
    );
    assert!(Cli::try_parse_from(["ssim", "convert", "in.csv", "--hub-offset", "0100"]).is_err());
}

#[test]
fn time_shift_accepts_negative_hours_within_a_day() {
    let args = convert_args(&["ssim", "convert", "in.csv", "--time-shift", "-3"]);
    assert_eq!(args.time_shift_hours, -3);
    assert_eq!(conversion_options(&args).unwrap().time_shift_hours, -3);

    assert!(Cli::try_parse_from(["ssim", "convert", "in.csv", "--time-shift", "24"]).is_err());
    assert!(
        Cli::try_parse_from([
            "ssim",
            "convert",
            "in.csv",
            "--time-shift",
            "9223372036854775"
        ])
        .is_err()
    );
}

#[test]
fn invalid_hub_is_reported() {
    let args = convert_args(&["ssim", "convert", "in.csv", "--hub", "  "]);
    assert!(conversion_options(&args).is_err());
}

#[test]
fn convert_writes_into_output_dir() {
    let dir = tempdir().unwrap();
    let input = write_schedule(dir.path());
    let out_dir = dir.path().join("out");
    let out_dir_arg = out_dir.display().to_string();
    let args = convert_args(&[
        "ssim",
        "convert",
        &input,
        "--airline",
        "KL",
        "--issue-date",
        "2025-12-01",
        "--output-dir",
        &out_dir_arg,
    ]);

    let outcome = run_convert(&args).unwrap();
    let expected = out_dir.join("KL_20251201_AMS.ssim");
    assert_eq!(outcome.scope, "KL");
    assert_eq!(outcome.summary.output.as_deref(), Some(expected.as_path()));
    assert_eq!(outcome.summary.total_lines, 18);

    let content = fs::read_to_string(&expected).unwrap();
    assert_eq!(content.lines().count(), 18);
    assert!(content.lines().all(|line| line.len() == 200));
}

#[test]
fn dry_run_writes_nothing() {
    let dir = tempdir().unwrap();
    let input = write_schedule(dir.path());
    let output = dir.path().join("dataset.ssim");
    let output_arg = output.display().to_string();
    let args = convert_args(&[
        "ssim",
        "convert",
        &input,
        "--issue-date",
        "2025-12-01",
        "--output",
        &output_arg,
        "--dry-run",
    ]);

    let outcome = run_convert(&args).unwrap();
    assert!(outcome.dry_run);
    assert_eq!(outcome.scope, "MULTI");
    assert!(outcome.summary.output.is_none());
    assert_eq!(outcome.summary.total_lines, 25);
    assert!(!output.exists());
}

#[test]
fn unknown_airline_fails_without_output() {
    let dir = tempdir().unwrap();
    let input = write_schedule(dir.path());
    let output = dir.path().join("dataset.ssim");
    let output_arg = output.display().to_string();
    let args = convert_args(&[
        "ssim", "convert", &input, "--airline", "LH", "--output", &output_arg,
    ]);

    let error = run_convert(&args).unwrap_err();
    assert!(format!("{error:#}").contains("no matching records for LH"));
    assert!(!output.exists());
}

#[test]
fn missing_input_is_an_error() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("absent.csv").display().to_string();
    let args = convert_args(&["ssim", "convert", &input]);
    assert!(run_convert(&args).is_err());
}

#[test]
fn airlines_lists_codes_with_row_counts() {
    let dir = tempdir().unwrap();
    let input = write_schedule(dir.path());
    let cli = Cli::try_parse_from(["ssim", "airlines", input.as_str(), "--json"]).unwrap();
    let Command::Airlines(args) = cli.command else {
        panic!("expected airlines");
    };
    assert!(args.json);

    let airlines = run_airlines(&args).unwrap();
    let listed: Vec<(&str, usize)> = airlines
        .iter()
        .map(|entry| (entry.airline.as_str(), entry.rows))
        .collect();
    assert_eq!(listed, vec![("EK", 2), ("KL", 2)]);
}
