//! Schedule row transformation for SSIM conversion.
//!
//! This crate turns ingested schedule rows into directional legs:
//!
//! - **normalization**: designators, times, dates, day masks and other cells
//! - **selection**: airline discovery and selection resolution
//! - **linker**: leg classification, turnaround and overnight-stay linking

pub mod linker;
pub mod normalization;
pub mod selection;

pub use linker::{LinkSettings, RowLegs, RowLink, RunState};
pub use normalization::{extract_from_cell, extract_identifier};
pub use selection::{
    ResolvedSelection, airline_row_counts, discover_airlines, resolve_selection, row_airlines,
    rows_for_airline,
};
