//! Schedule ingestion: reads hub schedule tables into typed flight-leg rows.

pub mod columns;
pub mod error;
pub mod schedule_table;

pub use columns::{ScheduleColumn, compact_key};
pub use error::{IngestError, Result};
pub use schedule_table::{ScheduleTable, read_schedule, read_schedule_csv};
