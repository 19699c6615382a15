//! Data model for converting hub schedules into SSIM flight-leg records.

pub mod error;
pub mod ids;
pub mod leg;
pub mod options;
pub mod schedule;
pub mod summary;

pub use error::{ModelError, Result};
pub use ids::{AirlineCode, FlightNumber, Identifier, Station};
pub use leg::{ClockTime, DayMask, DerivedLeg, Direction, ValidityPeriod, format_schedule_date};
pub use options::{
    AirlineSelection, ConversionOptions, DEFAULT_CREATOR, DEFAULT_TIME_SHIFT_HOURS, HubStation,
    UtcOffset,
};
pub use schedule::{FlightLegRow, STAY_SENTINEL, is_stay_sentinel, non_blank};
pub use summary::{AirlineSummary, ConversionSummary};
