//! Normalization of loosely formatted schedule cells.
//!
//! - **identifier**: flight designator extraction
//! - **time**: STA/STD clock times
//! - **date**: validity periods
//! - **days**: operating-day masks
//! - **fields**: aircraft type, service type and stations

pub mod date;
pub mod days;
pub mod fields;
pub mod identifier;
pub mod time;

pub use date::{DEFAULT_VALIDITY_DAYS, parse_schedule_date, validity_period};
pub use days::{day_mask, day_operates};
pub use fields::{
    DEFAULT_AIRCRAFT_TYPE, DEFAULT_SERVICE_TYPE, normalize_aircraft_type, normalize_station,
    split_service_types,
};
pub use identifier::{extract_from_cell, extract_identifier};
pub use time::parse_clock_time;
