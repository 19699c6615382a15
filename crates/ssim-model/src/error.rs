use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    #[error("invalid airline code: {0:?}")]
    InvalidAirlineCode(String),
    #[error("invalid flight number: {0:?}")]
    InvalidFlightNumber(String),
    #[error("invalid station code: {0:?}")]
    InvalidStation(String),
    #[error("invalid UTC offset: {0:?} (expected +HHMM or -HHMM)")]
    InvalidUtcOffset(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
