use std::fmt;

use crate::ModelError;

/// Filler appended to single-character airline prefixes.
pub const AIRLINE_FILLER: char = 'X';

/// Minimum number of digits in a rendered flight number.
pub const FLIGHT_NUMBER_MIN_DIGITS: usize = 4;

/// Two-character airline designator.
#[derive(
    Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct AirlineCode(String);

impl AirlineCode {
    /// Builds a code from user or source input.
    ///
    /// The value is trimmed and uppercased. A single character is padded with
    /// [`AIRLINE_FILLER`]; anything longer keeps its first two characters.
    pub fn new(value: impl Into<String>) -> Result<Self, ModelError> {
        let value = value.into();
        let upper = value.trim().to_uppercase();
        if upper.is_empty() || !upper.chars().all(|ch| ch.is_ascii_alphanumeric()) {
            return Err(ModelError::InvalidAirlineCode(value));
        }
        let mut code: String = upper.chars().take(2).collect();
        if code.len() == 1 {
            code.push(AIRLINE_FILLER);
        }
        Ok(Self(code))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AirlineCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Flight number digits, left-padded with zeros to at least four digits.
///
/// Longer digit runs are kept whole.
#[derive(
    Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct FlightNumber(String);

impl FlightNumber {
    pub fn new(digits: impl Into<String>) -> Result<Self, ModelError> {
        let digits = digits.into();
        if digits.is_empty() || !digits.chars().all(|ch| ch.is_ascii_digit()) {
            return Err(ModelError::InvalidFlightNumber(digits));
        }
        Ok(Self(format!(
            "{digits:0>width$}",
            width = FLIGHT_NUMBER_MIN_DIGITS
        )))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the number fits the four-digit flight number field.
    pub fn fits_record(&self) -> bool {
        self.0.len() == FLIGHT_NUMBER_MIN_DIGITS
    }
}

impl fmt::Display for FlightNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Canonical flight identifier (airline + number).
#[derive(
    Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct Identifier {
    pub airline: AirlineCode,
    pub number: FlightNumber,
}

impl Identifier {
    pub fn new(airline: AirlineCode, number: FlightNumber) -> Self {
        Self { airline, number }
    }

    /// Whether a record can carry this identifier without cutting it.
    pub fn fits_record(&self) -> bool {
        self.number.fits_record()
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.airline, self.number)
    }
}

/// Three-letter station code.
#[derive(
    Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct Station(String);

impl Station {
    /// Placeholder for rows that carry no station at all.
    pub const UNKNOWN: &'static str = "XXX";

    /// Uppercases and keeps the first three characters.
    pub fn new(value: impl Into<String>) -> Result<Self, ModelError> {
        let value = value.into();
        let code: String = value.trim().to_uppercase().chars().take(3).collect();
        if code.is_empty() {
            return Err(ModelError::InvalidStation(value));
        }
        Ok(Self(code))
    }

    pub fn unknown() -> Self {
        Self(Self::UNKNOWN.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Station {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
