//! Flight designator extraction.
//!
//! Schedule cells carry designators in loose shapes: `KL1234`, `kl 1234`,
//! `6E0021`, `U2-1234`. The airline code is the leading run of up to three
//! letters or digits; only its first two characters are consumed. The flight
//! number is the first digit run after those two characters.

use std::sync::LazyLock;

use regex::Regex;

use ssim_model::{AirlineCode, FlightNumber, Identifier, is_stay_sentinel};

static AIRLINE_TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Z0-9]{1,3}").expect("valid airline token regex")
});

static DIGIT_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]+").expect("valid digit run regex"));

/// Extracts the identifier from a raw designator cell.
///
/// Returns `None` for blank cells, the stay marker, or text with no flight
/// number after the airline code.
pub fn extract_identifier(raw: &str) -> Option<Identifier> {
    let value = raw.trim().to_uppercase();
    if value.is_empty() || is_stay_sentinel(&value) {
        return None;
    }
    let token = AIRLINE_TOKEN.find(&value)?.as_str();
    let consumed = token.len().min(2);
    let airline = AirlineCode::new(&token[..consumed]).ok()?;
    let digits = DIGIT_RUN.find(&value[consumed..])?;
    let number = FlightNumber::new(digits.as_str()).ok()?;
    Some(Identifier::new(airline, number))
}

/// Extracts an identifier from an optional cell.
pub fn extract_from_cell(cell: Option<&str>) -> Option<Identifier> {
    cell.and_then(extract_identifier)
}
