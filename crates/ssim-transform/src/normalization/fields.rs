//! Aircraft type, service type and station normalization.

use ssim_model::Station;

/// Aircraft type used when the cell is blank or has no usable characters.
pub const DEFAULT_AIRCRAFT_TYPE: &str = "320";

/// Service type used when the cell is blank.
pub const DEFAULT_SERVICE_TYPE: char = 'J';

const AIRCRAFT_TYPE_WIDTH: usize = 3;

/// Three-character aircraft type from a cell such as `73H/73W` or `A 320`.
///
/// Only the first alternative before a `/` is used; non-alphanumeric
/// characters are dropped.
pub fn normalize_aircraft_type(cell: Option<&str>) -> String {
    let first = cell.and_then(|raw| raw.split('/').next()).unwrap_or("");
    let code: String = first
        .chars()
        .filter(char::is_ascii_alphanumeric)
        .map(|ch| ch.to_ascii_uppercase())
        .take(AIRCRAFT_TYPE_WIDTH)
        .collect();
    if code.is_empty() {
        DEFAULT_AIRCRAFT_TYPE.to_string()
    } else {
        code
    }
}

/// Arrival and departure service types from a cell such as `J/C`.
///
/// A single value applies to both directions.
pub fn split_service_types(cell: Option<&str>) -> (char, char) {
    let Some(raw) = cell else {
        return (DEFAULT_SERVICE_TYPE, DEFAULT_SERVICE_TYPE);
    };
    let mut parts = raw.split('/');
    let arrival = service_code(parts.next());
    let departure = match parts.next() {
        Some(part) => service_code(Some(part)),
        None => arrival,
    };
    (arrival, departure)
}

fn service_code(part: Option<&str>) -> char {
    part.and_then(|value| value.trim().chars().next())
        .filter(char::is_ascii_alphanumeric)
        .map_or(DEFAULT_SERVICE_TYPE, |ch| ch.to_ascii_uppercase())
}

/// Station code from a cell, or `XXX` when it is blank or unusable.
pub fn normalize_station(cell: Option<&str>) -> Station {
    cell.and_then(|raw| Station::new(raw).ok())
        .unwrap_or_else(Station::unknown)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aircraft_type_takes_first_alternative() {
        assert_eq!(normalize_aircraft_type(Some("73H/73W")), "73H");
        assert_eq!(normalize_aircraft_type(Some("a-388")), "A38");
        assert_eq!(normalize_aircraft_type(Some("E90")), "E90");
        assert_eq!(normalize_aircraft_type(Some("/")), "320");
        assert_eq!(normalize_aircraft_type(None), "320");
    }

    #[test]
    fn service_types() {
        assert_eq!(split_service_types(Some("J/C")), ('J', 'C'));
        assert_eq!(split_service_types(Some("c")), ('C', 'C'));
        assert_eq!(split_service_types(Some(" /F")), ('J', 'F'));
        assert_eq!(split_service_types(None), ('J', 'J'));
    }

    #[test]
    fn stations() {
        assert_eq!(normalize_station(Some("lhr")).as_str(), "LHR");
        assert_eq!(normalize_station(Some("DXBX")).as_str(), "DXB");
        assert_eq!(normalize_station(None).as_str(), "XXX");
    }
}
