//! Operating-day indicators.

use ssim_model::DayMask;

/// Whether a day indicator cell marks the day as operating.
///
/// Any non-blank value counts except a literal `false`.
pub fn day_operates(cell: Option<&str>) -> bool {
    match cell.map(str::trim) {
        None | Some("") => false,
        Some(value) => !value.eq_ignore_ascii_case("false"),
    }
}

/// Builds the weekday mask for a row. No operating day at all means daily.
pub fn day_mask(cells: &[Option<String>; 7]) -> DayMask {
    let mut days = [false; 7];
    for (slot, cell) in days.iter_mut().zip(cells) {
        *slot = day_operates(cell.as_deref());
    }
    DayMask::from_days(days)
}
