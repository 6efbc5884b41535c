//! Eighth-inch rounding and fraction display.

use crate::config::{EIGHTHS_PER_INCH, INCH_MARK, SIZE_SEPARATOR};
use crate::model::{reduce, FinalSize};

/// Round down to the eighth inch at or below `value`.
#[inline]
pub fn round_down_to_eighth(value: f64) -> f64 {
    let grid = f64::from(EIGHTHS_PER_INCH);
    (value * grid).floor() / grid
}

/// Format inches as a whole number with a reduced eighth fraction.
///
/// Examples: `24.5` -> `"24 1/2"`, `0.75` -> `"3/4"`, `36.97` -> `"37"`.
/// Missing or non-finite values render as an empty string.
pub fn format_as_fraction(value: Option<f64>) -> String {
    let Some(value) = value.filter(|v| v.is_finite()) else {
        return String::new();
    };

    let whole = value.floor();
    let eighths = ((value - whole) * f64::from(EIGHTHS_PER_INCH)).round() as u32;
    let whole = whole as i64;

    match eighths {
        0 => whole.to_string(),
        n if n == u32::from(EIGHTHS_PER_INCH) => (whole + 1).to_string(),
        n => {
            let (num, den) = reduce(n, u32::from(EIGHTHS_PER_INCH));
            if whole > 0 {
                format!("{} {}/{}", whole, num, den)
            } else {
                format!("{}/{}", num, den)
            }
        }
    }
}

/// Format a single dimension with an inch mark (`24 1/2"`).
pub fn format_inches(value: f64) -> String {
    format!("{}{}", format_as_fraction(Some(value)), INCH_MARK)
}

/// Format a final size as `W" × H"`.
pub fn format_size(size: &FinalSize) -> String {
    format!(
        "{}{}{}",
        format_inches(size.width),
        SIZE_SEPARATOR,
        format_inches(size.height)
    )
}
