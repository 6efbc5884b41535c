//! Final-size resolution for simple and detailed openings.

use super::round_down_to_eighth;
use crate::model::{Corners, FinalSize, OpeningReadings};
use tracing::debug;

/// Outcome of a successful resolution.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Resolution {
    /// Order-ready size.
    pub final_size: FinalSize,
    /// Rounded corner readings, kept for detailed openings only.
    pub corners: Option<Corners>,
}

fn positive(value: Option<f64>) -> Option<f64> {
    value.filter(|v| *v > 0.0)
}

/// Floor both readings to the eighth, then take the smaller.
#[inline]
pub fn floor_then_min(a: f64, b: f64) -> f64 {
    round_down_to_eighth(a).min(round_down_to_eighth(b))
}

/// Resolve a simple opening from one width and one height.
pub fn resolve_simple(width: Option<f64>, height: Option<f64>) -> Option<FinalSize> {
    let width = positive(width)?;
    let height = positive(height)?;
    Some(FinalSize::new(
        round_down_to_eighth(width),
        round_down_to_eighth(height),
    ))
}

/// Resolve a detailed opening from its four corner readings.
///
/// Every reading is floored to the eighth before the per-axis minimum is
/// taken, so the size never exceeds the tightest clearance.
pub fn resolve_detailed(
    width_top: Option<f64>,
    width_bottom: Option<f64>,
    height_left: Option<f64>,
    height_right: Option<f64>,
) -> Option<Resolution> {
    let corners = Corners {
        width_top: round_down_to_eighth(positive(width_top)?),
        width_bottom: round_down_to_eighth(positive(width_bottom)?),
        height_left: round_down_to_eighth(positive(height_left)?),
        height_right: round_down_to_eighth(positive(height_right)?),
    };

    Some(Resolution {
        final_size: corners.min_size(),
        corners: Some(corners),
    })
}

/// Resolve the final size of an opening from its entry fields.
///
/// Returns `None` while any required field is blank or not positive.
pub fn resolve(readings: &OpeningReadings) -> Option<Resolution> {
    let resolution = match readings {
        OpeningReadings::Simple { width, height } => {
            resolve_simple(width.value(), height.value()).map(|final_size| Resolution {
                final_size,
                corners: None,
            })
        }
        OpeningReadings::Detailed {
            width_top,
            width_bottom,
            height_left,
            height_right,
        } => resolve_detailed(
            width_top.value(),
            width_bottom.value(),
            height_left.value(),
            height_right.value(),
        ),
    };

    match &resolution {
        Some(r) => debug!(
            "Resolved final size {} x {}",
            r.final_size.width, r.final_size.height
        ),
        None => debug!("Opening incomplete, no final size"),
    }

    resolution
}
