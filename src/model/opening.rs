//! Opening measurements: entry fields, corner readings and final size.

use super::Eighths;
use crate::measure::{combine, split};
use serde::{Deserialize, Serialize};

/// A dimension as typed on the form: whole inches plus an eighth fraction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DimensionInput {
    /// Whole-inch text (digits only once sanitized).
    pub whole: String,
    /// Fractional part.
    pub frac: Eighths,
}

impl DimensionInput {
    /// Create a new dimension input.
    pub fn new(whole: impl Into<String>, frac: Eighths) -> Self {
        Self {
            whole: whole.into(),
            frac,
        }
    }

    /// Pre-fill from a stored decimal value.
    pub fn from_value(value: f64) -> Self {
        let (whole, frac) = split(value);
        Self {
            whole: whole.to_string(),
            frac,
        }
    }

    /// Decimal inches, or `None` if the field is blank.
    pub fn value(&self) -> Option<f64> {
        combine(&self.whole, self.frac)
    }

    /// Check if nothing has been entered.
    pub fn is_blank(&self) -> bool {
        self.value().is_none()
    }

    /// Reset to an empty field.
    pub fn clear(&mut self) {
        self.whole.clear();
        self.frac = Eighths::ZERO;
    }
}

/// Four rounded corner readings of a detailed opening.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Corners {
    pub width_top: f64,
    pub width_bottom: f64,
    pub height_left: f64,
    pub height_right: f64,
}

impl Corners {
    /// Widths as persisted (top, bottom).
    pub fn widths(&self) -> Vec<f64> {
        vec![self.width_top, self.width_bottom]
    }

    /// Heights as persisted (left, right).
    pub fn heights(&self) -> Vec<f64> {
        vec![self.height_left, self.height_right]
    }

    /// Rebuild from persisted width/height arrays.
    pub fn from_slices(widths: &[f64], heights: &[f64]) -> Option<Self> {
        match (widths, heights) {
            ([width_top, width_bottom, ..], [height_left, height_right, ..]) => Some(Self {
                width_top: *width_top,
                width_bottom: *width_bottom,
                height_left: *height_left,
                height_right: *height_right,
            }),
            _ => None,
        }
    }

    /// Smallest width and smallest height.
    pub fn min_size(&self) -> FinalSize {
        FinalSize {
            width: self.width_top.min(self.width_bottom),
            height: self.height_left.min(self.height_right),
        }
    }
}

/// Derived, order-ready size of an opening in inches.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FinalSize {
    pub width: f64,
    pub height: f64,
}

impl FinalSize {
    /// Create a new final size.
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Raw entry fields for one opening, by measurement shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "shape", rename_all = "snake_case")]
pub enum OpeningReadings {
    Simple {
        width: DimensionInput,
        height: DimensionInput,
    },
    Detailed {
        width_top: DimensionInput,
        width_bottom: DimensionInput,
        height_left: DimensionInput,
        height_right: DimensionInput,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    fn eighths(n: u8) -> Eighths {
        Eighths::new(n).unwrap()
    }

    #[test]
    fn test_dimension_input_value() {
        assert_eq!(DimensionInput::new("35", eighths(5)).value(), Some(35.625));
        assert_eq!(DimensionInput::new("", eighths(4)).value(), Some(0.5));
        assert_eq!(DimensionInput::default().value(), None);
        assert!(DimensionInput::new("0", Eighths::ZERO).is_blank());
    }

    #[test]
    fn test_dimension_input_from_value() {
        let input = DimensionInput::from_value(24.5);
        assert_eq!(input.whole, "24");
        assert_eq!(input.frac, eighths(4));
    }

    #[test]
    fn test_dimension_input_clear() {
        let mut input = DimensionInput::new("12", eighths(4));
        input.clear();
        assert_eq!(input, DimensionInput::default());
    }

    #[test]
    fn test_corners_from_slices() {
        let corners = Corners::from_slices(&[35.625, 35.75], &[52.0, 52.125]).unwrap();
        assert_eq!(corners.widths(), vec![35.625, 35.75]);
        assert_eq!(corners.heights(), vec![52.0, 52.125]);
        assert_eq!(corners.min_size(), FinalSize::new(35.625, 52.0));
        assert!(Corners::from_slices(&[], &[]).is_none());
        assert!(Corners::from_slices(&[1.0], &[1.0, 2.0]).is_none());
    }
}
