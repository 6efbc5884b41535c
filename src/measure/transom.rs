//! Transom sub-measurement entry and resolution.

use super::round_down_to_eighth;
use crate::error::{MeasureError, Result};
use crate::model::{DimensionInput, Transom, TransomShape};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Transom fields on the measurement form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransomInput {
    /// "Add Transom?" toggle.
    pub enabled: bool,
    /// Selected shape; free text lives in `TransomShape::Other`.
    pub shape: TransomShape,
    /// Transom height entry.
    pub height: DimensionInput,
}

impl TransomInput {
    /// Flip the toggle. Turning it off discards any entered shape and height.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
        if !enabled {
            self.clear();
        }
    }

    /// Select a shape from the list.
    pub fn select_shape(&mut self, shape: TransomShape) {
        self.shape = shape;
    }

    /// Reset shape and height to their defaults.
    pub fn clear(&mut self) {
        debug!("Clearing transom fields");
        self.shape = TransomShape::default();
        self.height.clear();
    }

    /// Resolve the transom for saving.
    ///
    /// `Ok(None)` when the toggle is off. When it is on, a missing height or
    /// blank free-text shape is an error that blocks the save.
    pub fn resolve(&self) -> Result<Option<Transom>> {
        if !self.enabled {
            return Ok(None);
        }
        resolve_transom(&self.shape, self.height.value()).map(Some)
    }
}

/// Resolve an enabled transom from its shape and decimal height.
pub fn resolve_transom(shape: &TransomShape, height: Option<f64>) -> Result<Transom> {
    let height = height
        .filter(|h| *h > 0.0)
        .ok_or(MeasureError::TransomHeightMissing)?;
    let shape = shape
        .resolved_name()
        .ok_or(MeasureError::TransomShapeMissing)?;

    Ok(Transom {
        shape: shape.to_string(),
        height: round_down_to_eighth(height),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Eighths;

    fn half() -> Eighths {
        Eighths::new(4).unwrap()
    }

    #[test]
    fn test_disabled_resolves_to_none() {
        let input = TransomInput::default();
        assert_eq!(input.resolve().unwrap(), None);
    }

    #[test]
    fn test_enabled_resolves() {
        let mut input = TransomInput::default();
        input.set_enabled(true);
        input.select_shape(TransomShape::HalfRound);
        input.height = DimensionInput::new("12", half());

        let transom = input.resolve().unwrap().unwrap();
        assert_eq!(transom.shape, "Half-Round");
        assert_eq!(transom.height, 12.5);
    }

    #[test]
    fn test_enabled_without_height_blocks() {
        let mut input = TransomInput::default();
        input.set_enabled(true);
        let err = input.resolve().unwrap_err();
        assert!(matches!(err, MeasureError::TransomHeightMissing));
    }

    #[test]
    fn test_blank_other_shape_blocks() {
        let mut input = TransomInput::default();
        input.set_enabled(true);
        input.select_shape(TransomShape::Other("  ".to_string()));
        input.height = DimensionInput::new("10", Eighths::ZERO);
        let err = input.resolve().unwrap_err();
        assert!(matches!(err, MeasureError::TransomShapeMissing));
    }

    #[test]
    fn test_toggle_off_clears_state() {
        let mut input = TransomInput::default();
        input.set_enabled(true);
        input.select_shape(TransomShape::HalfRound);
        input.height = DimensionInput::new("12", half());

        input.set_enabled(false);
        input.set_enabled(true);

        assert_eq!(input.shape, TransomShape::Rectangular);
        assert!(input.height.whole.is_empty());
        assert!(input.height.is_blank());
    }

    #[test]
    fn test_resolve_transom_floors_height() {
        let transom = resolve_transom(&TransomShape::Rectangular, Some(12.3)).unwrap();
        assert_eq!(transom.height, 12.25);
        assert!(resolve_transom(&TransomShape::Rectangular, Some(0.0)).is_err());
    }
}
