//! Measurement form state: entry fields, live preview, save and re-edit.

use crate::error::Result;
use crate::measure::{format_size, resolve, sanitize_whole, TransomInput};
use crate::model::{
    DimensionInput, Eighths, FinalSize, MeasureShape, MeasuredWindow, OpeningReadings,
    SpecFields, TransomShape, WindowRecord, WindowType,
};
use std::fmt;
use tracing::debug;

/// What the form is currently doing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FormState {
    /// Adding a new window.
    #[default]
    Idle,
    /// Editing the window with this id.
    Editing(String),
}

/// Dimension entry fields on the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Width,
    Height,
    WidthTop,
    WidthBottom,
    HeightLeft,
    HeightRight,
    TransomHeight,
}

/// Reason a save could not produce a measurement yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Missing {
    Location,
    WindowType,
    Measurements,
}

impl fmt::Display for Missing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Missing::Location => write!(f, "window location"),
            Missing::WindowType => write!(f, "window type"),
            Missing::Measurements => write!(f, "measurements"),
        }
    }
}

/// Result of pressing save.
#[derive(Debug, Clone, PartialEq)]
pub enum SaveOutcome {
    /// Measurement is complete; the form has been cleared.
    Saved(MeasuredWindow),
    /// Input is not complete yet; the form is left untouched.
    Incomplete(Missing),
}

/// The measurement form for one opening.
#[derive(Debug, Clone, Default)]
pub struct MeasurementForm {
    state: FormState,
    window_type: Option<WindowType>,
    pub location: String,
    pub width: DimensionInput,
    pub height: DimensionInput,
    pub width_top: DimensionInput,
    pub width_bottom: DimensionInput,
    pub height_left: DimensionInput,
    pub height_right: DimensionInput,
    pub transom: TransomInput,
    pub notes: String,
    pub specs: SpecFields,
}

impl MeasurementForm {
    /// Create an empty form.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state.
    pub fn state(&self) -> &FormState {
        &self.state
    }

    /// Check if an existing window is being edited.
    pub fn is_editing(&self) -> bool {
        matches!(self.state, FormState::Editing(_))
    }

    /// Selected window type.
    pub fn window_type(&self) -> Option<&WindowType> {
        self.window_type.as_ref()
    }

    /// Select a window type.
    ///
    /// When adding a new window, changing type discards measurements,
    /// transom and notes. While editing they are kept.
    pub fn set_window_type(&mut self, window_type: Option<WindowType>) {
        self.window_type = window_type;
        if !self.is_editing() {
            self.clear_measurements();
            self.notes.clear();
        }
    }

    /// Update the free text of an "Other" type without clearing anything.
    pub fn set_other_type_text(&mut self, text: &str) {
        if let Some(WindowType::Other(current)) = &mut self.window_type {
            *current = text.to_string();
        }
    }

    /// Measurement shape of the selected type.
    pub fn shape(&self) -> Option<MeasureShape> {
        self.window_type.as_ref().map(WindowType::shape)
    }

    /// Check if the transom toggle is offered for the selected type.
    pub fn transom_available(&self) -> bool {
        self.window_type
            .as_ref()
            .is_some_and(|t| t.shape() == MeasureShape::Detailed && t.transom_eligible())
    }

    /// Flip the transom toggle. Ignored when the type has no transom option.
    pub fn set_transom_enabled(&mut self, enabled: bool) {
        if enabled && !self.transom_available() {
            debug!("Transom not offered for {:?}", self.window_type);
            return;
        }
        self.transom.set_enabled(enabled);
    }

    /// Select the transom shape.
    pub fn set_transom_shape(&mut self, shape: TransomShape) {
        self.transom.select_shape(shape);
    }

    /// Mutable access to a dimension field.
    pub fn field_mut(&mut self, field: Field) -> &mut DimensionInput {
        match field {
            Field::Width => &mut self.width,
            Field::Height => &mut self.height,
            Field::WidthTop => &mut self.width_top,
            Field::WidthBottom => &mut self.width_bottom,
            Field::HeightLeft => &mut self.height_left,
            Field::HeightRight => &mut self.height_right,
            Field::TransomHeight => &mut self.transom.height,
        }
    }

    /// Type into the whole-inch part of a field; non-digits are dropped.
    pub fn set_whole(&mut self, field: Field, text: &str) {
        self.field_mut(field).whole = sanitize_whole(text);
    }

    /// Pick the fraction of a field.
    pub fn set_frac(&mut self, field: Field, frac: Eighths) {
        self.field_mut(field).frac = frac;
    }

    /// Entry fields for the selected type's measurement shape.
    pub fn readings(&self) -> Option<OpeningReadings> {
        let readings = match self.shape()? {
            MeasureShape::Simple => OpeningReadings::Simple {
                width: self.width.clone(),
                height: self.height.clone(),
            },
            MeasureShape::Detailed => OpeningReadings::Detailed {
                width_top: self.width_top.clone(),
                width_bottom: self.width_bottom.clone(),
                height_left: self.height_left.clone(),
                height_right: self.height_right.clone(),
            },
        };
        Some(readings)
    }

    /// Live final size for the current input.
    pub fn preview(&self) -> Option<FinalSize> {
        self.readings()
            .as_ref()
            .and_then(resolve)
            .map(|r| r.final_size)
    }

    /// Preview line shown under the form.
    pub fn preview_text(&self) -> Option<String> {
        self.preview()
            .map(|size| format!("Calculated Final Size: {}", format_size(&size)))
    }

    /// Type name as it will be stored, if one is usable.
    fn resolved_type_name(&self) -> Option<String> {
        let name = self.window_type.as_ref()?.name().trim();
        (!name.is_empty()).then(|| name.to_string())
    }

    /// Save the form.
    ///
    /// Incomplete input is reported as [`SaveOutcome::Incomplete`]. An
    /// enabled transom on a detailed opening is kept even when the type
    /// does not offer the toggle (a re-edited record), and without a valid
    /// height or shape it is an error. On success the form is cleared and
    /// returns to idle.
    pub fn save(&mut self) -> Result<SaveOutcome> {
        let location = self.location.trim();
        if location.is_empty() {
            return Ok(SaveOutcome::Incomplete(Missing::Location));
        }
        let Some(window_type) = self.resolved_type_name() else {
            return Ok(SaveOutcome::Incomplete(Missing::WindowType));
        };
        let Some(resolution) = self.readings().as_ref().and_then(resolve) else {
            return Ok(SaveOutcome::Incomplete(Missing::Measurements));
        };

        let transom = if self.shape() == Some(MeasureShape::Detailed) {
            self.transom.resolve()?
        } else {
            None
        };

        let measured = MeasuredWindow {
            location: location.to_string(),
            window_type,
            notes: self.notes.trim().to_string(),
            corners: resolution.corners,
            final_size: resolution.final_size,
            transom,
            specs: self.specs.clone(),
        };

        debug!("Saved measurement for {}", measured.location);
        self.reset();
        Ok(SaveOutcome::Saved(measured))
    }

    /// Load a persisted window for editing.
    ///
    /// Measurements are only pre-filled for measured windows. Stored values
    /// are split back to the nearest eighth; a detailed window saved without
    /// its corner readings gets its final size in all four corners.
    pub fn begin_edit(&mut self, record: &WindowRecord) {
        self.reset();
        self.state = FormState::Editing(record.id.clone());
        self.location = record.location.clone();
        self.notes = record.notes.clone();
        self.specs = record.specs.clone();
        self.window_type = record.parsed_type();

        if !record.is_measured() {
            debug!("Editing pending window {}", record.id);
            return;
        }

        let simple = self.window_type.as_ref().is_some_and(WindowType::is_simple);
        match (simple, record.final_size(), record.corners()) {
            (true, Some(size), _) => {
                self.width = DimensionInput::from_value(size.width);
                self.height = DimensionInput::from_value(size.height);
            }
            (false, _, Some(corners)) => {
                self.width_top = DimensionInput::from_value(corners.width_top);
                self.width_bottom = DimensionInput::from_value(corners.width_bottom);
                self.height_left = DimensionInput::from_value(corners.height_left);
                self.height_right = DimensionInput::from_value(corners.height_right);
            }
            (false, Some(size), None) => {
                debug!(
                    "Window {} has no corner readings, using final size",
                    record.id
                );
                self.width_top = DimensionInput::from_value(size.width);
                self.width_bottom = DimensionInput::from_value(size.width);
                self.height_left = DimensionInput::from_value(size.height);
                self.height_right = DimensionInput::from_value(size.height);
            }
            _ => {}
        }

        if let Some(height) = record.transom_height {
            self.transom.enabled = true;
            self.transom.height = DimensionInput::from_value(height);
            self.transom.shape = record
                .transom_shape
                .as_deref()
                .map(TransomShape::parse)
                .unwrap_or_default();
        }
    }

    /// Abandon an edit and clear the form.
    pub fn cancel_edit(&mut self) {
        self.reset();
    }

    /// Clear every field and return to idle.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    fn clear_measurements(&mut self) {
        self.width.clear();
        self.height.clear();
        self.width_top.clear();
        self.width_bottom.clear();
        self.height_left.clear();
        self.height_right.clear();
        self.transom.set_enabled(false);
    }
}
