//! Validation of window records before export.

use crate::config::float_cmp;
use crate::error::{MeasureError, Result};
use crate::model::{Job, WindowRecord, WindowType};

/// Validation result with warnings.
#[derive(Debug, Default)]
pub struct ValidationResult {
    /// Whether validation passed.
    pub passed: bool,
    /// Warning messages.
    pub warnings: Vec<String>,
    /// Error messages.
    pub errors: Vec<String>,
}

impl ValidationResult {
    /// Create a passing result.
    pub fn ok() -> Self {
        Self {
            passed: true,
            ..Default::default()
        }
    }

    /// Create a failing result with an error.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            passed: false,
            errors: vec![message.into()],
            ..Default::default()
        }
    }

    /// Add a warning.
    pub fn add_warning(&mut self, message: impl Into<String>) {
        self.warnings.push(message.into());
    }

    /// Add an error.
    pub fn add_error(&mut self, message: impl Into<String>) {
        self.errors.push(message.into());
        self.passed = false;
    }

    /// Merge another result into this one.
    pub fn merge(&mut self, other: ValidationResult) {
        self.warnings.extend(other.warnings);
        self.errors.extend(other.errors);
        if !other.passed {
            self.passed = false;
        }
    }
}

/// Validate every window of a job.
pub fn validate_job(job: &Job) -> Result<ValidationResult> {
    if job.windows.is_empty() {
        return Err(MeasureError::NoWindows);
    }

    let mut result = ValidationResult::ok();
    for (idx, window) in job.windows.iter().enumerate() {
        result.merge(validate_window(window, idx + 1));
    }
    Ok(result)
}

/// Validate a single window record.
pub fn validate_window(window: &WindowRecord, num: usize) -> ValidationResult {
    let mut result = ValidationResult::ok();
    let name = match &window.label {
        Some(label) => format!("Window {} (#{})", num, label),
        None => format!("Window {}", num),
    };

    if window.location.trim().is_empty() {
        result.add_error(format!("{}: Missing location", name));
    }

    if !window.is_measured() {
        result.add_warning(format!("{}: Not measured", name));
    } else {
        match window.final_size() {
            None => result.add_error(format!("{}: Measured but has no final size", name)),
            Some(size) if size.width <= 0.0 || size.height <= 0.0 => {
                result.add_error(format!(
                    "{}: Invalid final size ({}x{})",
                    name, size.width, size.height
                ));
            }
            Some(size) => {
                if let Some(corners) = window.corners() {
                    let expected = corners.min_size();
                    if !float_cmp::approx_eq(expected.width, size.width)
                        || !float_cmp::approx_eq(expected.height, size.height)
                    {
                        result.add_error(format!(
                            "{}: Final size {}x{} does not match readings ({}x{})",
                            name, size.width, size.height, expected.width, expected.height
                        ));
                    }
                }
            }
        }
    }

    match (window.transom_height, &window.transom_shape) {
        (Some(height), _) if height <= 0.0 || float_cmp::approx_zero(height) => {
            result.add_error(format!("{}: Transom height must be positive", name));
        }
        (Some(_), None) => {
            result.add_error(format!("{}: Transom height without a shape", name));
        }
        _ => {}
    }

    let has_transom = window.transom_height.is_some() || window.transom_shape.is_some();
    let eligible = window
        .parsed_type()
        .as_ref()
        .is_some_and(WindowType::transom_eligible);
    if has_transom && window.is_measured() && !eligible {
        result.add_warning(format!(
            "{}: Transom recorded on type '{}'",
            name, window.window_type
        ));
    }

    result
}
