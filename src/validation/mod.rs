//! Validation of window records.

mod validate;

pub use validate::{validate_job, validate_window, ValidationResult};
