//! window-measure - Field measurement normalization for replacement windows.
//!
//! This library turns raw tape readings (whole inches plus an eighth-inch
//! fraction) into the authoritative final size used to order a window. It
//! also carries the surrounding job handling: importing a salesperson's
//! sheet, validating measured windows and generating export documents.
//!
//! # Example
//!
//! ```
//! use window_measure::format_size;
//! use window_measure::measure::resolve_detailed;
//!
//! let resolution = resolve_detailed(Some(35.7), Some(35.9), Some(52.0), Some(52.1)).unwrap();
//! assert_eq!(format_size(&resolution.final_size), "35 5/8\" × 52\"");
//! ```

pub mod config;
pub mod error;
pub mod form;
pub mod generator;
pub mod measure;
pub mod model;
pub mod parser;
pub mod validation;

// Re-exports for convenience
pub use config::ExportConfig;
pub use error::{ErrorCode, MeasureError, Result};
pub use form::{Field, FormState, MeasurementForm, Missing, SaveOutcome};
pub use generator::{generate_report, generate_sheet};
pub use measure::{
    combine, format_as_fraction, format_size, resolve, resolve_transom, round_down_to_eighth,
    split, Resolution, TransomInput,
};
pub use model::{
    Corners, DimensionInput, Eighths, FinalSize, Job, JobStatus, MeasureShape, MeasuredWindow,
    OpeningReadings, SpecFields, Transom, TransomShape, WindowRecord, WindowStatus, WindowType,
};
pub use parser::{
    parse_dimension, parse_job_file, parse_spreadsheet, parse_spreadsheet_file, write_job_file,
};
pub use validation::{validate_job, ValidationResult};

/// Import a salesperson's sheet into a job of pending windows.
///
/// Parses the CSV file and validates the result. Validation warnings are
/// logged; an import with no windows is an error. The job moves to the
/// windows-imported stage.
pub fn import_spreadsheet(input_path: &std::path::Path) -> Result<Job> {
    let mut job = parse_spreadsheet_file(input_path)?;

    let validation = validate_job(&job)?;
    for warning in &validation.warnings {
        tracing::debug!("{}", warning);
    }
    for err in &validation.errors {
        tracing::warn!("{}", err);
    }

    job.status = JobStatus::WindowsImported;
    Ok(job)
}
