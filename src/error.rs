//! Error types for window measurement handling.

use std::path::PathBuf;
use thiserror::Error;

/// Error codes for measurement processing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// File not found (-1)
    FileNotFound = -1,
    /// Empty file (-2)
    EmptyFile = -2,
    /// General parse error (-3)
    ParseError = -3,
    /// Job contains no windows (-11)
    NoWindows = -11,
    /// Value is not on the eighth-inch grid (E100)
    InvalidFraction = 100,
    /// Dimension text could not be read (E101)
    InvalidDimension = 101,
    /// Transom enabled without a usable height (E200)
    TransomHeightMissing = 200,
    /// Transom enabled without a shape (E201)
    TransomShapeMissing = 201,
    /// Window id not present in the job (E202)
    WindowNotFound = 202,
    /// Serialization failure (E300)
    Serialization = 300,
}

/// Main error type for the measurement library.
#[derive(Debug, Error)]
pub enum MeasureError {
    #[error("File not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("Empty file: {path}")]
    EmptyFile { path: PathBuf },

    #[error("Not an eighth-inch fraction: {value}")]
    InvalidFraction { value: f64 },

    #[error("Invalid dimension: '{value}'")]
    InvalidDimension { value: String },

    #[error("Transom is enabled but its height is missing or not positive")]
    TransomHeightMissing,

    #[error("Transom is enabled but no shape was given")]
    TransomShapeMissing,

    #[error("Job contains no windows")]
    NoWindows,

    #[error("Window not found: {id}")]
    WindowNotFound { id: String },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Formatting error: {0}")]
    Format(#[from] std::fmt::Error),
}

impl MeasureError {
    /// Get the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            MeasureError::FileNotFound { .. } => ErrorCode::FileNotFound,
            MeasureError::EmptyFile { .. } => ErrorCode::EmptyFile,
            MeasureError::InvalidFraction { .. } => ErrorCode::InvalidFraction,
            MeasureError::InvalidDimension { .. } => ErrorCode::InvalidDimension,
            MeasureError::TransomHeightMissing => ErrorCode::TransomHeightMissing,
            MeasureError::TransomShapeMissing => ErrorCode::TransomShapeMissing,
            MeasureError::NoWindows => ErrorCode::NoWindows,
            MeasureError::WindowNotFound { .. } => ErrorCode::WindowNotFound,
            MeasureError::Csv(_) => ErrorCode::ParseError,
            MeasureError::Json(_) => ErrorCode::Serialization,
            MeasureError::Io(_) => ErrorCode::FileNotFound,
            MeasureError::Format(_) => ErrorCode::Serialization,
        }
    }

    /// Get the numeric error code value.
    pub fn code_value(&self) -> i32 {
        self.code() as i32
    }

    /// Whether this error blocks saving an opening.
    pub fn blocks_save(&self) -> bool {
        matches!(
            self,
            MeasureError::TransomHeightMissing | MeasureError::TransomShapeMissing
        )
    }
}

/// Result type alias for measurement operations.
pub type Result<T> = std::result::Result<T, MeasureError>;
