//! Configuration constants and settings for measurement handling.

use crate::model::Job;
use serde::{Deserialize, Serialize};

/// Floating-point comparison epsilon.
pub const EPS: f64 = 0.0001;

/// Eighth-inch grid: every user-facing dimension snaps to 1/8".
pub const EIGHTHS_PER_INCH: u8 = 8;

/// Inch mark appended to formatted dimensions.
pub const INCH_MARK: &str = "\"";

/// Separator between width and height in a formatted size.
pub const SIZE_SEPARATOR: &str = " × ";

/// Default title for generated reports and sheets.
pub const DEFAULT_REPORT_TITLE: &str = "Window Measurement Report";

/// Number of leading spreadsheet rows searched for a header row.
pub const HEADER_SCAN_ROWS: usize = 20;

/// Settings for export documents.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportConfig {
    /// Document title.
    pub title: String,
    /// Purchase order number printed in the header.
    pub po_number: String,
    /// Client name (if known).
    pub client_name: Option<String>,
    /// Client address (if known).
    pub address: Option<String>,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            title: DEFAULT_REPORT_TITLE.to_string(),
            po_number: String::new(),
            client_name: None,
            address: None,
        }
    }
}

impl ExportConfig {
    /// Create a new export configuration for a PO.
    pub fn new(po_number: impl Into<String>) -> Self {
        Self {
            po_number: po_number.into(),
            ..Default::default()
        }
    }

    /// Export configuration carrying a job's header details.
    pub fn for_job(job: &Job) -> Self {
        Self {
            po_number: job.po_number.clone(),
            client_name: job.client_name.clone(),
            address: job.address.clone(),
            ..Default::default()
        }
    }

    /// Set the document title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Output file stem used when no explicit path is given.
    pub fn file_stem(&self) -> String {
        if self.po_number.is_empty() {
            "Window_Measurements".to_string()
        } else {
            format!("{}_Window_Measurements", self.po_number)
        }
    }
}

/// Utility functions for floating-point comparisons.
pub mod float_cmp {
    use super::EPS;

    /// Check if two floats are approximately equal.
    #[inline]
    pub fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < EPS
    }

    /// Check if a float is approximately zero.
    #[inline]
    pub fn approx_zero(a: f64) -> bool {
        a.abs() < EPS
    }
}
