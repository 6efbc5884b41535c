//! Window records and jobs as persisted and exported.

use super::{Corners, FinalSize, Transom, WindowType};
use crate::error::{MeasureError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// Measurement status of a window.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WindowStatus {
    /// Imported or created with approximate sizes only.
    #[default]
    Pending,
    /// Field-measured with a final size.
    Measured,
}

impl fmt::Display for WindowStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WindowStatus::Pending => write!(f, "pending"),
            WindowStatus::Measured => write!(f, "measured"),
        }
    }
}

/// Workflow stage of a job, in order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JobStatus {
    #[default]
    Draft,
    WindowsImported,
    Configured,
    Approved,
    Measuring,
    Complete,
}

impl JobStatus {
    /// All stages in workflow order.
    pub const ALL: [JobStatus; 6] = [
        JobStatus::Draft,
        JobStatus::WindowsImported,
        JobStatus::Configured,
        JobStatus::Approved,
        JobStatus::Measuring,
        JobStatus::Complete,
    ];

    /// Short step label shown on the status bar.
    pub fn label(self) -> &'static str {
        match self {
            JobStatus::Draft => "Create",
            JobStatus::WindowsImported => "Import",
            JobStatus::Configured => "Configure",
            JobStatus::Approved => "Approve",
            JobStatus::Measuring => "Measure",
            JobStatus::Complete => "Complete",
        }
    }

    /// Zero-based position in the workflow.
    pub fn step(self) -> usize {
        self as usize
    }
}

impl fmt::Display for JobStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            JobStatus::Draft => "draft",
            JobStatus::WindowsImported => "windows_imported",
            JobStatus::Configured => "configured",
            JobStatus::Approved => "approved",
            JobStatus::Measuring => "measuring",
            JobStatus::Complete => "complete",
        };
        write!(f, "{}", name)
    }
}

/// Product specification fields carried alongside a measurement.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpecFields {
    pub style: Option<String>,
    pub grid_style: Option<String>,
    pub temper: Option<String>,
    pub outside_color: Option<String>,
    pub inside_color: Option<String>,
    pub screen: Option<String>,
}

impl SpecFields {
    /// Check if any field is set.
    pub fn is_empty(&self) -> bool {
        self.labelled().is_empty()
    }

    /// Set fields as (short label, value) pairs in display order.
    pub fn labelled(&self) -> Vec<(&'static str, &str)> {
        [
            ("Style", &self.style),
            ("Grid", &self.grid_style),
            ("Temper", &self.temper),
            ("Ext", &self.outside_color),
            ("Int", &self.inside_color),
            ("Screen", &self.screen),
        ]
        .into_iter()
        .filter_map(|(label, value)| value.as_deref().map(|v| (label, v)))
        .collect()
    }
}

/// A window as persisted for a job.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowRecord {
    /// Record identifier.
    pub id: String,
    /// Salesperson's label (e.g., "3").
    pub label: Option<String>,
    /// Room/elevation description.
    pub location: String,
    /// Window type name (known type or free text).
    #[serde(rename = "type")]
    pub window_type: String,
    /// Approximate width from import, as text.
    pub approx_width: Option<String>,
    /// Approximate height from import, as text.
    pub approx_height: Option<String>,
    /// Rounded width readings (top, bottom); empty for simple openings.
    pub widths: Vec<f64>,
    /// Rounded height readings (left, right); empty for simple openings.
    pub heights: Vec<f64>,
    /// Final width in inches.
    pub final_w: Option<f64>,
    /// Final height in inches.
    pub final_h: Option<f64>,
    /// Transom shape name.
    pub transom_shape: Option<String>,
    /// Transom height in inches.
    pub transom_height: Option<f64>,
    /// Specification fields.
    #[serde(flatten)]
    pub specs: SpecFields,
    /// Free-form notes.
    pub notes: String,
    /// Measurement status.
    pub status: WindowStatus,
}

impl WindowRecord {
    /// Create a new pending window.
    pub fn new(id: impl Into<String>, location: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            location: location.into(),
            ..Default::default()
        }
    }

    /// Parsed window type, if one is set.
    pub fn parsed_type(&self) -> Option<WindowType> {
        WindowType::parse(&self.window_type)
    }

    /// Final size, if both dimensions are stored.
    pub fn final_size(&self) -> Option<FinalSize> {
        match (self.final_w, self.final_h) {
            (Some(w), Some(h)) => Some(FinalSize::new(w, h)),
            _ => None,
        }
    }

    /// Stored corner readings, if present.
    pub fn corners(&self) -> Option<Corners> {
        Corners::from_slices(&self.widths, &self.heights)
    }

    /// Check if the window has been measured.
    pub fn is_measured(&self) -> bool {
        self.status == WindowStatus::Measured
    }

    /// Header text used by exports ("#3 - Kitchen" or "Window: Kitchen").
    pub fn heading(&self) -> String {
        match &self.label {
            Some(label) => format!("#{} - {}", label, self.location),
            None => format!("Window: {}", self.location),
        }
    }

    /// Write a saved measurement into this record and mark it measured.
    pub fn apply_measurement(&mut self, measured: &MeasuredWindow) {
        self.location = measured.location.clone();
        self.window_type = measured.window_type.clone();
        self.notes = measured.notes.clone();
        self.specs = measured.specs.clone();
        match &measured.corners {
            Some(corners) => {
                self.widths = corners.widths();
                self.heights = corners.heights();
            }
            None => {
                self.widths.clear();
                self.heights.clear();
            }
        }
        self.final_w = Some(measured.final_size.width);
        self.final_h = Some(measured.final_size.height);
        self.transom_shape = measured.transom.as_ref().map(|t| t.shape.clone());
        self.transom_height = measured.transom.as_ref().map(|t| t.height);
        self.status = WindowStatus::Measured;
    }
}

/// Authoritative result of saving the measurement form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeasuredWindow {
    pub location: String,
    pub window_type: String,
    pub notes: String,
    /// Rounded corner readings (detailed openings only).
    pub corners: Option<Corners>,
    pub final_size: FinalSize,
    pub transom: Option<Transom>,
    pub specs: SpecFields,
}

/// A job (purchase order) and its windows.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Job {
    pub po_number: String,
    pub client_name: Option<String>,
    pub address: Option<String>,
    pub status: JobStatus,
    pub windows: Vec<WindowRecord>,
}

impl Job {
    /// Create an empty job.
    pub fn new(po_number: impl Into<String>) -> Self {
        Self {
            po_number: po_number.into(),
            ..Default::default()
        }
    }

    /// Number of measured windows.
    pub fn measured_count(&self) -> usize {
        self.windows.iter().filter(|w| w.is_measured()).count()
    }

    /// Check if the job has windows and every one is measured.
    pub fn is_fully_measured(&self) -> bool {
        !self.windows.is_empty() && self.windows.iter().all(WindowRecord::is_measured)
    }

    /// Find a window by id.
    pub fn find_window(&self, id: &str) -> Option<&WindowRecord> {
        self.windows.iter().find(|w| w.id == id)
    }

    /// Find a window by id for update.
    pub fn find_window_mut(&mut self, id: &str) -> Option<&mut WindowRecord> {
        self.windows.iter_mut().find(|w| w.id == id)
    }

    /// Store a saved measurement on the window with this id.
    ///
    /// A job in the measuring stage completes once its last window is measured.
    pub fn record_measurement(&mut self, id: &str, measured: &MeasuredWindow) -> Result<()> {
        let window = self
            .find_window_mut(id)
            .ok_or_else(|| MeasureError::WindowNotFound { id: id.to_string() })?;
        window.apply_measurement(measured);

        if self.status == JobStatus::Measuring && self.is_fully_measured() {
            debug!("All windows measured, job {} complete", self.po_number);
            self.status = JobStatus::Complete;
        }
        Ok(())
    }
}
