//! Plain-text measurement report.

use crate::config::ExportConfig;
use crate::error::Result;
use crate::measure::{format_inches, format_size};
use crate::model::{Job, WindowRecord};
use std::fmt::Write;

/// Generate the measurement report for a job.
pub fn generate_report(job: &Job, config: &ExportConfig) -> Result<String> {
    let mut output = String::new();

    generate_header(&mut output, config)?;

    for window in &job.windows {
        writeln!(output)?;
        generate_window_block(&mut output, window)?;
    }

    writeln!(output)?;
    writeln!(
        output,
        "Total: {} windows, {} measured",
        job.windows.len(),
        job.measured_count()
    )?;

    Ok(output)
}

fn generate_header(output: &mut String, config: &ExportConfig) -> Result<()> {
    writeln!(output, "{}", config.title)?;
    writeln!(output, "PO Number: {}", config.po_number)?;
    if let Some(client) = &config.client_name {
        writeln!(output, "{}", client)?;
    }
    if let Some(address) = &config.address {
        writeln!(output, "{}", address)?;
    }
    Ok(())
}

fn generate_window_block(output: &mut String, window: &WindowRecord) -> Result<()> {
    writeln!(output, "{}", window.heading())?;

    let window_type = if window.window_type.is_empty() {
        "—"
    } else {
        window.window_type.as_str()
    };
    writeln!(output, "  Type: {}", window_type)?;

    let size = window
        .final_size()
        .map(|s| format_size(&s))
        .unwrap_or_else(|| "Not measured".to_string());
    writeln!(output, "  Final Size (Width × Height): {}", size)?;

    let specs = window.specs.labelled();
    if !specs.is_empty() {
        let line: Vec<String> = specs
            .iter()
            .map(|(label, value)| format!("{}: {}", label, value))
            .collect();
        writeln!(output, "  {}", line.join("  |  "))?;
    }

    if let Some(height) = window.transom_height {
        writeln!(output, "  Transom")?;
        writeln!(
            output,
            "    Shape: {}  Height: {}",
            window.transom_shape.as_deref().unwrap_or("—"),
            format_inches(height)
        )?;
    }

    if !window.notes.is_empty() {
        writeln!(output, "  Notes")?;
        for line in window.notes.lines() {
            writeln!(output, "    {}", line)?;
        }
    }

    if let Some(corners) = window.corners() {
        writeln!(output, "  Reference Measurements")?;
        writeln!(
            output,
            "    Width Top: {}  Height Left: {}",
            format_inches(corners.width_top),
            format_inches(corners.height_left)
        )?;
        writeln!(
            output,
            "    Width Bottom: {}  Height Right: {}",
            format_inches(corners.width_bottom),
            format_inches(corners.height_right)
        )?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::WindowStatus;

    fn job() -> Job {
        let mut measured = WindowRecord::new("w1", "Kitchen");
        measured.label = Some("1".to_string());
        measured.window_type = "Double Hung".to_string();
        measured.status = WindowStatus::Measured;
        measured.widths = vec![35.625, 35.75];
        measured.heights = vec![52.0, 52.125];
        measured.final_w = Some(35.625);
        measured.final_h = Some(52.0);
        measured.transom_shape = Some("Rectangular".to_string());
        measured.transom_height = Some(12.5);

        let pending = WindowRecord::new("w2", "Den");

        let mut job = Job::new("PO-77");
        job.windows = vec![measured, pending];
        job
    }

    #[test]
    fn test_report_header() {
        let mut config = ExportConfig::new("PO-77");
        config.client_name = Some("Smith".to_string());
        let report = generate_report(&job(), &config).unwrap();
        assert!(report.starts_with("Window Measurement Report\nPO Number: PO-77\nSmith\n"));
    }

    #[test]
    fn test_report_measured_block() {
        let report = generate_report(&job(), &ExportConfig::new("PO-77")).unwrap();
        assert!(report.contains("#1 - Kitchen\n"));
        assert!(report.contains("Final Size (Width × Height): 35 5/8\" × 52\""));
        assert!(report.contains("Shape: Rectangular  Height: 12 1/2\""));
        assert!(report.contains("Width Bottom: 35 3/4\"  Height Right: 52 1/8\""));
    }

    #[test]
    fn test_report_pending_block() {
        let report = generate_report(&job(), &ExportConfig::new("PO-77")).unwrap();
        assert!(report.contains("Window: Den\n  Type: —\n  Final Size (Width × Height): Not measured\n"));
        assert!(report.ends_with("Total: 2 windows, 1 measured\n"));
    }
}
