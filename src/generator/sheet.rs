//! Spreadsheet (CSV) export of a job.

use crate::config::{ExportConfig, INCH_MARK};
use crate::error::Result;
use crate::measure::format_as_fraction;
use crate::model::{Job, WindowRecord};

/// Column headers of the exported sheet.
pub const SHEET_COLUMNS: [&str; 14] = [
    "Label",
    "Location",
    "Type",
    "Approx W",
    "Approx H",
    "Final W",
    "Final H",
    "Grid",
    "Temper",
    "Screen",
    "Ext Color",
    "Int Color",
    "Notes",
    "Status",
];

/// Generate the CSV sheet for a job.
pub fn generate_sheet(job: &Job, config: &ExportConfig) -> Result<String> {
    let mut writer = csv::WriterBuilder::new()
        .flexible(true)
        .from_writer(Vec::new());

    writer.write_record([config.title.as_str()])?;

    let mut info = vec![format!("PO: {}", config.po_number)];
    if let Some(client) = &config.client_name {
        info.push(format!("Client: {}", client));
    }
    writer.write_record(&info)?;

    if let Some(address) = &config.address {
        writer.write_record([format!("Address: {}", address)])?;
    }

    writer.write_record(SHEET_COLUMNS)?;
    for window in &job.windows {
        writer.write_record(window_row(window))?;
    }

    let mut summary = vec![String::new(); SHEET_COLUMNS.len()];
    summary[SHEET_COLUMNS.len() - 2] = format!(
        "Total: {} windows, {} measured",
        job.windows.len(),
        job.measured_count()
    );
    writer.write_record(&summary)?;

    let bytes = writer.into_inner().map_err(|e| e.into_error())?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

fn dimension_cell(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{}{}", format_as_fraction(Some(v)), INCH_MARK),
        None => String::new(),
    }
}

fn window_row(window: &WindowRecord) -> [String; 14] {
    let text = |value: &Option<String>| value.clone().unwrap_or_default();
    [
        text(&window.label),
        window.location.clone(),
        window.window_type.clone(),
        text(&window.approx_width),
        text(&window.approx_height),
        dimension_cell(window.final_w),
        dimension_cell(window.final_h),
        text(&window.specs.grid_style),
        text(&window.specs.temper),
        text(&window.specs.screen),
        text(&window.specs.outside_color),
        text(&window.specs.inside_color),
        window.notes.clone(),
        window.status.to_string(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::WindowStatus;
    use pretty_assertions::assert_eq;

    fn read_back(sheet: &str) -> Vec<Vec<String>> {
        csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(sheet.as_bytes())
            .records()
            .map(|r| r.unwrap().iter().map(String::from).collect())
            .collect()
    }

    #[test]
    fn test_sheet_rows() {
        let mut window = WindowRecord::new("w1", "Kitchen");
        window.label = Some("1".to_string());
        window.window_type = "Round".to_string();
        window.approx_width = Some("24".to_string());
        window.final_w = Some(24.0);
        window.final_h = Some(24.5);
        window.status = WindowStatus::Measured;
        window.notes = "Arched, see photo".to_string();

        let mut job = Job::new("PO-3");
        job.windows.push(window);
        job.windows.push(WindowRecord::new("w2", "Den"));

        let mut config = ExportConfig::new("PO-3");
        config.client_name = Some("Lee".to_string());
        let rows = read_back(&generate_sheet(&job, &config).unwrap());

        assert_eq!(rows[0], vec!["Window Measurement Report"]);
        assert_eq!(rows[1], vec!["PO: PO-3", "Client: Lee"]);
        assert_eq!(rows[2], SHEET_COLUMNS.to_vec());
        assert_eq!(
            rows[3],
            vec![
                "1", "Kitchen", "Round", "24", "", "24\"", "24 1/2\"", "", "", "", "", "",
                "Arched, see photo", "measured"
            ]
        );
        assert_eq!(rows[4][1], "Den");
        assert_eq!(rows[4][5], "");
        assert_eq!(rows[4][13], "pending");
        assert_eq!(rows[5][12], "Total: 2 windows, 1 measured");
    }

    #[test]
    fn test_sheet_address_row() {
        let mut config = ExportConfig::new("PO-3");
        config.address = Some("1 Main St".to_string());
        let rows = read_back(&generate_sheet(&Job::new("PO-3"), &config).unwrap());
        assert_eq!(rows[2], vec!["Address: 1 Main St"]);
        assert_eq!(rows[3], SHEET_COLUMNS.to_vec());
    }
}
