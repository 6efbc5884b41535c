//! Spreadsheet (CSV) import of approximate window sizes.
//!
//! Salesperson sheets vary: a few metadata rows (PO, client, address) sit
//! above a header row whose column names are matched loosely. Sheets
//! without a recognizable header fall back to a fixed column order.

use super::parse_dimension;
use crate::config::HEADER_SCAN_ROWS;
use crate::error::{MeasureError, Result};
use crate::model::{Job, SpecFields, WindowRecord, WindowStatus, WindowType};
use std::collections::HashMap;
use std::path::Path;
use tracing::{debug, warn};

/// Columns recognized in an import sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
    Label,
    Width,
    Height,
    TransomHeight,
    TransomShape,
    Style,
    GridStyle,
    Temper,
    OutsideColor,
    InsideColor,
    Screen,
    Notes,
}

impl Column {
    /// All columns, in matching priority and default sheet order.
    pub const ALL: [Column; 12] = [
        Column::Label,
        Column::Width,
        Column::Height,
        Column::TransomHeight,
        Column::TransomShape,
        Column::Style,
        Column::GridStyle,
        Column::Temper,
        Column::OutsideColor,
        Column::InsideColor,
        Column::Screen,
        Column::Notes,
    ];

    /// Lowercase header texts that identify this column.
    pub fn aliases(self) -> &'static [&'static str] {
        match self {
            Column::Label => &["label", "window", "win", "#", "no", "number"],
            Column::Width => &["width", "width inches", "w", "width (inches)"],
            Column::Height => &["height", "height inches", "h", "height (inches)"],
            Column::TransomHeight => &["transom height", "transom height inches", "transom h"],
            Column::TransomShape => &["transom shape", "transom"],
            Column::Style => &["style"],
            Column::GridStyle => &["grid style", "grid", "grids"],
            Column::Temper => &["temper", "tempered", "glass"],
            Column::OutsideColor => &[
                "outside color",
                "ext color",
                "exterior color",
                "outside",
                "ext",
            ],
            Column::InsideColor => &["inside color", "int color", "interior color", "inside", "int"],
            Column::Screen => &["screen", "screens"],
            Column::Notes => &["notes", "note", "comments", "comment"],
        }
    }

    fn matches(self, cell: &str) -> bool {
        self.aliases()
            .iter()
            .any(|alias| cell == *alias || cell.contains(*alias))
    }
}

type ColumnMap = HashMap<Column, usize>;

/// Load a CSV import sheet from disk.
pub fn parse_spreadsheet_file(path: &Path) -> Result<Job> {
    if !path.exists() {
        return Err(MeasureError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let content = std::fs::read_to_string(path)?;
    if content.trim().is_empty() {
        return Err(MeasureError::EmptyFile {
            path: path.to_path_buf(),
        });
    }

    parse_spreadsheet(&content)
}

/// Parse CSV sheet content into a job of pending windows.
pub fn parse_spreadsheet(content: &str) -> Result<Job> {
    let rows = read_rows(content)?;

    let (header_idx, columns) = match find_header(&rows) {
        Some((idx, columns)) => {
            debug!("Header row found at line {}", idx + 1);
            (Some(idx), columns)
        }
        None => {
            debug!("No header row, using default column order");
            (guess_header_row(&rows), default_columns())
        }
    };

    let metadata_end = header_idx.unwrap_or(0);
    let mut job = read_metadata(&rows[..metadata_end.min(rows.len())]);

    let data_start = header_idx.map_or(0, |idx| idx + 1);
    for (offset, row) in rows.iter().enumerate().skip(data_start) {
        if let Some(window) = read_window(row, &columns, offset + 1, job.windows.len() + 1) {
            job.windows.push(window);
        }
    }

    debug!("Imported {} window(s)", job.windows.len());
    Ok(job)
}

fn read_rows(content: &str) -> Result<Vec<Vec<String>>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(content.as_bytes());

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        rows.push(record.iter().map(|cell| cell.trim().to_string()).collect());
    }
    Ok(rows)
}

/// Find a header row with a label column and a width-like column.
fn find_header(rows: &[Vec<String>]) -> Option<(usize, ColumnMap)> {
    rows.iter()
        .take(HEADER_SCAN_ROWS)
        .enumerate()
        .find_map(|(idx, row)| {
            let cells: Vec<String> = row.iter().map(|c| c.to_lowercase()).collect();

            let has_label = cells
                .iter()
                .any(|c| Column::Label.aliases().contains(&c.as_str()));
            let has_width = cells.iter().any(|c| {
                Column::Width.aliases().contains(&c.as_str()) || c.contains("width")
            });

            (has_label && has_width).then(|| (idx, map_columns(&cells)))
        })
}

/// Map header cells to columns; the first column to claim a cell wins.
fn map_columns(cells: &[String]) -> ColumnMap {
    let mut columns = ColumnMap::new();
    for (idx, cell) in cells.iter().enumerate() {
        if cell.is_empty() {
            continue;
        }
        if let Some(column) = Column::ALL
            .into_iter()
            .find(|col| !columns.contains_key(col) && col.matches(cell))
        {
            columns.insert(column, idx);
        }
    }
    columns
}

fn default_columns() -> ColumnMap {
    Column::ALL
        .into_iter()
        .enumerate()
        .map(|(idx, col)| (col, idx))
        .collect()
}

/// Without a header, assume it sits just above the first row numbered in column A.
fn guess_header_row(rows: &[Vec<String>]) -> Option<usize> {
    let first_data = rows.iter().position(|row| {
        row.first()
            .and_then(|c| c.parse::<f64>().ok())
            .is_some_and(|n| n > 0.0)
    })?;
    first_data.checked_sub(1)
}

/// Read PO, client and address labels from the rows above the header.
fn read_metadata(rows: &[Vec<String>]) -> Job {
    let mut job = Job::default();

    for row in rows {
        let mut labelled = false;

        for (idx, cell) in row.iter().enumerate() {
            let lower = cell.to_lowercase();
            let Some(next) = row.get(idx + 1).filter(|n| !n.is_empty()) else {
                continue;
            };

            if lower.contains("po") {
                job.po_number = next.clone();
                labelled = true;
            }
            if lower.contains("client") || lower.contains("customer") {
                job.client_name = Some(next.clone());
                labelled = true;
            }
            if lower.contains("address") {
                job.address = Some(next.clone());
                labelled = true;
            }
        }

        if job.client_name.is_none() && !labelled {
            if let Some(first) = row.first().filter(|c| looks_like_name(c)) {
                job.client_name = Some(first.clone());
            }
        }
    }

    if job.po_number.is_empty() {
        if let Some(client) = &job.client_name {
            job.po_number = client.clone();
        }
    }

    job
}

fn looks_like_name(cell: &str) -> bool {
    let lower = cell.to_lowercase();
    cell.chars().count() > 2
        && cell.chars().any(|c| c.is_ascii_alphabetic())
        && !["windows", "label", "width", "height"]
            .iter()
            .any(|k| lower.contains(k))
}

fn none_to_null(value: &str) -> Option<String> {
    if value.is_empty() || value.eq_ignore_ascii_case("none") {
        None
    } else {
        Some(value.to_string())
    }
}

fn non_empty(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_string())
}

/// Build a pending window from a data row, skipping empty rows.
fn read_window(row: &[String], columns: &ColumnMap, line: usize, seq: usize) -> Option<WindowRecord> {
    let get = |column: Column| {
        columns
            .get(&column)
            .and_then(|&idx| row.get(idx))
            .map(String::as_str)
            .unwrap_or("")
    };

    let label = get(Column::Label);
    let width = get(Column::Width);
    let height = get(Column::Height);
    if label.is_empty() && width.is_empty() && height.is_empty() {
        return None;
    }

    let transom_raw = get(Column::TransomHeight);
    let transom_height = if transom_raw.is_empty() {
        None
    } else {
        match parse_dimension(transom_raw) {
            Ok(h) if h > 0.0 => Some(h),
            Ok(_) => None,
            Err(e) => {
                warn!("Line {}: ignoring transom height: {}", line, e);
                None
            }
        }
    };

    let style = get(Column::Style);
    let normalized_style = if style.eq_ignore_ascii_case("half round") {
        "Half-Round"
    } else {
        style
    };
    let window_type = match WindowType::parse(normalized_style) {
        Some(WindowType::Other(_)) | None => String::new(),
        Some(known) => known.name().to_string(),
    };

    Some(WindowRecord {
        id: format!("w{}", seq),
        label: non_empty(label),
        location: if label.is_empty() {
            String::new()
        } else {
            format!("Window {}", label)
        },
        window_type,
        approx_width: non_empty(width),
        approx_height: non_empty(height),
        transom_shape: none_to_null(get(Column::TransomShape)),
        transom_height,
        specs: SpecFields {
            style: non_empty(style),
            grid_style: none_to_null(get(Column::GridStyle)),
            temper: none_to_null(get(Column::Temper)),
            outside_color: non_empty(get(Column::OutsideColor)),
            inside_color: non_empty(get(Column::InsideColor)),
            screen: none_to_null(get(Column::Screen)),
        },
        notes: get(Column::Notes).to_string(),
        status: WindowStatus::Pending,
        ..Default::default()
    })
}
