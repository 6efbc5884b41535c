//! Export document generators.

mod report;
mod sheet;

pub use report::generate_report;
pub use sheet::{generate_sheet, SHEET_COLUMNS};
