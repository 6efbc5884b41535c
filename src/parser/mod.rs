//! Parsers for dimension text, import sheets and job files.

mod dimension;
mod job;
mod spreadsheet;

pub use dimension::parse_dimension;
pub use job::{parse_job_file, write_job_file};
pub use spreadsheet::{parse_spreadsheet, parse_spreadsheet_file, Column};
