//! Job file (JSON) loading and saving.

use crate::error::{MeasureError, Result};
use crate::model::Job;
use std::path::Path;
use tracing::debug;

/// Parse a job file.
pub fn parse_job_file(path: &Path) -> Result<Job> {
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

    let job: Job = serde_json::from_str(&content)?;
    debug!(
        "Loaded job {} with {} window(s)",
        job.po_number,
        job.windows.len()
    );
    Ok(job)
}

/// Write a job file as pretty-printed JSON.
pub fn write_job_file(job: &Job, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(job)?;
    std::fs::write(path, json)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::WindowRecord;

    #[test]
    fn test_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("job.json");

        let mut job = Job::new("PO-9");
        job.windows.push(WindowRecord::new("w1", "Kitchen"));
        write_job_file(&job, &path).unwrap();

        let loaded = parse_job_file(&path).unwrap();
        assert_eq!(loaded, job);
    }

    #[test]
    fn test_missing_file() {
        let err = parse_job_file(Path::new("/nonexistent/job.json")).unwrap_err();
        assert!(matches!(err, MeasureError::FileNotFound { .. }));
    }

    #[test]
    fn test_empty_file() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let err = parse_job_file(file.path()).unwrap_err();
        assert!(matches!(err, MeasureError::EmptyFile { .. }));
    }

    #[test]
    fn test_invalid_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("job.json");
        std::fs::write(&path, "{ not json").unwrap();
        let err = parse_job_file(&path).unwrap_err();
        assert!(matches!(err, MeasureError::Json(_)));
    }
}
