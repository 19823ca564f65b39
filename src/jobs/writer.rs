//! Persist job documents and the job-count sidecar.
//!
//! Existing files are overwritten, so re-running a conversion into the same
//! directory replaces its previous output.

use std::path::PathBuf;

use tracing::info;

use crate::core::job::JobDocument;
use crate::jobs::ConvertError;

/// Suffix of every job file
pub const JOB_FILE_SUFFIX: &str = ".json";

/// Name of the job-count sidecar, written one level above the output directory
pub const TOTAL_JOBS_FILE: &str = "total_jobs.txt";

/// Writes job files into one output directory
#[derive(Debug, Clone)]
pub struct JobWriter {
    output_dir: PathBuf,
}

impl JobWriter {
    /// Create the writer, creating `output_dir` and any missing parents.
    ///
    /// # Errors
    ///
    /// Returns `ConvertError::WriteFailure` if the directory cannot be created.
    pub fn create(output_dir: impl Into<PathBuf>) -> Result<Self, ConvertError> {
        let output_dir = output_dir.into();
        std::fs::create_dir_all(&output_dir).map_err(|source| ConvertError::WriteFailure {
            path: output_dir.clone(),
            source,
        })?;
        Ok(Self { output_dir })
    }

    /// Path the given job is written to
    #[must_use]
    pub fn job_path(&self, job: &JobDocument) -> PathBuf {
        self.output_dir.join(format!("{}{JOB_FILE_SUFFIX}", job.name))
    }

    /// Path of the job-count sidecar (`<output_dir>/../total_jobs.txt`)
    #[must_use]
    pub fn total_jobs_path(&self) -> PathBuf {
        self.output_dir.join("..").join(TOTAL_JOBS_FILE)
    }

    /// Write one job as pretty-printed JSON and return its path.
    ///
    /// # Errors
    ///
    /// Returns `ConvertError::WriteFailure` if serialization or the write fails.
    pub fn write_job(&self, job: &JobDocument) -> Result<PathBuf, ConvertError> {
        let path = self.job_path(job);
        let json = job
            .to_json()
            .map_err(|e| ConvertError::WriteFailure {
                path: path.clone(),
                source: e.into(),
            })?;

        std::fs::write(&path, json).map_err(|source| ConvertError::WriteFailure {
            path: path.clone(),
            source,
        })?;

        info!(
            "Created: {} ({} sequence{})",
            path.display(),
            job.sequences.len(),
            if job.sequences.len() == 1 { "" } else { "s" }
        );
        Ok(path)
    }

    /// Write the total job count as a plain decimal number.
    ///
    /// # Errors
    ///
    /// Returns `ConvertError::WriteFailure` if the sidecar cannot be written.
    pub fn write_total_jobs(&self, total: usize) -> Result<PathBuf, ConvertError> {
        let path = self.total_jobs_path();
        std::fs::write(&path, total.to_string()).map_err(|source| {
            ConvertError::WriteFailure {
                path: path.clone(),
                source,
            }
        })?;
        Ok(path)
    }
}
