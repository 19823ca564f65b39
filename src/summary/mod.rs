//! Per-entity summary tables built from external tool output.
//!
//! - [`disorder`]: median IUPred3 disorder and fraction of disordered residues
//! - [`structure`]: mean pLDDT and STRIDE secondary-structure counts
//!
//! Entities are named by their file base name, the same convention the job
//! converter uses for job names.

use std::path::{Path, PathBuf};

use serde::Serialize;
use thiserror::Error;

use crate::parsing::ParseError;

pub mod disorder;
pub mod structure;

#[derive(Error, Debug)]
pub enum SummaryError {
    #[error("Failed to read {path}: {source}", path = path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Error processing {path}: {source}", path = path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: ParseError,
    },

    #[error("STRIDE error for {path}: {reason}", path = path.display())]
    Stride { path: PathBuf, reason: String },

    #[error("Failed to write {path}: {source}", path = path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

/// Files directly inside `dir` whose name ends with `suffix`, sorted by path.
///
/// # Errors
///
/// Returns `SummaryError::Io` if the directory cannot be listed.
pub fn list_files(dir: &Path, suffix: &str) -> Result<Vec<PathBuf>, SummaryError> {
    let io_error = |source| SummaryError::Io {
        path: dir.to_path_buf(),
        source,
    };

    let mut files = Vec::new();
    for entry in std::fs::read_dir(dir).map_err(io_error)? {
        let path = entry.map_err(io_error)?.path();
        let matches = path
            .file_name()
            .is_some_and(|name| name.to_string_lossy().ends_with(suffix));
        if matches && path.is_file() {
            files.push(path);
        }
    }

    files.sort();
    Ok(files)
}

/// Entity identifier for a file: its name without the last extension
#[must_use]
pub fn entity_id(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default()
}

/// Write serializable rows as CSV with a header line.
///
/// # Errors
///
/// Returns `SummaryError::Csv` if the file cannot be created or written.
pub fn write_csv<T: Serialize>(path: &Path, rows: &[T]) -> Result<(), SummaryError> {
    let csv_error = |source| SummaryError::Csv {
        path: path.to_path_buf(),
        source,
    };

    let mut writer = csv::Writer::from_path(path).map_err(csv_error)?;
    for row in rows {
        writer.serialize(row).map_err(csv_error)?;
    }
    writer
        .flush()
        .map_err(|e| csv_error(csv::Error::from(e)))?;
    Ok(())
}

/// count / mean / min / max of a column, ignoring missing values
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColumnStats {
    pub count: usize,
    pub mean: f64,
    pub min: f64,
    pub max: f64,
}

impl ColumnStats {
    #[must_use]
    pub fn from_values(values: impl IntoIterator<Item = Option<f64>>) -> Option<Self> {
        let present: Vec<f64> = values.into_iter().flatten().collect();
        if present.is_empty() {
            return None;
        }

        #[allow(clippy::cast_precision_loss)]
        let mean = present.iter().sum::<f64>() / present.len() as f64;
        Some(Self {
            count: present.len(),
            mean,
            min: present.iter().copied().fold(f64::INFINITY, f64::min),
            max: present.iter().copied().fold(f64::NEG_INFINITY, f64::max),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_list_files() {
        let dir = tempdir().unwrap();
        for name in ["b.csv", "a.csv", "c.tsv", "d.CSV"] {
            std::fs::write(dir.path().join(name), "").unwrap();
        }
        let files = list_files(dir.path(), ".csv").unwrap();
        let ids: Vec<_> = files.iter().map(|p| entity_id(p)).collect();
        assert_eq!(ids, vec!["a", "b"]);
    }

    #[test]
    fn test_list_files_missing_dir() {
        let dir = tempdir().unwrap();
        assert!(matches!(
            list_files(&dir.path().join("nope"), ".csv"),
            Err(SummaryError::Io { .. })
        ));
    }

    #[test]
    fn test_column_stats() {
        let stats = ColumnStats::from_values([Some(1.0), None, Some(3.0), Some(2.0)]).unwrap();
        assert_eq!(stats.count, 3);
        assert!((stats.mean - 2.0).abs() < 1e-12);
        assert_eq!(stats.min, 1.0);
        assert_eq!(stats.max, 3.0);

        assert!(ColumnStats::from_values([None, None]).is_none());
    }
}
