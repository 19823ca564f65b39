//! Summarize IUPred3 disorder tables, one row per protein.

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, warn};

use crate::parsing::iupred::{parse_iupred_file, DisorderRow};
use crate::summary::{entity_id, list_files, SummaryError};

/// Scores at or above this value count as disordered
pub const DISORDER_THRESHOLD: f64 = 0.5;

/// Suffix of IUPred3 result files
pub const IUPRED_SUFFIX: &str = ".csv";

/// One row of the disorder summary table
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DisorderSummary {
    pub filename: String,
    pub median_disorder: f64,
    pub fraction_disordered: f64,
}

impl DisorderSummary {
    /// Summarize the rows of one file; None if no score is a number
    #[must_use]
    pub fn from_rows(filename: impl Into<String>, rows: &[DisorderRow]) -> Option<Self> {
        let scores: Vec<f64> = rows.iter().map(|r| r.score).collect();
        let median_disorder = median(&scores)?;

        let disordered = scores.iter().filter(|s| **s >= DISORDER_THRESHOLD).count();
        #[allow(clippy::cast_precision_loss)]
        let fraction_disordered = disordered as f64 / scores.len() as f64;

        Some(Self {
            filename: filename.into(),
            median_disorder,
            fraction_disordered,
        })
    }
}

/// Median of the non-NaN values; the mean of the two middle values when
/// their count is even.
#[must_use]
pub fn median(values: &[f64]) -> Option<f64> {
    let mut sorted: Vec<f64> = values.iter().copied().filter(|v| !v.is_nan()).collect();
    if sorted.is_empty() {
        return None;
    }
    sorted.sort_by(f64::total_cmp);

    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        Some((sorted[mid - 1] + sorted[mid]) / 2.0)
    } else {
        Some(sorted[mid])
    }
}

/// Summarize one IUPred3 file
///
/// # Errors
///
/// Returns `SummaryError::Parse` if the file cannot be read or parsed.
pub fn summarize_file(path: &Path) -> Result<Option<DisorderSummary>, SummaryError> {
    let rows = parse_iupred_file(path).map_err(|source| SummaryError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(DisorderSummary::from_rows(entity_id(path), &rows))
}

/// Result of summarizing a directory
#[derive(Debug, Clone, Default)]
pub struct DisorderReport {
    pub rows: Vec<DisorderSummary>,
    pub failed: Vec<PathBuf>,
}

/// Summarize every IUPred3 file in `input_dir`.
///
/// Files that cannot be parsed are reported and left out of the table.
///
/// # Errors
///
/// Returns `SummaryError::Io` if the directory cannot be listed.
pub fn summarize_dir(input_dir: &Path) -> Result<DisorderReport, SummaryError> {
    let mut report = DisorderReport::default();

    for path in list_files(input_dir, IUPRED_SUFFIX)? {
        match summarize_file(&path) {
            Ok(Some(row)) => {
                debug!(
                    "{}: median {:.3}, disordered {:.3}",
                    row.filename, row.median_disorder, row.fraction_disordered
                );
                report.rows.push(row);
            }
            Ok(None) => {
                warn!("No numeric scores in {}", path.display());
                report.failed.push(path);
            }
            Err(e) => {
                warn!("{e}");
                report.failed.push(path);
            }
        }
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn rows(scores: &[f64]) -> Vec<DisorderRow> {
        scores
            .iter()
            .enumerate()
            .map(|(i, s)| DisorderRow {
                position: i as u64 + 1,
                residue: "M".to_string(),
                score: *s,
            })
            .collect()
    }

    #[test]
    fn test_median() {
        assert_eq!(median(&[0.3, 0.1, 0.2]), Some(0.2));
        assert_eq!(median(&[0.4, 0.1, 0.2, 0.3]), Some(0.25));
        assert_eq!(median(&[f64::NAN, 0.7]), Some(0.7));
        assert_eq!(median(&[]), None);
    }

    #[test]
    fn test_from_rows() {
        let summary = DisorderSummary::from_rows("p1", &rows(&[0.1, 0.5, 0.9, 0.2])).unwrap();
        assert_eq!(summary.filename, "p1");
        assert!((summary.median_disorder - 0.35).abs() < 1e-12);
        assert!((summary.fraction_disordered - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_summarize_dir() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("b.csv"), "1\tM\t0.9\n2\tK\t0.8\n").unwrap();
        std::fs::write(dir.path().join("a.csv"), "# header\n1\tM\t0.1\n").unwrap();
        std::fs::write(dir.path().join("broken.csv"), "1\tM\tx\n").unwrap();
        std::fs::write(dir.path().join("ignored.txt"), "1\tM\t0.5\n").unwrap();

        let report = summarize_dir(dir.path()).unwrap();
        let names: Vec<_> = report.rows.iter().map(|r| r.filename.as_str()).collect();
        assert_eq!(names, vec!["a", "b"]);
        assert_eq!(report.rows[1].fraction_disordered, 1.0);
        assert_eq!(report.failed.len(), 1);
    }
}
