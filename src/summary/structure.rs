//! Summarize predicted structures: mean pLDDT and STRIDE secondary-structure
//! counts per model.
//!
//! STRIDE is only run when an executable is configured. Without it, or when
//! it fails for a model, that model's secondary-structure columns are empty.

use std::path::{Path, PathBuf};
use std::process::Command;

use serde::Serialize;
use tracing::{info, warn};

use crate::parsing::pdb::{mean, parse_b_factors_file};
use crate::parsing::stride::{parse_stride_report, SecondaryStructureCounts};
use crate::summary::{entity_id, list_files, ColumnStats, SummaryError};

/// Suffix of structure files
pub const PDB_SUFFIX: &str = ".pdb";

/// Default output table name
pub const DEFAULT_OUTPUT: &str = "structure_analysis_results.csv";

const PROGRESS_INTERVAL: usize = 10;

/// One row of the structure summary table
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StructureSummary {
    pub protein_id: String,
    #[serde(rename = "pLDDT")]
    pub plddt: Option<f64>,
    #[serde(rename = "H")]
    pub alpha_helix: Option<u32>,
    #[serde(rename = "G")]
    pub helix_310: Option<u32>,
    #[serde(rename = "I")]
    pub pi_helix: Option<u32>,
    #[serde(rename = "E")]
    pub strand: Option<u32>,
    #[serde(rename = "B")]
    pub bridge: Option<u32>,
    #[serde(rename = "T")]
    pub turn: Option<u32>,
    #[serde(rename = "C")]
    pub coil: Option<u32>,
    #[serde(rename = "S")]
    pub bend: Option<u32>,
}

impl StructureSummary {
    pub fn new(
        protein_id: impl Into<String>,
        plddt: Option<f64>,
        counts: Option<SecondaryStructureCounts>,
    ) -> Self {
        Self {
            protein_id: protein_id.into(),
            plddt,
            alpha_helix: counts.map(|c| c.alpha_helix),
            helix_310: counts.map(|c| c.helix_310),
            pi_helix: counts.map(|c| c.pi_helix),
            strand: counts.map(|c| c.strand),
            bridge: counts.map(|c| c.bridge),
            turn: counts.map(|c| c.turn),
            coil: counts.map(|c| c.coil),
            bend: counts.map(|c| c.bend),
        }
    }

    /// Count for one STRIDE code column
    #[must_use]
    pub fn code_count(&self, code: char) -> Option<u32> {
        match code {
            'H' => self.alpha_helix,
            'G' => self.helix_310,
            'I' => self.pi_helix,
            'E' => self.strand,
            'B' => self.bridge,
            'T' => self.turn,
            'C' => self.coil,
            'S' => self.bend,
            _ => None,
        }
    }
}

/// Runs STRIDE on structure files
#[derive(Debug, Clone)]
pub struct StrideRunner {
    executable: PathBuf,
}

impl StrideRunner {
    pub fn new(executable: impl Into<PathBuf>) -> Self {
        Self {
            executable: executable.into(),
        }
    }

    /// Run STRIDE on `pdb` and tally its assignments.
    ///
    /// # Errors
    ///
    /// Returns `SummaryError::Stride` if the program cannot be started or
    /// exits unsuccessfully.
    pub fn run(&self, pdb: &Path) -> Result<SecondaryStructureCounts, SummaryError> {
        let output = Command::new(&self.executable)
            .arg(pdb)
            .output()
            .map_err(|e| SummaryError::Stride {
                path: pdb.to_path_buf(),
                reason: format!("failed to run {}: {e}", self.executable.display()),
            })?;

        if !output.status.success() {
            return Err(SummaryError::Stride {
                path: pdb.to_path_buf(),
                reason: format!(
                    "{} exited with {}: {}",
                    self.executable.display(),
                    output.status,
                    String::from_utf8_lossy(&output.stderr).trim()
                ),
            });
        }

        Ok(parse_stride_report(&String::from_utf8_lossy(&output.stdout)))
    }
}

/// Result of summarizing a directory
#[derive(Debug, Clone, Default)]
pub struct StructureReport {
    pub rows: Vec<StructureSummary>,
    /// Files whose coordinates could not be read
    pub failed: Vec<PathBuf>,
}

impl StructureReport {
    /// Column statistics for `pLDDT`
    #[must_use]
    pub fn plddt_stats(&self) -> Option<ColumnStats> {
        ColumnStats::from_values(self.rows.iter().map(|r| r.plddt))
    }

    /// Column statistics for one STRIDE code
    #[must_use]
    pub fn code_stats(&self, code: char) -> Option<ColumnStats> {
        ColumnStats::from_values(
            self.rows
                .iter()
                .map(|r| r.code_count(code).map(f64::from)),
        )
    }
}

/// Summarize one structure file
///
/// # Errors
///
/// Returns `SummaryError::Parse` if the structure file cannot be read.
pub fn summarize_file(
    path: &Path,
    stride: Option<&StrideRunner>,
) -> Result<StructureSummary, SummaryError> {
    let b_factors = parse_b_factors_file(path).map_err(|source| SummaryError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    let plddt = mean(&b_factors);
    if plddt.is_none() {
        warn!("No B-factors found in {}", path.display());
    }

    let counts = stride.and_then(|runner| match runner.run(path) {
        Ok(counts) => Some(counts),
        Err(e) => {
            warn!("{e}");
            None
        }
    });

    Ok(StructureSummary::new(entity_id(path), plddt, counts))
}

/// Summarize every structure file in `pdb_dir`.
///
/// # Errors
///
/// Returns `SummaryError::Io` if the directory cannot be listed.
pub fn summarize_dir(
    pdb_dir: &Path,
    stride: Option<&StrideRunner>,
) -> Result<StructureReport, SummaryError> {
    let files = list_files(pdb_dir, PDB_SUFFIX)?;
    info!("Found {} PDB files to process in '{}'", files.len(), pdb_dir.display());

    let mut report = StructureReport::default();
    for path in &files {
        match summarize_file(path, stride) {
            Ok(row) => report.rows.push(row),
            Err(e) => {
                warn!("Failed to process {}: {e}", path.display());
                report.failed.push(path.clone());
            }
        }

        let done = report.rows.len();
        if done > 0 && done % PROGRESS_INTERVAL == 0 {
            info!("Processed {done}/{} files...", files.len());
        }
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::stride::STRIDE_CODES;
    use tempfile::tempdir;

    const ATOMS: &str = "\
ATOM      1  N   MET A   1      11.104   6.134  -6.504  1.00 90.00           N
ATOM      2  CA  MET A   1      11.639   6.071  -5.147  1.00 70.00           C
";

    #[test]
    fn test_summarize_without_stride() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("model_a.pdb");
        std::fs::write(&path, ATOMS).unwrap();

        let row = summarize_file(&path, None).unwrap();
        assert_eq!(row.protein_id, "model_a");
        assert_eq!(row.plddt, Some(80.0));
        assert_eq!(row.alpha_helix, None);
    }

    #[test]
    fn test_missing_stride_executable() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("m.pdb");
        std::fs::write(&path, ATOMS).unwrap();

        let runner = StrideRunner::new(dir.path().join("no-such-stride"));
        assert!(matches!(runner.run(&path), Err(SummaryError::Stride { .. })));

        // A failing STRIDE leaves the counts empty but keeps the row
        let row = summarize_file(&path, Some(&runner)).unwrap();
        assert_eq!(row.plddt, Some(80.0));
        assert_eq!(row.coil, None);
    }

    #[test]
    fn test_csv_header_and_empty_cells() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("out.csv");
        let counts = SecondaryStructureCounts {
            alpha_helix: 3,
            coil: 1,
            ..SecondaryStructureCounts::default()
        };
        let rows = vec![
            StructureSummary::new("a", Some(85.5), Some(counts)),
            StructureSummary::new("b", None, None),
        ];
        crate::summary::write_csv(&out, &rows).unwrap();

        let text = std::fs::read_to_string(&out).unwrap();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines[0], "protein_id,pLDDT,H,G,I,E,B,T,C,S");
        assert_eq!(lines[1], "a,85.5,3,0,0,0,0,0,1,0");
        assert_eq!(lines[2], "b,,,,,,,,,");
    }

    #[test]
    fn test_summarize_dir_and_stats() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("a.pdb"), ATOMS).unwrap();
        std::fs::write(
            dir.path().join("b.pdb"),
            ATOMS.replace("90.00", "50.00").replace("70.00", "30.00"),
        )
        .unwrap();
        std::fs::write(dir.path().join("notes.txt"), ATOMS).unwrap();

        let report = summarize_dir(dir.path(), None).unwrap();
        assert_eq!(report.rows.len(), 2);
        assert!(report.failed.is_empty());

        let stats = report.plddt_stats().unwrap();
        assert_eq!(stats.count, 2);
        assert_eq!(stats.mean, 60.0);
        assert_eq!(stats.min, 40.0);
        assert_eq!(stats.max, 80.0);
        assert!(STRIDE_CODES.iter().all(|c| report.code_stats(*c).is_none()));
    }
}
