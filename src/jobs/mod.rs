//! FASTA-to-AlphaFold3 job conversion.
//!
//! The pipeline runs strictly forward, one input file at a time:
//!
//! 1. [`parsing::fasta`](crate::parsing::fasta) turns text into records
//! 2. [`sanitize`] filters each sequence to the 20 standard residues
//! 3. [`chain_ids`] assigns chain identifiers
//! 4. [`builder`] groups records into jobs (combined or split)
//! 5. [`writer`] writes each job and the `total_jobs.txt` sidecar
//!
//! [`run`] drives the pipeline over a file or a directory of files.
//!
//! ## Example
//!
//! ```rust
//! use af3_prep::core::record::{Batch, Record};
//! use af3_prep::core::types::GroupingMode;
//! use af3_prep::jobs::builder::JobBuilder;
//!
//! let batch = Batch::new("dimer.fasta", "dimer", vec![
//!     Record::new("seq1", "ACDEFG"),
//!     Record::new("seq2", "GGHIKL"),
//! ]);
//! let jobs = JobBuilder::new(&[1], GroupingMode::Combined).build(&batch);
//! assert_eq!(jobs[0].chain_ids(), vec!["A", "B"]);
//! ```

use std::path::PathBuf;

use thiserror::Error;

pub mod builder;
pub mod chain_ids;
pub mod run;
pub mod sanitize;
pub mod writer;

#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("Skipping {path}: {reason}", path = path.display())]
    MalformedInput { path: PathBuf, reason: String },

    #[error("Skipping {}: not a recognized FASTA extension", .0.display())]
    UnsupportedExtension(PathBuf),

    #[error("{} is neither a file nor a directory", .0.display())]
    PathKindMismatch(PathBuf),

    #[error("Failed to list directory {path}: {source}", path = path.display())]
    ReadDirectory {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write {path}: {source}", path = path.display())]
    WriteFailure {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ConvertError {
    /// Whether the run can skip the offending file and continue
    #[must_use]
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::MalformedInput { .. } | Self::UnsupportedExtension(_)
        )
    }
}
