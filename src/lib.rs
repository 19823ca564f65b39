//! # af3-prep
//!
//! A library for preparing AlphaFold3 prediction jobs from FASTA files and
//! summarizing the per-residue results of downstream tools.
//!
//! A FASTA file can hold either the chains of one complex or a set of
//! unrelated proteins. `af3-prep` turns it into AlphaFold3 JSON job files,
//! either one multi-chain job per file or one job per sequence, and records
//! the number of jobs written for array-job submission.
//!
//! ## Features
//!
//! - **Deterministic chain IDs**: `A..Z`, then `AA`, `AB`, ...
//! - **Residue filtering**: sequences keep only the 20 standard amino acids
//! - **Stable job names**: split jobs embed a zero-padded record index
//! - **Summaries**: IUPred3 disorder and pLDDT / STRIDE tables per protein
//!
//! ## Example
//!
//! ```rust,no_run
//! use af3_prep::{ConvertConfig, GroupingMode};
//! use af3_prep::jobs::run::run;
//!
//! let config = ConvertConfig::new("proteins.fasta", "af3_jobs/")
//!     .with_mode(GroupingMode::Split)
//!     .with_model_seeds(vec![1, 2, 3]);
//!
//! let summary = run(&config).unwrap();
//! println!("{} jobs, count in {}", summary.total_jobs(), summary.total_jobs_path.display());
//! ```
//!
//! ## Modules
//!
//! - [`core`]: Records, batches and job documents
//! - [`parsing`]: FASTA, IUPred3, PDB and STRIDE parsers
//! - [`jobs`]: Sanitizing, chain IDs, job building and writing
//! - [`summary`]: Disorder and structure summary tables
//! - [`cli`]: Command-line interface implementation

pub mod cli;
pub mod core;
pub mod jobs;
pub mod parsing;
pub mod summary;
pub mod utils;

// Re-export commonly used types for convenience
pub use core::job::{ChainId, JobDocument, SequenceEntry};
pub use core::record::{Batch, Record};
pub use core::types::*;
pub use jobs::builder::JobBuilder;
pub use jobs::run::{ConvertConfig, RunSummary};
pub use jobs::ConvertError;
