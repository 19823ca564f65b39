//! Parsers for the file formats handled by the toolchain.
//!
//! - **FASTA** (`.fasta`, `.fas`, `.fa`, `.faa`, optionally gzipped): records for job building
//! - **IUPred3 tables**: tab-separated `position / residue / score` rows
//! - **PDB**: per-atom B-factors (pLDDT for predicted models)
//! - **STRIDE reports**: per-residue secondary-structure assignments
//!
//! ## Example
//!
//! ```rust
//! use af3_prep::parsing::fasta::parse_fasta_text;
//!
//! let records = parse_fasta_text(">seq1\nACDEFG\n>seq2\nGGHIKL\n").unwrap();
//! assert_eq!(records.len(), 2);
//! assert_eq!(records[1].label, "seq2");
//! ```

use thiserror::Error;

pub mod fasta;
pub mod iupred;
pub mod pdb;
pub mod stride;

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("File is not valid UTF-8 text: {0}")]
    InvalidEncoding(#[from] std::string::FromUtf8Error),

    #[error("Invalid format: {0}")]
    InvalidFormat(String),

    #[error("Too many records: {0} exceeds maximum allowed (100000)")]
    TooManyRecords(usize),
}
