//! Core value types for FASTA-to-job conversion.
//!
//! - [`Record`]: one label + raw sequence pair from a FASTA file
//! - [`Batch`]: the ordered records of one input file
//! - [`JobDocument`]: an AlphaFold3 job description, one JSON file on disk
//! - [`ChainId`], [`SequenceEntry`]: chain entries inside a job
//! - [`GroupingMode`], [`EmptySequencePolicy`]: run-level policies
//!
//! All of these are built once and not mutated afterwards; each pipeline stage
//! produces new values from the previous stage's output.
//!
//! ## Output Schema
//!
//! ```text
//! {
//!   "name": "complex",
//!   "sequences": [ { "protein": { "id": ["A"], "sequence": "ACDEFG" } } ],
//!   "modelSeeds": [1],
//!   "dialect": "alphafold3",
//!   "version": 1
//! }
//! ```

pub mod job;
pub mod record;
pub mod types;
