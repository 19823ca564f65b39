//! Command-line interface for af3-prep.
//!
//! This module implements the CLI using clap. Available commands:
//!
//! - **convert**: Turn FASTA files into AlphaFold3 job JSON files
//! - **disorder**: Summarize IUPred3 disorder tables
//! - **structure**: Summarize pLDDT and STRIDE secondary structure of models
//!
//! ## Usage
//!
//! ```text
//! # One job per FASTA file (all sequences predicted as a complex)
//! af3-prep convert input.fasta -o jobs/
//!
//! # One job per sequence, for every FASTA file in a directory
//! af3-prep convert fasta_dir/ -o jobs/ --split
//!
//! # Custom model seeds
//! af3-prep convert input.fasta -o jobs/ --model-seeds 1 2 3 --split
//!
//! # Summaries of downstream tool output
//! af3-prep disorder iupred_results/ disorder_summary.csv
//! af3-prep structure models/ --stride /opt/stride/stride -o structure.csv
//! ```

use clap::{Parser, Subcommand};

pub mod convert;
pub mod disorder;
pub mod structure;

#[derive(Parser)]
#[command(name = "af3-prep")]
#[command(author = "Fulcrum Genomics")]
#[command(version)]
#[command(about = "Prepare AlphaFold3 jobs from FASTA files and summarize prediction results")]
#[command(
    long_about = "af3-prep converts FASTA files into AlphaFold3 JSON job descriptions.\n\nIt can:\n- Combine all sequences of a file into one multi-chain job, or split them into one job per sequence\n- Write a total_jobs.txt count next to the output directory for array job submission\n- Summarize IUPred3 disorder scores and predicted-structure confidence afterwards"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Convert FASTA files to AlphaFold3 job JSON files
    Convert(convert::ConvertArgs),

    /// Summarize IUPred3 disorder predictions
    Disorder(disorder::DisorderArgs),

    /// Summarize pLDDT and secondary structure of predicted models
    Structure(structure::StructureArgs),
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Tsv,
}
