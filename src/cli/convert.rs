use std::path::PathBuf;

use clap::Args;

use crate::cli::OutputFormat;
use crate::core::types::{EmptySequencePolicy, GroupingMode};
use crate::jobs::run::{run as run_conversion, ConvertConfig, RunSummary};
use crate::parsing::fasta::DEFAULT_EXTENSIONS;

/// Arguments for the convert command
#[derive(Args)]
pub struct ConvertArgs {
    /// Input FASTA file or directory containing FASTA files
    #[arg(required = true)]
    pub input: PathBuf,

    /// Output directory for JSON files
    #[arg(short, long, required = true)]
    pub output: PathBuf,

    /// Model seeds for AlphaFold3
    #[arg(long, num_args = 1.., default_values_t = [1i64])]
    pub model_seeds: Vec<i64>,

    /// FASTA file extensions to process
    #[arg(long, num_args = 1.., default_values_t = DEFAULT_EXTENSIONS.map(String::from))]
    pub extensions: Vec<String>,

    /// Write one JSON file per sequence instead of one per FASTA file
    #[arg(long)]
    pub split: bool,

    /// Leave out sequences with no standard amino acids instead of writing them empty
    #[arg(long)]
    pub drop_empty: bool,
}

impl ConvertArgs {
    fn to_config(&self) -> ConvertConfig {
        ConvertConfig::new(&self.input, &self.output)
            .with_model_seeds(self.model_seeds.clone())
            .with_extensions(self.extensions.clone())
            .with_mode(GroupingMode::from_split_flag(self.split))
            .with_empty_policy(EmptySequencePolicy::from_drop_flag(self.drop_empty))
    }
}

/// Execute the convert command
///
/// # Errors
///
/// Returns an error if the input path is neither a file nor a directory, or
/// if output cannot be written.
#[allow(clippy::needless_pass_by_value)]
pub fn run(args: ConvertArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let config = args.to_config();

    if verbose {
        eprintln!(
            "Mode: {:?}, seeds: {:?}, extensions: {:?}",
            config.mode, config.model_seeds, config.extensions
        );
    }

    let summary = run_conversion(&config)?;

    match format {
        OutputFormat::Text => print_text_summary(&summary),
        OutputFormat::Json => print_json_summary(&summary)?,
        OutputFormat::Tsv => print_tsv_summary(&summary),
    }

    Ok(())
}

fn print_text_summary(summary: &RunSummary) {
    for job in &summary.jobs {
        println!("Created: {}", job.path.display());
        match summary.mode {
            GroupingMode::Split => {
                println!("  - Header: {}", job.labels.join(", "));
                println!("  - Sequence length: {}", job.sequence_lengths.iter().sum::<usize>());
            }
            GroupingMode::Combined => {
                println!("  - Job name: {}", job.name);
                println!("  - Sequences: {}", job.chain_ids.len());
                println!("  - Chain IDs: {}", job.chain_ids.join(", "));
            }
        }
    }

    if summary.files_skipped > 0 {
        println!("\nSkipped {} input file(s)", summary.files_skipped);
    }

    println!("\nProcessing complete!");
    println!(
        "Created {} JSON files in {}",
        summary.total_jobs(),
        summary.output_dir.display()
    );
    println!(
        "Created {} with total job count: {}",
        summary.total_jobs_path.display(),
        summary.total_jobs()
    );
}

fn print_json_summary(summary: &RunSummary) -> anyhow::Result<()> {
    let output = serde_json::json!({
        "output_dir": summary.output_dir.display().to_string(),
        "total_jobs": summary.total_jobs(),
        "total_jobs_file": summary.total_jobs_path.display().to_string(),
        "files_converted": summary.files_converted,
        "files_skipped": summary.files_skipped,
        "split": summary.mode == GroupingMode::Split,
        "jobs": summary.jobs.iter().map(|job| serde_json::json!({
            "name": job.name,
            "path": job.path.display().to_string(),
            "chain_ids": job.chain_ids,
            "labels": job.labels,
            "sequence_lengths": job.sequence_lengths,
        })).collect::<Vec<_>>(),
    });

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn print_tsv_summary(summary: &RunSummary) {
    println!("name\tpath\tchains\tlengths");
    for job in &summary.jobs {
        let lengths: Vec<String> = job.sequence_lengths.iter().map(ToString::to_string).collect();
        println!(
            "{}\t{}\t{}\t{}",
            job.name,
            job.path.display(),
            job.chain_ids.join(","),
            lengths.join(",")
        );
    }
}
