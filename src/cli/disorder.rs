use std::path::PathBuf;

use clap::Args;

use crate::summary::disorder::summarize_dir;
use crate::summary::write_csv;

/// Arguments for the disorder command
#[derive(Args)]
pub struct DisorderArgs {
    /// Directory containing IUPred3 result files (*.csv, tab-separated)
    #[arg(required = true)]
    pub input_dir: PathBuf,

    /// Path to output CSV file
    #[arg(required = true)]
    pub output_file: PathBuf,
}

/// Execute the disorder command
///
/// # Errors
///
/// Returns an error if the input directory cannot be listed or the summary
/// cannot be written.
#[allow(clippy::needless_pass_by_value)]
pub fn run(args: DisorderArgs, verbose: bool) -> anyhow::Result<()> {
    let report = summarize_dir(&args.input_dir)?;

    if verbose {
        eprintln!(
            "Summarized {} file(s), {} failed",
            report.rows.len(),
            report.failed.len()
        );
    }

    write_csv(&args.output_file, &report.rows)?;
    println!("Summary saved to {}", args.output_file.display());
    Ok(())
}
