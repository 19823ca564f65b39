use std::path::PathBuf;

use clap::Args;

use crate::parsing::stride::STRIDE_CODES;
use crate::summary::structure::{summarize_dir, StrideRunner, StructureReport, DEFAULT_OUTPUT};
use crate::summary::{write_csv, ColumnStats};

/// Arguments for the structure command
#[derive(Args)]
pub struct StructureArgs {
    /// Directory containing PDB files
    #[arg(required = true)]
    pub pdb_dir: PathBuf,

    /// Output CSV file
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Path to the STRIDE executable; secondary structure columns stay empty without it
    #[arg(long)]
    pub stride: Option<PathBuf>,
}

/// Execute the structure command
///
/// # Errors
///
/// Returns an error if the PDB directory cannot be listed or the results
/// cannot be written.
#[allow(clippy::needless_pass_by_value)]
pub fn run(args: StructureArgs, verbose: bool) -> anyhow::Result<()> {
    let runner = args.stride.as_ref().map(StrideRunner::new);
    if runner.is_none() && verbose {
        eprintln!("No STRIDE executable given; skipping secondary structure assignment");
    }

    let report = summarize_dir(&args.pdb_dir, runner.as_ref())?;
    print_summary(&report);

    write_csv(&args.output, &report.rows)?;
    println!("Results saved to: {}", args.output.display());
    Ok(())
}

fn print_summary(report: &StructureReport) {
    println!("\nProcessing Summary:");
    println!("Total files processed successfully: {}", report.rows.len());
    println!("Failed files: {}", report.failed.len());

    println!("\n--- pLDDT Stats ---");
    print_stats(report.plddt_stats());

    println!("\n--- STRIDE Secondary Structure Counts (summary) ---");
    for code in STRIDE_CODES {
        println!("{code} stats:");
        print_stats(report.code_stats(code));
    }
}

fn print_stats(stats: Option<ColumnStats>) {
    match stats {
        Some(s) => println!(
            "  count {}  mean {:.2}  min {:.2}  max {:.2}",
            s.count, s.mean, s.min, s.max
        ),
        None => println!("  no values"),
    }
}
