use clap::Parser;
use tracing_subscriber::EnvFilter;

use af3_prep::cli;

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();

    // Initialize logging based on verbosity flag
    let filter = if cli.verbose {
        EnvFilter::new("af3_prep=debug,info")
    } else {
        EnvFilter::new("af3_prep=warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();

    match cli.command {
        cli::Commands::Convert(args) => {
            cli::convert::run(args, cli.format, cli.verbose)?;
        }
        cli::Commands::Disorder(args) => {
            cli::disorder::run(args, cli.verbose)?;
        }
        cli::Commands::Structure(args) => {
            cli::structure::run(args, cli.verbose)?;
        }
    }

    Ok(())
}
